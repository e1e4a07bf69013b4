//! The slot machine: a lookup table and a payout schedule behind one `spin` call.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::defaults;
use super::errors::SlotError;
use super::lookup::{LookupTable, REEL_COUNT};
use super::payout::PayoutSchedule;
use super::rng::{IndexSource, RngSource};
use super::symbol::Symbol;

/// Result of a spin for UI/formatting by the caller.
///
/// Only the payline decides the payout; the top and bottom lines are what a three-row
/// window would show around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinResult {
    pub top_line: [Symbol; REEL_COUNT],
    pub payline: [Symbol; REEL_COUNT],
    pub bottom_line: [Symbol; REEL_COUNT],
    /// Stop index of the payline on each reel.
    #[serde(skip)]
    pub stops: [usize; REEL_COUNT],
    pub bet: u32,
    pub payout: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl SpinResult {
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

impl fmt::Display for SpinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spin{{Payline: {:?}, TopLine: {:?}, BottomLine: {:?}, Bet: {}, Payout: {}}}",
            self.payline.each_ref().map(Symbol::as_str),
            self.top_line.each_ref().map(Symbol::as_str),
            self.bottom_line.each_ref().map(Symbol::as_str),
            self.bet,
            self.payout
        )
    }
}

#[derive(Debug, Clone)]
pub struct SlotMachine {
    lookup_table: Arc<LookupTable>,
    payout_schedule: Arc<PayoutSchedule>,
}

impl SlotMachine {
    /// Machine with the default reels and payout schedule.
    pub fn new() -> Self {
        SlotMachine {
            lookup_table: defaults::lookup_table(),
            payout_schedule: defaults::payout_schedule(),
        }
    }

    pub fn builder() -> SlotMachineBuilder {
        SlotMachineBuilder::default()
    }

    pub fn lookup_table(&self) -> &LookupTable {
        &self.lookup_table
    }

    pub fn payout_schedule(&self) -> &PayoutSchedule {
        &self.payout_schedule
    }

    /// Spin with the calling thread's generator.
    pub fn spin(&self, bet: u32) -> Result<SpinResult, SlotError> {
        self.spin_with(bet, &mut RngSource::thread())
    }

    /// Spin drawing reel stops from `source`.
    pub fn spin_with(
        &self,
        bet: u32,
        source: &mut dyn IndexSource,
    ) -> Result<SpinResult, SlotError> {
        if bet == 0 {
            return Err(SlotError::InvalidBet);
        }
        let table = &self.lookup_table;
        let payline = table.spin_payline(source);
        let previous = table.previous_line(&payline.indices);
        let next = table.next_line(&payline.indices, &previous.indices);
        let payout = self.payout_schedule.resolve(bet, &payline.symbols);

        log::debug!(
            "slotmachine: spin bet={} payout={} stops={:?}",
            bet,
            payout.amount,
            payline.indices
        );

        Ok(SpinResult {
            top_line: next.symbols,
            payline: payline.symbols,
            bottom_line: previous.symbols,
            stops: payline.indices,
            bet,
            payout: payout.amount,
            message: payout.message,
        })
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a machine, falling back to the shared defaults for any table not supplied.
#[derive(Debug, Clone, Default)]
pub struct SlotMachineBuilder {
    lookup_table: Option<Arc<LookupTable>>,
    payout_schedule: Option<Arc<PayoutSchedule>>,
}

impl SlotMachineBuilder {
    pub fn lookup_table(mut self, table: impl Into<Arc<LookupTable>>) -> Self {
        self.lookup_table = Some(table.into());
        self
    }

    pub fn payout_schedule(mut self, schedule: impl Into<Arc<PayoutSchedule>>) -> Self {
        self.payout_schedule = Some(schedule.into());
        self
    }

    pub fn build(self) -> SlotMachine {
        SlotMachine {
            lookup_table: self.lookup_table.unwrap_or_else(defaults::lookup_table),
            payout_schedule: self
                .payout_schedule
                .unwrap_or_else(defaults::payout_schedule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::payout::PayoutRule;
    use crate::slots::rng::ScriptedSource;

    #[test]
    fn zero_bet_is_rejected() {
        let machine = SlotMachine::new();
        assert!(matches!(machine.spin(0), Err(SlotError::InvalidBet)));
    }

    #[test]
    fn scripted_jackpot() {
        // default strips: red 7 at 44 on reel 1, white 7 at 9 on reel 2, blue 7 at 27 on reel 3
        let machine = SlotMachine::new();
        let mut src = ScriptedSource::new([44, 9, 27]);
        let result = machine.spin_with(1, &mut src).unwrap();
        assert_eq!(result.payout, 2400);
        assert_eq!(result.message, "Jackpot!");
        assert_eq!(result.stops, [44, 9, 27]);
        let blank = Symbol::from("blank");
        assert_eq!(result.bottom_line, [blank.clone(), blank.clone(), blank]);
        assert!(result.is_win());
    }

    #[test]
    fn builder_overrides_only_what_is_given() {
        let rule = PayoutRule::new(["any", "any", "any"], 1, 3.0, "Anything!");
        let schedule = PayoutSchedule::new(vec![rule]).unwrap();
        let machine = SlotMachine::builder().payout_schedule(schedule).build();
        let shared = defaults::lookup_table();
        assert!(Arc::ptr_eq(&machine.lookup_table, &shared));
        let result = machine.spin(2).unwrap();
        assert_eq!(result.payout, 6);
        assert_eq!(result.message, "Anything!");
    }

    #[test]
    fn display_lists_lines() {
        let machine = SlotMachine::new();
        let result = machine
            .spin_with(1, &mut ScriptedSource::new([3, 2, 3]))
            .unwrap();
        assert_eq!(result.message, "All blanks!");
        let text = result.to_string();
        let payline = r#"Spin{Payline: ["blank", "blank", "blank"]"#;
        assert!(text.starts_with(payline), "{}", text);
        assert!(text.ends_with("Bet: 1, Payout: 1}"));
    }
}
