//! Payout rules and the ordered payout schedule.
//!
//! Rule order is precedence: a spin pays the first rule that matches it (and pays a
//! non-zero amount). More specific rules such as three red 7s must be listed before the
//! general ones that would shadow them, such as any three 7s.

use serde::{Deserialize, Serialize};

use super::errors::SlotError;
use super::lookup::REEL_COUNT;
use super::symbol::{PatternToken, Symbol};

/// One winning combination and what it pays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRule {
    pub win: [PatternToken; REEL_COUNT],
    /// Bet the payout is quoted against (the `1` in "1:2400").
    pub bet: u32,
    /// Credits paid per `bet` credits wagered; may be fractional.
    pub payout: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl PayoutRule {
    pub fn new<T: Into<PatternToken>>(
        win: [T; REEL_COUNT],
        bet: u32,
        payout: f64,
        message: impl Into<String>,
    ) -> Self {
        PayoutRule {
            win: win.map(Into::into),
            bet,
            payout,
            message: message.into(),
        }
    }

    /// Payout per credit wagered.
    pub fn multiplier(&self) -> f64 {
        self.payout / f64::from(self.bet)
    }

    /// Credits paid for `bet`, truncated toward zero.
    pub fn amount(&self, bet: u32) -> u64 {
        (f64::from(bet) * self.payout / f64::from(self.bet)) as u64
    }

    /// Does the payline satisfy this rule's pattern?
    pub fn matches(&self, spin: &[Symbol; REEL_COUNT]) -> bool {
        if !self.win.iter().zip(spin).all(|(token, s)| token.accepts(s)) {
            return false;
        }
        // Two adjacent "matching" positions pay only when exactly that pair matches;
        // a third identical symbol belongs to a three-of-a-kind rule instead.
        if self.win[0].is_matching()
            && self.win[1].is_matching()
            && (spin[0] != spin[1] || spin[0] == spin[2])
        {
            return false;
        }
        if self.win[1].is_matching()
            && self.win[2].is_matching()
            && (spin[1] != spin[2] || spin[1] == spin[0])
        {
            return false;
        }
        true
    }

    /// Pattern as text, e.g. `red 7 | white 7 | blue 7`.
    pub fn pattern(&self) -> String {
        self.win
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Outcome of evaluating a payline against a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payout {
    pub amount: u64,
    pub message: String,
    /// Position of the paying rule in the schedule.
    pub rule: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PayoutSchedule {
    rules: Vec<PayoutRule>,
}

impl PayoutSchedule {
    pub fn new(rules: Vec<PayoutRule>) -> Result<Self, SlotError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.bet == 0 {
                return Err(SlotError::InvalidRuleBet { rule: index });
            }
            if !rule.payout.is_finite() || rule.payout < 0.0 {
                return Err(SlotError::InvalidRulePayout {
                    rule: index,
                    payout: rule.payout,
                });
            }
            for token in rule.win.iter().filter(|t| t.is_suspicious_literal()) {
                log::warn!(
                    "payout rule {} uses unknown wildcard '{}'; it only matches that exact label",
                    index,
                    token
                );
            }
        }
        Ok(PayoutSchedule { rules })
    }

    pub fn rules(&self) -> &[PayoutRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose pattern matches, regardless of bet.
    pub fn first_match(&self, spin: &[Symbol; REEL_COUNT]) -> Option<(usize, &PayoutRule)> {
        self.rules.iter().enumerate().find(|(_, r)| r.matches(spin))
    }

    /// Scan the rules in order and pay the first match that is worth something at `bet`.
    /// No match pays zero with an empty message.
    pub fn resolve(&self, bet: u32, spin: &[Symbol; REEL_COUNT]) -> Payout {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(spin))
            .find_map(|(index, r)| {
                let amount = r.amount(bet);
                (amount > 0).then(|| Payout {
                    amount,
                    message: r.message.clone(),
                    rule: Some(index),
                })
            })
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a PayoutSchedule {
    type Item = &'a PayoutRule;
    type IntoIter = std::slice::Iter<'a, PayoutRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin(labels: [&str; 3]) -> [Symbol; 3] {
        labels.map(Symbol::from)
    }

    #[test]
    fn literal_rules_need_every_position() {
        let rule = PayoutRule::new(["3 bar", "3 bar", "3 bar"], 1, 40.0, "Three 3 bars!");
        assert!(rule.matches(&spin(["3 bar", "3 bar", "3 bar"])));
        assert!(!rule.matches(&spin(["3 bar", "3 bar", "2 bar"])));
        assert!(!rule.matches(&spin(["blank", "3 bar", "3 bar"])));
    }

    #[test]
    fn trailing_matching_pair_requires_first_to_differ() {
        let rule = PayoutRule::new(
            ["any", "matching non-blank", "matching non-blank"],
            1,
            1.5,
            "Two consecutive non-blanks!",
        );
        assert!(rule.matches(&spin(["blank", "red 7", "red 7"])));
        assert!(rule.matches(&spin(["1 bar", "red 7", "red 7"])));
        assert!(!rule.matches(&spin(["red 7", "red 7", "red 7"])));
        assert!(!rule.matches(&spin(["blank", "red 7", "blue 7"])));
        assert!(!rule.matches(&spin(["red 7", "blank", "blank"])));
    }

    #[test]
    fn fractional_payouts_truncate() {
        let rule = PayoutRule::new(["any", "any", "any"], 1, 1.5, "");
        assert_eq!(rule.amount(1), 1);
        assert_eq!(rule.amount(3), 4);
        let quoted = PayoutRule::new(["any", "any", "any"], 2, 5.0, "");
        assert_eq!(quoted.amount(3), 7);
    }

    #[test]
    fn first_match_wins() {
        let schedule = PayoutSchedule::new(vec![
            PayoutRule::new(["red 7", "red 7", "red 7"], 1, 1200.0, "Three red 7s!"),
            PayoutRule::new(["any 7", "any 7", "any 7"], 1, 50.0, "Three 7s!"),
        ])
        .unwrap();
        let p = schedule.resolve(1, &spin(["red 7", "red 7", "red 7"]));
        assert_eq!(
            (p.amount, p.message.as_str(), p.rule),
            (1200, "Three red 7s!", Some(0))
        );
        let p = schedule.resolve(2, &spin(["red 7", "blue 7", "red 7"]));
        assert_eq!((p.amount, p.rule), (100, Some(1)));
        assert_eq!(
            schedule.resolve(1, &spin(["blank", "red 7", "red 7"])),
            Payout::default()
        );
    }

    #[test]
    fn exact_ratios_pay_in_full() {
        let rule = PayoutRule::new(["any", "any", "any"], 49, 1.0, "Par");
        assert_eq!(rule.amount(49), 1);
        assert_eq!(rule.amount(98), 2);
        assert_eq!(rule.amount(48), 0);
        let schedule = PayoutSchedule::new(vec![rule]).unwrap();
        let p = schedule.resolve(49, &spin(["blank", "blank", "blank"]));
        assert_eq!((p.amount, p.message.as_str(), p.rule), (1, "Par", Some(0)));
    }

    #[test]
    fn first_match_ignores_the_bet() {
        let schedule = PayoutSchedule::new(vec![
            PayoutRule::new(["any", "blank", "blank"], 4, 1.0, "crumbs"),
            PayoutRule::new(["red 7", "red 7", "red 7"], 1, 1200.0, "Three red 7s!"),
            PayoutRule::new(["any 7", "any 7", "any 7"], 1, 50.0, "Three 7s!"),
        ])
        .unwrap();
        let (index, rule) = schedule
            .first_match(&spin(["red 7", "red 7", "red 7"]))
            .unwrap();
        assert_eq!((index, rule.message.as_str()), (1, "Three red 7s!"));
        let (index, rule) = schedule
            .first_match(&spin(["white 7", "red 7", "blue 7"]))
            .unwrap();
        assert_eq!((index, rule.message.as_str()), (2, "Three 7s!"));
        assert!(schedule
            .first_match(&spin(["red 7", "blank", "red 7"]))
            .is_none());
        // worth nothing at bet 1, still the first pattern to match
        let (index, rule) = schedule
            .first_match(&spin(["1 bar", "blank", "blank"]))
            .unwrap();
        assert_eq!((index, rule.amount(1)), (0, 0));
        assert_eq!(
            schedule.resolve(1, &spin(["1 bar", "blank", "blank"])),
            Payout::default()
        );
    }

    #[test]
    fn zero_value_match_falls_through() {
        let schedule = PayoutSchedule::new(vec![
            PayoutRule::new(["any", "any", "any"], 4, 1.0, "crumbs"),
            PayoutRule::new(["blank", "blank", "blank"], 1, 1.0, "All blanks!"),
        ])
        .unwrap();
        let p = schedule.resolve(1, &spin(["blank", "blank", "blank"]));
        assert_eq!((p.amount, p.rule), (1, Some(1)));
        assert_eq!(
            schedule.resolve(4, &spin(["blank", "blank", "blank"])).rule,
            Some(0)
        );
    }

    #[test]
    fn rejects_invalid_rules() {
        let err = PayoutSchedule::new(vec![PayoutRule::new(["any", "any", "any"], 0, 1.0, "")])
            .unwrap_err();
        assert!(matches!(err, SlotError::InvalidRuleBet { rule: 0 }));
        let err = PayoutSchedule::new(vec![
            PayoutRule::new(["any", "any", "any"], 1, 1.0, ""),
            PayoutRule::new(["any", "any", "any"], 1, f64::NAN, ""),
        ])
        .unwrap_err();
        assert!(matches!(err, SlotError::InvalidRulePayout { rule: 1, .. }));
    }

    #[test]
    fn rules_deserialize_from_table_json() {
        let json = r#"{
            "win": ["any red", "any white", "any blue"],
            "bet": 1,
            "payout": 20,
            "message": "Red, White, and Blue!"
        }"#;
        let rule: PayoutRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.pattern(), "any red | any white | any blue");
        assert_eq!(rule.payout, 20.0);
        assert!(rule.matches(&spin(["red 7", "2 bar", "3 bar"])));
    }
}
