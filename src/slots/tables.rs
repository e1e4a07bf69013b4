//! JSON table files.
//!
//! Lookup table file: an array of three arrays of symbol labels.
//! Payout table file: an array of `{ "win": [..3 tokens..], "bet": 1, "payout": 2400, "message": "Jackpot!" }`.

use std::fs;
use std::path::Path;

use super::errors::SlotError;
use super::lookup::LookupTable;
use super::payout::{PayoutRule, PayoutSchedule};
use super::symbol::Symbol;

pub fn parse_lookup_table(json: &str, origin: &str) -> Result<LookupTable, SlotError> {
    match serde_json::from_str::<Vec<Vec<Symbol>>>(json) {
        Ok(strips) => LookupTable::from_symbols(strips),
        Err(source) => Err(SlotError::Parse {
            path: origin.to_string(),
            source,
        }),
    }
}

pub fn parse_payout_schedule(json: &str, origin: &str) -> Result<PayoutSchedule, SlotError> {
    match serde_json::from_str::<Vec<PayoutRule>>(json) {
        Ok(rules) => PayoutSchedule::new(rules),
        Err(source) => Err(SlotError::Parse {
            path: origin.to_string(),
            source,
        }),
    }
}

/// Load a lookup table from data/tables/lookup_table.json (or any other path).
pub fn load_lookup_table<P: AsRef<Path>>(path: P) -> Result<LookupTable, SlotError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_lookup_table(&contents, &path.display().to_string())
}

/// Load a payout schedule from data/tables/payout_table.json (or any other path).
pub fn load_payout_schedule<P: AsRef<Path>>(path: P) -> Result<PayoutSchedule, SlotError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_payout_schedule(&contents, &path.display().to_string())
}

pub fn lookup_table_to_json(table: &LookupTable) -> Result<String, SlotError> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn payout_schedule_to_json(schedule: &PayoutSchedule) -> Result<String, SlotError> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
