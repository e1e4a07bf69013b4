//! The canonical machine: three 64-stop reels and a 17-rule payout schedule.
//!
//! Half of every strip is blank. The schedule lists specific combinations ahead of the
//! general ones that would otherwise shadow them.

use std::sync::{Arc, OnceLock};

use super::lookup::LookupTable;
use super::payout::{PayoutRule, PayoutSchedule};

#[rustfmt::skip]
const REEL1: [&str; 64] = [
    "2 bar", "2 bar", "2 bar", "blank", "blank", "3 bar", "3 bar", "blank",
    "blank", "blank", "white 7", "white 7", "white 7", "white 7", "white 7", "white 7",
    "blank", "blank", "blank", "1 bar", "1 bar", "1 bar", "blank", "blank",
    "blank", "blue 7", "blue 7", "blue 7", "blue 7", "blue 7", "blue 7", "blank",
    "blank", "blank", "2 bar", "2 bar", "blank", "blank", "3 bar", "blank",
    "blank", "blank", "blank", "blank", "red 7", "blank", "blank", "blank",
    "blank", "blank", "3 bar", "3 bar", "3 bar", "blank", "blank", "2 bar",
    "2 bar", "blank", "blank", "1 bar", "1 bar", "1 bar", "blank", "blank",
];

#[rustfmt::skip]
const REEL2: [&str; 64] = [
    "2 bar", "2 bar", "blank", "blank", "3 bar", "3 bar", "blank", "blank",
    "blank", "white 7", "blank", "blank", "blank", "1 bar", "1 bar", "1 bar",
    "1 bar", "blank", "blank", "blank", "blue 7", "blue 7", "blue 7", "blue 7",
    "blue 7", "blue 7", "blue 7", "blank", "blank", "blank", "2 bar", "2 bar",
    "blank", "blank", "3 bar", "3 bar", "blank", "blank", "blank", "blank",
    "blank", "red 7", "red 7", "red 7", "blank", "blank", "blank", "blank",
    "blank", "3 bar", "3 bar", "3 bar", "blank", "blank", "2 bar", "2 bar",
    "blank", "blank", "1 bar", "1 bar", "1 bar", "1 bar", "blank", "blank",
];

#[rustfmt::skip]
const REEL3: [&str; 64] = [
    "2 bar", "2 bar", "2 bar", "blank", "blank", "3 bar", "blank", "blank",
    "blank", "white 7", "white 7", "white 7", "white 7", "white 7", "white 7", "white 7",
    "blank", "blank", "blank", "1 bar", "1 bar", "1 bar", "1 bar", "1 bar",
    "blank", "blank", "blank", "blue 7", "blank", "blank", "blank", "2 bar",
    "2 bar", "2 bar", "blank", "blank", "3 bar", "blank", "blank", "blank",
    "blank", "blank", "red 7", "blank", "blank", "blank", "blank", "blank",
    "3 bar", "3 bar", "3 bar", "blank", "blank", "2 bar", "2 bar", "2 bar",
    "blank", "blank", "1 bar", "1 bar", "1 bar", "1 bar", "blank", "blank",
];

/// `(pattern, bet, payout, message)` in precedence order.
#[rustfmt::skip]
const PAYOUTS: [([&str; 3], u32, f64, &str); 17] = [
    (["red 7", "white 7", "blue 7"], 1, 2400.0, "Jackpot!"),
    (["red 7", "red 7", "red 7"], 1, 1200.0, "Three red 7s!"),
    (["white 7", "white 7", "white 7"], 1, 200.0, "Three white 7s!"),
    (["blue 7", "blue 7", "blue 7"], 1, 150.0, "Three blue 7s!"),
    (["any 7", "any 7", "any 7"], 1, 50.0, "Three 7s!"),
    (["1 bar", "2 bar", "3 bar"], 1, 50.0, "Bar 1, bar 2, bar 3!"),
    (["3 bar", "3 bar", "3 bar"], 1, 40.0, "Three 3 bars!"),
    (["2 bar", "2 bar", "2 bar"], 1, 25.0, "Three 2 bars!"),
    (["any red", "any white", "any blue"], 1, 20.0, "Red, White, and Blue!"),
    (["1 bar", "1 bar", "1 bar"], 1, 10.0, "All 1 bars!"),
    (["any bar", "any bar", "any bar"], 1, 5.0, "All bars!"),
    (["any red", "any red", "any red"], 1, 2.0, "All red!"),
    (["any white", "any white", "any white"], 1, 2.0, "All white!"),
    (["any blue", "any blue", "any blue"], 1, 2.0, "All blue!"),
    (["matching non-blank", "matching non-blank", "any"], 1, 1.5, "Two consecutive non-blanks!"),
    (["any", "matching non-blank", "matching non-blank"], 1, 1.5, "Two consecutive non-blanks!"),
    (["blank", "blank", "blank"], 1, 1.0, "All blanks!"),
];

static LOOKUP_TABLE: OnceLock<Arc<LookupTable>> = OnceLock::new();
static PAYOUT_SCHEDULE: OnceLock<Arc<PayoutSchedule>> = OnceLock::new();

/// Shared handle to the default reels.
pub fn lookup_table() -> Arc<LookupTable> {
    LOOKUP_TABLE
        .get_or_init(|| {
            Arc::new(
                LookupTable::from_labels(&[&REEL1[..], &REEL2[..], &REEL3[..]])
                    .expect("default reels are valid"),
            )
        })
        .clone()
}

/// Shared handle to the default payout schedule.
pub fn payout_schedule() -> Arc<PayoutSchedule> {
    PAYOUT_SCHEDULE
        .get_or_init(|| {
            let rules = PAYOUTS
                .iter()
                .map(|&(win, bet, pay, msg)| PayoutRule::new(win, bet, pay, msg))
                .collect();
            let schedule = PayoutSchedule::new(rules).expect("valid default payouts");
            Arc::new(schedule)
        })
        .clone()
}
