//! Exact payout probabilities by exhaustive enumeration.
//!
//! Every stop on every reel is its own enumeration point, so a symbol printed six times on
//! a strip is weighted six times. With the default 64-stop reels that is 262,144
//! combinations per rule.
//!
//! Two attribution modes:
//! - [`analyze`] counts each rule on its own. A combination matched by several rules is
//!   counted for each of them, so the totals over-state the real win rate where rules
//!   shadow one another.
//! - [`analyze_first_match`] credits each combination only to the rule a spin would pay,
//!   following the schedule's first-match precedence.

use serde::Serialize;

use super::lookup::{LookupTable, REEL_COUNT};
use super::payout::{PayoutRule, PayoutSchedule};
use super::symbol::Symbol;

/// Per-rule analysis output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityRecord {
    pub pattern: String,
    pub message: String,
    pub bet: u32,
    pub payout: f64,
    pub matches: u64,
    pub combinations: u64,
    /// Percentage of all combinations matching the rule.
    pub probability: f64,
    /// Percentage of the wager returned through this rule.
    pub expected_return: f64,
}

impl ProbabilityRecord {
    fn new(rule: &PayoutRule, matches: u64, combinations: u64) -> Self {
        let ratio = if combinations == 0 {
            0.0
        } else {
            matches as f64 / combinations as f64
        };
        ProbabilityRecord {
            pattern: rule.pattern(),
            message: rule.message.clone(),
            bet: rule.bet,
            payout: rule.payout,
            matches,
            combinations,
            probability: ratio * 100.0,
            expected_return: rule.multiplier() * ratio * 100.0,
        }
    }
}

/// Records plus schedule-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub combinations: u64,
    pub total_probability: f64,
    pub total_return: f64,
    pub records: Vec<ProbabilityRecord>,
}

/// Visit every combination of stops, reel 1 slowest.
fn for_each_combination(table: &LookupTable, mut visit: impl FnMut(&[Symbol; REEL_COUNT])) {
    let [r1, r2, r3] = table.reels();
    // one buffer reused for every combination; clone_from keeps the label allocations
    let mut spin: [Symbol; REEL_COUNT] = std::array::from_fn(|_| Symbol::new(""));
    for s1 in r1 {
        spin[0].clone_from(s1);
        for s2 in r2 {
            spin[1].clone_from(s2);
            for s3 in r3 {
                spin[2].clone_from(s3);
                visit(&spin);
            }
        }
    }
}

/// Count, for one rule, how many combinations its pattern matches.
pub fn count_matches(rule: &PayoutRule, table: &LookupTable) -> u64 {
    let mut matches = 0u64;
    for_each_combination(table, |spin| {
        if rule.matches(spin) {
            matches += 1;
        }
    });
    matches
}

/// Analyze every rule of `schedule` independently against `table`.
pub fn analyze(schedule: &PayoutSchedule, table: &LookupTable) -> Vec<ProbabilityRecord> {
    let combinations = table.combinations();
    schedule
        .rules()
        .iter()
        .map(|rule| {
            let matches = count_matches(rule, table);
            log::trace!("analyzer: '{}' matched {}", rule.pattern(), matches);
            ProbabilityRecord::new(rule, matches, combinations)
        })
        .collect()
}

/// Analyze the schedule with each combination credited to the rule that would pay it at a
/// one-credit bet. Combinations nothing pays are not counted anywhere.
pub fn analyze_first_match(
    schedule: &PayoutSchedule,
    table: &LookupTable,
) -> Vec<ProbabilityRecord> {
    let combinations = table.combinations();
    let mut counts = vec![0u64; schedule.len()];
    for_each_combination(table, |spin| {
        if let Some(rule) = schedule.resolve(1, spin).rule {
            counts[rule] += 1;
        }
    });
    schedule
        .rules()
        .iter()
        .zip(counts)
        .map(|(rule, n)| ProbabilityRecord::new(rule, n, combinations))
        .collect()
}

/// Sum probabilities and returns across all records.
pub fn summarize(records: Vec<ProbabilityRecord>) -> AnalysisSummary {
    let combinations = records.first().map(|r| r.combinations).unwrap_or(0);
    let total_probability = records.iter().map(|r| r.probability).sum();
    let total_return = records.iter().map(|r| r.expected_return).sum();
    AnalysisSummary {
        combinations,
        total_probability,
        total_return,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> LookupTable {
        LookupTable::from_labels(&[
            &["blank", "red 7", "blank", "1 bar"][..],
            &["blank", "red 7"][..],
            &["red 7", "blank", "blank"][..],
        ])
        .unwrap()
    }

    #[test]
    fn counts_positions_not_symbols() {
        let table = small_table();
        let blanks = PayoutRule::new(["blank", "blank", "blank"], 1, 1.0, "All blanks!");
        // 2 blanks x 1 blank x 2 blanks
        assert_eq!(count_matches(&blanks, &table), 4);
        let sevens = PayoutRule::new(["any 7", "any 7", "any 7"], 1, 50.0, "Three 7s!");
        assert_eq!(count_matches(&sevens, &table), 1);
    }

    #[test]
    fn record_percentages() {
        let table = small_table();
        let schedule = PayoutSchedule::new(vec![PayoutRule::new(
            ["blank", "blank", "blank"],
            2,
            3.0,
            "All blanks!",
        )])
        .unwrap();
        let records = analyze(&schedule, &table);
        let r = &records[0];
        assert_eq!((r.matches, r.combinations), (4, 24));
        assert!((r.probability - 100.0 * 4.0 / 24.0).abs() < 1e-9);
        assert!((r.expected_return - 1.5 * 100.0 * 4.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn first_match_never_double_counts() {
        let table = small_table();
        let schedule = PayoutSchedule::new(vec![
            PayoutRule::new(["red 7", "red 7", "red 7"], 1, 100.0, "Three red 7s!"),
            PayoutRule::new(["any 7", "any 7", "any 7"], 1, 50.0, "Three 7s!"),
            PayoutRule::new(["any", "any", "any"], 1, 1.0, "Anything"),
        ])
        .unwrap();
        let independent = summarize(analyze(&schedule, &table));
        let exclusive = summarize(analyze_first_match(&schedule, &table));
        let counts: Vec<u64> = exclusive.records.iter().map(|r| r.matches).collect();
        assert_eq!(counts, vec![1, 0, 23]);
        assert_eq!(counts.iter().sum::<u64>(), exclusive.combinations);
        assert!(independent.total_probability > exclusive.total_probability);
        assert!((exclusive.total_probability - 100.0).abs() < 1e-9);
    }

    #[test]
    fn summarize_empty() {
        let summary = summarize(Vec::new());
        assert_eq!(summary.combinations, 0);
        assert_eq!(summary.total_probability, 0.0);
    }
}
