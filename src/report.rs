//! Text rendering for the CLI: the payout analysis table, single spins and spin tallies.

use serde::Serialize;
use std::fmt::Write;

use crate::slots::analyzer::AnalysisSummary;
use crate::slots::{SpinResult, Symbol};

/// Render the analysis as comma separated rows.
///
/// Rules that never match are left out of the rows but still count toward the totals.
pub fn render_analysis(summary: &AnalysisSummary) -> String {
    let mut out = String::from("Spin, Matches, Payout, Probability, Return\n");
    for record in summary.records.iter().filter(|r| r.matches != 0) {
        let _ = writeln!(
            out,
            "{}, {}, {}:{}, {:.4}%, {:.4}%",
            record.message,
            record.matches,
            record.bet,
            record.payout,
            record.probability,
            record.expected_return
        );
    }
    let _ = writeln!(
        out,
        "\nWin,,, {:.2}%, {:.2}%",
        summary.total_probability, summary.total_return
    );
    out
}

fn line(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| format!("{:^9}", s.as_str()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Three-row window with the payline marked.
pub fn render_spin(result: &SpinResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}", line(&result.top_line));
    let _ = writeln!(out, "> {} <", line(&result.payline));
    let _ = writeln!(out, "  {}", line(&result.bottom_line));
    if result.is_win() {
        let _ = write!(
            out,
            "{} Bet {}, won {}",
            result.message, result.bet, result.payout
        );
    } else {
        let _ = write!(out, "No win. Bet {}", result.bet);
    }
    out
}

/// Running totals over a batch of spins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpinTally {
    pub spins: u64,
    pub wins: u64,
    pub wagered: u64,
    pub paid: u64,
}

impl SpinTally {
    pub fn record(&mut self, result: &SpinResult) {
        self.spins += 1;
        self.wagered += u64::from(result.bet);
        self.paid += result.payout;
        if result.is_win() {
            self.wins += 1;
        }
    }

    /// Observed payback as a percentage of the amount wagered.
    pub fn observed_return(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.paid as f64 / self.wagered as f64 * 100.0
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Spins: {}, Wins: {}, Wagered: {}, Paid: {}, Return: {:.2}%",
            self.spins,
            self.wins,
            self.wagered,
            self.paid,
            self.observed_return()
        )
    }
}
