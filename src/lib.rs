//! # Reelslots - Three-Reel Slot Machine Simulator
//!
//! Reelslots simulates a classic three-reel slot machine and computes the exact odds of its
//! payout schedule.
//!
//! ## Features
//!
//! - **Weighted Reels**: 64-stop strips where repeated symbols carry the weighting
//! - **Three-Row Display**: Payline plus the distinct neighbours shown above and below it
//! - **Wildcard Payouts**: Exact, `any 7`, `any bar`, colour families and matching-pair rules
//! - **Exact Analysis**: Exhaustive enumeration of every reel combination per payout rule
//! - **Overridable Tables**: Reels and payout rules can be replaced from JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use reelslots::slots::SlotMachine;
//!
//! let machine = SlotMachine::new();
//! let result = machine.spin(1).expect("positive bet");
//! if result.is_win() {
//!     println!("{}: {}", result.message, result.payout);
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`slots`] - Reels, payout schedule, slot machine and probability analyzer
//! - [`config`] - Configuration loading and defaults
//! - [`report`] - Text rendering of spins and analysis reports
//!
//! See `src/main.rs` for the command line front end.

pub mod config;
pub mod report;
pub mod slots;
