//! # Slot Machine Core
//!
//! A three-reel slot machine and the exact analysis of its payout schedule.
//!
//! ## Components
//!
//! - [`symbol`] - Symbol labels and the pattern tokens payout rules are written in
//! - [`reel`] - Weighted reel strips and neighbour lookup
//! - [`rng`] - The randomness capability reel draws go through
//! - [`lookup`] - Three reels together: payline draw and the display lines around it
//! - [`payout`] - Payout rules and the first-match payout schedule
//! - [`defaults`] - The canonical reels and payout schedule
//! - [`machine`] - `SlotMachine::spin`
//! - [`analyzer`] - Exhaustive probability and expected return per rule
//! - [`tables`] - JSON table files for overriding the defaults
//!
//! ## Usage
//!
//! ```rust
//! use reelslots::slots::{analyzer, SlotMachine};
//!
//! let machine = SlotMachine::new();
//! let result = machine.spin(5).expect("positive bet");
//! println!("{} pays {}", result, result.payout);
//!
//! let summary = analyzer::summarize(analyzer::analyze(
//!     machine.payout_schedule(),
//!     machine.lookup_table(),
//! ));
//! println!("expected return {:.2}%", summary.total_return);
//! ```
//!
//! ## Spin Lifecycle
//!
//! 1. One stop is drawn per reel; those symbols form the payline
//! 2. The bottom line is the previous distinct symbol on each reel
//! 3. The top line is the next symbol differing from both the payline and the bottom line
//! 4. The payline alone is matched against the payout schedule, first match wins

pub mod analyzer;
pub mod defaults;
pub mod errors;
pub mod lookup;
pub mod machine;
pub mod payout;
pub mod reel;
pub mod rng;
pub mod symbol;
pub mod tables;

pub use errors::{ReelError, SlotError};
pub use lookup::{Line, LookupTable, REEL_COUNT};
pub use machine::{SlotMachine, SlotMachineBuilder, SpinResult};
pub use payout::{Payout, PayoutRule, PayoutSchedule};
pub use reel::Reel;
pub use rng::{IndexSource, RngSource, ScriptedSource};
pub use symbol::{Colour, PatternToken, Symbol};
