use thiserror::Error;

use super::symbol::Symbol;

/// Problems with a single reel strip.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReelError {
    /// A reel must hold at least one symbol.
    #[error("reel has no symbols")]
    Empty,

    /// Neighbour lookup needs a second distinct symbol to stop on.
    #[error("reel needs 2 distinct symbols but only has '{0}'")]
    SingleSymbol(Symbol),
}

/// Errors raised while building or loading a slot machine.
///
/// Everything here is a construction-time failure; spinning and analysis never fail on a
/// validated machine except for a zero bet.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Reel at position `reel` failed validation.
    #[error("invalid reel {reel}: {source}")]
    InvalidReel {
        reel: usize,
        #[source]
        source: ReelError,
    },

    /// The lookup table must have one reel per pattern position.
    #[error("lookup table must have exactly {expected} reels, found {found}")]
    ReelCount { expected: usize, found: usize },

    /// Rule bet denominators must be positive.
    #[error("payout rule {rule} has a zero bet")]
    InvalidRuleBet { rule: usize },

    /// Rule payouts must be finite and non-negative.
    #[error("payout rule {rule} has an invalid payout {payout}")]
    InvalidRulePayout { rule: usize, payout: f64 },

    /// Spins require a positive bet.
    #[error("bet must be a positive number of credits")]
    InvalidBet,

    /// Wrapper around IO errors while reading or writing table files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A table could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
