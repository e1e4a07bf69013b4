//! The lookup table: one reel per payline position.

use serde::Serialize;

use super::errors::SlotError;
use super::reel::Reel;
use super::rng::IndexSource;
use super::symbol::Symbol;

/// Number of reels (and so the width of every payout pattern).
pub const REEL_COUNT: usize = 3;

/// One row across all reels: the stop index and the symbol showing on each reel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub indices: [usize; REEL_COUNT],
    pub symbols: [Symbol; REEL_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookupTable {
    reels: [Reel; REEL_COUNT],
}

impl LookupTable {
    pub fn new(reels: Vec<Reel>) -> Result<Self, SlotError> {
        match <[Reel; REEL_COUNT]>::try_from(reels) {
            Ok(reels) => Ok(LookupTable { reels }),
            Err(reels) => Err(SlotError::ReelCount {
                expected: REEL_COUNT,
                found: reels.len(),
            }),
        }
    }

    /// Validate raw strips, reporting which reel was rejected.
    pub fn from_symbols(strips: Vec<Vec<Symbol>>) -> Result<Self, SlotError> {
        let reels = strips
            .into_iter()
            .enumerate()
            .map(|(reel, symbols)| {
                Reel::new(symbols)
                    .map_err(|source| SlotError::InvalidReel { reel, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        LookupTable::new(reels)
    }

    pub fn from_labels<S: AsRef<str>>(strips: &[&[S]]) -> Result<Self, SlotError> {
        LookupTable::from_symbols(
            strips
                .iter()
                .map(|s| s.iter().map(|l| Symbol::new(l.as_ref())).collect())
                .collect(),
        )
    }

    pub fn reels(&self) -> &[Reel; REEL_COUNT] {
        &self.reels
    }

    /// Size of the full combination space (every stop on every reel).
    pub fn combinations(&self) -> u64 {
        self.reels.iter().map(|r| r.len() as u64).product()
    }

    /// Draw one stop per reel, independently.
    pub fn spin_payline(&self, source: &mut dyn IndexSource) -> Line {
        let indices: [usize; REEL_COUNT] =
            std::array::from_fn(|i| self.reels[i].draw(&mut *source).0);
        self.line_at(indices)
    }

    /// The row shown below the payline: the previous distinct symbol on each reel.
    pub fn previous_line(&self, payline: &[usize; REEL_COUNT]) -> Line {
        let indices = std::array::from_fn(|i| self.reels[i].previous_distinct(payline[i]).0);
        self.line_at(indices)
    }

    /// The row shown above the payline: the next symbol on each reel that differs from both
    /// the payline symbol and the previous row's symbol.
    pub fn next_line(
        &self,
        payline: &[usize; REEL_COUNT],
        previous: &[usize; REEL_COUNT],
    ) -> Line {
        let indices = std::array::from_fn(|i| {
            let reel = &self.reels[i];
            reel.next_distinct(payline[i], &reel.symbols()[previous[i]]).0
        });
        self.line_at(indices)
    }

    fn line_at(&self, indices: [usize; REEL_COUNT]) -> Line {
        let symbols = std::array::from_fn(|i| self.reels[i].symbols()[indices[i]].clone());
        Line { indices, symbols }
    }
}
