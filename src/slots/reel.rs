//! A single reel strip.
//!
//! Duplicates on a strip are the weighting: a symbol printed on 6 of 64 stops comes up
//! 6/64 of the time. Strips are validated once and never change afterwards.

use serde::Serialize;
use std::collections::BTreeSet;

use super::errors::ReelError;
use super::rng::IndexSource;
use super::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reel {
    symbols: Vec<Symbol>,
}

impl Reel {
    /// Build a reel, rejecting empty strips and strips with a single repeated symbol.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, ReelError> {
        let first = symbols.first().ok_or(ReelError::Empty)?;
        if symbols.iter().all(|s| s == first) {
            return Err(ReelError::SingleSymbol(first.clone()));
        }
        Ok(Reel { symbols })
    }

    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, ReelError> {
        Reel::new(labels.iter().map(|l| Symbol::new(l.as_ref())).collect())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed reel.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn distinct_symbols(&self) -> BTreeSet<&Symbol> {
        self.symbols.iter().collect()
    }

    /// Number of stops showing `symbol`.
    pub fn frequency(&self, symbol: &Symbol) -> usize {
        self.symbols.iter().filter(|s| *s == symbol).count()
    }

    /// Pick a stop uniformly at random.
    pub fn draw(&self, source: &mut dyn IndexSource) -> (usize, &Symbol) {
        let index = source.next_index(self.symbols.len());
        (index, &self.symbols[index])
    }

    /// Walk backwards (wrapping) from `index` to the first stop whose symbol differs from
    /// the one at `index`.
    pub fn previous_distinct(&self, index: usize) -> (usize, &Symbol) {
        let len = self.symbols.len();
        let current = &self.symbols[index];
        (1..len)
            .map(|step| (index + len - step) % len)
            .find(|&i| self.symbols[i] != *current)
            .map(|i| (i, &self.symbols[i]))
            // unreachable for a validated reel; stay put rather than spin forever
            .unwrap_or((index, current))
    }

    /// Walk forwards (wrapping) from `index` to the first stop whose symbol differs from
    /// both the one at `index` and `exclude`.
    ///
    /// A reel with only two distinct symbols cannot satisfy both constraints; the walk then
    /// settles for the first stop that differs from the one at `index`.
    pub fn next_distinct(&self, index: usize, exclude: &Symbol) -> (usize, &Symbol) {
        let symbols = &self.symbols;
        let len = symbols.len();
        let current = &symbols[index];
        let forward = || (1..len).map(move |step| (index + step) % len);
        forward()
            .find(|&i| symbols[i] != *current && symbols[i] != *exclude)
            .or_else(|| forward().find(|&i| symbols[i] != *current))
            .map(|i| (i, &symbols[i]))
            .unwrap_or((index, current))
    }
}

impl<'a> IntoIterator for &'a Reel {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
