//! The observed input alphabet of a transition table.

use rustc_hash::FxHashMap as HashMap;

use crate::state::Symbol;

/// Distinct input symbols in first-sight order.
///
/// A symbol's column in the dense table is its position here, independent of
/// its raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
    columns: HashMap<Symbol, usize>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `symbol` and returns its column.
    pub fn insert(&mut self, symbol: Symbol) -> usize {
        let next = self.symbols.len();
        let column = *self.columns.entry(symbol).or_insert(next);
        if column == next {
            self.symbols.push(symbol);
        }
        column
    }

    pub fn column(&self, symbol: Symbol) -> Option<usize> {
        self.columns.get(&symbol).copied()
    }

    pub fn symbol(&self, column: usize) -> Option<Symbol> {
        self.symbols.get(column).copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut alphabet = Self::new();
        for symbol in iter {
            alphabet.insert(symbol);
        }
        alphabet
    }
}
