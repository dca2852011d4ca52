//! Dense state × symbol transition matrix.

use tracing::debug;

use crate::compact::Compacted;
use crate::state::StateId;

/// Row-major matrix where cell `(state, column)` is the state reached from
/// `state` on the symbol of `column`.
///
/// Columns `0..symbols` follow the alphabet's discovery order. With a wildcard
/// column, one more trailing column holds each state's default target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    cells: Vec<StateId>,
    rows: usize,
    symbols: usize,
    wildcard: bool,
}

impl TransitionTable {
    pub fn build(compacted: &Compacted, wildcard: bool) -> Self {
        let rows = compacted.len();
        let symbols = compacted.alphabet.len();
        let columns = symbols + usize::from(wildcard);
        let mut cells = Vec::with_capacity(rows * columns);
        for state in &compacted.states {
            let offset = cells.len();
            cells.resize(offset + columns, state.default_to);
            let row = &mut cells[offset..];
            // reversed so the first declared transition for a symbol wins
            for tr in state.transitions.iter().rev() {
                if let Some(column) = compacted.alphabet.column(tr.input) {
                    row[column] = tr.to;
                }
            }
        }
        debug!("built {rows} x {columns} transition table");
        Self {
            cells,
            rows,
            symbols,
            wildcard,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.symbols + usize::from(self.wildcard)
    }

    /// Number of columns backed by an observed input symbol.
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn row(&self, state: usize) -> Option<&[StateId]> {
        if state >= self.rows {
            return None;
        }
        let columns = self.columns();
        self.cells.get(state * columns..(state + 1) * columns)
    }

    pub fn get(&self, state: usize, column: usize) -> Option<StateId> {
        if column >= self.columns() {
            return None;
        }
        self.row(state).and_then(|row| row.get(column)).copied()
    }
}
