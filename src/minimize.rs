//! Shrinking a transition table to its minimal equivalent.

use tracing::debug;

use crate::compact::{compact, Compacted};
use crate::partition::{InitialPartition, Partition};
use crate::state::{State, StateFlags, StateId, Transition};
use crate::table::TransitionTable;
use crate::validate::validate;
use crate::{Error, Result};

/// Minimizes a table with the default [`Minimizer`].
///
/// The state at `start_index` (clamped to the last state) becomes state 0 of
/// the result. The input slice is left untouched.
pub fn minimize(states: &[State], start_index: usize) -> Vec<State> {
    Minimizer::default().minimize(states, start_index)
}

/// Configuration for a minimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Minimizer {
    initial_partition: InitialPartition,
    distinguish_defaults: bool,
}

impl Default for Minimizer {
    fn default() -> Self {
        Self {
            initial_partition: InitialPartition::Separated,
            distinguish_defaults: true,
        }
    }
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_partition(mut self, initial_partition: InitialPartition) -> Self {
        self.initial_partition = initial_partition;
        self
    }

    /// Whether default edges count as a separate input when comparing states.
    ///
    /// Without it only the observed symbols are compared, so states that differ
    /// only in where unlisted inputs lead may be merged.
    pub fn distinguish_defaults(mut self, yes: bool) -> Self {
        self.distinguish_defaults = yes;
        self
    }

    pub fn get_initial_partition(&self) -> InitialPartition {
        self.initial_partition
    }

    pub fn get_distinguish_defaults(&self) -> bool {
        self.distinguish_defaults
    }

    pub fn minimize(&self, states: &[State], start_index: usize) -> Vec<State> {
        if states.is_empty() {
            return Vec::new();
        }
        let compacted = compact(states, start_index);
        let table = TransitionTable::build(&compacted, self.distinguish_defaults);
        let partition = Partition::refine(&compacted.states, &table, self.initial_partition);
        let minimized = rewrite(compacted, &partition);
        debug!(
            "minimized {} states to {}",
            states.len(),
            minimized.len()
        );
        minimized
    }

    /// Like [`Minimizer::minimize`], but refuses tables that fail [`validate`]
    /// or whose start index is out of range.
    pub fn try_minimize(&self, states: &[State], start_index: usize) -> Result<Vec<State>> {
        validate(states)?;
        if !states.is_empty() && start_index >= states.len() {
            return Err(Error::StartIndexOutOfRange {
                index: start_index,
                len: states.len(),
            });
        }
        Ok(self.minimize(states, start_index))
    }
}

/// Relabels every state and target by its class and keeps one state per class.
///
/// Classes are numbered in the order of their representatives. Edges into a
/// class that holds only the sink point one past the last kept state.
fn rewrite(compacted: Compacted, partition: &Partition) -> Vec<State> {
    let mut renumber: Vec<Option<StateId>> = vec![None; partition.len()];
    let mut kept = 0;
    for index in 0..compacted.len() {
        if partition.is_representative(index) {
            if let Some(class) = partition.class_of(index) {
                renumber[class] = Some(kept);
                kept += 1;
            }
        }
    }
    let relabel = |index: StateId| {
        partition
            .class_of(index as usize)
            .and_then(|class| renumber[class])
            .unwrap_or(kept)
    };

    compacted
        .states
        .into_iter()
        .enumerate()
        .filter(|(index, _)| partition.is_representative(*index))
        .map(|(_, mut state)| {
            state.id = relabel(state.id);
            state.default_to = relabel(state.default_to);
            state.transitions = state
                .transitions
                .iter()
                .map(|tr| Transition::new(tr.input, relabel(tr.to)))
                .collect();
            state.flags =
                state.flags.semantic() | StateFlags::REACHABLE | StateFlags::REPRESENTATIVE;
            state
        })
        .collect()
}
