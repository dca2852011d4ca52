//! Moore-style partition refinement over a dense transition table.
//!
//! Classes start out split by the caller's accept/reject markers and are split
//! further until every member of a class moves into the same classes as the
//! class's first member on every column. One synthetic sink index, one past
//! the last state, stands for "no such state"; it behaves as a rejecting state
//! that loops to itself on every input.

use tracing::{debug, trace};

use crate::state::{State, StateFlags};
use crate::table::TransitionTable;

/// How states are grouped before refinement begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InitialPartition {
    /// Unmarked, accepting and rejecting states start in separate classes, so an
    /// accepting sink never merges with a rejecting one.
    #[default]
    Separated,
    /// Accepting and rejecting states share one class and are only told apart
    /// by their transitions.
    Merged,
}

impl InitialPartition {
    fn key(self, flags: StateFlags) -> usize {
        let accepting = usize::from(flags.is_accepting());
        let rejecting = usize::from(flags.is_rejecting());
        match self {
            Self::Separated => accepting | (rejecting << 1),
            Self::Merged => accepting | rejecting,
        }
    }
}

/// The fixed point of refinement: which class every state belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Indexed by state, with the sink as the last entry.
    class_of: Vec<usize>,
    classes: Vec<Vec<usize>>,
    passes: usize,
}

impl Partition {
    pub fn refine(states: &[State], table: &TransitionTable, initial: InitialPartition) -> Self {
        let sink = states.len();
        let keys = states
            .iter()
            .map(|st| initial.key(st.flags))
            .chain(std::iter::once(initial.key(StateFlags::REJECTING)));

        let mut slot_of_key = [None; 4];
        let mut classes: Vec<Vec<usize>> = Vec::new();
        let mut class_of = vec![0; sink + 1];
        for (index, key) in keys.enumerate() {
            let class = *slot_of_key[key].get_or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[class].push(index);
            class_of[index] = class;
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            // targets are classified against the partition as it stood when the pass began
            let before = class_of.clone();
            let mut class = 0;
            while class < classes.len() {
                let representative = classes[class][0];
                let mut split: Option<usize> = None;
                let mut j = 1;
                while j < classes[class].len() {
                    let member = classes[class][j];
                    if agree(table, &before, sink, representative, member) {
                        j += 1;
                        continue;
                    }
                    let target = *split.get_or_insert_with(|| {
                        classes.push(Vec::new());
                        classes.len() - 1
                    });
                    classes[class].remove(j);
                    classes[target].push(member);
                    class_of[member] = target;
                    changed = true;
                }
                if let Some(target) = split {
                    trace!(
                        "pass {passes}: {} states split from class {class} into {target}",
                        classes[target].len()
                    );
                }
                class += 1;
            }
        }

        debug!(
            "refined {} states into {} classes in {passes} passes",
            sink,
            classes.len()
        );
        Self {
            class_of,
            classes,
            passes,
        }
    }

    /// The class of a state, or of the sink at index `states.len()`.
    pub fn class_of(&self, index: usize) -> Option<usize> {
        self.class_of.get(index).copied()
    }

    pub fn classes(&self) -> &[Vec<usize>] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn sink(&self) -> usize {
        self.class_of.len() - 1
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The first real state inserted into `class`. `None` for a class holding
    /// only the sink.
    pub fn representative(&self, class: usize) -> Option<usize> {
        let sink = self.sink();
        self.classes
            .get(class)?
            .iter()
            .copied()
            .find(|&member| member != sink)
    }

    pub fn is_representative(&self, index: usize) -> bool {
        self.class_of(index)
            .and_then(|class| self.representative(class))
            == Some(index)
    }
}

fn target(table: &TransitionTable, sink: usize, state: usize, column: usize) -> usize {
    if state >= sink {
        return sink;
    }
    table
        .get(state, column)
        .map_or(sink, |to| (to as usize).min(sink))
}

fn agree(table: &TransitionTable, class_of: &[usize], sink: usize, lhs: usize, rhs: usize) -> bool {
    (0..table.columns()).all(|column| {
        class_of[target(table, sink, lhs, column)] == class_of[target(table, sink, rhs, column)]
    })
}
