//! Pruning unreachable states and renumbering the survivors densely.

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use tracing::{debug, warn};

use crate::alphabet::Alphabet;
use crate::state::{State, StateFlags, StateId, Transition};

/// The reachable part of a transition table.
///
/// Every id and target in `states` is a position in `states`. Targets that
/// named no state in the input are set to [`Compacted::sink`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compacted {
    pub states: Vec<State>,
    pub alphabet: Alphabet,
}

impl Compacted {
    /// The synthetic "no such state" index, one past the last state.
    pub fn sink(&self) -> StateId {
        self.states.len() as StateId
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Breadth-first walk from `start_index` over default and explicit edges.
///
/// The start state is always compacted index 0; other states are numbered in
/// the order an edge first points at them, default edge before explicit ones.
/// An out-of-range `start_index` is clamped to the last state. When a state
/// lists an input more than once, only the first transition is followed and
/// kept.
pub fn compact(states: &[State], start_index: usize) -> Compacted {
    if states.is_empty() {
        return Compacted::default();
    }
    let start_index = start_index.min(states.len() - 1);
    let mut working = states.to_vec();
    working.swap(0, start_index);
    for state in &mut working {
        state.transitions = first_per_input(&state.transitions);
    }

    // when ids repeat, the first slot carrying the id wins
    let mut slot_of: HashMap<StateId, usize> = HashMap::default();
    for (slot, state) in working.iter().enumerate() {
        slot_of.entry(state.id).or_insert(slot);
    }

    let mut compacted_of: Vec<Option<StateId>> = vec![None; working.len()];
    compacted_of[0] = Some(0);
    let mut visit: Vec<usize> = vec![0];
    let mut alphabet = Alphabet::new();

    let mut next = 0;
    while next < visit.len() {
        let state = &working[visit[next]];
        next += 1;
        let edges = std::iter::once(state.default_to)
            .chain(state.transitions.iter().map(|tr| tr.to));
        for target in edges {
            match slot_of.get(&target) {
                Some(&slot) => {
                    if compacted_of[slot].is_none() {
                        compacted_of[slot] = Some(visit.len() as StateId);
                        visit.push(slot);
                    }
                }
                None => warn!("state {} points to missing state {}", state.id, target),
            }
        }
        for tr in &state.transitions {
            alphabet.insert(tr.input);
        }
    }

    let sink = visit.len() as StateId;
    let resolve = |id: StateId| {
        slot_of
            .get(&id)
            .and_then(|&slot| compacted_of[slot])
            .unwrap_or(sink)
    };

    let mut slots: Vec<Option<State>> = working.into_iter().map(Some).collect();
    let mut reachable = Vec::with_capacity(visit.len());
    for (index, &slot) in visit.iter().enumerate() {
        let Some(mut state) = slots[slot].take() else {
            continue;
        };
        state.id = index as StateId;
        state.default_to = resolve(state.default_to);
        state.transitions = state
            .transitions
            .iter()
            .map(|tr| Transition::new(tr.input, resolve(tr.to)))
            .collect();
        state.flags = state.flags.semantic() | StateFlags::REACHABLE;
        reachable.push(state);
    }

    debug!(
        "compacted {} of {} states, {} input symbols",
        reachable.len(),
        states.len(),
        alphabet.len()
    );
    Compacted {
        states: reachable,
        alphabet,
    }
}

fn first_per_input(transitions: &[Transition]) -> Vec<Transition> {
    let mut seen = HashSet::default();
    transitions
        .iter()
        .copied()
        .filter(|tr| seen.insert(tr.input))
        .collect()
}
