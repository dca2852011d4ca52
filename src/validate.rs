//! Strict structural checks for transition tables.

use rustc_hash::FxHashSet as HashSet;

use crate::state::{State, StateId};
use crate::{Error, Result};

/// Checks that ids are unique, that no state lists an input twice and that
/// every target names a state of the table.
///
/// [`crate::minimize`] tolerates all of these; this is for callers that would
/// rather fail early than rely on its fallbacks.
pub fn validate(states: &[State]) -> Result<()> {
    let mut ids: HashSet<StateId> = HashSet::default();
    for state in states {
        if !ids.insert(state.id) {
            return Err(Error::DuplicateStateId(state.id));
        }
    }
    for state in states {
        if !ids.contains(&state.default_to) {
            return Err(Error::DanglingTarget {
                state: state.id,
                target: state.default_to,
            });
        }
        let mut inputs = HashSet::default();
        for tr in &state.transitions {
            if !inputs.insert(tr.input) {
                return Err(Error::DuplicateTransition {
                    state: state.id,
                    input: tr.input,
                });
            }
            if !ids.contains(&tr.to) {
                return Err(Error::DanglingTarget {
                    state: state.id,
                    target: tr.to,
                });
            }
        }
    }
    Ok(())
}
