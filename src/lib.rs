//! # DFA_Minimize
//!
//! `dfa_minimize` crate shrinks a deterministic transition table to the smallest
//! table that classifies every input the same way.
//!
//! ```
//! use dfa_minimize::{minimize, State, StateFlags};
//!
//! let states = vec![
//!     State::new(0, 1, StateFlags::NONE),
//!     State::new(1, 1, StateFlags::ACCEPTING),
//!     State::new(2, 1, StateFlags::ACCEPTING),
//! ];
//! let minimized = minimize(&states, 0);
//! assert_eq!(minimized.len(), 2);
//! ```

pub mod alphabet;
pub mod codec;
pub mod compact;
pub mod error;
pub mod minimize;
pub mod partition;
pub mod state;
pub mod table;
pub mod validate;

pub use error::{Error, Result};
pub use minimize::{minimize, Minimizer};
pub use partition::InitialPartition;
pub use state::{State, StateFlags, StateId, Symbol, Transition};
pub use validate::validate;
