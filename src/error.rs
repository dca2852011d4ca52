//! The Errors that may occur within the crate.

use thiserror::Error;

use crate::state::{StateId, Symbol};

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    // Table Errors
    #[error("State id {0} is used by more than one state")]
    DuplicateStateId(StateId),
    #[error("State {state} has more than one transition on input {input}")]
    DuplicateTransition { state: StateId, input: Symbol },
    #[error("State {state} points to missing state {target}")]
    DanglingTarget { state: StateId, target: StateId },
    #[error("Start index {index} is out of range for {len} states")]
    StartIndexOutOfRange { index: usize, len: usize },
    // Codec Errors
    #[error("Failed to encode state table: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("Failed to decode state table: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl Error {
    pub fn is_malformed_table(&self) -> bool {
        matches!(
            self,
            Self::DuplicateStateId(_)
                | Self::DuplicateTransition { .. }
                | Self::DanglingTarget { .. }
                | Self::StartIndexOutOfRange { .. }
        )
    }
}
