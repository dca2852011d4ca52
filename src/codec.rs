//! Binary encoding of state tables, for storing compiled tables ahead of time.

use bincode::config;

use crate::state::State;
use crate::Result;

pub fn encode_states(states: &[State]) -> Result<Vec<u8>> {
    Ok(bincode::encode_to_vec(states, config::standard())?)
}

pub fn decode_states(binary_data: &[u8]) -> Result<Vec<State>> {
    let (states, _): (Vec<State>, usize) =
        bincode::decode_from_slice(binary_data, config::standard())?;
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize;
    use crate::state::StateFlags;

    #[test_log::test]
    fn minimized_table_survives_storage() {
        let states = vec![
            State::new(0, 1, StateFlags::NONE).on(48, 2).on(49, 3),
            State::new(1, 1, StateFlags::REJECTING),
            State::new(2, 2, StateFlags::ACCEPTING),
            State::new(3, 3, StateFlags::ACCEPTING),
        ];
        let minimized = minimize(&states, 0);
        let binary_data = encode_states(&minimized).unwrap();
        assert_eq!(decode_states(&binary_data).unwrap(), minimized);
    }

    #[test_log::test]
    fn truncated_data_is_an_error() {
        let states = vec![State::new(0, 0, StateFlags::ACCEPTING).on(1, 0)];
        let binary_data = encode_states(&states).unwrap();
        let err = decode_states(&binary_data[..binary_data.len() - 1]).unwrap_err();
        assert!(matches!(err, crate::Error::Decode(_)));
        assert!(!err.is_malformed_table());
    }
}
