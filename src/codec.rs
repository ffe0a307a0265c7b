//! CBOR round-trip for persisted highlight state.
//!
//! Offsets are plain integers on the wire; round-trip fidelity is exact.

use crate::error::{SerializationError, SerializationResult};
use crate::models::HighlightState;

/// Encode a state record to CBOR bytes.
///
/// # Errors
///
/// Returns an error if CBOR encoding fails
pub fn encode_state(state: &HighlightState) -> SerializationResult<Vec<u8>> {
    serde_cbor::to_vec(state)
        .map_err(|err| SerializationError::serialization_failed(err.to_string()))
}

/// Decode a state record from CBOR bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid encoded state
pub fn decode_state(data: &[u8]) -> SerializationResult<HighlightState> {
    serde_cbor::from_slice(data)
        .map_err(|err| SerializationError::deserialization_failed(err.to_string()))
}
