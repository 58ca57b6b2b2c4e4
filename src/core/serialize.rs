//! Serialization module
//!
//! This module provides a [`Serialize`] trait which turns query variables
//! into the bytes sent as `query` node content.
//!
//! [`Serialize`]: trait.Serialize.html

use super::WaError;

/// Serialize values
///
/// This trait provides a [`serialize`] method for MEX query variables.
/// Implementation for every [`serde::Serialize`] type is provided by
/// [`providers::serialization_serde`].
///
/// [`serialize`]: #tymethod.serialize
/// [`providers::serialization_serde`]: crate::providers::serialization_serde
pub trait Serialize {
    /// Serialize the value
    ///
    /// # Errors
    /// Should return an [`WaError::Serialization`] if the value cannot be serialized.
    fn serialize(self) -> Result<Vec<u8>, WaError>;
}
