//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to implement
//! deserialization of the JSON payloads carried by MEX replies.

use super::WaError;

/// Trait for deserializing Rust data structures.
///
/// It is used by the [`dx`] modules to deserialize the data returned in the
/// `result` node of the reply.
///
/// # Examples
/// ```
/// use wa_newsletter::core::{Deserializer, WaError};
///
/// struct MyDeserializer;
///
/// impl Deserializer for MyDeserializer {
///    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, WaError>
///    where
///        T: for<'de> serde::Deserialize<'de>,
///    {
///         // ...
///         # unimplemented!()
///    }
/// }
/// ```
///
/// [`dx`]: ../dx/index.html
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, WaError>`.
    ///
    /// # Errors
    /// Should return an [`WaError::Deserialization`] if bytes don't match `T`.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, WaError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
