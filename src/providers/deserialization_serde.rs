//! Serde implementation for the [`Deserializer`] trait.
//!
//! This module provides a `serde` deserializer for JSON carried in MEX
//! replies.
//!
//! # Examples
//! ```
//! use wa_newsletter::core::Deserializer as _;
//! use wa_newsletter::providers::deserialization_serde::DeserializerSerde;
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo: Foo = DeserializerSerde.deserialize(b"{\"bar\":\"baz\"}").unwrap();
//! assert_eq!(foo, Foo { bar: "baz".to_string() });
//! ```
//!
//! [`Deserializer`]: ../../core/trait.Deserializer.html

use crate::core::{Deserializer, WaError};

/// Serde implementation for the [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by the [`dx`] modules to deserialize the data returned by the
/// MEX resolvers.
///
/// [`Deserializer`]: ../../core/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`dx`]: ../../dx/index.html
#[derive(Debug, Clone, Default)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, WaError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| WaError::Deserialization {
            details: e.to_string(),
        })
    }
}
