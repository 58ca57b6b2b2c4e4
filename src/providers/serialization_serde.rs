//! Serde implementation for the [`Serialize`] trait.
//!
//! This module provides a `serde` serializer for MEX query variables.
//!
//! # Examples
//! ```
//! use wa_newsletter::core::Serialize as _;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    newsletter_id: String,
//! }
//!
//! let foo = Foo { newsletter_id: "1@newsletter".to_string() };
//! assert_eq!(foo.serialize().unwrap(), b"{\"newsletter_id\":\"1@newsletter\"}".to_vec());
//! ```
//!
//! [`Serialize`]: ../../core/trait.Serialize.html

use crate::core::WaError;

impl<S> crate::core::Serialize for S
where
    S: serde::Serialize,
{
    fn serialize(self) -> Result<Vec<u8>, WaError> {
        serde_json::to_vec(&self).map_err(|e| WaError::Serialization {
            details: e.to_string(),
        })
    }
}
