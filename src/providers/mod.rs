//! # Providers module
//!
//! This module contains the providers that can be used by [`WaClient`].
//! It is intended to be used by the [`wa_newsletter`] crate.
//!
//! [`WaClient`]: crate::dx::WaClient
//! [`wa_newsletter`]: ../index.html

pub mod serialization_serde;

pub mod deserialization_serde;
