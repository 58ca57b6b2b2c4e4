//! # Newsletter Developer Experience
//!
//! This module provides the client and request builders for the newsletter
//! operations. It is intended to be used through the [`wa_newsletter`] crate
//! root re-exports.
//!
//! [`wa_newsletter`]: ../index.html

pub mod newsletter;

pub(crate) mod mex;

pub use wa_client::{
    WaClient, WaClientBuilder, WaClientConfigBuilder, WaClientDeserializerBuilder,
    WaClientInstance, WaClientRef, WaConfig, WaGenericClient,
};
pub mod wa_client;
