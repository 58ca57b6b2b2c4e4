//! # Core
//!
//! Core functionality of the newsletter client.
//!
//! The `core` module contains the error type, the [`BinaryNode`] model and
//! the seams ([`Transport`], [`Serialize`], [`Deserializer`]) which are
//! implemented by providers or by the integrator.

#[doc(inline)]
pub use error::WaError;
pub mod error;

#[doc(inline)]
pub use error_response::{MexError, MexErrorBody};
pub mod error_response;

#[doc(inline)]
pub use binary_node::{BinaryNode, NodeContent, S_WHATSAPP_NET};
pub mod binary_node;

#[doc(inline)]
pub use transport::Transport;
#[cfg(feature = "blocking")]
pub use transport::blocking;
pub mod transport;

#[doc(inline)]
pub use serialize::Serialize;
pub mod serialize;

#[doc(inline)]
pub use deserializer::Deserializer;
pub mod deserializer;
