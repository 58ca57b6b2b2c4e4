//! # Transport Providers Module
//!
//! This module contains the transport wrappers that can be used by
//! [`WaClient`].
//!
//! [`WaClient`]: crate::dx::WaClient

#[doc(inline)]
pub use middleware::QueryMiddleware;
pub mod middleware;

#[cfg(feature = "channel")]
#[doc(inline)]
pub use channel::{PendingQuery, QueryReceiver, TransportChannel};
#[cfg(feature = "channel")]
pub mod channel;
