//! # Newsletter client
//!
//! Manage newsletters (one-to-many broadcast channels) over a MEX query
//! socket.
//!
//! - Fully `async`/`await` ready, with optional blocking API.
//! - Bring your own socket: implement [`Transport`] or use
//!   [`TransportChannel`] to hand queries to an existing connection task.
//! - Typed [`NewsletterMetadata`] projection of the raw server records.
//!
//! ## Example
//!
//! ```no_run
//! use wa_newsletter::{
//!     core::{BinaryNode, Transport, WaError},
//!     WaClientBuilder,
//! };
//!
//! struct MySocket;
//!
//! #[async_trait::async_trait]
//! impl Transport for MySocket {
//!     async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
//!         // write `node` to the socket and wait for reply with the same `id`
//!         # unimplemented!()
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), WaError> {
//! let client = WaClientBuilder::with_transport(MySocket).build()?;
//!
//! let newsletter = client
//!     .get_newsletter_info("https://whatsapp.com/channel/0029VaAbCdEf")
//!     .execute()
//!     .await?;
//!
//! client.follow_newsletter(&newsletter.id).execute().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `blocking` - [`core::blocking::Transport`] and `execute_blocking` on
//!   every request builder.
//! * `channel` - [`TransportChannel`] bridge to an externally owned socket.
//!
//! [`Transport`]: crate::core::Transport
//! [`TransportChannel`]: crate::transport::TransportChannel
//! [`NewsletterMetadata`]: crate::dx::newsletter::NewsletterMetadata

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[doc(inline)]
pub use dx::newsletter::{
    MexNotification, MexOperation, NewsletterAction, NewsletterLookup, NewsletterMetadata,
    NewsletterSettings, XwaPath,
};

#[doc(inline)]
pub use dx::{WaClient, WaClientBuilder, WaConfig, WaGenericClient};

#[doc(inline)]
pub use crate::core::WaError;

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
