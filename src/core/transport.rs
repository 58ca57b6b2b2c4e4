//! # Transport module
//!
//! This module contains the [`Transport`] trait which represents the socket
//! layer that is able to send a query [`BinaryNode`] and wait for its reply.
//!
//! Framing, encryption and connection lifecycle are owned by the
//! implementation. This crate only builds queries and inspects replies.

use super::{BinaryNode, WaError};

/// This trait is used to send queries over an established socket.
///
/// You can implement this trait for your own socket type, or use
/// [`TransportChannel`] to forward queries to a task which owns the socket.
///
/// # Examples
/// ```
/// use wa_newsletter::core::{BinaryNode, Transport, WaError};
///
/// struct MySocket;
///
/// #[async_trait::async_trait]
/// impl Transport for MySocket {
///    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
///         // Send your node here
///
///         Ok(BinaryNode::new("iq"))
///    }
/// }
/// ```
///
/// [`TransportChannel`]: crate::transport::TransportChannel
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a query node and wait for its reply.
    ///
    /// # Errors
    /// Should return an [`WaError::Transport`] if the query can't be sent or
    /// the socket has been closed before the reply arrived.
    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the blocking version of the [`Transport`] trait.

    use crate::core::{BinaryNode, WaError};

    /// This trait is used to send queries over an established socket.
    ///
    /// This trait is used for blocking requests.
    ///
    /// # Examples
    /// ```
    /// use wa_newsletter::core::{blocking::Transport, BinaryNode, WaError};
    ///
    /// struct MySocket;
    ///
    /// impl Transport for MySocket {
    ///    fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
    ///         Ok(BinaryNode::new("iq"))
    ///    }
    /// }
    /// ```
    pub trait Transport {
        /// Send a query node and wait for its reply.
        ///
        /// # Errors
        /// Should return an [`WaError::Transport`] if the query can't be sent.
        fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError>;
    }
}
