//! # Channel transport
//!
//! This module contains [`TransportChannel`] which forwards queries to a task
//! that owns the actual socket, and awaits replies routed back by that task.
//!
//! It requires the `channel` feature to be enabled.
//!
//! # Examples
//! ```
//! use wa_newsletter::core::{BinaryNode, Transport};
//! use wa_newsletter::transport::TransportChannel;
//!
//! # fn main() {
//! # futures::executor::block_on(async {
//! let (transport, receiver) = TransportChannel::new(8);
//!
//! // Socket side: answer queries as they arrive.
//! let socket = async move {
//!     while let Some(pending) = receiver.recv().await {
//!         let reply = BinaryNode::new("iq").with_attr("type", "result");
//!         pending.respond(Ok(reply));
//!     }
//! };
//!
//! let client = async move {
//!     let reply = transport.query(BinaryNode::new("iq")).await.unwrap();
//!     assert_eq!(reply.attr("type"), Some("result"));
//! };
//!
//! futures::future::join(client, socket).await;
//! # });
//! # }
//! ```

use crate::core::{BinaryNode, Transport, WaError};
use async_channel::{Receiver, Sender};
use futures::channel::oneshot;
use log::debug;

/// Query which waits for a reply from the socket task.
#[derive(Debug)]
pub struct PendingQuery {
    /// Query node which should be written to the socket.
    pub node: BinaryNode,

    reply: oneshot::Sender<Result<BinaryNode, WaError>>,
}

impl PendingQuery {
    /// Complete query with reply node or socket error.
    ///
    /// Reply is silently dropped if the caller has stopped waiting for it.
    pub fn respond(self, result: Result<BinaryNode, WaError>) {
        if self.reply.send(result).is_err() {
            debug!("Reply dropped: query caller is gone");
        }
    }
}

/// Receiving side of the [`TransportChannel`] owned by the socket task.
#[derive(Debug, Clone)]
pub struct QueryReceiver {
    rx: Receiver<PendingQuery>,
}

impl QueryReceiver {
    /// Wait for the next query.
    ///
    /// Returns `None` when all [`TransportChannel`] handles have been dropped.
    pub async fn recv(&self) -> Option<PendingQuery> {
        self.rx.recv().await.ok()
    }
}

/// Transport which forwards queries to the socket task over a bounded
/// channel.
#[derive(Debug, Clone)]
pub struct TransportChannel {
    tx: Sender<PendingQuery>,
}

impl TransportChannel {
    /// Create transport with channel capacity of `bound` queries and the
    /// receiver which should be handed to the socket task.
    pub fn new(bound: usize) -> (Self, QueryReceiver) {
        let (tx, rx) = async_channel::bounded(bound.max(1));

        (Self { tx }, QueryReceiver { rx })
    }
}

#[async_trait::async_trait]
impl Transport for TransportChannel {
    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
        let (reply, response) = oneshot::channel();

        self.tx
            .send(PendingQuery { node, reply })
            .await
            .map_err(|_| WaError::transport("socket task is gone"))?;

        response
            .await
            .map_err(|_| WaError::transport("socket task dropped query without reply"))?
    }
}
