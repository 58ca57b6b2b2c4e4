//! # Query middleware
//!
//! This module contains [`QueryMiddleware`] which wraps integrator provided
//! [`Transport`] and stamps every outgoing `iq` node with unique message tag.

use crate::core::{BinaryNode, Transport, WaError};
use log::debug;
use spin::Mutex;

/// Transport wrapper used by the client.
///
/// The middleware makes sure that every query has an `id` attribute which
/// the socket layer can use to match reply with request. Identifiers provided
/// by the caller are kept as is.
#[derive(Debug)]
pub struct QueryMiddleware<T> {
    /// Wrapped transport.
    pub(crate) transport: T,

    /// Prefix for the generated message tags.
    pub(crate) tag_prefix: String,

    /// Sequence number for the next generated message tag.
    pub(crate) next_tag: Mutex<u64>,
}

impl<T> QueryMiddleware<T> {
    /// Create middleware for `transport` with given message tag prefix.
    pub fn new<S>(transport: T, tag_prefix: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            transport,
            tag_prefix: tag_prefix.into(),
            next_tag: Mutex::new(1),
        }
    }

    /// Wrapped transport.
    pub fn inner(&self) -> &T {
        &self.transport
    }

    fn message_tag(&self) -> String {
        let mut locked_value = self.next_tag.lock();
        let tag = *locked_value;
        *locked_value = locked_value.wrapping_add(1);

        format!("{}{}", self.tag_prefix, tag)
    }

    fn prepare(&self, mut node: BinaryNode) -> BinaryNode {
        if !node.attrs.contains_key("id") {
            node.attrs.insert("id".into(), self.message_tag());
        }

        debug!(
            "Sending '{}' node with id {:?}",
            node.tag,
            node.attr("id").unwrap_or_default()
        );

        node
    }
}

#[async_trait::async_trait]
impl<T> Transport for QueryMiddleware<T>
where
    T: Transport,
{
    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
        let node = self.prepare(node);
        self.transport.query(node).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for QueryMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
        let node = self.prepare(node);
        self.transport.query(node)
    }
}
