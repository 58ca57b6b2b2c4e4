//! # Binary node
//!
//! This module contains the [`BinaryNode`] type which is the structured
//! envelope exchanged with the socket layer.
//!
//! Encoding of the node into wire format is done by the socket which
//! implements [`Transport`]. This crate only builds and inspects nodes.
//!
//! [`Transport`]: crate::core::Transport

use crate::core::WaError;
use hashbrown::HashMap;

/// Jid of the WhatsApp server which is used as `to` attribute of the queries.
pub const S_WHATSAPP_NET: &str = "s.whatsapp.net";

/// Content of the [`BinaryNode`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeContent {
    /// Node without content.
    #[default]
    Empty,

    /// Node with textual content.
    Text(String),

    /// Node with raw binary content.
    Bytes(Vec<u8>),

    /// Node with list of child nodes.
    Nodes(Vec<BinaryNode>),
}

/// Structured message envelope of the socket layer.
///
/// # Examples
/// ```
/// use wa_newsletter::core::{BinaryNode, NodeContent};
///
/// let node = BinaryNode::new("iq")
///     .with_attr("type", "get")
///     .with_content(NodeContent::Nodes(vec![
///         BinaryNode::new("result").with_content(NodeContent::Text("{}".into())),
///     ]));
///
/// assert_eq!(node.child_string("result").unwrap(), "{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryNode {
    /// Node tag.
    pub tag: String,

    /// Node attributes.
    pub attrs: HashMap<String, String>,

    /// Node content.
    pub content: NodeContent,
}

impl BinaryNode {
    /// Create node with `tag` and without attributes or content.
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add attribute to the node.
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Replace node content.
    pub fn with_content(mut self, content: NodeContent) -> Self {
        self.content = content;
        self
    }

    /// Value of the attribute with `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Child nodes or empty slice for nodes without children.
    pub fn children(&self) -> &[BinaryNode] {
        match &self.content {
            NodeContent::Nodes(nodes) => nodes,
            _ => &[],
        }
    }

    /// First child node with `tag`.
    pub fn child(&self, tag: &str) -> Option<&BinaryNode> {
        self.children().iter().find(|node| node.tag == tag)
    }

    /// Content of the first child node with `tag` as string.
    ///
    /// # Errors
    /// [`WaError::MissingNode`] when there is no such child and
    /// [`WaError::InvalidNodeContent`] when its content isn't UTF-8 text.
    pub fn child_string(&self, tag: &str) -> Result<String, WaError> {
        let child = self.child(tag).ok_or_else(|| WaError::MissingNode {
            tag: tag.to_string(),
        })?;

        match &child.content {
            NodeContent::Text(text) => Ok(text.clone()),
            NodeContent::Bytes(bytes) => {
                String::from_utf8(bytes.clone()).map_err(|err| WaError::InvalidNodeContent {
                    details: err.to_string(),
                })
            }
            NodeContent::Empty | NodeContent::Nodes(_) => Err(WaError::InvalidNodeContent {
                details: format!("'{tag}' node has no string content"),
            }),
        }
    }
}
