//! MEX query module.
//!
//! Wraps query variables into the `w:mex` iq envelope, sends it through the
//! client transport and unwraps JSON from the `result` node of the reply.

use crate::core::{BinaryNode, Deserializer, MexErrorBody, NodeContent, Transport, WaError};
use log::{debug, warn};

/// Namespace of the MEX queries.
pub(crate) const MEX_XMLNS: &str = "w:mex";

/// Name of the reply child node which holds JSON payload.
pub(crate) const RESULT_TAG: &str = "result";

#[derive(serde::Serialize)]
struct MexVariables<V> {
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<V>,
}

#[derive(serde::Deserialize)]
struct MexResponse<R> {
    data: Option<R>,

    /// Raw value, decoded only when `data` is missing.
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Prepared MEX query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MexRequest {
    pub(crate) query_id: String,
    pub(crate) node: BinaryNode,
}

impl MexRequest {
    /// Build query envelope addressed to `server_jid`.
    ///
    /// Without variables query content is an empty JSON object.
    pub(crate) fn new<V>(
        server_jid: &str,
        query_id: &str,
        variables: Option<V>,
    ) -> Result<Self, WaError>
    where
        V: serde::Serialize,
    {
        let content = crate::core::Serialize::serialize(MexVariables { variables })?;

        let node = BinaryNode::new("iq")
            .with_attr("type", "get")
            .with_attr("xmlns", MEX_XMLNS)
            .with_attr("to", server_jid)
            .with_content(NodeContent::Nodes(vec![BinaryNode::new("query")
                .with_attr("query_id", query_id)
                .with_content(NodeContent::Bytes(content))]));

        Ok(Self {
            query_id: query_id.to_string(),
            node,
        })
    }

    /// Send query and wait for reply.
    pub(crate) async fn send<T>(self, transport: &T) -> Result<MexReply, WaError>
    where
        T: Transport,
    {
        debug!("Sending MEX query {}", self.query_id);
        let reply = transport.query(self.node).await?;
        MexReply::from_node(&reply)
    }

    /// Send query and wait for reply.
    #[cfg(feature = "blocking")]
    pub(crate) fn send_blocking<T>(self, transport: &T) -> Result<MexReply, WaError>
    where
        T: crate::core::blocking::Transport,
    {
        debug!("Sending MEX query {}", self.query_id);
        let reply = transport.query(self.node)?;
        MexReply::from_node(&reply)
    }
}

/// JSON payload from the `result` node of the MEX reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MexReply {
    pub(crate) payload: String,
}

impl MexReply {
    pub(crate) fn from_node(node: &BinaryNode) -> Result<Self, WaError> {
        let payload = node.child_string(RESULT_TAG)?;
        debug!("Received MEX reply: {payload}");

        Ok(Self { payload })
    }

    /// Whole payload without any shape checks.
    pub(crate) fn json<D>(&self, deserializer: &D) -> Result<serde_json::Value, WaError>
    where
        D: Deserializer,
    {
        deserializer.deserialize(self.payload.as_bytes())
    }

    /// Content of the `data` field.
    ///
    /// Missing or `null` data is reported as [`WaError::MissingData`] with the
    /// first reported MEX error or the raw payload.
    pub(crate) fn data<R, D>(&self, deserializer: &D, operation: &str) -> Result<R, WaError>
    where
        R: for<'de> serde::Deserialize<'de>,
        D: Deserializer,
    {
        let response: MexResponse<R> = deserializer.deserialize(self.payload.as_bytes())?;

        response.data.ok_or_else(|| {
            warn!("MEX reply without data while {operation}: {}", self.payload);

            WaError::MissingData {
                operation: operation.to_string(),
                details: response
                    .errors
                    .and_then(MexErrorBody::from_errors)
                    .and_then(|body| body.description())
                    .unwrap_or_else(|| self.payload.clone()),
            }
        })
    }
}
