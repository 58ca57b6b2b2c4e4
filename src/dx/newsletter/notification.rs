//! MEX notification module.
//!
//! Server pushes newsletter changes (admin promotion, demotion, metadata
//! updates) as MEX notifications. This module maps notification operation
//! name to the path of its payload and extracts it.

use serde_json::Value;

use super::types::{MexOperation, XwaPath};
use crate::core::{Deserializer, WaError};

/// Decoded MEX notification.
#[derive(Debug, Clone, PartialEq)]
pub struct MexNotification {
    /// Notification operation.
    pub operation: MexOperation,

    /// Object stored under `data.<path>` of the notification payload.
    pub payload: Value,
}

impl MexNotification {
    /// Decode notification with `op_name` and JSON `payload`.
    ///
    /// # Errors
    /// [`WaError::Deserialization`] for unknown operation or malformed JSON,
    /// [`WaError::MissingData`] when payload has no `data.<path>` object.
    ///
    /// # Example
    /// ```
    /// use wa_newsletter::dx::newsletter::{MexNotification, MexOperation};
    /// use wa_newsletter::providers::deserialization_serde::DeserializerSerde;
    ///
    /// let notification = MexNotification::parse(
    ///     "NotificationNewsletterAdminPromote",
    ///     br#"{"data":{"xwa2_notify_newsletter_admin_promote":{"id":"1@newsletter"}}}"#,
    ///     &DeserializerSerde,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(notification.operation, MexOperation::Promote);
    /// assert_eq!(notification.payload["id"], "1@newsletter");
    /// ```
    pub fn parse<D>(op_name: &str, payload: &[u8], deserializer: &D) -> Result<Self, WaError>
    where
        D: Deserializer,
    {
        let operation: MexOperation = op_name.parse()?;
        let path = operation.path();
        let mut json: Value = deserializer.deserialize(payload)?;

        json.get_mut("data")
            .and_then(|data| data.get_mut(path.as_str()))
            .filter(|payload| !payload.is_null())
            .map(Value::take)
            .map(|payload| Self { operation, payload })
            .ok_or_else(|| WaError::MissingData {
                operation: format!("decoding {operation} notification"),
                details: format!("no '{path}' object in notification"),
            })
    }

    /// Path under `data` where payload has been found.
    pub fn path(&self) -> XwaPath {
        self.operation.path()
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::providers::deserialization_serde::DeserializerSerde;
    use serde_json::json;

    #[test]
    fn extract_metadata_update() {
        let payload = json!({
            "data": {
                "xwa2_notify_newsletter_on_metadata_update": {
                    "id": "1@newsletter",
                    "thread_metadata": { "name": { "text": "Renamed" } }
                }
            }
        });

        let notification = MexNotification::parse(
            "NotificationNewsletterUpdate",
            payload.to_string().as_bytes(),
            &DeserializerSerde,
        )
        .unwrap();

        assert_eq!(notification.operation, MexOperation::Update);
        assert_eq!(notification.path(), XwaPath::MetadataUpdate);
        assert_eq!(
            notification.payload["thread_metadata"]["name"]["text"],
            "Renamed"
        );
    }

    #[test]
    fn fail_for_payload_under_other_path() {
        let payload = json!({
            "data": { "xwa2_notify_newsletter_admin_promote": { "id": "1@newsletter" } }
        });

        let result = MexNotification::parse(
            "NotificationNewsletterAdminDemote",
            payload.to_string().as_bytes(),
            &DeserializerSerde,
        );

        assert!(matches!(result, Err(WaError::MissingData { .. })));
    }

    #[test]
    fn fail_for_unknown_operation() {
        let result = MexNotification::parse("NotificationOther", b"{}", &DeserializerSerde);

        assert!(matches!(result, Err(WaError::Deserialization { .. })));
    }
}
