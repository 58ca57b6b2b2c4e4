//! Newsletter result module.
//!
//! This module contains [`NewsletterMetadata`] and the intermediate types
//! which describe the shape of newsletter objects in MEX replies.

use serde::{Deserialize, Deserializer};

use super::types::{
    NewsletterMute, NewsletterReactionMode, NewsletterState, NewsletterVerification,
    NewsletterViewRole,
};
use crate::core::WaError;

/// Metadata of the newsletter.
///
/// Flat projection of the `thread_metadata` and `viewer_metadata` objects
/// returned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterMetadata {
    /// Jid of the newsletter.
    pub id: String,

    /// Lifecycle state.
    pub state: NewsletterState,

    /// Creation time (unix timestamp in seconds).
    pub creation_time: u64,

    /// Invite code.
    pub invite_code: String,

    /// Newsletter name.
    pub name: String,

    /// Newsletter description.
    pub description: String,

    /// Number of subscribers.
    pub subscriber_count: u64,

    /// Verification status.
    pub verification: NewsletterVerification,

    /// Direct path of the picture.
    pub picture: Option<String>,

    /// Direct path of the picture preview (lower quality).
    pub preview: Option<String>,

    /// Newsletter settings.
    pub settings: NewsletterSettings,

    /// Mute state for the viewer.
    pub mute: Option<NewsletterMute>,

    /// Role of the viewer.
    pub role: Option<NewsletterViewRole>,
}

/// Newsletter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewsletterSettings {
    /// Reaction mode.
    pub reaction: Option<NewsletterReactionMode>,
}

/// Newsletter object as returned under `data` of the MEX reply.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsletterBody {
    pub(crate) id: String,
    pub(crate) state: NewsletterState,
    pub(crate) thread_metadata: ThreadMetadata,
    #[serde(default)]
    pub(crate) viewer_metadata: Option<ViewerMetadata>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThreadMetadata {
    #[serde(deserialize_with = "numeric")]
    creation_time: u64,
    invite: String,
    name: TextField,
    description: TextField,
    #[serde(deserialize_with = "numeric")]
    subscribers_count: u64,
    verification: NewsletterVerification,
    #[serde(default)]
    picture: Option<MediaPath>,
    #[serde(default)]
    preview: Option<MediaPath>,
    #[serde(default)]
    settings: Option<ThreadSettings>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextField {
    text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaPath {
    #[serde(default)]
    direct_path: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThreadSettings {
    #[serde(default)]
    reaction_codes: Option<ReactionCodes>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReactionCodes {
    value: NewsletterReactionMode,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewerMetadata {
    #[serde(default)]
    mute: Option<NewsletterMute>,
    #[serde(default)]
    role: Option<NewsletterViewRole>,
}

/// Accepts both `"123"` and `123`.
fn numeric<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Number(u64),
        Text(String),
    }

    match Numeric::deserialize(deserializer)? {
        Numeric::Number(value) => Ok(value),
        Numeric::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl From<NewsletterBody> for NewsletterMetadata {
    fn from(value: NewsletterBody) -> Self {
        let thread = value.thread_metadata;
        let viewer = value.viewer_metadata;

        Self {
            id: value.id,
            state: value.state,
            creation_time: thread.creation_time,
            invite_code: thread.invite,
            name: thread.name.text,
            description: thread.description.text,
            subscriber_count: thread.subscribers_count,
            verification: thread.verification,
            picture: thread.picture.and_then(|picture| picture.direct_path),
            preview: thread.preview.and_then(|preview| preview.direct_path),
            settings: NewsletterSettings {
                reaction: thread
                    .settings
                    .and_then(|settings| settings.reaction_codes)
                    .map(|codes| codes.value),
            },
            mute: viewer.as_ref().and_then(|viewer| viewer.mute),
            role: viewer.and_then(|viewer| viewer.role),
        }
    }
}

impl TryFrom<serde_json::Value> for NewsletterMetadata {
    type Error = WaError;

    /// Project loosely typed newsletter object.
    ///
    /// Fails with [`WaError::Deserialization`] when required fields are
    /// missing or have unexpected types.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value::<NewsletterBody>(value)
            .map(Into::into)
            .map_err(|err| WaError::Deserialization {
                details: err.to_string(),
            })
    }
}

/// Body of the `data` object of the newsletter info query.
#[derive(Deserialize, Debug)]
pub(crate) struct NewsletterInfoData {
    pub(crate) xwa2_newsletter: NewsletterBody,
}

/// Body of the `data` object of the subscribed newsletters query.
#[derive(Deserialize, Debug)]
pub(crate) struct SubscribedNewslettersData {
    pub(crate) xwa2_newsletter_subscribed: Vec<NewsletterBody>,
}

/// Body of the `data` object of the create newsletter query.
#[derive(Deserialize, Debug)]
pub(crate) struct CreateNewsletterData {
    pub(crate) xwa2_newsletter_create: NewsletterBody,
}

#[cfg(test)]
pub(crate) mod should {
    use super::*;
    use serde_json::{json, Value};

    pub(crate) fn full_newsletter(id: &str) -> Value {
        json!({
            "id": id,
            "state": "ACTIVE",
            "thread_metadata": {
                "creation_time": "1700000000",
                "invite": "0029VaAbCdEf",
                "name": { "id": "1", "text": "Rust news", "update_time": "1700000001" },
                "description": { "id": "2", "text": "Weekly digest", "update_time": "1700000002" },
                "subscribers_count": "1234",
                "verification": "VERIFIED",
                "picture": { "direct_path": "/v/t61/picture", "id": "3", "type": "IMAGE" },
                "preview": { "direct_path": "/v/t61/preview", "id": "4", "type": "PREVIEW" },
                "settings": { "reaction_codes": { "value": "BASIC" } }
            },
            "viewer_metadata": { "mute": "OFF", "role": "SUBSCRIBER" }
        })
    }

    #[test]
    fn project_every_field() {
        let metadata = NewsletterMetadata::try_from(full_newsletter("123@newsletter")).unwrap();

        assert_eq!(
            metadata,
            NewsletterMetadata {
                id: "123@newsletter".into(),
                state: NewsletterState::Active,
                creation_time: 1_700_000_000,
                invite_code: "0029VaAbCdEf".into(),
                name: "Rust news".into(),
                description: "Weekly digest".into(),
                subscriber_count: 1234,
                verification: NewsletterVerification::Verified,
                picture: Some("/v/t61/picture".into()),
                preview: Some("/v/t61/preview".into()),
                settings: NewsletterSettings {
                    reaction: Some(NewsletterReactionMode::Basic)
                },
                mute: Some(NewsletterMute::Off),
                role: Some(NewsletterViewRole::Subscriber),
            }
        );
    }

    #[test]
    fn leave_optional_fields_empty() {
        let mut value = full_newsletter("123@newsletter");
        value["thread_metadata"]
            .as_object_mut()
            .unwrap()
            .remove("picture");
        value["thread_metadata"]["settings"] = Value::Null;
        value.as_object_mut().unwrap().remove("viewer_metadata");

        let metadata = NewsletterMetadata::try_from(value).unwrap();

        assert_eq!(metadata.picture, None);
        assert_eq!(metadata.preview, Some("/v/t61/preview".into()));
        assert_eq!(metadata.settings.reaction, None);
        assert_eq!(metadata.mute, None);
        assert_eq!(metadata.role, None);
    }

    #[test]
    fn treat_null_viewer_metadata_as_missing() {
        let mut value = full_newsletter("123@newsletter");
        value["viewer_metadata"] = Value::Null;
        value["thread_metadata"]["picture"] = Value::Null;

        let metadata = NewsletterMetadata::try_from(value).unwrap();

        assert_eq!(metadata.picture, None);
        assert_eq!(metadata.mute, None);
        assert_eq!(metadata.role, None);
    }

    #[test]
    fn accept_numbers_for_counters() {
        let mut value = full_newsletter("123@newsletter");
        value["thread_metadata"]["creation_time"] = json!(1_700_000_000u64);
        value["thread_metadata"]["subscribers_count"] = json!(7);

        let metadata = NewsletterMetadata::try_from(value).unwrap();

        assert_eq!(metadata.creation_time, 1_700_000_000);
        assert_eq!(metadata.subscriber_count, 7);
    }

    #[test]
    fn fail_for_non_numeric_counter() {
        let mut value = full_newsletter("123@newsletter");
        value["thread_metadata"]["subscribers_count"] = json!("many");

        assert!(matches!(
            NewsletterMetadata::try_from(value),
            Err(WaError::Deserialization { .. })
        ));
    }

    #[test]
    fn fail_without_thread_metadata() {
        let value = json!({ "id": "123@newsletter", "state": "ACTIVE" });

        assert!(matches!(
            NewsletterMetadata::try_from(value),
            Err(WaError::Deserialization { .. })
        ));
    }
}
