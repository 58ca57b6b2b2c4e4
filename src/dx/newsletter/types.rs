//! Newsletter types module.
//!
//! Enumerations used in newsletter metadata and the static tables of MEX
//! query identifiers, notification operations and response paths.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::core::WaError;

/// Lifecycle state of the newsletter.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterState {
    /// Newsletter is available.
    Active,

    /// Newsletter is not available in the viewer region.
    Geosuspended,

    /// Newsletter has been suspended.
    Suspended,

    /// State which isn't known to this crate.
    #[serde(other)]
    Unknown,
}

/// Verification status of the newsletter.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterVerification {
    /// Newsletter owner is verified.
    Verified,

    /// Newsletter owner is not verified.
    Unverified,

    /// Status which isn't known to this crate.
    #[serde(other)]
    Unknown,
}

/// Which reactions subscribers can send.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterReactionMode {
    /// Any emoji.
    All,

    /// Basic set of emojis only.
    Basic,

    /// Reactions are disabled.
    None,

    /// Mode which isn't known to this crate.
    #[serde(other)]
    Unknown,
}

/// Mute state of the newsletter for the viewer.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterMute {
    /// Notifications muted.
    On,

    /// Notifications enabled.
    Off,

    /// Viewer never changed the setting.
    Undefined,

    /// Value which isn't known to this crate.
    #[serde(other)]
    Unknown,
}

/// Role of the viewer in the newsletter.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterViewRole {
    /// Newsletter admin.
    Admin,

    /// Viewer which isn't subscribed.
    Guest,

    /// Newsletter owner.
    Owner,

    /// Newsletter subscriber.
    Subscriber,

    /// Role which isn't known to this crate.
    #[serde(other)]
    Unknown,
}

/// How `key` of the newsletter info query should be interpreted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterLookup {
    /// Key is an invite code (or invite link).
    #[default]
    Invite,

    /// Key is the newsletter jid.
    Jid,
}

/// Server side resolver identifiers for newsletter queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryId {
    /// Fetch newsletter metadata.
    Metadata,

    /// List newsletters the viewer is subscribed to.
    Subscribed,

    /// Create newsletter.
    Create,

    /// Mute newsletter notifications.
    Mute,

    /// Unmute newsletter notifications.
    Unmute,

    /// Follow newsletter.
    Follow,

    /// Unfollow newsletter.
    Unfollow,
}

impl QueryId {
    /// Numeric string which selects the resolver.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryId::Metadata => "6620195908089573",
            QueryId::Subscribed => "6388546374527196",
            QueryId::Create => "6996806640408138",
            QueryId::Mute => "25151904754424642",
            QueryId::Unmute => "7337137176362961",
            QueryId::Follow => "7871414976211147",
            QueryId::Unfollow => "7238632346214362",
        }
    }

    /// Identifier of mute or unmute query.
    pub fn mute(mute: bool) -> Self {
        if mute {
            QueryId::Mute
        } else {
            QueryId::Unmute
        }
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the MEX notification operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MexOperation {
    /// Viewer promoted to newsletter admin.
    Promote,

    /// Viewer demoted from newsletter admin.
    Demote,

    /// Newsletter metadata changed.
    Update,
}

impl MexOperation {
    /// Operation name as it appears in notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            MexOperation::Promote => "NotificationNewsletterAdminPromote",
            MexOperation::Demote => "NotificationNewsletterAdminDemote",
            MexOperation::Update => "NotificationNewsletterUpdate",
        }
    }

    /// Path under `data` where notification payload is stored.
    pub fn path(&self) -> XwaPath {
        match self {
            MexOperation::Promote => XwaPath::Promote,
            MexOperation::Demote => XwaPath::Demote,
            MexOperation::Update => XwaPath::MetadataUpdate,
        }
    }
}

impl FromStr for MexOperation {
    type Err = WaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotificationNewsletterAdminPromote" => Ok(MexOperation::Promote),
            "NotificationNewsletterAdminDemote" => Ok(MexOperation::Demote),
            "NotificationNewsletterUpdate" => Ok(MexOperation::Update),
            _ => Err(WaError::Deserialization {
                details: format!("Unknown MEX operation '{s}'"),
            }),
        }
    }
}

impl fmt::Display for MexOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the objects under `data` in MEX replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XwaPath {
    /// Admin promotion notification.
    Promote,

    /// Admin demotion notification.
    Demote,

    /// Admin count.
    AdminCount,

    /// Created newsletter.
    Create,

    /// Newsletter metadata.
    Newsletter,

    /// Newsletters the viewer is subscribed to.
    Subscribed,

    /// Metadata update notification.
    MetadataUpdate,
}

impl XwaPath {
    /// Field name under `data`.
    pub fn as_str(&self) -> &'static str {
        match self {
            XwaPath::Promote => "xwa2_notify_newsletter_admin_promote",
            XwaPath::Demote => "xwa2_notify_newsletter_admin_demote",
            XwaPath::AdminCount => "xwa2_newsletter_admin",
            XwaPath::Create => "xwa2_newsletter_create",
            XwaPath::Newsletter => "xwa2_newsletter",
            XwaPath::Subscribed => "xwa2_newsletter_subscribed",
            XwaPath::MetadataUpdate => "xwa2_notify_newsletter_on_metadata_update",
        }
    }
}

impl fmt::Display for XwaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
