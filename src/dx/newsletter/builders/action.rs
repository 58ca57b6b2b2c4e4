//! Newsletter action module.
//!
//! This module contains request builder for actions which viewer performs on
//! the newsletter: mute, unmute, follow and unfollow.

use derive_builder::Builder;
use serde::Serialize;
use serde_json::Value;

use crate::{
    core::{Deserializer, Transport, WaError},
    dx::{mex::MexRequest, newsletter::types::QueryId, wa_client::WaClientInstance},
};

/// Action performed on the newsletter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsletterAction {
    /// Mute newsletter notifications.
    Mute,

    /// Unmute newsletter notifications.
    Unmute,

    /// Subscribe to the newsletter.
    Follow,

    /// Unsubscribe from the newsletter.
    Unfollow,
}

impl NewsletterAction {
    /// Resolver identifier for the action.
    pub fn query_id(&self) -> QueryId {
        match self {
            NewsletterAction::Mute => QueryId::Mute,
            NewsletterAction::Unmute => QueryId::Unmute,
            NewsletterAction::Follow => QueryId::Follow,
            NewsletterAction::Unfollow => QueryId::Unfollow,
        }
    }
}

/// The [`NewsletterActionRequestBuilder`] is used to build mute, unmute,
/// follow and unfollow requests.
///
/// This struct is used by the [`toggle_mute_newsletter`],
/// [`follow_newsletter`] and [`unfollow_newsletter`] methods of the
/// [`WaClient`]. The reply JSON is returned as is.
///
/// [`toggle_mute_newsletter`]: crate::dx::WaClientInstance::toggle_mute_newsletter
/// [`follow_newsletter`]: crate::dx::WaClientInstance::follow_newsletter
/// [`unfollow_newsletter`]: crate::dx::WaClientInstance::unfollow_newsletter
/// [`WaClient`]: crate::WaClient
#[derive(Builder)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::newsletter)", validate = "Self::validate")
)]
pub struct NewsletterActionRequest<T, D> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) client: WaClientInstance<T, D>,

    /// Jid of the newsletter.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) jid: String,

    /// Action to perform.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) action: NewsletterAction,
}

#[derive(Serialize)]
struct ActionVariables<'a> {
    newsletter_id: &'a str,
}

impl<T, D> NewsletterActionRequest<T, D> {
    /// Create MEX request from the request builder.
    pub(in crate::dx::newsletter) fn mex_request(&self) -> Result<MexRequest, WaError> {
        MexRequest::new(
            &self.client.config.server_jid,
            self.action.query_id().as_str(),
            Some(ActionVariables {
                newsletter_id: self.jid.trim(),
            }),
        )
    }
}

impl<T, D> NewsletterActionRequestBuilder<T, D> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        match self.jid.as_deref() {
            Some(jid) if !jid.trim().is_empty() => Ok(()),
            _ => Err("Newsletter jid is empty".into()),
        }
    }
}

impl<T, D> NewsletterActionRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Build and call asynchronous request.
    ///
    /// # Example
    /// ```no_run
    /// # use wa_newsletter::WaClientBuilder;
    /// # use wa_newsletter::core::{BinaryNode, Transport, WaError};
    /// # struct MySocket;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MySocket {
    /// #     async fn query(&self, _node: BinaryNode) -> Result<BinaryNode, WaError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WaError> {
    /// let client = // WaClient
    /// #     WaClientBuilder::with_transport(MySocket).build()?;
    ///
    /// client.follow_newsletter("120363000000000000@newsletter").execute().await?;
    /// client
    ///     .toggle_mute_newsletter("120363000000000000@newsletter", true)
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(self) -> Result<Value, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;

        mex_request
            .send(&client.transport)
            .await?
            .json(client.deserializer.as_ref())
    }
}

#[cfg(feature = "blocking")]
impl<T, D> NewsletterActionRequestBuilder<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Build and call synchronous request.
    pub fn execute_blocking(self) -> Result<Value, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;

        mex_request
            .send_blocking(&client.transport)?
            .json(client.deserializer.as_ref())
    }
}
