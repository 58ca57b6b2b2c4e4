//! Subscribed newsletters module.
//!
//! This module contains `Get Subscribed Newsletters` request builder.

use derive_builder::Builder;

use crate::{
    core::{Deserializer, Transport, WaError},
    dx::{
        mex::{MexReply, MexRequest},
        newsletter::{result::SubscribedNewslettersData, types::QueryId, NewsletterMetadata},
        wa_client::WaClientInstance,
    },
};

const OPERATION: &str = "fetching subscribed newsletters";

/// The [`GetSubscribedNewslettersRequestBuilder`] is used to build request
/// which lists newsletters the viewer is subscribed to.
///
/// This struct is used by the [`get_subscribed_newsletters`] method of the
/// [`WaClient`].
///
/// [`get_subscribed_newsletters`]: crate::dx::WaClientInstance::get_subscribed_newsletters
/// [`WaClient`]: crate::WaClient
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(in crate::dx::newsletter)"))]
pub struct GetSubscribedNewslettersRequest<T, D> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) client: WaClientInstance<T, D>,
}

impl<T, D> GetSubscribedNewslettersRequest<T, D> {
    /// Create MEX request from the request builder.
    pub(in crate::dx::newsletter) fn mex_request(&self) -> Result<MexRequest, WaError> {
        MexRequest::new::<()>(
            &self.client.config.server_jid,
            QueryId::Subscribed.as_str(),
            None,
        )
    }
}

fn metadata_list<D>(reply: MexReply, deserializer: &D) -> Result<Vec<NewsletterMetadata>, WaError>
where
    D: Deserializer,
{
    reply
        .data::<SubscribedNewslettersData, _>(deserializer, OPERATION)
        .map(|data| {
            data.xwa2_newsletter_subscribed
                .into_iter()
                .map(Into::into)
                .collect()
        })
}

impl<T, D> GetSubscribedNewslettersRequestBuilder<T, D>
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
    /// for newsletter in client.get_subscribed_newsletters().execute().await? {
    ///     println!("{}: {}", newsletter.id, newsletter.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(self) -> Result<Vec<NewsletterMetadata>, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;
        let reply = mex_request.send(&client.transport).await?;

        metadata_list(reply, client.deserializer.as_ref())
    }
}

#[cfg(feature = "blocking")]
impl<T, D> GetSubscribedNewslettersRequestBuilder<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Build and call synchronous request.
    pub fn execute_blocking(self) -> Result<Vec<NewsletterMetadata>, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;
        let reply = mex_request.send_blocking(&client.transport)?;

        metadata_list(reply, client.deserializer.as_ref())
    }
}
