//! Newsletter info module.
//!
//! This module contains `Get Newsletter Info` request builder.

use derive_builder::Builder;
use serde::Serialize;

use crate::{
    core::{Deserializer, Transport, WaError},
    dx::{
        mex::MexRequest,
        newsletter::{
            result::NewsletterInfoData,
            types::{NewsletterLookup, QueryId},
            NewsletterMetadata,
        },
        wa_client::WaClientInstance,
    },
};

const OPERATION: &str = "fetching newsletter info";

/// The [`GetNewsletterInfoRequestBuilder`] is used to build request which
/// fetches newsletter metadata by invite code or jid.
///
/// This struct is used by the [`get_newsletter_info`] method of the
/// [`WaClient`].
///
/// [`get_newsletter_info`]: crate::dx::WaClientInstance::get_newsletter_info
/// [`WaClient`]: crate::WaClient
#[derive(Builder)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::newsletter)", validate = "Self::validate")
)]
pub struct GetNewsletterInfoRequest<T, D> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) client: WaClientInstance<T, D>,

    /// Invite code, invite link or jid of the newsletter.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) key: String,

    /// How `key` should be interpreted.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), default)]
    pub(in crate::dx::newsletter) lookup: NewsletterLookup,

    /// Whether viewer specific mute state and role should be fetched.
    ///
    /// Defaults to `true` for jid lookups and to `false` for invite lookups.
    #[builder(
        field(vis = "pub(in crate::dx::newsletter)"),
        setter(strip_option),
        default = "None"
    )]
    pub(in crate::dx::newsletter) fetch_viewer_metadata: Option<bool>,

    /// Whether direct path of full size picture should be fetched.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), default = "true")]
    pub(in crate::dx::newsletter) fetch_full_image: bool,

    /// Whether creation time should be fetched.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), default = "true")]
    pub(in crate::dx::newsletter) fetch_creation_time: bool,
}

#[derive(Serialize)]
struct InfoVariables<'a> {
    input: InfoInput<'a>,
    fetch_viewer_metadata: bool,
    fetch_full_image: bool,
    fetch_creation_time: bool,
}

#[derive(Serialize)]
struct InfoInput<'a> {
    key: &'a str,
    #[serde(rename = "type")]
    lookup: NewsletterLookup,
}

/// Reduce `https://whatsapp.com/channel/<code>` link to `<code>`.
pub(in crate::dx::newsletter) fn invite_code(key: &str) -> &str {
    let key = key.trim();
    let code = match key.find("/channel/") {
        Some(position) => &key[position + "/channel/".len()..],
        None => key,
    };

    code.split(['?', '#', '/']).next().unwrap_or(code)
}

impl<T, D> GetNewsletterInfoRequest<T, D> {
    /// Create MEX request from the request builder.
    pub(in crate::dx::newsletter) fn mex_request(&self) -> Result<MexRequest, WaError> {
        let key = match self.lookup {
            NewsletterLookup::Invite => invite_code(&self.key),
            NewsletterLookup::Jid => self.key.trim(),
        };

        MexRequest::new(
            &self.client.config.server_jid,
            QueryId::Metadata.as_str(),
            Some(InfoVariables {
                input: InfoInput {
                    key,
                    lookup: self.lookup,
                },
                fetch_viewer_metadata: self
                    .fetch_viewer_metadata
                    .unwrap_or(self.lookup == NewsletterLookup::Jid),
                fetch_full_image: self.fetch_full_image,
                fetch_creation_time: self.fetch_creation_time,
            }),
        )
    }
}

impl<T, D> GetNewsletterInfoRequestBuilder<T, D> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        let lookup = self.lookup.unwrap_or_default();

        match self.key.as_deref() {
            Some(key) if lookup == NewsletterLookup::Invite && !invite_code(key).is_empty() => {
                Ok(())
            }
            Some(key) if lookup == NewsletterLookup::Jid && !key.trim().is_empty() => Ok(()),
            _ => Err("Newsletter key is empty".into()),
        }
    }
}

impl<T, D> GetNewsletterInfoRequestBuilder<T, D>
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
    /// let metadata = client
    ///     .get_newsletter_info("https://whatsapp.com/channel/0029VaAbCdEf")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("{} has {} subscribers", metadata.name, metadata.subscriber_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(self) -> Result<NewsletterMetadata, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;

        mex_request
            .send(&client.transport)
            .await?
            .data::<NewsletterInfoData, _>(client.deserializer.as_ref(), OPERATION)
            .map(|data| data.xwa2_newsletter.into())
    }
}

#[cfg(feature = "blocking")]
impl<T, D> GetNewsletterInfoRequestBuilder<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Build and call synchronous request.
    pub fn execute_blocking(self) -> Result<NewsletterMetadata, WaError> {
        let request = self
            .build()
            .map_err(|err| WaError::request_build(err.to_string()))?;

        let mex_request = request.mex_request()?;
        let client = request.client;

        mex_request
            .send_blocking(&client.transport)?
            .data::<NewsletterInfoData, _>(client.deserializer.as_ref(), OPERATION)
            .map(|data| data.xwa2_newsletter.into())
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case("0029VaAbCdEf", "0029VaAbCdEf" ; "plain code")]
    #[test_case("https://whatsapp.com/channel/0029VaAbCdEf", "0029VaAbCdEf" ; "full link")]
    #[test_case("whatsapp.com/channel/0029VaAbCdEf/", "0029VaAbCdEf" ; "link with trailing slash")]
    #[test_case(
        "https://whatsapp.com/channel/0029VaAbCdEf?utm=1", "0029VaAbCdEf" ; "link with query"
    )]
    #[test_case("  0029VaAbCdEf ", "0029VaAbCdEf" ; "padded code")]
    #[test_case("https://whatsapp.com/channel/", "" ; "link without code")]
    fn normalize_invite_key(key: &str, expected: &str) {
        assert_eq!(invite_code(key), expected);
    }
}
