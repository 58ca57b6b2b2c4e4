//! Create newsletter module.
//!
//! This module contains `Create Newsletter` request builder.

use base64::{engine::general_purpose, Engine as _};
use derive_builder::Builder;
use serde::Serialize;

use crate::{
    core::{Deserializer, Transport, WaError},
    dx::{
        mex::MexRequest,
        newsletter::{result::CreateNewsletterData, types::QueryId, NewsletterMetadata},
        wa_client::WaClientInstance,
    },
};

const OPERATION: &str = "creating newsletter";

/// The [`CreateNewsletterRequestBuilder`] is used to build request which
/// creates new newsletter owned by the viewer.
///
/// This struct is used by the [`create_newsletter`] method of the
/// [`WaClient`].
///
/// [`create_newsletter`]: crate::dx::WaClientInstance::create_newsletter
/// [`WaClient`]: crate::WaClient
#[derive(Builder)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::newsletter)", validate = "Self::validate")
)]
pub struct CreateNewsletterRequest<T, D> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) client: WaClientInstance<T, D>,

    /// Newsletter name.
    #[builder(field(vis = "pub(in crate::dx::newsletter)"), setter(custom))]
    pub(in crate::dx::newsletter) name: String,

    /// Newsletter description.
    #[builder(
        field(vis = "pub(in crate::dx::newsletter)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::newsletter) description: Option<String>,

    /// Newsletter picture.
    ///
    /// Expected to be already prepared JPEG image (the server uses 640x640
    /// pictures).
    #[builder(
        field(vis = "pub(in crate::dx::newsletter)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::newsletter) picture: Option<Vec<u8>>,
}

#[derive(Serialize)]
struct CreateVariables<'a> {
    input: CreateInput<'a>,
}

#[derive(Serialize)]
struct CreateInput<'a> {
    name: &'a str,
    description: Option<&'a str>,
    picture: Option<String>,
}

impl<T, D> CreateNewsletterRequest<T, D> {
    /// Create MEX request from the request builder.
    pub(in crate::dx::newsletter) fn mex_request(&self) -> Result<MexRequest, WaError> {
        MexRequest::new(
            &self.client.config.server_jid,
            QueryId::Create.as_str(),
            Some(CreateVariables {
                input: CreateInput {
                    name: &self.name,
                    description: self.description.as_deref(),
                    picture: self
                        .picture
                        .as_ref()
                        .map(|picture| general_purpose::STANDARD.encode(picture)),
                },
            }),
        )
    }
}

impl<T, D> CreateNewsletterRequestBuilder<T, D> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => Err("Newsletter name is empty".into()),
        }
    }
}

impl<T, D> CreateNewsletterRequestBuilder<T, D>
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
    ///     .create_newsletter("Release notes")
    ///     .description("Weekly digest")
    ///     .execute()
    ///     .await?;
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
            .data::<CreateNewsletterData, _>(client.deserializer.as_ref(), OPERATION)
            .map(|data| data.xwa2_newsletter_create.into())
    }
}

#[cfg(feature = "blocking")]
impl<T, D> CreateNewsletterRequestBuilder<T, D>
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
            .data::<CreateNewsletterData, _>(client.deserializer.as_ref(), OPERATION)
            .map(|data| data.xwa2_newsletter_create.into())
    }
}
