//! Newsletter client module
//!
//! This module contains the [`WaClient`] type and its builders.
//! The client sends MEX queries through integrator provided [`Transport`].
//!
//! [`Transport`]: crate::core::Transport

use derive_builder::Builder;
use log::info;
use uuid::Uuid;

use std::{ops::Deref, sync::Arc};

use crate::{
    core::{WaError, S_WHATSAPP_NET},
    providers::deserialization_serde::DeserializerSerde,
    transport::QueryMiddleware,
};

/// Newsletter client
///
/// Client for MEX newsletter queries. The client is transport-agnostic, so
/// you can use any socket that implements the [`Transport`] trait.
///
/// # Examples
/// ```
/// use wa_newsletter::WaClientBuilder;
/// # use wa_newsletter::core::{BinaryNode, Transport, WaError};
/// # struct MySocket;
/// # #[async_trait::async_trait]
/// # impl Transport for MySocket {
/// #     async fn query(&self, _node: BinaryNode) -> Result<BinaryNode, WaError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// # fn main() -> Result<(), WaError> {
/// let client = WaClientBuilder::with_transport(MySocket).build()?;
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. It is already
/// wrapped in `Arc`, so cloning it is cheap.
///
/// [`Transport`]: crate::core::Transport
pub type WaGenericClient<T, D> = WaClientInstance<QueryMiddleware<T>, D>;

/// Newsletter client which uses [`serde`] for responses deserialization.
///
/// See [`WaGenericClient`] for details.
pub type WaClient<T> = WaGenericClient<T, DeserializerSerde>;

/// Newsletter client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`WaGenericClient`] or [`WaClient`]
/// instead.
#[derive(Debug)]
pub struct WaClientInstance<T, D> {
    pub(crate) inner: Arc<WaClientRef<T, D>>,
}

impl<T, D> Deref for WaClientInstance<T, D> {
    type Target = WaClientRef<T, D>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, D> Clone for WaClientInstance<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`WaClientInstance`].
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "WaClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct WaClientRef<T, D> {
    /// Transport layer
    #[builder(setter(custom), field(vis = "pub(crate)"))]
    pub(crate) transport: T,

    /// MEX replies deserializer
    #[builder(setter(custom), field(vis = "pub(crate)"))]
    pub(crate) deserializer: Arc<D>,

    /// Configuration
    #[builder(default)]
    pub(crate) config: WaConfig,
}

impl<T, D> WaClientRef<T, D> {
    /// Client configuration.
    pub fn config(&self) -> &WaConfig {
        &self.config
    }
}

impl<T, D> WaClientConfigBuilder<T, D> {
    /// Build a [`WaClient`] from the builder
    pub fn build(self) -> Result<WaClientInstance<QueryMiddleware<T>, D>, WaError> {
        self.build_internal()
            .map_err(|err| WaError::ClientInitialization {
                details: err.to_string(),
            })
            .and_then(|pre_build| {
                if pre_build.config.server_jid.is_empty() {
                    return Err(WaError::ClientInitialization {
                        details: "Server jid can't be empty".into(),
                    });
                }

                let tag_prefix = pre_build
                    .config
                    .message_tag_prefix
                    .clone()
                    .unwrap_or_else(generate_tag_prefix);

                info!(
                    "Client Configuration: \n server_jid: {}\n message_tag_prefix: {}",
                    pre_build.config.server_jid, tag_prefix
                );

                Ok(WaClientRef {
                    transport: QueryMiddleware::new(pre_build.transport, tag_prefix),
                    deserializer: pre_build.deserializer,
                    config: pre_build.config,
                })
            })
            .map(|client| WaClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// Client configuration
///
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaConfig {
    /// Jid which is used as `to` attribute of MEX queries.
    pub server_jid: String,

    /// Prefix for the `id` attribute of outgoing queries.
    ///
    /// Random prefix is generated when not set.
    pub message_tag_prefix: Option<String>,
}

impl Default for WaConfig {
    fn default() -> Self {
        Self {
            server_jid: S_WHATSAPP_NET.into(),
            message_tag_prefix: None,
        }
    }
}

fn generate_tag_prefix() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}.{}-", &uuid[..5], &uuid[5..10])
}

/// Builder for [`WaClient`]
///
/// Builder for [`WaClient`] that is a first step to create a client.
/// It provides methods to set the transport layer and returns the next step
/// of the builder with the remaining parameters.
#[derive(Debug, Clone)]
pub struct WaClientBuilder;

impl WaClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`WaClientDeserializerBuilder`] where custom deserializer or
    /// client configuration can be set.
    ///
    /// # Examples
    /// ```
    /// use wa_newsletter::{WaClientBuilder, WaConfig};
    /// # use wa_newsletter::core::{BinaryNode, Transport, WaError};
    /// # struct MySocket;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MySocket {
    /// #     async fn query(&self, _node: BinaryNode) -> Result<BinaryNode, WaError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), WaError> {
    /// let client = WaClientBuilder::with_transport(MySocket)
    ///     .with_config(WaConfig {
    ///         message_tag_prefix: Some("tag-".into()),
    ///         ..Default::default()
    ///     })
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_transport<T>(transport: T) -> WaClientDeserializerBuilder<T>
    where
        T: crate::core::Transport,
    {
        WaClientDeserializerBuilder { transport }
    }

    /// Set the blocking transport layer for the client.
    ///
    /// Returns [`WaClientDeserializerBuilder`] where custom deserializer or
    /// client configuration can be set.
    #[cfg(feature = "blocking")]
    pub fn with_blocking_transport<T>(transport: T) -> WaClientDeserializerBuilder<T>
    where
        T: crate::core::blocking::Transport + Send + Sync,
    {
        WaClientDeserializerBuilder { transport }
    }
}

/// Deserializer step of the [`WaClientBuilder`].
///
/// [`serde`] based [`DeserializerSerde`] is used when no deserializer has
/// been set.
#[derive(Debug, Clone)]
pub struct WaClientDeserializerBuilder<T> {
    transport: T,
}

impl<T> WaClientDeserializerBuilder<T> {
    /// Set the deserializer for MEX replies.
    pub fn with_deserializer<D>(self, deserializer: D) -> WaClientConfigBuilder<T, D>
    where
        D: crate::core::Deserializer,
    {
        WaClientConfigBuilder {
            transport: Some(self.transport),
            deserializer: Some(Arc::new(deserializer)),
            ..Default::default()
        }
    }

    /// Set the client configuration.
    pub fn with_config(self, config: WaConfig) -> WaClientConfigBuilder<T, DeserializerSerde> {
        self.with_deserializer(DeserializerSerde).with_config(config)
    }

    /// Build a [`WaClient`] with default configuration.
    pub fn build(self) -> Result<WaClient<T>, WaError> {
        self.with_deserializer(DeserializerSerde).build()
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::{BinaryNode, Transport};

    struct MockTransport;

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
            Ok(node)
        }
    }

    #[test]
    fn use_default_server_jid() {
        let client = WaClientBuilder::with_transport(MockTransport).build().unwrap();

        assert_eq!(client.config().server_jid, "s.whatsapp.net");
    }

    #[test]
    fn use_configured_tag_prefix() {
        let client = WaClientBuilder::with_transport(MockTransport)
            .with_config(WaConfig {
                message_tag_prefix: Some("abc-".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(client.transport.tag_prefix, "abc-");
    }

    #[test]
    fn generate_tag_prefix_when_missing() {
        let client = WaClientBuilder::with_transport(MockTransport).build().unwrap();
        let prefix = &client.transport.tag_prefix;

        assert_eq!(prefix.len(), 12);
        assert!(prefix.ends_with('-'));
        assert_eq!(prefix.chars().nth(5), Some('.'));
    }

    #[test]
    fn reject_empty_server_jid() {
        let result = WaClientBuilder::with_transport(MockTransport)
            .with_config(WaConfig {
                server_jid: String::new(),
                ..Default::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(WaError::ClientInitialization { .. })
        ));
    }

    #[test]
    fn share_state_between_clones() {
        let client = WaClientBuilder::with_transport(MockTransport).build().unwrap();
        let cloned = client.clone();

        assert!(Arc::ptr_eq(&client.inner, &cloned.inner));
    }
}
