//! Newsletter module.
//!
//! Manage newsletters (broadcast channels): fetch metadata, list
//! subscriptions, create, mute, unmute, follow and unfollow.
//!
//! Every operation sends a single MEX query through the client transport and
//! returns typed [`NewsletterMetadata`] or, for viewer actions, the reply
//! JSON as is.

#[doc(inline)]
pub use result::{NewsletterBody, NewsletterMetadata, NewsletterSettings};
pub mod result;

#[doc(inline)]
pub use types::{
    MexOperation, NewsletterLookup, NewsletterMute, NewsletterReactionMode, NewsletterState,
    NewsletterVerification, NewsletterViewRole, QueryId, XwaPath,
};
pub mod types;

#[doc(inline)]
pub use notification::MexNotification;
pub mod notification;

#[doc(inline)]
pub use builders::{
    CreateNewsletterRequestBuilder, GetNewsletterInfoRequestBuilder,
    GetSubscribedNewslettersRequestBuilder, NewsletterAction, NewsletterActionRequestBuilder,
};
pub mod builders;

use crate::dx::wa_client::WaClientInstance;

impl<T, D> WaClientInstance<T, D> {
    /// Create newsletter info request builder.
    ///
    /// `key` is an invite code or invite link. Use
    /// [`lookup`](GetNewsletterInfoRequestBuilder::lookup) with
    /// [`NewsletterLookup::Jid`] to fetch newsletter by its jid.
    ///
    /// Instance of [`GetNewsletterInfoRequestBuilder`] is returned.
    pub fn get_newsletter_info<S>(&self, key: S) -> GetNewsletterInfoRequestBuilder<T, D>
    where
        S: Into<String>,
    {
        GetNewsletterInfoRequestBuilder {
            client: Some(self.clone()),
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Create subscribed newsletters request builder.
    ///
    /// Instance of [`GetSubscribedNewslettersRequestBuilder`] is returned.
    pub fn get_subscribed_newsletters(&self) -> GetSubscribedNewslettersRequestBuilder<T, D> {
        GetSubscribedNewslettersRequestBuilder {
            client: Some(self.clone()),
        }
    }

    /// Create newsletter creation request builder.
    ///
    /// Instance of [`CreateNewsletterRequestBuilder`] is returned.
    pub fn create_newsletter<S>(&self, name: S) -> CreateNewsletterRequestBuilder<T, D>
    where
        S: Into<String>,
    {
        CreateNewsletterRequestBuilder {
            client: Some(self.clone()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create mute (`mute == true`) or unmute request builder.
    ///
    /// Instance of [`NewsletterActionRequestBuilder`] is returned.
    pub fn toggle_mute_newsletter<S>(
        &self,
        jid: S,
        mute: bool,
    ) -> NewsletterActionRequestBuilder<T, D>
    where
        S: Into<String>,
    {
        let action = if mute {
            NewsletterAction::Mute
        } else {
            NewsletterAction::Unmute
        };

        self.newsletter_action(jid.into(), action)
    }

    /// Create follow request builder.
    ///
    /// Instance of [`NewsletterActionRequestBuilder`] is returned.
    pub fn follow_newsletter<S>(&self, jid: S) -> NewsletterActionRequestBuilder<T, D>
    where
        S: Into<String>,
    {
        self.newsletter_action(jid.into(), NewsletterAction::Follow)
    }

    /// Create unfollow request builder.
    ///
    /// Instance of [`NewsletterActionRequestBuilder`] is returned.
    pub fn unfollow_newsletter<S>(&self, jid: S) -> NewsletterActionRequestBuilder<T, D>
    where
        S: Into<String>,
    {
        self.newsletter_action(jid.into(), NewsletterAction::Unfollow)
    }

    fn newsletter_action(
        &self,
        jid: String,
        action: NewsletterAction,
    ) -> NewsletterActionRequestBuilder<T, D> {
        NewsletterActionRequestBuilder {
            client: Some(self.clone()),
            jid: Some(jid),
            action: Some(action),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{BinaryNode, NodeContent, Transport, WaError},
        dx::{mex::MexRequest, WaClient},
        WaClientBuilder, WaConfig,
    };
    use serde_json::{json, Value};
    use spin::Mutex;
    use std::sync::Arc;

    /// Replies with fixed `result` payload and records sent queries.
    #[derive(Clone, Default)]
    struct MockTransport {
        payload: String,
        sent: Arc<Mutex<Vec<BinaryNode>>>,
    }

    impl MockTransport {
        fn replying(payload: Value) -> Self {
            Self {
                payload: payload.to_string(),
                ..Default::default()
            }
        }

        fn last_query(&self) -> BinaryNode {
            self.sent.lock().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
            self.sent.lock().push(node);

            Ok(BinaryNode::new("iq")
                .with_attr("type", "result")
                .with_content(NodeContent::Nodes(vec![
                    BinaryNode::new("result").with_content(NodeContent::Text(self.payload.clone()))
                ])))
        }
    }

    #[cfg(feature = "blocking")]
    impl crate::core::blocking::Transport for MockTransport {
        fn query(&self, node: BinaryNode) -> Result<BinaryNode, WaError> {
            block_on(Transport::query(self, node))
        }
    }

    #[cfg(feature = "blocking")]
    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    fn client(transport: MockTransport) -> WaClient<MockTransport> {
        WaClientBuilder::with_transport(transport)
            .with_config(WaConfig {
                message_tag_prefix: Some("test-".into()),
                ..Default::default()
            })
            .build()
            .unwrap()
    }

    fn query_variables(node: &BinaryNode) -> (String, Value) {
        let query = node.child("query").unwrap();
        let variables = match &query.content {
            NodeContent::Bytes(bytes) => serde_json::from_slice::<Value>(bytes).unwrap(),
            other => panic!("unexpected content {other:?}"),
        };

        (query.attr("query_id").unwrap().to_string(), variables)
    }

    fn newsletter(id: &str) -> Value {
        result::should::full_newsletter(id)
    }

    #[tokio::test]
    async fn fetch_newsletter_info() {
        let transport = MockTransport::replying(json!({
            "data": { "xwa2_newsletter": newsletter("1@newsletter") }
        }));
        let client = client(transport.clone());

        let metadata = client
            .get_newsletter_info("https://whatsapp.com/channel/0029VaAbCdEf")
            .execute()
            .await
            .unwrap();

        assert_eq!(metadata.id, "1@newsletter");
        assert_eq!(metadata.name, "Rust news");

        let sent = transport.last_query();
        assert_eq!(sent.attr("id"), Some("test-1"));
        assert_eq!(
            query_variables(&sent),
            (
                "6620195908089573".to_string(),
                json!({
                    "variables": {
                        "input": { "key": "0029VaAbCdEf", "type": "INVITE" },
                        "fetch_viewer_metadata": false,
                        "fetch_full_image": true,
                        "fetch_creation_time": true
                    }
                })
            )
        );
    }

    #[tokio::test]
    async fn fetch_viewer_metadata_for_jid_lookup() {
        let transport = MockTransport::replying(json!({
            "data": { "xwa2_newsletter": newsletter("1@newsletter") }
        }));
        let client = client(transport.clone());

        client
            .get_newsletter_info("1@newsletter")
            .lookup(NewsletterLookup::Jid)
            .fetch_full_image(false)
            .execute()
            .await
            .unwrap();

        let (_, variables) = query_variables(&transport.last_query());
        assert_eq!(
            variables["variables"]["input"],
            json!({ "key": "1@newsletter", "type": "JID" })
        );
        assert_eq!(variables["variables"]["fetch_viewer_metadata"], true);
        assert_eq!(variables["variables"]["fetch_full_image"], false);
    }

    #[tokio::test]
    async fn fail_info_fetch_without_data() {
        let client = client(MockTransport::replying(json!({ "errors": [] })));

        let result = client.get_newsletter_info("0029VaAbCdEf").execute().await;

        assert!(matches!(
            result,
            Err(WaError::MissingData { operation, .. }) if operation == "fetching newsletter info"
        ));
    }

    #[tokio::test]
    async fn ignore_malformed_errors_next_to_data() {
        let client = client(MockTransport::replying(json!({
            "data": { "xwa2_newsletter": newsletter("1@newsletter") },
            "errors": [{ "code": 500 }]
        })));

        let metadata = client.get_newsletter_info("0029VaAbCdEf").execute().await.unwrap();

        assert_eq!(metadata.id, "1@newsletter");
    }

    #[tokio::test]
    async fn report_missing_data_next_to_malformed_errors() {
        let client = client(MockTransport::replying(json!({ "errors": [{ "code": 500 }] })));

        let result = client.get_newsletter_info("0029VaAbCdEf").execute().await;

        assert_eq!(
            result,
            Err(WaError::MissingData {
                operation: "fetching newsletter info".into(),
                details: r#"{"errors":[{"code":500}]}"#.into(),
            })
        );
    }

    #[test]
    fn start_builders_with_defaults() {
        let client = client(MockTransport::default());

        let info = client.get_newsletter_info("0029VaAbCdEf").build().unwrap();
        assert_eq!(info.lookup, NewsletterLookup::Invite);
        assert_eq!(info.fetch_viewer_metadata, None);
        assert!(info.fetch_full_image);
        assert!(info.fetch_creation_time);

        let create = client.create_newsletter("Rust news").build().unwrap();
        assert_eq!(create.name, "Rust news");
        assert_eq!(create.description, None);
        assert_eq!(create.picture, None);
    }

    #[tokio::test]
    async fn reject_empty_invite_key() {
        let transport = MockTransport::default();
        let client = client(transport.clone());

        let result = client
            .get_newsletter_info("https://whatsapp.com/channel/")
            .execute()
            .await;

        assert!(matches!(result, Err(WaError::RequestBuild { .. })));
        assert!(transport.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn map_every_subscribed_newsletter() {
        let first = newsletter("1@newsletter");
        let mut second = newsletter("2@newsletter");
        second.as_object_mut().unwrap().remove("viewer_metadata");

        let transport = MockTransport::replying(json!({
            "data": { "xwa2_newsletter_subscribed": [first.clone(), second.clone()] }
        }));
        let client = client(transport.clone());

        let list = client.get_subscribed_newsletters().execute().await.unwrap();

        assert_eq!(
            list,
            vec![
                NewsletterMetadata::try_from(first).unwrap(),
                NewsletterMetadata::try_from(second).unwrap()
            ]
        );
        assert_eq!(
            query_variables(&transport.last_query()),
            ("6388546374527196".to_string(), json!({}))
        );
    }

    #[tokio::test]
    async fn fail_subscribed_list_without_data() {
        let client = client(MockTransport::replying(json!({})));

        assert!(matches!(
            client.get_subscribed_newsletters().execute().await,
            Err(WaError::MissingData { .. })
        ));
    }

    #[tokio::test]
    async fn create_newsletter() {
        let transport = MockTransport::replying(
            json!({ "data": { "xwa2_newsletter_create": newsletter("3@newsletter") } }),
        );
        let client = client(transport.clone());

        let metadata = client
            .create_newsletter("Rust news")
            .description("Weekly digest")
            .picture(vec![0xff, 0xd8, 0xff])
            .execute()
            .await
            .unwrap();

        assert_eq!(metadata.id, "3@newsletter");
        assert_eq!(
            query_variables(&transport.last_query()),
            (
                "6996806640408138".to_string(),
                json!({
                    "variables": {
                        "input": {
                            "name": "Rust news",
                            "description": "Weekly digest",
                            "picture": "/9j/"
                        }
                    }
                })
            )
        );
    }

    #[tokio::test]
    async fn send_nulls_for_missing_description_and_picture() {
        let transport = MockTransport::replying(
            json!({ "data": { "xwa2_newsletter_create": newsletter("3@newsletter") } }),
        );
        let client = client(transport.clone());

        client.create_newsletter("Rust news").execute().await.unwrap();

        let (_, variables) = query_variables(&transport.last_query());
        assert_eq!(
            variables,
            json!({
                "variables": {
                    "input": { "name": "Rust news", "description": null, "picture": null }
                }
            })
        );
    }

    #[tokio::test]
    async fn reject_empty_newsletter_name() {
        let client = client(MockTransport::default());

        assert!(matches!(
            client.create_newsletter("  ").execute().await,
            Err(WaError::RequestBuild { .. })
        ));
    }

    #[tokio::test]
    async fn use_distinct_query_ids_for_mute_and_unmute() {
        let transport = MockTransport::replying(json!({ "data": { "ok": true } }));
        let client = client(transport.clone());

        client
            .toggle_mute_newsletter("1@newsletter", true)
            .execute()
            .await
            .unwrap();
        let (mute_id, mute_variables) = query_variables(&transport.last_query());

        client
            .toggle_mute_newsletter("1@newsletter", false)
            .execute()
            .await
            .unwrap();
        let (unmute_id, unmute_variables) = query_variables(&transport.last_query());

        assert_eq!(mute_id, "25151904754424642");
        assert_eq!(unmute_id, "7337137176362961");
        assert_eq!(mute_variables, unmute_variables);
        assert_eq!(
            mute_variables,
            json!({ "variables": { "newsletter_id": "1@newsletter" } })
        );
    }

    #[tokio::test]
    async fn return_action_reply_verbatim() {
        let reply = json!({ "errors": [{ "message": "not subscribed" }] });
        let transport = MockTransport::replying(reply.clone());
        let client = client(transport.clone());

        let follow = client.follow_newsletter("1@newsletter").execute().await.unwrap();
        let (follow_id, _) = query_variables(&transport.last_query());

        let unfollow = client.unfollow_newsletter("1@newsletter").execute().await.unwrap();
        let (unfollow_id, _) = query_variables(&transport.last_query());

        assert_eq!(follow, reply);
        assert_eq!(unfollow, reply);
        assert_eq!(follow_id, "7871414976211147");
        assert_eq!(unfollow_id, "7238632346214362");
    }

    #[tokio::test]
    async fn reject_empty_jid() {
        let client = client(MockTransport::default());

        assert!(matches!(
            client.follow_newsletter("").execute().await,
            Err(WaError::RequestBuild { .. })
        ));
    }

    #[tokio::test]
    async fn pass_transport_errors_through() {
        struct ClosedSocket;

        #[async_trait::async_trait]
        impl Transport for ClosedSocket {
            async fn query(&self, _node: BinaryNode) -> Result<BinaryNode, WaError> {
                Err(WaError::transport("connection closed"))
            }
        }

        let client = WaClientBuilder::with_transport(ClosedSocket).build().unwrap();

        assert_eq!(
            client.unfollow_newsletter("1@newsletter").execute().await,
            Err(WaError::transport("connection closed"))
        );
    }

    #[test]
    fn address_queries_to_configured_server() {
        let client = WaClientBuilder::with_transport(MockTransport::default())
            .with_config(WaConfig {
                server_jid: "test.server".into(),
                ..Default::default()
            })
            .build()
            .unwrap();

        let request: MexRequest = client
            .follow_newsletter("1@newsletter")
            .build()
            .unwrap()
            .mex_request()
            .unwrap();

        assert_eq!(request.node.attr("to"), Some("test.server"));
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn execute_blocking_request() {
        let transport = MockTransport::replying(json!({
            "data": { "xwa2_newsletter": newsletter("1@newsletter") }
        }));
        let client = WaClientBuilder::with_blocking_transport(transport.clone())
            .build()
            .unwrap();

        let metadata = client
            .get_newsletter_info("0029VaAbCdEf")
            .execute_blocking()
            .unwrap();

        assert_eq!(metadata.id, "1@newsletter");
        assert_eq!(transport.sent.lock().len(), 1);
    }
}
