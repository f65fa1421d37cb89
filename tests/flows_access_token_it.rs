// crates.io
use httpmock::prelude::*;
// self
use oauth1a_client::{
	_preludet::*,
	auth::{Consumer, ServiceId, Token, TokenKind},
	error::ProtocolError,
	flows::FlowStage,
	provider::ServiceDescriptor,
	store::TokenStore,
};

const CONSUMER_KEY: &str = "consumer-access";
const CONSUMER_SECRET: &str = "consumer-access-secret";
const CALLBACK_URL: &str = "https://client.example/callback";

fn build_descriptor(server: &MockServer) -> ServiceDescriptor {
	let service_id = ServiceId::new("mock-access-token")
		.expect("Service identifier should be valid for access token tests.");

	ServiceDescriptor::builder(service_id)
		.request_token_endpoint(
			Url::parse(&server.url("/oauth/request"))
				.expect("Mock request-token endpoint should parse successfully."),
		)
		.access_token_endpoint(
			Url::parse(&server.url("/oauth/access"))
				.expect("Mock access-token endpoint should parse successfully."),
		)
		.authorization_endpoint(
			Url::parse(&server.url("/oauth/authorize"))
				.expect("Mock authorization endpoint should parse successfully."),
		)
		.build()
		.expect("Service descriptor should build successfully.")
}

fn build_consumer() -> Consumer {
	Consumer::new(CONSUMER_KEY, CONSUMER_SECRET)
		.expect("Consumer credential should be valid for access token tests.")
}

#[tokio::test]
async fn access_exchange_persists_the_access_token() {
	let server = MockServer::start_async().await;
	let descriptor = build_descriptor(&server);
	let (flow, store) = build_reqwest_test_flow(descriptor.clone(), build_consumer(), CALLBACK_URL);
	let request_token = Token::new(TokenKind::Request, "rt", "rs");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth/access")
				.header_matches("Authorization", "oauth_token=\"rt\"")
				.header_matches("Authorization", "oauth_verifier=\"verifier-123\"");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=at&oauth_token_secret=as");
		})
		.await;
	let token = flow
		.exchange_for_access_token(&request_token, "verifier-123")
		.await
		.expect("Access token exchange should succeed against the mock endpoint.");

	assert_eq!(token, Token::new(TokenKind::Access, "at", "as"));

	mock.assert_async().await;

	let stored = store
		.fetch(&descriptor.id)
		.await
		.expect("Token store fetch should succeed.")
		.expect("The access token should be persisted.");

	assert!(stored.is_access());
	assert_eq!(
		flow.stage().await.expect("Stage lookup should succeed."),
		FlowStage::Authorized,
	);
}

#[tokio::test]
async fn access_exchange_surfaces_endpoint_errors_without_persisting() {
	let server = MockServer::start_async().await;
	let descriptor = build_descriptor(&server);
	let (flow, store) = build_reqwest_test_flow(descriptor.clone(), build_consumer(), CALLBACK_URL);
	let request_token = Token::new(TokenKind::Request, "rt", "rs");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/access");
			then.status(401).body("Verifier rejected");
		})
		.await;
	let err = flow
		.exchange_for_access_token(&request_token, "wrong-verifier")
		.await
		.expect_err("A rejected verifier should surface as a protocol error.");

	assert!(matches!(
		err,
		Error::Protocol(ProtocolError::Endpoint { status: 401, .. }),
	));

	mock.assert_async().await;

	let stored = store.fetch(&descriptor.id).await.expect("Token store fetch should succeed.");

	assert_eq!(stored, None);
}
