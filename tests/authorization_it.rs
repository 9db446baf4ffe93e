mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use hf_api::{
	client::{AuthorizationRedirect, CallbackParams, ReqwestHfClient},
	error::{BAD_RESPONSE_FROM_HF, ResponseError},
	session::Session,
};

const APPLICATION_ID: &str = "app-42";
const APPLICATION_SECRET: &str = "shh-secret";

fn test_client(server: &MockServer) -> ReqwestHfClient {
	build_reqwest_test_client(endpoints_at(&server.base_url()), APPLICATION_ID, APPLICATION_SECRET)
}

#[test]
fn start_auth_builds_the_consent_redirect_without_a_runtime() {
	let client = build_reqwest_test_client(
		endpoints_at("http://127.0.0.1:8080"),
		APPLICATION_ID,
		APPLICATION_SECRET,
	);
	let mut session = Session::new();

	session.set_state("abcDEF123456");

	let redirect = client.start_auth(&mut session).expect("Redirect should build.");

	assert_eq!(AuthorizationRedirect::STATUS, 302);
	assert_eq!(redirect.state, "abcDEF123456");
	assert_eq!(redirect.location.path(), "/api/v2/authorize");
	assert_eq!(
		redirect.location.query(),
		Some("response_type=code&client_id=app-42&state=abcDEF123456")
	);
	assert!(session.errors().is_empty());
}

#[test]
fn start_auth_requires_an_application_id() {
	let client = ReqwestHfClient::new().expect("Default transport should build.");
	let mut session = Session::new();
	let err = client.start_auth(&mut session).expect_err("Missing id must fail.");

	assert_eq!(err.code(), "CLIENT_ID_NOT_SET");
	assert_eq!(session.errors().entries(), ["CLIENT_ID_NOT_SET"]);
}

#[tokio::test]
async fn finish_auth_exchanges_the_code_and_stores_the_raw_token() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/authorize")
				.header("content-type", "application/x-www-form-urlencoded")
				.header_missing("authorization")
				.form_urlencoded_tuple("grant_type", "authorization_code")
				.form_urlencoded_tuple("client_id", APPLICATION_ID)
				.form_urlencoded_tuple("client_secret", APPLICATION_SECRET)
				.form_urlencoded_tuple("code", "code123");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"access_token":"tok-en.with/punct","uid":"1337"}"#);
		})
		.await;
	let mut session = Session::new();
	let expected_state = session.state().to_owned();
	let callback = CallbackParams::from_query(&format!("?code=code-123&state={expected_state}"));

	client
		.finish_auth(&mut session, &callback, &expected_state)
		.await
		.expect("Token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(session.access_token().map(|token| token.expose()), Some("tok-en.with/punct"));
	assert_eq!(session.uid().map(|uid| uid.get()), Some(1337));
	assert!(session.errors().is_empty());
}

#[tokio::test]
async fn finish_auth_rejects_mismatched_state_without_calling_the_provider() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/authorize");
			then.status(200).body(r#"{"access_token":"never"}"#);
		})
		.await;
	let mut session = Session::new();
	let callback = CallbackParams::new("code123", "attackerState");
	let err = client
		.finish_auth(&mut session, &callback, "expectedState")
		.await
		.expect_err("Mismatched state must fail.");

	assert_eq!(err.code(), "INVALID_STATE");
	assert_eq!(session.errors().entries(), ["INVALID_STATE"]);
	assert!(!session.is_authenticated());

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn finish_auth_validates_code_then_credentials() {
	let server = MockServer::start_async().await;
	let endpoints = endpoints_at(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/authorize");
			then.status(200).body(r#"{"access_token":"never"}"#);
		})
		.await;
	let mut session = Session::new();
	let complete = build_reqwest_test_client(endpoints.clone(), APPLICATION_ID, APPLICATION_SECRET);
	let err = complete
		.finish_auth(&mut session, &CallbackParams::new("!!!", "st"), "st")
		.await
		.expect_err("A code that sanitizes to nothing must fail.");

	assert_eq!(err.code(), "INVALID_CODE");

	let without_secret = ReqwestHfClient::new()
		.expect("Default transport should build.")
		.with_endpoints(endpoints)
		.with_application_id(APPLICATION_ID);
	let err = without_secret
		.finish_auth(&mut session, &CallbackParams::new("code123", "st"), "")
		.await
		.expect_err("Missing secret must fail.");

	assert_eq!(err.code(), "SECRET_KEY_NOT_SET");
	assert_eq!(session.errors().entries(), ["INVALID_CODE", "SECRET_KEY_NOT_SET"]);

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn finish_auth_surfaces_provider_rejections_and_missing_tokens() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mut rejected = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/authorize");
			then.status(400)
				.header("content-type", "application/json")
				.body(r#"{"success":false,"message":"INVALID_AUTHORIZATION_CODE"}"#);
		})
		.await;
	let mut session = Session::new();
	let callback = CallbackParams::new("code123", "");
	let err = client
		.finish_auth(&mut session, &callback, "")
		.await
		.expect_err("Provider rejection must fail.");

	assert_eq!(err.code(), "INVALID_AUTHORIZATION_CODE");
	assert!(matches!(err, Error::Rejected { status: Some(400), .. }));

	rejected.delete_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/authorize");
			then.status(200).header("content-type", "application/json").body(r#"{"uid":5}"#);
		})
		.await;

	let err = client
		.finish_auth(&mut session, &callback, "")
		.await
		.expect_err("Missing access_token must fail.");

	assert_eq!(err.code(), BAD_RESPONSE_FROM_HF);
	assert!(matches!(err, Error::Response(ResponseError::TokenGrant { .. })));
	assert_eq!(session.errors().entries(), ["INVALID_AUTHORIZATION_CODE", BAD_RESPONSE_FROM_HF]);
	assert!(!session.is_authenticated());
}
