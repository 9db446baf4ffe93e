mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use hf_api::{
	asks::Asks,
	client::ReqwestHfClient,
	error::{BAD_RESPONSE_FROM_HF, BAD_RESPONSE_FROM_HF_OR_CURL_ERROR, TransportError},
};

fn test_client(server: &MockServer) -> ReqwestHfClient {
	build_reqwest_test_client(endpoints_at(&server.base_url()), "app", "secret")
}

fn me_asks() -> Asks {
	Asks::new().with("me", json!({ "uid": true, "username": true }))
}

#[tokio::test]
async fn read_posts_asks_with_the_bearer_token() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/read")
				.header("authorization", "Bearer tok123")
				.header("accept", "application/json")
				.form_urlencoded_tuple("asks", r#"{"me":{"uid":true,"username":true}}"#);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"success":true,"me":{"uid":"7","username":"neo"}}"#);
		})
		.await;
	let mut session = authorized_session("tok123");
	let response = client.read(&mut session, &me_asks()).await.expect("Read should succeed.");

	mock.assert_async().await;

	assert_eq!(response["me"]["username"], "neo");
	assert!(session.errors().is_empty());
}

#[tokio::test]
async fn write_logs_the_provider_message_verbatim() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/write");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"success":false,"message":"over limit"}"#);
		})
		.await;
	let mut session = authorized_session("tok123");
	let asks = Asks::new().with("posts", json!({ "_tid": 1, "_message": "hello" }));
	let err = client.write(&mut session, &asks).await.expect_err("Rejected write must fail.");

	mock.assert_async().await;

	assert_eq!(err.code(), "over limit");
	assert_eq!(session.errors().entries(), ["over limit"]);
}

#[tokio::test]
async fn non_json_and_empty_bodies_map_to_distinct_codes() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/read");
			then.status(502).body("<html>Bad gateway</html>");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/write");
			then.status(200).body("  ");
		})
		.await;

	let mut session = authorized_session("tok123");
	let read_err =
		client.read(&mut session, &me_asks()).await.expect_err("HTML body must not parse.");
	let write_err =
		client.write(&mut session, &me_asks()).await.expect_err("Blank body must fail.");

	assert_eq!(read_err.code(), BAD_RESPONSE_FROM_HF);
	assert_eq!(write_err.code(), BAD_RESPONSE_FROM_HF_OR_CURL_ERROR);
	assert!(matches!(
		write_err,
		Error::Transport(TransportError::EmptyResponse { status: Some(200) })
	));
	assert_eq!(
		session.errors().entries(),
		[BAD_RESPONSE_FROM_HF, BAD_RESPONSE_FROM_HF_OR_CURL_ERROR]
	);
}

#[tokio::test]
async fn write_coerces_non_object_replies_but_read_rejects_them() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);

	server
		.mock_async(|when, then| {
			when.method(POST);
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;

	let mut session = authorized_session("tok123");
	let written = client.write(&mut session, &me_asks()).await.expect("Write should coerce.");

	assert!(written.is_empty());

	let err = client.read(&mut session, &me_asks()).await.expect_err("Read must reject arrays.");

	assert_eq!(err.code(), BAD_RESPONSE_FROM_HF);
	assert_eq!(session.errors().len(), 1);
}

#[tokio::test]
async fn missing_token_and_empty_asks_fail_before_the_network() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST);
			then.status(200).body("{}");
		})
		.await;
	let mut anonymous = hf_api::session::Session::new();
	let err = client.read(&mut anonymous, &me_asks()).await.expect_err("No token must fail.");

	assert_eq!(err.code(), "ACCESS_TOKEN_NOT_SET");

	let mut session = authorized_session("tok123");
	let err = client.write(&mut session, &Asks::new()).await.expect_err("Empty asks must fail.");

	assert_eq!(err.code(), "NO_DATA_REQUESTED");

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn unreachable_hosts_are_transport_failures() {
	// Port 9 (discard) is closed on loopback, so the connection is refused.
	let client = build_reqwest_test_client(endpoints_at("http://127.0.0.1:9"), "app", "secret");
	let mut session = authorized_session("tok123");
	let err = client.read(&mut session, &me_asks()).await.expect_err("Closed port must fail.");

	assert_eq!(err.code(), BAD_RESPONSE_FROM_HF_OR_CURL_ERROR);
	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(session.errors().entries(), [BAD_RESPONSE_FROM_HF_OR_CURL_ERROR]);
}
