//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
pub use std::{future::Future, pin::Pin, sync::Arc};
// crates.io
pub use parking_lot::Mutex;
pub use serde_json::Value;
// self
pub use hf_api::error::Error;

use hf_api::{
	client::{HfClient, ReqwestHfClient},
	endpoints::ApiEndpoints,
	http::ReqwestHttpClient,
	session::Session,
	url::Url,
};

/// Builds an endpoint set rooted at `base_url` (for example an `httpmock` server).
pub fn endpoints_at(base_url: &str) -> ApiEndpoints {
	let base = base_url.trim_end_matches('/');

	ApiEndpoints::builder()
		.authorize(
			Url::parse(&format!("{base}/api/v2/authorize"))
				.expect("Failed to parse the test authorize endpoint."),
		)
		.read(
			Url::parse(&format!("{base}/api/v2/read"))
				.expect("Failed to parse the test read endpoint."),
		)
		.write(
			Url::parse(&format!("{base}/api/v2/write"))
				.expect("Failed to parse the test write endpoint."),
		)
		.build()
		.expect("Failed to build the test endpoint set.")
}

/// Constructs a reqwest-backed client pointed at `endpoints` with both credentials set.
pub fn build_reqwest_test_client(
	endpoints: ApiEndpoints,
	application_id: &str,
	application_secret: &str,
) -> ReqwestHfClient {
	let http_client =
		ReqwestHttpClient::new().expect("Failed to build the reqwest transport for tests.");

	HfClient::with_http_client(http_client)
		.with_endpoints(endpoints)
		.with_application_id(application_id)
		.with_application_secret(application_secret)
}

/// Returns a fresh session that already carries `access_token`.
pub fn authorized_session(access_token: &str) -> Session {
	Session::with_access_token(access_token)
}
