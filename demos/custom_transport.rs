//! Demonstrates plugging a custom HTTP transport into the client.
//!
//! 1. Implement [`ApiHttpClient`] so the transport records [`ResponseMetadata`] via the provided
//!    [`ResponseMetadataSlot`].
//! 2. Return transport failures through [`HttpClientError`]; the client maps them to
//!    `BAD_RESPONSE_FROM_HF_OR_CURL_ERROR`.
//! 3. Pass the transport to [`HfClient::with_http_client`] and call operations as usual.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
};
// crates.io
use color_eyre::Result;
use time::Duration;
// self
use hf_api::{
	client::HfClient,
	http::{
		ApiHttpClient, ResponseMetadata, ResponseMetadataSlot,
		oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse},
	},
	session::Session,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = HfClient::with_http_client(MockHttpClient::success());
	let mut session = Session::with_access_token("demotoken");
	let balance = client.vault_balance(&mut session).await?;

	println!("Vault balance reported by the mock transport: {balance}.");

	let failing = HfClient::with_http_client(MockHttpClient::transport_error(
		MockTransportError::DnsFailure { host: "hackforums.net" },
	));

	match failing.vault_balance(&mut session).await {
		Ok(_) => println!("Mock transport unexpectedly succeeded."),
		Err(e) => println!("Transport error surfaced as {}: {e}.", e.code()),
	}

	let throttled = HfClient::with_http_client(MockHttpClient::other_error("rate limited"));

	match throttled.make_post(&mut session, 1, "hello").await {
		Ok(_) => println!("Mock transport unexpectedly accepted the post."),
		Err(e) => println!("An HttpClientError::Other variant made it through: {e}."),
	}

	println!("Session error log: {:?}.", session.errors().entries());

	Ok(())
}

#[derive(Clone, Debug)]
enum MockTransportError {
	DnsFailure { host: &'static str },
}
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::DnsFailure { host } => write!(f, "DNS lookup failed for {host}"),
		}
	}
}
impl StdError for MockTransportError {}

#[derive(Clone)]
enum MockBehavior {
	Success,
	TransportError(MockTransportError),
	Other(&'static str),
}

#[derive(Clone)]
struct MockHttpClient {
	behavior: MockBehavior,
}
impl MockHttpClient {
	fn success() -> Self {
		Self { behavior: MockBehavior::Success }
	}

	fn transport_error(error: MockTransportError) -> Self {
		Self { behavior: MockBehavior::TransportError(error) }
	}

	fn other_error(message: &'static str) -> Self {
		Self { behavior: MockBehavior::Other(message) }
	}
}
impl ApiHttpClient for MockHttpClient {
	type Handle = MockHttpHandle;
	type TransportError = MockTransportError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		MockHttpHandle { slot, behavior: self.behavior.clone() }
	}
}

struct MockHttpHandle {
	slot: ResponseMetadataSlot,
	behavior: MockBehavior,
}
impl<'a> AsyncHttpClient<'a> for MockHttpHandle {
	type Error = HttpClientError<MockTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, _request: HttpRequest) -> Self::Future {
		let slot = self.slot.clone();
		let behavior = self.behavior.clone();

		Box::pin(async move {
			slot.take();

			match behavior {
				MockBehavior::Success => {
					slot.store(ResponseMetadata { status: Some(200), retry_after: None });

					Ok(HttpResponse::new(br#"{"me":{"uid":"1","vault":"4200"}}"#.to_vec()))
				},
				MockBehavior::TransportError(error) => {
					slot.store(ResponseMetadata {
						status: None,
						retry_after: Some(Duration::seconds(2)),
					});

					// `Reqwest` is the variant oauth2 reserves for boxed transport errors of
					// any kind.
					Err(HttpClientError::Reqwest(Box::new(error)))
				},
				MockBehavior::Other(message) => Err(HttpClientError::Other(message.to_owned())),
			}
		})
	}
}
