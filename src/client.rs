//! The configured HF API client and the operations it exposes.
//!
//! [`HfClient`] holds immutable configuration: application credentials, endpoints, and the
//! shared transport. Per-user state lives in [`Session`](crate::session::Session), which every
//! operation borrows mutably so failures land in its error log. Each operation performs at
//! most one HTTP round trip and records exactly one log entry when it fails.

mod authorization;
mod bytes;
mod contracts;
mod posting;
mod transport;

pub use authorization::*;

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	endpoints::ApiEndpoints,
	http::ApiHttpClient,
	obs::{self, ApiCall, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestHfClient = HfClient<ReqwestHttpClient>;

/// Configured HF API client.
///
/// Cloning is cheap: the transport is shared behind an [`Arc`]. One client can serve many
/// [`Session`](crate::session::Session)s concurrently.
pub struct HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Endpoint set the client talks to.
	pub endpoints: ApiEndpoints,
	application_id: Option<String>,
	application_secret: Option<TokenSecret>,
}
impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			endpoints: ApiEndpoints::default(),
			application_id: None,
			application_secret: None,
		}
	}

	/// Replaces the endpoint set.
	pub fn with_endpoints(mut self, endpoints: ApiEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Sets the application (client) id issued by the provider.
	pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
		self.set_application_id(application_id);

		self
	}

	/// Sets the application secret issued by the provider.
	pub fn with_application_secret(mut self, application_secret: impl Into<String>) -> Self {
		self.set_application_secret(application_secret);

		self
	}

	/// Replaces the application id in place.
	pub fn set_application_id(&mut self, application_id: impl Into<String>) {
		self.application_id = Some(application_id.into());
	}

	/// Replaces the application secret in place.
	pub fn set_application_secret(&mut self, application_secret: impl Into<String>) {
		self.application_secret = Some(TokenSecret::new(application_secret));
	}

	/// Configured application id, if any.
	pub fn application_id(&self) -> Option<&str> {
		self.application_id.as_deref()
	}

	fn require_application_id(&self) -> Result<&str> {
		self.application_id
			.as_deref()
			.filter(|id| !id.is_empty())
			.ok_or_else(|| crate::error::ConfigError::ClientIdNotSet.into())
	}

	fn require_application_secret(&self) -> Result<&TokenSecret> {
		self.application_secret
			.as_ref()
			.filter(|secret| !secret.is_empty())
			.ok_or_else(|| crate::error::ConfigError::SecretKeyNotSet.into())
	}

	/// Wraps one public operation with its span, outcome counters, and failure event.
	async fn observe<T, Fut>(&self, call: ApiCall, stage: &'static str, fut: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		let span = CallSpan::new(call, stage);

		obs::record_call_outcome(call, CallOutcome::Attempt);

		let result = span.instrument(fut).await;

		settle(call, result)
	}

	/// Synchronous counterpart of [`HfClient::observe`] for calls without I/O.
	fn observe_now<T, F>(&self, call: ApiCall, stage: &'static str, f: F) -> Result<T>
	where
		F: FnOnce() -> Result<T>,
	{
		let span = CallSpan::new(call, stage);

		obs::record_call_outcome(call, CallOutcome::Attempt);

		settle(call, span.in_scope(f))
	}
}
#[cfg(feature = "reqwest")]
impl HfClient<ReqwestHttpClient> {
	/// Creates a client backed by the default reqwest transport.
	///
	/// The transport disables redirects and applies a 30 second timeout. Configure
	/// credentials with [`HfClient::with_application_id`] and
	/// [`HfClient::with_application_secret`].
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(ReqwestHttpClient::new()?))
	}
}
impl<C> Clone for HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			endpoints: self.endpoints.clone(),
			application_id: self.application_id.clone(),
			application_secret: self.application_secret.clone(),
		}
	}
}
impl<C> Debug for HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HfClient")
			.field("endpoints", &self.endpoints)
			.field("application_id", &self.application_id)
			.field("application_secret_set", &self.application_secret.is_some())
			.finish()
	}
}

fn settle<T>(call: ApiCall, result: Result<T>) -> Result<T> {
	match &result {
		Ok(_) => obs::record_call_outcome(call, CallOutcome::Success),
		Err(e) => {
			obs::report_failure(call, e);
			obs::record_call_outcome(call, CallOutcome::Failure);
		},
	}

	result
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_redacts_the_secret() {
		let client = ReqwestHfClient::new()
			.expect("Default transport should build.")
			.with_application_id("app")
			.with_application_secret("topsecret");
		let rendered = format!("{client:?}");

		assert!(rendered.contains("application_secret_set: true"));
		assert!(!rendered.contains("topsecret"));
	}

	#[test]
	fn empty_credentials_count_as_unset() {
		let client = ReqwestHfClient::new()
			.expect("Default transport should build.")
			.with_application_id("")
			.with_application_secret("");

		assert_eq!(
			client.require_application_id().expect_err("Empty id must fail.").code(),
			"CLIENT_ID_NOT_SET"
		);
		assert_eq!(
			client.require_application_secret().expect_err("Empty secret must fail.").code(),
			"SECRET_KEY_NOT_SET"
		);
	}
}
