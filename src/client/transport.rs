//! Form-encoded POST dispatch and response normalization shared by every operation.

// crates.io
use oauth2::{
	AsyncHttpClient,
	http::{
		Method, Request,
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
	},
};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	asks::{ApiResponse, Asks, lenient},
	auth::TokenSecret,
	client::HfClient,
	error::{ConfigError, ResponseError, TransportError, ValidationError},
	http::{self, ApiHttpClient, RawResponse, ResponseMetadata, ResponseMetadataSlot},
	obs::ApiCall,
	session::Session,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_ACCEPT: &str = "application/json";

/// How a successfully parsed JSON value that is not an object is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NonObject {
	/// Replace it with an empty mapping.
	Coerce,
	/// Fail with [`ResponseError::NotAnObject`].
	Reject,
}

impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Sends one form-encoded POST and returns the body whatever the HTTP status.
	///
	/// The provider reports failures inside the body, so non-2xx responses are not errors at
	/// this layer. Redirects are never followed by the bundled transport.
	pub async fn send_request(
		&self,
		url: &Url,
		form: &[(&str, &str)],
		bearer: Option<&TokenSecret>,
	) -> Result<RawResponse> {
		let body = form_urlencoded::Serializer::new(String::new()).extend_pairs(form).finish();
		let mut builder = Request::builder()
			.method(Method::POST)
			.uri(url.as_str())
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.header(ACCEPT, JSON_ACCEPT);

		if let Some(token) = bearer {
			builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
		}

		let request = builder.body(body.into_bytes()).map_err(ConfigError::from)?;
		let slot = ResponseMetadataSlot::default();
		let handle = self.http_client.with_metadata(slot.clone());
		let response = handle.call(request).await.map_err(http::map_transport_error)?;
		let metadata = slot.take().or_else(|| {
			Some(ResponseMetadata { status: Some(response.status().as_u16()), retry_after: None })
		});

		Ok(RawResponse { body: response.into_body(), metadata })
	}

	/// Queries the read endpoint.
	///
	/// A reply that parses as JSON but is not an object fails with `BAD_RESPONSE_FROM_HF`.
	pub async fn read(&self, session: &mut Session, asks: &Asks) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::Read, "read", async {
				let token = session.require_access_token()?;

				self.dispatch_read(token, asks).await
			})
			.await;

		session.record(result)
	}

	/// Submits to the write endpoint.
	///
	/// A reply that parses as JSON but is not an object is treated as an empty mapping.
	pub async fn write(&self, session: &mut Session, asks: &Asks) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::Write, "write", async {
				let token = session.require_access_token()?;

				self.dispatch_write(token, asks).await
			})
			.await;

		session.record(result)
	}

	pub(crate) async fn dispatch_read(
		&self,
		token: &TokenSecret,
		asks: &Asks,
	) -> Result<ApiResponse> {
		self.dispatch_asks(self.endpoints.read(), token, asks, NonObject::Reject).await
	}

	pub(crate) async fn dispatch_write(
		&self,
		token: &TokenSecret,
		asks: &Asks,
	) -> Result<ApiResponse> {
		self.dispatch_asks(self.endpoints.write(), token, asks, NonObject::Coerce).await
	}

	async fn dispatch_asks(
		&self,
		url: &Url,
		token: &TokenSecret,
		asks: &Asks,
		non_object: NonObject,
	) -> Result<ApiResponse> {
		if asks.is_empty() {
			return Err(ValidationError::NoDataRequested.into());
		}

		let encoded = asks.encode()?;
		let raw = self.send_request(url, &[("asks", encoded.as_str())], Some(token)).await?;

		normalize(raw, non_object)
	}
}

/// Classifies a raw reply into a parsed mapping or the matching error.
pub(crate) fn normalize(raw: RawResponse, non_object: NonObject) -> Result<ApiResponse> {
	let status = raw.status();

	if raw.body.trim_ascii().is_empty() {
		return Err(TransportError::EmptyResponse { status }.into());
	}

	let value = serde_json::from_slice::<Value>(&raw.body)
		.map_err(|source| ResponseError::MalformedJson { source, status })?;
	let map = match value {
		Value::Object(map) => map,
		_ if non_object == NonObject::Coerce => Map::new(),
		other => {
			return Err(ResponseError::NotAnObject { kind: lenient::kind(&other), status }.into());
		},
	};

	if map.get("success").is_some_and(|success| !lenient::is_truthy(success)) {
		let message = map.get("message").and_then(|message| match message {
			Value::Null => None,
			Value::String(text) => Some(text.clone()),
			other => Some(other.to_string()),
		});

		return Err(Error::Rejected { message, status, retry_after: raw.retry_after() });
	}

	Ok(map)
}
