//! Authorization-code sign-in: the outbound redirect and the callback exchange.
//!
//! [`HfClient::start_auth`] builds the redirect the host sends to the user agent, and
//! [`HfClient::finish_auth`] validates the provider's callback before exchanging the code for
//! a bearer token. Both record failures on the caller's [`Session`].

// self
use crate::{
	_prelude::*,
	asks::lenient,
	auth::{self, UserId},
	client::{
		HfClient,
		transport::{self, NonObject},
	},
	error::ResponseError,
	http::ApiHttpClient,
	obs::ApiCall,
	session::Session,
};

/// Redirect that sends the user agent to the provider's consent page.
///
/// Hosts respond with [`AuthorizationRedirect::STATUS`] and a `Location` header set to
/// [`AuthorizationRedirect::location`], then stop handling the current request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRedirect {
	/// Authorize endpoint carrying `response_type`, `client_id`, and `state`.
	pub location: Url,
	/// Anti-forgery token sent with the redirect.
	pub state: String,
}
impl AuthorizationRedirect {
	/// HTTP status hosts should answer with.
	pub const STATUS: u16 = 302;
}

/// Parameters the provider appends to the redirect URI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
	/// Authorization code, restricted to ASCII alphanumerics.
	pub code: String,
	/// Anti-forgery token echoed by the provider, restricted to ASCII alphanumerics.
	pub state: String,
}
impl CallbackParams {
	/// Builds callback parameters from explicit values, sanitizing both.
	pub fn new(code: &str, state: &str) -> Self {
		Self { code: auth::sanitize_alphanumeric(code), state: auth::sanitize_alphanumeric(state) }
	}

	/// Parses a raw query string, with or without the leading `?`.
	///
	/// Keys match case-insensitively and the last occurrence of a repeated key wins. Missing
	/// keys leave the field empty.
	pub fn from_query(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let mut code = None;
		let mut state = None;

		for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
			if key.eq_ignore_ascii_case("code") {
				code = Some(value);
			} else if key.eq_ignore_ascii_case("state") {
				state = Some(value);
			}
		}

		Self::new(code.as_deref().unwrap_or_default(), state.as_deref().unwrap_or_default())
	}

	/// Parses the query component of the redirect URL.
	pub fn from_url(url: &Url) -> Self {
		Self::from_query(url.query().unwrap_or_default())
	}
}

/// Successful token exchange body.
#[derive(Debug, Deserialize)]
struct TokenGrant {
	access_token: String,
	#[serde(default, deserialize_with = "lenient::int")]
	uid: i64,
}

impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Builds the redirect to the provider's authorization endpoint.
	///
	/// The query carries `response_type=code`, the application id, and the session's current
	/// anti-forgery token. Fails with `CLIENT_ID_NOT_SET` when no application id is configured.
	pub fn start_auth(&self, session: &mut Session) -> Result<AuthorizationRedirect> {
		let result = self.observe_now(ApiCall::StartAuth, "start_auth", || {
			let application_id = self.require_application_id()?;
			let state = session.state().to_owned();
			let mut location = self.endpoints.authorize().clone();

			location
				.query_pairs_mut()
				.append_pair("response_type", "code")
				.append_pair("client_id", application_id)
				.append_pair("state", &state);

			Ok(AuthorizationRedirect { location, state })
		});

		session.record(result)
	}

	/// Completes sign-in by exchanging the callback's authorization code for a bearer token.
	///
	/// Checks run in order and the first failure wins: the callback state must match
	/// `expected_state` when the latter sanitizes to a non-empty value, the code must be
	/// present, and both application credentials must be configured. Only then is the
	/// exchange sent. The returned token and user id are stored on `session`; the token is
	/// kept exactly as issued.
	pub async fn finish_auth(
		&self,
		session: &mut Session,
		callback: &CallbackParams,
		expected_state: &str,
	) -> Result<()> {
		let result = self
			.observe(ApiCall::FinishAuth, "finish_auth", async {
				let expected_state = auth::sanitize_alphanumeric(expected_state);

				if !expected_state.is_empty() && callback.state.trim() != expected_state.trim() {
					return Err(Error::InvalidState);
				}
				if callback.code.is_empty() {
					return Err(Error::InvalidCode);
				}

				let application_id = self.require_application_id()?;
				let application_secret = self.require_application_secret()?;
				let form = [
					("grant_type", "authorization_code"),
					("client_id", application_id),
					("client_secret", application_secret.expose()),
					("code", callback.code.as_str()),
				];
				let raw = self.send_request(self.endpoints.authorize(), &form, None).await?;
				let body = transport::normalize(raw, NonObject::Reject)?;
				let grant: TokenGrant = serde_path_to_error::deserialize(Value::Object(body))
					.map_err(|source| ResponseError::TokenGrant { source })?;

				#[cfg(feature = "tracing")]
				tracing::debug!(uid = grant.uid, "Authorization code exchanged.");

				Ok(grant)
			})
			.await;

		let grant = session.record(result)?;

		session.authenticate(grant.access_token, UserId::new(grant.uid));

		Ok(())
	}
}
