//! Client-level error types and the wire-compatible error codes they map to.
//!
//! Every variant resolves to a stable code through [`Error::code`]; those codes are what
//! [`Session`](crate::session::Session) appends to its error log.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Code logged when the transport fails or the provider answers with an empty body.
pub const BAD_RESPONSE_FROM_HF_OR_CURL_ERROR: &str = "BAD_RESPONSE_FROM_HF_OR_CURL_ERROR";
/// Code logged when the provider answers with something other than the expected JSON.
pub const BAD_RESPONSE_FROM_HF: &str = "BAD_RESPONSE_FROM_HF";

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or session state is incomplete.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Caller-supplied input failed validation before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Transport failure (DNS, TCP, TLS, timeout) or an empty response body.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider responded with a body the client could not interpret.
	#[error(transparent)]
	Response(#[from] ResponseError),

	/// Callback `state` does not match the value the caller expected.
	#[error("Authorization callback state does not match the expected value.")]
	InvalidState,
	/// Callback carried no usable authorization code.
	#[error("Authorization callback is missing the code parameter.")]
	InvalidCode,
	/// Provider answered with `success: false`.
	#[error("Provider rejected the request: {}.", .message.as_deref().unwrap_or("no message"))]
	Rejected {
		/// Provider-supplied `message`, forwarded verbatim when present.
		message: Option<String>,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
}
impl Error {
	/// Returns the code recorded in the session error log for this failure.
	///
	/// Provider rejections return the provider's message verbatim, falling back to
	/// [`BAD_RESPONSE_FROM_HF`] when the rejection carried none.
	pub fn code(&self) -> &str {
		match self {
			Self::Config(e) => e.code(),
			Self::Validation(e) => e.code(),
			Self::Transport(_) => BAD_RESPONSE_FROM_HF_OR_CURL_ERROR,
			Self::Response(_) => BAD_RESPONSE_FROM_HF,
			Self::InvalidState => "INVALID_STATE",
			Self::InvalidCode => "INVALID_CODE",
			Self::Rejected { message, .. } => message.as_deref().unwrap_or(BAD_RESPONSE_FROM_HF),
		}
	}
}

/// Configuration and session-state failures raised before contacting the provider.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Application (client) id has not been configured.
	#[error("Application id is not set.")]
	ClientIdNotSet,
	/// Application secret has not been configured.
	#[error("Application secret is not set.")]
	SecretKeyNotSet,
	/// Session carries no access token.
	#[error("Access token is not set.")]
	AccessTokenNotSet,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Returns the wire-compatible code for this failure.
	pub fn code(&self) -> &'static str {
		match self {
			Self::ClientIdNotSet => "CLIENT_ID_NOT_SET",
			Self::SecretKeyNotSet => "SECRET_KEY_NOT_SET",
			Self::AccessTokenNotSet => "ACCESS_TOKEN_NOT_SET",
			Self::HttpClientBuild { .. } | Self::HttpRequest(_) =>
				BAD_RESPONSE_FROM_HF_OR_CURL_ERROR,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Input validation failures; none of these reach the network.
#[derive(Debug, ThisError)]
pub enum ValidationError {
	/// Query payload was empty.
	#[error("No data was requested.")]
	NoDataRequested,
	/// Query payload could not be encoded as JSON.
	#[error("Query payload could not be encoded as JSON.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Thread id was missing or not positive.
	#[error("Thread id must be positive.")]
	NoTidSet,
	/// Forum id was missing or not positive.
	#[error("Forum id must be positive.")]
	NoFidSet,
	/// Recipient user id was missing or not positive.
	#[error("User id must be positive.")]
	NoUidSet,
	/// Amount was missing or not positive.
	#[error("Amount must be positive.")]
	NoAmountSet,
	/// Message body was shorter than the minimum length.
	#[error("Message must contain at least {min} characters.")]
	NoMessageSet {
		/// Minimum accepted character count.
		min: usize,
	},
	/// Thread subject was shorter than the minimum length.
	#[error("Subject must contain at least {min} characters.")]
	NoSubjectSet {
		/// Minimum accepted character count.
		min: usize,
	},
	/// Transfer reason exceeded the maximum length.
	#[error("Reason exceeds {max} characters.")]
	ReasonTooLong {
		/// Maximum accepted character count.
		max: usize,
	},
	/// Contract id was missing or not positive.
	#[error("Contract id must be positive.")]
	NoCidSet,
	/// Contract counterparty user id was missing or not positive.
	#[error("Contract data must carry a positive `_uid`.")]
	NoUidSetInDataArray,
	/// Contract position was empty.
	#[error("Contract data must carry a `_position`.")]
	NoPositionSetInDataArray,
	/// Contract terms were empty.
	#[error("Contract data must carry `_terms`.")]
	NoTermsSetInDataArray,
}
impl ValidationError {
	/// Returns the wire-compatible code for this failure.
	pub fn code(&self) -> &'static str {
		match self {
			Self::NoDataRequested => "NO_DATA_REQUESTED",
			Self::Encode { .. } => "UNENCODABLE_DATA",
			Self::NoTidSet => "NO_TID_SET",
			Self::NoFidSet => "NO_FID_SET",
			Self::NoUidSet => "NO_UID_SET",
			Self::NoAmountSet => "NO_AMOUNT_SET",
			Self::NoMessageSet { .. } => "NO_MESSAGE_SET",
			Self::NoSubjectSet { .. } => "NO_SUBJECT_SET",
			Self::ReasonTooLong { .. } => "REASON_MAX_LENGTH_EXCEEDED_192",
			Self::NoCidSet => "NO_CID_SET",
			Self::NoUidSetInDataArray => "NO_UID_SET_IN_DATA_ARRAY",
			Self::NoPositionSetInDataArray => "NO_POSITION_SET_IN_DATA_ARRAY",
			Self::NoTermsSetInDataArray => "NO_TERMS_SET_IN_DATA_ARRAY",
		}
	}
}

/// Transport-level failures (network, IO, empty replies).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the HF API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the HF API.")]
	Io(#[from] std::io::Error),
	/// Transport failed without a structured error.
	#[error("HTTP client error occurred while calling the HF API: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
	/// Provider answered with an empty body.
	#[error("HF API returned an empty response.")]
	EmptyResponse {
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Provider responses that could not be interpreted.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Body was not valid JSON.
	#[error("HF API returned malformed JSON.")]
	MalformedJson {
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Body was valid JSON but not an object.
	#[error("HF API returned a JSON {kind} where an object was expected.")]
	NotAnObject {
		/// JSON kind that was received instead.
		kind: &'static str,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token exchange response lacked a usable `access_token`.
	#[error("Token exchange response is missing a usable access token.")]
	TokenGrant {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
