//! Provider endpoint set and its validating builder.
//!
//! [`ApiEndpoints::default`] targets the production HF API v2. The builder exists so hosts
//! can point the client at a mirror or a local mock; it only accepts HTTPS endpoints, with
//! plain HTTP tolerated for loopback hosts.

// std
use std::net::IpAddr;
// self
use crate::_prelude::*;

/// Production authorization endpoint (redirect target and token exchange).
pub const AUTHORIZE_URL: &str = "https://hackforums.net/api/v2/authorize";
/// Production read endpoint.
pub const READ_URL: &str = "https://hackforums.net/api/v2/read";
/// Production write endpoint.
pub const WRITE_URL: &str = "https://hackforums.net/api/v2/write";

/// Errors raised while constructing or validating an endpoint set.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum EndpointError {
	/// Endpoint string could not be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidUrl {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Endpoint set the client talks to.
///
/// Values only come out of [`ApiEndpointsBuilder::build`], and deserialization runs the same
/// validation, so every endpoint is HTTPS or a loopback host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawApiEndpoints")]
pub struct ApiEndpoints {
	authorize: Url,
	read: Url,
	write: Url,
}
impl ApiEndpoints {
	/// Creates a builder seeded with the production endpoints.
	pub fn builder() -> ApiEndpointsBuilder {
		ApiEndpointsBuilder::default()
	}

	/// Authorization endpoint: GET redirect target and POST token exchange.
	pub fn authorize(&self) -> &Url {
		&self.authorize
	}

	/// Bearer-authenticated read endpoint.
	pub fn read(&self) -> &Url {
		&self.read
	}

	/// Bearer-authenticated write endpoint.
	pub fn write(&self) -> &Url {
		&self.write
	}
}
impl Default for ApiEndpoints {
	fn default() -> Self {
		Self {
			authorize: production_url(AUTHORIZE_URL),
			read: production_url(READ_URL),
			write: production_url(WRITE_URL),
		}
	}
}
impl TryFrom<RawApiEndpoints> for ApiEndpoints {
	type Error = EndpointError;

	fn try_from(raw: RawApiEndpoints) -> Result<Self, Self::Error> {
		ApiEndpoints::builder().authorize(raw.authorize).read(raw.read).write(raw.write).build()
	}
}

#[derive(Deserialize)]
struct RawApiEndpoints {
	authorize: Url,
	read: Url,
	write: Url,
}

/// Builder for [`ApiEndpoints`] values.
#[derive(Debug, Default)]
pub struct ApiEndpointsBuilder {
	/// Authorization endpoint override.
	pub authorize: Option<Url>,
	/// Read endpoint override.
	pub read: Option<Url>,
	/// Write endpoint override.
	pub write: Option<Url>,
}
impl ApiEndpointsBuilder {
	/// Overrides the authorization endpoint.
	pub fn authorize(mut self, url: Url) -> Self {
		self.authorize = Some(url);

		self
	}

	/// Overrides the read endpoint.
	pub fn read(mut self, url: Url) -> Self {
		self.read = Some(url);

		self
	}

	/// Overrides the write endpoint.
	pub fn write(mut self, url: Url) -> Self {
		self.write = Some(url);

		self
	}

	/// Overrides all three endpoints from `base` (`<base>/authorize`, `<base>/read`,
	/// `<base>/write`).
	pub fn base(self, base: &str) -> Result<Self, EndpointError> {
		let base = base.trim_end_matches('/');
		let parse = |endpoint: &'static str| {
			Url::parse(&format!("{base}/{endpoint}"))
				.map_err(|source| EndpointError::InvalidUrl { endpoint, source })
		};

		Ok(self.authorize(parse("authorize")?).read(parse("read")?).write(parse("write")?))
	}

	/// Consumes the builder and validates the resulting endpoint set.
	pub fn build(self) -> Result<ApiEndpoints, EndpointError> {
		let defaults = ApiEndpoints::default();
		let endpoints = ApiEndpoints {
			authorize: self.authorize.unwrap_or(defaults.authorize),
			read: self.read.unwrap_or(defaults.read),
			write: self.write.unwrap_or(defaults.write),
		};

		validate_endpoint("authorize", &endpoints.authorize)?;
		validate_endpoint("read", &endpoints.read)?;
		validate_endpoint("write", &endpoints.write)?;

		Ok(endpoints)
	}
}

fn production_url(raw: &'static str) -> Url {
	// The production constants are static literals that always parse.
	Url::parse(raw).unwrap_or_else(|_| unreachable!("`{raw}` is a valid URL literal"))
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), EndpointError> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(EndpointError::InsecureEndpoint { endpoint: name, url: url.to_string() }),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(url::Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
