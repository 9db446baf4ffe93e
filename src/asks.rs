//! Request payloads sent to the read and write endpoints.
//!
//! An [`Asks`] maps a resource key (`me`, `posts`, `bytes`, `contracts`, ...) to the fields
//! requested or submitted for it. Callers can build arbitrary shapes; the typed payloads in
//! the submodules cover the operations the client wraps.

mod bytes;
mod contract;
mod posting;

pub(crate) mod lenient;

pub use bytes::*;
pub use contract::*;
pub use posting::*;

// self
use crate::{_prelude::*, error::ValidationError};

/// Parsed success body returned by read and write calls.
pub type ApiResponse = Map<String, Value>;

/// Query payload keyed by resource type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asks(Map<String, Value>);
impl Asks {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fields requested for `resource`, replacing any previous value.
	pub fn with(mut self, resource: impl Into<String>, fields: Value) -> Self {
		self.0.insert(resource.into(), fields);

		self
	}

	/// Builds a single-resource query from a serializable payload.
	pub fn from_fields<T>(resource: impl Into<String>, fields: &T) -> Result<Self, ValidationError>
	where
		T: ?Sized + Serialize,
	{
		let value =
			serde_json::to_value(fields).map_err(|source| ValidationError::Encode { source })?;

		Ok(Self::new().with(resource, value))
	}

	/// Returns `true` when no resource has been requested.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Borrows the underlying mapping.
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Encodes the query as the JSON text sent in the `asks` form field.
	pub(crate) fn encode(&self) -> Result<String, ValidationError> {
		serde_json::to_string(&self.0).map_err(|source| ValidationError::Encode { source })
	}
}
impl From<Map<String, Value>> for Asks {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn with_builds_nested_resources() {
		let asks = Asks::new().with("me", json!({ "uid": true, "vault": true }));

		assert!(!asks.is_empty());
		assert_eq!(
			asks.encode().expect("Query should encode."),
			r#"{"me":{"uid":true,"vault":true}}"#
		);
	}

	#[test]
	fn empty_queries_are_detected() {
		assert!(Asks::new().is_empty());
		assert!(Asks::from(Map::new()).is_empty());
	}

	#[test]
	fn unencodable_payloads_surface_a_validation_error() {
		let mut fields = std::collections::HashMap::new();

		fields.insert((1, 2), "tuple keys cannot become JSON object keys");

		let err = Asks::from_fields("posts", &fields).expect_err("Tuple keys must not encode.");

		assert_eq!(err.code(), "UNENCODABLE_DATA");
	}
}
