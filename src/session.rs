//! Per-user runtime state threaded through every client call.
//!
//! A [`Session`] carries the anti-forgery token that round-trips through the authorization
//! redirect, the bearer token once sign-in completes, the authenticated user id, and an
//! append-only [`ErrorLog`]. One configured [`HfClient`](crate::client::HfClient) can serve
//! any number of sessions concurrently; a single session belongs to one end user.

// std
use std::slice::Iter;
// self
use crate::{
	_prelude::*,
	auth::{self, TokenSecret, UserId},
};

/// Ordered, append-only log of error codes recorded by failed calls.
///
/// The log is never cleared automatically, so long-lived sessions keep their full history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorLog(Vec<String>);
impl ErrorLog {
	/// Every recorded code, oldest first.
	pub fn entries(&self) -> &[String] {
		&self.0
	}

	/// Most recently recorded code.
	pub fn last(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}

	/// Number of recorded codes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no failure has been recorded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over recorded codes, oldest first.
	pub fn iter(&self) -> Iter<'_, String> {
		self.0.iter()
	}

	pub(crate) fn push(&mut self, code: impl Into<String>) {
		self.0.push(code.into());
	}
}
impl<'a> IntoIterator for &'a ErrorLog {
	type IntoIter = Iter<'a, String>;
	type Item = &'a String;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Mutable per-user state: anti-forgery token, bearer token, user id, and error history.
#[derive(Clone)]
pub struct Session {
	state: String,
	access_token: Option<TokenSecret>,
	uid: Option<UserId>,
	errors: ErrorLog,
}
impl Session {
	/// Creates an unauthenticated session with a freshly generated anti-forgery token.
	pub fn new() -> Self {
		Self {
			state: auth::generate_state(),
			access_token: None,
			uid: None,
			errors: ErrorLog::default(),
		}
	}

	/// Creates a session around a bearer token the host persisted earlier.
	///
	/// The token passes through the same sanitizer as [`Session::set_access_token`].
	pub fn with_access_token(access_token: &str) -> Self {
		let mut session = Self::new();

		session.set_access_token(access_token);

		session
	}

	/// Current anti-forgery token sent with the authorization redirect.
	pub fn state(&self) -> &str {
		&self.state
	}

	/// Replaces the anti-forgery token, keeping only ASCII alphanumeric characters.
	pub fn set_state(&mut self, state: &str) {
		self.state = auth::sanitize_alphanumeric(state);
	}

	/// Rotates the anti-forgery token and returns the new value.
	pub fn regenerate_state(&mut self) -> &str {
		self.state = auth::generate_state();

		&self.state
	}

	/// Bearer token used by authenticated calls, if one is held.
	pub fn access_token(&self) -> Option<&TokenSecret> {
		self.access_token.as_ref()
	}

	/// Stores a bearer token, keeping only ASCII alphanumeric characters.
	///
	/// A value that sanitizes to the empty string leaves the session unauthenticated.
	pub fn set_access_token(&mut self, access_token: &str) {
		self.access_token = Some(TokenSecret::new(auth::sanitize_alphanumeric(access_token)));
	}

	/// Authenticated user id reported by the token exchange.
	pub fn uid(&self) -> Option<UserId> {
		self.uid
	}

	/// Every error code recorded by failed calls on this session, oldest first.
	pub fn errors(&self) -> &ErrorLog {
		&self.errors
	}

	/// Returns `true` once a non-empty bearer token is held.
	pub fn is_authenticated(&self) -> bool {
		self.access_token.as_ref().is_some_and(|token| !token.is_empty())
	}

	pub(crate) fn require_access_token(&self) -> Result<&TokenSecret> {
		self.access_token
			.as_ref()
			.filter(|token| !token.is_empty())
			.ok_or_else(|| crate::error::ConfigError::AccessTokenNotSet.into())
	}

	/// Stores the token exchange result verbatim; the provider's token is trusted as issued.
	pub(crate) fn authenticate(&mut self, access_token: String, uid: Option<UserId>) {
		self.access_token = Some(TokenSecret::new(access_token));
		self.uid = uid;
	}

	/// Appends the code of a failed result to the error log and hands the result back.
	pub(crate) fn record<T>(&mut self, result: Result<T>) -> Result<T> {
		if let Err(e) = &result {
			self.errors.push(e.code());
		}

		result
	}
}
impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("state", &self.state)
			.field("access_token_set", &self.is_authenticated())
			.field("uid", &self.uid)
			.field("errors", &self.errors)
			.finish()
	}
}
