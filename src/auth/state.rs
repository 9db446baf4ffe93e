//! Anti-forgery (`state`) token generation and the alphanumeric sanitizer shared by every
//! caller-supplied token.

// crates.io
use rand::{Rng, distr::Alphanumeric};

/// Length of freshly generated anti-forgery tokens.
pub const STATE_LEN: usize = 12;

/// Generates a new anti-forgery token of [`STATE_LEN`] ASCII alphanumeric characters.
///
/// Draws from the thread-local CSPRNG, so tokens are unpredictable to third parties.
pub fn generate_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}

/// Strips every character outside `[A-Za-z0-9]`.
///
/// An input without any alphanumeric character yields an empty string rather than an error.
pub fn sanitize_alphanumeric(value: &str) -> String {
	value.chars().filter(char::is_ascii_alphanumeric).collect()
}
