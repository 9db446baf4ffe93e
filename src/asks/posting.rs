//! Thread replies and new threads.

// self
use crate::{
	_prelude::*,
	auth::{ForumId, ThreadId},
	error::ValidationError,
};

/// Minimum length, in characters, of post messages and thread subjects.
pub const MIN_TEXT_LEN: usize = 3;

/// Validated `posts` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost<'a> {
	/// Thread receiving the reply.
	#[serde(rename = "_tid")]
	pub tid: ThreadId,
	/// Reply body.
	#[serde(rename = "_message")]
	pub message: &'a str,
}
impl<'a> NewPost<'a> {
	/// Resource key the payload is submitted under.
	pub const RESOURCE: &'static str = "posts";

	/// Validates a reply before it is submitted.
	pub fn new(tid: i64, message: &'a str) -> Result<Self, ValidationError> {
		let tid = ThreadId::new(tid).ok_or(ValidationError::NoTidSet)?;

		ensure_min_len(message, || ValidationError::NoMessageSet { min: MIN_TEXT_LEN })?;

		Ok(Self { tid, message })
	}
}

/// Validated `threads` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewThread<'a> {
	/// Sub-forum receiving the thread.
	#[serde(rename = "_fid")]
	pub fid: ForumId,
	/// Thread title.
	#[serde(rename = "_subject")]
	pub subject: &'a str,
	/// Opening post body.
	#[serde(rename = "_message")]
	pub message: &'a str,
}
impl<'a> NewThread<'a> {
	/// Resource key the payload is submitted under.
	pub const RESOURCE: &'static str = "threads";

	/// Validates a thread before it is submitted.
	pub fn new(fid: i64, subject: &'a str, message: &'a str) -> Result<Self, ValidationError> {
		let fid = ForumId::new(fid).ok_or(ValidationError::NoFidSet)?;

		ensure_min_len(subject, || ValidationError::NoSubjectSet { min: MIN_TEXT_LEN })?;
		ensure_min_len(message, || ValidationError::NoMessageSet { min: MIN_TEXT_LEN })?;

		Ok(Self { fid, subject, message })
	}
}

fn ensure_min_len(
	text: &str,
	err: impl FnOnce() -> ValidationError,
) -> Result<(), ValidationError> {
	if text.chars().count() < MIN_TEXT_LEN { Err(err()) } else { Ok(()) }
}
