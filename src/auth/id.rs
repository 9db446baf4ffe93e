//! Strongly typed, strictly positive identifiers for HF API resources.

// std
use std::{num::NonZeroU64, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(NonZeroU64);
		impl $name {
			/// Creates an identifier, returning `None` unless `raw` is strictly positive.
			pub fn new(raw: i64) -> Option<Self> {
				u64::try_from(raw).ok().and_then(NonZeroU64::new).map(Self)
			}

			/// Returns the raw numeric value.
			pub fn get(self) -> u64 {
				self.0.get()
			}
		}
		impl Deref for $name {
			type Target = NonZeroU64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl From<$name> for u64 {
			fn from(value: $name) -> Self {
				value.get()
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				Display::fmt(&self.0, f)
			}
		}
	};
}

def_id! { UserId, "Forum user identifier (`uid`).", "User" }
def_id! { ThreadId, "Forum thread identifier (`tid`).", "Thread" }
def_id! { ForumId, "Sub-forum identifier (`fid`).", "Forum" }
def_id! { PostId, "Forum post identifier (`pid`).", "Post" }
def_id! { ContractId, "Contract identifier (`cid`).", "Contract" }
