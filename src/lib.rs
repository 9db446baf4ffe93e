//! Async client for the HF API v2: OAuth authorization-code sign-in, bearer-authenticated
//! read/write calls, and typed helpers for posting, bytes transfers, the vault, and contracts.
//!
//! Configuration ([`client::HfClient`]) is immutable and shareable, while per-user runtime state
//! ([`session::Session`]) is an explicit value the caller threads through every call.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod asks;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod obs;
pub mod session;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
