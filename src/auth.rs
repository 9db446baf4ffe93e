//! Auth-domain identifiers, redacted secrets, and anti-forgery token helpers.

pub mod id;
pub mod secret;
pub mod state;

pub use id::*;
pub use secret::*;
pub use state::*;
