//! Bytes (forum currency) transfers and vault movements.

// self
use crate::{
	_prelude::*,
	asks::{ApiResponse, Asks, lenient},
	auth::UserId,
	error::ValidationError,
};

/// Longest accepted transfer reason, in characters.
pub const MAX_REASON_LEN: usize = 192;

/// Bytes transfer request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BytesTransfer {
	/// Recipient user id.
	pub uid: i64,
	/// Amount to send.
	pub amount: i64,
	/// Optional note shown to the recipient.
	pub reason: String,
	/// Post the transfer is attached to; `0` when none.
	pub pid: i64,
}
impl BytesTransfer {
	/// Resource key the payload is submitted under.
	pub const RESOURCE: &'static str = "bytes";

	/// Creates a transfer with an empty reason and no attached post.
	pub fn new(uid: i64, amount: i64) -> Self {
		Self { uid, amount, ..Default::default() }
	}

	/// Sets the note shown to the recipient.
	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = reason.into();

		self
	}

	/// Attaches the transfer to a post.
	pub fn with_post(mut self, pid: i64) -> Self {
		self.pid = pid;

		self
	}

	/// Validates the transfer and borrows it as a wire payload.
	pub fn payload(&self) -> Result<BytesPayload<'_>, ValidationError> {
		let uid = UserId::new(self.uid).ok_or(ValidationError::NoUidSet)?;

		if self.amount <= 0 {
			return Err(ValidationError::NoAmountSet);
		}
		if self.reason.chars().count() > MAX_REASON_LEN {
			return Err(ValidationError::ReasonTooLong { max: MAX_REASON_LEN });
		}

		Ok(BytesPayload { uid, amount: self.amount, reason: &self.reason, pid: self.pid })
	}
}

/// Validated `bytes` transfer payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BytesPayload<'a> {
	/// Recipient user id.
	#[serde(rename = "_uid")]
	pub uid: UserId,
	/// Amount to send.
	#[serde(rename = "_amount")]
	pub amount: i64,
	/// Note shown to the recipient.
	#[serde(rename = "_reason")]
	pub reason: &'a str,
	/// Attached post, or `0`.
	#[serde(rename = "_pid")]
	pub pid: i64,
}

/// Movement of bytes between the spendable balance and the vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum VaultMove {
	/// Moves bytes into the vault.
	#[serde(rename = "_deposit")]
	Deposit(i64),
	/// Moves bytes out of the vault.
	#[serde(rename = "_withdraw")]
	Withdraw(i64),
}
impl VaultMove {
	/// Validates the movement amount.
	pub fn checked(self) -> Result<Self, ValidationError> {
		match self {
			Self::Deposit(amount) | Self::Withdraw(amount) if amount <= 0 =>
				Err(ValidationError::NoAmountSet),
			_ => Ok(self),
		}
	}
}

/// Read query for the authenticated user's vault balance.
pub(crate) fn vault_balance_asks() -> Asks {
	Asks::new().with("me", serde_json::json!({ "vault": true }))
}

/// Extracts `me.vault` from a read response, defaulting to `0` when the shape is unexpected.
pub(crate) fn vault_balance_from(response: &ApiResponse) -> i64 {
	response
		.get("me")
		.and_then(Value::as_object)
		.and_then(|me| me.get("vault"))
		.map(lenient::to_int)
		.unwrap_or(0)
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn transfers_default_reason_and_post() {
		let transfer = BytesTransfer::new(5, 100);
		let payload = transfer.payload().expect("Valid transfer should pass.");

		assert_eq!(
			serde_json::to_value(&payload).expect("Transfer should serialize."),
			json!({ "_uid": 5, "_amount": 100, "_reason": "", "_pid": 0 })
		);
	}

	#[test]
	fn transfers_validate_uid_amount_and_reason() {
		let code = |transfer: BytesTransfer| {
			transfer.payload().expect_err("Invalid transfer must fail.").code()
		};

		assert_eq!(code(BytesTransfer::new(0, 100)), "NO_UID_SET");
		assert_eq!(code(BytesTransfer::new(5, 0)), "NO_AMOUNT_SET");
		assert_eq!(code(BytesTransfer::new(5, -10)), "NO_AMOUNT_SET");
		assert_eq!(
			code(BytesTransfer::new(5, 1).with_reason("x".repeat(MAX_REASON_LEN + 1))),
			"REASON_MAX_LENGTH_EXCEEDED_192"
		);
		assert!(BytesTransfer::new(5, 1).with_reason("é".repeat(MAX_REASON_LEN)).payload().is_ok());
	}

	#[test]
	fn vault_moves_serialize_under_their_action_key() {
		assert_eq!(
			serde_json::to_value(VaultMove::Deposit(50)).expect("Deposit should serialize."),
			json!({ "_deposit": 50 })
		);
		assert_eq!(
			serde_json::to_value(VaultMove::Withdraw(7)).expect("Withdraw should serialize."),
			json!({ "_withdraw": 7 })
		);
		assert!(VaultMove::Withdraw(0).checked().is_err());
	}

	#[test]
	fn vault_balance_is_read_leniently() {
		let parse = |value: Value| {
			vault_balance_from(value.as_object().expect("Fixture should be an object."))
		};

		assert_eq!(parse(json!({ "me": { "vault": "1500" } })), 1500);
		assert_eq!(parse(json!({ "me": { "vault": 250 } })), 250);
		assert_eq!(parse(json!({ "me": { "uid": 1 } })), 0);
		assert_eq!(parse(json!({ "me": "nope" })), 0);
		assert_eq!(parse(json!({})), 0);
	}
}
