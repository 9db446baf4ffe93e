//! Escrow contract creation and lifecycle actions.

// self
use crate::{
	_prelude::*,
	asks::lenient,
	auth::{ContractId, UserId},
	error::ValidationError,
};

/// Resource key contract payloads are submitted under.
pub const CONTRACTS_RESOURCE: &str = "contracts";

/// Lifecycle action carried in a contract payload's `_action` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractAction {
	/// Opens a new contract.
	New,
	/// Withdraws a contract the caller opened.
	Undo,
	/// Declines an incoming contract.
	Deny,
	/// Accepts an incoming contract.
	Approve,
	/// Cancels an active contract.
	Cancel,
	/// Vendor-side cancellation.
	VendorCancel,
	/// Middleman declines to escrow.
	MiddlemanDeny,
	/// Middleman agrees to escrow.
	MiddlemanApprove,
	/// Marks the caller's side as complete.
	Complete,
}
impl ContractAction {
	/// Returns the wire value of the action.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::New => "new",
			Self::Undo => "undo",
			Self::Deny => "deny",
			Self::Approve => "approve",
			Self::Cancel => "cancel",
			Self::VendorCancel => "vendor_cancel",
			Self::MiddlemanDeny => "middleman_deny",
			Self::MiddlemanApprove => "middleman_approve",
			Self::Complete => "complete",
		}
	}
}
impl Display for ContractAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Terms of a new contract.
///
/// Deserializes from the underscore-keyed mapping the provider documents, so a JSON object
/// such as `{"_uid": 5, "_position": "buyer", "_terms": "..."}` can be passed straight
/// through. Missing fields take their defaults; numeric fields accept numeric strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContract {
	/// Counterparty user id.
	#[serde(rename = "_uid", deserialize_with = "lenient::int")]
	pub uid: i64,
	/// What the counterparty provides.
	#[serde(rename = "_theirproduct", deserialize_with = "lenient::string")]
	pub their_product: String,
	/// Currency the counterparty pays in.
	#[serde(rename = "_theircurrency", deserialize_with = "lenient::string")]
	pub their_currency: String,
	/// Amount the counterparty pays.
	#[serde(rename = "_theiramount", deserialize_with = "lenient::number")]
	pub their_amount: serde_json::Number,
	/// What the caller provides.
	#[serde(rename = "_yourproduct", deserialize_with = "lenient::string")]
	pub your_product: String,
	/// Currency the caller pays in.
	#[serde(rename = "_yourcurrency", deserialize_with = "lenient::string")]
	pub your_currency: String,
	/// Amount the caller pays.
	#[serde(rename = "_youramount", deserialize_with = "lenient::number")]
	pub your_amount: serde_json::Number,
	/// Related thread, or `0`.
	#[serde(rename = "_tid", deserialize_with = "lenient::int")]
	pub tid: i64,
	/// Middleman user id, or `0`.
	#[serde(rename = "_muid", deserialize_with = "lenient::int")]
	pub muid: i64,
	/// Days before the contract expires.
	#[serde(rename = "_timeout", deserialize_with = "lenient::int")]
	pub timeout: i64,
	/// Caller's role, e.g. `buyer`, `seller`, `exchanger`.
	#[serde(rename = "_position", deserialize_with = "lenient::string")]
	pub position: String,
	/// Free-form contract terms.
	#[serde(rename = "_terms", deserialize_with = "lenient::string")]
	pub terms: String,
	/// Whether the contract is listed publicly.
	#[serde(
		rename = "_public",
		serialize_with = "serialize_public",
		deserialize_with = "lenient::truthy"
	)]
	pub public: bool,
	/// Payment address.
	#[serde(rename = "_address", deserialize_with = "lenient::string")]
	pub address: String,
}
impl NewContract {
	/// Days a contract stays open when no timeout is given.
	pub const DEFAULT_TIMEOUT: i64 = 14;

	/// Creates terms with the required fields set and everything else defaulted.
	pub fn new(uid: i64, position: impl Into<String>, terms: impl Into<String>) -> Self {
		Self { uid, position: position.into(), terms: terms.into(), ..Default::default() }
	}

	/// Sets what the counterparty provides and pays.
	pub fn with_their_side(
		mut self,
		product: impl Into<String>,
		currency: impl Into<String>,
		amount: impl Into<serde_json::Number>,
	) -> Self {
		self.their_product = product.into();
		self.their_currency = currency.into();
		self.their_amount = amount.into();

		self
	}

	/// Sets what the caller provides and pays.
	pub fn with_your_side(
		mut self,
		product: impl Into<String>,
		currency: impl Into<String>,
		amount: impl Into<serde_json::Number>,
	) -> Self {
		self.your_product = product.into();
		self.your_currency = currency.into();
		self.your_amount = amount.into();

		self
	}

	/// Links the contract to a thread.
	pub fn with_thread(mut self, tid: i64) -> Self {
		self.tid = tid;

		self
	}

	/// Names a middleman.
	pub fn with_middleman(mut self, muid: i64) -> Self {
		self.muid = muid;

		self
	}

	/// Overrides the expiry, in days.
	pub fn with_timeout(mut self, days: i64) -> Self {
		self.timeout = days;

		self
	}

	/// Lists the contract publicly.
	pub fn with_public(mut self, public: bool) -> Self {
		self.public = public;

		self
	}

	/// Sets the payment address.
	pub fn with_address(mut self, address: impl Into<String>) -> Self {
		self.address = address.into();

		self
	}

	/// Validates the terms and wraps them in a `new` action payload.
	pub fn payload(&self) -> Result<NewContractPayload<'_>, ValidationError> {
		if UserId::new(self.uid).is_none() {
			return Err(ValidationError::NoUidSetInDataArray);
		}
		if self.position.is_empty() {
			return Err(ValidationError::NoPositionSetInDataArray);
		}
		if self.terms.is_empty() {
			return Err(ValidationError::NoTermsSetInDataArray);
		}

		Ok(NewContractPayload { action: ContractAction::New, contract: self })
	}
}
impl Default for NewContract {
	fn default() -> Self {
		Self {
			uid: 0,
			their_product: String::new(),
			their_currency: String::new(),
			their_amount: serde_json::Number::from(0_u8),
			your_product: String::new(),
			your_currency: String::new(),
			your_amount: serde_json::Number::from(0_u8),
			tid: 0,
			muid: 0,
			timeout: Self::DEFAULT_TIMEOUT,
			position: String::new(),
			terms: String::new(),
			public: false,
			address: String::new(),
		}
	}
}

/// Validated `contracts` payload for [`ContractAction::New`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewContractPayload<'a> {
	/// Always [`ContractAction::New`].
	#[serde(rename = "_action")]
	pub action: ContractAction,
	/// Contract terms, flattened next to the action.
	#[serde(flatten)]
	pub contract: &'a NewContract,
}

/// Validated `contracts` payload for actions on an existing contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContractUpdate<'a> {
	/// Contract being acted on.
	#[serde(rename = "_cid")]
	pub cid: ContractId,
	/// Action to apply.
	#[serde(rename = "_action")]
	pub action: ContractAction,
	/// Payment address or transaction id, for actions that carry one.
	#[serde(rename = "_address", skip_serializing_if = "Option::is_none")]
	pub address: Option<&'a str>,
}
impl<'a> ContractUpdate<'a> {
	/// Validates the contract id for an action without an address.
	pub fn new(cid: i64, action: ContractAction) -> Result<Self, ValidationError> {
		let cid = ContractId::new(cid).ok_or(ValidationError::NoCidSet)?;

		Ok(Self { cid, action, address: None })
	}

	/// Attaches the address (approve) or transaction id (complete).
	pub fn with_address(mut self, address: &'a str) -> Self {
		self.address = Some(address);

		self
	}
}

fn serialize_public<S>(public: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	serializer.serialize_str(if *public { "yes" } else { "" })
}
