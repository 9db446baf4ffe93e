//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `hf_api.call` with the `call` (operation)
//!   and `stage` (call site) fields, plus a `warn!` event carrying the error code for every
//!   failed call.
//! - Enable `metrics` to increment the `hf_api_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, asks::ContractAction};

/// Public operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiCall {
	/// Authorization redirect construction.
	StartAuth,
	/// Authorization code exchange.
	FinishAuth,
	/// Raw read call.
	Read,
	/// Raw write call.
	Write,
	/// Reply to a thread.
	MakePost,
	/// New thread.
	MakeThread,
	/// Bytes transfer to another user.
	SendBytes,
	/// Vault balance lookup.
	VaultBalance,
	/// Vault deposit.
	VaultDeposit,
	/// Vault withdrawal.
	VaultWithdraw,
	/// Contract lifecycle action.
	Contract(ContractAction),
}
impl ApiCall {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiCall::StartAuth => "start_auth",
			ApiCall::FinishAuth => "finish_auth",
			ApiCall::Read => "read",
			ApiCall::Write => "write",
			ApiCall::MakePost => "make_post",
			ApiCall::MakeThread => "make_thread",
			ApiCall::SendBytes => "send_bytes",
			ApiCall::VaultBalance => "vault_balance",
			ApiCall::VaultDeposit => "vault_deposit",
			ApiCall::VaultWithdraw => "vault_withdraw",
			ApiCall::Contract(action) => match action {
				ContractAction::New => "contract_new",
				ContractAction::Undo => "contract_undo",
				ContractAction::Deny => "contract_deny",
				ContractAction::Approve => "contract_approve",
				ContractAction::Cancel => "contract_cancel",
				ContractAction::VendorCancel => "contract_vendor_cancel",
				ContractAction::MiddlemanDeny => "contract_middleman_deny",
				ContractAction::MiddlemanApprove => "contract_middleman_approve",
				ContractAction::Complete => "contract_complete",
			},
		}
	}
}
impl Display for ApiCall {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn contract_calls_carry_the_action_label() {
		assert_eq!(ApiCall::Contract(ContractAction::VendorCancel).as_str(), "contract_vendor_cancel");
		assert_eq!(ApiCall::VaultBalance.to_string(), "vault_balance");
		assert_eq!(CallOutcome::Failure.to_string(), "failure");
	}
}
