// self
use crate::{
	_prelude::*,
	asks::{ApiResponse, Asks, CONTRACTS_RESOURCE, ContractAction, ContractUpdate, NewContract},
	client::HfClient,
	http::ApiHttpClient,
	obs::ApiCall,
	session::Session,
};

impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Opens a new contract.
	///
	/// The counterparty id must be positive and both `position` and `terms` non-empty.
	pub async fn new_contract(
		&self,
		session: &mut Session,
		contract: &NewContract,
	) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::Contract(ContractAction::New), "new_contract", async {
				let token = session.require_access_token()?;
				let payload = contract.payload()?;

				self.dispatch_write(token, &Asks::from_fields(CONTRACTS_RESOURCE, &payload)?).await
			})
			.await;

		session.record(result)
	}

	/// Withdraws a contract the caller opened.
	pub async fn undo_contract(&self, session: &mut Session, cid: i64) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::Undo, None).await
	}

	/// Declines an incoming contract.
	pub async fn deny_contract(&self, session: &mut Session, cid: i64) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::Deny, None).await
	}

	/// Accepts an incoming contract, supplying the caller's payment address.
	pub async fn approve_contract(
		&self,
		session: &mut Session,
		cid: i64,
		address: &str,
	) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::Approve, Some(address)).await
	}

	/// Cancels an active contract.
	pub async fn cancel_contract(&self, session: &mut Session, cid: i64) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::Cancel, None).await
	}

	/// Cancels a contract from the vendor side.
	pub async fn vendor_cancel_contract(
		&self,
		session: &mut Session,
		cid: i64,
	) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::VendorCancel, None).await
	}

	/// Declines to act as middleman.
	pub async fn middleman_deny_contract(
		&self,
		session: &mut Session,
		cid: i64,
	) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::MiddlemanDeny, None).await
	}

	/// Agrees to act as middleman.
	pub async fn middleman_approve_contract(
		&self,
		session: &mut Session,
		cid: i64,
	) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::MiddlemanApprove, None).await
	}

	/// Marks the caller's side complete, attaching the payment transaction id.
	pub async fn complete_contract(
		&self,
		session: &mut Session,
		cid: i64,
		txn: &str,
	) -> Result<ApiResponse> {
		self.update_contract(session, cid, ContractAction::Complete, Some(txn)).await
	}

	async fn update_contract(
		&self,
		session: &mut Session,
		cid: i64,
		action: ContractAction,
		address: Option<&str>,
	) -> Result<ApiResponse> {
		let call = ApiCall::Contract(action);
		let result = self
			.observe(call, call.as_str(), async {
				let token = session.require_access_token()?;
				let mut update = ContractUpdate::new(cid, action)?;

				if let Some(address) = address {
					update = update.with_address(address);
				}

				self.dispatch_write(token, &Asks::from_fields(CONTRACTS_RESOURCE, &update)?).await
			})
			.await;

		session.record(result)
	}
}
