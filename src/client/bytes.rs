// self
use crate::{
	_prelude::*,
	asks::{self, ApiResponse, Asks, BytesTransfer, VaultMove},
	client::HfClient,
	http::ApiHttpClient,
	obs::ApiCall,
	session::Session,
};

impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Sends bytes to another user.
	pub async fn send_bytes(
		&self,
		session: &mut Session,
		transfer: &BytesTransfer,
	) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::SendBytes, "send_bytes", async {
				let token = session.require_access_token()?;
				let payload = transfer.payload()?;

				self.dispatch_write(token, &Asks::from_fields(BytesTransfer::RESOURCE, &payload)?)
					.await
			})
			.await;

		session.record(result)
	}

	/// Returns the authenticated user's vault balance.
	///
	/// Resolves to `0` when the reply does not carry `me.vault`; numeric strings are parsed.
	pub async fn vault_balance(&self, session: &mut Session) -> Result<i64> {
		let result = self
			.observe(ApiCall::VaultBalance, "vault_balance", async {
				let token = session.require_access_token()?;
				let response = self.dispatch_read(token, &asks::vault_balance_asks()).await?;

				Ok(asks::vault_balance_from(&response))
			})
			.await;

		session.record(result)
	}

	/// Moves `amount` bytes into the vault.
	pub async fn vault_deposit(&self, session: &mut Session, amount: i64) -> Result<ApiResponse> {
		self.move_vault(session, ApiCall::VaultDeposit, VaultMove::Deposit(amount)).await
	}

	/// Moves `amount` bytes out of the vault.
	pub async fn vault_withdraw(&self, session: &mut Session, amount: i64) -> Result<ApiResponse> {
		self.move_vault(session, ApiCall::VaultWithdraw, VaultMove::Withdraw(amount)).await
	}

	async fn move_vault(
		&self,
		session: &mut Session,
		call: ApiCall,
		movement: VaultMove,
	) -> Result<ApiResponse> {
		let result = self
			.observe(call, call.as_str(), async {
				let token = session.require_access_token()?;
				let movement = movement.checked()?;

				self.dispatch_write(token, &Asks::from_fields(BytesTransfer::RESOURCE, &movement)?)
					.await
			})
			.await;

		session.record(result)
	}
}
