//! Uses a persisted access token to read the caller's profile, check the vault, and reply to a
//! thread.
//!
//! Set `HF_ACCESS_TOKEN` and `HF_THREAD_ID` before running.

// std
use std::env;
// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use hf_api::{asks::Asks, client::HfClient, session::Session};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = HfClient::new()?;
	let mut session = Session::with_access_token(&env::var("HF_ACCESS_TOKEN")?);
	let tid = env::var("HF_THREAD_ID")?.parse()?;
	let me = client
		.read(&mut session, &Asks::new().with("me", json!({ "uid": true, "username": true })))
		.await?;

	println!("Profile: {}.", me.get("me").unwrap_or(&json!(null)));

	match client.vault_balance(&mut session).await {
		Ok(balance) => println!("Vault balance: {balance} bytes."),
		Err(e) => println!("Vault lookup failed: {}.", e.code()),
	}

	if let Err(e) = client.make_post(&mut session, tid, "Posted from the hf-api demo.").await {
		println!("Reply failed: {}.", e.code());
	}

	for code in session.errors() {
		eprintln!("Logged error: {code}.");
	}

	Ok(())
}
