//! Walks through the two halves of sign-in: building the consent redirect, then handling the
//! provider's callback.
//!
//! Set `HF_APPLICATION_ID` and `HF_APPLICATION_SECRET`, run the demo, open the printed URL,
//! and paste the full callback URL the provider redirects to.

// std
use std::{env, io};
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use hf_api::{
	client::{AuthorizationRedirect, CallbackParams, HfClient},
	session::Session,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = HfClient::new()?
		.with_application_id(env::var("HF_APPLICATION_ID")?)
		.with_application_secret(env::var("HF_APPLICATION_SECRET")?);
	let mut session = Session::new();
	let redirect = client.start_auth(&mut session)?;

	println!(
		"Answer with HTTP {} and send your user to {}.",
		AuthorizationRedirect::STATUS,
		redirect.location
	);
	println!("Paste the callback URL:");

	let mut line = String::new();

	io::stdin().read_line(&mut line)?;

	// The host keeps the state it sent next to the user's web session.
	let expected_state = redirect.state;
	let callback = CallbackParams::from_url(&Url::parse(line.trim())?);

	if let Err(e) = client.finish_auth(&mut session, &callback, &expected_state).await {
		return Err(eyre!("Sign-in failed ({}): {e}.", e.code()));
	}

	println!(
		"Signed in as uid {}; persist the access token to skip this step next time.",
		session.uid().map(|uid| uid.to_string()).unwrap_or_else(|| "unknown".into())
	);

	Ok(())
}
