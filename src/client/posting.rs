// self
use crate::{
	_prelude::*,
	asks::{ApiResponse, Asks, NewPost, NewThread},
	client::HfClient,
	http::ApiHttpClient,
	obs::ApiCall,
	session::Session,
};

impl<C> HfClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Replies to thread `tid`.
	///
	/// `tid` must be positive and `message` at least three characters long.
	pub async fn make_post(
		&self,
		session: &mut Session,
		tid: i64,
		message: &str,
	) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::MakePost, "make_post", async {
				let token = session.require_access_token()?;
				let post = NewPost::new(tid, message)?;

				self.dispatch_write(token, &Asks::from_fields(NewPost::RESOURCE, &post)?).await
			})
			.await;

		session.record(result)
	}

	/// Opens a new thread in sub-forum `fid`.
	///
	/// `fid` must be positive; `subject` and `message` must each be at least three characters.
	pub async fn make_thread(
		&self,
		session: &mut Session,
		fid: i64,
		subject: &str,
		message: &str,
	) -> Result<ApiResponse> {
		let result = self
			.observe(ApiCall::MakeThread, "make_thread", async {
				let token = session.require_access_token()?;
				let thread = NewThread::new(fid, subject, message)?;

				self.dispatch_write(token, &Asks::from_fields(NewThread::RESOURCE, &thread)?).await
			})
			.await;

		session.record(result)
	}
}
