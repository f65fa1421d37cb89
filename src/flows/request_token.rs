//! Request-token acquisition and the authorization URL it unlocks.

// self
use crate::{
	_prelude::*,
	auth::{Token, TokenKind},
	flows::{Flow, common},
	http::FlowHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	sign::{OAUTH_CALLBACK_KEY, OAUTH_TOKEN_KEY, OAuthParameters},
};

impl<C> Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// Obtains a temporary request token and persists it, starting (or restarting) the
	/// three-legged flow.
	///
	/// Sends one signed GET to the request-token endpoint carrying the injected
	/// `oauth_callback` value and no token. An error status or a response without
	/// `oauth_token` surfaces as a protocol error and leaves the store untouched.
	pub async fn obtain_request_token(&self) -> Result<Token> {
		const KIND: FlowKind = FlowKind::RequestToken;

		let span = FlowSpan::new(KIND, "obtain_request_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let endpoint = self.descriptor.request_token_endpoint.clone();
				let callback = self.callback.callback_url(&self.descriptor.id);
				let mut extra = OAuthParameters::new();

				extra.insert(OAUTH_CALLBACK_KEY, callback);

				let response = self.dispatch_signed_get(&endpoint, None, &extra).await?;
				let response = common::ensure_success(&endpoint, response)?;
				let token =
					common::parse_token_response(&endpoint, TokenKind::Request, &response.body)?;

				self.store
					.save(&self.descriptor.id, token.clone())
					.await
					.map_err(Error::from)?;

				Ok(token)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	/// Returns the URL the end user must visit to authorize the request token.
	pub fn authorization_url(&self, token: &Token) -> Url {
		let mut url = self.descriptor.authorization_endpoint.clone();

		url.query_pairs_mut().append_pair(OAUTH_TOKEN_KEY, &token.public);

		url
	}
}
