//! Exchange of an authorized request token for a long-lived access token.

// self
use crate::{
	_prelude::*,
	auth::{Token, TokenKind},
	flows::{Flow, common},
	http::FlowHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	sign::{OAUTH_VERIFIER_KEY, OAuthParameters},
};

impl<C> Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// Exchanges an authorized request token plus verifier for an access token,
	/// persisting it and superseding the request token.
	///
	/// Sends one signed GET to the access-token endpoint carrying the request token
	/// and the `oauth_verifier` relayed by the user. The response is parsed the same
	/// way as the request-token step; failures leave the store untouched.
	pub async fn exchange_for_access_token(
		&self,
		token: &Token,
		verifier: &str,
	) -> Result<Token> {
		const KIND: FlowKind = FlowKind::AccessExchange;

		let span = FlowSpan::new(KIND, "exchange_for_access_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let endpoint = self.descriptor.access_token_endpoint.clone();
				let mut extra = OAuthParameters::new();

				extra.insert(OAUTH_VERIFIER_KEY, verifier);

				let response = self.dispatch_signed_get(&endpoint, Some(token), &extra).await?;
				let response = common::ensure_success(&endpoint, response)?;
				let token =
					common::parse_token_response(&endpoint, TokenKind::Access, &response.body)?;

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
}
