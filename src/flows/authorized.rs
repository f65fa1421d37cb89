//! Authenticated API fetches gated on a stored access token.

// self
use crate::{
	_prelude::*,
	flows::Flow,
	http::{
		AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, FORM_URLENCODED, FlowHttpClient, HttpRequest,
		HttpResponse,
	},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	sign::{OAuthParameters, SignableRequest, encode},
};

impl<C> Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// Signs and dispatches an arbitrary API request with the stored access token.
	///
	/// Fails with [`Error::NotAuthorized`] before any network call unless the store
	/// holds an access-type token for this service. Form payloads are encoded with the
	/// signer's own percent-encoding so the signature matches the bytes actually sent.
	pub async fn authorized_fetch(&self, request: SignableRequest) -> Result<HttpResponse> {
		const KIND: FlowKind = FlowKind::AuthorizedFetch;

		let span = FlowSpan::new(KIND, "authorized_fetch");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token = self
					.store
					.fetch(&self.descriptor.id)
					.await
					.map_err(Error::from)?
					.filter(|token| token.is_access())
					.ok_or_else(|| Error::NotAuthorized {
						service: self.descriptor.id.to_string(),
					})?;
				let params = self.signer().sign(&request, Some(&token), &OAuthParameters::new())?;
				let mut http_request = HttpRequest::new(request.method, request.url)
					.header(AUTHORIZATION_HEADER, params.authorization_header());

				if let Some(form) = &request.form {
					http_request = http_request
						.header(CONTENT_TYPE_HEADER, FORM_URLENCODED)
						.with_body(encode::encode_form(form));
				}

				Ok(self.http_client.execute(http_request).await?)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
