//! Shared helpers for flow transitions (signed dispatch, response parsing).

// self
use crate::{
	_prelude::*,
	auth::{Token, TokenKind},
	error::ProtocolError,
	flows::Flow,
	http::{AUTHORIZATION_HEADER, FlowHttpClient, HttpRequest, HttpResponse},
	sign::{OAUTH_TOKEN_KEY, OAUTH_TOKEN_SECRET_KEY, OAuthParameters, SignableRequest, encode},
};

impl<C> Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// Signs and dispatches a GET to a token endpoint, returning the raw response.
	pub(crate) async fn dispatch_signed_get(
		&self,
		endpoint: &Url,
		token: Option<&Token>,
		extra: &OAuthParameters,
	) -> Result<HttpResponse> {
		let request = SignableRequest::new("GET", endpoint.clone());
		let params = self.signer().sign(&request, token, extra)?;
		let http_request = HttpRequest::new(request.method, request.url)
			.header(AUTHORIZATION_HEADER, params.authorization_header());

		Ok(self.http_client.execute(http_request).await?)
	}
}

/// Rejects error responses from a token endpoint, keeping status and body for context.
pub(crate) fn ensure_success(
	endpoint: &Url,
	response: HttpResponse,
) -> Result<HttpResponse, ProtocolError> {
	if response.status >= 400 {
		return Err(ProtocolError::Endpoint {
			endpoint: endpoint.to_string(),
			status: response.status,
			body: response.body,
		});
	}

	Ok(response)
}

/// Parses a form-urlencoded token endpoint response into a [`Token`].
///
/// Only a missing `oauth_token` is a protocol error; a missing `oauth_token_secret`
/// yields an empty secret.
pub(crate) fn parse_token_response(
	endpoint: &Url,
	kind: TokenKind,
	body: &str,
) -> Result<Token, ProtocolError> {
	let fields = encode::parse_form(body);
	let Some(public) = fields.get(OAUTH_TOKEN_KEY) else {
		return Err(ProtocolError::MissingToken {
			endpoint: endpoint.to_string(),
			body: body.to_owned(),
		});
	};
	let secret = fields.get(OAUTH_TOKEN_SECRET_KEY).cloned().unwrap_or_default();

	Ok(Token::new(kind, public.clone(), secret))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn endpoint() -> Url {
		Url::parse("https://example.com/oauth/RequestToken").expect("URL fixture should parse.")
	}

	#[test]
	fn token_responses_round_trip() {
		let token =
			parse_token_response(&endpoint(), TokenKind::Request, "oauth_token=T1&oauth_token_secret=S1")
				.expect("A complete response should parse.");

		assert_eq!(token, Token::new(TokenKind::Request, "T1", "S1"));
	}

	#[test]
	fn responses_missing_the_token_fail() {
		let err = parse_token_response(&endpoint(), TokenKind::Request, "oauth_token_secret=S1")
			.expect_err("A response without oauth_token should fail.");

		assert!(matches!(err, ProtocolError::MissingToken { .. }));
	}

	#[test]
	fn responses_missing_the_secret_default_to_empty() {
		let token = parse_token_response(&endpoint(), TokenKind::Access, "oauth_token=T1")
			.expect("A response without oauth_token_secret should still parse.");

		assert_eq!(token.secret.expose(), "");
	}

	#[test]
	fn ensure_success_rejects_only_error_statuses() {
		let ok = HttpResponse { status: 399, body: "ok".into() };
		let err = HttpResponse { status: 400, body: "denied".into() };

		assert!(ensure_success(&endpoint(), ok).is_ok());
		assert!(matches!(
			ensure_success(&endpoint(), err),
			Err(ProtocolError::Endpoint { status: 400, .. }),
		));
	}
}
