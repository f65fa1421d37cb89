//! Three-legged flow orchestration over the signer, store, and transport.

pub mod access_token;
pub mod authorized;
pub mod common;
pub mod request_token;

// self
use crate::{
	_prelude::*,
	auth::{Consumer, TokenKind},
	callback::CallbackUrlProvider,
	http::FlowHttpClient,
	provider::ServiceDescriptor,
	sign::Signer,
	store::TokenStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Flow specialized for the crate's default reqwest transport.
pub type ReqwestFlow = Flow<ReqwestHttpClient>;

/// Lifecycle stage of a service's stored token.
///
/// `AwaitingUserAuthorization` is entered once the caller has issued the authorization
/// URL to the end user; storage cannot distinguish it from `RequestTokenObtained`, so
/// [`Flow::stage`] reports the latter until the exchange completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowStage {
	/// No token is stored for the service.
	Unauthenticated,
	/// A temporary request token is stored.
	RequestTokenObtained,
	/// The user has been directed to the authorization URL.
	AwaitingUserAuthorization,
	/// An access token is stored; authenticated fetches are valid.
	Authorized,
}
impl FlowStage {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowStage::Unauthenticated => "unauthenticated",
			FlowStage::RequestTokenObtained => "request_token_obtained",
			FlowStage::AwaitingUserAuthorization => "awaiting_user_authorization",
			FlowStage::Authorized => "authorized",
		}
	}
}
impl Display for FlowStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Coordinates the three-legged OAuth 1.0a protocol against a single service.
///
/// The flow owns the HTTP client, token store, service descriptor, and callback
/// provider so individual transitions can focus on protocol logic. Each transition is
/// one request/response round trip: it either fully succeeds (state advances, token
/// persisted) or fully fails (state unchanged, nothing written). Transitions for the
/// same service must not run concurrently; the store is last-writer-wins per key.
pub struct Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Token store implementation that persists issued tokens.
	pub store: Arc<dyn TokenStore>,
	/// Provider of the `oauth_callback` value for the request-token step.
	pub callback: Arc<dyn CallbackUrlProvider>,
	/// Service descriptor that defines the OAuth endpoints.
	pub descriptor: ServiceDescriptor,
	signer: Signer,
}
impl<C> Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	/// Creates a flow that reuses the caller-provided transport.
	pub fn with_http_client(
		store: Arc<dyn TokenStore>,
		descriptor: ServiceDescriptor,
		callback: Arc<dyn CallbackUrlProvider>,
		consumer: Consumer,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			store,
			callback,
			descriptor,
			signer: Signer::new(consumer),
		}
	}

	/// Returns the signing engine bound to this flow's consumer credential.
	pub fn signer(&self) -> &Signer {
		&self.signer
	}

	/// Reports the current lifecycle stage derived from the stored token.
	pub async fn stage(&self) -> Result<FlowStage> {
		let token = self.store.fetch(&self.descriptor.id).await.map_err(Error::from)?;

		Ok(match token {
			None => FlowStage::Unauthenticated,
			Some(token) => match token.kind {
				TokenKind::Request => FlowStage::RequestTokenObtained,
				TokenKind::Access => FlowStage::Authorized,
			},
		})
	}
}
#[cfg(feature = "reqwest")]
impl Flow<ReqwestHttpClient> {
	/// Creates a new flow for the provided descriptor and consumer credential.
	///
	/// The flow provisions its own reqwest-backed transport so callers do not need to
	/// pass HTTP handles explicitly; use [`Flow::with_http_client`] to supply one.
	pub fn new(
		store: Arc<dyn TokenStore>,
		descriptor: ServiceDescriptor,
		callback: Arc<dyn CallbackUrlProvider>,
		consumer: Consumer,
	) -> Self {
		Self::with_http_client(store, descriptor, callback, consumer, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			store: self.store.clone(),
			callback: self.callback.clone(),
			descriptor: self.descriptor.clone(),
			signer: self.signer.clone(),
		}
	}
}
impl<C> Debug for Flow<C>
where
	C: ?Sized + FlowHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Flow")
			.field("descriptor", &self.descriptor)
			.field("consumer_key", &self.signer.consumer().key)
			.finish()
	}
}
