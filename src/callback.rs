//! Injected providers for the `oauth_callback` value used when starting a flow.

// self
use crate::auth::ServiceId;

/// Out-of-band callback marker defined by the OAuth 1.0a protocol.
pub const OUT_OF_BAND: &str = "oob";

/// Supplies the `oauth_callback` value sent with the request-token step.
///
/// The value is an opaque string from the flow's perspective; hosts that resume flows
/// through their own continuation URLs implement this trait to mint them.
pub trait CallbackUrlProvider
where
	Self: Send + Sync,
{
	/// Returns the callback value for the provided service.
	fn callback_url(&self, service: &ServiceId) -> String;
}

/// Fixed callback URL shared by every service.
#[derive(Clone, Debug)]
pub struct StaticCallbackUrl(String);
impl StaticCallbackUrl {
	/// Wraps the provided callback value.
	pub fn new(url: impl Into<String>) -> Self {
		Self(url.into())
	}
}
impl CallbackUrlProvider for StaticCallbackUrl {
	fn callback_url(&self, _: &ServiceId) -> String {
		self.0.clone()
	}
}

/// Out-of-band flows where the user relays a PIN manually.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutOfBand;
impl CallbackUrlProvider for OutOfBand {
	fn callback_url(&self, _: &ServiceId) -> String {
		OUT_OF_BAND.to_owned()
	}
}
