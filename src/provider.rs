//! Service descriptors bundling the OAuth 1.0a endpoints of one remote service.

// self
use crate::{_prelude::*, auth::ServiceId};

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ServiceDescriptorError {
	/// Request-token endpoint is required to start a flow.
	#[error("Missing request-token endpoint.")]
	MissingRequestTokenEndpoint,
	/// Access-token endpoint is required to finish a flow.
	#[error("Missing access-token endpoint.")]
	MissingAccessTokenEndpoint,
	/// Authorization endpoint is required to direct the user.
	#[error("Missing authorization endpoint.")]
	MissingAuthorizationEndpoint,
}

/// Validated bundle of the three OAuth 1.0a endpoints for one service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
	/// Identifier for the service; also keys the token store.
	pub id: ServiceId,
	/// Endpoint issuing temporary request tokens.
	pub request_token_endpoint: Url,
	/// Endpoint exchanging authorized request tokens for access tokens.
	pub access_token_endpoint: Url,
	/// Endpoint the end user is redirected to for authorization.
	pub authorization_endpoint: Url,
}
impl ServiceDescriptor {
	/// Returns a builder seeded with the provided service identifier.
	pub fn builder(id: ServiceId) -> ServiceDescriptorBuilder {
		ServiceDescriptorBuilder::new(id)
	}
}

/// Builder for [`ServiceDescriptor`] values.
#[derive(Clone, Debug)]
pub struct ServiceDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: ServiceId,
	/// Optional request-token endpoint.
	pub request_token_endpoint: Option<Url>,
	/// Optional access-token endpoint.
	pub access_token_endpoint: Option<Url>,
	/// Optional authorization endpoint.
	pub authorization_endpoint: Option<Url>,
}
impl ServiceDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: ServiceId) -> Self {
		Self {
			id,
			request_token_endpoint: None,
			access_token_endpoint: None,
			authorization_endpoint: None,
		}
	}

	/// Sets the request-token endpoint.
	pub fn request_token_endpoint(mut self, url: Url) -> Self {
		self.request_token_endpoint = Some(url);

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token_endpoint(mut self, url: Url) -> Self {
		self.access_token_endpoint = Some(url);

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ServiceDescriptor, ServiceDescriptorError> {
		let request_token_endpoint = self
			.request_token_endpoint
			.ok_or(ServiceDescriptorError::MissingRequestTokenEndpoint)?;
		let access_token_endpoint = self
			.access_token_endpoint
			.ok_or(ServiceDescriptorError::MissingAccessTokenEndpoint)?;
		let authorization_endpoint = self
			.authorization_endpoint
			.ok_or(ServiceDescriptorError::MissingAuthorizationEndpoint)?;

		Ok(ServiceDescriptor {
			id: self.id,
			request_token_endpoint,
			access_token_endpoint,
			authorization_endpoint,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Descriptor URL fixture should parse.")
	}

	fn id() -> ServiceId {
		ServiceId::new("mock").expect("Service identifier fixture should be valid.")
	}

	#[test]
	fn builder_requires_every_endpoint() {
		let err = ServiceDescriptor::builder(id())
			.access_token_endpoint(url("https://example.com/access"))
			.authorization_endpoint(url("https://example.com/authorize"))
			.build()
			.expect_err("Builder should reject a missing request-token endpoint.");

		assert_eq!(err, ServiceDescriptorError::MissingRequestTokenEndpoint);

		let err = ServiceDescriptor::builder(id())
			.request_token_endpoint(url("https://example.com/request"))
			.authorization_endpoint(url("https://example.com/authorize"))
			.build()
			.expect_err("Builder should reject a missing access-token endpoint.");

		assert_eq!(err, ServiceDescriptorError::MissingAccessTokenEndpoint);

		let err = ServiceDescriptor::builder(id())
			.request_token_endpoint(url("https://example.com/request"))
			.access_token_endpoint(url("https://example.com/access"))
			.build()
			.expect_err("Builder should reject a missing authorization endpoint.");

		assert_eq!(err, ServiceDescriptorError::MissingAuthorizationEndpoint);
	}

	#[test]
	fn builder_produces_a_complete_descriptor() {
		let descriptor = ServiceDescriptor::builder(id())
			.request_token_endpoint(url("https://example.com/request"))
			.access_token_endpoint(url("https://example.com/access"))
			.authorization_endpoint(url("https://example.com/authorize"))
			.build()
			.expect("Builder should succeed once every endpoint is set.");

		assert_eq!(descriptor.id.as_ref(), "mock");
		assert_eq!(descriptor.request_token_endpoint.as_str(), "https://example.com/request");
		assert_eq!(descriptor.access_token_endpoint.as_str(), "https://example.com/access");
		assert_eq!(descriptor.authorization_endpoint.as_str(), "https://example.com/authorize");
	}
}
