//! Thread-safe in-memory [`TokenStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::{ServiceId, Token},
	store::{StoreFuture, TokenStore},
};

type StoreMap = Arc<RwLock<HashMap<ServiceId, Token>>>;

/// Thread-safe storage backend that keeps tokens in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl TokenStore for MemoryStore {
	fn save<'a>(&'a self, service: &'a ServiceId, token: Token) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().insert(service.clone(), token);

			Ok(())
		})
	}

	fn fetch<'a>(&'a self, service: &'a ServiceId) -> StoreFuture<'a, Option<Token>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.read().get(service).cloned()) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::TokenKind;

	#[tokio::test]
	async fn save_then_fetch_round_trips_and_supersedes() {
		let store = MemoryStore::default();
		let service = ServiceId::new("svc").expect("Service identifier fixture should be valid.");

		assert_eq!(store.fetch(&service).await.expect("Fetch should succeed."), None);

		let request_token = Token::new(TokenKind::Request, "rt", "rs");

		store.save(&service, request_token.clone()).await.expect("Save should succeed.");

		assert_eq!(
			store.fetch(&service).await.expect("Fetch should succeed."),
			Some(request_token),
		);

		let access_token = Token::new(TokenKind::Access, "at", "as");

		store.save(&service, access_token.clone()).await.expect("Save should succeed.");

		assert_eq!(
			store.fetch(&service).await.expect("Fetch should succeed."),
			Some(access_token),
		);
	}
}
