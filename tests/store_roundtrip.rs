// std
use std::{env, fs, path::PathBuf, process, sync::Arc};
// self
use oauth1a_client::{
	auth::{ServiceId, Token, TokenKind},
	store::{FileStore, MemoryStore, TokenStore},
};

fn make_service(name: &str) -> ServiceId {
	ServiceId::new(name).expect("Service identifier should be valid for store tests.")
}

fn temp_store_path(name: &str) -> PathBuf {
	env::temp_dir().join(format!("oauth1a-client-it-{}-{name}.json", process::id()))
}

async fn exercise_round_trip(store: Arc<dyn TokenStore>, service: &ServiceId) {
	assert_eq!(
		store.fetch(service).await.expect("Fetching from an empty store should succeed."),
		None,
	);

	let request_token = Token::new(TokenKind::Request, "rt", "rs");

	store
		.save(service, request_token.clone())
		.await
		.expect("Saving a request token should succeed.");

	assert_eq!(
		store.fetch(service).await.expect("Fetching the request token should succeed."),
		Some(request_token),
	);

	let access_token = Token::new(TokenKind::Access, "at", "as");

	store
		.save(service, access_token.clone())
		.await
		.expect("Saving an access token should succeed.");

	assert_eq!(
		store.fetch(service).await.expect("Fetching the access token should succeed."),
		Some(access_token),
	);
}

#[tokio::test]
async fn memory_store_round_trips_through_the_trait_object() {
	let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());

	exercise_round_trip(store, &make_service("memory-roundtrip")).await;
}

#[tokio::test]
async fn file_store_round_trips_through_the_trait_object() {
	let path = temp_store_path("file-roundtrip");
	let _ = fs::remove_file(&path);
	let store: Arc<dyn TokenStore> =
		Arc::new(FileStore::open(path.clone()).expect("Opening a fresh file store should succeed."));

	exercise_round_trip(store, &make_service("file-roundtrip")).await;

	let reopened = FileStore::open(path.clone()).expect("Reopening the file store should succeed.");
	let fetched = reopened
		.fetch(&make_service("file-roundtrip"))
		.await
		.expect("Fetching from the reopened store should succeed.");

	assert_eq!(fetched, Some(Token::new(TokenKind::Access, "at", "as")));

	let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn stores_keep_services_independent() {
	let store = MemoryStore::default();
	let service_a = make_service("independent-a");
	let service_b = make_service("independent-b");

	store
		.save(&service_a, Token::new(TokenKind::Access, "at", "as"))
		.await
		.expect("Saving the first service's token should succeed.");

	assert_eq!(
		store.fetch(&service_b).await.expect("Fetching the untouched service should succeed."),
		None,
	);
}
