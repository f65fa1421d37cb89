//! Three-legged OAuth 1.0a client: a byte-exact HMAC-SHA1 signing engine plus the
//! request-token/access-token lifecycle, with pluggable stores and transports.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod callback;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
pub mod sign;
pub mod store;

#[cfg(feature = "reqwest")]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Consumer,
		callback::{CallbackUrlProvider, StaticCallbackUrl},
		flows::Flow,
		http::ReqwestHttpClient,
		provider::ServiceDescriptor,
		store::{MemoryStore, TokenStore},
	};

	/// Flow type alias used by reqwest-backed integration tests.
	pub type ReqwestTestFlow = Flow<ReqwestHttpClient>;

	/// Constructs a [`Flow`] backed by an in-memory store, a static callback URL, and the
	/// default reqwest transport used across integration tests.
	pub fn build_reqwest_test_flow(
		descriptor: ServiceDescriptor,
		consumer: Consumer,
		callback_url: &str,
	) -> (ReqwestTestFlow, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn TokenStore> = store_backend.clone();
		let callback: Arc<dyn CallbackUrlProvider> = Arc::new(StaticCallbackUrl::new(callback_url));
		let flow = Flow::new(store, descriptor, callback, consumer);

		(flow, store_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
