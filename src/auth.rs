//! Auth-domain credentials, identifiers, and token models.

pub mod consumer;
pub mod id;
pub mod secret;
pub mod token;

pub use consumer::*;
pub use id::*;
pub use secret::*;
pub use token::*;
