//! Strongly typed service identifier used as the token store key.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Errors raised while validating a [`ServiceId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ServiceIdError {
	/// Identifier was empty.
	#[error("Service identifier must not be empty.")]
	Empty,
	/// Identifier carried surrounding whitespace.
	#[error("Service identifier must not contain surrounding whitespace.")]
	Whitespace,
}

/// Identifies the remote service a flow authenticates against; keys the token store.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceId(String);
impl ServiceId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ServiceIdError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for ServiceId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ServiceId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<ServiceId> for String {
	fn from(value: ServiceId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ServiceId {
	type Error = ServiceIdError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for ServiceId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for ServiceId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ServiceId({})", self.0)
	}
}
impl Display for ServiceId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn validate_view(view: &str) -> Result<(), ServiceIdError> {
	if view.is_empty() {
		return Err(ServiceIdError::Empty);
	}
	if view.trim() != view {
		return Err(ServiceIdError::Whitespace);
	}

	Ok(())
}
