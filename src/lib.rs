//! [SBIF](https://api.sbif.cl/) financial indicators API library.
//!
//! Fetches the UF, UTM, dollar, euro and IPC values and institution profiles
//! published by the SBIF API v3.

#![deny(missing_docs)]

use std::fmt::{self, Debug, Display, Formatter};

use arrayvec::{ArrayString, CapacityError};

mod client;
pub use client::Client;

pub mod config;
pub use config::{Config, ConfigError};

pub mod date;
pub use date::{QueryDate, SERVICE_TIMEZONE};

pub mod endpoint;
pub use endpoint::{Endpoint, API_BASE};

mod error;
pub use error::{BoxError, Error, Result};

pub mod indicator;
pub use indicator::{Indicator, Resource};

pub mod number;
pub use number::{normalize_number, FromLocalized};

pub mod response;
pub use response::{IndicatorValue, InstitutionProfile, ResponseError};

pub mod transport;
pub use transport::{HttpResponse, Transport, TransportError};

#[repr(transparent)]
#[derive(Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
/// API key token.
///
/// Request yours [here](https://api.sbif.cl/).
pub struct Token {
	/// The token string.
	///
	/// Keys are 40 characters long but we use 128 capacity for forward-compatibility.
	token: ArrayString<128>,
}

impl<'a> TryFrom<&'a str> for Token {
	type Error = CapacityError<&'a str>;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		ArrayString::try_from(value).map(|token| Self { token })
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		self.token.as_ref()
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.token, f)
	}
}

/// Redacted, so that configurations can be logged.
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("Token(***)")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_token() {
		let token = Token::try_from("0123456789").unwrap();
		assert_eq!(token.as_ref(), "0123456789");
		assert_eq!(token.to_string(), "0123456789");
		assert_eq!(format!("{token:?}"), "Token(***)");
		assert!(Token::try_from("x".repeat(129).as_str()).is_err());
	}
}
