//! [`Error`] type.

use chrono::NaiveDate;

use crate::endpoint::Endpoint;

/// Boxed cause of a failed request.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error from the API, the HTTP client or the caller's input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// No API key is configured.
	#[error("api key not found")]
	ApiKeyNotFound,
	/// The service answered "not found" for the endpoint.
	#[error("endpoint not found ({endpoint})")]
	EndpointNotFound {
		/// The requested endpoint.
		endpoint: Endpoint,
	},
	/// The HTTP client could not connect to the service.
	#[error("could not connect ({endpoint})")]
	ConnectionFailure {
		/// The requested endpoint.
		endpoint: Endpoint,
	},
	/// The request failed for a reason other than connecting, including
	/// unsuccessful statuses and bodies without the queried value.
	#[error("request exception ({endpoint})")]
	RequestFailure {
		/// The requested endpoint.
		endpoint: Endpoint,
		/// The underlying cause.
		#[source]
		source: BoxError,
	},
	/// The queried date is in the future.
	#[error("invalid date {0}: dates after today cannot be queried")]
	InvalidDate(NaiveDate),
	/// Failed to parse a date string.
	#[error("failed to parse date {0:?}")]
	DateParse(String),
}

/// [`Result`](std::result::Result) with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
