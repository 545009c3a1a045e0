//! HTTP transport seam.

use async_trait::async_trait;

use crate::error::BoxError;

/// A response as seen by the client: status and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	/// The HTTP status code.
	pub status: u16,
	/// The body text.
	pub body: String,
}

impl HttpResponse {
	/// A `200 OK` response with the given body.
	pub fn ok(body: impl Into<String>) -> Self {
		Self { status: 200, body: body.into() }
	}

	/// Whether the status is `2xx`.
	pub const fn is_success(&self) -> bool {
		self.status >= 200 && self.status < 300
	}
}

/// A failure to complete a request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	/// No connection could be established.
	#[error("connection failed")]
	Connect(#[source] BoxError),
	/// Any other failure.
	#[error("request failed")]
	Request(#[source] BoxError),
}

impl From<reqwest::Error> for TransportError {
	fn from(error: reqwest::Error) -> Self {
		if error.is_connect() {
			Self::Connect(error.into())
		} else {
			Self::Request(error.into())
		}
	}
}

/// An unsuccessful HTTP status.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsuccessful http status {0}")]
pub struct StatusError(pub u16);

/// Performs `GET` requests.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Sends a `GET` request to the URL.
	async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl Transport for reqwest::Client {
	async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
		let response = reqwest::Client::get(self, url).send().await?;
		let status = response.status().as_u16();
		let body = response.text().await?;
		Ok(HttpResponse { status, body })
	}
}
