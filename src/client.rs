//! The API [`Client`].

use chrono::{DateTime, NaiveDate, Utc};
use serde_json as json;
use tracing::{debug, warn};

use crate::{
	config::Config,
	date::QueryDate,
	endpoint::Endpoint,
	error::{Error, Result},
	indicator::{Indicator, Resource},
	number::FromLocalized,
	response::{self, IndicatorValue, InstitutionProfile, ResponseError},
	transport::{StatusError, Transport, TransportError},
};

/// SBIF API client.
///
/// Every query takes an optional date, defaulting to today.
///
/// # Examples
/// ```no_run
/// # async fn run() -> sbif::Result<()> {
/// use sbif::{Client, Config};
/// let client = Client::new(Config::from_env().expect("valid SBIF_API_KEY"));
/// let dollar = client.dollar(None).await?;
/// println!("USD {dollar}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = reqwest::Client> {
	config: Config,
	transport: T,
	clock: fn() -> DateTime<Utc>,
}

impl Client {
	/// Creates a [`Client`] over a default [`reqwest::Client`].
	pub fn new(config: Config) -> Self {
		Self::with_transport(config, reqwest::Client::new())
	}
}

impl<T: Transport> Client<T> {
	/// Creates a [`Client`] over the given [`Transport`].
	pub fn with_transport(config: Config, transport: T) -> Self {
		Self { config, transport, clock: Utc::now }
	}

	/// Replaces the clock "today" is read from.
	pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
		self.clock = clock;
		self
	}

	/// The configuration.
	#[inline] pub fn config(&self) -> &Config { &self.config }

	/// The API key, if configured.
	pub fn api_key(&self) -> Option<&str> {
		self.config.api_key.as_ref().map(AsRef::as_ref)
	}

	/// The API root.
	#[inline] pub fn api_base(&self) -> &str { &self.config.api_base }

	/// Requests an endpoint and parses the body as JSON.
	pub async fn get(&self, endpoint: &Endpoint) -> Result<json::Value> {
		let api_key = self.config.api_key.as_ref().ok_or(Error::ApiKeyNotFound)?;
		let url = endpoint.url(&self.config.api_base, api_key.as_ref());
		debug!(%endpoint, api_base = %self.config.api_base, "requesting");

		let response = Transport::get(&self.transport, &url).await.map_err(|error| {
			warn!(%endpoint, %error, "request failed");
			match error {
				TransportError::Connect(_) => Error::ConnectionFailure { endpoint: endpoint.clone() },
				TransportError::Request(source) => Error::RequestFailure { endpoint: endpoint.clone(), source },
			}
		})?;

		if response.status == 404 {
			warn!(%endpoint, "endpoint not found");
			return Err(Error::EndpointNotFound { endpoint: endpoint.clone() });
		}
		if !response.is_success() {
			warn!(%endpoint, status = response.status, "unsuccessful response");
			return Err(Error::RequestFailure {
				endpoint: endpoint.clone(),
				source: Box::new(StatusError(response.status)),
			});
		}
		debug!(%endpoint, status = response.status, len = response.body.len(), "received");

		json::from_str(&response.body).map_err(|error| {
			warn!(%endpoint, %error, "response is not json");
			Error::RequestFailure { endpoint: endpoint.clone(), source: Box::new(error) }
		})
	}

	/// Today in the configured time zone.
	pub fn today(&self) -> QueryDate {
		QueryDate::today_at((self.clock)(), self.config.timezone)
	}

	/// Normalizes and validates the date, then requests the resource's endpoint.
	async fn query(&self, resource: Resource<'_>, date: Option<NaiveDate>) -> Result<(Endpoint, json::Value)> {
		let today = self.today();
		let mut date = QueryDate::normalize(date, today);
		if matches!(resource, Resource::InstitutionProfile(_)) || self.config.validate_indicator_dates {
			date = date.validate_against(today)?;
		}
		let endpoint = Endpoint::resource(resource, date);
		let body = self.get(&endpoint).await?;
		Ok((endpoint, body))
	}

	/// Queries a [`Resource`].
	///
	/// Institution profiles reject future dates; indicators do so only with
	/// [`Config::validate_indicator_dates`].
	pub async fn fetch<V: FromLocalized>(
		&self,
		resource: Resource<'_>,
		date: Option<NaiveDate>,
	) -> Result<IndicatorValue<V>> {
		let (endpoint, body) = self.query(resource, date).await?;
		response::extract(&body, resource).map_err(|error| unexpected_body(endpoint, error))
	}

	/// Queries an [`Indicator`] as any [`FromLocalized`] number.
	pub async fn indicator_as<V: FromLocalized>(&self, indicator: Indicator, date: Option<NaiveDate>) -> Result<V> {
		let (endpoint, body) = self.query(indicator.into(), date).await?;
		response::extract_value(&body, indicator).map_err(|error| unexpected_body(endpoint, error))
	}

	/// Queries an [`Indicator`].
	pub async fn indicator(&self, indicator: Indicator, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator_as(indicator, date).await
	}

	/// The US dollar rate.
	pub async fn dollar(&self, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator(Indicator::Dollar, date).await
	}

	/// The euro rate.
	pub async fn euro(&self, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator(Indicator::Euro, date).await
	}

	/// The UTM of the month.
	pub async fn utm(&self, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator(Indicator::Utm, date).await
	}

	/// The UF.
	pub async fn uf(&self, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator(Indicator::Uf, date).await
	}

	/// The IPC of the month.
	pub async fn ipc(&self, date: Option<NaiveDate>) -> Result<f64> {
		self.indicator(Indicator::Ipc, date).await
	}

	/// The profile of an institution at the month of the date.
	pub async fn institution_data(&self, code: &str, date: Option<NaiveDate>) -> Result<InstitutionProfile> {
		let (endpoint, body) = self.query(Resource::InstitutionProfile(code), date).await?;
		response::extract_profile(&body).map_err(|error| unexpected_body(endpoint, error))
	}
}

fn unexpected_body(endpoint: Endpoint, error: ResponseError) -> Error {
	Error::RequestFailure { endpoint, source: Box::new(error) }
}
