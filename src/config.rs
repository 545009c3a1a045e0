//! Client [`Config`].

use std::env;

use chrono_tz::Tz;

use crate::{date::SERVICE_TIMEZONE, endpoint::API_BASE, Token};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SBIF_API_KEY";
/// Environment variable overriding the API root.
pub const ENV_API_BASE: &str = "SBIF_API_BASE";
/// Environment variable overriding the time zone, e.g. `America/Santiago`.
pub const ENV_TIMEZONE: &str = "SBIF_TIMEZONE";

/// [`Client`](crate::Client) configuration.
///
/// # Examples
/// ```
/// # use sbif::{Config, Token};
/// let config = Config::default()
/// 	.api_key(Token::try_from("0123456789abcdef").unwrap())
/// 	.validate_indicator_dates(true);
/// assert_eq!(config.api_base, "http://api.sbif.cl/api-sbifv3/recursos_api/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// The API key. Requests fail with [`ApiKeyNotFound`](crate::Error::ApiKeyNotFound) without it.
	pub api_key: Option<Token>,
	/// The API root, with a trailing `/`.
	pub api_base: String,
	/// Whether indicator queries reject future dates like institution queries do.
	pub validate_indicator_dates: bool,
	/// The time zone "today" is taken in.
	pub timezone: Tz,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			api_key: None,
			api_base: API_BASE.to_owned(),
			validate_indicator_dates: false,
			timezone: SERVICE_TIMEZONE,
		}
	}
}

impl Config {
	/// A default [`Config`] with the given API key.
	pub fn new(api_key: Token) -> Self {
		Self::default().api_key(api_key)
	}

	/// Sets the [`api_key`](Config::api_key).
	pub fn api_key(mut self, api_key: Token) -> Self {
		self.api_key = Some(api_key);
		self
	}

	/// Sets the [`api_base`](Config::api_base).
	pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
		self.api_base = api_base.into();
		self
	}

	/// Sets [`validate_indicator_dates`](Config::validate_indicator_dates).
	pub fn validate_indicator_dates(mut self, validate: bool) -> Self {
		self.validate_indicator_dates = validate;
		self
	}

	/// Sets the [`timezone`](Config::timezone).
	pub fn timezone(mut self, timezone: Tz) -> Self {
		self.timezone = timezone;
		self
	}

	/// Reads [`ENV_API_KEY`], [`ENV_API_BASE`] and [`ENV_TIMEZONE`].
	///
	/// A missing key is left unset.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Like [`from_env`](Self::from_env) with a custom variable lookup.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		if let Some(api_key) = lookup(ENV_API_KEY).filter(|key| !key.is_empty()) {
			config.api_key = Some(Token::try_from(api_key.as_str()).map_err(|_| ConfigError::ApiKeyTooLong)?);
		}
		if let Some(api_base) = lookup(ENV_API_BASE).filter(|base| !base.is_empty()) {
			config.api_base = api_base;
		}
		if let Some(timezone) = lookup(ENV_TIMEZONE).filter(|timezone| !timezone.is_empty()) {
			config.timezone = timezone.parse().map_err(|_| ConfigError::InvalidTimezone(timezone))?;
		}
		Ok(config)
	}
}

/// An invalid configuration value.
#[derive(Debug, Hash, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// The API key does not fit a [`Token`].
	#[error("the api key is too long")]
	ApiKeyTooLong,
	/// Not an IANA time zone name.
	#[error("unknown time zone {0:?}")]
	InvalidTimezone(String),
}
