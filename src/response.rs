//! Value extraction from response bodies.

use serde::{Deserialize, Serialize};
use serde_json as json;
use tracing::warn;

use crate::{
	indicator::{Indicator, Resource},
	number::FromLocalized,
};

/// The value of a queried [`Resource`].
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue<T = f64> {
	/// The normalized value of an [`Indicator`].
	Numeric(T),
	/// An institution profile.
	Institution(InstitutionProfile),
}

impl<T> IndicatorValue<T> {
	/// The numeric value, if any.
	pub fn numeric(self) -> Option<T> {
		match self {
			Self::Numeric(value) => Some(value),
			Self::Institution(_) => None,
		}
	}

	/// The institution profile, if any.
	pub fn institution(self) -> Option<InstitutionProfile> {
		match self {
			Self::Numeric(_) => None,
			Self::Institution(profile) => Some(profile),
		}
	}
}

/// Descriptive record of a financial institution, passed through as returned by the service.
#[repr(transparent)]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionProfile(json::Value);

impl InstitutionProfile {
	/// Wraps a raw profile record.
	#[inline] pub const fn new(record: json::Value) -> Self { Self(record) }

	/// Gets a field of the record.
	pub fn get(&self, field: &str) -> Option<&json::Value> {
		self.0.get(field)
	}

	/// Gets a string field of the record.
	pub fn get_str(&self, field: &str) -> Option<&str> {
		self.get(field).and_then(|value| value.as_str())
	}

	/// Iterates over the record's fields.
	pub fn fields(&self) -> impl Iterator<Item = (&str, &json::Value)> {
		self.0.as_object().into_iter().flatten().map(|(name, value)| (name.as_str(), value))
	}

	/// The raw record.
	#[inline] pub fn as_json(&self) -> &json::Value { &self.0 }

	/// Unwraps the raw record.
	#[inline] pub fn into_inner(self) -> json::Value { self.0 }
}

impl From<json::Value> for InstitutionProfile {
	#[inline] fn from(record: json::Value) -> Self { Self(record) }
}

/// Gets the raw `Valor` of the first entry of an indicator's series, if present.
pub fn raw_value(body: &json::Value, indicator: Indicator) -> Option<&json::Value> {
	body.get(indicator.field())?.get(0)?.get("Valor")
}

/// A response body that does not hold the queried value.
#[derive(Debug, Hash, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
	/// `Valor` is not a number.
	#[error("unparseable value {0}")]
	InvalidValue(String),
	/// `Perfiles` has no entry.
	#[error("no institution profile in the response")]
	MissingProfile,
}

/// Extracts and normalizes an indicator's value.
///
/// A missing entry is zero.
pub fn extract_value<T: FromLocalized>(body: &json::Value, indicator: Indicator) -> Result<T, ResponseError> {
	let raw = raw_value(body, indicator);
	let parsed = match raw {
		None | Some(json::Value::Null) => T::parse_decimal("0").ok(),
		Some(json::Value::String(value)) => T::parse_localized(value).ok(),
		Some(json::Value::Number(value)) => T::parse_decimal(&value.to_string()).ok(),
		Some(_) => None,
	};
	parsed.ok_or_else(|| {
		let raw = raw.map(json::Value::to_string).unwrap_or_default();
		warn!(%indicator, value = %raw, "unparseable indicator value");
		ResponseError::InvalidValue(raw)
	})
}

/// Extracts the first institution profile.
pub fn extract_profile(body: &json::Value) -> Result<InstitutionProfile, ResponseError> {
	body.get("Perfiles")
		.and_then(|profiles| profiles.get(0))
		.cloned()
		.map(InstitutionProfile)
		.ok_or(ResponseError::MissingProfile)
}

/// Extracts the value of a [`Resource`].
pub fn extract<T: FromLocalized>(body: &json::Value, resource: Resource<'_>) -> Result<IndicatorValue<T>, ResponseError> {
	match resource {
		Resource::Indicator(indicator) => extract_value(body, indicator).map(IndicatorValue::Numeric),
		Resource::InstitutionProfile(_) => extract_profile(body).map(IndicatorValue::Institution),
	}
}
