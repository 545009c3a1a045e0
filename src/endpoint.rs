//! Endpoint and URL building.

use std::fmt::{self, Display, Formatter};

use chrono::Datelike;

use crate::{date::QueryDate, indicator::{Indicator, Resource}};

/// The default API root.
pub const API_BASE: &str = "http://api.sbif.cl/api-sbifv3/recursos_api/";

/// A resource path under the API root, e.g. `/uf/2024/01/dias/05`.
#[derive(Debug, Hash, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct Endpoint(String);

impl Endpoint {
	/// Creates an [`Endpoint`] from a raw path fragment.
	pub fn new(path: impl Into<String>) -> Self {
		Self(path.into())
	}

	/// The endpoint of an [`Indicator`] at a date.
	///
	/// Monthly series ignore the day.
	pub fn indicator(indicator: Indicator, date: QueryDate) -> Self {
		let date = date.date();
		let mut path = format!("/{}/{:04}/{:02}", indicator.path(), date.year(), date.month());
		if indicator.is_daily() {
			path.push_str(&format!("/dias/{:02}", date.day()));
		}
		Self(path)
	}

	/// The endpoint of an institution profile at the month of a date.
	///
	/// The code is percent-encoded so that it stays one path segment.
	pub fn institution(code: &str, date: QueryDate) -> Self {
		let date = date.date();
		let code = urlencoding::encode(code);
		Self(format!("/perfil/instituciones/{code}/{:04}/{:02}", date.year(), date.month()))
	}

	/// The endpoint of a [`Resource`] at a date.
	pub fn resource(resource: Resource<'_>, date: QueryDate) -> Self {
		match resource {
			Resource::Indicator(indicator) => Self::indicator(indicator, date),
			Resource::InstitutionProfile(code) => Self::institution(code, date),
		}
	}

	/// The path as given.
	#[inline] pub fn as_str(&self) -> &str { &self.0 }

	/// The path relative to the API root: at most one leading `/` is stripped.
	pub fn relative(&self) -> &str {
		self.0.strip_prefix('/').unwrap_or(&self.0)
	}

	/// The full request URL. The API key is percent-encoded.
	pub fn url(&self, api_base: &str, api_key: &str) -> String {
		let relative = self.relative();
		let api_key = urlencoding::encode(api_key);
		let mut url = String::with_capacity(
			api_base.len() + relative.len() + "?apikey=".len() + api_key.len() + "&formato=json".len(),
		);
		url.push_str(api_base);
		url.push_str(relative);
		url.push_str("?apikey=");
		url.push_str(&api_key);
		url.push_str("&formato=json");
		url
	}
}

impl AsRef<str> for Endpoint {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl From<&str> for Endpoint {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for Endpoint {
	fn from(path: String) -> Self {
		Self(path)
	}
}

impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	fn date() -> QueryDate {
		NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().into()
	}

	#[test]
	fn test_indicator_paths() {
		let cases = [
			(Indicator::Uf, "/uf/2024/01/dias/05"),
			(Indicator::Utm, "/utm/2024/01"),
			(Indicator::Dollar, "/dolar/2024/01/dias/05"),
			(Indicator::Euro, "/euro/2024/01/dias/05"),
			(Indicator::Ipc, "/ipc/2024/01"),
		];
		for (indicator, path) in cases {
			assert_eq!(Endpoint::indicator(indicator, date()).as_str(), path);
		}
	}

	#[test]
	fn test_institution_path() {
		assert_eq!(Endpoint::institution("001", date()).as_str(), "/perfil/instituciones/001/2024/01");
		assert_eq!(
			Endpoint::resource(Resource::InstitutionProfile("037"), date()).as_str(),
			"/perfil/instituciones/037/2024/01",
		);
	}

	#[test]
	fn test_institution_code_stays_one_segment() {
		assert_eq!(
			Endpoint::institution("01/../uf?x=1", date()).as_str(),
			"/perfil/instituciones/01%2F..%2Fuf%3Fx%3D1/2024/01",
		);
	}

	#[test]
	fn test_url_encodes_api_key() {
		assert_eq!(
			Endpoint::new("/utm/2024/01").url("http://localhost/", "a&b=c"),
			"http://localhost/utm/2024/01?apikey=a%26b%3Dc&formato=json",
		);
	}

	#[test]
	fn test_year_is_zero_padded() {
		let date = NaiveDate::from_ymd_opt(987, 12, 31).unwrap().into();
		assert_eq!(Endpoint::indicator(Indicator::Euro, date).as_str(), "/euro/0987/12/dias/31");
	}

	#[test]
	fn test_relative_strips_one_slash() {
		assert_eq!(Endpoint::new("/uf").relative(), "uf");
		assert_eq!(Endpoint::new("//uf").relative(), "/uf");
		assert_eq!(Endpoint::new("uf").relative(), "uf");
		assert_eq!(Endpoint::new("").relative(), "");
	}

	#[test]
	fn test_url() {
		let endpoint = Endpoint::indicator(Indicator::Dollar, date());
		assert_eq!(
			endpoint.url(API_BASE, "KEY"),
			"http://api.sbif.cl/api-sbifv3/recursos_api/dolar/2024/01/dias/05?apikey=KEY&formato=json",
		);
	}
}
