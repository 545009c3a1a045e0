//! [`FromLocalized`]

use std::borrow::Cow;

/// Parsing of numbers formatted in the Chilean locale, e.g. `1.234,56`.
pub trait FromLocalized: Sized {
	/// The parse error type.
	type Error;

	/// Parses a plain decimal number, e.g. `1234.56`.
	fn parse_decimal(s: &str) -> Result<Self, Self::Error>;

	/// Parses a number that uses `.` for thousands and `,` for decimals.
	///
	/// A blank string is zero.
	fn parse_localized(s: &str) -> Result<Self, Self::Error> {
		let s = s.trim();
		if s.is_empty() { return Self::parse_decimal("0") }
		Self::parse_decimal(&delocalize(s))
	}
}

/// Rewrites a localized number as a plain decimal: drops every `.` then turns `,` into `.`.
pub fn delocalize(s: &str) -> Cow<'_, str> {
	if s.contains(['.', ',']) {
		Cow::Owned(s.chars().filter(|&c| c != '.').map(|c| if c == ',' { '.' } else { c }).collect())
	} else {
		Cow::Borrowed(s)
	}
}

/// Parses a localized number into an [`f64`].
pub fn normalize_number(s: &str) -> Result<f64, std::num::ParseFloatError> {
	f64::parse_localized(s)
}

impl FromLocalized for f64 {
	type Error = std::num::ParseFloatError;
	fn parse_decimal(s: &str) -> Result<Self, Self::Error> { s.parse() }
}

impl FromLocalized for f32 {
	type Error = std::num::ParseFloatError;
	fn parse_decimal(s: &str) -> Result<Self, Self::Error> { s.parse() }
}

#[cfg(feature = "rust_decimal")]
impl FromLocalized for rust_decimal::Decimal {
	type Error = rust_decimal::Error;
	fn parse_decimal(s: &str) -> Result<Self, Self::Error> {
		// from_scientific rejects non-scientific so trying both
		s.parse::<Self>().or_else(|_| Self::from_scientific(s))
	}
}
