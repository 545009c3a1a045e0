//! [Indicator codes](Indicator).

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

/// A numeric series published by the service.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Indicator {
	/// Unidad de Fomento, daily.
	Uf,
	/// Unidad Tributaria Mensual, monthly.
	Utm,
	/// US dollar observed rate, daily.
	Dollar,
	/// Euro rate, daily.
	Euro,
	/// Consumer price index, monthly.
	Ipc,
}

impl Indicator {
	/// All indicators.
	pub const ALL: [Indicator; 5] = [Self::Uf, Self::Utm, Self::Dollar, Self::Euro, Self::Ipc];

	/// The resource path segment.
	pub const fn path(self) -> &'static str {
		match self {
			Self::Uf => "uf",
			Self::Utm => "utm",
			Self::Dollar => "dolar",
			Self::Euro => "euro",
			Self::Ipc => "ipc",
		}
	}

	/// The response field holding the series values.
	pub const fn field(self) -> &'static str {
		match self {
			Self::Uf => "UFs",
			Self::Utm => "UTMs",
			Self::Dollar => "Dolares",
			Self::Euro => "Euros",
			Self::Ipc => "IPCs",
		}
	}

	/// Whether the series is published per day (otherwise per month).
	pub const fn is_daily(self) -> bool {
		matches!(self, Self::Uf | Self::Dollar | Self::Euro)
	}

	/// The lowercase name, as accepted by [`FromStr`].
	pub const fn name(self) -> &'static str {
		match self {
			Self::Uf => "uf",
			Self::Utm => "utm",
			Self::Dollar => "dollar",
			Self::Euro => "euro",
			Self::Ipc => "ipc",
		}
	}
}

impl FromStr for Indicator {
	type Err = InvalidIndicatorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|indicator| {
				s.eq_ignore_ascii_case(indicator.name()) || s.eq_ignore_ascii_case(indicator.path())
			})
			.ok_or(InvalidIndicatorError)
	}
}

impl Display for Indicator {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}

/// Invalid indicator name error.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InvalidIndicatorError;

impl Display for InvalidIndicatorError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		"invalid indicator, expected one of: uf, utm, dollar, euro, ipc".fmt(f)
	}
}

impl Error for InvalidIndicatorError {}

/// Something that can be queried: a numeric [`Indicator`] or an institution profile.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
	/// A numeric series.
	Indicator(Indicator),
	/// The profile of the institution with the given code.
	InstitutionProfile(&'a str),
}

impl From<Indicator> for Resource<'_> {
	#[inline] fn from(indicator: Indicator) -> Self { Self::Indicator(indicator) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_str() {
		assert_eq!("uf".parse(), Ok(Indicator::Uf));
		assert_eq!("UTM".parse(), Ok(Indicator::Utm));
		assert_eq!("dollar".parse(), Ok(Indicator::Dollar));
		assert_eq!("dolar".parse(), Ok(Indicator::Dollar));
		assert_eq!("Euro".parse(), Ok(Indicator::Euro));
		assert_eq!("ipc".parse(), Ok(Indicator::Ipc));
		assert_eq!("yen".parse::<Indicator>(), Err(InvalidIndicatorError));
	}

	#[test]
	fn test_display_roundtrips_name() {
		for indicator in Indicator::ALL {
			assert_eq!(indicator.to_string().parse(), Ok(indicator));
		}
	}
}
