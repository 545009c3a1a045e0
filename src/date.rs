//! [`QueryDate`]

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// The time zone the service publishes its values in.
pub const SERVICE_TIMEZONE: Tz = chrono_tz::America::Santiago;

/// Formats accepted by [`QueryDate::from_str`], tried in order.
const FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// The calendar date a query refers to.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
	/// Today in `timezone`, as of `now`.
	pub fn today_at(now: DateTime<Utc>, timezone: Tz) -> Self {
		Self(now.with_timezone(&timezone).date_naive())
	}

	/// Today in `timezone`.
	pub fn today_in(timezone: Tz) -> Self {
		Self::today_at(Utc::now(), timezone)
	}

	/// Today in the [service's time zone](SERVICE_TIMEZONE).
	pub fn today() -> Self {
		Self::today_in(SERVICE_TIMEZONE)
	}

	/// The given date, or `today` if there is none.
	pub fn normalize(date: Option<NaiveDate>, today: QueryDate) -> Self {
		date.map_or(today, Self)
	}

	/// Fails with [`Error::InvalidDate`] if the date is after `today`.
	pub fn validate_against(self, today: QueryDate) -> Result<Self> {
		if self > today {
			Err(Error::InvalidDate(self.0))
		} else {
			Ok(self)
		}
	}

	/// The underlying date.
	#[inline] pub const fn date(self) -> NaiveDate { self.0 }
}

impl From<NaiveDate> for QueryDate {
	#[inline] fn from(date: NaiveDate) -> Self { Self(date) }
}

impl From<QueryDate> for NaiveDate {
	#[inline] fn from(date: QueryDate) -> Self { date.0 }
}

/// Parses `YYYY-MM-DD`, `YYYY/MM/DD`, `DD-MM-YYYY` or an RFC 3339 date-time.
impl FromStr for QueryDate {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let s = s.trim();
		FORMATS
			.iter()
			.find_map(|format| NaiveDate::parse_from_str(s, format).ok())
			.or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|datetime| datetime.date_naive()))
			.map(Self)
			.ok_or_else(|| Error::DateParse(s.to_owned()))
	}
}

impl Display for QueryDate {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}
