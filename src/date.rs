use std::str::FromStr;

use crate::{Error, Region};

/// Calendar date without a time component.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(
    /// Days since 1st of January, 1970. (UNIX epoch)
    pub(crate) isize,
);

impl Date {
    pub const fn from_ymd(year: isize, month: usize, day: usize) -> Self {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let y = year;
        let m = month as isize;
        let d = day as isize;

        let adjusted_year = y - if m <= 2 { 1 } else { 0 };

        let era = if adjusted_year >= 0 {
            adjusted_year / 400
        } else {
            (adjusted_year - 399) / 400
        };

        let year_of_era = adjusted_year - era * 400;
        let month_part = if m > 2 { m - 3 } else { m + 9 };
        let day_of_year = (153 * month_part + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        let days_since_julian = era * 146097 + day_of_era;

        Self(days_since_julian - CIVIL_TO_UNIX_DAYS)
    }

    /// Like [`Date::from_ymd`], but rejects days that don't exist, such as
    /// the 29th of February in a common year.
    pub const fn from_ymd_opt(year: isize, month: usize, day: usize) -> Option<Self> {
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self::from_ymd(year, month, day))
    }

    #[inline]
    pub const fn from_year(year: isize) -> Self {
        Self::from_ymd(year, 1, 1)
    }

    /// Current date in the local time zone.
    #[cfg(feature = "chrono")]
    pub fn today() -> Self {
        Date::from(chrono::Local::now().date_naive())
    }

    /// Current UTC date according to the system clock.
    #[cfg(not(feature = "chrono"))]
    pub fn today() -> Self {
        Date::from(std::time::SystemTime::now())
    }

    pub const fn ymd(&self) -> (isize, usize, usize) {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let shifted = self.0 + CIVIL_TO_UNIX_DAYS;

        let era = if shifted >= 0 {
            shifted / 146097
        } else {
            (shifted - 146096) / 146097
        };
        let day_of_era = shifted - era * 146097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_part = (5 * day_of_year + 2) / 153;

        let day = day_of_year - (153 * month_part + 2) / 5 + 1;
        let month = if month_part < 10 {
            month_part + 3
        } else {
            month_part - 9
        };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        (year, month as usize, day as usize)
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> usize {
        self.ymd().2
    }

    /// Month of the year
    #[inline]
    pub const fn month(&self) -> usize {
        self.ymd().1
    }

    /// Year
    #[inline]
    pub const fn year(&self) -> isize {
        self.ymd().0
    }

    /// The following day.
    #[inline]
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding day.
    #[inline]
    pub const fn pred(&self) -> Self {
        Self(self.0 - 1)
    }
}

// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
const CIVIL_TO_UNIX_DAYS: isize = 719468;

const fn is_leap_year(year: isize) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: isize, month: usize) -> usize {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses exactly `YYYY-MM-DD`.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn field(part: Option<&str>, width: usize) -> Result<usize, Error> {
            match part {
                Some(it) if it.len() == width && it.bytes().all(|b| b.is_ascii_digit()) => {
                    it.parse().map_err(|_| Error::InvalidDate)
                }
                _ => Err(Error::InvalidDate),
            }
        }

        let mut parts = s.split('-');
        let year = field(parts.next(), 4)?;
        let month = field(parts.next(), 2)?;
        let day = field(parts.next(), 2)?;
        if parts.next().is_some() {
            return Err(Error::InvalidDate);
        }

        Date::from_ymd_opt(year as isize, month, day).ok_or(Error::InvalidDate)
    }
}

const SECONDS_IN_DAY: isize = 86400;

impl TryFrom<Date> for std::time::SystemTime {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        if value.0 < 0 || value.0 > u64::MAX as isize / SECONDS_IN_DAY {
            return Err(crate::Error::DateTooLarge);
        }
        Ok(std::time::SystemTime::UNIX_EPOCH
            + std::time::Duration::from_secs(value.0 as u64 * SECONDS_IN_DAY as u64))
    }
}

impl From<std::time::SystemTime> for Date {
    fn from(value: std::time::SystemTime) -> Self {
        let days = match value.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(duration) => duration.as_secs() as isize / SECONDS_IN_DAY,
            Err(err) => {
                let secs = err.duration().as_secs() as isize;
                // Round towards the earlier day for instants before the epoch
                -((secs + SECONDS_IN_DAY - 1) / SECONDS_IN_DAY)
            }
        };

        Date(days)
    }
}

// Days from 0001-01-01 to 1970-01-01, chrono's "days from CE" origin
#[cfg(feature = "chrono")]
const CE_TO_UNIX_DAYS: isize = 719163;

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        if value.0 > i32::MAX as isize - CE_TO_UNIX_DAYS {
            return Err(crate::Error::DateTooLarge);
        }
        chrono::NaiveDate::from_num_days_from_ce_opt((value.0 + CE_TO_UNIX_DAYS) as i32)
            .ok_or(crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::DateTime<chrono::Utc> {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let naive = chrono::NaiveDate::try_from(value)?
            .and_hms_opt(0, 0, 0)
            .ok_or(crate::Error::DateTooLarge)?;

        Ok(chrono::TimeZone::from_utc_datetime(&chrono::Utc, &naive))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(value: chrono::NaiveDate) -> Self {
        Date(chrono::Datelike::num_days_from_ce(&value) as isize - CE_TO_UNIX_DAYS)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Date::from(value.date_naive())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Local>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Local>) -> Self {
        Date::from(value.naive_local().date())
    }
}

// Julian day number of 1970-01-01
#[cfg(feature = "time")]
const UNIX_EPOCH_JULIAN_DAY: isize = 2440588;

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let julian_day = i32::try_from(value.0 + UNIX_EPOCH_JULIAN_DAY)
            .map_err(|_| crate::Error::DateTooLarge)?;
        time::Date::from_julian_day(julian_day).map_err(|_| crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "time")]
impl From<time::Date> for Date {
    #[inline]
    fn from(value: time::Date) -> Self {
        Date(value.to_julian_day() as isize - UNIX_EPOCH_JULIAN_DAY)
    }
}
#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Date {
    #[inline]
    fn from(value: time::OffsetDateTime) -> Self {
        Date::from(value.date())
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

pub trait DateExt: Into<Date> + Clone {
    fn is_holiday(&self, region: Region) -> bool {
        crate::contains(region, self.clone())
    }

    /// Next holiday in `region` strictly after this date.
    fn next_holiday(&self, region: Region) -> Option<crate::Holiday> {
        crate::next_after(region, self.clone())
    }
}

impl DateExt for Date {}
impl DateExt for std::time::SystemTime {}

#[cfg(feature = "chrono")]
impl DateExt for chrono::NaiveDate {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Utc> {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Local> {}

#[cfg(feature = "time")]
impl DateExt for time::Date {}
#[cfg(feature = "time")]
impl DateExt for time::OffsetDateTime {}
