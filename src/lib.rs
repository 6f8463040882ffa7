//! UK bank holidays for England and Wales, Scotland and Northern Ireland.
//!
//! ```
//! use uk_holidays::{lookup, RangeInput};
//!
//! let august = lookup(Some(&RangeInput::new("2019-08-01", "2019-08-31")), Some("scotland"));
//! assert_eq!(august.len(), 1);
//! assert_eq!(august[0].title, "Summer bank holiday");
//! ```

mod data;
mod date;
pub mod query;
pub mod range;
mod region;

#[cfg(not(any(
    feature = "england-and-wales",
    feature = "scotland",
    feature = "northern-ireland"
)))]
compile_error!("at least one region feature must be enabled");

pub use date::{Date, DateExt};
pub use query::Query;
pub use range::{DateRange, RangeInput, RangeRejection};
pub use region::Region;

/// Represents a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// Name of holiday, e.g. "Summer bank holiday".
    pub title: &'static str,
    /// Date of holiday.
    pub date: Date,
    /// Remarks such as "Substitute day". Empty when there are none.
    pub notes: &'static str,
    /// Whether the holiday is traditionally celebrated with bunting.
    pub bunting: bool,
}

/// Looks up holidays the way a loosely typed caller would ask for them.
///
/// * `region` selects the regional list; `None` or `""` means England and
///   Wales. An unknown region yields nothing.
/// * Without `range` the result is the next holiday after today, if any.
/// * With a valid `range` the result is every holiday in it, both ends
///   included, past dates too.
/// * A `range` that doesn't validate yields nothing.
///
/// Malformed input never produces an error, only an empty result.
pub fn lookup(range: Option<&RangeInput>, region: Option<&str>) -> Vec<Holiday> {
    lookup_at(Date::today(), range, region)
}

/// [`lookup`] with an explicit notion of "today".
pub fn lookup_at(
    today: impl Into<Date>,
    range: Option<&RangeInput>,
    region: Option<&str>,
) -> Vec<Holiday> {
    let Some(region) = region.map_or(Region::national(), Region::lookup) else {
        tracing::debug!(?region, "no holidays for unknown region");
        return Vec::new();
    };

    let Some(range) = range else {
        return next_after(region, today).into_iter().collect();
    };

    match range.validate() {
        Ok(range) => query(Query::region(region) & Query::from(range)).collect(),
        Err(err) => {
            tracing::debug!(%err, %region, "no holidays for rejected range");
            Vec::new()
        }
    }
}

pub fn get(region: Region, date: impl Into<Date>) -> query::Iter {
    Query::region(region).and(Query::date(date)).run()
}
#[inline]
pub fn contains(region: Region, date: impl Into<Date>) -> bool {
    data::region_date_to_holiday(region, date.into()).is_some()
}
/// First holiday in `region` strictly after `date`.
#[inline]
pub fn next_after(region: Region, date: impl Into<Date>) -> Option<Holiday> {
    Query::region(region).and(Query::after(date)).run().next()
}
/// First holiday in `region` after today.
#[inline]
pub fn next_holiday(region: Region) -> Option<Holiday> {
    next_after(region, Date::today())
}
#[inline]
pub fn all(region: Region) -> query::Iter {
    Query::region(region).run()
}
#[inline]
pub fn query(query: Query) -> query::Iter {
    query.run()
}

/// Error states the holiday crate might encounter.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Holidays are not available for this region.
    #[error("Holidays are not available for this region")]
    RegionNotAvailable,
    /// Text is not a `YYYY-MM-DD` calendar date.
    #[error("Date is not a valid YYYY-MM-DD calendar date")]
    InvalidDate,
    /// Date range input was rejected.
    #[error("Invalid date range: {0}")]
    InvalidRange(#[from] RangeRejection),
    /// Conversion to another date format is not supported.
    #[error("Date is too large for conversion")]
    DateTooLarge,
}
