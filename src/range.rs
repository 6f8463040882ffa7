//! Date range arguments accepted by [`lookup`](crate::lookup).
//!
//! [`RangeInput`] is what a caller hands over, before anything is checked.
//! [`RangeInput::validate`] turns it into a [`DateRange`] or says why it
//! can't be used.

use std::collections::BTreeMap;

use crate::{date::Date, Error};

const START: &str = "start";
const END: &str = "end";

/// Raw date range argument, as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeInput {
    /// Named fields. A usable range carries exactly `start` and `end`, both
    /// formatted as `YYYY-MM-DD`.
    Fields(BTreeMap<String, String>),
    /// A bare string where a range was expected.
    Text(String),
}

impl RangeInput {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::from_fields([(START, start.into()), (END, end.into())])
    }

    /// Builds a range from arbitrary fields. A repeated key keeps its last
    /// value.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        RangeInput::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn text(value: impl Into<String>) -> Self {
        RangeInput::Text(value.into())
    }

    pub fn validate(&self) -> Result<DateRange, Error> {
        let fields = match self {
            RangeInput::Fields(fields) => fields,
            RangeInput::Text(_) => return Err(RangeRejection::NotFields.into()),
        };

        if let Some(key) = fields.keys().find(|it| *it != START && *it != END) {
            return Err(RangeRejection::UnexpectedField(key.clone()).into());
        }

        let field = |name: &'static str| -> Result<Date, Error> {
            let value = fields.get(name).ok_or(RangeRejection::MissingField(name))?;
            value.parse().map_err(|_| {
                RangeRejection::InvalidDate {
                    field: name,
                    value: value.clone(),
                }
                .into()
            })
        };

        Ok(DateRange {
            start: field(START)?,
            end: field(END)?,
        })
    }
}

impl From<DateRange> for RangeInput {
    fn from(value: DateRange) -> Self {
        RangeInput::new(value.start.to_string(), value.end.to_string())
    }
}

/// Reason a [`RangeInput`] was not accepted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeRejection {
    #[error("expected `start` and `end` fields")]
    NotFields,
    #[error("missing `{0}`")]
    MissingField(&'static str),
    #[error("unexpected field `{0}`")]
    UnexpectedField(String),
    #[error("`{field}` is not a YYYY-MM-DD date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Inclusive date range. A range whose `start` is after its `end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: impl Into<Date>, end: impl Into<Date>) -> Self {
        DateRange {
            start: start.into(),
            end: end.into(),
        }
    }

    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl From<std::ops::RangeInclusive<Date>> for DateRange {
    fn from(value: std::ops::RangeInclusive<Date>) -> Self {
        let (start, end) = value.into_inner();
        DateRange { start, end }
    }
}
