use std::ops::{Bound, RangeBounds};

use crate::region::Region;
use crate::{date::Date, range::DateRange, Holiday};

/// Typed holiday query.
///
/// Queries are combined with [`Query::and`] (or `&`): date filters intersect
/// and the region of the right-hand side wins when both sides name one. A
/// query without a region runs against the national list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    region: Option<Region>,
    date_filter: Option<DateQuery>,
}

impl Query {
    pub fn region(value: Region) -> Self {
        Query {
            region: Some(value),
            date_filter: None,
        }
    }

    pub fn year(value: isize) -> Self {
        Query {
            region: None,
            date_filter: Some(DateQuery::year(value)),
        }
    }

    pub fn year_range<R: RangeBounds<isize>>(value: R) -> Self {
        Query {
            region: None,
            date_filter: DateQuery::year_range(value),
        }
    }

    pub fn date(value: impl Into<Date>) -> Self {
        Query {
            region: None,
            date_filter: Some(DateQuery::date(value)),
        }
    }

    pub fn date_range<D, R>(value: R) -> Self
    where
        D: Into<Date> + Clone,
        R: RangeBounds<D>,
    {
        Query {
            region: None,
            date_filter: DateQuery::date_range(value),
        }
    }

    /// Holidays strictly after `value`.
    pub fn after(value: impl Into<Date>) -> Self {
        Query {
            region: None,
            date_filter: Some(DateQuery::FromDate(value.into().succ())),
        }
    }

    pub fn and(mut self, other: Self) -> Self {
        self &= other;
        self
    }

    pub(crate) fn run(&self) -> Iter {
        let region = match self.region.or(Region::national()) {
            Some(it) => it,
            None => return Iter::empty(),
        };

        let holidays = region.holidays();
        let (from, to) = match self.date_filter {
            Some(filter) if filter.is_empty() => return Iter::empty(),
            Some(DateQuery::FromDate(from)) => (Some(from), None),
            Some(DateQuery::ToDate(to)) => (None, Some(to)),
            Some(DateQuery::Exact(date)) => (Some(date), Some(date.succ())),
            Some(DateQuery::DateRange(from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        let start = from.map_or(0, |it| crate::data::date_to_index(region, it));
        let end = to.map_or(holidays.len(), |it| crate::data::date_to_index(region, it));

        Iter {
            inner: holidays[start..end.max(start)].iter(),
        }
    }
}

impl From<Region> for Query {
    fn from(value: Region) -> Self {
        Query::region(value)
    }
}

impl From<DateRange> for Query {
    fn from(value: DateRange) -> Self {
        Query::date_range(value.start..=value.end)
    }
}

impl std::ops::BitAnd for Query {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}
impl std::ops::BitAndAssign for Query {
    fn bitand_assign(&mut self, rhs: Self) {
        self.region = rhs.region.or(self.region);
        self.date_filter = match (self.date_filter, rhs.date_filter) {
            (None, Some(it)) => Some(it),
            (Some(it), None) => Some(it),
            (Some(a), Some(b)) => Some(a & b),
            (None, None) => None,
        };
    }
}

/// Date constraint of a [`Query`]. Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateQuery {
    FromDate(Date),
    ToDate(Date),
    Exact(Date),
    DateRange(Date, Date),
}

impl DateQuery {
    const EMPTY: DateQuery = DateQuery::DateRange(Date(0), Date(0));

    #[inline(always)]
    fn year(value: isize) -> Self {
        DateQuery::DateRange(Date::from_year(value), Date::from_year(value + 1))
    }

    fn year_range<R>(value: R) -> Option<Self>
    where
        R: RangeBounds<isize>,
    {
        let start = match value.start_bound() {
            Bound::Included(it) => Some(Date::from_year(*it)),
            Bound::Excluded(it) => Some(Date::from_year(it + 1)),
            Bound::Unbounded => None,
        };
        let end = match value.end_bound() {
            Bound::Included(it) => Some(Date::from_year(it + 1)),
            Bound::Excluded(it) => Some(Date::from_year(*it)),
            Bound::Unbounded => None,
        };

        Self::from_bounds(start, end)
    }

    #[inline(always)]
    fn date(value: impl Into<Date>) -> Self {
        DateQuery::Exact(value.into())
    }

    fn date_range<D, R>(value: R) -> Option<Self>
    where
        D: Into<Date> + Clone,
        R: RangeBounds<D>,
    {
        let start: Option<Date> = match value.start_bound() {
            Bound::Included(it) => Some(it.clone().into()),
            Bound::Excluded(it) => Some(Into::<Date>::into(it.clone()).succ()),
            Bound::Unbounded => None,
        };
        let end: Option<Date> = match value.end_bound() {
            Bound::Included(it) => Some(Into::<Date>::into(it.clone()).succ()),
            Bound::Excluded(it) => Some(it.clone().into()),
            Bound::Unbounded => None,
        };

        Self::from_bounds(start, end)
    }

    fn from_bounds(start: Option<Date>, end: Option<Date>) -> Option<Self> {
        match (start, end) {
            (Some(from), Some(to)) => Some(DateQuery::DateRange(from, to)),
            (Some(from), None) => Some(DateQuery::FromDate(from)),
            (None, Some(to)) => Some(DateQuery::ToDate(to)),
            (None, None) => None,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            DateQuery::DateRange(a, b) => a >= b,
            _ => false,
        }
    }

    fn range(from: Date, to: Date) -> Self {
        if from >= to {
            DateQuery::EMPTY
        } else {
            DateQuery::DateRange(from, to)
        }
    }
}

impl std::ops::BitAnd for DateQuery {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (DateQuery::FromDate(a), DateQuery::FromDate(b)) => DateQuery::FromDate(a.max(b)),
            (DateQuery::ToDate(a), DateQuery::ToDate(b)) => DateQuery::ToDate(a.min(b)),
            (DateQuery::Exact(a), DateQuery::Exact(b)) => {
                if a != b {
                    DateQuery::EMPTY
                } else {
                    DateQuery::Exact(a)
                }
            }

            (DateQuery::FromDate(a), DateQuery::Exact(b))
            | (DateQuery::Exact(b), DateQuery::FromDate(a)) => {
                if a > b {
                    DateQuery::EMPTY
                } else {
                    DateQuery::Exact(b)
                }
            }
            (DateQuery::ToDate(a), DateQuery::Exact(b))
            | (DateQuery::Exact(b), DateQuery::ToDate(a)) => {
                if b >= a {
                    DateQuery::EMPTY
                } else {
                    DateQuery::Exact(b)
                }
            }
            (DateQuery::Exact(a), DateQuery::DateRange(b_from, b_to))
            | (DateQuery::DateRange(b_from, b_to), DateQuery::Exact(a)) => {
                if b_from > a || b_to <= a {
                    DateQuery::EMPTY
                } else {
                    DateQuery::Exact(a)
                }
            }
            (DateQuery::FromDate(a), DateQuery::ToDate(b))
            | (DateQuery::ToDate(b), DateQuery::FromDate(a)) => DateQuery::range(a, b),
            (DateQuery::FromDate(a), DateQuery::DateRange(b_from, b_to))
            | (DateQuery::DateRange(b_from, b_to), DateQuery::FromDate(a)) => {
                DateQuery::range(a.max(b_from), b_to)
            }
            (DateQuery::ToDate(a), DateQuery::DateRange(b_from, b_to))
            | (DateQuery::DateRange(b_from, b_to), DateQuery::ToDate(a)) => {
                DateQuery::range(b_from, a.min(b_to))
            }
            (DateQuery::DateRange(a_from, a_to), DateQuery::DateRange(b_from, b_to)) => {
                DateQuery::range(a_from.max(b_from), a_to.min(b_to))
            }
        }
    }
}

/// Holidays matched by a [`Query`], in ascending date order.
#[derive(Debug, Clone)]
pub struct Iter {
    inner: std::slice::Iter<'static, Holiday>,
}

impl Iter {
    fn empty() -> Self {
        let empty: &'static [Holiday] = &[];
        Iter {
            inner: empty.iter(),
        }
    }

    /// Remaining holidays, borrowed from the compiled-in data.
    pub fn as_slice(&self) -> &'static [Holiday] {
        self.inner.as_slice()
    }
}

impl Iterator for Iter {
    type Item = Holiday;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter {}
