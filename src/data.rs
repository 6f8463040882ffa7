use std::hash::Hash;

use crate::date::Date;
use crate::region::Region;
use crate::Holiday;

include!(concat!(env!("OUT_DIR"), "/holiday_data.rs"));

#[inline]
pub(crate) fn region_holidays(region: Region) -> &'static [Holiday] {
    DATA[region as usize]
}

/// Index of the first holiday in `region` on or after `date`.
///
/// Regional tables are strictly increasing by date, which `build.rs` checks.
pub(crate) fn date_to_index(region: Region, date: Date) -> usize {
    region_holidays(region).partition_point(|entry| entry.date < date)
}

/// Whether any holiday for `year` may exist in the compiled-in data.
#[inline]
pub(crate) fn covers_year(year: isize) -> bool {
    (DATA_MIN_YEAR..=DATA_MAX_YEAR).contains(&year)
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Point(Region, Date);
impl phf::PhfHash for Point {
    fn phf_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.0 as u16).hash(state);
        (self.1 .0).hash(state);
    }
}
impl phf_shared::PhfBorrow<Point> for Point {
    fn borrow(&self) -> &Point {
        self
    }
}

pub(crate) fn region_date_to_holiday(region: Region, date: Date) -> Option<&'static Holiday> {
    if !covers_year(date.year()) {
        return None;
    }
    DATA_MAP
        .get(&Point(region, date))
        .map(|i| &region_holidays(region)[*i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_tables_are_strictly_increasing() {
        for region in Region::all() {
            let holidays = region_holidays(region);
            assert!(!holidays.is_empty(), "{region} has no holidays");
            for pair in holidays.windows(2) {
                assert!(
                    pair[0].date < pair[1].date,
                    "{region}: {:?} is not before {:?}",
                    pair[0].date,
                    pair[1].date
                );
            }
        }
    }

    #[test]
    fn exact_lookup_matches_table() {
        for region in Region::all() {
            for holiday in region_holidays(region) {
                assert_eq!(region_date_to_holiday(region, holiday.date), Some(holiday));
            }
        }
        let not_a_holiday = Date::from_ymd(2019, 8, 27);
        assert_eq!(
            region_date_to_holiday(Region::EnglandAndWales, not_a_holiday),
            None
        );
    }

    #[test]
    fn lower_bound_lands_on_or_after() {
        let region = Region::Scotland;
        let index = date_to_index(region, Date::from_ymd(2019, 8, 1));
        assert_eq!(region_holidays(region)[index].date, Date::from_ymd(2019, 8, 5));

        let index = date_to_index(region, Date::from_ymd(2019, 8, 5));
        assert_eq!(region_holidays(region)[index].date, Date::from_ymd(2019, 8, 5));

        let index = date_to_index(region, Date::from_ymd(2100, 1, 1));
        assert_eq!(index, region_holidays(region).len());
    }
}
