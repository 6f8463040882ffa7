use proptest::prelude::*;

use uk_holidays::{all, lookup, lookup_at, Date, RangeInput, Region};

fn any_region() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::all().collect::<Vec<_>>())
}

// A little wider than the years covered by holidays.csv
fn any_date() -> impl Strategy<Value = Date> {
    (2018isize..2029, 1usize..=12, 1usize..=28).prop_map(|(y, m, d)| Date::from_ymd(y, m, d))
}

// Compared through another calendar so an offset in `Date` can't cancel out
#[cfg(feature = "chrono")]
fn is_after(later: Date, earlier: Date) -> bool {
    chrono::NaiveDate::try_from(later).unwrap() > chrono::NaiveDate::try_from(earlier).unwrap()
}

#[cfg(not(feature = "chrono"))]
fn is_after(later: Date, earlier: Date) -> bool {
    later.to_string() > earlier.to_string()
}

proptest! {
    #[test]
    fn range_results_are_a_contiguous_run(region in any_region(), a in any_date(), b in any_date()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let range = RangeInput::new(start.to_string(), end.to_string());
        let result = lookup(Some(&range), Some(region.slug()));

        let (start_iso, end_iso) = (start.to_string(), end.to_string());
        for holiday in &result {
            prop_assert!(start <= holiday.date && holiday.date <= end);
            let iso = holiday.date.to_string();
            prop_assert!(start_iso <= iso && iso <= end_iso);
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }

        let table = all(region).as_slice();
        let expected: Vec<_> = table
            .iter()
            .filter(|it| start <= it.date && it.date <= end)
            .copied()
            .collect();
        prop_assert_eq!(&result, &expected);

        if let Some(first) = result.first() {
            let offset = table.iter().position(|it| it == first).unwrap();
            prop_assert_eq!(&table[offset..offset + result.len()], result.as_slice());
        }
    }

    #[test]
    fn next_holiday_is_earliest_after_today(region in any_region(), today in any_date()) {
        let result = lookup_at(today, None, Some(region.slug()));
        let expected = all(region).find(|it| it.date > today);
        prop_assert_eq!(result.first().copied(), expected);
        prop_assert!(result.len() <= 1);

        if let Some(next) = result.first() {
            prop_assert!(is_after(next.date, today));
        }
    }

    #[test]
    fn unknown_regions_yield_nothing(name in "[a-z-]{1,20}", a in any_date(), b in any_date()) {
        prop_assume!(name.parse::<Region>().is_err());
        let range = RangeInput::new(a.to_string(), b.to_string());
        prop_assert!(lookup(Some(&range), Some(name.as_str())).is_empty());
        prop_assert!(lookup(None, Some(name.as_str())).is_empty());
    }
}
