//! Behaviour of `lookup` for well-formed and malformed requests.

use uk_holidays::{all, lookup, lookup_at, Date, Holiday, RangeInput, Region};

fn holiday(title: &'static str, date: &str, bunting: bool) -> Holiday {
    Holiday {
        title,
        date: date.parse().unwrap(),
        notes: "",
        bunting,
    }
}

// ─── valid requests ───────────────────────────────────────────────────────────

#[test]
fn next_holiday_without_arguments() {
    let today = Date::from_ymd(2026, 10, 16);
    let result = lookup_at(today, None, None);
    assert_eq!(result, vec![holiday("Christmas Day", "2026-12-25", true)]);
}

#[test]
fn next_holiday_for_region() {
    let today = Date::from_ymd(2026, 10, 16);
    let result = lookup_at(today, None, Some("scotland"));
    assert_eq!(result, vec![holiday("St Andrew’s Day", "2026-11-30", true)]);
}

#[test]
fn next_holiday_skips_today() {
    let result = lookup_at(Date::from_ymd(2026, 12, 25), None, None);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Boxing Day");
    assert_eq!(result[0].date.to_string(), "2026-12-28");
    assert_eq!(result[0].notes, "Substitute day");
}

#[test]
fn no_next_holiday_past_the_data() {
    let last = all(Region::EnglandAndWales).last().unwrap();
    assert_eq!(lookup_at(last.date, None, None), Vec::<Holiday>::new());
}

#[cfg(feature = "chrono")]
#[test]
fn next_holiday_is_after_local_today() {
    let today = chrono::Local::now().date_naive();
    let last = all(Region::EnglandAndWales).last().unwrap();
    let result = lookup(None, None);

    if chrono::NaiveDate::try_from(last.date).unwrap() <= today {
        assert!(result.is_empty());
        return;
    }
    assert_eq!(result.len(), 1);
    assert!(chrono::NaiveDate::try_from(result[0].date).unwrap() > today);
    assert!(result[0].date.to_string() > today.format("%Y-%m-%d").to_string());
}

#[test]
fn holidays_within_range() {
    let result = lookup(Some(&RangeInput::new("2019-08-01", "2019-08-31")), None);
    assert_eq!(
        result,
        vec![holiday("Summer bank holiday", "2019-08-26", true)]
    );
}

#[test]
fn holidays_for_requested_region() {
    let result = lookup(
        Some(&RangeInput::new("2019-08-01", "2019-08-31")),
        Some("scotland"),
    );
    assert_eq!(
        result,
        vec![holiday("Summer bank holiday", "2019-08-05", true)]
    );
}

#[test]
fn past_holidays_within_range() {
    let expected = vec![
        holiday("New Year’s Day", "2019-01-01", true),
        holiday("Good Friday", "2019-04-19", false),
        holiday("Easter Monday", "2019-04-22", true),
        holiday("Early May bank holiday", "2019-05-06", true),
        holiday("Spring bank holiday", "2019-05-27", true),
        holiday("Summer bank holiday", "2019-08-26", true),
        holiday("Christmas Day", "2019-12-25", true),
        holiday("Boxing Day", "2019-12-26", true),
    ];

    let result = lookup(Some(&RangeInput::new("2019-01-01", "2019-12-31")), None);
    assert_eq!(result.len(), 8);
    assert_eq!(result, expected);
}

#[test]
fn substitute_days_carry_notes() {
    let result = lookup(
        Some(&RangeInput::new("2020-12-01", "2020-12-31")),
        Some("northern-ireland"),
    );
    let boxing_day = result.last().unwrap();
    assert_eq!(boxing_day.title, "Boxing Day");
    assert_eq!(boxing_day.date, Date::from_ymd(2020, 12, 28));
    assert_eq!(boxing_day.notes, "Substitute day");
}

#[test]
fn regional_holidays() {
    let year = RangeInput::new("2021-01-01", "2021-12-31");
    let titles = |region: Option<&str>| -> Vec<&'static str> {
        lookup(Some(&year), region)
            .into_iter()
            .map(|it| it.title)
            .collect()
    };

    let scotland = titles(Some("scotland"));
    assert!(scotland.contains(&"St Andrew’s Day"));
    assert!(scotland.contains(&"2nd January"));
    assert!(!scotland.contains(&"Easter Monday"));

    let northern_ireland = titles(Some("northern-ireland"));
    assert!(northern_ireland.contains(&"St Patrick’s Day"));
    assert!(northern_ireland.contains(&"Battle of the Boyne (Orangemen’s Day)"));

    let national = titles(None);
    assert!(!national.contains(&"St Andrew’s Day"));
    assert!(!national.contains(&"St Patrick’s Day"));
    assert_eq!(national, titles(Some("england-and-wales")));
}

// ─── invalid requests ─────────────────────────────────────────────────────────

#[test]
fn unknown_region() {
    assert_eq!(lookup(None, Some("something")), Vec::<Holiday>::new());
    assert_eq!(
        lookup(Some(&RangeInput::new("2019-01-01", "2019-12-31")), Some("wales")),
        Vec::<Holiday>::new()
    );
}

#[test]
fn range_without_end() {
    let range = RangeInput::from_fields([("start", "2020-01-01")]);
    assert_eq!(lookup(Some(&range), Some("northern-ireland")), Vec::<Holiday>::new());
}

#[test]
fn range_without_start() {
    let range = RangeInput::from_fields([("end", "2020-01-01")]);
    assert_eq!(lookup(Some(&range), Some("northern-ireland")), Vec::<Holiday>::new());
}

#[test]
fn range_with_unparseable_dates() {
    let range = RangeInput::new("hello!", "bye!");
    assert_eq!(lookup(Some(&range), Some("northern-ireland")), Vec::<Holiday>::new());
}

#[test]
fn range_with_extra_fields() {
    let range = RangeInput::from_fields([
        ("start", "2019-01-01"),
        ("end", "2019-12-31"),
        ("region", "scotland"),
    ]);
    assert_eq!(lookup(Some(&range), None), Vec::<Holiday>::new());
}

#[test]
fn region_passed_in_place_of_range() {
    let range = RangeInput::text("northern-ireland");
    assert_eq!(lookup(Some(&range), None), Vec::<Holiday>::new());
}
