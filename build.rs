use csv::StringRecord;
use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    fs::File,
    hash::Hash,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

// Keep conservative to reduce compile time; the dataset only covers a few years
const DEFAULT_MIN_YEAR: isize = 2000;
const DEFAULT_MAX_YEAR: isize = 2035;

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Region {
    index: u16,
    slug: String,
    ident: String,
    name: String,
    national: bool,
}

/// Cargo exposes `england-and-wales` as `CARGO_FEATURE_ENGLAND_AND_WALES`.
pub fn is_region_enabled(slug: &str) -> bool {
    let feature = format!(
        "CARGO_FEATURE_{}",
        slug.replace('-', "_").to_ascii_uppercase()
    );
    std::env::var(&feature).is_ok()
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region::{}", self.ident)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Date {
    year: i16,
    month: u8,
    day: u8,
    day_index: isize,
}

pub const fn ymd_as_isize(y: isize, m: isize, d: isize) -> isize {
    // Source: https://howardhinnant.github.io/date_algorithms.html
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

    days_since_julian - 719468
}

impl Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = ();

    fn from_str(date: &str) -> Result<Self, Self::Err> {
        let mut date = date.split("-");
        let year = date.next().ok_or(())?.parse().map_err(|_| ())?;
        let month: u8 = date.next().ok_or(())?.parse().map_err(|_| ())?;
        let day: u8 = date.next().ok_or(())?.parse().map_err(|_| ())?;
        if date.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(());
        }
        Ok(Date {
            year,
            month,
            day,
            day_index: ymd_as_isize(year as isize, month as isize, day as isize),
        })
    }
}

#[derive(PartialEq, Eq)]
struct RegionDate<'a>(&'a Region, Date);
impl<'a> Hash for RegionDate<'a> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.index.hash(state);
        self.1.day_index.hash(state);
    }
}
impl<'a> phf_shared::PhfHash for RegionDate<'a> {
    fn phf_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.index.hash(state);
        self.1.day_index.hash(state);
    }
}
impl<'a> phf_shared::FmtConst for RegionDate<'a> {
    fn fmt_const(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, Date({}))", self.0, self.1.day_index)
    }
}

struct Holiday<'a> {
    region: &'a Region,
    date: Date,
    title: String,
    notes: String,
    bunting: bool,
}

fn parse_holiday_row<'a>(
    row: StringRecord,
    regions: &'a HashMap<String, Region>,
) -> Option<Holiday<'a>> {
    let mut it = row.iter().map(String::from);

    let slug = it.next().expect("invalid row in holidays.csv");
    let region = regions.get(&slug)?;

    Some(Holiday {
        region,
        date: {
            let date = it.next().expect("invalid row in holidays.csv");
            date.parse().expect("invalid date format in holidays.csv")
        },
        title: it.next().expect("invalid row in holidays.csv"),
        notes: it.next().unwrap_or_default(),
        bunting: match it.next().as_deref() {
            Some("true") => true,
            Some("false") | Some("") | None => false,
            Some(other) => panic!("invalid bunting flag {other:?} in holidays.csv"),
        },
    })
}

fn open_csv(path: &Path) -> csv::Reader<BufReader<File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(match File::open(path) {
            Ok(it) => it,
            Err(_) => {
                panic!("missing {}", path.display())
            }
        }))
}

fn gen_region_enum_decl<'a, W: Write, R: Iterator<Item = &'a Region>>(
    out: &mut W,
    regions: R,
) -> std::io::Result<()> {
    let mut reverse_lookup = phf_codegen::Map::<&str>::new();
    let mut national = None;

    out.write_all(b"declare_regions![\n")?;
    for r in regions {
        writeln!(
            out,
            "{}: \"{}\" \"{}\" {},",
            r.ident, r.slug, r.name, r.index
        )?;
        reverse_lookup.entry(&r.slug, r.to_string());
        if r.national {
            national = Some(r.to_string());
        }
    }
    out.write_all(b"];\n")?;

    writeln!(
        out,
        "pub(crate) static SLUG_TO_REGION: phf::Map<&'static str, Region> = {};",
        reverse_lookup.build()
    )?;
    match national {
        Some(it) => writeln!(out, "pub(crate) const NATIONAL: Option<Region> = Some({it});")?,
        None => writeln!(out, "pub(crate) const NATIONAL: Option<Region> = None;")?,
    }

    Ok(())
}

fn gen_data_tables<W: Write>(
    out: &mut W,
    regions: &[&Region],
    holidays: &[Holiday],
) -> std::io::Result<()> {
    let mut by_region: BTreeMap<u16, Vec<&Holiday>> = BTreeMap::new();
    for h in holidays {
        by_region.entry(h.region.index).or_default().push(h);
    }

    let mut exact_lookup = phf_codegen::Map::<RegionDate>::new();
    let mut min_year = isize::MAX;
    let mut max_year = isize::MIN;

    out.write_all(b"pub(crate) static DATA: &[&[Holiday]] = &[\n")?;
    for region in regions {
        let entries = by_region
            .get(&region.index)
            .map(|it| it.as_slice())
            .unwrap_or(&[]);

        writeln!(out, "// {}", region.name)?;
        out.write_all(b"&[\n")?;
        let mut previous: Option<Date> = None;
        for (i, h) in entries.iter().enumerate() {
            if let Some(previous) = previous {
                if h.date <= previous {
                    panic!(
                        "holidays.csv: {} entry {} is not after {}",
                        region.slug, h.date, previous
                    );
                }
            }
            previous = Some(h.date);

            writeln!(
                out,
                "crate::Holiday {{ title: {:?}, date: Date({}), notes: {:?}, bunting: {} }},",
                h.title, h.date.day_index, h.notes, h.bunting
            )?;
            exact_lookup.entry(RegionDate(h.region, h.date), i.to_string());
            min_year = min_year.min(h.date.year as isize);
            max_year = max_year.max(h.date.year as isize);
        }
        out.write_all(b"],\n")?;
    }
    out.write_all(b"];\n")?;

    if min_year > max_year {
        min_year = 0;
        max_year = 0;
    }
    writeln!(out, "pub(crate) const DATA_MIN_YEAR: isize = {min_year};")?;
    writeln!(out, "pub(crate) const DATA_MAX_YEAR: isize = {max_year};")?;

    writeln!(
        out,
        "pub(crate) static DATA_MAP: phf::Map<Point, usize> = {};",
        exact_lookup.build()
    )?;

    Ok(())
}

fn main() {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let regions_path = root.join("regions.csv");
    let holidays_path = root.join("holidays.csv");
    println!("cargo:rerun-if-changed={}", regions_path.display());
    println!("cargo:rerun-if-changed={}", holidays_path.display());
    println!("cargo:rerun-if-env-changed=UK_HOLIDAYS_MIN_YEAR");
    println!("cargo:rerun-if-env-changed=UK_HOLIDAYS_MAX_YEAR");

    let mut regions: Vec<Region> = open_csv(&regions_path)
        .records()
        .filter_map(Result::ok)
        .map(|it| {
            let mut it = it.iter().map(String::from);
            (
                it.next().expect("invalid row regions.csv"),
                it.next().expect("invalid row regions.csv"),
                it.next().expect("invalid row regions.csv"),
                it.next().as_deref() == Some("true"),
            )
        })
        .filter(|(slug, ..)| is_region_enabled(slug))
        .map(|(slug, ident, name, national)| Region {
            index: 0,
            slug,
            ident,
            name,
            national,
        })
        .collect();
    regions.sort_by(|a, b| a.slug.cmp(&b.slug));
    regions.iter_mut().enumerate().for_each(|(i, it)| {
        it.index = i as u16;
    });

    let out_dir = PathBuf::from(&std::env::var("OUT_DIR").unwrap());
    let regions_out = out_dir.join("decl_regions.rs");
    let mut regions_out =
        BufWriter::new(File::create(regions_out).expect("unable to create decl_regions.rs"));
    gen_region_enum_decl(&mut regions_out, regions.iter()).unwrap();

    let regions: HashMap<String, Region> = regions
        .into_iter()
        .map(|it| (it.slug.clone(), it))
        .collect();
    let mut ordered: Vec<&Region> = regions.values().collect();
    ordered.sort_by_key(|it| it.index);

    let min_req_year = std::env::var("UK_HOLIDAYS_MIN_YEAR")
        .map(|it| it.parse().unwrap_or(DEFAULT_MIN_YEAR))
        .unwrap_or(DEFAULT_MIN_YEAR);
    let max_req_year = std::env::var("UK_HOLIDAYS_MAX_YEAR")
        .map(|it| it.parse().unwrap_or(DEFAULT_MAX_YEAR))
        .unwrap_or(DEFAULT_MAX_YEAR);

    let holidays: Vec<Holiday> = open_csv(&holidays_path)
        .records()
        .filter_map(Result::ok)
        .filter_map(|row| parse_holiday_row(row, &regions))
        .filter(|it| (min_req_year..=max_req_year).contains(&(it.date.year as isize)))
        .collect();

    let holidays_out = out_dir.join("holiday_data.rs");
    let mut holidays_out =
        BufWriter::new(File::create(holidays_out).expect("unable to create holiday_data.rs"));
    gen_data_tables(&mut holidays_out, &ordered, &holidays).unwrap();
}
