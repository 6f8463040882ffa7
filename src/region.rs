use crate::{Error, Holiday};

macro_rules! declare_regions {
    ($($ident: ident: $slug: literal $name: literal $val:literal),* $(,)?) => {
        /// UK jurisdictions that publish their own list of bank holidays.
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Region {$(
            #[doc = $name]
            $ident = $val
        ),*}

        impl Region {
            const SLUGS: &[&'static str] = &[$(
                $slug
            ),*];
            const NAMES: &[&'static str] = &[$(
                $name
            ),*];
            const ALL: &[Region] = &[$(
                Region::$ident
            ),*];
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/decl_regions.rs"));

impl Region {
    /// Region used when a lookup doesn't name one (England and Wales), if it
    /// was compiled in.
    #[inline]
    pub const fn national() -> Option<Region> {
        NATIONAL
    }

    /// Every region compiled into the crate, ordered by slug.
    pub fn all() -> impl Iterator<Item = Region> {
        Self::ALL.iter().copied()
    }

    /// Resolves a region by its slug, e.g. `"northern-ireland"`.
    ///
    /// An empty name resolves to the national region.
    pub fn lookup(name: &str) -> Option<Region> {
        if name.is_empty() {
            return Self::national();
        }
        SLUG_TO_REGION.get(name).copied()
    }

    /// Human readable name, e.g. "Northern Ireland".
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Slug used in lookups, e.g. "northern-ireland".
    pub fn slug(&self) -> &'static str {
        Self::SLUGS[*self as usize]
    }

    /// All holidays of this region in ascending date order.
    #[inline]
    pub fn holidays(&self) -> &'static [Holiday] {
        crate::data::region_holidays(*self)
    }
}

impl std::str::FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SLUG_TO_REGION
            .get(s)
            .copied()
            .ok_or(Error::RegionNotAvailable)
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.slug()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
