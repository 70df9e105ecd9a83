use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};

use crate::Job;

/// Named sort options offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    /// Smallest minute count first.
    PostedNew,
    /// Largest minute count first.
    PostedOld,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::PostedNew,
        SortKey::PostedOld,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
            SortKey::PostedNew => "postedNew",
            SortKey::PostedOld => "postedOld",
        }
    }

    /// Sorts `jobs` in place.
    pub fn apply(self, jobs: &mut [Job]) {
        match self {
            SortKey::TitleAsc => sort_by_title(jobs, true),
            SortKey::TitleDesc => sort_by_title(jobs, false),
            SortKey::PostedNew => sort_by_posted_time(jobs, true),
            SortKey::PostedOld => sort_by_posted_time(jobs, false),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort option {0:?}")]
pub struct InvalidSortOption(pub String);

impl FromStr for SortKey {
    type Err = InvalidSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| InvalidSortOption(s.to_string()))
    }
}

/// Stable sort by title using [`locale_compare`].
///
/// Descending flips the comparison, so equal titles keep their input order
/// either way.
pub fn sort_by_title(jobs: &mut [Job], ascending: bool) {
    jobs.sort_by(|a, b| {
        if ascending {
            locale_compare(a.title(), b.title())
        } else {
            locale_compare(b.title(), a.title())
        }
    });
}

/// Stable sort by minutes since posting.
///
/// `oldest_first` orders by ascending minute count. Jobs whose posted time
/// cannot be read go last in both directions.
pub fn sort_by_posted_time(jobs: &mut [Job], oldest_first: bool) {
    jobs.sort_by(|a, b| {
        a.posted_minutes()
            .sort_order(b.posted_minutes(), oldest_first)
    });
}

pub fn sorted_by_title(mut jobs: Vec<Job>, ascending: bool) -> Vec<Job> {
    sort_by_title(&mut jobs, ascending);
    jobs
}

pub fn sorted_by_posted_time(mut jobs: Vec<Job>, oldest_first: bool) -> Vec<Job> {
    sort_by_posted_time(&mut jobs, oldest_first);
    jobs
}

thread_local! {
    /// Root-locale collator; `None` only if the compiled collation data fails to load.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware comparison using root-locale collation: accents sort next to
/// their base letter and lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare(a, b),
    })
}

/// Case-folded code point order, used without collation data.
fn fold_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}
