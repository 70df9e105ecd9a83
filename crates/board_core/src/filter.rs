use std::fmt;
use std::str::FromStr;

use crate::Job;

/// A job attribute that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Level,
    Type,
    Skill,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Level, FilterField::Type, FilterField::Skill];

    pub fn name(self) -> &'static str {
        match self {
            FilterField::Level => "level",
            FilterField::Type => "type",
            FilterField::Skill => "skill",
        }
    }

    pub fn value_of(self, job: &Job) -> &str {
        match self {
            FilterField::Level => job.level(),
            FilterField::Type => job.job_type(),
            FilterField::Skill => job.skill(),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter field {0:?} (expected level, type or skill)")]
pub struct UnknownFilterField(pub String);

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFilterField(s.to_string()))
    }
}

/// Selected filter values. `None` or an empty string matches every job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub skill: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one criterion. An empty value clears it.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let value = (!value.is_empty()).then_some(value);
        *self.slot_mut(field) = value;
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Active value for `field`, if any.
    pub fn get(&self, field: FilterField) -> Option<&str> {
        let slot = match field {
            FilterField::Level => &self.level,
            FilterField::Type => &self.job_type,
            FilterField::Skill => &self.skill,
        };
        slot.as_deref().filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Exact, case-sensitive match on every active criterion.
    pub fn matches(&self, job: &Job) -> bool {
        FilterField::ALL.iter().all(|field| match self.get(*field) {
            Some(expected) => field.value_of(job) == expected,
            None => true,
        })
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Level => &mut self.level,
            FilterField::Type => &mut self.job_type,
            FilterField::Skill => &mut self.skill,
        }
    }
}

/// Returns the jobs matching `criteria`, in input order.
pub fn filter_jobs(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    jobs.iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_clears_criterion() {
        let mut criteria = FilterCriteria::new().with(FilterField::Level, "Senior");
        assert_eq!(criteria.get(FilterField::Level), Some("Senior"));
        criteria.set(FilterField::Level, "");
        assert_eq!(criteria.get(FilterField::Level), None);
        assert!(criteria.is_empty());
    }

    #[test]
    fn explicit_empty_string_counts_as_absent() {
        let criteria = FilterCriteria {
            skill: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("Level".parse::<FilterField>(), Ok(FilterField::Level));
        assert_eq!(" type ".parse::<FilterField>(), Ok(FilterField::Type));
        assert!("salary".parse::<FilterField>().is_err());
    }
}
