use std::collections::HashSet;

use crate::{FilterCriteria, FilterField, Job, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Size of the whole batch, not of the visible list.
    pub job_count: usize,
    pub cards: Vec<JobCardView>,
    pub filter_options: FilterOptions,
    pub criteria: FilterCriteria,
    pub sort: Option<SortKey>,
    pub dirty: bool,
}

/// One entry in the job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_no: String,
    pub title: String,
    /// Raw posted text, as loaded.
    pub posted: String,
    pub job_type: String,
    pub level: String,
    pub expanded: bool,
    pub detail: JobDetailView,
}

impl JobCardView {
    pub fn from_job(job: &Job, expanded: bool) -> Self {
        Self {
            job_no: job.job_no().to_string(),
            title: job.title().to_string(),
            posted: job.posted().to_string(),
            job_type: job.job_type().to_string(),
            level: job.level().to_string(),
            expanded,
            detail: JobDetailView::from_job(job),
        }
    }
}

/// Expanded details for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub title: String,
    /// Posted text with the unit pluralized.
    pub posted: String,
    pub job_type: String,
    pub level: String,
    pub estimated_time: String,
    pub skill: String,
    pub detail: String,
    pub link: String,
}

impl JobDetailView {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title().to_string(),
            posted: job.formatted_posted_time(),
            job_type: job.job_type().to_string(),
            level: job.level().to_string(),
            estimated_time: job.estimated_time().to_string(),
            skill: job.skill().to_string(),
            detail: job.detail().to_string(),
            link: job.link().to_string(),
        }
    }
}

/// Distinct values per filterable field, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        Self {
            levels: distinct(jobs, FilterField::Level),
            types: distinct(jobs, FilterField::Type),
            skills: distinct(jobs, FilterField::Skill),
        }
    }

    pub fn for_field(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Level => &self.levels,
            FilterField::Type => &self.types,
            FilterField::Skill => &self.skills,
        }
    }
}

fn distinct(jobs: &[Job], field: FilterField) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(|job| field.value_of(job))
        .filter(|value| seen.insert(*value))
        .map(ToOwned::to_owned)
        .collect()
}
