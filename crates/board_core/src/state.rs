use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, FilterOptions, JobCardView};
use crate::{filter_jobs, FilterCriteria, FilterField, Job, SortKey};

/// Owner of the current batch and of the user's view selections.
///
/// The batch only changes through [`AppState::load`], which replaces it whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    batch: Vec<Job>,
    criteria: FilterCriteria,
    sort: Option<SortKey>,
    expanded: BTreeSet<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the batch and resets filters, sort and expanded details.
    pub fn load(&mut self, batch: Vec<Job>) {
        self.batch = batch;
        self.criteria = FilterCriteria::default();
        self.sort = None;
        self.expanded.clear();
        self.mark_dirty();
    }

    pub fn batch(&self) -> &[Job] {
        &self.batch
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Jobs as currently displayed: filtered, then sorted if a sort was applied.
    pub fn visible_jobs(&self) -> Vec<Job> {
        let mut jobs = filter_jobs(&self.batch, &self.criteria);
        if let Some(key) = self.sort {
            key.apply(&mut jobs);
        }
        jobs
    }

    pub fn view(&self) -> AppViewModel {
        let cards = self
            .visible_jobs()
            .iter()
            .map(|job| JobCardView::from_job(job, self.expanded.contains(job.job_no())))
            .collect();
        AppViewModel {
            job_count: self.batch.len(),
            cards,
            filter_options: FilterOptions::from_jobs(&self.batch),
            criteria: self.criteria.clone(),
            sort: self.sort,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Changing a filter re-displays the filtered batch in batch order.
    pub(crate) fn set_criterion(&mut self, field: FilterField, value: String) {
        self.criteria.set(field, value);
        self.sort = None;
        self.expanded.clear();
        self.mark_dirty();
    }

    pub(crate) fn apply_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
        self.expanded.clear();
        self.mark_dirty();
    }

    /// Flips detail visibility for visible cards carrying `job_no`.
    ///
    /// Returns `false` when no visible card has that number.
    pub(crate) fn toggle_details(&mut self, job_no: &str) -> bool {
        let visible = filter_jobs(&self.batch, &self.criteria)
            .iter()
            .any(|job| job.job_no() == job_no);
        if !visible {
            return false;
        }
        if !self.expanded.remove(job_no) {
            self.expanded.insert(job_no.to_string());
        }
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
