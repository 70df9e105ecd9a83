//! Job board core: job records, filtering, sorting and the pure state machine.
mod effect;
mod filter;
mod job;
mod msg;
mod posted;
mod sort;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{filter_jobs, FilterCriteria, FilterField, UnknownFilterField};
pub use job::{Job, JobFields};
pub use msg::{LoadFailure, Msg};
pub use posted::{
    format_for_display, parse_to_minutes, PostedMinutes, MINUTES_PER_DAY, MINUTES_PER_HOUR,
};
pub use sort::{
    locale_compare, sort_by_posted_time, sort_by_title, sorted_by_posted_time, sorted_by_title,
    InvalidSortOption, SortKey,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, FilterOptions, JobCardView, JobDetailView};
