use crate::{FilterField, Job};

/// Why a load did not produce a new batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The content was not a JSON array of objects.
    MalformedInput,
    /// No file was chosen.
    NoFileSelected,
    /// The chosen file could not be read.
    Unreadable,
}

impl LoadFailure {
    /// Text shown to the user.
    pub fn user_message(self) -> &'static str {
        match self {
            LoadFailure::MalformedInput => "Invalid JSON format",
            LoadFailure::NoFileSelected => "Please upload a JSON file",
            LoadFailure::Unreadable => "Could not read the selected file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A file was read and decoded into a new batch.
    BatchLoaded(Vec<Job>),
    /// A load attempt failed; the current batch stays.
    LoadFailed(LoadFailure),
    /// User picked a value in one of the filter selectors. Empty means "All".
    FilterChanged { field: FilterField, value: String },
    /// User applied a sort option by name.
    SortApplied(String),
    /// User clicked "View Details" on a card.
    DetailsToggled { job_no: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
