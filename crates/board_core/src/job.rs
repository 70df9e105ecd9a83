use crate::posted::{format_for_display, parse_to_minutes, PostedMinutes};

/// The nine named fields of a posting, as handed over by a loader.
///
/// Contents are free text. Nothing is normalized or validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFields {
    pub job_no: String,
    pub title: String,
    pub link: String,
    pub posted: String,
    pub job_type: String,
    pub level: String,
    pub estimated_time: String,
    pub skill: String,
    pub detail: String,
}

/// One job posting. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    fields: JobFields,
}

impl Job {
    /// Builds a job holding every field verbatim. Never fails.
    pub fn from_fields(fields: JobFields) -> Self {
        Self { fields }
    }

    /// Job number. Assumed unique within a batch, not enforced.
    pub fn job_no(&self) -> &str {
        &self.fields.job_no
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn link(&self) -> &str {
        &self.fields.link
    }

    /// Raw posted text, e.g. `"3 hours"`.
    pub fn posted(&self) -> &str {
        &self.fields.posted
    }

    pub fn job_type(&self) -> &str {
        &self.fields.job_type
    }

    pub fn level(&self) -> &str {
        &self.fields.level
    }

    pub fn estimated_time(&self) -> &str {
        &self.fields.estimated_time
    }

    pub fn skill(&self) -> &str {
        &self.fields.skill
    }

    pub fn detail(&self) -> &str {
        &self.fields.detail
    }

    /// Minutes elapsed since posting, derived from [`Job::posted`].
    pub fn posted_minutes(&self) -> PostedMinutes {
        parse_to_minutes(&self.fields.posted)
    }

    /// Posted text with the unit pluralized for display.
    pub fn formatted_posted_time(&self) -> String {
        format_for_display(&self.fields.posted)
    }
}
