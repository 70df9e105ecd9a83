//! External JSON schema of one posting.

use board_core::{Job, JobFields};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of the input array, keyed the way job exports name their columns.
///
/// Every field accepts any JSON value: strings are kept verbatim, scalars are
/// converted to their JSON text, and `null` counts as missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job No", default, deserialize_with = "text")]
    pub job_no: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(rename = "Job Page Link", default, deserialize_with = "text")]
    pub link: Option<String>,
    #[serde(rename = "Posted", default, deserialize_with = "text")]
    pub posted: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "text")]
    pub job_type: Option<String>,
    #[serde(rename = "Level", default, deserialize_with = "text")]
    pub level: Option<String>,
    #[serde(rename = "Estimated Time", default, deserialize_with = "text")]
    pub estimated_time: Option<String>,
    #[serde(rename = "Skill", default, deserialize_with = "text")]
    pub skill: Option<String>,
    #[serde(rename = "Detail", default, deserialize_with = "text")]
    pub detail: Option<String>,
}

impl JobRecord {
    /// Names of the keys that were absent or `null`.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Job No", &self.job_no),
            ("Title", &self.title),
            ("Job Page Link", &self.link),
            ("Posted", &self.posted),
            ("Type", &self.job_type),
            ("Level", &self.level),
            ("Estimated Time", &self.estimated_time),
            ("Skill", &self.skill),
            ("Detail", &self.detail),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    /// Builds the job, defaulting missing fields to empty text.
    pub fn into_job(self) -> Job {
        Job::from_fields(JobFields {
            job_no: self.job_no.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            posted: self.posted.unwrap_or_default(),
            job_type: self.job_type.unwrap_or_default(),
            level: self.level.unwrap_or_default(),
            estimated_time: self.estimated_time.unwrap_or_default(),
            skill: self.skill.unwrap_or_default(),
            detail: self.detail.unwrap_or_default(),
        })
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
