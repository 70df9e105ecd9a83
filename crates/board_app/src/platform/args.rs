//! CLI argument parsing for job-board.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "job-board",
    version,
    about = "Browse, filter and sort job postings from a JSON file"
)]
pub struct Args {
    /// JSON file holding an array of job postings.
    pub file: Option<PathBuf>,

    /// Only show jobs with exactly this level.
    #[arg(long)]
    pub level: Option<String>,

    /// Only show jobs with exactly this type.
    #[arg(long = "type", value_name = "TYPE")]
    pub job_type: Option<String>,

    /// Only show jobs requiring exactly this skill.
    #[arg(long)]
    pub skill: Option<String>,

    /// Sort option: titleAsc, titleDesc, postedNew or postedOld.
    #[arg(long)]
    pub sort: Option<String>,

    /// Expand the details of the job with this number. Repeatable.
    #[arg(long = "details", value_name = "JOB_NO")]
    pub details: Vec<String>,

    /// Print the distinct level, type and skill values of the loaded batch.
    #[arg(long)]
    pub options: bool,

    /// Read commands from stdin instead of rendering once.
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Off)]
    pub log: LogTarget,

    /// Log level (error, warn, info, debug, trace). Falls back to JOB_BOARD_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_flags() {
        let args = Args::try_parse_from([
            "job-board",
            "jobs.json",
            "--level",
            "Senior",
            "--type",
            "Full-time",
            "--sort",
            "postedNew",
            "--details",
            "3",
            "--details",
            "7",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("jobs.json")));
        assert_eq!(args.level.as_deref(), Some("Senior"));
        assert_eq!(args.job_type.as_deref(), Some("Full-time"));
        assert_eq!(args.skill, None);
        assert_eq!(args.sort.as_deref(), Some("postedNew"));
        assert_eq!(args.details, vec!["3".to_string(), "7".to_string()]);
        assert_eq!(args.log, LogTarget::Off);
        assert!(!args.interactive);
    }

    #[test]
    fn file_is_optional() {
        let args = Args::try_parse_from(["job-board", "-i", "--log", "both"]).unwrap();
        assert_eq!(args.file, None);
        assert!(args.interactive);
        assert_eq!(args.log, LogTarget::Both);
    }

    #[test]
    fn rejects_unknown_log_target() {
        assert!(Args::try_parse_from(["job-board", "--log", "syslog"]).is_err());
    }
}
