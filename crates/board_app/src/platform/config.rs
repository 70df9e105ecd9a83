use std::path::PathBuf;

use anyhow::{anyhow, Result};
use board_core::FilterField;
use log::LevelFilter;

use super::args::{Args, LogTarget};

pub const LOG_LEVEL_ENV: &str = "JOB_BOARD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Once,
    Interactive,
}

/// Settings for one run, resolved from arguments and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: RunMode,
    pub file: Option<PathBuf>,
    pub filters: Vec<(FilterField, String)>,
    pub sort: Option<String>,
    pub details: Vec<String>,
    pub show_options: bool,
    pub log_target: LogTarget,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env(args: Args) -> Result<Self> {
        Self::resolve(args, std::env::var(LOG_LEVEL_ENV).ok())
    }

    /// `--log-level` wins over the environment value; both default to info.
    pub fn resolve(args: Args, env_level: Option<String>) -> Result<Self> {
        let log_level = match args.log_level.or(env_level) {
            Some(name) => board_logging::parse_level(&name)
                .ok_or_else(|| anyhow!("unknown log level {name:?}"))?,
            None => LevelFilter::Info,
        };

        let filters = [
            (FilterField::Level, args.level),
            (FilterField::Type, args.job_type),
            (FilterField::Skill, args.skill),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect();

        Ok(Self {
            mode: if args.interactive {
                RunMode::Interactive
            } else {
                RunMode::Once
            },
            file: args.file,
            filters,
            sort: args.sort,
            details: args.details,
            show_options: args.options,
            log_target: args.log,
            log_level,
        })
    }
}
