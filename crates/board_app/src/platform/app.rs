use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use board_core::{update, AppState, AppViewModel, Effect, FilterField, LoadFailure, Msg};
use board_engine::load_batch;
use board_logging::{board_debug, board_info, board_warn};
use clap::Parser;

use super::args::Args;
use super::config::{AppConfig, RunMode};
use super::effects::EffectRunner;
use super::logging;
use super::ui::render::{render, render_options};

const HELP: &str = "\
Commands:
  load <path>            load a JSON file, replacing the current jobs
  level|type|skill [v]   filter on a value; no value means All
  sort <option>          titleAsc, titleDesc, postedNew or postedOld
  toggle <job no>        show or hide a job's details
  options                list filter values
  show                   print the current list
  help                   print this text
  quit                   leave
";

pub fn run_app() -> Result<ExitCode> {
    let config = AppConfig::from_env(Args::parse())?;
    logging::initialize(config.log_target, config.log_level);
    board_info!("Starting job-board in {:?} mode", config.mode);

    match config.mode {
        RunMode::Once => {
            let stdout = io::stdout();
            let stderr = io::stderr();
            run_once(&config, &mut stdout.lock(), &mut stderr.lock())
        }
        RunMode::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&config, stdin.lock(), &mut stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads, applies the configured selections, and renders once.
///
/// Exits with failure only when the load fails. Notices raised by the
/// selections are printed and the list is still rendered.
fn run_once<W: Write, E: Write>(
    config: &AppConfig,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    let runner = EffectRunner::new(false);
    let mut session = Session::new();

    let (loaded, failure) = session.load(config.file.as_deref());
    runner.run(loaded.effects, session.state(), err)?;
    if failure.is_some() {
        return Ok(ExitCode::FAILURE);
    }

    apply_selections(&mut session, config, &runner, err)?;

    if config.show_options {
        out.write_all(render_options(&session.state().view().filter_options).as_bytes())?;
        writeln!(out)?;
    }
    out.write_all(render(&session.state().view()).as_bytes())?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn run_interactive<R: BufRead, W: Write>(config: &AppConfig, input: R, out: &mut W) -> Result<()> {
    let runner = EffectRunner::new(true);
    let mut session = Session::new();

    if config.file.is_some() {
        let (loaded, failure) = session.load(config.file.as_deref());
        runner.run(loaded.effects, session.state(), out)?;
        if failure.is_none() {
            apply_selections(&mut session, config, &runner, out)?;
            out.write_all(render(&session.state().view()).as_bytes())?;
        }
    }
    writeln!(out, "Type help for commands.")?;

    for line in input.lines() {
        let line = line.context("failed to read command from stdin")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(out, "! {error}")?;
                continue;
            }
        };

        let dispatched = match command {
            Command::Quit => break,
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
                continue;
            }
            Command::Show => {
                out.write_all(render(&session.state().view()).as_bytes())?;
                continue;
            }
            Command::Options => {
                out.write_all(render_options(&session.state().view().filter_options).as_bytes())?;
                continue;
            }
            Command::Load(path) => session.load(path.as_deref()).0,
            Command::Send(msg) => session.dispatch(msg),
        };

        runner.run(dispatched.effects, session.state(), out)?;
        if let Some(view) = dispatched.view {
            out.write_all(render(&view).as_bytes())?;
        }
        out.flush()?;
    }

    board_info!("Interactive session ended");
    Ok(())
}

/// Dispatches the configured filters, sort and detail toggles in that order.
fn apply_selections<W: Write>(
    session: &mut Session,
    config: &AppConfig,
    runner: &EffectRunner,
    out: &mut W,
) -> Result<()> {
    let mut msgs: Vec<Msg> = config
        .filters
        .iter()
        .map(|(field, value)| Msg::FilterChanged {
            field: *field,
            value: value.clone(),
        })
        .collect();
    msgs.extend(config.sort.iter().cloned().map(Msg::SortApplied));
    msgs.extend(config.details.iter().map(|job_no| Msg::DetailsToggled {
        job_no: job_no.clone(),
    }));

    for msg in msgs {
        let dispatched = session.dispatch(msg);
        runner.run(dispatched.effects, session.state(), out)?;
    }
    Ok(())
}

/// Result of feeding one message through `update`.
struct Dispatched {
    effects: Vec<Effect>,
    /// Present when the state changed and the list must be redrawn.
    view: Option<AppViewModel>,
}

/// Single owner of the core state for the lifetime of the front end.
#[derive(Default)]
struct Session {
    state: AppState,
}

impl Session {
    fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> &AppState {
        &self.state
    }

    fn load(&mut self, path: Option<&Path>) -> (Dispatched, Option<LoadFailure>) {
        match load_batch(path) {
            Ok(batch) => {
                board_info!("Loaded {} job(s) from {:?}", batch.len(), path);
                (self.dispatch(Msg::BatchLoaded(batch)), None)
            }
            Err(error) => {
                board_warn!("Load failed: {}", error);
                let failure = error.failure();
                (self.dispatch(Msg::LoadFailed(failure)), Some(failure))
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Dispatched {
        board_debug!("Dispatching {}", msg_label(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        Dispatched { effects, view }
    }
}

fn msg_label(msg: &Msg) -> String {
    match msg {
        Msg::BatchLoaded(batch) => format!("BatchLoaded({} jobs)", batch.len()),
        other => format!("{other:?}"),
    }
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Load(Option<PathBuf>),
    Send(Msg),
    Options,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Blank lines parse to `None`.
    fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "load" => Command::Load((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "level" | "type" | "skill" => {
                let field: FilterField = word.parse()?;
                Command::Send(Msg::FilterChanged {
                    field,
                    value: rest.to_string(),
                })
            }
            "sort" => Command::Send(Msg::SortApplied(rest.to_string())),
            "toggle" | "details" => {
                if rest.is_empty() {
                    bail!("{word} needs a job number");
                }
                Command::Send(Msg::DetailsToggled {
                    job_no: rest.to_string(),
                })
            }
            "options" => Command::Options,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(anyhow!("unknown command {word:?}; type help")),
        };
        Ok(Some(command))
    }
}
