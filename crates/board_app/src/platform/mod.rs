//! Terminal front end: argument handling, logging and the dispatch loop.
mod app;
mod args;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
