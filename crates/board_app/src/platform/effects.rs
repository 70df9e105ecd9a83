use std::io::{self, Write};

use board_core::{AppState, Effect, FilterOptions};
use board_logging::{board_info, board_warn};

use super::ui::render::render_options;

/// Carries out core effects against a text sink.
pub struct EffectRunner {
    show_options_on_refresh: bool,
}

impl EffectRunner {
    pub fn new(show_options_on_refresh: bool) -> Self {
        Self {
            show_options_on_refresh,
        }
    }

    pub fn run<W: Write>(
        &self,
        effects: Vec<Effect>,
        state: &AppState,
        out: &mut W,
    ) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::Notify { message } => {
                    board_warn!("Notice: {}", message);
                    writeln!(out, "! {message}")?;
                }
                Effect::RefreshFilterOptions => {
                    let options = FilterOptions::from_jobs(state.batch());
                    board_info!(
                        "Filter options: {} level(s), {} type(s), {} skill(s)",
                        options.levels.len(),
                        options.types.len(),
                        options.skills.len()
                    );
                    if self.show_options_on_refresh {
                        out.write_all(render_options(&options).as_bytes())?;
                    }
                }
            }
        }
        Ok(())
    }
}
