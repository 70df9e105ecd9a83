use crate::{AppState, Effect, Msg, SortKey};

const INVALID_SORT_MESSAGE: &str = "Please select a valid sorting option";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::BatchLoaded(batch) => {
            state.load(batch);
            vec![Effect::RefreshFilterOptions]
        }
        Msg::LoadFailed(failure) => vec![Effect::Notify {
            message: failure.user_message().to_string(),
        }],
        Msg::FilterChanged { field, value } => {
            state.set_criterion(field, value);
            Vec::new()
        }
        Msg::SortApplied(option) => match option.parse::<SortKey>() {
            Ok(key) => {
                state.apply_sort(key);
                Vec::new()
            }
            Err(_) => vec![Effect::Notify {
                message: INVALID_SORT_MESSAGE.to_string(),
            }],
        },
        Msg::DetailsToggled { job_no } => {
            state.toggle_details(&job_no);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
