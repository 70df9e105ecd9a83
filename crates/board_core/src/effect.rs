#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a message to the user.
    Notify { message: String },
    /// The batch changed; selectors must be rebuilt from the new filter options.
    RefreshFilterOptions,
}
