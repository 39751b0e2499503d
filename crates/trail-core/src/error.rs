use thiserror::Error;

/// Failures that can surface from the few fallible entry points of the core.
///
/// Frame, input and physics operations never fail; only parsing host supplied
/// values (colors, tuning overrides) can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailError {
    #[error("invalid color {0:?}: expected #RRGGBB or #RGB")]
    InvalidColor(String),
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TrailError>;
