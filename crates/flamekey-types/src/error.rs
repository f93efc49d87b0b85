// ─────────────────────────────────────────────────────────────────────
// Flame Key — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for the fallible edges of the engine.
///
/// Seed generation, sigil construction, palette selection, resonance
/// classification and projection are total and never produce one of
/// these; only configuration, category names and path descriptions can.
#[derive(Error, Debug)]
pub enum FlameKeyError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (category name, parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// A vector-document path description could not be read back.
    #[error("path parse error: {0}")]
    PathParse(String),

    /// Numerical error (NaN/Inf in computation).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type FlameKeyResult<T> = Result<T, FlameKeyError>;
