//! Error types for config value lookup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A config value exists but does not have the type the caller asked
    /// for. Configuration is validated upstream before analysis runs, so
    /// hitting this at analysis time aborts the page's build.
    #[error("config value `{key}` is of type {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}
