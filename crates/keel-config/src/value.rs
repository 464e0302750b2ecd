//! Config values and their environment metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which environments a config value is loaded in.
///
/// Mirrors the `env` metadata a config definition declares, e.g.
/// `env: { server: true, client: true }`. `eager` marks values whose import
/// must land in the initial request chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueEnv {
    #[serde(default)]
    pub server: bool,
    #[serde(default)]
    pub client: bool,
    #[serde(default)]
    pub eager: bool,
}

impl ValueEnv {
    pub fn server_only() -> Self {
        Self {
            server: true,
            ..Self::default()
        }
    }

    pub fn client_only() -> Self {
        Self {
            client: true,
            ..Self::default()
        }
    }

    pub fn client_and_server() -> Self {
        Self {
            server: true,
            client: true,
            ..Self::default()
        }
    }
}

/// One resolved config value: the JSON value itself, where it runs, and the
/// import path it was loaded from (when it came from a file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    pub value: Value,
    #[serde(default)]
    pub env: ValueEnv,
    /// Import path of the defining module, if any.
    #[serde(default)]
    pub source: Option<String>,
}

impl ConfigValue {
    pub fn new(value: Value, env: ValueEnv) -> Self {
        Self {
            value,
            env,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Human-readable JSON type name, used in type-mismatch errors.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
