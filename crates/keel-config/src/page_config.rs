//! Resolved per-page configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::value::{ConfigValue, ValueEnv, json_type_name};

/// Resolved configuration for one page.
///
/// Built once by the config loader, immutable afterwards. Values keep their
/// insertion order so that identical inputs always iterate identically;
/// the analysis layer relies on this for reproducible output.
///
/// # Example
///
/// ```
/// use keel_config::{PageConfigRuntime, ValueEnv};
/// use serde_json::json;
///
/// let config = PageConfigRuntime::builder("/pages/index")
///     .value("client", json!("./hydrate.ts"), ValueEnv::client_only())
///     .value("clientRouting", json!(true), ValueEnv::client_and_server())
///     .build();
///
/// assert_eq!(config.value_string("client").unwrap(), Some("./hydrate.ts"));
/// assert_eq!(config.value_bool("clientRouting").unwrap(), Some(true));
/// assert_eq!(config.value_bool("missing").unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfigRuntime {
    page_id: String,
    values: IndexMap<String, ConfigValue>,
}

impl PageConfigRuntime {
    pub fn builder(page_id: impl Into<String>) -> PageConfigBuilder {
        PageConfigBuilder {
            config: PageConfigRuntime {
                page_id: page_id.into(),
                values: IndexMap::new(),
            },
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Whether `key` is defined, regardless of its type.
    pub fn defines(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a string-typed value. Absence is valid; a value of another
    /// type is an error.
    pub fn value_string(&self, key: &str) -> Result<Option<&str>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(config_value) => match &config_value.value {
                Value::String(s) => Ok(Some(s.as_str())),
                other => Err(type_mismatch(key, "string", other)),
            },
        }
    }

    /// Look up a boolean-typed value. Absence is valid; a value of another
    /// type is an error.
    pub fn value_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(config_value) => match &config_value.value {
                Value::Bool(b) => Ok(Some(*b)),
                other => Err(type_mismatch(key, "boolean", other)),
            },
        }
    }
}

fn type_mismatch(key: &str, expected: &'static str, actual: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        actual: json_type_name(actual),
    }
}

/// Builder for [`PageConfigRuntime`]. The config loader is the only
/// production caller; tests use it to assemble fixtures.
#[derive(Debug)]
pub struct PageConfigBuilder {
    config: PageConfigRuntime,
}

impl PageConfigBuilder {
    /// Add a value. Re-adding a key replaces the earlier value in place,
    /// keeping its original position in the iteration order.
    pub fn value(mut self, key: impl Into<String>, value: Value, env: ValueEnv) -> Self {
        self.config
            .values
            .insert(key.into(), ConfigValue::new(value, env));
        self
    }

    /// Add a value together with the import path it was loaded from.
    pub fn value_from(
        mut self,
        key: impl Into<String>,
        value: Value,
        env: ValueEnv,
        source: impl Into<String>,
    ) -> Self {
        self.config
            .values
            .insert(key.into(), ConfigValue::new(value, env).with_source(source));
        self
    }

    pub fn build(self) -> PageConfigRuntime {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> PageConfigRuntime {
        PageConfigRuntime::builder("/pages/index")
            .value("client", json!("./hydrate.ts"), ValueEnv::client_only())
            .value("clientRouting", json!(true), ValueEnv::client_and_server())
            .value_from(
                "onRenderClient",
                json!(null),
                ValueEnv::client_only(),
                "/renderer/onRenderClient.ts",
            )
            .build()
    }

    #[test]
    fn typed_lookup_returns_values() {
        let config = config();
        assert_eq!(config.value_string("client").unwrap(), Some("./hydrate.ts"));
        assert_eq!(config.value_bool("clientRouting").unwrap(), Some(true));
    }

    #[test]
    fn absent_keys_are_valid() {
        let config = config();
        assert_eq!(config.value_string("ssr").unwrap(), None);
        assert_eq!(config.value_bool("prerender").unwrap(), None);
    }

    #[test]
    fn wrong_type_is_an_error_naming_the_key() {
        let config = config();
        let err = config.value_string("clientRouting").unwrap_err();
        assert_eq!(
            err,
            ConfigError::TypeMismatch {
                key: "clientRouting".into(),
                expected: "string",
                actual: "boolean",
            }
        );

        let err = config.value_bool("client").unwrap_err();
        assert!(err.to_string().contains("`client`"));
        assert!(err.to_string().contains("expected boolean"));
    }

    #[test]
    fn values_iterate_in_insertion_order() {
        let keys: Vec<_> = config().values().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["client", "clientRouting", "onRenderClient"]);
    }

    #[test]
    fn rebuilding_identical_config_compares_equal() {
        assert_eq!(config(), config());
    }
}
