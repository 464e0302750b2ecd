//! # keel-config
//!
//! Resolved per-page configuration for the Keel analysis layer.
//!
//! A [`PageConfigRuntime`] is the output of the config loader (file
//! discovery and `+config` evaluation live upstream, not in this crate): an
//! immutable, insertion-ordered map of config key to [`ConfigValue`], where
//! each value carries the JSON value itself plus the environment metadata
//! (`server` / `client` / `eager`) its definition declared.
//!
//! Lookups are typed: asking for `"client"` as a string either returns the
//! string, reports absence, or fails with a [`ConfigError::TypeMismatch`]
//! naming the key. Nothing in this crate touches the filesystem.

pub mod error;
pub mod page_config;
pub mod value;

pub use error::{ConfigError, Result};
pub use page_config::{PageConfigBuilder, PageConfigRuntime};
pub use value::{ConfigValue, ValueEnv};
