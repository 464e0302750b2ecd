//! # keel-analysis
//!
//! Per-page client-dependency planning for the Keel build pipeline.
//!
//! For every page, the build pipeline needs to know what must ship to the
//! browser: nothing at all (HTML-only pages), or an ordered list of entry
//! scripts, virtual config modules, and asset-only imports. This crate
//! computes that list from the page's resolved configuration - or, for
//! pages that predate structured configuration, from their raw file set.
//!
//! ## Quick Start
//!
//! ```
//! use keel_analysis::analyze_page;
//! use keel_config::{PageConfigRuntime, ValueEnv};
//! use keel_core::BuildContext;
//! use serde_json::json;
//!
//! # fn main() -> keel_analysis::Result<()> {
//! let config = PageConfigRuntime::builder("/pages/index")
//!     .value_from(
//!         "onRenderClient",
//!         json!(null),
//!         ValueEnv::client_only(),
//!         "/renderer/onRenderClient.ts",
//!     )
//!     .build();
//!
//! let result = analyze_page(&[], Some(&config), "/pages/index", &BuildContext::production())?;
//! assert!(!result.is_html_only);
//! # Ok(())
//! # }
//! ```
//!
//! Everything here is pure and synchronous: no I/O, no shared state, safe
//! to run concurrently across pages.

pub mod analyze;
pub mod client_entry;
pub mod legacy;
pub mod routing;
pub mod virtual_files;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(test)]
mod tests;

pub use analyze::analyze_page;
pub use legacy::analyze_page_files;
pub use routing::{RoutingClassification, classify_routing};

/// Error types for page analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A config value of the page had an unexpected type. Fatal for the
    /// page's build; the page id points at the responsible configuration.
    #[error("analysis of page `{page_id}` failed: {source}")]
    Config {
        page_id: String,
        #[source]
        source: keel_config::ConfigError,
    },
}

impl AnalysisError {
    pub(crate) fn config(page_id: &str, source: keel_config::ConfigError) -> Self {
        Self::Config {
            page_id: page_id.to_string(),
            source,
        }
    }

    /// The page whose analysis failed.
    pub fn page_id(&self) -> &str {
        match self {
            Self::Config { page_id, .. } => page_id,
        }
    }
}

/// Result type alias for page analysis.
pub type Result<T> = std::result::Result<T, AnalysisError>;
