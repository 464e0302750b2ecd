//! Routing mode classification.
//!
//! Decides, from a page's resolved configuration and file set, whether the
//! page needs the framework's client runtime at all and which routing mode
//! it uses. This is the single source of truth for "does this page ship any
//! client-side JavaScript"; the planner never second-guesses it.

use keel_config::{PageConfigRuntime, Result};
use keel_core::{PageFile, PageFileRole};

/// Outcome of routing classification for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingClassification {
    /// The framework's client runtime must be loaded for this page.
    pub client_entry_loaded: bool,
    /// Client-side routing (true) or server-side routing (false).
    pub is_client_routing: bool,
}

/// Classify a page's routing needs.
///
/// `is_client_routing` is the `"clientRouting"` boolean config value,
/// defaulting to false. The client runtime is loaded iff the page renders on
/// the client: an `"onRenderClient"` hook or a `"Page"` value whose
/// environment includes the client, or a client-only page file (legacy files
/// may coexist with structured config during migration).
///
/// The explicit `"client"` entry value is deliberately not consulted here:
/// declaring an extra entry script does not by itself make the framework
/// load its runtime.
pub fn classify_routing(
    page_config: &PageConfigRuntime,
    page_files_all: &[PageFile],
    page_id: &str,
) -> Result<RoutingClassification> {
    let is_client_routing = page_config.value_bool("clientRouting")?.unwrap_or(false);

    let renders_on_client = ["onRenderClient", "Page"]
        .into_iter()
        .any(|key| page_config.get(key).is_some_and(|value| value.env.client));
    let has_client_only_file = page_files_all
        .iter()
        .any(|file| file.applies_to(page_id) && file.role == PageFileRole::ClientOnly);

    Ok(RoutingClassification {
        client_entry_loaded: renders_on_client || has_client_only_file,
        is_client_routing,
    })
}
