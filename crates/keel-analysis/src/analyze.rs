//! The page client-dependency planner.
//!
//! Given a page's resolved configuration (or, without one, its raw file
//! set), decide what must ship to the browser: whether the page needs any
//! client-side JavaScript, which routing mode it uses, and the ordered list
//! of client-loadable units the bundler must include in the client build
//! graph.
//!
//! The ordering of the dependency list is part of the contract: virtual
//! config modules always precede explicit and runtime entries, because
//! downstream tooling walks the list in order to decide what is eagerly
//! imported first. No deduplication is performed; if a user declares the
//! framework runtime as their own `client` entry, both occurrences are kept.

use keel_config::PageConfigRuntime;
use keel_core::{AnalysisResult, BuildContext, ClientDependency, PageFile};

use crate::client_entry::runtime_entry;
use crate::legacy::analyze_page_files;
use crate::routing::{RoutingClassification, classify_routing};
use crate::virtual_files::page_config_values_all;
use crate::{AnalysisError, Result};

/// Plan the client build graph for one page.
///
/// With a resolved configuration present, the configuration is the source of
/// truth and `page_files_all` is only consulted by routing classification.
/// Without one, the whole job is delegated to the legacy file-based analyzer
/// and its result returned verbatim.
///
/// Pure and synchronous: safe to call concurrently for many pages. Fails
/// fast on malformed configuration values, naming the offending page.
pub fn analyze_page(
    page_files_all: &[PageFile],
    page_config: Option<&PageConfigRuntime>,
    page_id: &str,
    build: &BuildContext,
) -> Result<AnalysisResult> {
    let Some(page_config) = page_config else {
        return Ok(analyze_page_files(page_files_all, page_id));
    };

    let RoutingClassification {
        client_entry_loaded,
        is_client_routing,
    } = classify_routing(page_config, page_files_all, page_id)
        .map_err(|source| AnalysisError::config(page_id, source))?;

    let mut client_entries: Vec<String> = Vec::new();
    let client_file_path = page_config
        .value_string("client")
        .map_err(|source| AnalysisError::config(page_id, source))?;
    if let Some(path) = client_file_path {
        client_entries.push(path.to_string());
    }
    if client_entry_loaded {
        client_entries.push(runtime_entry(is_client_routing).to_string());
    }

    let mut client_dependencies: Vec<ClientDependency> = Vec::new();
    // Always listed, even for HTML-only pages: assets declared in config
    // (e.g. per-page CSS) must be discoverable without any executed client
    // code.
    client_dependencies.push(ClientDependency {
        id: page_config_values_all(page_config.page_id(), true),
        only_assets: !client_entry_loaded,
        eagerly_imported: false,
    });
    // In production the client virtual module itself imports the server one
    // for asset extraction, so listing it here would duplicate that work.
    if !build.is_production() {
        client_dependencies.push(ClientDependency::assets_only(page_config_values_all(
            page_config.page_id(),
            false,
        )));
    }
    for client_entry in &client_entries {
        client_dependencies.push(ClientDependency::code(client_entry.clone()));
    }

    let result = AnalysisResult {
        is_html_only: !client_entry_loaded,
        is_client_routing,
        client_entries,
        client_dependencies,
        // Only used for debugging, and only recomputed on the legacy path.
        page_files_client_side: Vec::new(),
        page_files_server_side: Vec::new(),
    };
    debug_assert!(result.entries_covered_by_dependencies());

    tracing::debug!(
        page_id,
        is_html_only = result.is_html_only,
        is_client_routing = result.is_client_routing,
        dependencies = result.client_dependencies.len(),
        "planned client dependencies"
    );

    Ok(result)
}
