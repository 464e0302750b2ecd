//! Legacy file-based page analysis.
//!
//! Pages without structured configuration are described by role-suffixed
//! files alone (`*.page.js`, `*.page.client.js`, ...). This analyzer
//! produces the same result shape as the configuration-driven planner from
//! that flat file set, so callers never branch on which world a page lives
//! in.

use keel_core::{AnalysisResult, ClientDependency, PageFile, PageFileRole};

use crate::client_entry::runtime_entry;

/// Analyze a page from its raw file set.
///
/// Infallible: every decision is derived from file roles and pre-extracted
/// export names, neither of which can be malformed by this point.
pub fn analyze_page_files(page_files_all: &[PageFile], page_id: &str) -> AnalysisResult {
    let mut page_files_client_side: Vec<PageFile> = Vec::new();
    let mut page_files_server_side: Vec<PageFile> = Vec::new();
    for file in page_files_all.iter().filter(|f| f.applies_to(page_id)) {
        if file.role.runs_on_client() {
            page_files_client_side.push(file.clone());
        }
        if file.role.runs_on_server() {
            page_files_server_side.push(file.clone());
        }
    }
    // Page-specific files load before shared defaults. The sort is stable,
    // so within each group the caller's scan order is preserved.
    page_files_client_side.sort_by_key(|f| f.is_default);
    page_files_server_side.sort_by_key(|f| f.is_default);

    let is_client_routing = page_files_client_side
        .iter()
        .any(|f| f.exports("clientRouting"));
    // Isomorphic files alone do not force a client build; without a
    // client-only file the page renders to plain HTML.
    let is_html_only = !page_files_client_side
        .iter()
        .any(|f| f.role == PageFileRole::ClientOnly);

    let mut client_entries: Vec<String> = Vec::new();
    if !is_html_only {
        client_entries.extend(page_files_client_side.iter().map(|f| f.path.clone()));
        client_entries.push(runtime_entry(is_client_routing).to_string());
    }

    let mut client_dependencies: Vec<ClientDependency> = Vec::new();
    // Server-only code is still scanned for static asset references (CSS
    // imported from a server file must reach the browser).
    for file in page_files_server_side
        .iter()
        .filter(|f| !f.role.runs_on_client())
    {
        client_dependencies.push(ClientDependency::assets_only(file.path.clone()));
    }
    if is_html_only {
        for file in &page_files_client_side {
            client_dependencies.push(ClientDependency::assets_only(file.path.clone()));
        }
    } else {
        for client_entry in &client_entries {
            client_dependencies.push(ClientDependency::code(client_entry.clone()));
        }
    }

    let result = AnalysisResult {
        is_html_only,
        is_client_routing,
        client_entries,
        client_dependencies,
        page_files_client_side,
        page_files_server_side,
    };
    debug_assert!(result.entries_covered_by_dependencies());

    tracing::debug!(
        page_id,
        is_html_only = result.is_html_only,
        is_client_routing = result.is_client_routing,
        client_files = result.page_files_client_side.len(),
        server_files = result.page_files_server_side.len(),
        "analyzed page files (legacy)"
    );

    result
}
