//! The result of analyzing one page's client-side needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dependency::ClientDependency;
use crate::page_file::PageFile;

/// What a page must ship to the browser.
///
/// Produced once per page per build pass, either by the configuration-driven
/// planner or by the legacy file-based analyzer. Equality is structural, so
/// two runs over identical inputs can be compared byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// True when the page needs no client-side JavaScript at all.
    pub is_html_only: bool,
    /// Client-side routing (true) or server-side routing (false).
    pub is_client_routing: bool,
    /// Entry modules that must execute in the browser, in load order.
    pub client_entries: Vec<String>,
    /// Ordered dependency list for the client build graph.
    pub client_dependencies: Vec<ClientDependency>,
    /// Diagnostic only: the client-side file partition. Empty on the
    /// configuration-driven path, which never recomputes it.
    pub page_files_client_side: Vec<PageFile>,
    /// Diagnostic only: the server-side file partition.
    pub page_files_server_side: Vec<PageFile>,
}

impl AnalysisResult {
    /// Ids of dependencies whose code executes on the client.
    pub fn executable_dependency_ids(&self) -> Vec<&str> {
        self.client_dependencies
            .iter()
            .filter(|dep| !dep.only_assets)
            .map(|dep| dep.id.as_str())
            .collect()
    }

    /// Ids of dependencies included for asset discovery only.
    pub fn assets_only_dependency_ids(&self) -> Vec<&str> {
        self.client_dependencies
            .iter()
            .filter(|dep| dep.only_assets)
            .map(|dep| dep.id.as_str())
            .collect()
    }

    /// Every client entry must appear among the executable dependencies.
    /// Checked by tests and debug assertions in the analyzers.
    pub fn entries_covered_by_dependencies(&self) -> bool {
        let executable = self.executable_dependency_ids();
        self.client_entries
            .iter()
            .all(|entry| executable.contains(&entry.as_str()))
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "page: {}, {} routing",
            if self.is_html_only {
                "HTML-only"
            } else {
                "hydrated"
            },
            if self.is_client_routing {
                "client"
            } else {
                "server"
            }
        )?;
        writeln!(f, "client entries: {}", self.client_entries.len())?;
        for entry in &self.client_entries {
            writeln!(f, "  - {entry}")?;
        }
        writeln!(f, "client dependencies: {}", self.client_dependencies.len())?;
        for dep in &self.client_dependencies {
            writeln!(
                f,
                "  - {}{}",
                dep.id,
                if dep.only_assets { " (assets only)" } else { "" }
            )?;
        }
        Ok(())
    }
}
