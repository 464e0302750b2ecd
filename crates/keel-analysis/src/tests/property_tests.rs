//! Property-based tests for the planner using proptest.
//!
//! The planner's contract is mostly a set of invariants (determinism,
//! ordering, entry coverage), which makes it a natural fit for generated
//! inputs rather than hand-picked scenarios.
//!
//! Run with: cargo test --features proptest --package keel-analysis property_tests

#![cfg(feature = "proptest")]

use keel_config::{PageConfigRuntime, ValueEnv};
use keel_core::{BuildContext, PageFile};
use proptest::prelude::*;
use serde_json::json;

use crate::analyze_page;
use crate::client_entry::{CLIENT_ROUTING_ENTRY, SERVER_ROUTING_ENTRY};
use crate::legacy::analyze_page_files;
use crate::virtual_files::page_config_values_all;

/// Strategy for generating page ids.
fn page_id_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..=3).prop_map(|parts| format!("/pages/{}", parts.join("/")))
}

/// Strategy for generating resolved page configs: an optional explicit
/// client entry, an optional client-side render hook, and a routing flag.
fn page_config_strategy() -> impl Strategy<Value = PageConfigRuntime> {
    (
        page_id_strategy(),
        prop::option::of("[a-z]{1,10}"),
        prop::bool::ANY,
        prop::option::of(prop::bool::ANY),
    )
        .prop_map(|(page_id, client_entry, render_hook, client_routing)| {
            let mut builder = PageConfigRuntime::builder(&page_id);
            if let Some(name) = client_entry {
                builder = builder.value(
                    "client",
                    json!(format!("./{name}.ts")),
                    ValueEnv::client_only(),
                );
            }
            if render_hook {
                builder = builder.value_from(
                    "onRenderClient",
                    json!(null),
                    ValueEnv::client_only(),
                    "/renderer/onRenderClient.ts",
                );
            }
            if let Some(routing) = client_routing {
                builder = builder.value(
                    "clientRouting",
                    json!(routing),
                    ValueEnv::client_and_server(),
                );
            }
            builder.build()
        })
}

/// Strategy for generating legacy file sets with mixed roles and exports.
fn page_files_strategy() -> impl Strategy<Value = Vec<PageFile>> {
    prop::collection::vec(
        (
            page_id_strategy(),
            prop::sample::select(vec![".page.js", ".page.client.js", ".page.server.js", ".page.route.js"]),
            prop::bool::ANY,
        ),
        0..=8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(page_id, suffix, client_routing_export)| {
                let file = PageFile::from_path(format!("{page_id}{suffix}")).unwrap();
                if client_routing_export {
                    file.with_export_names(["clientRouting"])
                } else {
                    file
                }
            })
            .collect()
    })
}

fn build_strategy() -> impl Strategy<Value = BuildContext> {
    prop::bool::ANY.prop_map(|production| {
        if production {
            BuildContext::production()
        } else {
            BuildContext::development()
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: identical inputs yield identical results.
    #[test]
    fn prop_planner_is_deterministic(
        config in page_config_strategy(),
        build in build_strategy(),
    ) {
        let page_id = config.page_id().to_string();
        let first = analyze_page(&[], Some(&config), &page_id, &build).unwrap();
        let second = analyze_page(&[], Some(&config), &page_id, &build).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: the client virtual module is always listed, first among
    /// dependencies, and before any client entry.
    #[test]
    fn prop_virtual_module_precedes_entries(
        config in page_config_strategy(),
        build in build_strategy(),
    ) {
        let page_id = config.page_id().to_string();
        let result = analyze_page(&[], Some(&config), &page_id, &build).unwrap();

        let vmod = page_config_values_all(&page_id, true);
        let vmod_index = result
            .client_dependencies
            .iter()
            .position(|d| d.id == vmod);
        prop_assert_eq!(vmod_index, Some(0));

        for entry in &result.client_entries {
            let entry_index = result
                .client_dependencies
                .iter()
                .position(|d| &d.id == entry)
                .unwrap();
            prop_assert!(entry_index > 0);
        }
    }

    /// Property: every client entry appears among the executable
    /// dependencies, and the two routing runtimes never co-occur.
    #[test]
    fn prop_entries_covered_and_runtimes_exclusive(
        config in page_config_strategy(),
        build in build_strategy(),
    ) {
        let page_id = config.page_id().to_string();
        let result = analyze_page(&[], Some(&config), &page_id, &build).unwrap();

        prop_assert!(result.entries_covered_by_dependencies());

        let ids: Vec<_> = result.client_dependencies.iter().map(|d| d.id.as_str()).collect();
        prop_assert!(
            !(ids.contains(&CLIENT_ROUTING_ENTRY) && ids.contains(&SERVER_ROUTING_ENTRY))
        );
    }

    /// Property: a page with no render hook and no explicit entry is
    /// HTML-only with exactly one dependency in production and two in
    /// development.
    #[test]
    fn prop_html_only_dependency_count(
        page_id in page_id_strategy(),
        build in build_strategy(),
    ) {
        let config = PageConfigRuntime::builder(&page_id).build();
        let result = analyze_page(&[], Some(&config), &page_id, &build).unwrap();

        prop_assert!(result.is_html_only);
        prop_assert!(result.client_entries.is_empty());
        let expected = if build.is_production() { 1 } else { 2 };
        prop_assert_eq!(result.client_dependencies.len(), expected);
        prop_assert!(result.client_dependencies.iter().all(|d| d.only_assets));
    }

    /// Property: the legacy analyzer is deterministic and upholds the same
    /// result invariants as the planner.
    #[test]
    fn prop_legacy_invariants(
        files in page_files_strategy(),
        page_id in page_id_strategy(),
    ) {
        let first = analyze_page_files(&files, &page_id);
        let second = analyze_page_files(&files, &page_id);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.entries_covered_by_dependencies());
        if first.is_html_only {
            prop_assert!(first.client_entries.is_empty());
        }
    }
}
