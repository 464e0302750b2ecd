//! Virtual module identifiers.
//!
//! The bundler resolves these ids through the framework instead of from
//! disk. The "page config values all" module for a page aggregates every
//! config value loadable in the given environment; the planner lists it for
//! every page so per-page assets declared in config stay discoverable.
//!
//! Ids are plain strings with a fixed shape:
//! `virtual:keel:page-config-values-all:<client|server>:<page-id>`. Page ids
//! are rooted POSIX paths and never contain `:`, so ids for distinct pages
//! or environments never collide, and parsing is the exact inverse of
//! derivation.

const PAGE_CONFIG_VALUES_ALL: &str = "virtual:keel:page-config-values-all:";

/// Id of the "all config values" virtual module for a page.
pub fn page_config_values_all(page_id: &str, for_client: bool) -> String {
    let env = if for_client { "client" } else { "server" };
    format!("{PAGE_CONFIG_VALUES_ALL}{env}:{page_id}")
}

/// Inverse of [`page_config_values_all`]: the page id and client flag, or
/// `None` when `id` is not a page-config-values virtual module.
pub fn parse_page_config_values_all(id: &str) -> Option<(&str, bool)> {
    let rest = id.strip_prefix(PAGE_CONFIG_VALUES_ALL)?;
    let (env, page_id) = rest.split_once(':')?;
    let for_client = match env {
        "client" => true,
        "server" => false,
        _ => return None,
    };
    Some((page_id, for_client))
}
