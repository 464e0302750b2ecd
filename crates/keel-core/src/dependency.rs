//! Client dependencies: the units fed into the client build graph.

use serde::{Deserialize, Serialize};

/// A client-loadable unit the bundler must include in a page's client graph.
///
/// `id` names either a real file or a virtual module. An assets-only
/// dependency is included solely so the bundler can discover its static
/// asset references (CSS, images); its code never executes in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientDependency {
    pub id: String,
    /// Harvest statically discoverable assets only; do not execute.
    pub only_assets: bool,
    /// Include in the initial request chain rather than lazily.
    pub eagerly_imported: bool,
}

impl ClientDependency {
    /// A dependency whose code runs on the client.
    pub fn code(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            only_assets: false,
            eagerly_imported: false,
        }
    }

    /// A dependency included for asset discovery only.
    pub fn assets_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            only_assets: true,
            eagerly_imported: false,
        }
    }
}
