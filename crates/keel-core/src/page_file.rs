//! Page files and their roles.
//!
//! Before structured page configuration existed, a page was described by a
//! set of role-suffixed files: `index.page.js` (isomorphic),
//! `index.page.client.js` (client only), `index.page.server.js` (server
//! only), `index.page.route.js` (routing). Files named `_default.page.*`
//! apply to every page that has no page-specific counterpart.
//!
//! The analysis layer never reads these files from disk; it receives them
//! already scanned, with export names pre-extracted.

use serde::{Deserialize, Serialize};

/// Role of a page file, derived from its path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageFileRole {
    /// `*.page.js` - loaded on both the client and the server.
    Isomorphic,
    /// `*.page.client.js` - loaded on the client only.
    ClientOnly,
    /// `*.page.server.js` - loaded on the server only.
    ServerOnly,
    /// `*.page.route.js` - route definition, evaluated on the server.
    Route,
}

impl PageFileRole {
    /// True if files with this role are loaded in the browser.
    pub fn runs_on_client(&self) -> bool {
        matches!(self, PageFileRole::Isomorphic | PageFileRole::ClientOnly)
    }

    /// True if files with this role are loaded on the server.
    pub fn runs_on_server(&self) -> bool {
        matches!(
            self,
            PageFileRole::Isomorphic | PageFileRole::ServerOnly | PageFileRole::Route
        )
    }

    /// The path suffix that marks this role, without the file extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            PageFileRole::Isomorphic => ".page",
            PageFileRole::ClientOnly => ".page.client",
            PageFileRole::ServerOnly => ".page.server",
            PageFileRole::Route => ".page.route",
        }
    }
}

/// A file belonging to a page's build graph.
///
/// `page_id` is the path with the role suffix and extension stripped:
/// `/pages/about.page.client.ts` belongs to page `/pages/about`. Default
/// files (`_default.page.*`) keep their own derived id but apply to every
/// page, see [`PageFile::applies_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFile {
    /// Rooted, POSIX-style path, e.g. `/pages/about.page.client.ts`.
    pub path: String,
    /// Identifier of the page this file belongs to.
    pub page_id: String,
    pub role: PageFileRole,
    /// True for `_default.page.*` files shared across pages.
    pub is_default: bool,
    /// Statically extracted export names. Extraction happens upstream;
    /// the list arrives pre-computed and may be empty.
    pub export_names: Vec<String>,
}

impl PageFile {
    /// Classify a path by its role suffix and derive the page id.
    ///
    /// Returns `None` when the path carries no `.page.*` role suffix. The
    /// longest suffix wins: `a.page.client.js` is [`PageFileRole::ClientOnly`],
    /// not [`PageFileRole::Isomorphic`] with a `client.js` extension.
    ///
    /// # Example
    ///
    /// ```
    /// use keel_core::{PageFile, PageFileRole};
    ///
    /// let file = PageFile::from_path("/pages/about.page.client.ts").unwrap();
    /// assert_eq!(file.page_id, "/pages/about");
    /// assert_eq!(file.role, PageFileRole::ClientOnly);
    /// assert!(!file.is_default);
    /// ```
    pub fn from_path(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        let (base_len, role) = split_role_suffix(&path)?;
        let page_id = path[..base_len].to_string();
        let is_default = file_stem(&page_id).starts_with("_default");
        Some(Self {
            path,
            page_id,
            role,
            is_default,
            export_names: Vec::new(),
        })
    }

    /// Attach pre-extracted export names.
    pub fn with_export_names(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.export_names = names.into_iter().map(|n| n.into()).collect();
        self
    }

    /// Whether this file participates in the build of `page_id`.
    pub fn applies_to(&self, page_id: &str) -> bool {
        self.is_default || self.page_id == page_id
    }

    /// Whether this file declares the given export.
    pub fn exports(&self, name: &str) -> bool {
        self.export_names.iter().any(|n| n == name)
    }
}

/// Locate the `.page[.role].ext` suffix. Returns the length of the page-id
/// prefix and the role.
fn split_role_suffix(path: &str) -> Option<(usize, PageFileRole)> {
    const MARKER: &str = ".page.";
    let idx = path.rfind(MARKER)?;
    let rest = &path[idx + MARKER.len()..];
    let role = match rest.split('.').next() {
        Some("client") => PageFileRole::ClientOnly,
        Some("server") => PageFileRole::ServerOnly,
        Some("route") => PageFileRole::Route,
        // Anything else is the file extension of an isomorphic page file.
        _ => PageFileRole::Isomorphic,
    };
    Some((idx, role))
}

fn file_stem(page_id: &str) -> &str {
    match page_id.rfind('/') {
        Some(idx) => &page_id[idx + 1..],
        None => page_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_role_suffixes() {
        let cases = [
            ("/pages/index.page.js", PageFileRole::Isomorphic),
            ("/pages/index.page.client.js", PageFileRole::ClientOnly),
            ("/pages/index.page.server.ts", PageFileRole::ServerOnly),
            ("/pages/index.page.route.ts", PageFileRole::Route),
        ];
        for (path, role) in cases {
            let file = PageFile::from_path(path).unwrap();
            assert_eq!(file.role, role, "{path}");
            assert_eq!(file.page_id, "/pages/index", "{path}");
        }
    }

    #[test]
    fn longest_suffix_wins() {
        // ".page.client.js" must not parse as an isomorphic file with a
        // "client.js" extension.
        let file = PageFile::from_path("/pages/a.page.client.js").unwrap();
        assert_eq!(file.role, PageFileRole::ClientOnly);
    }

    #[test]
    fn detects_default_files() {
        let file = PageFile::from_path("/renderer/_default.page.client.js").unwrap();
        assert!(file.is_default);
        assert!(file.applies_to("/pages/index"));
        assert!(file.applies_to("/pages/about"));

        let specific = PageFile::from_path("/pages/about.page.js").unwrap();
        assert!(!specific.is_default);
        assert!(specific.applies_to("/pages/about"));
        assert!(!specific.applies_to("/pages/index"));
    }

    #[test]
    fn rejects_paths_without_role_suffix() {
        assert!(PageFile::from_path("/pages/style.css").is_none());
        assert!(PageFile::from_path("/pages/helper.ts").is_none());
    }

    #[test]
    fn export_lookup() {
        let file = PageFile::from_path("/pages/index.page.client.js")
            .unwrap()
            .with_export_names(["clientRouting", "render"]);
        assert!(file.exports("clientRouting"));
        assert!(!file.exports("prerender"));
    }
}
