//! # keel-core
//!
//! Shared data model for Keel's page analysis layer.
//!
//! This crate defines the types that cross crate boundaries in the Keel
//! workspace: page files and their roles, client dependencies, the analysis
//! result handed to the bundler, and the build context. It contains no I/O
//! and no analysis logic, and it depends on no other Keel crate.
//!
//! ## Overview
//!
//! A page's client build graph is described by an [`AnalysisResult`]: whether
//! the page ships any client-side JavaScript at all ([`AnalysisResult::is_html_only`]),
//! which routing mode it uses, and the ordered list of [`ClientDependency`]
//! values the bundler must include. [`PageFile`] models the legacy
//! role-suffixed file convention (`*.page.js`, `*.page.client.js`, ...);
//! [`BuildContext`] carries the build mode as an explicit input instead of
//! ambient global state.

pub mod build;
pub mod dependency;
pub mod page_file;
pub mod result;

pub use build::{BuildContext, BuildMode};
pub use dependency::ClientDependency;
pub use page_file::{PageFile, PageFileRole};
pub use result::AnalysisResult;
