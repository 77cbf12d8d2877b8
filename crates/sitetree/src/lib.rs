//! Content-tree core for a static site builder.
//!
//! Everything a site is made of (pages, assets, the components grouping
//! them) lives in one arena owned by [`Site`], linked by copyable
//! [`NodeId`] handles. A node joins the tree by receiving an attach
//! point (slug, parent, index flag) exactly once; from then on its path
//! and uri derive from the ancestor chain. The [`TreeIndex`] mirrors the
//! directory shape for path lookups: exact [`TreeIndex::get`] with
//! directory-index fallback and shell-glob [`TreeIndex::glob`] with `**`.
//!
//! Assembly runs through `&mut` methods (usually via [`SiteBuilder`]);
//! afterwards both structures are read-only and safely shared across a
//! concurrent render phase.

mod builder;
mod component;
mod error;
mod glob;
mod index;
mod node;
mod site;
pub mod tree_format;
mod uri;

pub use builder::{SiteBuilder, DEFAULT_INDEX_BASENAME};
pub use error::{Error, Result};
pub use index::TreeIndex;
pub use node::{AttachPoint, ComponentId, FileKind, NodeId};
pub use site::{Node, Site};
pub use uri::{Uri, EXT_SEP, PATH_SEP};

#[cfg(test)]
mod tests;
