//! Bridges an external directory walker to the content tree.
//!
//! The builder takes relative source paths plus a [`FileKind`] and grows
//! both structures in one pass: a component per directory segment, the
//! file attached at its final slug, and a matching tree-index entry. It
//! never touches the filesystem itself.

use std::collections::HashMap;

use diagnostics::log_debug;

use crate::error::{Error, Result};
use crate::index::TreeIndex;
use crate::node::{ComponentId, FileKind, NodeId};
use crate::site::Site;
use crate::uri::Uri;

/// Files with this basename (and an indexable kind) become the index of
/// the directory they sit in.
pub const DEFAULT_INDEX_BASENAME: &str = "index";

pub struct SiteBuilder {
    site: Site,
    tree: TreeIndex,
    /// Directory path -> component already created for it.
    components: HashMap<String, ComponentId>,
    index_basename: String,
}

impl SiteBuilder {
    pub fn new(root_component_name: &str) -> Result<SiteBuilder> {
        diagnostics::init_diagnostics();
        Ok(SiteBuilder {
            site: Site::new(root_component_name)?,
            tree: TreeIndex::new(),
            components: HashMap::new(),
            index_basename: DEFAULT_INDEX_BASENAME.to_string(),
        })
    }

    /// Override which basename marks a directory index.
    pub fn with_index_basename(mut self, basename: &str) -> SiteBuilder {
        self.index_basename = basename.to_string();
        self
    }

    /// Register one source file at its relative path.
    ///
    /// Intermediate components are created on demand. Returns the id of
    /// the new file node.
    pub fn add_source(&mut self, rel_path: &str, kind: FileKind) -> Result<NodeId> {
        let path = Uri::parse(rel_path)?;
        path.require_relative()?;
        if path.is_empty() {
            return Err(Error::invalid_uri("source path must not be empty"));
        }

        let parent = self.component_for(&path.dirname())?;
        let slug = path.filename().to_string();
        let as_index = kind.indexable() && path.basename() == self.index_basename;

        // Reject a duplicate before minting the node so a failed call
        // leaves no orphan behind.
        if self.site.node(parent.id()).contains_slug(&slug) {
            let component_name = self.site.component_data(parent).name.clone();
            return Err(Error::duplicate_slug(&slug, component_name));
        }

        let file = self.site.add_file(kind);
        if as_index {
            self.site.add_index(parent, &slug, file)?;
        } else {
            self.site.add(parent, &slug, file)?;
        }
        self.tree.add(&self.site, file, as_index)?;

        log_debug!(
            "registered source {path} (index: {is_index})",
            path: rel_path,
            is_index: as_index
        );
        Ok(file)
    }

    /// The populated structures, ready for the read phase.
    pub fn finish(self) -> (Site, TreeIndex) {
        (self.site, self.tree)
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn tree_index(&self) -> &TreeIndex {
        &self.tree
    }

    /// Find or create the component for a directory path, creating the
    /// whole chain above it as needed.
    fn component_for(&mut self, dir: &Uri) -> Result<ComponentId> {
        let mut current = self.site.root_id();
        for depth in 0..dir.len() {
            let seg = &dir[depth];
            let key = dir.slice(0..depth + 1).to_string();
            if let Some(&existing) = self.components.get(&key) {
                current = existing;
                continue;
            }
            // A case-variant of an existing child would fail the attach;
            // catch it before minting the component node.
            if self.site.node(current.id()).contains_slug(seg) {
                let component_name = self.site.component_data(current).name.clone();
                return Err(Error::duplicate_slug(seg, component_name));
            }
            let sub = self.site.add_component(&sanitize_component_name(seg))?;
            self.site.attach_component(current, seg, sub)?;
            self.components.insert(key, sub);
            current = sub;
        }
        Ok(current)
    }
}

/// Turn an arbitrary path segment into an identifier-like component name.
fn sanitize_component_name(seg: &str) -> String {
    let mut name: String = seg
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_component_name() {
        assert_eq!(sanitize_component_name("blog"), "blog");
        assert_eq!(sanitize_component_name("my-posts"), "my_posts");
        assert_eq!(sanitize_component_name("2024"), "_2024");
        assert_eq!(sanitize_component_name("a.b"), "a_b");
    }
}
