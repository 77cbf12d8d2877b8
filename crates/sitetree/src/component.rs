//! Read-only child views over component nodes.
//!
//! Components own their children through the case-folded slug map; these
//! accessors slice that map by node kind. On a file node every view is
//! empty rather than an error, which keeps call sites free of kind checks.

use crate::node::{fold_slug, ComponentData, FileKind, NodeId};
use crate::site::Node;

impl<'a> Node<'a> {
    fn component(&self) -> Option<&'a ComponentData> {
        self.site.component_data_opt(self.id)
    }

    /// Direct children, files and subcomponents alike, in slug order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match self.component() {
            Some(comp) => comp
                .children
                .values()
                .map(|&id| self.site.node(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Direct file children.
    pub fn files(&self) -> Vec<Node<'a>> {
        self.children()
            .into_iter()
            .filter(|n| !n.is_component())
            .collect()
    }

    /// Direct file children destined for the render phase.
    pub fn renderable(&self) -> Vec<Node<'a>> {
        self.children()
            .into_iter()
            .filter(|n| n.file_kind().is_some_and(FileKind::renderable))
            .collect()
    }

    /// Direct file children that are copied through untouched.
    pub fn static_files(&self) -> Vec<Node<'a>> {
        self.children()
            .into_iter()
            .filter(|n| matches!(n.file_kind(), Some(FileKind::Static { .. })))
            .collect()
    }

    /// Direct subcomponent children.
    pub fn subcomponents(&self) -> Vec<Node<'a>> {
        self.children()
            .into_iter()
            .filter(Node::is_component)
            .collect()
    }

    /// The child serving as this component's index, if one was attached.
    pub fn index(&self) -> Option<Node<'a>> {
        self.component()
            .and_then(|comp| comp.index)
            .map(|id| self.site.node(id))
    }

    /// Look up a direct child by slug. Exact case wins trivially; a
    /// lookup differing only in case still resolves, matching the
    /// case-insensitive uniqueness rule.
    pub fn get(&self, slug: &str) -> Option<Node<'a>> {
        let comp = self.component()?;
        comp.children
            .get(&fold_slug(slug))
            .map(|&id| self.site.node(id))
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.component()
            .is_some_and(|comp| comp.children.values().any(|&child| child == id))
    }
}
