use std::collections::BTreeMap;

use crate::uri::Uri;

/// Unique identifier for a node in the content tree.
///
/// Plain arena index. Handles are copyable and never dangle because nodes
/// are never removed from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A `NodeId` known to reference a component node.
///
/// Only `Site` mints these, so container operations can take a
/// `ComponentId` and never worry about being handed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) NodeId);

impl ComponentId {
    pub fn id(self) -> NodeId {
        self.0
    }
}

/// What kind of file a node carries, and therefore what it is capable of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// An opaque asset copied through as-is; identified by its source path.
    Static { source: Uri },
    /// Page content destined for rendering.
    Plain { content: String },
}

impl FileKind {
    /// Whether this file participates in the render phase.
    pub fn renderable(&self) -> bool {
        matches!(self, FileKind::Plain { .. })
    }

    /// Whether this file may serve as a directory index.
    pub fn indexable(&self) -> bool {
        matches!(self, FileKind::Plain { .. })
    }
}

/// Named children of a component, keyed by case-folded slug.
///
/// The fold enforces case-insensitive uniqueness; the child's exact slug
/// lives on its attach point.
#[derive(Debug, Default)]
pub(crate) struct ComponentData {
    pub(crate) name: String,
    pub(crate) children: BTreeMap<String, NodeId>,
    pub(crate) index: Option<NodeId>,
}

/// A node is either a leaf file or a component holding further nodes.
#[derive(Debug)]
pub(crate) enum NodeKind {
    File(FileKind),
    Component(ComponentData),
}

impl NodeKind {
    /// Components may hold an index child; files defer to their kind.
    pub(crate) fn indexable(&self) -> bool {
        match self {
            NodeKind::File(kind) => kind.indexable(),
            NodeKind::Component(_) => true,
        }
    }
}

/// Where a node hangs in the tree. Set exactly once, never changed.
#[derive(Debug, Clone)]
pub struct AttachPoint {
    pub slug: Uri,
    pub parent: ComponentId,
    pub is_index: bool,
}

/// Arena slot: the node's kind plus its attach point once it has one.
#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) attach: Option<AttachPoint>,
}

/// Case fold used for slug uniqueness inside a component.
pub(crate) fn fold_slug(slug: &str) -> String {
    slug.to_ascii_lowercase()
}

/// Component names must be identifier-like so they can double as
/// variable-safe keys in templates and config.
pub(crate) fn is_valid_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_capabilities() {
        let plain = FileKind::Plain {
            content: String::new(),
        };
        let fixed = FileKind::Static {
            source: Uri::parse("img/logo.png").unwrap(),
        };
        assert!(plain.renderable() && plain.indexable());
        assert!(!fixed.renderable() && !fixed.indexable());
    }

    #[test]
    fn test_component_name_validation() {
        assert!(is_valid_component_name("blog"));
        assert!(is_valid_component_name("_private"));
        assert!(is_valid_component_name("posts2"));
        assert!(!is_valid_component_name(""));
        assert!(!is_valid_component_name("2posts"));
        assert!(!is_valid_component_name("my-blog"));
        assert!(!is_valid_component_name("a b"));
    }
}
