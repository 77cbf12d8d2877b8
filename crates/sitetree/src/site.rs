use diagnostics::log_debug;

use crate::error::{Error, Result};
use crate::node::{
    fold_slug, is_valid_component_name, AttachPoint, ComponentData, ComponentId, FileKind,
    NodeData, NodeId, NodeKind,
};
use crate::uri::Uri;

/// Owns every node in the content tree.
///
/// Nodes live in a single arena and refer to each other by `NodeId`.
/// Construction goes through `&mut self` methods; once built, the tree is
/// read through copyable `Node` handles and shares freely across threads.
#[derive(Debug)]
pub struct Site {
    nodes: Vec<NodeData>,
    root: ComponentId,
}

/// Read handle for one node: an id plus the arena it lives in.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    pub(crate) id: NodeId,
    pub(crate) site: &'a Site,
}

impl Site {
    /// Create a site whose root is a component with the given name.
    pub fn new(root_name: &str) -> Result<Site> {
        if !is_valid_component_name(root_name) {
            return Err(Error::malformed_name(root_name));
        }
        let root_data = NodeData {
            kind: NodeKind::Component(ComponentData {
                name: root_name.to_string(),
                ..ComponentData::default()
            }),
            attach: None,
        };
        Ok(Site {
            nodes: vec![root_data],
            root: ComponentId(NodeId(0)),
        })
    }

    pub fn root_id(&self) -> ComponentId {
        self.root
    }

    pub fn root(&self) -> Node<'_> {
        self.node(self.root.id())
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { id, site: self }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create an orphan file node. It joins the tree once attached.
    pub fn add_file(&mut self, kind: FileKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind: NodeKind::File(kind),
            attach: None,
        });
        id
    }

    /// Create an orphan component node.
    pub fn add_component(&mut self, name: &str) -> Result<ComponentId> {
        if !is_valid_component_name(name) {
            return Err(Error::malformed_name(name));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind: NodeKind::Component(ComponentData {
                name: name.to_string(),
                ..ComponentData::default()
            }),
            attach: None,
        });
        Ok(ComponentId(id))
    }

    /// Record where a node hangs in the tree. One-shot: a node that
    /// already has an attach point stays exactly as it is and the call
    /// fails with `NotAnOrphan`.
    pub fn set_attach_point(
        &mut self,
        node: NodeId,
        slug: Uri,
        parent: ComponentId,
        is_index: bool,
    ) -> Result<()> {
        if self.data(node).attach.is_some() {
            return Err(Error::not_an_orphan(self.label(node)));
        }
        slug.require_relative()?;
        if slug.is_empty() {
            return Err(Error::invalid_uri("slug must not be empty"));
        }
        if is_index && !self.data(node).kind.indexable() {
            return Err(Error::not_indexable(self.label(node)));
        }
        self.data_mut(node).attach = Some(AttachPoint {
            slug,
            parent,
            is_index,
        });
        Ok(())
    }

    /// Attach a file under a component.
    pub fn add(&mut self, component: ComponentId, slug: &str, file: NodeId) -> Result<()> {
        self.attach_child(component, slug, file, false)
    }

    /// Attach a file under a component as the component's index.
    pub fn add_index(&mut self, component: ComponentId, slug: &str, file: NodeId) -> Result<()> {
        self.attach_child(component, slug, file, true)
    }

    /// Attach a subcomponent under a component. Same uniqueness contract
    /// as `add`: the slug namespace spans files and subcomponents.
    pub fn attach_component(
        &mut self,
        component: ComponentId,
        slug: &str,
        sub: ComponentId,
    ) -> Result<()> {
        self.attach_child(component, slug, sub.id(), false)
    }

    /// All checks run before any state changes, so a failed call leaves
    /// both the component and the child untouched.
    fn attach_child(
        &mut self,
        parent: ComponentId,
        slug: &str,
        child: NodeId,
        as_index: bool,
    ) -> Result<()> {
        let slug = Uri::parse(slug)?;
        slug.require_relative()?;
        if slug.is_empty() {
            return Err(Error::invalid_uri("slug must not be empty"));
        }

        let folded = fold_slug(&slug.to_string());
        let comp = self.component_data(parent);
        if comp.children.contains_key(&folded) {
            return Err(Error::duplicate_slug(slug.to_string(), &comp.name));
        }
        if as_index && comp.index.is_some() {
            return Err(Error::duplicate_index(&comp.name));
        }

        self.set_attach_point(child, slug.clone(), parent, as_index)?;

        let component_name = self.component_data(parent).name.clone();
        let slug_text = slug.to_string();
        let comp = self.component_data_mut(parent);
        comp.children.insert(folded, child);
        if as_index {
            comp.index = Some(child);
        }
        log_debug!(
            "attached {slug} under {component} (index: {is_index})",
            slug: slug_text,
            component: component_name,
            is_index: as_index
        );
        Ok(())
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    pub(crate) fn component_data_opt(&self, id: NodeId) -> Option<&ComponentData> {
        match &self.data(id).kind {
            NodeKind::Component(data) => Some(data),
            NodeKind::File(_) => None,
        }
    }

    pub(crate) fn component_data(&self, id: ComponentId) -> &ComponentData {
        match &self.data(id.id()).kind {
            NodeKind::Component(data) => data,
            NodeKind::File(_) => unreachable!("component ids always reference component nodes"),
        }
    }

    fn component_data_mut(&mut self, id: ComponentId) -> &mut ComponentData {
        match &mut self.data_mut(id.id()).kind {
            NodeKind::Component(data) => data,
            NodeKind::File(_) => unreachable!("component ids always reference component nodes"),
        }
    }

    /// A human-readable name for error messages.
    fn label(&self, id: NodeId) -> String {
        let data = self.data(id);
        match (&data.kind, &data.attach) {
            (NodeKind::Component(comp), _) => comp.name.clone(),
            (NodeKind::File(FileKind::Static { source }), _) => source.to_string(),
            (NodeKind::File(_), Some(attach)) => attach.slug.to_string(),
            (NodeKind::File(_), None) => format!("node {}", id.0),
        }
    }
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == self.site.root.id()
    }

    pub fn is_component(&self) -> bool {
        matches!(self.site.data(self.id).kind, NodeKind::Component(_))
    }

    /// The file kind, or None for components.
    pub fn file_kind(&self) -> Option<&'a FileKind> {
        match &self.site.data(self.id).kind {
            NodeKind::File(kind) => Some(kind),
            NodeKind::Component(_) => None,
        }
    }

    /// The component name, or None for files.
    pub fn name(&self) -> Option<&'a str> {
        match &self.site.data(self.id).kind {
            NodeKind::Component(comp) => Some(&comp.name),
            NodeKind::File(_) => None,
        }
    }

    pub(crate) fn attach(&self) -> Option<&'a AttachPoint> {
        self.site.data(self.id).attach.as_ref()
    }

    pub(crate) fn is_indexable(&self) -> bool {
        self.site.data(self.id).kind.indexable()
    }

    /// The slug this node was attached under; empty for orphans and root.
    pub fn slug(&self) -> Uri {
        self.attach().map(|a| a.slug.clone()).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.attach().map(|a| self.site.node(a.parent.id()))
    }

    pub fn is_index(&self) -> bool {
        self.attach().is_some_and(|a| a.is_index)
    }

    /// Final slug segment; empty for orphans and root.
    pub fn filename(&self) -> String {
        self.slug().filename().to_string()
    }

    pub fn basename(&self) -> String {
        self.slug().basename().to_string()
    }

    pub fn ext(&self) -> String {
        self.slug().ext().to_string()
    }

    pub fn exts(&self) -> Vec<String> {
        self.slug().exts().iter().map(|e| e.to_string()).collect()
    }

    /// The chain of nodes from the root of this node's attachment down to
    /// the node itself. An orphan is its own single-element chain.
    pub fn parts(&self) -> Vec<Node<'a>> {
        let mut chain = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// Root-relative path: the ancestor slugs joined in order. The root's
    /// own (empty) slug contributes nothing, so `path(root)` is empty.
    pub fn path(&self) -> Uri {
        let mut path = Uri::default();
        for part in self.parts() {
            path = path.join(&part.slug());
        }
        path
    }

    /// The node's public address. Index nodes are addressed by the
    /// directory they index, so they report their parent's uri.
    pub fn uri(&self) -> Uri {
        match (self.is_index(), self.parent()) {
            (true, Some(parent)) => parent.uri(),
            _ => self.path(),
        }
    }

    /// Directory portion of this node's path.
    pub fn dirname(&self) -> Uri {
        self.path().dirname()
    }
}
