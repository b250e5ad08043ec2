//! Shape tree data model for button state sheets.
//!
//! The tree is externally owned in spirit: hosts hand a mutable handle to
//! each authoring operation, and operations only look up by identifier and
//! append. Storage is a petgraph `StableDiGraph` where nodes are elements
//! (root, groups, rectangles) and edges are parent→child containment, with
//! an id→index map for O(1) identifier lookup.

use crate::id::ElementId;
use crate::transform::Transform;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Colors ──────────────────────────────────────────────────────────────

/// Opaque RGB color, stored as 3 × u8. Fills in a state sheet are flat —
/// there is no alpha, gradient, or stroke anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fill of every frame rectangle.
pub const FRAME_FILL: Color = Color::rgb(0xFF, 0x00, 0x00);

/// Fill of every interior rectangle, distinct from the frame's.
pub const INTERIOR_FILL: Color = Color::rgb(0x00, 0xFF, 0x00);

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string: `#RGB` or `#RRGGBB`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// The element kinds in a state sheet tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Root of the document.
    Root,

    /// Group — contains children, usually one button piece per group.
    Group,

    /// Axis-aligned rectangle at an absolute position.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl ShapeKind {
    /// Prefix used for anonymous ids of this kind.
    fn id_prefix(&self) -> &'static str {
        match self {
            ShapeKind::Root => "root",
            ShapeKind::Group => "group",
            ShapeKind::Rect { .. } => "rect",
        }
    }
}

/// A single element in the shape tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identifier persisted into the host document.
    pub id: ElementId,

    /// What kind of element this is.
    pub kind: ShapeKind,

    /// Flat fill; `None` on groups and the root.
    pub fill: Option<Color>,

    /// 2D affine transform; absent means identity.
    pub transform: Option<Transform>,
}

impl Element {
    pub fn new(id: ElementId, kind: ShapeKind) -> Self {
        Self {
            id,
            kind,
            fill: None,
            transform: None,
        }
    }

    /// A named group.
    pub fn group(id: ElementId) -> Self {
        Self::new(id, ShapeKind::Group)
    }

    /// An anonymous rectangle — member rects are never addressed by name.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            ElementId::fresh("rect"),
            ShapeKind::Rect {
                x,
                y,
                width,
                height,
            },
        )
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

// ─── Shape tree ──────────────────────────────────────────────────────────

/// The document tree of one state sheet.
///
/// Edges go from parent → child. Lookup by identifier goes through
/// `id_index`; registering a duplicate identifier overwrites the index
/// entry while the earlier element stays in the tree, so a repeated
/// generation pass appends rather than updates.
#[derive(Debug, Clone)]
pub struct ShapeTree {
    /// The underlying directed graph.
    pub graph: StableDiGraph<Element, ()>,

    /// The root element index.
    pub root: NodeIndex,

    /// Index from ElementId → NodeIndex for fast lookup.
    pub id_index: HashMap<ElementId, NodeIndex>,
}

impl ShapeTree {
    /// Create a new empty tree with a root element.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = StableDiGraph::new();
        let root_id = ElementId::intern("root");
        let root = graph.add_node(Element::new(root_id, ShapeKind::Root));

        let mut id_index = HashMap::new();
        id_index.insert(root_id, root);

        Self {
            graph,
            root,
            id_index,
        }
    }

    /// Look up an element handle by identifier.
    pub fn find_by_id(&self, id: ElementId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Look up an element by identifier.
    pub fn get_by_id(&self, id: ElementId) -> Option<&Element> {
        self.find_by_id(id).map(|idx| &self.graph[idx])
    }

    /// Create an element as the last child of `parent`. Returns its handle.
    pub fn create_child(&mut self, parent: NodeIndex, element: Element) -> NodeIndex {
        let id = element.id;
        let idx = self.graph.add_node(element);
        self.graph.add_edge(parent, idx, ());
        self.id_index.insert(id, idx);
        idx
    }

    /// Deep-copy the subtree rooted at `src` and return the detached copy's
    /// root handle. The copy root keeps the source identifier (callers
    /// re-identify it before appending); copied descendants get fresh
    /// anonymous ids. Nothing is registered in the id index until the copy
    /// is appended.
    pub fn deep_copy(&mut self, src: NodeIndex) -> NodeIndex {
        let copy = self.graph.add_node(self.graph[src].clone());
        for child in self.children(src) {
            let child_copy = self.copy_descendant(child);
            self.graph.add_edge(copy, child_copy, ());
        }
        copy
    }

    fn copy_descendant(&mut self, src: NodeIndex) -> NodeIndex {
        let mut element = self.graph[src].clone();
        element.id = ElementId::fresh(element.kind.id_prefix());
        let copy = self.graph.add_node(element);
        for child in self.children(src) {
            let child_copy = self.copy_descendant(child);
            self.graph.add_edge(copy, child_copy, ());
        }
        copy
    }

    /// Append a detached element (e.g. a fresh deep copy) as the last child
    /// of `parent`, registering the subtree's identifiers.
    pub fn append_child(&mut self, parent: NodeIndex, element: NodeIndex) {
        self.graph.add_edge(parent, element, ());
        self.register_subtree(element);
    }

    fn register_subtree(&mut self, idx: NodeIndex) {
        self.id_index.insert(self.graph[idx].id, idx);
        for child in self.children(idx) {
            self.register_subtree(child);
        }
    }

    /// Change an element's identifier, keeping the id index consistent.
    pub fn set_id(&mut self, element: NodeIndex, id: ElementId) {
        let old = self.graph[element].id;
        self.graph[element].id = id;
        if self.id_index.get(&old) == Some(&element) {
            self.id_index.remove(&old);
            self.id_index.insert(id, element);
        }
    }

    /// Get the parent handle of an element.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Get children of an element in document (insertion) order.
    ///
    /// Sorts by `NodeIndex` so the result is deterministic regardless of
    /// how `petgraph` iterates its adjacency list.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        children.sort();
        children
    }

    /// Number of elements in the tree, root included. Detached copies count
    /// until dropped, so this is meaningful after append.
    pub fn element_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl Default for ShapeTree {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_find_by_id() {
        let mut tree = ShapeTree::new();
        let id = ElementId::intern("btn-normal");
        let root = tree.root;
        let g = tree.create_child(root, Element::group(id));

        assert_eq!(tree.find_by_id(id), Some(g));
        assert_eq!(tree.children(root), vec![g]);
        assert_eq!(tree.get_by_id(id).unwrap().kind, ShapeKind::Group);
    }

    #[test]
    fn children_are_in_insertion_order() {
        let mut tree = ShapeTree::new();
        let root = tree.root;
        let a = tree.create_child(root, Element::rect(0.0, 0.0, 1.0, 1.0));
        let b = tree.create_child(root, Element::rect(1.0, 0.0, 1.0, 1.0));
        let c = tree.create_child(root, Element::rect(2.0, 0.0, 1.0, 1.0));
        assert_eq!(tree.children(root), vec![a, b, c]);
    }

    #[test]
    fn deep_copy_is_detached_and_renames_descendants() {
        let mut tree = ShapeTree::new();
        let root = tree.root;
        let id = ElementId::intern("btn-normal");
        let g = tree.create_child(root, Element::group(id));
        let member = tree.create_child(g, Element::rect(0.0, 0.0, 30.0, 30.0));
        let member_id = tree.graph[member].id;

        let copy = tree.deep_copy(g);

        // Copy is not a child of anything and not indexed
        assert_eq!(tree.parent(copy), None);
        assert_eq!(tree.find_by_id(id), Some(g), "index still points at source");

        // Structure is cloned, member ids are fresh
        let copy_children = tree.children(copy);
        assert_eq!(copy_children.len(), 1);
        let copied_member = &tree.graph[copy_children[0]];
        assert_ne!(copied_member.id, member_id);
        assert!(copied_member.id.is_anonymous());
        assert_eq!(
            copied_member.kind,
            ShapeKind::Rect {
                x: 0.0,
                y: 0.0,
                width: 30.0,
                height: 30.0
            }
        );
    }

    #[test]
    fn append_registers_the_copy_under_its_new_id() {
        let mut tree = ShapeTree::new();
        let root = tree.root;
        let src_id = ElementId::intern("btn-normal");
        let dst_id = ElementId::intern("btn-focused");
        let g = tree.create_child(root, Element::group(src_id));

        let copy = tree.deep_copy(g);
        tree.set_id(copy, dst_id);
        tree.append_child(root, copy);

        assert_eq!(tree.find_by_id(dst_id), Some(copy));
        assert_eq!(tree.find_by_id(src_id), Some(g), "source untouched");
        assert_eq!(tree.children(root), vec![g, copy]);
    }

    #[test]
    fn duplicate_ids_resolve_to_the_latest_element() {
        // Re-running a generation pass appends a second element under the
        // same identifier; lookup resolves to the newest one.
        let mut tree = ShapeTree::new();
        let root = tree.root;
        let id = ElementId::intern("btn-normal");
        let first = tree.create_child(root, Element::group(id));
        let second = tree.create_child(root, Element::group(id));

        assert_eq!(tree.find_by_id(id), Some(second));
        assert!(tree.graph.contains_node(first), "earlier element remains");
        assert_eq!(tree.children(root).len(), 2);
    }

    #[test]
    fn color_hex_roundtrip() {
        assert_eq!(Color::from_hex("#FF0000"), Some(FRAME_FILL));
        assert_eq!(Color::from_hex("0F0"), Some(INTERIOR_FILL));
        assert_eq!(INTERIOR_FILL.to_hex(), "#00FF00");
        assert_eq!(Color::from_hex("#12345"), None);
    }
}
