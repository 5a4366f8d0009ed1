//! Path tree mirroring the structure of an inferred document
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A node owns
//! its children through the tree and only records its parent's id.

use crate::error::{Error, InferenceErrors, Result, UndefinedFieldType};
use crate::value::Value;
use arrow::datatypes::Field;

/// Index of a node in a [`PathTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// One field position in the schema tree
#[derive(Debug, Clone)]
pub struct PathNode {
    name: String,
    parent: Option<NodeId>,
    index: Option<usize>,
    depth: usize,
    path: Vec<String>,
    children: Vec<NodeId>,
    field: Option<Field>,
    error: Option<UndefinedFieldType>,
}

impl PathNode {
    fn root() -> Self {
        Self {
            name: String::new(),
            parent: None,
            index: None,
            depth: 0,
            path: Vec::new(),
            children: Vec::new(),
            field: None,
            error: None,
        }
    }

    /// Key, or synthetic element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position among the parent's children, `None` for the root
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Distance from the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Cached key path from the root
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Children in first-seen order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Resolved field, once inference has reached this node
    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    /// Why this node carries a fallback type, if it does
    pub fn error(&self) -> Option<&UndefinedFieldType> {
        self.error.as_ref()
    }
}

/// Arena-backed tree of [`PathNode`]s rooted at an unnamed scaffold node
#[derive(Debug, Clone)]
pub struct PathTree {
    nodes: Vec<PathNode>,
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTree {
    /// Create a tree holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![PathNode::root()],
        }
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root is always present
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node
    ///
    /// Ids are only handed out by this tree, so they are always in bounds.
    pub fn node(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut PathNode {
        &mut self.nodes[id.0]
    }

    /// Append a child to `parent` and return its id.
    ///
    /// Names are not checked for uniqueness; repeated synthetic element
    /// names are told apart by position.
    pub fn new_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        let parent_node = self.node(parent);
        let mut path = Vec::with_capacity(parent_node.path.len() + 1);
        path.extend_from_slice(&parent_node.path);
        path.push(name.clone());

        let child = PathNode {
            name,
            parent: Some(parent),
            index: Some(parent_node.children.len()),
            depth: parent_node.depth + 1,
            path,
            children: Vec::new(),
            field: None,
            error: None,
        };
        self.nodes.push(child);
        self.node_mut(parent).children.push(id);
        id
    }

    /// Children of a node in first-seen order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Child at a position
    pub fn child(&self, id: NodeId, index: usize) -> Result<NodeId> {
        self.children(id)
            .get(index)
            .copied()
            .ok_or_else(|| Error::child_not_found(&self.name_path(id), index))
    }

    /// Key path from the root to a node.
    ///
    /// Returns the cached path when present, otherwise walks parent links.
    pub fn name_path(&self, id: NodeId) -> Vec<String> {
        let node = self.node(id);
        if node.path.len() == node.depth {
            return node.path.clone();
        }

        let mut path = Vec::with_capacity(node.depth);
        let mut cur = id;
        while let Some(parent) = self.node(cur).parent {
            path.push(self.node(cur).name.clone());
            cur = parent;
        }
        path.reverse();
        path
    }

    /// Re-fetch the value at a node's path by successive key lookups.
    ///
    /// Returns `None` when an intermediate value is not a mapping or a key is
    /// missing. Synthetic element nodes never resolve, since sequences are not
    /// addressed by key.
    pub fn lookup_value<'a>(&self, id: NodeId, root: &'a Value) -> Option<&'a Value> {
        let mut value = root;
        for key in &self.node(id).path {
            value = value.as_map()?.get(key)?;
        }
        Some(value)
    }

    pub(crate) fn set_field(&mut self, id: NodeId, field: Field) {
        self.node_mut(id).field = Some(field);
    }

    pub(crate) fn set_error(&mut self, id: NodeId, error: UndefinedFieldType) {
        self.node_mut(id).error = Some(error);
    }

    /// Resolved fields of a node's children, in order
    pub fn child_fields(&self, id: NodeId) -> Vec<Field> {
        self.children(id)
            .iter()
            .filter_map(|&c| self.node(c).field.clone())
            .collect()
    }

    /// Every node error, depth-first with parents before children
    pub fn errors(&self) -> InferenceErrors {
        let mut errors = InferenceErrors::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Some(err) = &node.error {
                errors.push(err.clone());
            }
            stack.extend(node.children.iter().rev());
        }
        errors
    }

    /// All node ids in depth-first order, root first
    pub fn iter_depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev());
        }
        order
    }
}
