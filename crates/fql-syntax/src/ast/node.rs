//! Arena-backed syntax tree produced by the parser.
//!
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`]
//! indices. Ownership always flows parent -> child; the `parent` field is a
//! plain index used to look up the enclosing operator.

use crate::ast::{literal::Literal, operator::Operator};
use std::fmt;

/// Index of a node inside its [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A single `column: value` condition. `key` holds the resolved column name.
    KeyValue { key: String, value: Literal },

    /// An operator applied to its ordered children.
    Composite(Operator),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl AstNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::KeyValue { .. })
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            NodeKind::Composite(op) => Some(op),
            NodeKind::KeyValue { .. } => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::KeyValue { key, .. } => Some(key),
            NodeKind::Composite(_) => None,
        }
    }

    pub fn value(&self) -> Option<&Literal> {
        match &self.kind {
            NodeKind::KeyValue { value, .. } => Some(value),
            NodeKind::Composite(_) => None,
        }
    }
}

/// A parsed filter.
///
/// The root is a synthetic `$and` node whose children are the top-level
/// clauses of the filter. An `Ast` can only be built by the parser, so every
/// composite node has at least one child and comparison nodes only hold
/// key/value leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Ast {
    const ROOT: NodeId = NodeId(0);

    pub(crate) fn new() -> Self {
        Ast {
            nodes: vec![AstNode {
                kind: NodeKind::Composite(Operator::And),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Operator of the node's parent, if the parent is a composite.
    pub fn parent_operator(&self, id: NodeId) -> Option<Operator> {
        self.parent(id).and_then(|p| self.node(p).operator())
    }

    /// Number of nodes, the synthetic root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no clauses.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Length of the longest path below the root.
    pub fn depth(&self) -> usize {
        fn walk(ast: &Ast, id: NodeId) -> usize {
            ast.children(id)
                .iter()
                .map(|child| 1 + walk(ast, *child))
                .max()
                .unwrap_or(0)
        }
        walk(self, self.root())
    }

    /// Key/value leaves in source order.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                out.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    pub(crate) fn push_composite(&mut self, op: Operator, parent: NodeId) -> NodeId {
        self.push(NodeKind::Composite(op), parent)
    }

    pub(crate) fn push_leaf(&mut self, key: String, value: Literal, parent: NodeId) -> NodeId {
        self.push(NodeKind::KeyValue { key, value }, parent)
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(AstNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn fmt_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node(id);
        match &node.kind {
            NodeKind::KeyValue { key, value } => {
                if is_plain_key(key) {
                    write!(f, "{}:{}", key, value)
                } else {
                    write!(f, "{}:{}", Literal::String(key.clone()), value)
                }
            }
            NodeKind::Composite(op) => {
                write!(f, "{}:", op)?;
                self.fmt_children(id, f)
            }
        }
    }

    fn fmt_children(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, child) in self.children(id).iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            self.fmt_node(*child, f)?;
        }
        write!(f, "]")
    }
}

/// Prints the canonical filter text. Keys are printed as resolved columns.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_children(self.root(), f)
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
