//! Immutable trie nodes.
//!
//! A [`TrieNode`] is either a plain path segment or a value-carrying node.
//! Both variants own a [`Children`] table mapping one symbol to one shared
//! child. Nodes are never modified once they are reachable from a published
//! snapshot: every update clones the node first and edits the clone.
//!
//! # Cloning Contract
//!
//! Cloning a node is shallow:
//! - the children table is a new container holding the same child references;
//! - the payload of a value node is the same allocation, re-owned by the clone.

use smallvec::SmallVec;

use super::{Payload, ReferenceCounter};

// =============================================================================
// Constants
// =============================================================================

/// Number of child edges stored inline before the table spills to the heap.
const INLINE_CHILDREN: usize = 4;

/// Shared reference to a node.
pub(crate) type NodeRef = ReferenceCounter<TrieNode>;

// =============================================================================
// Children Definition
// =============================================================================

/// Child edges of a node, sorted by symbol.
///
/// Symbols are unique within a table. Lookups use binary search.
#[derive(Clone, Default)]
pub(crate) struct Children {
    edges: SmallVec<[(u8, NodeRef); INLINE_CHILDREN]>,
}

impl Children {
    /// Creates an empty table.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `symbol`.
    pub(crate) fn get(&self, symbol: u8) -> Option<&NodeRef> {
        self.position(symbol)
            .ok()
            .map(|position| &self.edges[position].1)
    }

    /// Points the edge for `symbol` at `child`, replacing any existing edge.
    pub(crate) fn insert(&mut self, symbol: u8, child: NodeRef) {
        match self.position(symbol) {
            Ok(position) => self.edges[position].1 = child,
            Err(position) => self.edges.insert(position, (symbol, child)),
        }
    }

    /// Removes the edge for `symbol`, returning the detached child.
    pub(crate) fn remove(&mut self, symbol: u8) -> Option<NodeRef> {
        self.position(symbol)
            .ok()
            .map(|position| self.edges.remove(position).1)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over edges in ascending symbol order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, &NodeRef)> {
        self.edges.iter().map(|(symbol, child)| (*symbol, child))
    }

    fn position(&self, symbol: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&symbol, |(edge, _)| *edge)
    }
}

impl IntoIterator for Children {
    type Item = (u8, NodeRef);
    type IntoIter = smallvec::IntoIter<[(u8, NodeRef); INLINE_CHILDREN]>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

// =============================================================================
// TrieNode Definition
// =============================================================================

/// A node of the persistent trie.
#[derive(Clone)]
pub(crate) enum TrieNode {
    /// A path segment that does not terminate a stored key.
    Plain { children: Children },
    /// The terminus of a stored key. It may still have children when the key
    /// is a prefix of another stored key.
    Value { children: Children, payload: Payload },
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::plain(Children::new())
    }
}

impl TrieNode {
    /// Creates a plain node over `children`.
    pub(crate) const fn plain(children: Children) -> Self {
        Self::Plain { children }
    }

    /// Creates a value node over `children` holding `payload`.
    pub(crate) const fn with_value(children: Children, payload: Payload) -> Self {
        Self::Value { children, payload }
    }

    pub(crate) const fn children(&self) -> &Children {
        match self {
            Self::Plain { children } | Self::Value { children, .. } => children,
        }
    }

    /// Mutable access to the children of an unpublished clone.
    pub(crate) const fn children_mut(&mut self) -> &mut Children {
        match self {
            Self::Plain { children } | Self::Value { children, .. } => children,
        }
    }

    pub(crate) const fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Plain { .. } => None,
            Self::Value { payload, .. } => Some(payload),
        }
    }

    pub(crate) const fn is_value_node(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Returns `true` for a plain node with no children.
    ///
    /// Such a node stores nothing and is pruned from its parent.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_value_node() && self.children().is_empty()
    }
}

// =============================================================================
// Drop
// =============================================================================

impl Drop for TrieNode {
    /// Releases uniquely owned descendants with an explicit stack.
    ///
    /// The default recursive drop would use one stack frame per level, which a
    /// single long key can turn into a stack overflow.
    fn drop(&mut self) {
        let mut stack: Vec<Self> = Vec::new();
        let children = std::mem::take(self.children_mut());
        for (_, child) in children {
            if let Ok(node) = ReferenceCounter::try_unwrap(child) {
                stack.push(node);
            }
        }
        while let Some(mut node) = stack.pop() {
            let children = std::mem::take(node.children_mut());
            for (_, child) in children {
                if let Ok(grandchild) = ReferenceCounter::try_unwrap(child) {
                    stack.push(grandchild);
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
