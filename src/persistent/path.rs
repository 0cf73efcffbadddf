//! Path cloning shared by insertion and removal.
//!
//! Both operations run in two passes:
//!
//! 1. A read-only descent records the existing node (if any) at every depth of
//!    the key.
//! 2. A bottom-up pass builds the replacement for the deepest node, then clones
//!    each recorded ancestor and points exactly one of its edges at the node
//!    built below it.
//!
//! Nodes off the key's path are never visited, so the new root shares every
//! untouched subtree with the old one. Both passes use an explicit stack; key
//! length does not bound call-stack depth.

use super::node::{Children, NodeRef, TrieNode};
use super::{Payload, ReferenceCounter};

/// Records the existing node at every depth of `key`, starting at `root`.
///
/// The result has `key.len() + 1` slots. Once a symbol is missing, that slot
/// and every deeper one is `None`.
fn descend<'a>(root: Option<&'a TrieNode>, key: &[u8]) -> Vec<Option<&'a TrieNode>> {
    let mut path = Vec::with_capacity(key.len() + 1);
    let mut current = root;
    path.push(current);
    for &symbol in key {
        current = current
            .and_then(|node| node.children().get(symbol))
            .map(|child| &**child);
        path.push(current);
    }
    path
}

/// Returns the root of a trie in which `key` maps to `payload`.
///
/// The node at `key` becomes a value node that keeps the children of any node
/// previously there. Missing path segments are created as plain nodes.
pub(crate) fn put(root: Option<&TrieNode>, key: &[u8], payload: Payload) -> NodeRef {
    let path = descend(root, key);

    let target_children =
        path[key.len()].map_or_else(Children::new, |node| node.children().clone());
    let mut rebuilt = TrieNode::with_value(target_children, payload);

    for (depth, &symbol) in key.iter().enumerate().rev() {
        let mut parent = path[depth].map_or_else(TrieNode::default, TrieNode::clone);
        parent
            .children_mut()
            .insert(symbol, ReferenceCounter::new(rebuilt));
        rebuilt = parent;
    }

    ReferenceCounter::new(rebuilt)
}

/// Outcome of [`remove`].
pub(crate) enum Removal {
    /// `key` did not name a stored value; the trie is unchanged.
    Unchanged,
    /// The value was removed. `None` means the trie is now empty.
    Removed(Option<NodeRef>),
}

/// Removes the value stored at `key` below `root`.
///
/// A childless target is detached from its parent, and every ancestor left as
/// a childless plain node is detached in turn. A target with children is
/// downgraded to a plain node.
pub(crate) fn remove(root: &TrieNode, key: &[u8]) -> Removal {
    let path = descend(Some(root), key);

    let Some(target) = path[key.len()] else {
        return Removal::Unchanged;
    };
    if !target.is_value_node() {
        return Removal::Unchanged;
    }

    let mut replacement = if target.children().is_empty() {
        None
    } else {
        Some(TrieNode::plain(target.children().clone()))
    };

    for (depth, &symbol) in key.iter().enumerate().rev() {
        // Every slot above the target is populated: the descent reached it.
        let Some(ancestor) = path[depth] else {
            return Removal::Unchanged;
        };
        let mut parent = ancestor.clone();
        match replacement {
            Some(node) => parent
                .children_mut()
                .insert(symbol, ReferenceCounter::new(node)),
            None => {
                parent.children_mut().remove(symbol);
            }
        }
        replacement = if parent.is_dead() { None } else { Some(parent) };
    }

    Removal::Removed(replacement.map(ReferenceCounter::new))
}

// =============================================================================
// Tests
// =============================================================================
