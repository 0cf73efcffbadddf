//! Persistent (immutable) copy-on-write trie.
//!
//! This module provides [`PersistentTrie`], an immutable key-value index over
//! byte sequences whose updates return new snapshots.
//!
//! # Overview
//!
//! Each key symbol is one byte; `&str` keys are walked over their UTF-8
//! encoding. A node may carry a payload of any [`TrieValue`] type, so a single
//! trie can hold values of different types under different keys.
//!
//! - O(k) get, where k is the key length
//! - O(k) put
//! - O(k) remove
//! - O(1) clone and `is_empty`
//!
//! All operations return new snapshots without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use snaptrie::persistent::PersistentTrie;
//!
//! let trie = PersistentTrie::new()
//!     .put("a", 1_u32)
//!     .put("ab", "two".to_string());
//!
//! assert_eq!(trie.get::<u32>("a"), Some(&1));
//! assert_eq!(trie.get::<String>("ab"), Some(&"two".to_string()));
//!
//! // Removing a prefix key keeps the longer key
//! let removed = trie.remove("a");
//! assert_eq!(removed.get::<u32>("a"), None);
//! assert_eq!(removed.get::<String>("ab"), Some(&"two".to_string()));
//! ```

use std::any::Any;
use std::fmt;
use std::iter::FromIterator;

use super::node::{NodeRef, TrieNode};
use super::path::{self, Removal};
use super::{Payload, ReferenceCounter, TrieValue};

// =============================================================================
// PersistentTrie Definition
// =============================================================================

/// A persistent (immutable) trie with type-erased payloads.
///
/// A `PersistentTrie` is a snapshot: a handle to one version of the trie.
/// Cloning it copies a single reference. Snapshots are never modified, so any
/// number of readers may use one while writers derive new snapshots from it.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(k)              |
/// | `put`          | O(k)              |
/// | `remove`       | O(k)              |
/// | `contains_key` | O(k)              |
/// | `subtrie`      | O(k)              |
/// | `clone`        | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// k is the key length. Each node on the path clones its child table, which is
/// bounded by the 256 possible symbols.
///
/// # Examples
///
/// ```rust
/// use snaptrie::persistent::PersistentTrie;
///
/// let trie = PersistentTrie::singleton("key", 42_i64);
/// assert_eq!(trie.get::<i64>("key"), Some(&42));
/// ```
#[derive(Clone, Default)]
pub struct PersistentTrie {
    /// Root node, `None` for the empty trie
    root: Option<NodeRef>,
}

impl PersistentTrie {
    /// Creates a new empty trie.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a trie containing a single key-value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::singleton("key", 42_u32);
    /// assert_eq!(trie.get::<u32>("key"), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton<V: TrieValue>(key: impl AsRef<[u8]>, value: V) -> Self {
        Self::new().put(key, value)
    }

    /// Returns `true` if the trie stores no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().put("key", 1_u8);
    /// assert!(!trie.is_empty());
    /// assert!(trie.remove("key").is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the value of type `T` stored under `key`.
    ///
    /// Returns `None` if no value is stored under exactly `key`, or if the
    /// stored value is not a `T`. The two cases are indistinguishable, which
    /// makes `get` usable as a type probe.
    ///
    /// # Complexity
    ///
    /// O(k)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().put("hello", 42_u32);
    ///
    /// assert_eq!(trie.get::<u32>("hello"), Some(&42));
    /// assert_eq!(trie.get::<u32>("hell"), None);  // Not a stored key
    /// assert_eq!(trie.get::<u64>("hello"), None); // Wrong type
    /// ```
    #[must_use]
    pub fn get<T: Any>(&self, key: impl AsRef<[u8]>) -> Option<&T> {
        self.find(key.as_ref())?
            .payload()
            .and_then(|payload| (**payload).downcast_ref::<T>())
    }

    /// Returns `true` if a value of any type is stored under exactly `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().put("abc", ());
    /// assert!(trie.contains_key("abc"));
    /// assert!(!trie.contains_key("ab"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.find(key.as_ref())
            .is_some_and(|node| node.is_value_node())
    }

    /// Stores `value` under `key`, replacing any value already there.
    ///
    /// The value is moved into the trie and is never copied, so it does not
    /// need to implement `Clone`. Values stored under longer keys that extend
    /// `key` are kept.
    ///
    /// # Complexity
    ///
    /// O(k)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie1 = PersistentTrie::new().put("key", 1_u32);
    /// let trie2 = trie1.put("key", 2_u32);
    ///
    /// assert_eq!(trie1.get::<u32>("key"), Some(&1)); // Original unchanged
    /// assert_eq!(trie2.get::<u32>("key"), Some(&2)); // New version
    /// ```
    #[must_use]
    pub fn put<V: TrieValue>(&self, key: impl AsRef<[u8]>, value: V) -> Self {
        let payload: Payload = ReferenceCounter::new(value);
        let root = path::put(self.root.as_deref(), key.as_ref(), payload);
        Self { root: Some(root) }
    }

    /// Removes the value stored under `key`.
    ///
    /// Removing a key that stores no value returns an equivalent trie.
    /// Path segments left without values or children are pruned, so removing
    /// the last key yields an empty trie.
    ///
    /// # Complexity
    ///
    /// O(k)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().put("abc", 1_u32);
    /// let removed = trie.remove("abc");
    ///
    /// assert_eq!(trie.get::<u32>("abc"), Some(&1)); // Original unchanged
    /// assert!(removed.is_empty());
    /// ```
    #[must_use]
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Self {
        let Some(root) = self.root.as_deref() else {
            return Self::new();
        };
        match path::remove(root, key.as_ref()) {
            Removal::Unchanged => self.clone(),
            Removal::Removed(root) => Self { root },
        }
    }

    /// Returns the trie of all values whose keys start with `prefix`, with
    /// `prefix` stripped from their keys.
    ///
    /// The result shares the node reached by `prefix`; nothing is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new()
    ///     .put("user/1", 10_u32)
    ///     .put("user/2", 20_u32)
    ///     .put("group/1", 30_u32);
    ///
    /// let users = trie.subtrie("user/");
    /// assert_eq!(users.get::<u32>("1"), Some(&10));
    /// assert_eq!(users.get::<u32>("2"), Some(&20));
    /// assert!(trie.subtrie("admin/").is_empty());
    /// ```
    #[must_use]
    pub fn subtrie(&self, prefix: impl AsRef<[u8]>) -> Self {
        Self {
            root: self.find_ref(prefix.as_ref()).cloned(),
        }
    }

    /// Returns `true` if both snapshots are empty or share the same root node.
    ///
    /// This is an identity check. Two tries built independently from the same
    /// entries are not `ptr_eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snaptrie::persistent::PersistentTrie;
    ///
    /// let trie = PersistentTrie::new().put("a", 1_u32).put("b", 2_u32);
    /// let updated = trie.put("a", 3_u32);
    ///
    /// assert!(trie.ptr_eq(&trie.clone()));
    /// assert!(!trie.ptr_eq(&updated));
    /// // The subtree under "b" is shared between both versions
    /// assert!(trie.subtrie("b").ptr_eq(&updated.subtrie("b")));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    fn find(&self, key: &[u8]) -> Option<&TrieNode> {
        self.find_ref(key).map(|node| &**node)
    }

    fn find_ref(&self, key: &[u8]) -> Option<&NodeRef> {
        let mut node = self.root.as_ref()?;
        for &symbol in key {
            node = node.children().get(symbol)?;
        }
        Some(node)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K: AsRef<[u8]>, V: TrieValue> FromIterator<(K, V)> for PersistentTrie {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |trie, (key, value)| trie.put(key, value))
    }
}

impl fmt::Debug for PersistentTrie {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PersistentTrie")
            .field("is_empty", &self.is_empty())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentTrie: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentTrie: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
