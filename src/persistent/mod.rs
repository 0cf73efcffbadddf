//! Persistent (immutable) trie.
//!
//! This module provides [`PersistentTrie`], a copy-on-write trie keyed by byte
//! sequences. Every update returns a new snapshot and leaves the original
//! untouched:
//!
//! - [`PersistentTrie::get`]: typed lookup, a type mismatch is a miss
//! - [`PersistentTrie::put`]: insert or overwrite
//! - [`PersistentTrie::remove`]: delete, pruning emptied path segments
//!
//! # Structural Sharing
//!
//! An update clones only the nodes on the updated key's path (one per key
//! symbol) and shares every other subtree with the previous snapshot.
//!
//! # Examples
//!
//! ```rust
//! use snaptrie::persistent::PersistentTrie;
//!
//! let trie = PersistentTrie::new()
//!     .put("test", 1_u32)
//!     .put("tea", 2_u32);
//! assert_eq!(trie.get::<u32>("test"), Some(&1));
//!
//! // Structural sharing: the original trie is preserved
//! let updated = trie.remove("test");
//! assert_eq!(trie.get::<u32>("test"), Some(&1));  // Original unchanged
//! assert_eq!(updated.get::<u32>("test"), None);   // New version
//! assert_eq!(updated.get::<u32>("tea"), Some(&2));
//!
//! // Payloads are type-erased: asking for the wrong type is a miss
//! assert_eq!(trie.get::<String>("test"), None);
//! ```

use std::any::Any;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets snapshots be read from many threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Payload Types
// =============================================================================

#[cfg(feature = "arc")]
pub(crate) type ErasedValue = dyn Any + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type ErasedValue = dyn Any;

/// Type-erased payload of a value node, shared between clones of the node.
pub(crate) type Payload = ReferenceCounter<ErasedValue>;

/// Types that can be stored in a [`PersistentTrie`].
///
/// With the `arc` feature this is every `'static + Send + Sync` type, otherwise
/// every `'static` type. It is implemented automatically and need not be `Clone`.
#[cfg(feature = "arc")]
pub trait TrieValue: Any + Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Any + Send + Sync> TrieValue for T {}

/// Types that can be stored in a [`PersistentTrie`].
///
/// With the `arc` feature this is every `'static + Send + Sync` type, otherwise
/// every `'static` type. It is implemented automatically and need not be `Clone`.
#[cfg(not(feature = "arc"))]
pub trait TrieValue: Any {}

#[cfg(not(feature = "arc"))]
impl<T: Any> TrieValue for T {}

mod node;
mod path;
mod trie;

pub use trie::PersistentTrie;

// =============================================================================
// Tests
// =============================================================================
