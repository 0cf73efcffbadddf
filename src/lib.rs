//! # snaptrie
//!
//! A persistent (immutable, copy-on-write) trie for multi-version indexes.
//!
//! ## Overview
//!
//! Every update returns a new snapshot of the trie while all earlier snapshots
//! stay intact and queryable. Only the nodes on the updated key's path are
//! rebuilt; every other subtree is shared between versions.
//!
//! - **Snapshots**: [`PersistentTrie`](persistent::PersistentTrie) is cheap to
//!   clone and never mutated
//! - **Typed values**: each key holds a value of any type, checked on lookup
//! - **Path cloning**: put and remove allocate O(key length) nodes
//!
//! ## Feature Flags
//!
//! - `arc` (default): share nodes with `Arc` so snapshots can be read from
//!   many threads. Without it, nodes are shared with `Rc`.
//!
//! ## Example
//!
//! ```rust
//! use snaptrie::prelude::*;
//!
//! let version1 = PersistentTrie::new().put("config/port", 8080_u16);
//! let version2 = version1.put("config/host", "localhost".to_string());
//!
//! assert_eq!(version1.get::<String>("config/host"), None);
//! assert_eq!(version2.get::<String>("config/host"), Some(&"localhost".to_string()));
//! assert_eq!(version2.get::<u16>("config/port"), Some(&8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use snaptrie::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
