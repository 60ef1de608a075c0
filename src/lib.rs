//! # xpath-nodeset
//!
//! A document-order-preserving set of node references, the container an
//! XPath-style evaluator uses to collect and combine the nodes a query selects.
//!
//! ## Overview
//!
//! - **[`NodeSet`]**: duplicate-free, ordered by document position, with
//!   O(1) insertion at either end
//! - **Merge**: [`NodeSet::merge_by`] combines two ordered sets with a
//!   [`DocumentOrder`] supplied by the tree
//! - **Cursors**: [`Cursor`] and [`CursorMut`] traverse in either
//!   [`Direction`]; `CursorMut` can remove the node it just yielded
//! - **Identity handles**: [`NodeRef`] compares borrowed nodes by address
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `NodeSet` as a sequence
//! - `tracing`: `tracing` events for merges and rejected removals
//!
//! ## Example
//!
//! ```rust
//! use xpath_nodeset::prelude::*;
//!
//! let mut descendants = NodeSet::new();
//! descendants.add(3);
//! descendants.add(5);
//!
//! let mut ancestors = NodeSet::new();
//! ancestors.unshift(3);
//! ancestors.unshift(1);
//!
//! let mut merged = NodeSet::merge(&descendants, &ancestors);
//! assert_eq!(merged.to_vec(), vec![1, 3, 5]);
//!
//! let mut cursor = merged.cursor_mut(Direction::Forward);
//! cursor.next();
//! cursor.remove().unwrap();
//! assert!(cursor.remove().is_err());
//! assert_eq!(merged.first(), Some(&3));
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
/// use xpath_nodeset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::NodeSetError;
    pub use crate::node_ref::NodeRef;
    pub use crate::node_set::{Cursor, CursorMut, CursorState, Direction, NodeSet};
    pub use crate::order::{DocumentOrder, NaturalOrder};
}

pub mod error;
pub mod node_ref;
pub mod node_set;
pub mod order;

mod trace;

pub use error::NodeSetError;
pub use node_ref::NodeRef;
pub use node_set::{Cursor, CursorMut, CursorState, Direction, IntoIter, Iter, NodeSet};
pub use order::{DocumentOrder, NaturalOrder};
