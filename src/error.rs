//! Error types for node-set cursors.
//!
//! The only failure the container reports is a misused cursor: asking a
//! [`CursorMut`](crate::CursorMut) to remove an element it is not currently
//! positioned on. Everything else (duplicate insertion, empty queries,
//! merging empty sets) has a defined non-error result.

/// Represents errors that can occur when mutating a [`NodeSet`](crate::NodeSet).
///
/// # Examples
///
/// ```rust
/// use xpath_nodeset::{Direction, NodeSet, NodeSetError};
///
/// let mut set: NodeSet<u32> = [1, 2].into_iter().collect();
/// let mut cursor = set.cursor_mut(Direction::Forward);
///
/// let error = cursor.remove().unwrap_err();
/// assert_eq!(
///     error,
///     NodeSetError::InvalidState {
///         operation: "CursorMut::remove",
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "CursorMut::remove: no element pending removal; call next() first"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSetError {
    /// The cursor has no element eligible for removal.
    ///
    /// Raised before the first `next()`, after `next()` returned `None`,
    /// and for a second `remove()` without an intervening `next()`.
    InvalidState {
        /// The operation that was rejected.
        operation: &'static str,
    },
}

impl std::fmt::Display for NodeSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState { operation } => write!(
                formatter,
                "{operation}: no element pending removal; call next() first"
            ),
        }
    }
}

impl std::error::Error for NodeSetError {}
