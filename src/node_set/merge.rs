//! Merging two independently built node sets.

use std::cmp::Ordering;
use std::hash::Hash;

use super::NodeSet;
use crate::order::{DocumentOrder, NaturalOrder};
use crate::trace::trace_event;

impl<N: Clone + Eq + Hash> NodeSet<N> {
    /// Returns the union of `left` and `right` in document order.
    ///
    /// Both inputs must already be in document order; their relative order is
    /// established here with `order`. A node present in both inputs appears
    /// once in the result. The inputs are left untouched.
    ///
    /// If `order` reports `Equal` for two distinct nodes, both are kept and
    /// the node from `left` comes first.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `left` or `right` is out of document order
    /// under `order`.
    ///
    /// # Complexity
    ///
    /// O(n + m) comparisons, where n and m are the sizes of the two sets.
    /// When one set lies entirely before the other, the sets are concatenated
    /// after two comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// // Handles are names; document order is their position in `document`.
    /// let document = ["html", "head", "title", "body", "p"];
    /// let position = |node: &&str| document.iter().position(|candidate| candidate == node);
    /// let order = |left: &&str, right: &&str| position(left).cmp(&position(right));
    ///
    /// let headings: NodeSet<&str> = ["head", "title"].into_iter().collect();
    /// let content: NodeSet<&str> = ["html", "title", "p"].into_iter().collect();
    ///
    /// let merged = NodeSet::merge_by(&headings, &content, &order);
    /// assert_eq!(merged.to_vec(), vec!["html", "head", "title", "p"]);
    /// ```
    #[must_use]
    pub fn merge_by<O>(left: &Self, right: &Self, order: &O) -> Self
    where
        O: DocumentOrder<N> + ?Sized,
    {
        #[cfg(debug_assertions)]
        debug_assert!(
            is_in_document_order(left, order) && is_in_document_order(right, order),
            "{}",
            DOCUMENT_ORDER_PANIC_MESSAGE
        );

        if left.is_empty() {
            return right.clone();
        }
        if right.is_empty() {
            return left.clone();
        }

        let mut merged = Self::with_capacity(left.len() + right.len());

        if let Some((first, second)) = disjoint_order(left, right, order) {
            merged.extend(first.iter().cloned());
            merged.extend(second.iter().cloned());
            trace_event!(
                trace,
                left = left.len(),
                right = right.len(),
                merged = merged.len(),
                "merged disjoint node sets"
            );
            return merged;
        }

        let mut left_nodes = left.iter().peekable();
        let mut right_nodes = right.iter().peekable();

        while let (Some(&left_node), Some(&right_node)) = (left_nodes.peek(), right_nodes.peek()) {
            if left_node == right_node {
                merged.add(left_node.clone());
                left_nodes.next();
                right_nodes.next();
                continue;
            }
            match order.compare(left_node, right_node) {
                Ordering::Less | Ordering::Equal => {
                    merged.add(left_node.clone());
                    left_nodes.next();
                }
                Ordering::Greater => {
                    merged.add(right_node.clone());
                    right_nodes.next();
                }
            }
        }

        merged.extend(left_nodes.cloned());
        merged.extend(right_nodes.cloned());

        trace_event!(
            trace,
            left = left.len(),
            right = right.len(),
            merged = merged.len(),
            "merged interleaved node sets"
        );
        merged
    }
}

impl<N: Clone + Eq + Hash + Ord> NodeSet<N> {
    /// Returns the union of `left` and `right`, using the handles' own `Ord`
    /// as document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// let evens: NodeSet<u32> = [2, 4, 6].into_iter().collect();
    /// let small: NodeSet<u32> = [1, 2, 3].into_iter().collect();
    ///
    /// let merged = NodeSet::merge(&evens, &small);
    /// assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 6]);
    /// ```
    #[must_use]
    pub fn merge(left: &Self, right: &Self) -> Self {
        Self::merge_by(left, right, &NaturalOrder)
    }
}

/// Returns the two sets as `(first, second)` if every node of `first`
/// strictly precedes every node of `second`.
fn disjoint_order<'a, N, O>(
    left: &'a NodeSet<N>,
    right: &'a NodeSet<N>,
    order: &O,
) -> Option<(&'a NodeSet<N>, &'a NodeSet<N>)>
where
    O: DocumentOrder<N> + ?Sized,
{
    let (left_first, left_last) = (left.first()?, left.last()?);
    let (right_first, right_last) = (right.first()?, right.last()?);

    if order.precedes(left_last, right_first) {
        Some((left, right))
    } else if order.precedes(right_last, left_first) {
        Some((right, left))
    } else {
        None
    }
}

/// Message constant for panic when `merge_by` receives an out-of-order input.
#[cfg(debug_assertions)]
const DOCUMENT_ORDER_PANIC_MESSAGE: &str =
    "merge_by requires both inputs to be in document order under the supplied order";

#[cfg(debug_assertions)]
fn is_in_document_order<N, O>(set: &NodeSet<N>, order: &O) -> bool
where
    O: DocumentOrder<N> + ?Sized,
{
    let mut nodes = set.iter();
    let Some(mut previous) = nodes.next() else {
        return true;
    };
    nodes.all(|node| {
        let in_order = order.compare(previous, node) != Ordering::Greater;
        previous = node;
        in_order
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set_of(nodes: &[u32]) -> NodeSet<u32> {
        nodes.iter().copied().collect()
    }

    #[rstest]
    fn merge_empty_with_empty_returns_empty() {
        let merged = NodeSet::merge(&set_of(&[]), &set_of(&[]));
        assert!(merged.is_empty());
    }

    #[rstest]
    #[case(&[], &[1, 2, 3])]
    #[case(&[1, 2, 3], &[])]
    fn merge_with_empty_copies_the_other(#[case] left: &[u32], #[case] right: &[u32]) {
        let merged = NodeSet::merge(&set_of(left), &set_of(right));
        assert_eq!(merged.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(&[1, 3, 5], &[2, 4, 6], &[1, 2, 3, 4, 5, 6])]
    #[case(&[2, 3, 4, 5, 6], &[1, 2, 3, 4], &[1, 2, 3, 4, 5, 6])]
    #[case(&[1, 2, 3], &[1, 2, 3], &[1, 2, 3])]
    #[case(&[1, 2, 3, 4, 5], &[2, 4], &[1, 2, 3, 4, 5])]
    #[case(&[7, 8], &[1, 2], &[1, 2, 7, 8])]
    #[case(&[1, 2], &[7, 8], &[1, 2, 7, 8])]
    #[case(&[5], &[5], &[5])]
    fn merge_produces_ordered_union(
        #[case] left: &[u32],
        #[case] right: &[u32],
        #[case] expected: &[u32],
    ) {
        let merged = NodeSet::merge(&set_of(left), &set_of(right));
        assert_eq!(merged.to_vec(), expected);
        assert_eq!(merged.len(), expected.len());
    }

    #[rstest]
    fn merge_is_commutative() {
        let left = set_of(&[1, 4, 9]);
        let right = set_of(&[2, 4, 8, 16]);
        assert_eq!(NodeSet::merge(&left, &right), NodeSet::merge(&right, &left));
    }

    #[rstest]
    fn merge_preserves_inputs() {
        let left = set_of(&[1, 3]);
        let right = set_of(&[2, 3]);
        let _ = NodeSet::merge(&left, &right);

        assert_eq!(left.to_vec(), vec![1, 3]);
        assert_eq!(right.to_vec(), vec![2, 3]);
    }

    #[rstest]
    fn merge_with_itself_is_identity() {
        let set = set_of(&[3, 5, 8]);
        assert_eq!(NodeSet::merge(&set, &set), set);
    }

    #[rstest]
    fn merge_by_uses_supplied_order() {
        let descending = |left: &u32, right: &u32| right.cmp(left);
        let left = set_of(&[9, 5, 1]);
        let right = set_of(&[8, 5, 2]);

        let merged = NodeSet::merge_by(&left, &right, &descending);
        assert_eq!(merged.to_vec(), vec![9, 8, 5, 2, 1]);
    }

    #[rstest]
    fn merge_by_keeps_distinct_nodes_reported_equal() {
        // Everything compares equal: order falls back to left-then-right.
        let tie = |_: &u32, _: &u32| Ordering::Equal;
        let merged = NodeSet::merge_by(&set_of(&[1, 2]), &set_of(&[3, 2]), &tie);
        assert_eq!(merged.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "document order")]
    fn merge_unordered_left_panics_in_debug() {
        let _ = NodeSet::merge(&set_of(&[3, 1]), &set_of(&[2]));
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "document order")]
    fn merge_by_unordered_right_panics_in_debug() {
        let descending = |left: &u32, right: &u32| right.cmp(left);
        let _ = NodeSet::merge_by(&set_of(&[9, 5]), &set_of(&[2, 8]), &descending);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    fn is_in_document_order_accepts_ties_and_rejects_inversions() {
        let tie = |_: &u32, _: &u32| Ordering::Equal;
        assert!(is_in_document_order(&set_of(&[4, 1]), &tie));
        assert!(is_in_document_order(&set_of(&[]), &NaturalOrder));
        assert!(is_in_document_order(&set_of(&[1, 4]), &NaturalOrder));
        assert!(!is_in_document_order(&set_of(&[4, 1]), &NaturalOrder));
    }

    #[rstest]
    fn disjoint_order_detects_both_layouts() {
        let low = set_of(&[1, 2]);
        let high = set_of(&[5, 6]);
        let mixed = set_of(&[2, 5]);

        let (first, _) = disjoint_order(&high, &low, &NaturalOrder).unwrap();
        assert_eq!(first.to_vec(), vec![1, 2]);
        let (first, _) = disjoint_order(&low, &high, &NaturalOrder).unwrap();
        assert_eq!(first.to_vec(), vec![1, 2]);
        assert!(disjoint_order(&low, &mixed, &NaturalOrder).is_none());
    }
}
