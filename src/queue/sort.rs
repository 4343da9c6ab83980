//! Merge sort over arena-linked chains
//!
//! Operates purely on `NodeId` links: no node or string is allocated or
//! freed, the chain is only relinked. Recursion depth is bounded by the
//! halving split, so it stays O(log n).

use super::arena::{NodeArena, NodeId};

/// Sort the chain starting at `head` into ascending byte-wise order and
/// return the new head.
pub(crate) fn sort_chain(arena: &mut NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let first = head?;
    if arena.next(first).is_none() {
        return head;
    }

    let right = split(arena, first);
    let left = sort_chain(arena, Some(first));
    let right = sort_chain(arena, right);
    merge(arena, left, right)
}

/// Detach the second half of the chain at its midpoint and return its head.
///
/// Fast/slow scan: `slow` advances one node per step, `fast` two, until
/// `fast` runs off the end. The split point is immediately after `slow`,
/// which keeps the left half the longer one for odd lengths.
fn split(arena: &mut NodeArena, head: NodeId) -> Option<NodeId> {
    let mut slow = head;
    let mut fast = arena.next(head);

    while let Some(step) = fast {
        fast = arena.next(step);
        if let Some(step) = fast {
            slow = arena.next(slow).expect("slow trails fast inside the chain");
            fast = arena.next(step);
        }
    }

    let right = arena.next(slow);
    arena.set_next(slow, None);
    right
}

/// Merge two sorted chains into one, returning the merged head.
///
/// Stable: when values compare equal the left node is taken, so elements
/// from the left half keep their relative position ahead of equal elements
/// from the right half.
fn merge(
    arena: &mut NodeArena,
    mut left: Option<NodeId>,
    mut right: Option<NodeId>,
) -> Option<NodeId> {
    let mut head = None;
    let mut tail: Option<NodeId> = None;

    let mut append = |arena: &mut NodeArena, id: NodeId| {
        match tail {
            Some(t) => arena.set_next(t, Some(id)),
            None => head = Some(id),
        }
        tail = Some(id);
    };

    while let (Some(l), Some(r)) = (left, right) {
        if arena.value(l) <= arena.value(r) {
            left = arena.next(l);
            append(arena, l);
        } else {
            right = arena.next(r);
            append(arena, r);
        }
    }

    // One side is exhausted; the other is already sorted, link it whole.
    if let Some(rest) = left.or(right) {
        append(arena, rest);
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a chain in the given order, returning (head, ids in order).
    fn chain(arena: &mut NodeArena, values: &[&str]) -> (Option<NodeId>, Vec<NodeId>) {
        let mut ids = Vec::new();
        for value in values {
            ids.push(arena.alloc(value).unwrap());
        }
        for pair in ids.windows(2) {
            arena.set_next(pair[0], Some(pair[1]));
        }
        (ids.first().copied(), ids)
    }

    fn collect(arena: &NodeArena, mut head: Option<NodeId>) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(id) = head {
            out.push(arena.value(id).to_string());
            head = arena.next(id);
        }
        out
    }

    #[test]
    fn test_split_even_length() {
        let mut arena = NodeArena::new();
        let (head, ids) = chain(&mut arena, &["a", "b", "c", "d"]);

        let right = split(&mut arena, head.unwrap());
        assert_eq!(right, Some(ids[2]));
        assert_eq!(collect(&arena, head), vec!["a", "b"]);
        assert_eq!(collect(&arena, right), vec!["c", "d"]);
    }

    #[test]
    fn test_split_odd_length_keeps_left_longer() {
        let mut arena = NodeArena::new();
        let (head, ids) = chain(&mut arena, &["a", "b", "c"]);

        let right = split(&mut arena, head.unwrap());
        assert_eq!(right, Some(ids[2]));
        assert_eq!(collect(&arena, head), vec!["a", "b"]);
        assert_eq!(collect(&arena, right), vec!["c"]);
    }

    #[test]
    fn test_split_two_nodes() {
        let mut arena = NodeArena::new();
        let (head, ids) = chain(&mut arena, &["a", "b"]);

        let right = split(&mut arena, head.unwrap());
        assert_eq!(right, Some(ids[1]));
        assert_eq!(arena.next(ids[0]), None);
    }

    #[test]
    fn test_merge_interleaves() {
        let mut arena = NodeArena::new();
        let (left, _) = chain(&mut arena, &["a", "c", "e"]);
        let (right, _) = chain(&mut arena, &["b", "d", "f"]);

        let merged = merge(&mut arena, left, right);
        assert_eq!(collect(&arena, merged), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let mut arena = NodeArena::new();
        let (left, left_ids) = chain(&mut arena, &["same"]);
        let (right, right_ids) = chain(&mut arena, &["same"]);

        let merged = merge(&mut arena, left, right);
        assert_eq!(merged, Some(left_ids[0]));
        assert_eq!(arena.next(left_ids[0]), Some(right_ids[0]));
    }

    #[test]
    fn test_merge_with_empty_side() {
        let mut arena = NodeArena::new();
        let (left, _) = chain(&mut arena, &["x", "y"]);

        let merged = merge(&mut arena, left, None);
        assert_eq!(collect(&arena, merged), vec!["x", "y"]);
        assert_eq!(merge(&mut arena, None, None), None);
    }

    #[test]
    fn test_sort_chain() {
        let mut arena = NodeArena::new();
        let (head, _) = chain(&mut arena, &["pear", "apple", "quince", "fig", "apple"]);

        let sorted = sort_chain(&mut arena, head);
        assert_eq!(
            collect(&arena, sorted),
            vec!["apple", "apple", "fig", "pear", "quince"]
        );
    }

    #[test]
    fn test_sort_chain_trivial() {
        let mut arena = NodeArena::new();
        assert_eq!(sort_chain(&mut arena, None), None);

        let (head, ids) = chain(&mut arena, &["only"]);
        assert_eq!(sort_chain(&mut arena, head), Some(ids[0]));
    }
}
