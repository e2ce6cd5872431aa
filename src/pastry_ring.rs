// Ring arithmetic over the sorted identifier sequence
//
// Node positions are indices into a sorted array; the ring closes by taking
// every position modulo the node count.

use crate::pastry_interface::{RingIndex, LEAF_SET_RADIUS};

/// Mathematical modulo: always in `[0, node_count)`, also for negative `x`
///
/// # Example
/// ```
/// use pastry_sim::pastry_ring::ring_mod;
///
/// assert_eq!(ring_mod(-1, 5), 4);
/// assert_eq!(ring_mod(5, 5), 0);
/// ```
///
/// # Panics
/// Panics if `node_count` is zero.
pub fn ring_mod(x: i64, node_count: usize) -> RingIndex {
    x.rem_euclid(node_count as i64) as RingIndex
}

/// Position `offset` steps away from `index` on a ring of `node_count` nodes
pub fn ring_step(index: RingIndex, offset: i64, node_count: usize) -> RingIndex {
    ring_mod(index as i64 + offset, node_count)
}

/// Whether `destination` lies within the leaf set of `source`
///
/// The leaf set covers `LEAF_SET_RADIUS` positions on each side of `source`,
/// wrapping around the ring.
pub fn in_leaf_set(source: RingIndex, destination: RingIndex, node_count: usize) -> bool {
    (1..=LEAF_SET_RADIUS as i64).any(|k| {
        ring_step(source, k, node_count) == destination
            || ring_step(source, -k, node_count) == destination
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_mod_negative() {
        assert_eq!(ring_mod(-1, 5), 4);
        assert_eq!(ring_mod(-5, 5), 0);
        assert_eq!(ring_mod(-6, 5), 4);
        assert_eq!(ring_mod(-1, 1), 0);
    }

    #[test]
    fn test_ring_mod_positive() {
        assert_eq!(ring_mod(0, 5), 0);
        assert_eq!(ring_mod(4, 5), 4);
        assert_eq!(ring_mod(5, 5), 0);
        assert_eq!(ring_mod(12, 5), 2);
    }

    #[test]
    fn test_ring_mod_range() {
        for n in 1..20usize {
            for x in -100i64..100 {
                let r = ring_mod(x, n);
                assert!(r < n, "ring_mod({}, {}) = {} out of range", x, n, r);
                assert_eq!((r as i64 - x).rem_euclid(n as i64), 0);
            }
        }
    }

    #[test]
    fn test_ring_step_wraps() {
        assert_eq!(ring_step(0, -1, 20), 19);
        assert_eq!(ring_step(19, 1, 20), 0);
        assert_eq!(ring_step(3, 8, 20), 11);
    }

    #[test]
    fn test_leaf_set_neighbours() {
        let n = 100;
        for k in 1..=8 {
            assert!(in_leaf_set(50, 50 + k, n));
            assert!(in_leaf_set(50, 50 - k, n));
        }
        assert!(!in_leaf_set(50, 59, n));
        assert!(!in_leaf_set(50, 41, n));
        // a node is not in its own leaf set on a large ring
        assert!(!in_leaf_set(50, 50, n));
    }

    #[test]
    fn test_leaf_set_wraps_around_ring() {
        let n = 100;
        assert!(in_leaf_set(0, 99, n));
        assert!(in_leaf_set(0, 92, n));
        assert!(!in_leaf_set(0, 91, n));
        assert!(in_leaf_set(97, 5, n));
        assert!(!in_leaf_set(97, 6, n));
    }

    #[test]
    fn test_leaf_set_small_ring_covers_everything() {
        // with fewer than 17 nodes every other node is a leaf
        let n = 10;
        for s in 0..n {
            for d in 0..n {
                if s != d {
                    assert!(in_leaf_set(s, d, n), "{} -> {}", s, d);
                }
            }
        }
    }
}
