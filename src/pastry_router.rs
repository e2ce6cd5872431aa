//! Routing Simulator
//!
//! Estimates how many overlay hops a Pastry-style network needs between two
//! nodes. Instead of per-node routing tables and leaf sets, every lookup runs
//! against the globally known sorted identifier sequence:
//!
//! 1. **Leaf set**: the destination is delivered directly when it lies within
//!    `LEAF_SET_RADIUS` ring positions of the current node.
//! 2. **Routing table**: otherwise the ring is scanned from the current node
//!    towards the destination's side for the first node sharing the next prefix
//!    length with the destination.
//!
//! The prefix length grows by one digit per hop regardless of how many digits
//! the chosen node actually shares, which models Pastry's one-digit-per-hop
//! convergence.

use rand::Rng;

use crate::pastry_digest::{shares_hex_prefix, DigestAlgorithm};
use crate::pastry_ids::IdentifierSpace;
use crate::pastry_interface::{
    HopCount, NodeIdentifier, RingIndex, ScanDirection, Seed, SimError, LEAF_SET_SIZE,
};
use crate::pastry_ring::in_leaf_set;

/// Hop-count simulator over a fixed identifier space
#[derive(Debug, Clone)]
pub struct RoutingSimulator {
    space: IdentifierSpace,
}

impl RoutingSimulator {
    /// Create a simulator of `node_count` nodes using MD5 identifiers
    ///
    /// # Example
    /// ```
    /// use pastry_sim::RoutingSimulator;
    ///
    /// let sim = RoutingSimulator::new(1000, 42).unwrap();
    /// assert_eq!(sim.route(17, 17).unwrap(), 0);
    /// assert_eq!(sim.route(17, 20).unwrap(), 1);
    /// ```
    pub fn new(node_count: usize, seed: Seed) -> Result<Self, SimError> {
        Self::with_digest(node_count, seed, DigestAlgorithm::default())
    }

    pub fn with_digest(
        node_count: usize,
        seed: Seed,
        digest: DigestAlgorithm,
    ) -> Result<Self, SimError> {
        let space = IdentifierSpace::build(node_count, seed, digest)?;
        Ok(Self::from_space(space))
    }

    pub fn from_space(space: IdentifierSpace) -> Self {
        RoutingSimulator { space }
    }

    pub fn node_count(&self) -> usize {
        self.space.len()
    }

    pub fn leaf_set_size(&self) -> usize {
        LEAF_SET_SIZE
    }

    pub fn space(&self) -> &IdentifierSpace {
        &self.space
    }

    /// Number of hops needed to route from `source` to `destination`
    ///
    /// Both arguments are ring indices in `[0, node_count)`. The scan direction
    /// is decided once from the initial indices and kept for the whole route.
    /// A prefix scan that reaches the array bound without a match aborts with
    /// [`SimError::RouteLookupFailed`].
    pub fn route(&self, source: RingIndex, destination: RingIndex) -> Result<HopCount, SimError> {
        self.check_index(source)?;
        self.check_index(destination)?;

        if source == destination {
            return Ok(0);
        }

        let node_count = self.node_count();
        let direction = ScanDirection::between(source, destination);
        let target = self.space.identifiers()[destination];

        let mut current = source;
        let mut hops = 0;
        let mut prefix_len = 0;

        loop {
            hops += 1;
            prefix_len += 1;

            if in_leaf_set(current, destination, node_count) {
                log::trace!("hop {}: {} -> {} via leaf set", hops, current, destination);
                break;
            }

            let next = self
                .scan_for_prefix(target, prefix_len, current, direction)
                .ok_or(SimError::RouteLookupFailed {
                    source: current,
                    destination,
                    prefix_len,
                })?;

            log::trace!(
                "hop {}: {} -> {} via {}-digit prefix",
                hops,
                current,
                next,
                prefix_len
            );

            current = next;
            if current == destination {
                break;
            }
        }

        Ok(hops)
    }

    /// Route a uniformly random source/destination pair drawn from `rng`
    pub fn run_trial<R: Rng>(&self, rng: &mut R) -> Result<HopCount, SimError> {
        let node_count = self.node_count();
        let source = rng.gen_range(0..node_count);
        let destination = rng.gen_range(0..node_count);
        self.route(source, destination)
    }

    fn check_index(&self, index: RingIndex) -> Result<(), SimError> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(SimError::InvalidIndex {
                index,
                node_count: self.node_count(),
            })
        }
    }

    /// Simulated routing-table lookup
    ///
    /// Walks from `start` (inclusive) towards the array bound in `direction`
    /// and returns the first index whose identifier shares `prefix_len` hex
    /// digits with `target`. Does not wrap past index 0 or N-1.
    fn scan_for_prefix(
        &self,
        target: NodeIdentifier,
        prefix_len: usize,
        start: RingIndex,
        direction: ScanDirection,
    ) -> Option<RingIndex> {
        let ids = self.space.identifiers();
        let matches = |i: &RingIndex| shares_hex_prefix(ids[*i], target, prefix_len);

        match direction {
            ScanDirection::Up => (start..ids.len()).find(matches),
            ScanDirection::Down => (0..=start).rev().find(matches),
        }
    }
}
