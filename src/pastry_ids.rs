//! Identifier Space
//!
//! The synthetic overlay is a sorted sequence of node identifiers generated from
//! consecutive counters. Positions in the sequence are the ring indices used by
//! the router; the sequence never changes after construction.
//!
//! Identifier collisions are not checked. With 128-bit digests the probability is
//! negligible and duplicates would only make two ring positions indistinguishable
//! by prefix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pastry_digest::{identifier_hex, DigestAlgorithm};
use crate::pastry_interface::{NodeIdentifier, RingIndex, Seed, SimError, INITIAL_COUNTER_RANGE};

/// Immutable, ascending sequence of node identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSpace {
    ids: Box<[NodeIdentifier]>,
    first_counter: u64,
    digest: DigestAlgorithm,
}

impl IdentifierSpace {
    /// Build a space of `node_count` identifiers from a seed
    ///
    /// The starting counter is drawn uniformly from `[0, 100)` by a generator
    /// seeded with `seed`; identifiers are the digests of the following
    /// `node_count` counter values.
    pub fn build(node_count: usize, seed: Seed, digest: DigestAlgorithm) -> Result<Self, SimError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = rng.gen_range(0..INITIAL_COUNTER_RANGE);
        Self::from_counter(start, node_count, digest)
    }

    /// Build a space from counters `start + 1 ..= start + node_count`
    pub fn from_counter(
        start: u64,
        node_count: usize,
        digest: DigestAlgorithm,
    ) -> Result<Self, SimError> {
        if node_count == 0 {
            return Err(SimError::Configuration {
                reason: "node count must be positive".to_string(),
            });
        }

        let mut ids: Vec<NodeIdentifier> = (1..=node_count as u64)
            .map(|i| digest.node_identifier(start + i))
            .collect();
        ids.sort_unstable();

        log::debug!(
            "Built identifier space: {} nodes, counters {}..={}, digest {}",
            node_count,
            start + 1,
            start + node_count as u64,
            digest
        );

        Ok(IdentifierSpace {
            ids: ids.into_boxed_slice(),
            first_counter: start + 1,
            digest,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false: a space holds at least one node
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: RingIndex) -> Option<NodeIdentifier> {
        self.ids.get(index).copied()
    }

    pub fn identifiers(&self) -> &[NodeIdentifier] {
        &self.ids
    }

    /// Fixed-width hex form of the identifier at `index`
    pub fn hex(&self, index: RingIndex) -> Option<String> {
        self.get(index).map(identifier_hex)
    }

    /// Counter value hashed into the first generated identifier
    pub fn first_counter(&self) -> u64 {
        self.first_counter
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }
}
