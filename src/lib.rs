//! # pastry_sim - Pastry Routing Hop Simulator
//!
//! Estimates how many overlay hops a Pastry-style prefix-routed network needs to
//! deliver a message between two synthetic nodes, as a function of network size.
//!
//! ## Core Components
//!
//! - **IdentifierSpace**: sorted, immutable sequence of 128-bit node identifiers
//!   derived deterministically from a seed
//! - **RoutingSimulator**: hop counting via a leaf-set shortcut plus a
//!   prefix-matching scan over the sorted ring
//! - **Ring arithmetic**: modular index helpers and leaf-set membership
//!
//! No transport, churn or per-node routing state is modelled: every lookup runs
//! against the globally known identifier sequence.
//!
//! ```
//! use pastry_sim::RoutingSimulator;
//!
//! let sim = RoutingSimulator::new(2000, 42).unwrap();
//! let hops = sim.route(0, 1234).unwrap();
//! assert!(hops >= 1);
//! ```
//!
//! ## Experiments
//!
//! The hop-scaling experiment driver (mean/stddev per network size and a
//! `hops ~ a + b log10(N)` fit) lives in `simulator/` and is run through the
//! `hop_runner` binary.

pub mod pastry_digest;
pub mod pastry_ids;
pub mod pastry_interface;
pub mod pastry_ring;
pub mod pastry_router;

// Re-export commonly used types
pub use pastry_digest::{identifier_hex, shares_hex_prefix, DigestAlgorithm};
pub use pastry_ids::IdentifierSpace;
pub use pastry_interface::{
    HopCount, NodeIdentifier, RingIndex, ScanDirection, Seed, SimError, LEAF_SET_RADIUS,
    LEAF_SET_SIZE,
};
pub use pastry_ring::{in_leaf_set, ring_mod, ring_step};
pub use pastry_router::RoutingSimulator;
