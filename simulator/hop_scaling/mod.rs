//! Hop-scaling experiment module
//!
//! Drives the routing simulator over a range of network sizes:
//! - Random source/destination pairs from one seeded generator
//! - Mean and standard deviation of batch means per size
//! - Weighted fit of mean hops against log10 of the network size

pub mod config;
pub mod runner;
pub mod stats;
