use std::fmt;

// 128 bit digest output, always non-negative (absolute value of a signed read)
pub type NodeIdentifier = u128;

// position in the sorted identifier sequence
pub type RingIndex = usize;
pub type HopCount = usize;
pub type Seed = u64;

/// Number of ring-adjacent nodes reachable directly from any node
pub const LEAF_SET_SIZE: usize = 16;

/// Leaf-set reach on either side of the current node
pub const LEAF_SET_RADIUS: usize = LEAF_SET_SIZE / 2;

/// Width of an identifier rendered as lowercase hex
pub const ID_HEX_DIGITS: usize = 32;

/// The first counter of a seeded space is drawn from `[0, INITIAL_COUNTER_RANGE)`
pub const INITIAL_COUNTER_RANGE: u64 = 100;

/// Direction of the prefix-match scan over the sorted ring
///
/// Chosen once per route from the initial source/destination order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Towards index 0
    Down,
    /// Towards index N-1
    Up,
}

impl ScanDirection {
    pub fn between(source: RingIndex, destination: RingIndex) -> Self {
        if source > destination {
            ScanDirection::Down
        } else {
            ScanDirection::Up
        }
    }
}

/// Errors raised by identifier-space construction and routing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Invalid construction or experiment parameters
    Configuration { reason: String },

    /// The requested identifier digest is not available
    DigestUnavailable { name: String },

    /// A ring index outside `[0, node_count)`
    InvalidIndex {
        index: RingIndex,
        node_count: usize,
    },

    /// The prefix scan reached the array bound without a match
    RouteLookupFailed {
        source: RingIndex,
        destination: RingIndex,
        prefix_len: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration { reason } => write!(f, "invalid configuration: {}", reason),
            SimError::DigestUnavailable { name } => {
                write!(f, "digest algorithm '{}' is not available", name)
            }
            SimError::InvalidIndex { index, node_count } => write!(
                f,
                "ring index {} out of range for {} nodes",
                index, node_count
            ),
            SimError::RouteLookupFailed {
                source,
                destination,
                prefix_len,
            } => write!(
                f,
                "no node matching a {}-digit prefix of node {} found scanning from node {}",
                prefix_len, destination, source
            ),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_direction_between() {
        assert_eq!(ScanDirection::between(5, 2), ScanDirection::Down);
        assert_eq!(ScanDirection::between(2, 5), ScanDirection::Up);
        // equal indices never scan, but resolve to Up
        assert_eq!(ScanDirection::between(3, 3), ScanDirection::Up);
    }

    #[test]
    fn test_leaf_set_radius() {
        assert_eq!(LEAF_SET_RADIUS, 8);
    }

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidIndex {
            index: 20,
            node_count: 20,
        };
        assert_eq!(err.to_string(), "ring index 20 out of range for 20 nodes");

        let err = SimError::DigestUnavailable {
            name: "md4".to_string(),
        };
        assert!(err.to_string().contains("md4"));
    }
}
