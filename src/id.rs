use core::fmt;

use serde::{Deserialize, Serialize};

/// Position of a supplier in the slice handed to the algorithms.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct SupplierId(pub usize);

/// Position of a transporter in the slice handed to the algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransporterId(pub usize);

/// Index into the edge arena of a [`FlowNetwork`](crate::network::FlowNetwork).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl SupplierId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl TransporterId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for TransporterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
