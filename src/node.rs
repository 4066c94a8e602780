use core::fmt;

use crate::id::SupplierId;

/// A vertex of a [`FlowNetwork`](crate::network::FlowNetwork).
///
/// The super-source and super-sink used by the allocator are distinct variants, so they can never
/// alias a real supplier.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Source,
    Sink,
    WithId(SupplierId),
}

impl Node {
    pub fn supplier(&self) -> Option<SupplierId> {
        match self {
            Node::WithId(id) => Some(*id),
            Node::Source | Node::Sink => None,
        }
    }
}

impl From<SupplierId> for Node {
    fn from(id: SupplierId) -> Self {
        Self::WithId(id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Source => f.write_str("super-source"),
            Node::Sink => f.write_str("super-sink"),
            Node::WithId(id) => write!(f, "supplier {id}"),
        }
    }
}
