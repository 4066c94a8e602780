use displaydoc::Display;

use crate::id::{SupplierId, TransporterId};
use crate::node::Node;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Invalid supplier inventory, expected non-negative value
    NegativeInventory,
    /// Invalid supplier demand, expected non-negative value
    NegativeDemand,
    /// Invalid transporter capacity, expected non-negative value
    NegativeCapacity,
    /// Invalid transporter cost per unit, expected non-negative value
    NegativeCost,
    /// Supplier {0} is not part of the supplied network
    UnknownSupplier(SupplierId),
    /// Edge endpoint {0} was never added to the network
    UnknownNode(Node),
    /// Transporter {0} has a negative allocation
    NegativeAllocation(TransporterId),
    /// Transporter {0} allocation exceeds its maximum capacity
    CapacityExceeded(TransporterId),
    /// Supplier {0} ships a net amount outside the range of its surplus inventory
    SupplyImbalance(SupplierId),
    /// Supplier {0} retains a net amount outside the range of its demand
    DemandImbalance(SupplierId),
    /// Arithmetic overflow while accumulating costs or flow
    ArithmeticOverflow,
}
