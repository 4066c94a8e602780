use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::id::SupplierId;
use crate::network::FlowNetwork;
use crate::transporter::Transporter;

/// Result of an allocation run.
///
/// `transporters` holds a copy of every input transporter with its allocation set from the flow
/// found by the augmenting-path phase. `network` and `remaining_surplus` reflect the state after
/// the surplus redistribution sweep that follows it, which never feeds back into the allocations.
///
/// The sweep also tops up the sink link of a net-demand supplier whose inventory exceeds its
/// demand, so the flow into [`Node::Sink`](crate::node::Node::Sink) in `network` can be larger
/// than [`Allocation::delivered`].
#[derive(Clone, Debug, Default)]
pub struct Allocation<Amt> {
    transporters: Vec<Transporter<Amt>>,
    delivered: Amt,
    network: FlowNetwork<Amt>,
    remaining_surplus: BTreeMap<SupplierId, Amt>,
}

impl<Amt: Amount> Allocation<Amt> {
    pub(crate) fn new(
        transporters: Vec<Transporter<Amt>>,
        delivered: Amt,
        network: FlowNetwork<Amt>,
        remaining_surplus: BTreeMap<SupplierId, Amt>,
    ) -> Self {
        Self {
            transporters,
            delivered,
            network,
            remaining_surplus,
        }
    }

    pub fn transporters(&self) -> &[Transporter<Amt>] {
        &self.transporters
    }

    pub fn into_transporters(self) -> Vec<Transporter<Amt>> {
        self.transporters
    }

    /// Units that reached demand nodes, i.e. the total flow into the super-sink.
    pub fn delivered(&self) -> Amt {
        self.delivered
    }

    pub fn network(&self) -> &FlowNetwork<Amt> {
        &self.network
    }

    pub fn remaining_surplus(&self, id: SupplierId) -> Option<Amt> {
        self.remaining_surplus.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.transporters.is_empty()
    }
}
