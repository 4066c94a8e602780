use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::min;
use core::marker::PhantomData;

use crate::algo::max_flow::edmonds_karp;
use crate::allocation::Allocation;
use crate::amount::Amount;
use crate::error::Error;
use crate::id::{EdgeId, SupplierId, TransporterId};
use crate::network::FlowNetwork;
use crate::node::Node;
use crate::report::{total_amount_shipped, total_demand, total_transporter_cost};
use crate::supplier::Supplier;
use crate::transporter::Transporter;
use crate::Allocator;

/// Routes surplus inventory to demand with a breadth-first max-flow between a super-source feeding
/// every net-supply supplier and a super-sink fed by every net-demand supplier, followed by a
/// best-effort surplus redistribution sweep.
///
/// Augmenting paths are chosen by hop count, not by cost, so the allocation is a maximum flow that
/// is not guaranteed to be the cheapest one.
#[derive(Clone, Debug)]
pub struct SimpleAllocator<Amt>(PhantomData<Amt>);

impl<Amt> Default for SimpleAllocator<Amt> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<Amt: Amount> SimpleAllocator<Amt> {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_network(
        suppliers: &[Supplier<Amt>],
        transporters: &[Transporter<Amt>],
    ) -> Result<(FlowNetwork<Amt>, Vec<EdgeId>), Error> {
        let mut network = FlowNetwork::new();
        network.add_node(Node::Source);
        network.add_node(Node::Sink);

        for (i, supplier) in suppliers.iter().enumerate() {
            let node = Node::WithId(SupplierId(i));
            network.add_node(node);
            if supplier.is_net_supply() {
                network.add_flow_edge(Node::Source, node, supplier.surplus(), Amt::zero())?;
            } else {
                network.add_flow_edge(node, Node::Sink, supplier.demand(), Amt::zero())?;
            }
        }

        let transporter_edges = transporters
            .iter()
            .enumerate()
            .map(|(i, t)| network.add_transporter_edge(TransporterId(i), t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((network, transporter_edges))
    }

    /// Pushes each supplier's positive surplus into its outgoing edges, in adjacency order, up to
    /// their residual capacity. Neither downstream demand nor the paired reverse edges are
    /// consulted.
    fn redistribute_surplus(
        network: &mut FlowNetwork<Amt>,
        surplus: &mut BTreeMap<SupplierId, Amt>,
    ) {
        for (&id, remaining) in surplus.iter_mut() {
            if *remaining <= Amt::zero() {
                continue;
            }

            for edge_id in network.edges_from(id.into()).to_vec() {
                if remaining.is_zero() {
                    break;
                }
                let edge = network.edge(edge_id);
                if edge.has_capacity() {
                    let amount = min(*remaining, edge.residual());
                    log::trace!("redistributing {amount} units from {id} over {edge_id:?}");
                    network.top_up(edge_id, amount);
                    *remaining -= amount;
                }
            }
        }
    }
}

impl<Amt: Amount> Allocator for SimpleAllocator<Amt> {
    type Amount = Amt;
    type Error = Error;

    fn allocate_for_demand(
        &mut self,
        suppliers: Option<&[Supplier<Amt>]>,
        transporters: Option<&[Transporter<Amt>]>,
    ) -> Result<Allocation<Amt>, Self::Error> {
        let (Some(suppliers), Some(transporters)) = (suppliers, transporters) else {
            log::debug!("no suppliers or no transporters given, nothing to allocate");
            return Ok(Allocation::default());
        };

        let mut surplus: BTreeMap<_, _> = suppliers
            .iter()
            .enumerate()
            .map(|(i, s)| (SupplierId(i), s.surplus()))
            .collect();

        let (mut network, transporter_edges) = Self::build_network(suppliers, transporters)?;
        let delivered = edmonds_karp(&mut network, Node::Source, Node::Sink)?;

        let allocated: Vec<_> = transporters
            .iter()
            .zip(&transporter_edges)
            .map(|(t, &edge_id)| t.clone().with_allocation(network.edge(edge_id).flow()))
            .collect();

        Self::redistribute_surplus(&mut network, &mut surplus);

        log::info!("----------------------------------");
        log::info!("   Total demand = {}", total_demand(suppliers));
        log::info!("      Delivered = {delivered}");
        log::info!("  Total shipped = {}", total_amount_shipped(&allocated));
        match total_transporter_cost(&allocated) {
            Ok(cost) => log::info!("     Total cost = {cost}"),
            Err(e) => log::warn!("     Total cost = n/a ({e})"),
        }

        Ok(Allocation::new(allocated, delivered, network, surplus))
    }

    fn check(
        &self,
        suppliers: &[Supplier<Amt>],
        allocated: &[Transporter<Amt>],
    ) -> Result<(), Self::Error> {
        for (i, t) in allocated.iter().enumerate() {
            if t.allocation() < Amt::zero() {
                return Err(Error::NegativeAllocation(TransporterId(i)));
            }
            if t.allocation() > t.max_capacity() {
                return Err(Error::CapacityExceeded(TransporterId(i)));
            }
        }

        // net amount shipped out of each supplier (outgoing minus incoming)
        let net_shipped = allocated.iter().fold(
            BTreeMap::<SupplierId, Amt>::new(),
            |mut acc, t| {
                *acc.entry(t.from()).or_default() += t.allocation();
                *acc.entry(t.to()).or_default() -= t.allocation();
                acc
            },
        );

        for (i, supplier) in suppliers.iter().enumerate() {
            let id = SupplierId(i);
            let shipped = net_shipped.get(&id).copied().unwrap_or_default();
            if supplier.is_net_supply() {
                if shipped < Amt::zero() || shipped > supplier.surplus() {
                    return Err(Error::SupplyImbalance(id));
                }
            } else {
                let retained = -shipped;
                if retained < Amt::zero() || retained > supplier.demand() {
                    return Err(Error::DemandImbalance(id));
                }
            }
        }

        log::debug!(
            "allocation of {} transporters passed capacity and balance checks",
            allocated.len()
        );
        Ok(())
    }
}
