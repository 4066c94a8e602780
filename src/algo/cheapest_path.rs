use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::amount::Amount;
use crate::error::Error;
use crate::id::{EdgeId, SupplierId, TransporterId};
use crate::network::FlowNetwork;
use crate::node::Node;
use crate::supplier::Supplier;
use crate::transporter::Transporter;

/// Finds the sequence of transporters that moves a unit from `source` to `destination` at the
/// lowest total cost, using Dijkstra's algorithm over the transporter edges.
///
/// Costs must be non-negative, which [`Transporter::new`] guarantees. The relaxation loop stops as
/// soon as `destination` leaves the queue. Stale queue entries are not skipped.
///
/// Returns an empty path if `destination` is unreachable, or if it is `source` itself. Returns an
/// error if `source`, `destination` or a transporter endpoint is not a valid supplier index.
pub fn cheapest_path<'a, Amt: Amount>(
    suppliers: &[Supplier<Amt>],
    transporters: &'a [Transporter<Amt>],
    source: SupplierId,
    destination: SupplierId,
) -> Result<Vec<&'a Transporter<Amt>>, Error> {
    let known = |id: SupplierId| {
        if id.index() < suppliers.len() {
            Ok(id)
        } else {
            Err(Error::UnknownSupplier(id))
        }
    };
    known(source)?;
    known(destination)?;

    let mut network = FlowNetwork::new();
    for (i, transporter) in transporters.iter().enumerate() {
        known(transporter.from())?;
        known(transporter.to())?;
        network.add_cost_edge(TransporterId(i), transporter);
    }

    let mut min_cost = vec![Amt::max_value(); suppliers.len()];
    let mut previous_edge: Vec<Option<EdgeId>> = vec![None; suppliers.len()];
    min_cost[source.index()] = Amt::zero();

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((Amt::zero(), source)));

    while let Some(Reverse((_, current))) = queue.pop() {
        if current == destination {
            break;
        }

        let cost = min_cost[current.index()];
        for &edge_id in network.edges_from(current.into()) {
            let edge = network.edge(edge_id);
            let Node::WithId(next) = edge.dest() else {
                continue;
            };

            let candidate = cost
                .checked_add(&edge.cost())
                .ok_or(Error::ArithmeticOverflow)?;
            if candidate < min_cost[next.index()] {
                log::trace!("{current} --> {next} at cost {candidate}");
                min_cost[next.index()] = candidate;
                previous_edge[next.index()] = Some(edge_id);
                queue.push(Reverse((candidate, next)));
            }
        }
    }

    // walk back from the destination, then flip into source -> destination order
    let mut path = Vec::new();
    let mut current = destination;
    while let Some(edge_id) = previous_edge[current.index()] {
        if let Some(TransporterId(t)) = network.origin(edge_id) {
            path.push(&transporters[t]);
        }
        match network.edge(edge_id).source().supplier() {
            Some(from) => current = from,
            None => break,
        }
    }
    path.reverse();

    log::debug!(
        "cheapest path {source} -> {destination}: {} transporters",
        path.len()
    );
    Ok(path)
}
