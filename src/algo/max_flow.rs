use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::error::Error;
use crate::id::EdgeId;
use crate::network::FlowNetwork;
use crate::node::Node;

/// The edge used to first reach each node during one augmenting-path search.
pub type Predecessors = BTreeMap<Node, EdgeId>;

/// Breadth-first search from `source` to `sink` over edges with residual capacity.
///
/// Edges are explored in the network's insertion order and each node keeps the first edge that
/// reached it. Returns `None` when `sink` cannot be reached.
pub fn find_augmenting_path<Amt: Amount>(
    network: &FlowNetwork<Amt>,
    source: Node,
    sink: Node,
) -> Option<Predecessors> {
    let mut visited = BTreeSet::from([source]);
    let mut predecessors = Predecessors::new();
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        for &edge_id in network.edges_from(current) {
            let edge = network.edge(edge_id);
            let next = edge.dest();
            if visited.contains(&next) || !edge.has_capacity() {
                continue;
            }

            visited.insert(next);
            predecessors.insert(next, edge_id);
            if next == sink {
                return Some(predecessors);
            }
            queue.push_back(next);
        }
    }

    None
}

/// Pushes the bottleneck residual capacity along the path that ends at `sink`, returning the
/// amount pushed.
pub fn augment<Amt: Amount>(
    network: &mut FlowNetwork<Amt>,
    sink: Node,
    predecessors: &Predecessors,
) -> Amt {
    let mut path = Vec::new();
    let mut current = sink;
    while let Some(&edge_id) = predecessors.get(&current) {
        path.push(edge_id);
        current = network.edge(edge_id).source();
    }

    let bottleneck = path
        .iter()
        .map(|&edge_id| network.edge(edge_id).residual())
        .min()
        .unwrap_or_else(Amt::zero);

    for &edge_id in &path {
        network.push_flow(edge_id, bottleneck);
    }
    log::trace!(
        "augmented {bottleneck} units along {} edges ending at {sink}",
        path.len()
    );

    bottleneck
}

/// Computes a maximum flow from `source` to `sink` with shortest (fewest-hop) augmenting paths,
/// writing the flow into the network's edges.
///
/// Edge costs are ignored, so the result is a maximum flow but not necessarily a cheapest one.
/// Returns the total flow that reached `sink`, or an error if it overflows `Amt`.
pub fn edmonds_karp<Amt: Amount>(
    network: &mut FlowNetwork<Amt>,
    source: Node,
    sink: Node,
) -> Result<Amt, Error> {
    let mut total = Amt::zero();
    let mut rounds = 0usize;

    while let Some(predecessors) = find_augmenting_path(network, source, sink) {
        let pushed = augment(network, sink, &predecessors);
        total = total
            .checked_add(&pushed)
            .ok_or(Error::ArithmeticOverflow)?;
        rounds += 1;
    }

    log::debug!("max flow of {total} found after {rounds} augmenting paths");
    Ok(total)
}
