use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::error::Error;
use crate::id::{EdgeId, TransporterId};
use crate::node::Node;
use crate::transporter::Transporter;

/// A directed arc of a [`FlowNetwork`].
///
/// Arcs created by [`FlowNetwork::add_flow_edge`] come in pairs: the forward arc and a reverse arc
/// with zero capacity and negated cost that models the capacity to undo flow. Each stores the
/// other's id in `reverse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<Amt> {
    source: Node,
    dest: Node,
    capacity: Amt,
    cost: Amt,
    flow: Amt,
    reverse: Option<EdgeId>,
}

impl<Amt: Amount> Edge<Amt> {
    fn new(source: Node, dest: Node, capacity: Amt, cost: Amt) -> Self {
        Self {
            source,
            dest,
            capacity,
            cost,
            flow: Amt::zero(),
            reverse: None,
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn dest(&self) -> Node {
        self.dest
    }

    pub fn capacity(&self) -> Amt {
        self.capacity
    }

    pub fn cost(&self) -> Amt {
        self.cost
    }

    pub fn flow(&self) -> Amt {
        self.flow
    }

    pub fn reverse(&self) -> Option<EdgeId> {
        self.reverse
    }

    pub fn residual(&self) -> Amt {
        self.capacity - self.flow
    }

    pub fn has_capacity(&self) -> bool {
        self.capacity > self.flow
    }
}

/// Adjacency-list graph over [`Node`]s that owns every edge it creates.
///
/// Outgoing edges are kept in insertion order. That order is the iteration order of every search
/// and therefore decides ties.
#[derive(Clone, Debug)]
pub struct FlowNetwork<Amt> {
    edges: Vec<Edge<Amt>>,
    adjacency: BTreeMap<Node, Vec<EdgeId>>,
    origins: BTreeMap<EdgeId, TransporterId>,
}

impl<Amt> Default for FlowNetwork<Amt> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            adjacency: BTreeMap::new(),
            origins: BTreeMap::new(),
        }
    }
}

impl<Amt: Amount> FlowNetwork<Amt> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` with an empty edge list. Does nothing if it is already known.
    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node).or_default();
    }

    pub fn contains(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a single unpaired edge for `transporter` and remembers where it came from. Used by the
    /// cheapest-path search, which never needs residual capacity.
    pub fn add_cost_edge(&mut self, id: TransporterId, transporter: &Transporter<Amt>) -> EdgeId {
        let source = Node::from(transporter.from());
        let edge = Edge::new(
            source,
            transporter.to().into(),
            transporter.max_capacity(),
            transporter.cost_per_unit(),
        );
        let edge_id = self.push_edge(edge);
        self.adjacency.entry(source).or_default().push(edge_id);
        self.origins.insert(edge_id, id);
        edge_id
    }

    /// Adds a forward edge and its zero-capacity reverse twin. Both endpoints must have been
    /// registered with [`FlowNetwork::add_node`].
    pub fn add_flow_edge(
        &mut self,
        source: Node,
        dest: Node,
        capacity: Amt,
        cost: Amt,
    ) -> Result<EdgeId, Error> {
        for node in [source, dest] {
            if !self.contains(node) {
                return Err(Error::UnknownNode(node));
            }
        }

        let forward = EdgeId(self.edges.len());
        let backward = EdgeId(forward.index() + 1);

        let mut edge = Edge::new(source, dest, capacity, cost);
        edge.reverse = Some(backward);
        let mut reverse_edge = Edge::new(dest, source, Amt::zero(), -cost);
        reverse_edge.reverse = Some(forward);

        self.push_edge(edge);
        self.push_edge(reverse_edge);
        self.adjacency.entry(source).or_default().push(forward);
        self.adjacency.entry(dest).or_default().push(backward);

        Ok(forward)
    }

    /// Like [`FlowNetwork::add_flow_edge`], for the edge that carries a transporter's shipments.
    pub fn add_transporter_edge(
        &mut self,
        id: TransporterId,
        transporter: &Transporter<Amt>,
    ) -> Result<EdgeId, Error> {
        let edge_id = self.add_flow_edge(
            transporter.from().into(),
            transporter.to().into(),
            transporter.max_capacity(),
            transporter.cost_per_unit(),
        )?;
        self.origins.insert(edge_id, id);
        Ok(edge_id)
    }

    /// First outgoing edge of `source` that ends at `dest`, reverse edges included.
    pub fn edge_to(&self, source: Node, dest: Node) -> Option<EdgeId> {
        self.edges_from(source)
            .iter()
            .copied()
            .find(|id| self.edges[id.index()].dest == dest)
    }

    /// Outgoing edges of `node` in insertion order; empty for unknown nodes.
    pub fn edges_from(&self, node: Node) -> &[EdgeId] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<Amt> {
        &self.edges[id.index()]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<Amt>)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// The transporter an edge was created for, if any.
    pub fn origin(&self, id: EdgeId) -> Option<TransporterId> {
        self.origins.get(&id).copied()
    }

    /// Adds `amount` to the flow of `id` and takes it off the paired reverse edge.
    pub fn push_flow(&mut self, id: EdgeId, amount: Amt) {
        let edge = &mut self.edges[id.index()];
        edge.flow += amount;
        if let Some(reverse) = edge.reverse {
            self.edges[reverse.index()].flow -= amount;
        }
    }

    /// Adds `amount` to the flow of `id` alone, leaving the reverse edge untouched.
    pub(crate) fn top_up(&mut self, id: EdgeId, amount: Amt) {
        self.edges[id.index()].flow += amount;
    }

    fn push_edge(&mut self, edge: Edge<Amt>) -> EdgeId {
        self.edges.push(edge);
        EdgeId(self.edges.len() - 1)
    }
}
