//! Undirected labeled transport graph.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Location, Ticket};

/// A transport mode labeling a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// The ticket kind a move along an edge with this label consumes.
    ///
    /// Ferry crossings demand a Secret ticket, which only MrX can hold, so
    /// ferry edges are MrX-only without the generator special-casing them.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

type EdgeLabels = SmallVec<[Transport; 2]>;

/// The board: an undirected graph of stations with labeled edges.
///
/// Build with `add_node`/`add_edge`, then query with `adjacent_nodes` and
/// `transports`. Duplicate labels on an edge collapse.
#[derive(Clone, Debug, Default)]
pub struct BoardGraph {
    adjacency: FxHashMap<Location, FxHashMap<Location, EdgeLabels>>,
}

impl BoardGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no edges (edges add their endpoints implicitly).
    pub fn add_node(&mut self, node: Location) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge between `a` and `b` labeled with `transport`.
    pub fn add_edge(&mut self, a: Location, b: Location, transport: Transport) {
        self.insert_label(a, b, transport);
        self.insert_label(b, a, transport);
    }

    fn insert_label(&mut self, from: Location, to: Location, transport: Transport) {
        let labels = self
            .adjacency
            .entry(from)
            .or_default()
            .entry(to)
            .or_default();
        if !labels.contains(&transport) {
            labels.push(transport);
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn contains_node(&self, node: Location) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All stations on the board.
    pub fn nodes(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }

    /// Stations reachable from `node` by one edge.
    pub fn adjacent_nodes(&self, node: Location) -> impl Iterator<Item = Location> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.keys().copied())
    }

    /// Transport labels on the edge a—b; empty if there is no edge.
    #[must_use]
    pub fn transports(&self, a: Location, b: Location) -> &[Transport] {
        self.adjacency
            .get(&a)
            .and_then(|neighbours| neighbours.get(&b))
            .map_or(&[], |labels| labels.as_slice())
    }
}
