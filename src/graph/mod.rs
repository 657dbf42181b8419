//! The transport graph collaborator.
//!
//! Locations are integer stations; edges carry a non-empty set of transport
//! labels, and each label dictates the ticket kind a move along that edge
//! consumes. The engine only ever asks two questions of the graph: which
//! nodes are adjacent to a location, and which transports label a given
//! edge.

pub mod board;

pub use board::{BoardGraph, Transport};
