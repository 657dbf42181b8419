//! # pursuit-engine
//!
//! Rules engine for a hidden-movement pursuit board game: one evading
//! player (MrX) moves secretly across a transport graph while a small team
//! of detectives tries to land on his location before the reveal schedule
//! runs out.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every transition builds a brand-new
//!    `GameState`; past states stay valid frozen views, so history and
//!    replay need no copying. Persistent `im` collections make the
//!    snapshots O(1) to clone.
//!
//! 2. **Tagged sum types over visitors**: `Piece` and `Move` are enums with
//!    exhaustive matching at every consumer, so the compiler checks case
//!    coverage in the generator and the transition function.
//!
//! 3. **Pure rules**: move generation and win evaluation are pure functions
//!    of state components. The cached per-piece move map is recomputed at
//!    construction and never mutated afterward.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, players, the travel log, moves, setup, and
//!   the `GameState` aggregate with its `advance` transition
//! - `graph`: the labeled transport graph and its adjacency queries
//! - `rules`: legal-move generation and win-condition evaluation
//! - `model`: session wrapper with observer notification
//! - `standard`: standard game material (schedule, tickets, start cards)

pub mod core;
pub mod graph;
pub mod model;
pub mod rules;
pub mod standard;

// Re-export commonly used types
pub use crate::core::{
    Detective, GameSetup, GameState, Location, LogEntry, Piece, Player, TicketBook, TravelLog,
};
pub use crate::core::{DoubleMove, Move, SingleMove, Ticket};

pub use crate::graph::{BoardGraph, Transport};

pub use crate::model::{Event, Model, Observer};
