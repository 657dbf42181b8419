//! Core game types: pieces, tickets, players, moves, log, setup, and state.
//!
//! Everything here is an immutable value: ticket spends, relocations, and
//! full game transitions all return new values rather than mutating.

pub mod location;
pub mod log;
pub mod moves;
pub mod piece;
pub mod player;
pub mod setup;
pub mod state;
pub mod ticket;

pub use location::Location;
pub use log::{LogEntry, TravelLog};
pub use moves::{DoubleMove, Move, SingleMove};
pub use piece::{Detective, Piece};
pub use player::Player;
pub use setup::GameSetup;
pub use state::GameState;
pub use ticket::{Ticket, TicketBook};
