//! Moves: the actions a piece can take.
//!
//! A `Move` is either a single hop or MrX's double move (two hops paid for
//! with two travel tickets plus one Double ticket). Only MrX ever commences
//! a `DoubleMove`; the generator never offers one to a detective and the
//! engine treats a detective-submitted double as a caller bug.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::location::Location;
use super::piece::Piece;
use super::ticket::Ticket;

/// A one-hop move: spend `ticket`, travel from `source` to `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub mover: Piece,
    pub source: Location,
    pub ticket: Ticket,
    pub destination: Location,
}

/// MrX's two-hop move. Costs `ticket1`, `ticket2`, and one Double ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub mover: Piece,
    pub source: Location,
    pub ticket1: Ticket,
    pub destination1: Location,
    pub ticket2: Ticket,
    pub destination2: Location,
}

/// A complete move, single or double.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making this move.
    #[must_use]
    pub const fn mover(&self) -> Piece {
        match self {
            Move::Single(m) => m.mover,
            Move::Double(m) => m.mover,
        }
    }

    /// Where the move starts.
    #[must_use]
    pub const fn source(&self) -> Location {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// Where the mover ends up.
    #[must_use]
    pub const fn destination(&self) -> Location {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// Tickets consumed, in play order. A double move also burns one
    /// Double ticket, listed last.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Single(m) => SmallVec::from_slice(&[m.ticket]),
            Move::Double(m) => SmallVec::from_slice(&[m.ticket1, m.ticket2, Ticket::Double]),
        }
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}
