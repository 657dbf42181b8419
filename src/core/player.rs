//! Player: a piece, its current location, and its ticket book.
//!
//! Players are immutable value objects. Every ticket use or relocation
//! produces a new `Player`; chains like `player.use_ticket(t).at(dest)`
//! read as the move they describe.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::piece::Piece;
use super::ticket::{Ticket, TicketBook};

/// One participant's full state: identity, position, tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: Location,
    tickets: TicketBook,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub const fn new(piece: Piece, location: Location, tickets: TicketBook) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub const fn tickets(&self) -> TicketBook {
        self.tickets
    }

    /// Whether this player holds at least one `ticket`.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// Relocate to `location`.
    #[must_use]
    pub fn at(self, location: Location) -> Self {
        Self { location, ..self }
    }

    /// Deduct one `ticket`.
    ///
    /// # Panics
    ///
    /// Panics if none is held; see [`TicketBook::spend`].
    #[must_use]
    pub fn use_ticket(self, ticket: Ticket) -> Self {
        Self {
            tickets: self.tickets.spend(ticket),
            ..self
        }
    }

    /// Credit one `ticket` (a detective's spend recycling to MrX).
    #[must_use]
    pub fn give(self, ticket: Ticket) -> Self {
        Self {
            tickets: self.tickets.give(ticket),
            ..self
        }
    }
}
