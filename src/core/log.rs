//! MrX's travel log.
//!
//! One entry per MrX turn: the ticket he used and, on reveal rounds, where
//! he surfaced. Hidden entries carry no location at all, so the "a reveal
//! entry always has a real location" invariant lives in the type rather
//! than a sentinel value.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::ticket::Ticket;

/// One turn record in MrX's travel log.
///
/// Build entries with [`LogEntry::hidden`] or [`LogEntry::reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    ticket: Ticket,
    location: Option<Location>,
}

impl LogEntry {
    /// An entry for a hidden round: ticket only.
    #[must_use]
    pub const fn hidden(ticket: Ticket) -> Self {
        Self {
            ticket,
            location: None,
        }
    }

    /// An entry for a reveal round: ticket plus MrX's location.
    #[must_use]
    pub const fn reveal(ticket: Ticket, location: Location) -> Self {
        Self {
            ticket,
            location: Some(location),
        }
    }

    /// The ticket used this turn.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// MrX's location, present only on reveal rounds.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    #[must_use]
    pub const fn is_reveal(&self) -> bool {
        self.location.is_some()
    }
}

/// The append-only ordered sequence of MrX's turn records.
///
/// A persistent vector: appending builds a new log sharing structure with
/// the old one, so every historic state keeps its own frozen view.
pub type TravelLog = im::Vector<LogEntry>;
