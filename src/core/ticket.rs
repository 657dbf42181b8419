//! Ticket kinds and the per-player ticket ledger.
//!
//! ## TicketBook
//!
//! An immutable ledger mapping each ticket kind to a count. `spend` and
//! `give` return a new book; nothing mutates in place. Detectives spend
//! tickets into MrX's book (tickets recycle), while MrX's own spends are
//! gone for good.

use serde::{Deserialize, Serialize};

/// A ticket kind. Detectives only ever hold the first three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// All ticket kinds.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The basic kinds a detective may hold.
    pub const DETECTIVE_KINDS: [Ticket; 3] = [Ticket::Taxi, Ticket::Bus, Ticket::Underground];

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Immutable per-player ticket ledger.
///
/// Backed by a fixed array indexed by ticket kind, so a book is `Copy` and
/// comparisons are cheap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketBook {
    counts: [u32; 5],
}

impl TicketBook {
    /// A book with no tickets at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { counts: [0; 5] }
    }

    /// Build a book from (kind, count) pairs. Repeated kinds accumulate.
    pub fn new(counts: impl IntoIterator<Item = (Ticket, u32)>) -> Self {
        let mut book = Self::empty();
        for (ticket, count) in counts {
            book.counts[ticket.index()] += count;
        }
        book
    }

    /// Set the count for one kind, builder-style.
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// How many tickets of `ticket` this book holds.
    #[must_use]
    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Whether at least one ticket of `ticket` is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Total tickets across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Deduct one ticket of `ticket`, returning the new book.
    ///
    /// # Panics
    ///
    /// Panics if the count is zero. The move generator only ever offers
    /// moves the holder can afford, so hitting this is an internal
    /// invariant violation, not a runtime condition.
    #[must_use]
    pub fn spend(mut self, ticket: Ticket) -> Self {
        assert!(self.has(ticket), "cannot spend {ticket:?}: none held");
        self.counts[ticket.index()] -= 1;
        self
    }

    /// Credit one ticket of `ticket`, returning the new book. Never fails.
    #[must_use]
    pub fn give(mut self, ticket: Ticket) -> Self {
        self.counts[ticket.index()] += 1;
        self
    }
}
