//! Standard game material: the 24-round reveal schedule, stock ticket
//! allocations, and the start-location card decks with a seeded dealer.
//!
//! The board graph itself is venue data and is loaded by the embedding
//! application; everything else needed to set up a stock game lives here.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{Location, Ticket, TicketBook};

/// Rounds in a standard game.
pub const STANDARD_ROUNDS: usize = 24;

/// MrX's start-location card deck.
pub const MR_X_STARTS: [u16; 13] = [
    35, 45, 51, 71, 78, 104, 106, 127, 132, 146, 166, 170, 172,
];

/// The detectives' start-location card deck, disjoint from MrX's.
pub const DETECTIVE_STARTS: [u16; 14] = [
    26, 29, 50, 53, 91, 94, 103, 112, 117, 123, 138, 141, 155, 174,
];

/// The standard reveal schedule: MrX surfaces on rounds 3, 8, 13, 18
/// and 24 (1-based), hidden otherwise.
#[must_use]
pub fn standard_reveal_schedule() -> Vec<bool> {
    (1..=STANDARD_ROUNDS)
        .map(|round| matches!(round, 3 | 8 | 13 | 18 | 24))
        .collect()
}

/// MrX's stock ticket book.
#[must_use]
pub fn default_mr_x_tickets() -> TicketBook {
    TicketBook::empty()
        .with(Ticket::Taxi, 4)
        .with(Ticket::Bus, 3)
        .with(Ticket::Underground, 3)
        .with(Ticket::Secret, 5)
        .with(Ticket::Double, 2)
}

/// A detective's stock ticket book.
#[must_use]
pub fn default_detective_tickets() -> TicketBook {
    TicketBook::empty()
        .with(Ticket::Taxi, 11)
        .with(Ticket::Bus, 8)
        .with(Ticket::Underground, 4)
}

/// Seeded RNG for dealing start cards. Same seed, same deal.
pub struct DealRng {
    inner: ChaCha8Rng,
}

impl DealRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Deal start locations: one card off MrX's deck, `detective_count` cards
/// off the detectives' deck. The decks are disjoint, so no dealt pair can
/// collide.
///
/// # Panics
///
/// Panics if `detective_count` exceeds the detective deck.
#[must_use]
pub fn deal_starting_locations(
    rng: &mut DealRng,
    detective_count: usize,
) -> (Location, Vec<Location>) {
    assert!(
        detective_count <= DETECTIVE_STARTS.len(),
        "at most {} detectives can be dealt start cards",
        DETECTIVE_STARTS.len()
    );

    let mut x_deck = MR_X_STARTS;
    rng.shuffle(&mut x_deck);
    let mr_x = Location::new(x_deck[0]);

    let mut deck = DETECTIVE_STARTS;
    rng.shuffle(&mut deck);
    let detectives = deck[..detective_count]
        .iter()
        .map(|&id| Location::new(id))
        .collect();

    (mr_x, detectives)
}
