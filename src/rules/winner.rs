//! Win-condition evaluation.
//!
//! A pure function from a candidate state to the (possibly empty) winning
//! piece set. The checks fire in strict priority order:
//!
//! 1. capture (a detective shares MrX's location) — detectives win;
//! 2. schedule exhaustion (travel log as long as the schedule) — MrX wins;
//! 3. detectives immobilized — MrX wins;
//! 4. MrX immobilized — detectives win.
//!
//! When 3 and 4 would both fire on the same state, MrX-stuck wins out:
//! a boxed-in MrX loses even if the detectives could not have moved next.

use im::HashSet as ImHashSet;

use crate::core::{GameSetup, Piece, Player, Ticket, TravelLog};
use crate::rules::generator;

/// Evaluate the winner of a candidate state. Empty set = game continues.
#[must_use]
pub fn evaluate(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &[Player],
    remaining: &ImHashSet<Piece>,
    log: &TravelLog,
    current_round: usize,
) -> ImHashSet<Piece> {
    // 1. Capture overrides every structural check.
    if detectives.iter().any(|d| d.location() == mr_x.location()) {
        return detective_pieces(detectives);
    }

    // 2. MrX has survived the full schedule.
    if log.len() >= setup.rounds() {
        return mr_x_set();
    }

    let mr_x_turn = remaining.contains(&Piece::MrX);

    let mut detectives_stuck = false;
    if !mr_x_turn && generator::detective_moves_in(setup, detectives, remaining).is_empty() {
        detectives_stuck = true;
    }
    if all_out_of_basic_tickets(detectives) {
        detectives_stuck = true;
    }
    // First round only: probe all detectives regardless of the remaining set.
    if current_round == 0 && generator::detective_moves_all(setup, detectives).is_empty() {
        detectives_stuck = true;
    }

    let mut mr_x_stuck = false;
    if mr_x_turn && generator::mr_x_moves(setup, mr_x, detectives, current_round).is_empty() {
        mr_x_stuck = true;
    }
    if boxed_in(setup, mr_x, detectives) {
        mr_x_stuck = true;
    }

    if mr_x_stuck {
        return detective_pieces(detectives);
    }
    if detectives_stuck {
        return mr_x_set();
    }

    ImHashSet::new()
}

/// Every detective holds zero Taxi, Bus, and Underground tickets.
/// (Secret and Double are structurally always zero for detectives.)
fn all_out_of_basic_tickets(detectives: &[Player]) -> bool {
    detectives
        .iter()
        .all(|d| Ticket::DETECTIVE_KINDS.iter().all(|&t| !d.has(t)))
}

/// Every node adjacent to MrX is detective-occupied, tickets disregarded.
fn boxed_in(setup: &GameSetup, mr_x: &Player, detectives: &[Player]) -> bool {
    setup
        .graph()
        .adjacent_nodes(mr_x.location())
        .all(|node| detectives.iter().any(|d| d.location() == node))
}

/// The full detective piece set (the only detective-side winner value).
#[must_use]
pub fn detective_pieces(detectives: &[Player]) -> ImHashSet<Piece> {
    detectives.iter().map(Player::piece).collect()
}

/// The MrX singleton winner set.
#[must_use]
pub fn mr_x_set() -> ImHashSet<Piece> {
    ImHashSet::unit(Piece::MrX)
}
