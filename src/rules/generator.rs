//! Legal-move generation.
//!
//! Computes the complete, deduplicated move set for one piece against one
//! state snapshot. Rules:
//!
//! - Nobody may move onto a detective-occupied station.
//! - Every hop needs the edge's required ticket; MrX may substitute a
//!   Secret ticket for any hop.
//! - MrX's double move needs a Double ticket and at least two rounds left
//!   in the schedule; a repeated ticket kind needs two copies, and the
//!   secret uses implied by the pair must fit his Secret count. Detective
//!   occupancy is judged at pre-move positions for both hops.

use im::HashSet as ImHashSet;
use smallvec::SmallVec;

use crate::core::{DoubleMove, GameSetup, Location, Move, Piece, Player, SingleMove, Ticket};

fn occupied_by_detective(detectives: &[Player], location: Location) -> bool {
    detectives.iter().any(|d| d.location() == location)
}

/// All legal moves for MrX: singles (with Secret substitution) and, when
/// affordable, doubles.
#[must_use]
pub fn mr_x_moves(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &[Player],
    current_round: usize,
) -> ImHashSet<Move> {
    let mut moves = ImHashSet::new();
    let graph = setup.graph();
    let tickets = mr_x.tickets();
    let source = mr_x.location();

    for destination in graph.adjacent_nodes(source) {
        if occupied_by_detective(detectives, destination) {
            continue;
        }
        for transport in graph.transports(source, destination) {
            let required = transport.required_ticket();
            if tickets.has(required) {
                moves.insert(
                    SingleMove {
                        mover: mr_x.piece(),
                        source,
                        ticket: required,
                        destination,
                    }
                    .into(),
                );
            }
            // A Secret ticket covers any edge, independently of whether the
            // required-ticket move was also legal.
            if tickets.has(Ticket::Secret) {
                moves.insert(
                    SingleMove {
                        mover: mr_x.piece(),
                        source,
                        ticket: Ticket::Secret,
                        destination,
                    }
                    .into(),
                );
            }
        }
    }

    let remaining_rounds = setup.rounds().saturating_sub(current_round);
    if tickets.has(Ticket::Double) && remaining_rounds >= 2 {
        for first in graph.adjacent_nodes(source) {
            if occupied_by_detective(detectives, first) {
                continue;
            }
            for first_transport in graph.transports(source, first) {
                let first_tickets = step_tickets(tickets, first_transport.required_ticket());
                if first_tickets.is_empty() {
                    continue;
                }
                for second in graph.adjacent_nodes(first) {
                    // Detectives do not move between the two hops, so the
                    // same pre-move occupancy applies to both.
                    if occupied_by_detective(detectives, second) {
                        continue;
                    }
                    for second_transport in graph.transports(first, second) {
                        let second_tickets =
                            step_tickets(tickets, second_transport.required_ticket());
                        for &t1 in &first_tickets {
                            for &t2 in &second_tickets {
                                if t1 == t2 && tickets.count(t1) < 2 {
                                    continue;
                                }
                                let secrets_needed = u32::from(t1 == Ticket::Secret)
                                    + u32::from(t2 == Ticket::Secret);
                                if secrets_needed <= tickets.count(Ticket::Secret) {
                                    moves.insert(
                                        DoubleMove {
                                            mover: mr_x.piece(),
                                            source,
                                            ticket1: t1,
                                            destination1: first,
                                            ticket2: t2,
                                            destination2: second,
                                        }
                                        .into(),
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Ticket choices MrX has for one hop along an edge requiring `required`.
fn step_tickets(tickets: crate::core::TicketBook, required: Ticket) -> SmallVec<[Ticket; 2]> {
    let mut choices = SmallVec::new();
    if tickets.has(required) {
        choices.push(required);
    }
    if tickets.has(Ticket::Secret) && required != Ticket::Secret {
        choices.push(Ticket::Secret);
    }
    choices
}

/// All legal single moves for one detective.
#[must_use]
pub fn detective_moves(
    setup: &GameSetup,
    detective: &Player,
    detectives: &[Player],
) -> ImHashSet<Move> {
    let mut moves = ImHashSet::new();
    let graph = setup.graph();
    let tickets = detective.tickets();
    let source = detective.location();

    for destination in graph.adjacent_nodes(source) {
        let occupied_by_other = detectives
            .iter()
            .any(|other| other.piece() != detective.piece() && other.location() == destination);
        if occupied_by_other {
            continue;
        }
        for transport in graph.transports(source, destination) {
            let required = transport.required_ticket();
            if tickets.has(required) {
                moves.insert(
                    SingleMove {
                        mover: detective.piece(),
                        source,
                        ticket: required,
                        destination,
                    }
                    .into(),
                );
            }
        }
    }

    moves
}

/// Union of legal moves over the detectives still owing a move this
/// round-slice.
#[must_use]
pub fn detective_moves_in(
    setup: &GameSetup,
    detectives: &[Player],
    remaining: &ImHashSet<Piece>,
) -> ImHashSet<Move> {
    let mut moves = ImHashSet::new();
    for detective in detectives {
        if remaining.contains(&detective.piece()) {
            moves = moves.union(detective_moves(setup, detective, detectives));
        }
    }
    moves
}

/// Union of legal moves over all detectives, ignoring the remaining set.
/// Used only by the first-round stuck-detectives probe.
#[must_use]
pub fn detective_moves_all(setup: &GameSetup, detectives: &[Player]) -> ImHashSet<Move> {
    let mut moves = ImHashSet::new();
    for detective in detectives {
        moves = moves.union(detective_moves(setup, detective, detectives));
    }
    moves
}
