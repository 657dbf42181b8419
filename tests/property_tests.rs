//! Random playouts driven by proptest: structural invariants that must
//! hold after every single transition, whatever the move sequence.

use im::HashSet as ImHashSet;
use proptest::prelude::*;
use pursuit_engine::{
    BoardGraph, Detective, GameSetup, GameState, Location, Move, Piece, Player, Ticket, TicketBook,
    Transport,
};
use rustc_hash::FxHashSet;

fn loc(id: u16) -> Location {
    Location::new(id)
}

/// A 12-station ring with taxi edges, bus chords, one underground
/// diameter, and a ferry crossing.
fn ring_board() -> BoardGraph {
    let mut graph = BoardGraph::new();
    for i in 1..=12u16 {
        let next = if i == 12 { 1 } else { i + 1 };
        graph.add_edge(loc(i), loc(next), Transport::Taxi);
    }
    graph.add_edge(loc(1), loc(5), Transport::Bus);
    graph.add_edge(loc(5), loc(9), Transport::Bus);
    graph.add_edge(loc(9), loc(1), Transport::Bus);
    graph.add_edge(loc(3), loc(9), Transport::Underground);
    graph.add_edge(loc(2), loc(8), Transport::Ferry);
    graph
}

fn start_state() -> GameState {
    let schedule = vec![
        false, false, true, false, false, false, false, true, false, false,
    ];
    GameState::new(
        GameSetup::new(schedule, ring_board()),
        Player::new(
            Piece::MrX,
            loc(1),
            TicketBook::empty()
                .with(Ticket::Taxi, 4)
                .with(Ticket::Bus, 3)
                .with(Ticket::Underground, 2)
                .with(Ticket::Secret, 3)
                .with(Ticket::Double, 2),
        ),
        vec![
            Player::new(
                Piece::Detective(Detective::Red),
                loc(4),
                TicketBook::empty()
                    .with(Ticket::Taxi, 5)
                    .with(Ticket::Bus, 3)
                    .with(Ticket::Underground, 2),
            ),
            Player::new(
                Piece::Detective(Detective::Green),
                loc(10),
                TicketBook::empty()
                    .with(Ticket::Taxi, 5)
                    .with(Ticket::Bus, 3)
                    .with(Ticket::Underground, 2),
            ),
        ],
    )
}

/// Deterministic pick: sort the set by debug formatting, then index.
fn pick_move(moves: &ImHashSet<Move>, choice: usize) -> Move {
    let mut sorted: Vec<Move> = moves.iter().copied().collect();
    sorted.sort_by_key(|m| format!("{m:?}"));
    sorted[choice % sorted.len()]
}

/// Total tickets held across all players.
fn total_tickets(state: &GameState) -> u32 {
    state
        .pieces()
        .iter()
        .filter_map(|&p| state.tickets_of(p))
        .map(|book| book.total())
        .sum()
}

/// Tickets a move destroys: MrX spends vanish, detective spends recycle.
fn tickets_destroyed(mv: &Move) -> u32 {
    match mv.mover() {
        Piece::MrX => mv.tickets().len() as u32,
        Piece::Detective(_) => 0,
    }
}

fn detective_locations(state: &GameState) -> Vec<Location> {
    [Detective::Red, Detective::Green]
        .iter()
        .filter_map(|&d| state.detective_location(d))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn playout_invariants(choices in proptest::collection::vec(0usize..1024, 40)) {
        let mut state = start_state();

        for &choice in &choices {
            if state.is_terminal() {
                break;
            }

            let moves = state.available_moves();
            prop_assert!(!moves.is_empty(), "non-terminal state offered no moves");
            let mv = pick_move(&moves, choice);

            let before_total = total_tickets(&state);
            let before_log = state.travel_log().len();
            let next = state.advance(&mv);

            // Ticket conservation: MrX spends vanish from the system,
            // detective spends recycle to MrX.
            prop_assert_eq!(
                total_tickets(&next),
                before_total - tickets_destroyed(&mv)
            );

            // The log grows only on MrX moves and never shrinks.
            let grew = next.travel_log().len() - before_log;
            match mv {
                Move::Single(m) if m.mover.is_mr_x() => prop_assert_eq!(grew, 1),
                Move::Double(_) => prop_assert_eq!(grew, 2),
                _ => prop_assert_eq!(grew, 0),
            }

            // Detectives never stack.
            let locations = detective_locations(&next);
            let unique: FxHashSet<Location> = locations.iter().copied().collect();
            prop_assert_eq!(unique.len(), locations.len());

            // Winner exclusivity: empty while running, a full side once
            // decided, and a decided game offers no moves.
            if next.is_terminal() {
                let winner = next.winner();
                let detective_side: ImHashSet<Piece> = [
                    Piece::Detective(Detective::Red),
                    Piece::Detective(Detective::Green),
                ]
                .into_iter()
                .collect();
                prop_assert!(
                    winner == &ImHashSet::unit(Piece::MrX) || winner == &detective_side
                );
                prop_assert!(next.available_moves().is_empty());
            } else {
                prop_assert!(next.winner().is_empty());
            }

            // Round counter moves by at most one slice per transition.
            let delta = next.current_round() - state.current_round();
            prop_assert!(delta <= 1);

            state = next;
        }
    }

    #[test]
    fn snapshots_are_never_mutated(choice in 0usize..1024) {
        let state = start_state();
        let round = state.current_round();
        let log_len = state.travel_log().len();
        let total = total_tickets(&state);

        let mv = pick_move(&state.available_moves(), choice);
        let _ = state.advance(&mv);

        prop_assert_eq!(state.current_round(), round);
        prop_assert_eq!(state.travel_log().len(), log_len);
        prop_assert_eq!(total_tickets(&state), total);
    }
}
