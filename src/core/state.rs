//! The immutable game-state aggregate and its transition function.
//!
//! ## Snapshots
//!
//! A `GameState` is a frozen snapshot: `advance` builds a brand-new state
//! and never touches the old one, so any previously captured reference
//! stays a valid view (history and replay come for free). The `im`
//! collections and the shared `Arc<GameSetup>` make snapshots O(1) to
//! clone.
//!
//! ## Turn sequencing
//!
//! `remaining` holds the pieces still owing a move this round-slice:
//! exactly `{MrX}` on MrX's slice, a subset of the detective pieces on
//! theirs. The round counter advances once per slice. After each move the
//! shared tail logic drops move-less detectives from `remaining` (judged
//! against the pre-move cached move map), flips the slice when it empties,
//! and folds the win evaluation into construction of the successor.

use std::sync::Arc;

use im::{HashMap as ImHashMap, HashSet as ImHashSet};
use rustc_hash::FxHashSet;

use super::log::{LogEntry, TravelLog};
use super::moves::{DoubleMove, Move, SingleMove};
use super::piece::{Detective, Piece};
use super::player::Player;
use super::setup::GameSetup;
use super::ticket::{Ticket, TicketBook};
use crate::core::Location;
use crate::rules::{generator, winner};

/// A complete, immutable game state.
#[derive(Clone, Debug)]
pub struct GameState {
    setup: Arc<GameSetup>,
    mr_x: Player,
    detectives: Vec<Player>,
    remaining: ImHashSet<Piece>,
    log: TravelLog,
    current_round: usize,
    winner: ImHashSet<Piece>,
    /// Legal moves per non-eliminated piece; empty once a winner is set.
    moves: ImHashMap<Piece, ImHashSet<Move>>,
}

impl GameState {
    /// Create the initial state: round 0, empty log, MrX to move.
    ///
    /// # Panics
    ///
    /// Panics on configuration errors: `mr_x` not carrying the MrX piece, a
    /// detective entry that is not a detective piece, duplicate detective
    /// pieces or locations, or a detective holding Secret or Double
    /// tickets.
    #[must_use]
    pub fn new(setup: GameSetup, mr_x: Player, detectives: Vec<Player>) -> Self {
        assert!(
            mr_x.piece().is_mr_x(),
            "the evading player must carry the MrX piece"
        );
        Self::build(
            Arc::new(setup),
            mr_x,
            detectives,
            0,
            TravelLog::new(),
            ImHashSet::new(),
            ImHashSet::unit(Piece::MrX),
        )
    }

    /// Construct a state, validate it, and resolve its winner and move map.
    ///
    /// When `winner` is already non-empty (a short-circuit capture or
    /// schedule exhaustion), the move map is empty and no evaluation runs.
    /// Otherwise the move map is built and the Win Evaluator runs; a
    /// winning result freezes the state with an empty move map. The whole
    /// step is deterministic and idempotent in its inputs.
    fn build(
        setup: Arc<GameSetup>,
        mr_x: Player,
        detectives: Vec<Player>,
        current_round: usize,
        log: TravelLog,
        winner: ImHashSet<Piece>,
        remaining: ImHashSet<Piece>,
    ) -> Self {
        let mut seen_locations = FxHashSet::default();
        let mut seen_pieces = FxHashSet::default();
        for detective in &detectives {
            assert!(
                detective.piece().is_detective(),
                "detective list must hold detective pieces"
            );
            assert!(
                !detective.has(Ticket::Secret) && !detective.has(Ticket::Double),
                "detectives cannot hold Secret or Double tickets"
            );
            assert!(
                seen_pieces.insert(detective.piece()),
                "duplicate detective piece"
            );
            assert!(
                seen_locations.insert(detective.location()),
                "two detectives share a location"
            );
        }

        let mut state = Self {
            setup,
            mr_x,
            detectives,
            remaining,
            log,
            current_round,
            winner,
            moves: ImHashMap::new(),
        };

        if state.winner.is_empty() {
            state.moves = state.build_moves_map();
            let resolved = winner::evaluate(
                &state.setup,
                &state.mr_x,
                &state.detectives,
                &state.remaining,
                &state.log,
                state.current_round,
            );
            if !resolved.is_empty() {
                state.winner = resolved;
                state.moves = ImHashMap::new();
            }
        }

        state
    }

    /// Legal moves per piece: MrX always, detectives only while they are in
    /// the remaining set.
    fn build_moves_map(&self) -> ImHashMap<Piece, ImHashSet<Move>> {
        let mut map = ImHashMap::new();
        map.insert(
            Piece::MrX,
            generator::mr_x_moves(&self.setup, &self.mr_x, &self.detectives, self.current_round),
        );
        for detective in &self.detectives {
            if self.remaining.contains(&detective.piece()) {
                map.insert(
                    detective.piece(),
                    generator::detective_moves(&self.setup, detective, &self.detectives),
                );
            }
        }
        map
    }

    // === Read accessors ===

    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// All participating pieces: MrX first, then the detectives in order.
    #[must_use]
    pub fn pieces(&self) -> Vec<Piece> {
        std::iter::once(Piece::MrX)
            .chain(self.detectives.iter().map(Player::piece))
            .collect()
    }

    /// Pieces still owing a move this round-slice.
    #[must_use]
    pub fn remaining(&self) -> &ImHashSet<Piece> {
        &self.remaining
    }

    #[must_use]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// MrX's travel log.
    #[must_use]
    pub fn travel_log(&self) -> &TravelLog {
        &self.log
    }

    /// The winning pieces: empty while the game runs, otherwise exactly the
    /// full detective set or the MrX singleton.
    #[must_use]
    pub fn winner(&self) -> &ImHashSet<Piece> {
        &self.winner
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.winner.is_empty()
    }

    /// A detective's current location, if that detective is in the game.
    #[must_use]
    pub fn detective_location(&self, detective: Detective) -> Option<Location> {
        self.detectives
            .iter()
            .find(|p| p.piece() == Piece::Detective(detective))
            .map(Player::location)
    }

    /// The ticket book of `piece`, if that piece is in the game. MrX's
    /// location stays hidden, but his ticket counts are public.
    #[must_use]
    pub fn tickets_of(&self, piece: Piece) -> Option<TicketBook> {
        self.find_player(piece).map(Player::tickets)
    }

    /// Legal moves for the current turn-slice: MrX's set on his slice, the
    /// union over remaining detectives on theirs. Empty once terminal.
    #[must_use]
    pub fn available_moves(&self) -> ImHashSet<Move> {
        if self.is_terminal() {
            return ImHashSet::new();
        }
        if self.mr_x_turn() {
            self.available_moves_for(Piece::MrX)
        } else {
            let mut union = ImHashSet::new();
            for detective in &self.detectives {
                if self.remaining.contains(&detective.piece()) {
                    union = union.union(self.available_moves_for(detective.piece()));
                }
            }
            union
        }
    }

    /// Legal moves for one piece. Empty once terminal.
    #[must_use]
    pub fn available_moves_for(&self, piece: Piece) -> ImHashSet<Move> {
        if self.is_terminal() {
            return ImHashSet::new();
        }
        self.moves.get(&piece).cloned().unwrap_or_default()
    }

    fn find_player(&self, piece: Piece) -> Option<&Player> {
        if piece.is_mr_x() {
            return Some(&self.mr_x);
        }
        self.detectives.iter().find(|p| p.piece() == piece)
    }

    fn mr_x_turn(&self) -> bool {
        self.remaining.contains(&Piece::MrX)
    }

    // === Transition ===

    /// Apply an accepted move, producing the successor state.
    ///
    /// # Panics
    ///
    /// Panics if the game is already decided, if a detective submits a
    /// double move, or if the mover is unknown — all caller bugs: the move
    /// generator is the only sanctioned source of moves.
    #[must_use]
    pub fn advance(&self, mv: &Move) -> GameState {
        assert!(!self.is_terminal(), "cannot advance a finished game");
        debug_assert!(
            self.available_moves_for(mv.mover()).contains(mv),
            "move was not offered by the generator"
        );

        match mv.mover() {
            Piece::MrX => match mv {
                Move::Single(m) => self.advance_mr_x_single(m),
                Move::Double(m) => self.advance_mr_x_double(m),
            },
            Piece::Detective(_) => match mv {
                Move::Single(m) => self.advance_detective(m),
                Move::Double(_) => panic!("detectives cannot make double moves"),
            },
        }
    }

    fn advance_mr_x_single(&self, m: &SingleMove) -> GameState {
        let updated_mr_x = self.mr_x.use_ticket(m.ticket).at(m.destination);

        let reveal = self.setup.reveal_at(self.current_round);
        let mut log = self.log.clone();
        log.push_back(log_entry(m.ticket, m.destination, reveal));

        // Schedule exhaustion ends the game on the spot, before any round
        // advancement.
        if log.len() >= self.setup.rounds() {
            return Self::build(
                Arc::clone(&self.setup),
                updated_mr_x,
                self.detectives.clone(),
                self.current_round,
                log,
                winner::mr_x_set(),
                self.remaining.clone(),
            );
        }

        self.next_state(updated_mr_x, self.detectives.clone(), log, self.remaining.clone())
    }

    fn advance_mr_x_double(&self, m: &DoubleMove) -> GameState {
        let updated_mr_x = self
            .mr_x
            .use_ticket(m.ticket1)
            .use_ticket(m.ticket2)
            .use_ticket(Ticket::Double)
            .at(m.destination1)
            .at(m.destination2);

        // One reveal decision per round: both halves of the double move use
        // the flag at the current round index.
        let reveal = self.setup.reveal_at(self.current_round);
        let mut log = self.log.clone();
        log.push_back(log_entry(m.ticket1, m.destination1, reveal));
        log.push_back(log_entry(m.ticket2, m.destination2, reveal));

        if log.len() >= self.setup.rounds() {
            return Self::build(
                Arc::clone(&self.setup),
                updated_mr_x,
                self.detectives.clone(),
                self.current_round,
                log,
                winner::mr_x_set(),
                self.remaining.clone(),
            );
        }

        self.next_state(updated_mr_x, self.detectives.clone(), log, self.remaining.clone())
    }

    fn advance_detective(&self, m: &SingleMove) -> GameState {
        let piece = m.mover;
        let detective = self
            .find_player(piece)
            .copied()
            .unwrap_or_else(|| panic!("unknown detective piece {piece}"));

        let updated_detective = detective.use_ticket(m.ticket).at(m.destination);
        // Spent detective tickets recycle to MrX.
        let updated_mr_x = self.mr_x.give(m.ticket);

        let new_remaining = self.remaining.without(&piece);
        let detectives: Vec<Player> = self
            .detectives
            .iter()
            .map(|d| {
                if d.piece() == piece {
                    updated_detective
                } else {
                    *d
                }
            })
            .collect();

        // Capture ends the game on the spot.
        if updated_detective.location() == self.mr_x.location() {
            let winning = winner::detective_pieces(&detectives);
            return Self::build(
                Arc::clone(&self.setup),
                updated_mr_x,
                detectives,
                self.current_round,
                self.log.clone(),
                winning,
                new_remaining,
            );
        }

        self.next_state(updated_mr_x, detectives, self.log.clone(), new_remaining)
    }

    /// Shared round-advancement tail: filter `remaining`, flip the slice
    /// when it empties, and build the evaluated successor.
    fn next_state(
        &self,
        mr_x: Player,
        detectives: Vec<Player>,
        log: TravelLog,
        remaining: ImHashSet<Piece>,
    ) -> GameState {
        // A detective with no moves left has implicitly passed. Judged
        // against this (pre-move) state's cached map.
        let mut filtered: ImHashSet<Piece> = remaining
            .iter()
            .filter(|&p| self.moves.get(p).is_some_and(|set| !set.is_empty()))
            .copied()
            .collect();

        let mut next_round = self.current_round;
        if self.mr_x_turn() {
            // MrX's slice resolved: hand the round to the full detective set.
            next_round += 1;
            filtered = detectives.iter().map(Player::piece).collect();
        } else if filtered.is_empty() {
            next_round += 1;
            filtered = ImHashSet::unit(Piece::MrX);
        }

        Self::build(
            Arc::clone(&self.setup),
            mr_x,
            detectives,
            next_round,
            log,
            ImHashSet::new(),
            filtered,
        )
    }
}

fn log_entry(ticket: Ticket, destination: Location, reveal: bool) -> LogEntry {
    if reveal {
        LogEntry::reveal(ticket, destination)
    } else {
        LogEntry::hidden(ticket)
    }
}
