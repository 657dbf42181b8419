//! Immutable game setup: reveal schedule plus the transport graph.

use crate::graph::BoardGraph;

/// The fixed material a game is played against: one reveal-schedule entry
/// per round (true = MrX's location is disclosed that round) and the board.
#[derive(Clone, Debug)]
pub struct GameSetup {
    schedule: Vec<bool>,
    graph: BoardGraph,
}

impl GameSetup {
    /// Create a new setup.
    ///
    /// # Panics
    ///
    /// Panics if the schedule is empty or the graph has no nodes. Both are
    /// configuration errors, not recoverable conditions.
    #[must_use]
    pub fn new(schedule: Vec<bool>, graph: BoardGraph) -> Self {
        assert!(!schedule.is_empty(), "reveal schedule must not be empty");
        assert!(!graph.is_empty(), "graph must have at least one node");
        Self { schedule, graph }
    }

    /// Number of rounds in the game.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.schedule.len()
    }

    /// Whether MrX's location is revealed at `round` (0-based).
    ///
    /// The round counter advances once per turn-slice, so late-game lookups
    /// can land past the schedule; those rounds are treated as hidden.
    #[must_use]
    pub fn reveal_at(&self, round: usize) -> bool {
        self.schedule.get(round).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn schedule(&self) -> &[bool] {
        &self.schedule
    }

    #[must_use]
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Location;
    use crate::graph::Transport;

    fn one_edge_graph() -> BoardGraph {
        let mut graph = BoardGraph::new();
        graph.add_edge(Location::new(1), Location::new(2), Transport::Taxi);
        graph
    }

    #[test]
    fn test_setup_basics() {
        let setup = GameSetup::new(vec![true, false, true], one_edge_graph());
        assert_eq!(setup.rounds(), 3);
        assert!(setup.reveal_at(0));
        assert!(!setup.reveal_at(1));
        assert!(setup.reveal_at(2));
    }

    #[test]
    fn test_reveal_past_schedule_is_hidden() {
        let setup = GameSetup::new(vec![true], one_edge_graph());
        assert!(!setup.reveal_at(5));
    }

    #[test]
    #[should_panic(expected = "reveal schedule must not be empty")]
    fn test_empty_schedule_panics() {
        GameSetup::new(vec![], one_edge_graph());
    }

    #[test]
    #[should_panic(expected = "graph must have at least one node")]
    fn test_empty_graph_panics() {
        GameSetup::new(vec![true], BoardGraph::new());
    }
}
