//! Observable wrapper around a running game.
//!
//! `Model` owns the current `GameState` and a registry of observers. Each
//! accepted move swaps the state for its successor and notifies every
//! observer with the new state and an event tag, in registration order.
//! Because states are immutable snapshots, observers may hold onto the
//! state they are handed indefinitely.

use std::rc::Rc;

use crate::core::{GameSetup, GameState, Move, Player};

/// What a notification is reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A move was accepted and the game continues.
    MoveMade,
    /// A move was accepted and it decided the game.
    GameOver,
}

/// A recipient of model-change notifications.
pub trait Observer {
    fn on_model_changed(&self, state: &GameState, event: Event);
}

/// The observable game model.
pub struct Model {
    state: GameState,
    observers: Vec<Rc<dyn Observer>>,
}

impl Model {
    /// Start a fresh game with no observers.
    ///
    /// # Panics
    ///
    /// Panics on the same configuration errors as [`GameState::new`].
    #[must_use]
    pub fn new(setup: GameSetup, mr_x: Player, detectives: Vec<Player>) -> Self {
        Self::from_state(GameState::new(setup, mr_x, detectives))
    }

    /// Wrap an existing state (resuming a saved or mid-game position).
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Register an observer. Notification order is registration order.
    ///
    /// # Panics
    ///
    /// Panics if `observer` (the same allocation) is already registered.
    pub fn register_observer(&mut self, observer: Rc<dyn Observer>) {
        assert!(
            !self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)),
            "observer already registered"
        );
        self.observers.push(observer);
    }

    /// Unregister a previously registered observer.
    ///
    /// # Panics
    ///
    /// Panics if `observer` is not registered.
    pub fn unregister_observer(&mut self, observer: &Rc<dyn Observer>) {
        let index = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .unwrap_or_else(|| panic!("observer not registered"));
        self.observers.remove(index);
    }

    #[must_use]
    pub fn observers(&self) -> &[Rc<dyn Observer>] {
        &self.observers
    }

    /// Apply `mv` to the current state and notify all observers.
    ///
    /// # Panics
    ///
    /// Panics if the game is already decided; see [`GameState::advance`].
    pub fn choose_move(&mut self, mv: &Move) {
        let next = self.state.advance(mv);
        let event = if next.winner().is_empty() {
            Event::MoveMade
        } else {
            Event::GameOver
        };
        self.state = next;
        for observer in &self.observers {
            observer.on_model_changed(&self.state, event);
        }
    }
}
