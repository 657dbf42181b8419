//! Game rules: legal-move generation and win-condition evaluation.
//!
//! Both are pure functions of state components. `GameState` calls them at
//! construction to populate its cached move map and winner set; they never
//! see or touch mutable state.

pub mod generator;
pub mod winner;
