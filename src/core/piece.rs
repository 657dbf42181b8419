//! Piece identity: MrX and the coloured detectives.
//!
//! A `Piece` is a pure identity tag. It carries no mutable data and is used
//! as a key everywhere a participant needs naming: the remaining set, the
//! winner set, and the per-piece legal-move cache.

use serde::{Deserialize, Serialize};

/// The five detective colours fixed by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Detective {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Detective {
    /// All detective colours, in play order.
    pub const ALL: [Detective; 5] = [
        Detective::Red,
        Detective::Green,
        Detective::Blue,
        Detective::White,
        Detective::Yellow,
    ];

    /// The HTML colour hex of this detective's counter.
    #[must_use]
    pub const fn web_colour(self) -> &'static str {
        match self {
            Detective::Red => "#f00",
            Detective::Green => "#0f0",
            Detective::Blue => "#00f",
            Detective::White => "#fff",
            Detective::Yellow => "#ff0",
        }
    }
}

impl std::fmt::Display for Detective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A participant identity: the single MrX or one coloured detective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Piece {
    MrX,
    Detective(Detective),
}

impl Piece {
    #[must_use]
    pub const fn is_detective(self) -> bool {
        matches!(self, Piece::Detective(_))
    }

    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        !self.is_detective()
    }

    /// The HTML colour hex of this piece's counter.
    #[must_use]
    pub const fn web_colour(self) -> &'static str {
        match self {
            Piece::MrX => "#000",
            Piece::Detective(d) => d.web_colour(),
        }
    }
}

impl From<Detective> for Piece {
    fn from(detective: Detective) -> Self {
        Piece::Detective(detective)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::MrX => write!(f, "MrX"),
            Piece::Detective(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_predicates() {
        assert!(Piece::MrX.is_mr_x());
        assert!(!Piece::MrX.is_detective());

        let red = Piece::Detective(Detective::Red);
        assert!(red.is_detective());
        assert!(!red.is_mr_x());
    }

    #[test]
    fn test_web_colours() {
        assert_eq!(Piece::MrX.web_colour(), "#000");
        assert_eq!(Piece::Detective(Detective::White).web_colour(), "#fff");
        assert_eq!(Detective::Green.web_colour(), "#0f0");
    }

    #[test]
    fn test_all_detectives_distinct() {
        for (i, a) in Detective::ALL.iter().enumerate() {
            for b in &Detective::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::MrX), "MrX");
        assert_eq!(format!("{}", Piece::Detective(Detective::Blue)), "Blue");
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::Detective(Detective::Yellow);
        let json = serde_json::to_string(&piece).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, back);
    }
}
