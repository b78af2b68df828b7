//! Error types for board construction and topology edits.

use std::fmt;

use crate::geom::Point;

/// Errors arising while building or editing a [`Board`](crate::Board).
///
/// Lookup misses during queries are not errors: they surface as `None` or
/// empty results.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Two tiles claim the same position.
    DuplicateKey(Point),
    /// A link between these two tiles already exists.
    DuplicateLink { a: Point, b: Point },
    /// A link was requested from a tile to itself.
    SelfLink(Point),
    /// An operation referenced a position with no tile.
    TileNotFound(Point),
    /// Move costs must be at least 1.
    InvalidMoveCost { pos: Point, cost: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(p) => write!(f, "a tile already exists at {p}"),
            Self::DuplicateLink { a, b } => write!(f, "tiles {a} and {b} are already linked"),
            Self::SelfLink(p) => write!(f, "cannot link tile {p} to itself"),
            Self::TileNotFound(p) => write!(f, "no tile at {p}"),
            Self::InvalidMoveCost { pos, cost } => {
                write!(f, "tile {pos}: move cost must be >= 1, got {cost}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
