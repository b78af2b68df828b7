//! Line of sight between tiles.
//!
//! Shapes only ask one question, "can `to` be seen from `from`", through the
//! [`LineOfSight`] trait. Hosts with their own visibility model implement it
//! (closures work too); [`OccupantSight`] is a board-only answer based on
//! occupants that block sight.

use skirmish_core::{Board, Point};

/// Visibility test used by the shape generators' post-filter.
pub trait LineOfSight {
    /// Whether `to` is visible from `from`. Both are on the board.
    fn has_line_of_sight(&self, board: &Board, from: Point, to: Point) -> bool;
}

impl<F> LineOfSight for F
where
    F: Fn(&Board, Point, Point) -> bool,
{
    fn has_line_of_sight(&self, board: &Board, from: Point, to: Point) -> bool {
        self(board, from, to)
    }
}

/// Everything is visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobstructed;

impl LineOfSight for Unobstructed {
    fn has_line_of_sight(&self, _board: &Board, _from: Point, _to: Point) -> bool {
        true
    }
}

/// Sight blocked by occupants with `blocks_sight` set.
///
/// The ray is the Bresenham line from `from` to `to`. Only the tiles strictly
/// between the endpoints can block, so a pillar is itself visible. With
/// `holes_block_sight`, positions without a tile block too.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupantSight {
    pub holes_block_sight: bool,
}

impl OccupantSight {
    pub fn new(holes_block_sight: bool) -> Self {
        Self { holes_block_sight }
    }
}

impl LineOfSight for OccupantSight {
    fn has_line_of_sight(&self, board: &Board, from: Point, to: Point) -> bool {
        let ray = bresenham(from, to);
        let inner = ray.len().saturating_sub(1);
        ray.iter().take(inner).skip(1).all(|&p| match board.get_tile(p) {
            Some(tile) => !tile.content().is_some_and(|o| o.blocks_sight),
            None => !self.holes_block_sight,
        })
    }
}

/// Integer points of the line from `from` to `to`, both included.
pub fn bresenham(from: Point, to: Point) -> Vec<Point> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = (to.x - from.x).signum();
    let sy = (to.y - from.y).signum();
    let mut err = dx + dy;
    let mut p = from;
    let mut line = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        line.push(p);
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
    line
}
