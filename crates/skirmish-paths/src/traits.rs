use skirmish_core::{Board, Point};

/// A move out of a tile: where it lands and what it costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub to: Point,
    pub cost: f64,
}

/// Neighbour generation for area searches.
pub trait Expander {
    /// Append the steps out of `from` into `buf`. The caller clears `buf`
    /// before calling. Only on-board destinations should be pushed, and
    /// costs must be > 0.
    fn steps(&self, board: &Board, from: Point, buf: &mut Vec<Step>);
}
