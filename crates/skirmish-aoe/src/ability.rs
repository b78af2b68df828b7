use skirmish_core::{Board, Point};
use skirmish_paths::Searcher;

use crate::shapes;
use crate::sight::LineOfSight;

/// The four area-of-effect shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AoeShape {
    /// A single tile, or a square for sizes above one.
    #[default]
    Square,
    Circle,
    Cone,
    Line,
}

/// The targeting part of an ability: which shape it covers, how big, and
/// which sight rules apply.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaOfEffect {
    pub shape: AoeShape,
    pub size: i32,
    /// Drop tiles that cannot be seen from the targeted tile.
    pub line_of_sight: bool,
    /// Lines end at the first gap or occupant.
    pub aoe_line_of_sight: bool,
}

impl Default for AreaOfEffect {
    fn default() -> Self {
        Self {
            shape: AoeShape::Square,
            size: 1,
            line_of_sight: false,
            aoe_line_of_sight: false,
        }
    }
}

impl AreaOfEffect {
    pub fn new(shape: AoeShape, size: i32) -> Self {
        Self {
            shape,
            size,
            ..Self::default()
        }
    }

    pub fn with_line_of_sight(mut self, line_of_sight: bool) -> Self {
        self.line_of_sight = line_of_sight;
        self
    }

    pub fn with_aoe_line_of_sight(mut self, aoe_line_of_sight: bool) -> Self {
        self.aoe_line_of_sight = aoe_line_of_sight;
        self
    }

    /// Positions hit when the ability targets `start` from `caster`.
    ///
    /// `caster` only matters for cones and lines; `searcher` only for
    /// circles.
    pub fn tiles(
        &self,
        board: &Board,
        searcher: &mut Searcher,
        sight: &impl LineOfSight,
        start: Point,
        caster: Point,
    ) -> Vec<Point> {
        let (size, los) = (self.size, self.line_of_sight);
        let tiles = match self.shape {
            AoeShape::Square => shapes::square(board, sight, start, size, los),
            AoeShape::Circle => shapes::circle(board, searcher, sight, start, size, los),
            AoeShape::Cone => shapes::cone(board, sight, start, caster, size, los),
            AoeShape::Line => {
                shapes::line(board, sight, start, caster, size, los, self.aoe_line_of_sight)
            }
        };
        log::trace!("{:?} of size {size} on {start}: {} tiles", self.shape, tiles.len());
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sight::Unobstructed;
    use skirmish_core::{BoardConfig, BoardLayout};

    #[test]
    fn dispatches_to_shapes() {
        let b = Board::build(&BoardLayout::grid(7, 7), BoardConfig::default()).unwrap();
        let mut s = Searcher::new();
        let start = Point::new(3, 3);
        let caster = Point::new(3, 2);
        let count = |aoe: AreaOfEffect, s: &mut Searcher| {
            aoe.tiles(&b, s, &Unobstructed, start, caster).len()
        };
        assert_eq!(count(AreaOfEffect::default(), &mut s), 1);
        assert_eq!(count(AreaOfEffect::new(AoeShape::Square, 3), &mut s), 9);
        assert_eq!(count(AreaOfEffect::new(AoeShape::Circle, 1), &mut s), 5);
        assert_eq!(count(AreaOfEffect::new(AoeShape::Cone, 2), &mut s), 4);
        assert_eq!(count(AreaOfEffect::new(AoeShape::Line, 3), &mut s), 3);
    }

    #[test]
    fn line_flags_are_forwarded() {
        let l = BoardLayout::parse(".a..").unwrap();
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        let mut s = Searcher::new();
        let aoe = AreaOfEffect::new(AoeShape::Line, 4);
        let start = Point::new(0, 0);
        let caster = Point::new(-1, 0);
        assert_eq!(aoe.tiles(&b, &mut s, &Unobstructed, start, caster).len(), 4);
        let stopped = aoe
            .with_aoe_line_of_sight(true)
            .tiles(&b, &mut s, &Unobstructed, start, caster);
        assert_eq!(stopped, vec![Point::new(0, 0), Point::new(1, 0)]);
    }
}
