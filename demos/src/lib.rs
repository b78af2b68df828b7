//! Host-side demo for the skirmish crates.
//!
//! Builds a board from an ASCII layout, scatters a few extra obstacles,
//! tracks which tile the pointer hovers, and renders queries (move range,
//! path, area of effect) as an ASCII overlay.

use std::fmt::Write as _;

use rand::{RngExt, SeedableRng};
use skirmish_aoe::{AreaOfEffect, OccupantSight};
use skirmish_core::{Board, BoardConfig, BoardError, BoardLayout, LayoutError, Occupant, Point};
use skirmish_paths::{AreaQuery, Searcher};

pub const ARENA: &str = "\
..........
..#....~~.
..#....~~.
.......   
...x......
.@........";

/// Side of a tile in world units.
pub const TILE_SIZE: f32 = 1.0;

// ---------------------------------------------------------------------------
// Hover
// ---------------------------------------------------------------------------

/// Map a world position to the tile under it, if any.
///
/// Tile `(x, y)` covers `[x, x + 1) * TILE_SIZE` on both axes.
pub fn resolve_hovered_tile(board: &Board, world_pos: (f32, f32)) -> Option<Point> {
    let (wx, wy) = world_pos;
    if !wx.is_finite() || !wy.is_finite() {
        return None;
    }
    let p = Point::new(
        (wx / TILE_SIZE).floor() as i32,
        (wy / TILE_SIZE).floor() as i32,
    );
    board.contains(p).then_some(p)
}

/// The hovered tile and the one hovered before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    pub current: Option<Point>,
    pub previous: Option<Point>,
}

impl Hover {
    /// Record the tile now under the pointer. Returns whether it changed.
    pub fn update(&mut self, tile: Option<Point>) -> bool {
        if tile == self.current {
            return false;
        }
        self.previous = self.current;
        self.current = tile;
        true
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// Errors that can occur when setting up a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    Layout(LayoutError),
    Board(BoardError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "bad layout: {e}"),
            Self::Board(e) => write!(f, "bad board: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<LayoutError> for ScenarioError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<BoardError> for ScenarioError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

/// A board, one unit on it, and the searcher that answers its queries.
pub struct Scenario {
    pub board: Board,
    pub unit: Point,
    pub searcher: Searcher,
    pub hover: Hover,
}

impl Scenario {
    /// Build the scenario from an ASCII layout. The first `@` is the unit.
    /// `pillars` extra sight-blocking obstacles are dropped on free tiles,
    /// placed by a generator seeded with `seed`.
    pub fn new(
        layout: &str,
        config: BoardConfig,
        pillars: usize,
        seed: u64,
    ) -> Result<Self, ScenarioError> {
        let mut layout = BoardLayout::parse(layout)?;
        let unit = layout
            .tiles
            .iter()
            .find(|t| t.content.is_some_and(|o| !o.blocks_sight))
            .map_or(Point::ZERO, |t| t.pos);

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut next_id = 1000;
        let mut placed = 0;
        for _ in 0..pillars * 16 {
            if placed == pillars || layout.tiles.is_empty() {
                break;
            }
            let i = rng.random_range(0..layout.tiles.len());
            let spec = &mut layout.tiles[i];
            if spec.content.is_some() || !spec.enabled {
                continue;
            }
            spec.content = Some(Occupant::obstacle(next_id));
            next_id += 1;
            placed += 1;
        }

        let board = Board::build(&layout, config)?;
        Ok(Self {
            board,
            unit,
            searcher: Searcher::new(),
            hover: Hover::default(),
        })
    }

    /// Feed a pointer position. Returns whether the hovered tile changed.
    pub fn pointer_moved(&mut self, world_pos: (f32, f32)) -> bool {
        let tile = resolve_hovered_tile(&self.board, world_pos);
        self.hover.update(tile)
    }

    /// Tiles the unit can move to with `movement` points.
    pub fn move_range(&mut self, movement: i32) -> Vec<Point> {
        self.searcher
            .tiles_for_move(&self.board, self.unit, movement, AreaQuery::new(true, true, false))
            .to_vec()
    }

    /// Route from the unit to the hovered tile, at most `movement` steps.
    pub fn path_to_hover(&mut self, movement: usize) -> Option<Vec<Point>> {
        let target = self.hover.current?;
        self.searcher.find_path(&self.board, self.unit, target, movement)
    }

    /// Tiles hit by `aoe` aimed at the hovered tile.
    pub fn aoe_at_hover(&mut self, aoe: &AreaOfEffect) -> Vec<Point> {
        let Some(target) = self.hover.current else {
            return Vec::new();
        };
        aoe.tiles(
            &self.board,
            &mut self.searcher,
            &OccupantSight::default(),
            target,
            self.unit,
        )
    }

    /// Render the board top row first, marking `highlight` with `mark`.
    pub fn render(&self, highlight: &[Point], mark: char) -> String {
        let bounds = self.board.bounds();
        let mut out = String::new();
        for y in (bounds.min.y..bounds.max.y).rev() {
            for x in bounds.min.x..bounds.max.x {
                let p = Point::new(x, y);
                let ch = match self.board.get_tile(p) {
                    None => ' ',
                    Some(_) if p == self.unit => '@',
                    Some(t) if t.content().is_some_and(|o| o.blocks_sight) => '#',
                    Some(t) if t.is_occupied() => 'a',
                    Some(_) if highlight.contains(&p) => mark,
                    Some(t) if !t.is_enabled() => 'x',
                    Some(t) if t.move_cost() > 1 => '~',
                    Some(_) => '.',
                };
                out.push(ch);
            }
            let _ = writeln!(out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_aoe::AoeShape;

    fn scenario() -> Scenario {
        Scenario::new(ARENA, BoardConfig::default(), 0, 7).unwrap()
    }

    #[test]
    fn hover_resolution() {
        let s = scenario();
        assert_eq!(resolve_hovered_tile(&s.board, (0.5, 0.5)), Some(Point::new(0, 0)));
        assert_eq!(resolve_hovered_tile(&s.board, (3.99, 1.0)), Some(Point::new(3, 1)));
        assert_eq!(resolve_hovered_tile(&s.board, (-0.5, 0.5)), None);
        // Hole in the layout.
        assert_eq!(resolve_hovered_tile(&s.board, (8.5, 2.5)), None);
        assert_eq!(resolve_hovered_tile(&s.board, (f32::NAN, 0.0)), None);
    }

    #[test]
    fn hover_keeps_previous_tile() {
        let mut h = Hover::default();
        assert!(h.update(Some(Point::new(1, 1))));
        assert!(!h.update(Some(Point::new(1, 1))));
        assert!(h.update(None));
        assert_eq!(h.current, None);
        assert_eq!(h.previous, Some(Point::new(1, 1)));
    }

    #[test]
    fn unit_comes_from_layout() {
        let s = scenario();
        assert_eq!(s.unit, Point::new(1, 0));
    }

    #[test]
    fn scattered_pillars_are_deterministic() {
        let a = Scenario::new(ARENA, BoardConfig::default(), 5, 99).unwrap();
        let b = Scenario::new(ARENA, BoardConfig::default(), 5, 99).unwrap();
        assert_eq!(a.render(&[], '*'), b.render(&[], '*'));
        let pillars = |s: &Scenario| {
            s.board
                .tiles()
                .filter(|t| t.content().is_some_and(|o| o.blocks_sight))
                .count()
        };
        assert_eq!(pillars(&a), pillars(&scenario()) + 5);
    }

    #[test]
    fn move_range_excludes_unit_and_occupied() {
        let mut s = scenario();
        let range = s.move_range(2);
        assert!(!range.contains(&s.unit));
        assert!(range.contains(&Point::new(3, 0)));
        assert!(!range.contains(&Point::new(4, 0)));
    }

    #[test]
    fn path_follows_hover() {
        let mut s = scenario();
        assert_eq!(s.path_to_hover(10), None);
        s.pointer_moved((4.2, 0.7));
        let path = s.path_to_hover(10).unwrap();
        assert_eq!(path.first(), Some(&s.unit));
        assert_eq!(path.last(), Some(&Point::new(4, 0)));
    }

    #[test]
    fn aoe_follows_hover() {
        let mut s = scenario();
        let aoe = AreaOfEffect::new(AoeShape::Square, 3);
        assert!(s.aoe_at_hover(&aoe).is_empty());
        s.pointer_moved((5.5, 2.5));
        assert_eq!(s.aoe_at_hover(&aoe).len(), 9);
    }

    #[test]
    fn render_round_trips_layout() {
        let s = scenario();
        assert_eq!(s.render(&[], '*'), format!("{ARENA}\n"));
    }
}
