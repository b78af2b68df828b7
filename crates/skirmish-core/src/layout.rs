//! Board descriptions and one-shot board construction.
//!
//! A [`BoardLayout`] lists tiles and explicit links; [`Board::build`] turns
//! it into a board before any query runs. Layouts can be written by hand,
//! deserialized (with the `serde` feature), or parsed from ASCII art with
//! [`BoardLayout::parse`].

use std::fmt;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geom::{Point, Range};
use crate::tile::{Occupant, Tile};

#[cfg(feature = "serde")]
fn yes() -> bool {
    true
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

/// One tile of a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSpec {
    pub pos: Point,
    #[cfg_attr(feature = "serde", serde(default = "yes"))]
    pub enabled: bool,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub move_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<Occupant>,
}

impl TileSpec {
    /// An enabled, empty tile with move cost 1.
    pub fn floor(pos: Point) -> Self {
        Self {
            pos,
            enabled: true,
            move_cost: 1,
            content: None,
        }
    }
}

/// An explicit link of a layout.
///
/// When the pair is already linked (for instance by automatic adjacency
/// linking) this entry configures the existing link instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkSpec {
    pub a: Point,
    pub b: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default = "yes"))]
    pub enabled: bool,
}

impl LinkSpec {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            length: None,
            enabled: true,
        }
    }
}

/// Everything needed to build a [`Board`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardLayout {
    pub tiles: Vec<TileSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: Vec<LinkSpec>,
    /// Link every tile to its free grid neighbours before applying `links`.
    #[cfg_attr(feature = "serde", serde(default = "yes"))]
    pub auto_link: bool,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            links: Vec::new(),
            auto_link: true,
        }
    }
}

impl BoardLayout {
    /// A full `width` x `height` rectangle of floor tiles at the origin.
    pub fn grid(width: i32, height: i32) -> Self {
        Self {
            tiles: Range::new(0, 0, width, height)
                .iter()
                .map(TileSpec::floor)
                .collect(),
            ..Self::default()
        }
    }

    /// Parse an ASCII layout. The last line is row `y = 0` and `y` grows
    /// upwards; columns start at `x = 0`.
    ///
    /// | glyph | tile |
    /// |---|---|
    /// | `.` | floor |
    /// | `~` | floor with move cost 2 |
    /// | `x` | disabled floor |
    /// | `#` | floor holding an obstacle that blocks sight |
    /// | `@`, letters | floor holding an occupant that does not block sight |
    /// | space | no tile |
    ///
    /// Occupants get ids 1, 2, ... in reading order. Every line must have
    /// the same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().collect();
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut layout = Self::default();
        let mut next_id = 1u64;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            let y = height - 1 - row as i32;
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(col as i32, y);
                let mut spec = TileSpec::floor(pos);
                match ch {
                    ' ' => continue,
                    '.' => {}
                    '~' => spec.move_cost = 2,
                    'x' => spec.enabled = false,
                    '#' => {
                        spec.content = Some(Occupant::obstacle(next_id));
                        next_id += 1;
                    }
                    c if c == '@' || c.is_ascii_alphabetic() => {
                        spec.content = Some(Occupant::new(next_id));
                        next_id += 1;
                    }
                    _ => return Err(LayoutError::InvalidGlyph { ch, pos }),
                }
                layout.tiles.push(spec);
            }
        }
        Ok(layout)
    }
}

impl Board {
    /// Build a board from a layout: tiles and their occupants first, then
    /// automatic adjacency links, then explicit links.
    pub fn build(layout: &BoardLayout, config: BoardConfig) -> Result<Self, BoardError> {
        let mut board = Board::new(config);
        for spec in &layout.tiles {
            if spec.move_cost == 0 {
                return Err(BoardError::InvalidMoveCost {
                    pos: spec.pos,
                    cost: spec.move_cost,
                });
            }
            let mut tile = Tile::new(spec.pos).with_move_cost(spec.move_cost);
            tile.set_enabled(spec.enabled);
            tile.set_content(spec.content);
            board.insert_tile(tile)?;
        }
        if layout.auto_link {
            for spec in &layout.tiles {
                board.link_adjacent_tiles(spec.pos)?;
            }
        }
        for spec in &layout.links {
            let id = match board.link_between(spec.a, spec.b) {
                Some(id) => {
                    board.set_link_length(id, spec.length);
                    id
                }
                None => board.connect(spec.a, spec.b, spec.length)?,
            };
            board.set_link_enabled(id, spec.enabled);
        }
        log::debug!(
            "built board: {} tiles, {} links, bounds {}",
            board.len(),
            board.link_count(),
            board.bounds()
        );
        Ok(board)
    }
}

/// Errors that can occur when parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A line is wider or narrower than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no tile meaning.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout line {line} is {found} wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "layout contains invalid glyph '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
.#.
~ x
@..";

    #[test]
    fn parse_positions_and_glyphs() {
        let l = BoardLayout::parse(ROOM).unwrap();
        assert_eq!(l.tiles.len(), 8);
        let at = |x, y| l.tiles.iter().find(|t| t.pos == Point::new(x, y));
        assert_eq!(at(1, 2).unwrap().content, Some(Occupant::obstacle(1)));
        assert_eq!(at(0, 1).unwrap().move_cost, 2);
        assert!(at(1, 1).is_none());
        assert!(!at(2, 1).unwrap().enabled);
        assert_eq!(at(0, 0).unwrap().content, Some(Occupant::new(2)));
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = BoardLayout::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        let err = BoardLayout::parse("..?").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGlyph { ch: '?', .. }));
        assert_eq!(err.to_string(), "layout contains invalid glyph '?' at (2, 0)");
    }

    #[test]
    fn build_links_free_neighbors() {
        let l = BoardLayout::parse(ROOM).unwrap();
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        assert_eq!(b.len(), 8);
        // Neighbours skip the pillar at (1, 2), but it links out to them.
        assert_eq!(b.get_tile(Point::new(1, 2)).unwrap().links().len(), 2);
        assert!(b.link_between(Point::new(0, 0), Point::new(1, 0)).is_some());
        assert!(b.link_between(Point::new(1, 1), Point::new(1, 0)).is_none());
    }

    #[test]
    fn explicit_links_configure_existing_ones() {
        let mut l = BoardLayout::grid(2, 1);
        let mut door = LinkSpec::new(Point::new(1, 0), Point::new(0, 0));
        door.enabled = false;
        door.length = Some(4.0);
        l.links.push(door);
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        assert_eq!(b.link_count(), 1);
        let id = b.link_between(Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert!(!b.is_link_enabled(id));
        assert_eq!(b.link(id).unwrap().length(), 4.0);
    }

    #[test]
    fn explicit_links_without_auto_link() {
        let mut l = BoardLayout::grid(3, 1);
        l.auto_link = false;
        l.links.push(LinkSpec::new(Point::new(0, 0), Point::new(2, 0)));
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        assert_eq!(b.link_count(), 1);
        assert_eq!(b.adjacent_tiles(Point::new(0, 0)), vec![Point::new(2, 0)]);
    }

    #[test]
    fn build_rejects_bad_layouts() {
        let mut l = BoardLayout::grid(1, 1);
        l.tiles.push(TileSpec::floor(Point::ZERO));
        assert_eq!(
            Board::build(&l, BoardConfig::default()).unwrap_err(),
            BoardError::DuplicateKey(Point::ZERO)
        );

        let mut l = BoardLayout::grid(1, 1);
        l.tiles[0].move_cost = 0;
        assert!(matches!(
            Board::build(&l, BoardConfig::default()),
            Err(BoardError::InvalidMoveCost { .. })
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_from_json_with_defaults() {
        let json = r#"{
            "tiles": [
                {"pos": {"x": 0, "y": 0}},
                {"pos": {"x": 1, "y": 0}, "move_cost": 3},
                {"pos": {"x": 2, "y": 0}, "content": {"id": 9, "blocks_sight": true}}
            ]
        }"#;
        let l: BoardLayout = serde_json::from_str(json).unwrap();
        assert!(l.auto_link);
        assert!(l.tiles[0].enabled);
        assert_eq!(l.tiles[1].move_cost, 3);
        assert_eq!(l.tiles[2].content, Some(Occupant::obstacle(9)));
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        assert_eq!(b.link_count(), 2);
    }

    #[test]
    fn layout_round_trip() {
        let l = BoardLayout::parse("#.\n.a").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: BoardLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }
}
