//! Area-of-effect shape generators.
//!
//! Every generator returns the affected positions with `start` first. The
//! candidates that have no tile are dropped, and with `los` set so are the
//! ones `sight` says cannot be seen from `start`. A `start` without a tile
//! gives an empty result.

use skirmish_core::{Board, Point};
use skirmish_paths::{AreaQuery, Searcher};

use crate::sight::LineOfSight;

fn keep_visible(
    board: &Board,
    sight: &impl LineOfSight,
    start: Point,
    los: bool,
    candidates: impl IntoIterator<Item = Point>,
) -> Vec<Point> {
    candidates
        .into_iter()
        .filter(|&p| board.contains(p))
        .filter(|&p| !los || sight.has_line_of_sight(board, start, p))
        .collect()
}

/// A `size` x `size` square on `start`.
///
/// Odd sizes are centered. Even sizes have no center tile: offsets run from
/// `-(size - 2) / 2` to `size / 2` on both axes, so the square leans towards
/// positive coordinates.
pub fn square(
    board: &Board,
    sight: &impl LineOfSight,
    start: Point,
    size: i32,
    los: bool,
) -> Vec<Point> {
    if !board.contains(start) {
        return Vec::new();
    }
    if size <= 1 {
        return vec![start];
    }
    let (lo, hi) = if size % 2 == 0 {
        (-(size - 2) / 2, size / 2)
    } else {
        (-(size - 1) / 2, (size - 1) / 2)
    };
    let offsets = (lo..=hi).flat_map(move |x| (lo..=hi).map(move |y| Point::new(x, y)));
    let candidates = std::iter::once(start).chain(
        offsets
            .filter(|&d| d != Point::ZERO)
            .map(|d| start + d),
    );
    keep_visible(board, sight, start, los, candidates)
}

/// Tiles within grid distance `size` of `start` (diagonal steps weighted on
/// starry boards), as found by [`Searcher::tiles_in_range`].
pub fn circle(
    board: &Board,
    searcher: &mut Searcher,
    sight: &impl LineOfSight,
    start: Point,
    size: i32,
    los: bool,
) -> Vec<Point> {
    if !board.contains(start) {
        return Vec::new();
    }
    if size <= 0 {
        return vec![start];
    }
    let area = searcher.tiles_in_range(board, start, size, AreaQuery::default());
    keep_visible(board, sight, start, los, area.iter().copied())
}

/// A cone whose tip is `start`, opening away from `caster`.
///
/// For an orthogonal direction, the slice at depth `d` (from 1 to
/// `size - 1`) is `2 * d + 1` tiles wide. For a diagonal direction the cone
/// fills the triangle of offsets `(x, y)` with `x + y < size` between the two
/// axes of the direction.
pub fn cone(
    board: &Board,
    sight: &impl LineOfSight,
    start: Point,
    caster: Point,
    size: i32,
    los: bool,
) -> Vec<Point> {
    if !board.contains(start) {
        return Vec::new();
    }
    let dir = Point::direction(caster, start);
    if size <= 1 || dir == Point::ZERO {
        return vec![start];
    }
    let mut candidates = vec![start];
    if dir.is_orthogonal_step() {
        let side = Point::new(-dir.y, dir.x);
        for depth in 1..size {
            for lateral in -depth..=depth {
                candidates.push(start + dir * depth + side * lateral);
            }
        }
    } else {
        for x in (0..size).rev() {
            for y in 0..size - x {
                if x == 0 && y == 0 {
                    continue;
                }
                candidates.push(start + Point::new(x * dir.x, y * dir.y));
            }
        }
    }
    keep_visible(board, sight, start, los, candidates)
}

/// A straight line from `start` away from `caster`, `size` tiles long.
///
/// With `aoe_los` the line ends before the first position without a tile,
/// or on the first occupied tile. Without it, gaps are skipped and occupants
/// do not stop the line.
pub fn line(
    board: &Board,
    sight: &impl LineOfSight,
    start: Point,
    caster: Point,
    size: i32,
    los: bool,
    aoe_los: bool,
) -> Vec<Point> {
    if !board.contains(start) {
        return Vec::new();
    }
    let dir = Point::direction(caster, start);
    if size <= 1 || dir == Point::ZERO {
        return vec![start];
    }
    let mut candidates = vec![start];
    for i in 1..size {
        let p = start + dir * i;
        let Some(tile) = board.get_tile(p) else {
            if aoe_los {
                break;
            }
            continue;
        };
        candidates.push(p);
        if aoe_los && tile.is_occupied() {
            break;
        }
    }
    keep_visible(board, sight, start, los, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sight::{OccupantSight, Unobstructed};
    use skirmish_core::{BoardConfig, BoardLayout};
    use std::collections::HashSet;

    fn open_grid(w: i32, h: i32) -> Board {
        Board::build(&BoardLayout::grid(w, h), BoardConfig::default()).unwrap()
    }

    fn set(pts: &[Point]) -> HashSet<Point> {
        pts.iter().copied().collect()
    }

    #[test]
    fn degenerate_sizes_give_start() {
        let b = open_grid(5, 5);
        let mut s = Searcher::new();
        let (o, c) = (Point::new(2, 2), Point::new(2, 1));
        assert_eq!(square(&b, &Unobstructed, o, 1, false), vec![o]);
        assert_eq!(square(&b, &Unobstructed, o, 0, false), vec![o]);
        assert_eq!(circle(&b, &mut s, &Unobstructed, o, 0, false), vec![o]);
        assert_eq!(cone(&b, &Unobstructed, o, c, 1, false), vec![o]);
        assert_eq!(line(&b, &Unobstructed, o, c, 1, false, true), vec![o]);
    }

    #[test]
    fn unit_cone_in_every_direction() {
        let b = open_grid(5, 5);
        let o = Point::new(2, 2);
        for caster in [Point::new(2, 1), Point::new(0, 2), Point::new(1, 1), Point::new(3, 1), o] {
            assert_eq!(cone(&b, &Unobstructed, o, caster, 1, false), vec![o]);
            assert_eq!(cone(&b, &OccupantSight::default(), o, caster, 1, true), vec![o]);
        }
    }

    #[test]
    fn missing_start_is_empty() {
        let b = open_grid(2, 2);
        let mut s = Searcher::new();
        let o = Point::new(9, 9);
        assert!(square(&b, &Unobstructed, o, 3, false).is_empty());
        assert!(circle(&b, &mut s, &Unobstructed, o, 3, false).is_empty());
        assert!(cone(&b, &Unobstructed, o, Point::ZERO, 3, false).is_empty());
        assert!(line(&b, &Unobstructed, o, Point::ZERO, 3, false, false).is_empty());
    }

    #[test]
    fn odd_square_is_centered() {
        let b = open_grid(7, 7);
        let got = square(&b, &Unobstructed, Point::new(3, 3), 3, false);
        assert_eq!(got.len(), 9);
        assert_eq!(got[0], Point::new(3, 3));
        assert!(got.iter().all(|p| (p.x - 3).abs() <= 1 && (p.y - 3).abs() <= 1));
    }

    #[test]
    fn even_square_leans_positive() {
        let b = open_grid(9, 9);
        let o = Point::new(4, 4);
        let got = square(&b, &Unobstructed, o, 4, false);
        assert_eq!(got.len(), 16);
        assert_eq!(set(&got).len(), 16);
        assert!(got.contains(&Point::new(3, 3)));
        assert!(got.contains(&Point::new(6, 6)));
        assert!(!got.contains(&Point::new(2, 4)));

        let got = square(&b, &Unobstructed, o, 2, false);
        assert_eq!(
            set(&got),
            set(&[o, Point::new(5, 4), Point::new(4, 5), Point::new(5, 5)])
        );
    }

    #[test]
    fn square_clips_at_board_edge() {
        let b = open_grid(3, 3);
        let got = square(&b, &Unobstructed, Point::new(0, 0), 3, false);
        assert_eq!(got.len(), 4);
    }

    #[test]
    fn circle_matches_range_search() {
        let b = open_grid(7, 7);
        let mut s = Searcher::new();
        let got = circle(&b, &mut s, &Unobstructed, Point::new(3, 3), 2, false);
        assert_eq!(got.len(), 13);
        assert_eq!(got[0], Point::new(3, 3));
    }

    #[test]
    fn orthogonal_cone_widens() {
        let b = open_grid(9, 9);
        let start = Point::new(4, 4);
        let caster = Point::new(3, 4);
        let got = cone(&b, &Unobstructed, start, caster, 3, false);
        // 1 + 3 + 5
        assert_eq!(got.len(), 9);
        assert_eq!(got[0], start);
        assert!(got.iter().all(|p| p.x >= 4));
        assert!(got.contains(&Point::new(6, 6)));
        assert!(got.contains(&Point::new(6, 2)));
        assert!(!got.contains(&Point::new(5, 6)));

        let down = cone(&b, &Unobstructed, start, Point::new(4, 8), 3, false);
        assert_eq!(down.len(), 9);
        assert!(down.iter().all(|p| p.y <= 4));
    }

    #[test]
    fn diagonal_cone_is_a_triangle() {
        let b = open_grid(9, 9);
        let start = Point::new(4, 4);
        let got = cone(&b, &Unobstructed, start, Point::new(3, 3), 3, false);
        assert_eq!(got[0], start);
        assert_eq!(
            set(&got),
            set(&[
                start,
                Point::new(6, 4),
                Point::new(5, 4),
                Point::new(5, 5),
                Point::new(4, 5),
                Point::new(4, 6),
            ])
        );
        assert_eq!(got.len(), 6);
    }

    #[test]
    fn cone_on_caster_tile() {
        let b = open_grid(3, 3);
        let o = Point::new(1, 1);
        assert_eq!(cone(&b, &Unobstructed, o, o, 4, false), vec![o]);
        assert_eq!(line(&b, &Unobstructed, o, o, 4, false, false), vec![o]);
    }

    #[test]
    fn far_caster_keeps_direction() {
        let b = open_grid(5, 5);
        let start = Point::new(0, 2);
        let caster = Point::new(-50_000, 2);
        assert_eq!(
            line(&b, &Unobstructed, start, caster, 3, false, false),
            vec![start, Point::new(1, 2), Point::new(2, 2)]
        );
        let got = cone(&b, &Unobstructed, start, caster, 2, false);
        assert_eq!(
            set(&got),
            set(&[start, Point::new(1, 1), Point::new(1, 2), Point::new(1, 3)])
        );
    }

    #[test]
    fn line_stops_on_first_occupant() {
        let l = BoardLayout::parse("...a..").unwrap();
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        let start = Point::new(1, 0);
        let caster = Point::new(0, 0);
        let got = line(&b, &Unobstructed, start, caster, 5, false, true);
        assert_eq!(got, vec![Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]);

        let got = line(&b, &Unobstructed, start, caster, 5, false, false);
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn line_and_gaps() {
        let l = BoardLayout::parse(".. ...").unwrap();
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        let start = Point::new(1, 0);
        let caster = Point::new(0, 0);
        assert_eq!(
            line(&b, &Unobstructed, start, caster, 4, false, true),
            vec![Point::new(1, 0)]
        );
        assert_eq!(
            line(&b, &Unobstructed, start, caster, 4, false, false),
            vec![Point::new(1, 0), Point::new(3, 0), Point::new(4, 0)]
        );
    }

    #[test]
    fn sight_filter_applies_to_all_shapes() {
        let l = BoardLayout::parse(
            "\
.....
.....
..#..
.....
.....",
        )
        .unwrap();
        let b = Board::build(&l, BoardConfig::default()).unwrap();
        let sight = OccupantSight::default();
        let mut s = Searcher::new();
        let start = Point::new(2, 1);
        let hidden = Point::new(2, 3);

        assert!(square(&b, &Unobstructed, start, 5, false).contains(&hidden));
        assert!(!square(&b, &sight, start, 5, true).contains(&hidden));
        assert!(!circle(&b, &mut s, &sight, start, 2, true).contains(&hidden));
        assert!(circle(&b, &mut s, &sight, start, 2, false).contains(&hidden));
        let up = cone(&b, &sight, start, Point::new(2, 0), 3, true);
        assert!(!up.contains(&hidden));
        assert!(up.contains(&Point::new(2, 2)));
        let ray = line(&b, &sight, start, Point::new(2, 0), 4, true, false);
        assert_eq!(ray, vec![start, Point::new(2, 2)]);
    }
}
