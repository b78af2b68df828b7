use skirmish_core::{Board, Point};

use crate::traits::{Expander, Step};

/// Neighbours by grid offset, ignoring links.
///
/// Orthogonal steps cost 1. On a starry board the diagonal steps are added
/// with the board's `diagonal_weight`. Tile move costs are not applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOffsets;

impl Expander for GridOffsets {
    fn steps(&self, board: &Board, from: Point, buf: &mut Vec<Step>) {
        for to in from.neighbors_4() {
            if board.contains(to) {
                buf.push(Step { to, cost: 1.0 });
            }
        }
        let config = board.config();
        if config.starry {
            for to in from.diagonals() {
                if board.contains(to) {
                    buf.push(Step {
                        to,
                        cost: config.diagonal_weight,
                    });
                }
            }
        }
    }
}

/// Neighbours through the tile's enabled links.
///
/// A step costs `max(1, link_length_weight * length)` times the move cost
/// of the tile being left.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSteps;

impl Expander for LinkSteps {
    fn steps(&self, board: &Board, from: Point, buf: &mut Vec<Step>) {
        let Some(tile) = board.get_tile(from) else {
            return;
        };
        let move_cost = f64::from(tile.move_cost());
        let weight = board.config().link_length_weight;
        for (id, link) in board.tile_links(from) {
            if !board.is_link_enabled(id) {
                continue;
            }
            let Some(to) = link.other_endpoint(from) else {
                continue;
            };
            if !board.contains(to) {
                continue;
            }
            buf.push(Step {
                to,
                cost: (weight * link.length()).max(1.0) * move_cost,
            });
        }
    }
}
