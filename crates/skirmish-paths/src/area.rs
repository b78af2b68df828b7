//! Area search bounded by accumulated cost.

use skirmish_core::{Board, Point};

use crate::neighbors::{GridOffsets, LinkSteps};
use crate::searcher::{LastQuery, PathNode, SearchTile, Searcher};
use crate::traits::Expander;

/// Occupancy policy of an area search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaQuery {
    /// Occupied tiles are left out of the result. Unless
    /// `stop_search_if_occupied` is set, the search still goes through them.
    pub dont_add_if_occupied: bool,
    /// Occupied tiles are not expanded: nothing is reached through them.
    pub stop_search_if_occupied: bool,
    /// The origin is part of the result.
    pub add_first_tile: bool,
}

impl Default for AreaQuery {
    fn default() -> Self {
        Self {
            dont_add_if_occupied: false,
            stop_search_if_occupied: false,
            add_first_tile: true,
        }
    }
}

impl AreaQuery {
    pub fn new(dont_add_if_occupied: bool, stop_search_if_occupied: bool, add_first_tile: bool) -> Self {
        Self {
            dont_add_if_occupied,
            stop_search_if_occupied,
            add_first_tile,
        }
    }
}

impl Searcher {
    /// Collect the tiles reachable from `start`.
    ///
    /// The search advances in waves: every record queued for the current
    /// wave is expanded through `expander` before the next wave starts. A
    /// new neighbour is recorded only if `include` accepts it. A neighbour
    /// that is already recorded is relaxed when the current route is
    /// cheaper: its cost and predecessor are updated and both it and the
    /// current record go back into the next wave, so the improvement
    /// spreads outwards.
    ///
    /// The result lists positions in discovery order, each once. It is
    /// empty if `start` is not on the board. The search stops early, with a
    /// warning, after `max_search_steps` expansions.
    pub fn search_area<E, F>(
        &mut self,
        board: &Board,
        start: Point,
        expander: &E,
        mut include: F,
        query: AreaQuery,
    ) -> &[Point]
    where
        E: Expander,
        F: FnMut(&SearchTile) -> bool,
    {
        self.reset(LastQuery::Area);
        if !board.contains(start) {
            return &self.results;
        }

        let root = self.push_node(SearchTile::new(start, 0.0, None));
        if query.add_first_tile {
            self.results.push(start);
        }
        self.check_now.push_back(root);

        let max_steps = board.config().max_search_steps;
        let mut expanded = 0usize;
        let mut sbuf = std::mem::take(&mut self.sbuf);

        loop {
            let Some(ci) = self.check_now.pop_front() else {
                if self.check_next.is_empty() {
                    break;
                }
                std::mem::swap(&mut self.check_now, &mut self.check_next);
                continue;
            };
            if expanded >= max_steps {
                log::warn!("area search from {start} stopped after {expanded} expansions");
                break;
            }
            expanded += 1;

            let current = &self.nodes[ci];
            let (cp, current_length) = (current.pos, current.total_length);

            sbuf.clear();
            expander.steps(board, cp, &mut sbuf);

            for step in sbuf.iter() {
                let tentative = current_length + step.cost;

                if let Some(&ni) = self.index.get(&step.to) {
                    let n = &mut self.nodes[ni];
                    if tentative < n.total_length {
                        n.total_length = tentative;
                        n.prev = Some(ci);
                        if !n.blocked {
                            self.check_next.push_back(ci);
                            self.check_next.push_back(ni);
                        }
                    }
                    continue;
                }

                let Some(tile) = board.get_tile(step.to) else {
                    continue;
                };
                let mut candidate = SearchTile::new(step.to, tentative, Some(ci));
                if !include(&candidate) {
                    continue;
                }
                let occupied = tile.is_occupied();
                candidate.blocked = occupied && query.stop_search_if_occupied;
                let blocked = candidate.blocked;
                let ni = self.push_node(candidate);
                if !blocked {
                    self.check_next.push_back(ni);
                }
                if !(occupied && query.dont_add_if_occupied) {
                    self.results.push(step.to);
                }
            }
        }

        self.sbuf = sbuf;
        log::trace!(
            "area search from {start}: {} recorded, {} returned, {expanded} expansions",
            self.nodes.len(),
            self.results.len()
        );
        &self.results
    }

    /// Tiles within `radius` of `start` by grid offsets (orthogonal steps
    /// cost 1, diagonal steps on starry boards cost `diagonal_weight`).
    pub fn tiles_in_range(
        &mut self,
        board: &Board,
        start: Point,
        radius: i32,
        query: AreaQuery,
    ) -> &[Point] {
        let radius = f64::from(radius);
        self.search_area(
            board,
            start,
            &GridOffsets,
            |t| t.total_length() <= radius,
            query,
        )
    }

    /// Tiles a unit at `start` can move to with `radius` movement points,
    /// following enabled links.
    pub fn tiles_for_move(
        &mut self,
        board: &Board,
        start: Point,
        radius: i32,
        query: AreaQuery,
    ) -> &[Point] {
        let radius = f64::from(radius);
        self.search_area(
            board,
            start,
            &LinkSteps,
            |t| t.total_length() <= radius,
            query,
        )
    }

    /// Cost at which the last area search reached `p`.
    ///
    /// Tiles that were traversed but left out of the result (occupied tiles
    /// under `dont_add_if_occupied`) still have a cost. Returns `None` if
    /// `p` was not reached, or if the last query was not an area search.
    pub fn area_cost_at(&self, p: Point) -> Option<f64> {
        if self.last != LastQuery::Area {
            return None;
        }
        self.index.get(&p).map(|&i| self.nodes[i].total_length)
    }

    /// Cheapest route found by the last area search from its origin to `p`,
    /// both included.
    pub fn area_route_to(&self, p: Point) -> Option<Vec<Point>> {
        if self.last != LastQuery::Area {
            return None;
        }
        self.index.get(&p).map(|&i| self.trace_back(i))
    }

    /// The result of the last area search with the cost of each tile.
    pub fn area_nodes(&self) -> impl Iterator<Item = PathNode> + '_ {
        let area = self.last == LastQuery::Area;
        self.results
            .iter()
            .filter(move |_| area)
            .filter_map(|&pos| {
                self.index.get(&pos).map(|&i| PathNode {
                    pos,
                    cost: self.nodes[i].total_length,
                })
            })
    }
}
