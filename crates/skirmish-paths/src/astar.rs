use std::cmp::Ordering;
use std::collections::BinaryHeap;

use skirmish_core::{Board, Point};

use crate::distance::manhattan;
use crate::searcher::{LastQuery, SearchTile, Searcher};

/// Open-list entry: a record index keyed by its distance factor.
#[derive(Debug, Clone, Copy)]
struct OpenRef {
    idx: usize,
    f: f64,
    seq: u64,
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal keys pop in push order.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl Searcher {
    /// Find a route from `start` to `end` with A*.
    ///
    /// Only enabled links are followed, and only into walkable tiles, so an
    /// occupied `end` is unreachable. Entering a tile costs its move cost
    /// times the length of the link crossed; the heuristic is the Manhattan
    /// distance to `end`. A tile keeps the cost it was first discovered at.
    ///
    /// The route includes both endpoints and is cut to its first
    /// `max_range` steps. Returns `None` if either endpoint is missing or
    /// no route exists.
    pub fn find_path(
        &mut self,
        board: &Board,
        start: Point,
        end: Point,
        max_range: usize,
    ) -> Option<Vec<Point>> {
        self.reset(LastQuery::Path);
        if !board.contains(start) || !board.contains(end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut root = SearchTile::new(start, 0.0, None);
        root.distance_to_end = f64::from(manhattan(start, end));
        let f = root.distance_factor();
        let root = self.push_node(root);

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(OpenRef { idx: root, f, seq });

        let max_steps = board.config().max_search_steps;
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };
            let ci = current.idx;
            let cp = self.nodes[ci].pos;
            if cp == end {
                break 'search Some(ci);
            }
            if expanded >= max_steps {
                log::warn!("path search {start} -> {end} stopped after {expanded} expansions");
                break 'search None;
            }
            expanded += 1;

            let (current_cost, current_steps) =
                (self.nodes[ci].total_cost, self.nodes[ci].distance_to_start);

            for (id, link) in board.tile_links(cp) {
                if !board.is_link_enabled(id) {
                    continue;
                }
                let Some(np) = link.other_endpoint(cp) else {
                    continue;
                };
                // Records are never dropped, so a known position is either
                // open or closed.
                if self.index.contains_key(&np) {
                    continue;
                }
                let Some(tile) = board.get_tile(np) else {
                    continue;
                };
                if !tile.walkable() {
                    continue;
                }

                let mut node = SearchTile::new(np, 0.0, Some(ci));
                node.total_cost = current_cost + f64::from(tile.move_cost()) * link.length();
                node.distance_to_start = current_steps + 1;
                node.distance_to_end = f64::from(manhattan(np, end));
                let f = node.distance_factor();
                let ni = self.push_node(node);
                seq += 1;
                open.push(OpenRef { idx: ni, f, seq });
            }
        };

        let Some(goal) = found else {
            log::debug!("no path from {start} to {end}");
            return None;
        };

        let mut path = self.trace_back(goal);
        path.truncate(max_range.saturating_add(1));
        log::trace!(
            "path {start} -> {end}: {} tiles, {} recorded",
            path.len(),
            self.nodes.len()
        );
        Some(path)
    }
}
