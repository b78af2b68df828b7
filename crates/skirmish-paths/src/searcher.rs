use std::collections::{HashMap, VecDeque};

use skirmish_core::Point;

use crate::traits::Step;

/// A position with the cost at which a search reached it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// SearchTile
// ---------------------------------------------------------------------------

/// A tile as seen by one search call.
///
/// Records live in the [`Searcher`] arena and are discarded by the next
/// query; `prev` is an index into that arena. Two records are equal when
/// they wrap the same tile.
#[derive(Debug, Clone)]
pub struct SearchTile {
    pub(crate) pos: Point,
    pub(crate) total_length: f64,
    pub(crate) prev: Option<usize>,
    pub(crate) total_cost: f64,
    pub(crate) distance_to_start: u32,
    pub(crate) distance_to_end: f64,
    /// Occupied tile that halts propagation: recorded, never expanded.
    pub(crate) blocked: bool,
}

impl SearchTile {
    pub(crate) fn new(pos: Point, total_length: f64, prev: Option<usize>) -> Self {
        Self {
            pos,
            total_length,
            prev,
            total_cost: 0.0,
            distance_to_start: 0,
            distance_to_end: 0.0,
            blocked: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Accumulated cost from the origin of an area search.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Accumulated A* cost from the start.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of links crossed since the A* start.
    #[inline]
    pub fn distance_to_start(&self) -> u32 {
        self.distance_to_start
    }

    /// Heuristic estimate to the A* target.
    #[inline]
    pub fn distance_to_end(&self) -> f64 {
        self.distance_to_end
    }

    /// A* priority key.
    #[inline]
    pub fn distance_factor(&self) -> f64 {
        self.total_cost + self.distance_to_end
    }
}

impl PartialEq for SearchTile {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Which query last filled the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LastQuery {
    None,
    Area,
    Path,
}

/// Runs queries against a [`Board`](skirmish_core::Board).
///
/// `Searcher` owns the per-query scratch state (search records, position
/// index, wave queues, result buffer) and keeps the allocations between
/// calls. Each query starts by clearing it, so records never outlive the
/// call that produced them, except for the read-back helpers of the most
/// recent area search.
pub struct Searcher {
    pub(crate) nodes: Vec<SearchTile>,
    pub(crate) index: HashMap<Point, usize>,
    pub(crate) check_now: VecDeque<usize>,
    pub(crate) check_next: VecDeque<usize>,
    pub(crate) results: Vec<Point>,
    // shared scratch buffer for neighbour queries
    pub(crate) sbuf: Vec<Step>,
    pub(crate) last: LastQuery,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            check_now: VecDeque::new(),
            check_next: VecDeque::new(),
            results: Vec::new(),
            sbuf: Vec::with_capacity(8),
            last: LastQuery::None,
        }
    }

    pub(crate) fn reset(&mut self, query: LastQuery) {
        self.nodes.clear();
        self.index.clear();
        self.check_now.clear();
        self.check_next.clear();
        self.results.clear();
        self.last = query;
    }

    /// Add a record for a position not seen yet this query.
    pub(crate) fn push_node(&mut self, node: SearchTile) -> usize {
        let i = self.nodes.len();
        self.index.insert(node.pos, i);
        self.nodes.push(node);
        i
    }

    /// Positions from the arena root to record `i`.
    ///
    /// The walk is capped at the arena size: non-positive step costs can
    /// relax a chain into a cycle.
    pub(crate) fn trace_back(&self, i: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(i);
        while let Some(ci) = cur {
            if path.len() >= self.nodes.len() {
                break;
            }
            let node = &self.nodes[ci];
            path.push(node.pos);
            cur = node.prev;
        }
        path.reverse();
        path
    }
}
