//! Undirected edges between two tiles.

use crate::geom::Point;

/// Handle to a link stored in a [`Board`](crate::Board).
///
/// Only the board hands out ids:
///
/// ```compile_fail
/// let id = skirmish_core::LinkId(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub(crate) u32);

impl LinkId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// An undirected edge between two distinct tiles.
///
/// Links compare equal when they join the same pair of tiles, whichever way
/// round the endpoints were given.
#[derive(Debug, Clone)]
pub struct Link {
    tile_a: Point,
    tile_b: Point,
    length: f64,
    length_override: Option<f64>,
    pub(crate) self_enabled: bool,
}

impl Link {
    /// Create a link whose length is the Euclidean distance between the
    /// endpoints. Returns `None` when `a == b`.
    pub fn new(a: Point, b: Point) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            tile_a: a,
            tile_b: b,
            length: a.distance(b),
            length_override: None,
            self_enabled: true,
        })
    }

    /// Builder-style fixed length replacing the geometric one.
    ///
    /// Non-positive or non-finite values are ignored.
    pub fn with_length(mut self, length: f64) -> Self {
        self.set_length_override(Some(length));
        self
    }

    #[inline]
    pub fn tile_a(&self) -> Point {
        self.tile_a
    }

    #[inline]
    pub fn tile_b(&self) -> Point {
        self.tile_b
    }

    /// Both endpoints.
    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.tile_a, self.tile_b)
    }

    /// Effective length: the override if any, otherwise the distance
    /// between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_override.unwrap_or(self.length)
    }

    pub fn set_length_override(&mut self, length: Option<f64>) {
        self.length_override = length.filter(|l| l.is_finite() && *l > 0.0);
    }

    /// The link's own switch, ignoring the endpoint tiles.
    #[inline]
    pub fn self_enabled(&self) -> bool {
        self.self_enabled
    }

    #[inline]
    pub fn contains_tile(&self, p: Point) -> bool {
        self.tile_a == p || self.tile_b == p
    }

    /// The endpoint that is not `p`, or `None` if `p` is not an endpoint.
    #[inline]
    pub fn other_endpoint(&self, p: Point) -> Option<Point> {
        if self.tile_a == p {
            Some(self.tile_b)
        } else if self.tile_b == p {
            Some(self.tile_a)
        } else {
            None
        }
    }

    /// Whether this link joins exactly `a` and `b`, in either order.
    #[inline]
    pub fn joins(&self, a: Point, b: Point) -> bool {
        (self.tile_a == a && self.tile_b == b) || (self.tile_a == b && self.tile_b == a)
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.joins(other.tile_a, other.tile_b)
    }
}

impl Eq for Link {}
