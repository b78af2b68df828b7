//! Board tiles and their occupants.

use crate::geom::Point;
use crate::link::LinkId;

/// Whatever currently stands on a tile.
///
/// The board only needs a stable handle chosen by the host (an entity id)
/// and whether the occupant blocks line of sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks_sight: bool,
}

impl Occupant {
    /// An occupant that does not block line of sight.
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            blocks_sight: false,
        }
    }

    /// An occupant that blocks line of sight (walls, pillars, ...).
    pub const fn obstacle(id: u64) -> Self {
        Self {
            id,
            blocks_sight: true,
        }
    }
}

/// A single cell of the board, keyed by its position.
///
/// The position never changes once the tile is registered in a board.
#[derive(Debug, Clone)]
pub struct Tile {
    pos: Point,
    enabled: bool,
    move_cost: u32,
    walkable: bool,
    content: Option<Occupant>,
    links: Vec<LinkId>,
}

impl Tile {
    /// Create an enabled, empty tile with move cost 1.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            enabled: true,
            move_cost: 1,
            walkable: true,
            content: None,
            links: Vec::new(),
        }
    }

    /// Builder-style move cost. Values below 1 are clamped to 1.
    pub fn with_move_cost(mut self, cost: u32) -> Self {
        self.move_cost = cost.max(1);
        self
    }

    /// Builder-style occupant.
    pub fn with_content(mut self, content: Occupant) -> Self {
        self.set_content(Some(content));
        self
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn move_cost(&self) -> u32 {
        self.move_cost
    }

    /// Set the move cost. Values below 1 are clamped to 1.
    pub fn set_move_cost(&mut self, cost: u32) {
        self.move_cost = cost.max(1);
    }

    /// Whether nothing occupies the tile.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }

    #[inline]
    pub fn content(&self) -> Option<&Occupant> {
        self.content.as_ref()
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.content.is_some()
    }

    /// Replace the occupant, returning the previous one. Walkability follows
    /// occupancy.
    pub fn set_content(&mut self, content: Option<Occupant>) -> Option<Occupant> {
        self.walkable = content.is_none();
        std::mem::replace(&mut self.content, content)
    }

    /// Flip the enabled state.
    pub fn switch(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Links attached to this tile, in insertion order.
    #[inline]
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    #[inline]
    pub fn has_link(&self, link: LinkId) -> bool {
        self.links.contains(&link)
    }

    /// Attach a link. Returns `false` if it was already attached.
    pub fn add_link(&mut self, link: LinkId) -> bool {
        if self.links.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    /// Detach a link. Returns `false` if it was not attached.
    pub fn remove_link(&mut self, link: LinkId) -> bool {
        match self.links.iter().position(|&l| l == link) {
            Some(i) => {
                self.links.remove(i);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Tile {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_drives_walkable() {
        let mut t = Tile::new(Point::new(1, 1));
        assert!(t.walkable());
        assert_eq!(t.set_content(Some(Occupant::new(7))), None);
        assert!(!t.walkable());
        assert!(t.is_occupied());
        assert_eq!(t.set_content(None), Some(Occupant::new(7)));
        assert!(t.walkable());
    }

    #[test]
    fn add_link_is_idempotent() {
        let mut t = Tile::new(Point::ZERO);
        assert!(t.add_link(LinkId(3)));
        assert!(!t.add_link(LinkId(3)));
        assert!(t.add_link(LinkId(1)));
        assert_eq!(t.links(), &[LinkId(3), LinkId(1)]);
    }

    #[test]
    fn remove_link_reports_presence() {
        let mut t = Tile::new(Point::ZERO);
        t.add_link(LinkId(0));
        assert!(t.remove_link(LinkId(0)));
        assert!(!t.remove_link(LinkId(0)));
        assert!(t.links().is_empty());
    }

    #[test]
    fn move_cost_is_at_least_one() {
        let t = Tile::new(Point::ZERO).with_move_cost(0);
        assert_eq!(t.move_cost(), 1);
    }

    #[test]
    fn tiles_compare_by_position() {
        let a = Tile::new(Point::new(2, 2)).with_move_cost(3);
        let b = Tile::new(Point::new(2, 2));
        assert_eq!(a, b);
    }
}
