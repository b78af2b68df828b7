//! The [`Board`]: a grid index of tiles plus the link graph joining them.
//!
//! Tiles are keyed by position and stored in insertion order; links live in
//! an arena addressed by [`LinkId`]. Topology is meant to be built once and
//! then only read by queries, while occupancy and enable switches change
//! during play.

use std::collections::HashMap;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geom::{Point, Range};
use crate::link::{Link, LinkId};
use crate::tile::{Occupant, Tile};

/// Sparse tile board with an explicit link graph.
///
/// Registered tiles are edited through the board only, so a link is always
/// attached to both of its endpoints or to neither:
///
/// ```compile_fail
/// use skirmish_core::{Board, Point};
///
/// let mut b = Board::default();
/// b.build_tile(Point::ZERO).unwrap();
/// let _ = b.tile_mut(Point::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    config: BoardConfig,
    tiles: Vec<Tile>,
    index: HashMap<Point, usize>,
    links: Vec<Option<Link>>,
    link_count: usize,
    bounds: Range,
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
    }

    // -----------------------------------------------------------------------
    // Grid index
    // -----------------------------------------------------------------------

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Smallest range holding every tile.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// The tile at `p`, if any.
    #[inline]
    pub fn get_tile(&self, p: Point) -> Option<&Tile> {
        self.index.get(&p).map(|&i| &self.tiles[i])
    }

    #[inline]
    pub(crate) fn tile_mut(&mut self, p: Point) -> Option<&mut Tile> {
        match self.index.get(&p) {
            Some(&i) => Some(&mut self.tiles[i]),
            None => None,
        }
    }

    /// Every tile, in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Register a tile.
    ///
    /// Fails with [`BoardError::DuplicateKey`] if the position is taken. Any
    /// links the tile carried are dropped: links are attached through the
    /// board only.
    pub fn insert_tile(&mut self, mut tile: Tile) -> Result<(), BoardError> {
        let pos = tile.pos();
        if self.index.contains_key(&pos) {
            return Err(BoardError::DuplicateKey(pos));
        }
        while let Some(&l) = tile.links().first() {
            tile.remove_link(l);
        }
        let cell = Range::spanning(pos, pos);
        self.bounds = if self.tiles.is_empty() {
            cell
        } else {
            self.bounds.union(cell)
        };
        self.index.insert(pos, self.tiles.len());
        self.tiles.push(tile);
        Ok(())
    }

    /// Create and register a default tile at `p`.
    pub fn build_tile(&mut self, p: Point) -> Result<&mut Tile, BoardError> {
        self.insert_tile(Tile::new(p))?;
        let i = self.tiles.len() - 1;
        Ok(&mut self.tiles[i])
    }

    /// Replace the occupant of the tile at `p`, returning the previous one.
    pub fn set_content(
        &mut self,
        p: Point,
        content: Option<Occupant>,
    ) -> Result<Option<Occupant>, BoardError> {
        let tile = self.tile_mut(p).ok_or(BoardError::TileNotFound(p))?;
        Ok(tile.set_content(content))
    }

    pub fn set_tile_enabled(&mut self, p: Point, enabled: bool) -> Result<(), BoardError> {
        let tile = self.tile_mut(p).ok_or(BoardError::TileNotFound(p))?;
        tile.set_enabled(enabled);
        Ok(())
    }

    /// Flip the enabled state of the tile at `p`.
    pub fn switch_tile(&mut self, p: Point) -> Result<(), BoardError> {
        let tile = self.tile_mut(p).ok_or(BoardError::TileNotFound(p))?;
        tile.switch();
        Ok(())
    }

    /// On-board grid neighbours of `p`: the orthogonal ones, then the
    /// diagonal ones when the board is starry.
    pub fn grid_neighbors(&self, p: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(8);
        out.extend(p.neighbors_4().into_iter().filter(|n| self.contains(*n)));
        if self.config.starry {
            out.extend(p.diagonals().into_iter().filter(|n| self.contains(*n)));
        }
        out
    }

    // -----------------------------------------------------------------------
    // Link graph
    // -----------------------------------------------------------------------

    /// Number of live links.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index()).and_then(Option::as_ref)
    }

    /// Every live link with its id.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (LinkId(i as u32), l)))
    }

    /// Links attached to the tile at `p`, in insertion order. Empty if there
    /// is no such tile.
    pub fn tile_links(&self, p: Point) -> impl Iterator<Item = (LinkId, &Link)> {
        self.get_tile(p)
            .map(Tile::links)
            .unwrap_or(&[])
            .iter()
            .filter_map(|&id| self.link(id).map(|l| (id, l)))
    }

    /// The link joining `a` and `b`, in either order.
    pub fn link_between(&self, a: Point, b: Point) -> Option<LinkId> {
        self.tile_links(a)
            .find(|(_, l)| l.joins(a, b))
            .map(|(id, _)| id)
    }

    /// Tiles reachable through one link from `p`, enabled or not.
    pub fn adjacent_tiles(&self, p: Point) -> Vec<Point> {
        self.tile_links(p)
            .filter_map(|(_, l)| l.other_endpoint(p))
            .collect()
    }

    /// Register `link` and attach it to both endpoints.
    ///
    /// A link equal to an existing one is rejected with
    /// [`BoardError::DuplicateLink`] and dropped; nothing is attached.
    pub fn insert_link(&mut self, link: Link) -> Result<LinkId, BoardError> {
        let (a, b) = link.endpoints();
        if !self.contains(a) {
            return Err(BoardError::TileNotFound(a));
        }
        if !self.contains(b) {
            return Err(BoardError::TileNotFound(b));
        }
        if self.link_between(a, b).is_some() {
            return Err(BoardError::DuplicateLink { a, b });
        }
        let id = LinkId(self.links.len() as u32);
        self.links.push(Some(link));
        self.link_count += 1;
        for p in [a, b] {
            if let Some(t) = self.tile_mut(p) {
                t.add_link(id);
            }
        }
        Ok(id)
    }

    /// Link `a` and `b`, optionally with a fixed length.
    pub fn connect(&mut self, a: Point, b: Point, length: Option<f64>) -> Result<LinkId, BoardError> {
        let mut link = Link::new(a, b).ok_or(BoardError::SelfLink(a))?;
        link.set_length_override(length);
        self.insert_link(link)
    }

    /// Detach a link from both endpoints and free it. Returns `false` if the
    /// id was not live.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        let Some(link) = self.links.get_mut(id.index()).and_then(Option::take) else {
            return false;
        };
        self.link_count -= 1;
        let (a, b) = link.endpoints();
        for p in [a, b] {
            if let Some(t) = self.tile_mut(p) {
                t.remove_link(id);
            }
        }
        true
    }

    /// Whether a link can be crossed: its own switch and both endpoint tiles
    /// must be enabled. Unknown ids are never enabled.
    pub fn is_link_enabled(&self, id: LinkId) -> bool {
        let Some(link) = self.link(id) else {
            return false;
        };
        let tile_on = |p| self.get_tile(p).is_some_and(Tile::is_enabled);
        link.self_enabled() && tile_on(link.tile_a()) && tile_on(link.tile_b())
    }

    /// Set a link's own switch. Returns `false` if the id was not live.
    pub fn set_link_enabled(&mut self, id: LinkId, enabled: bool) -> bool {
        match self.links.get_mut(id.index()).and_then(Option::as_mut) {
            Some(l) => {
                l.self_enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Flip a link's own switch. Returns `false` if the id was not live.
    pub fn switch_link(&mut self, id: LinkId) -> bool {
        match self.link(id).map(Link::self_enabled) {
            Some(enabled) => self.set_link_enabled(id, !enabled),
            None => false,
        }
    }

    /// Set or clear a link's fixed length. Returns `false` if the id was not
    /// live.
    pub fn set_link_length(&mut self, id: LinkId, length: Option<f64>) -> bool {
        match self.links.get_mut(id.index()).and_then(Option::as_mut) {
            Some(l) => {
                l.set_length_override(length);
                true
            }
            None => false,
        }
    }

    /// Link the tile at `p` to each of its grid neighbours that is free and
    /// not already linked to it. Returns the new links.
    pub fn link_adjacent_tiles(&mut self, p: Point) -> Result<Vec<LinkId>, BoardError> {
        if !self.contains(p) {
            return Err(BoardError::TileNotFound(p));
        }
        let mut created = Vec::new();
        for n in self.grid_neighbors(p) {
            if self.get_tile(n).is_some_and(Tile::is_occupied) {
                continue;
            }
            match self.connect(p, n, None) {
                Ok(id) => created.push(id),
                Err(BoardError::DuplicateLink { .. }) => {
                    log::debug!("skipping existing link {p} <-> {n}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(created)
    }
}
