//! **skirmish-core**: tactical grid-board engine (core types).
//!
//! This crate provides the board model shared by the *skirmish* crates:
//! integer geometry, tiles and their occupants, the undirected link graph,
//! and the [`Board`] that indexes tiles by position and owns their links.
//!
//! Queries live elsewhere: area search and A* in `skirmish-paths`,
//! area-of-effect shapes in `skirmish-aoe`.

pub mod board;
pub mod config;
pub mod error;
pub mod geom;
pub mod layout;
pub mod link;
pub mod tile;

pub use board::Board;
pub use config::BoardConfig;
pub use error::BoardError;
pub use geom::{Point, Range};
pub use layout::{BoardLayout, LayoutError, LinkSpec, TileSpec};
pub use link::{Link, LinkId};
pub use tile::{Occupant, Tile};
