//! Area-of-effect shapes for skirmish boards.
//!
//! The generators in [`shapes`] turn a targeted tile into the set of tiles an
//! ability hits: [`square`], [`circle`], [`cone`] and [`line`]. Each one can
//! drop the tiles that cannot be seen from the target through a
//! [`LineOfSight`] implementation supplied by the caller.
//!
//! [`AreaOfEffect`] bundles shape, size and sight rules so that abilities can
//! be described as data.

mod ability;
pub mod shapes;
pub mod sight;

pub use ability::{AoeShape, AreaOfEffect};
pub use shapes::{circle, cone, line, square};
pub use sight::{LineOfSight, OccupantSight, Unobstructed, bresenham};
