//! Area search and pathfinding over skirmish boards.
//!
//! This crate answers the movement and range queries of a tactical board:
//!
//! - **Area search** bounded by accumulated cost, through grid offsets
//!   ([`Searcher::tiles_in_range`]) or through links
//!   ([`Searcher::tiles_for_move`]), or with any [`Expander`] and inclusion
//!   predicate ([`Searcher::search_area`])
//! - **A\*** routing over enabled links ([`Searcher::find_path`])
//!
//! All queries go through [`Searcher`], which owns and reuses its search
//! records and queues so that repeated queries allocate little after
//! warm-up. The board is only borrowed immutably: topology cannot change
//! while a query runs.

mod area;
mod astar;
mod distance;
mod neighbors;
mod searcher;
mod traits;

pub use area::AreaQuery;
pub use distance::manhattan;
pub use neighbors::{GridOffsets, LinkSteps};
pub use searcher::{PathNode, SearchTile, Searcher};
pub use traits::{Expander, Step};
