//! Sample grid maps for `pathsearch`: traversability grids searchable as a
//! [`Graph`](pathsearch_core::Graph), distance heuristics, and ASCII rendering.

mod direction;
mod distance;
mod grid;
mod map;
mod render;

pub use self::direction::*;
pub use self::distance::*;
pub use self::grid::*;
pub use self::map::*;
pub use self::render::*;
