pub mod grid;
pub mod range_set;

pub use self::grid::{Coord, Grid};
pub use self::range_set::RangeSet;
