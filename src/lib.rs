#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Paths on a Grid with weighted Terrain.
//!
//! ## Introduction
//! Every Tile of a [`Grid`] carries a [`Terrain`] class, and a [`CostTable`] decides how
//! expensive it is to step onto each class. Some classes can be made impassable by giving them
//! an infinite Cost. Paths move along the 4 cardinal directions and are found with the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm), using the Manhattan
//! distance as Heuristic.
//!
//! The default Cost Table knows four classes:
//!
//! | class | meaning           | Cost |
//! |-------|-------------------|------|
//! | `0`   | open ground       | `1`  |
//! | `1`   | impassable        | `∞`  |
//! | `2`   | moderate obstacle | `2`  |
//! | `3`   | heavy obstacle    | `3`  |
//!
//! The Cost Table is plain data that is handed to the [`Pathfinder`], so any other scheme can
//! be used instead. Note that the Heuristic only guarantees optimal Paths as long as every
//! finite Cost is at least `1`.
//!
//! ## Examples
//! ```
//! use terrain_pathfinding::prelude::*;
//!
//! let mut grid = Grid::new(3, 3)?;
//! grid.set_terrain((1, 1), Terrain::IMPASSABLE)?;
//!
//! let pathfinder = Pathfinder::default();
//! let path = pathfinder.find_path(&grid, (0, 0), (2, 2))?;
//!
//! assert_eq!(path.first(), Some(&(0, 0)));
//! assert_eq!(path.last(), Some(&(2, 2)));
//! assert_eq!(path.cost(), 4);
//! assert!(!path.contains(&(1, 1)));
//! # Ok::<(), terrain_pathfinding::Error>(())
//! ```
//!
//! ### Unreachable Goals
//! A goal that cannot be reached is not an Error. The search returns an empty [`Path`]
//! instead, while Errors are reserved for invalid arguments like Coordinates outside of the Grid:
//! ```
//! # use terrain_pathfinding::prelude::*;
//! let mut grid = Grid::new(1, 5)?;
//! grid.set_terrain((0, 2), Terrain::IMPASSABLE)?;
//!
//! let pathfinder = Pathfinder::default();
//! assert!(pathfinder.find_path(&grid, (0, 0), (0, 4))?.is_empty());
//! assert!(pathfinder.find_path(&grid, (0, 0), (0, 5)).is_err());
//! # Ok::<(), terrain_pathfinding::Error>(())
//! ```
//!
//! ### Sharing a Grid
//! Searches only borrow the Grid immutably and keep all of their bookkeeping local, so any
//! number of them can run on the same Grid at once. With the `parallel` feature (on by default)
//! [`Pathfinder::find_paths_parallel`] does exactly that using [rayon](https://docs.rs/rayon).
//! Changing the Grid requires a mutable borrow and can therefore never overlap with a search.

/// A Coordinate on the Grid: `(row, column)`
pub type Coord = (usize, usize);

/// The Type used for the accumulated Cost of a Path
pub type Cost = usize;

mod error;
pub use self::error::{Error, Result};

mod terrain;
pub use self::terrain::{CostTable, Terrain, TileCost};

mod grid;
pub use self::grid::Grid;

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{a_star_search, Pathfinder};

pub mod neighbors;
pub mod obstacles;
pub mod render;
pub mod scenario;

/// The most commonly used Types
pub mod prelude {
	pub use crate::{
		neighbors::ManhattanNeighborhood, render::GridView, scenario::Scenario, Coord, CostTable,
		Error, Grid, Path, Pathfinder, Terrain, TileCost,
	};
}
