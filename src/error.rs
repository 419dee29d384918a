use thiserror::Error;

use crate::{terrain::Terrain, Coord};

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when the Grid or the Search is used with invalid arguments.
///
/// None of these are transient. Note that an unreachable Goal is **not** an Error,
/// but an empty [`Path`](crate::Path).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// A Grid was requested with zero rows or zero columns.
	#[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
	InvalidDimensions {
		/// the requested number of rows
		rows: usize,
		/// the requested number of columns
		cols: usize,
	},

	/// A Coordinate lies outside of `[0, rows) x [0, cols)`.
	#[error("coordinate {coord:?} is out of bounds for a {rows}x{cols} grid")]
	OutOfBounds {
		/// the offending Coordinate
		coord: Coord,
		/// number of rows of the Grid
		rows: usize,
		/// number of columns of the Grid
		cols: usize,
	},

	/// The Cost Table has no entry for a Terrain class.
	#[error("no cost registered for terrain class {0}")]
	UnknownTerrain(Terrain),

	/// A start or goal was picked on a Tile that is not open ground.
	#[error("{coord:?} is not open ground but terrain class {terrain}")]
	BlockedEndpoint {
		/// the offending Coordinate
		coord: Coord,
		/// the Terrain found there
		terrain: Terrain,
	},

	/// An obstacle was placed on the start or the goal.
	#[error("cannot place an obstacle on the start or goal {0:?}")]
	ObstacleOnEndpoint(Coord),

	/// A Terrain class that is not one of the obstacle classes was used as an obstacle.
	#[error("terrain class {0} is not an obstacle")]
	InvalidObstacle(Terrain),
}
