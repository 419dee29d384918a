use crate::{terrain::Terrain, Coord, Error, Result};

/// A rectangular Grid of [`Terrain`] classes, stored row by row.
///
/// The dimensions are fixed on creation. The only way to change a Grid afterwards is to place
/// Terrain on individual Tiles, which keeps every row the same length.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{Grid, Terrain};
///
/// let mut grid = Grid::new(3, 4)?;
/// grid.set_terrain((1, 2), Terrain::HEAVY)?;
///
/// assert_eq!(grid.terrain_at((1, 2))?, Terrain::HEAVY);
/// assert_eq!(grid.terrain_at((0, 0))?, Terrain::OPEN);
/// assert!(grid.terrain_at((3, 0)).is_err());
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
	rows: usize,
	cols: usize,
	tiles: Vec<Terrain>,
}

impl Grid {
	/// Side length of [`Grid::default`]
	pub const DEFAULT_SIZE: usize = 10;

	/// Creates a Grid of `rows x cols` Tiles of open ground.
	///
	/// ## Errors
	/// [`Error::InvalidDimensions`] if `rows` or `cols` is `0`.
	pub fn new(rows: usize, cols: usize) -> Result<Grid> {
		if rows == 0 || cols == 0 {
			return Err(Error::InvalidDimensions { rows, cols });
		}
		Ok(Grid {
			rows,
			cols,
			tiles: vec![Terrain::OPEN; rows * cols],
		})
	}

	/// Creates a square Grid of open ground.
	///
	/// ## Errors
	/// [`Error::InvalidDimensions`] if `size` is `0`.
	pub fn square(size: usize) -> Result<Grid> {
		Grid::new(size, size)
	}

	/// The number of rows
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// The number of columns
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// `(rows, cols)`
	pub fn size(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// Returns `true` if `coord` lies inside `[0, rows) x [0, cols)`
	pub fn contains(&self, (row, col): Coord) -> bool {
		row < self.rows && col < self.cols
	}

	/// Verifies that `coord` lies on the Grid.
	///
	/// ## Errors
	/// [`Error::OutOfBounds`] otherwise.
	pub fn check_bounds(&self, coord: Coord) -> Result<()> {
		if self.contains(coord) {
			Ok(())
		} else {
			Err(Error::OutOfBounds {
				coord,
				rows: self.rows,
				cols: self.cols,
			})
		}
	}

	fn index_of(&self, coord: Coord) -> Result<usize> {
		self.check_bounds(coord)?;
		Ok(coord.0 * self.cols + coord.1)
	}

	/// Places `terrain` on the Tile at `coord`.
	///
	/// The class itself is not validated; pricing it is the job of the
	/// [`CostTable`](crate::CostTable).
	///
	/// ## Errors
	/// [`Error::OutOfBounds`] if `coord` is not on the Grid.
	pub fn set_terrain(&mut self, coord: Coord, terrain: Terrain) -> Result<()> {
		let index = self.index_of(coord)?;
		self.tiles[index] = terrain;
		Ok(())
	}

	/// Reads the Terrain of the Tile at `coord`.
	///
	/// ## Errors
	/// [`Error::OutOfBounds`] if `coord` is not on the Grid.
	pub fn terrain_at(&self, coord: Coord) -> Result<Terrain> {
		let index = self.index_of(coord)?;
		Ok(self.tiles[index])
	}

	/// Iterates over all Tiles in row-major order
	pub fn iter(&self) -> impl Iterator<Item = (Coord, Terrain)> + '_ {
		let cols = self.cols;
		self.tiles
			.iter()
			.enumerate()
			.map(move |(i, &terrain)| ((i / cols, i % cols), terrain))
	}
}

impl Default for Grid {
	fn default() -> Grid {
		Grid {
			rows: Grid::DEFAULT_SIZE,
			cols: Grid::DEFAULT_SIZE,
			tiles: vec![Terrain::OPEN; Grid::DEFAULT_SIZE * Grid::DEFAULT_SIZE],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_dimensions() {
		assert_eq!(
			Grid::new(0, 5),
			Err(Error::InvalidDimensions { rows: 0, cols: 5 })
		);
		assert_eq!(
			Grid::new(5, 0),
			Err(Error::InvalidDimensions { rows: 5, cols: 0 })
		);
		assert_eq!(
			Grid::square(0),
			Err(Error::InvalidDimensions { rows: 0, cols: 0 })
		);
	}

	#[test]
	fn starts_open() {
		let grid = Grid::new(2, 3).unwrap();
		assert_eq!(grid.size(), (2, 3));
		assert!(grid.iter().all(|(_, terrain)| terrain == Terrain::OPEN));
		assert_eq!(grid.iter().count(), 6);
		assert_eq!(grid.iter().last(), Some(((1, 2), Terrain::OPEN)));

		let default = Grid::default();
		assert_eq!(default, Grid::square(10).unwrap());
	}

	#[test]
	fn set_then_get() {
		let mut grid = Grid::new(4, 2).unwrap();
		for (coord, class) in [((0, 0), 1), ((3, 1), 2), ((2, 0), 3), ((1, 1), 200)] {
			grid.set_terrain(coord, Terrain(class)).unwrap();
			assert_eq!(grid.terrain_at(coord), Ok(Terrain(class)));
		}
		// other Tiles are untouched
		assert_eq!(grid.terrain_at((0, 1)), Ok(Terrain::OPEN));
	}

	#[test]
	fn out_of_bounds() {
		let mut grid = Grid::new(3, 5).unwrap();
		let oob = |coord| Error::OutOfBounds { coord, rows: 3, cols: 5 };

		assert_eq!(grid.terrain_at((3, 0)), Err(oob((3, 0))));
		assert_eq!(grid.terrain_at((0, 5)), Err(oob((0, 5))));
		assert_eq!(grid.set_terrain((7, 7), Terrain::HEAVY), Err(oob((7, 7))));
		// no clamping onto the border
		assert!(grid.iter().all(|(_, terrain)| terrain == Terrain::OPEN));
		assert!(grid.contains((2, 4)));
		assert!(!grid.contains((2, 5)));
	}
}
