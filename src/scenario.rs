//! A single routing task: a Grid with a start and a goal, and the rules for setting it up.
//!
//! The [`Grid`] itself accepts any [`Terrain`] anywhere. A [`Scenario`] is stricter:
//! - start and goal must be on open ground,
//! - obstacles must be one of [`OBSTACLE_KINDS`] and may not cover the start or the goal.

use crate::{
	obstacles::{self, OBSTACLE_KINDS},
	Coord, Error, Grid, Path, Pathfinder, Result, Terrain,
};

use log::debug;
use nanorand::Rng;

/// Verifies that `coord` is a valid start or goal on `grid`.
///
/// ## Errors
/// - [`Error::OutOfBounds`] if `coord` is not on the Grid
/// - [`Error::BlockedEndpoint`] if the Tile is not [`Terrain::OPEN`]
pub fn check_endpoint(grid: &Grid, coord: Coord) -> Result<()> {
	match grid.terrain_at(coord)? {
		Terrain::OPEN => Ok(()),
		terrain => Err(Error::BlockedEndpoint { coord, terrain }),
	}
}

/// A Grid with a fixed start and goal.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{scenario::Scenario, Grid, Pathfinder, Terrain};
///
/// let mut scenario = Scenario::new(Grid::new(3, 3)?, (0, 0), (2, 2))?;
/// scenario.add_obstacle((1, 1), Terrain::IMPASSABLE)?;
///
/// // obstacles never cover the endpoints
/// assert!(scenario.add_obstacle((2, 2), Terrain::HEAVY).is_err());
///
/// let path = scenario.find_path(&Pathfinder::default())?;
/// assert_eq!(path.cost(), 4);
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
	grid: Grid,
	start: Coord,
	goal: Coord,
}

impl Scenario {
	/// Creates a Scenario after checking both endpoints with [`check_endpoint`].
	///
	/// `start` and `goal` may be the same Tile.
	pub fn new(grid: Grid, start: Coord, goal: Coord) -> Result<Scenario> {
		check_endpoint(&grid, start)?;
		check_endpoint(&grid, goal)?;
		Ok(Scenario { grid, start, goal })
	}

	/// The Grid including all obstacles placed so far
	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	/// The start of the route
	pub fn start(&self) -> Coord {
		self.start
	}

	/// The goal of the route
	pub fn goal(&self) -> Coord {
		self.goal
	}

	/// Verifies that an obstacle of class `terrain` could be placed at `coord`.
	///
	/// Tiles that already hold an obstacle may be overwritten.
	///
	/// ## Errors
	/// - [`Error::OutOfBounds`] if `coord` is not on the Grid
	/// - [`Error::ObstacleOnEndpoint`] if `coord` is the start or the goal
	/// - [`Error::InvalidObstacle`] if `terrain` is not one of [`OBSTACLE_KINDS`]
	pub fn check_obstacle(&self, coord: Coord, terrain: Terrain) -> Result<()> {
		self.grid.check_bounds(coord)?;
		if coord == self.start || coord == self.goal {
			return Err(Error::ObstacleOnEndpoint(coord));
		}
		if !OBSTACLE_KINDS.contains(&terrain) {
			return Err(Error::InvalidObstacle(terrain));
		}
		Ok(())
	}

	/// Places an obstacle after checking it with [`check_obstacle`](Scenario::check_obstacle).
	/// Nothing is changed if the check fails.
	pub fn add_obstacle(&mut self, coord: Coord, terrain: Terrain) -> Result<()> {
		self.check_obstacle(coord, terrain)?;
		self.grid.set_terrain(coord, terrain)
	}

	/// Scatters up to `count` random obstacles of any of the [`OBSTACLE_KINDS`] over the open
	/// Tiles, keeping the start and the goal free.
	///
	/// See [`obstacles::scatter_obstacles`].
	pub fn scatter_obstacles<R: Rng<OUTPUT>, const OUTPUT: usize>(
		&mut self,
		count: usize,
		rng: &mut R,
	) -> Result<Vec<(Coord, Terrain)>> {
		let reserved = [self.start, self.goal];
		let placed =
			obstacles::scatter_obstacles(&mut self.grid, count, &reserved, &OBSTACLE_KINDS, rng)?;
		debug!("scattered {} random obstacles", placed.len());
		Ok(placed)
	}

	/// Searches the cheapest Path from the start to the goal
	pub fn find_path(&self, pathfinder: &Pathfinder) -> Result<Path<Coord>> {
		pathfinder.find_path(&self.grid, self.start, self.goal)
	}

	/// Consumes the Scenario, returning its Grid
	pub fn into_grid(self) -> Grid {
		self.grid
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use nanorand::WyRand;

	fn scenario() -> Scenario {
		Scenario::new(Grid::square(4).unwrap(), (0, 0), (3, 3)).unwrap()
	}

	#[test]
	fn endpoints_must_be_open() {
		let mut grid = Grid::new(2, 2).unwrap();
		grid.set_terrain((1, 1), Terrain::MODERATE).unwrap();

		assert_eq!(check_endpoint(&grid, (0, 0)), Ok(()));
		assert_eq!(
			check_endpoint(&grid, (1, 1)),
			Err(Error::BlockedEndpoint {
				coord: (1, 1),
				terrain: Terrain::MODERATE
			})
		);
		assert_eq!(
			Scenario::new(grid.clone(), (0, 0), (1, 1)),
			Err(Error::BlockedEndpoint {
				coord: (1, 1),
				terrain: Terrain::MODERATE
			})
		);
		assert_eq!(
			Scenario::new(grid, (0, 2), (0, 0)),
			Err(Error::OutOfBounds {
				coord: (0, 2),
				rows: 2,
				cols: 2
			})
		);
	}

	#[test]
	fn start_may_equal_goal() {
		let scenario = Scenario::new(Grid::new(1, 1).unwrap(), (0, 0), (0, 0)).unwrap();
		let path = scenario.find_path(&Pathfinder::default()).unwrap();

		assert_eq!(path, vec![(0, 0)]);
	}

	#[test]
	fn obstacle_rules() {
		let mut scenario = scenario();

		assert_eq!(
			scenario.add_obstacle((0, 0), Terrain::HEAVY),
			Err(Error::ObstacleOnEndpoint((0, 0)))
		);
		assert_eq!(
			scenario.add_obstacle((3, 3), Terrain::IMPASSABLE),
			Err(Error::ObstacleOnEndpoint((3, 3)))
		);
		assert_eq!(
			scenario.add_obstacle((1, 1), Terrain::OPEN),
			Err(Error::InvalidObstacle(Terrain::OPEN))
		);
		assert_eq!(
			scenario.add_obstacle((1, 1), Terrain(4)),
			Err(Error::InvalidObstacle(Terrain(4)))
		);
		assert_eq!(
			scenario.add_obstacle((4, 0), Terrain::HEAVY),
			Err(Error::OutOfBounds {
				coord: (4, 0),
				rows: 4,
				cols: 4
			})
		);
		// rejected obstacles leave no trace
		assert_eq!(scenario.grid(), &Grid::square(4).unwrap());

		for kind in OBSTACLE_KINDS {
			scenario.add_obstacle((2, 1), kind).unwrap();
			assert_eq!(scenario.grid().terrain_at((2, 1)), Ok(kind));
		}
	}

	#[test]
	fn scatter_keeps_endpoints_free() {
		let mut scenario = scenario();
		let mut rng = WyRand::new_seed(9);

		let placed = scenario.scatter_obstacles(20, &mut rng).unwrap();

		// 16 Tiles minus start and goal
		assert_eq!(placed.len(), 14);
		assert_eq!(scenario.grid().terrain_at(scenario.start()), Ok(Terrain::OPEN));
		assert_eq!(scenario.grid().terrain_at(scenario.goal()), Ok(Terrain::OPEN));
		assert!(placed
			.iter()
			.all(|(_, terrain)| OBSTACLE_KINDS.contains(terrain)));
	}

	#[test]
	fn routes_around_obstacles() {
		let mut scenario = scenario();
		for row in 0..3 {
			scenario.add_obstacle((row, 1), Terrain::IMPASSABLE).unwrap();
		}
		let path = scenario.find_path(&Pathfinder::default()).unwrap();

		assert_eq!(path.cost(), 6);
		assert!(path.contains(&(3, 1)));

		let grid = scenario.into_grid();
		assert_eq!(grid.terrain_at((0, 1)), Ok(Terrain::IMPASSABLE));
	}
}
