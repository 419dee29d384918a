//! Helpers for populating a [`Grid`] with obstacles.

use crate::{Coord, Grid, Result, Terrain};

use log::{debug, warn};
use nanorand::Rng;

/// The classes that count as obstacles under the default [`CostTable`](crate::CostTable):
/// impassable, moderate and heavy.
pub const OBSTACLE_KINDS: [Terrain; 3] = [Terrain::IMPASSABLE, Terrain::MODERATE, Terrain::HEAVY];

/// Places every `(coord, terrain)` pair on the Grid, in order.
///
/// ## Errors
/// [`Error::OutOfBounds`](crate::Error::OutOfBounds) for the first Coordinate that is not on
/// the Grid. Obstacles before it have already been placed at that point.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{obstacles::place_obstacles, Grid, Terrain};
///
/// let mut grid = Grid::new(3, 3)?;
/// place_obstacles(&mut grid, &[((0, 1), Terrain::IMPASSABLE), ((2, 2), Terrain::HEAVY)])?;
///
/// assert_eq!(grid.terrain_at((0, 1))?, Terrain::IMPASSABLE);
/// assert_eq!(grid.terrain_at((2, 2))?, Terrain::HEAVY);
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
pub fn place_obstacles(grid: &mut Grid, obstacles: &[(Coord, Terrain)]) -> Result<()> {
	for &(coord, terrain) in obstacles {
		grid.set_terrain(coord, terrain)?;
	}
	debug!("placed {} obstacles", obstacles.len());
	Ok(())
}

/// Scatters up to `count` random obstacles over the open Tiles of the Grid.
///
/// Every obstacle lands on a distinct Tile that is [`Terrain::OPEN`] and not listed in
/// `reserved` (usually the start and the goal). Its class is picked uniformly from `kinds`.
/// If there are fewer free Tiles than `count`, all of them are used.
///
/// Any [`nanorand`] generator can be used. The result only depends on its state, so a seeded
/// generator always produces the same obstacles.
///
/// Returns the placed obstacles in the order they were placed.
///
/// ## Examples
/// ```
/// use nanorand::WyRand;
/// use terrain_pathfinding::obstacles::{scatter_obstacles, OBSTACLE_KINDS};
/// use terrain_pathfinding::{Grid, Terrain};
///
/// let mut grid = Grid::square(10)?;
/// let mut rng = WyRand::new_seed(42);
///
/// let placed = scatter_obstacles(&mut grid, 10, &[(0, 0), (9, 9)], &OBSTACLE_KINDS, &mut rng)?;
///
/// assert_eq!(placed.len(), 10);
/// assert_eq!(grid.terrain_at((0, 0))?, Terrain::OPEN);
/// assert_eq!(grid.terrain_at((9, 9))?, Terrain::OPEN);
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
pub fn scatter_obstacles<R: Rng<OUTPUT>, const OUTPUT: usize>(
	grid: &mut Grid,
	count: usize,
	reserved: &[Coord],
	kinds: &[Terrain],
	rng: &mut R,
) -> Result<Vec<(Coord, Terrain)>> {
	if kinds.is_empty() {
		return Ok(Vec::new());
	}
	let mut free: Vec<Coord> = grid
		.iter()
		.filter(|&(coord, terrain)| terrain == Terrain::OPEN && !reserved.contains(&coord))
		.map(|(coord, _)| coord)
		.collect();

	let mut placed = Vec::with_capacity(count.min(free.len()));
	while placed.len() < count && !free.is_empty() {
		let coord = free.swap_remove(rng.generate_range(0..free.len()));
		let terrain = kinds[rng.generate_range(0..kinds.len())];
		grid.set_terrain(coord, terrain)?;
		placed.push((coord, terrain));
	}

	if placed.len() < count {
		warn!(
			"only {} free tiles available for {} obstacles",
			placed.len(),
			count
		);
	}
	Ok(placed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;
	use nanorand::{Pcg64, WyRand};

	#[test]
	fn place_out_of_bounds() {
		let mut grid = Grid::new(2, 2).unwrap();
		let result = place_obstacles(
			&mut grid,
			&[((0, 0), Terrain::HEAVY), ((2, 0), Terrain::HEAVY)],
		);

		assert_eq!(
			result,
			Err(Error::OutOfBounds {
				coord: (2, 0),
				rows: 2,
				cols: 2
			})
		);
		assert_eq!(grid.terrain_at((0, 0)), Ok(Terrain::HEAVY));
	}

	#[test]
	fn scatter_respects_reserved_and_occupied() {
		let mut grid = Grid::new(4, 4).unwrap();
		grid.set_terrain((1, 1), Terrain::MODERATE).unwrap();
		let reserved = [(0, 0), (3, 3)];
		let mut rng = WyRand::new_seed(7);

		let placed =
			scatter_obstacles(&mut grid, 5, &reserved, &[Terrain::IMPASSABLE], &mut rng).unwrap();

		assert_eq!(placed.len(), 5);
		for &(coord, terrain) in &placed {
			assert!(!reserved.contains(&coord));
			assert_ne!(coord, (1, 1));
			assert_eq!(terrain, Terrain::IMPASSABLE);
			assert_eq!(grid.terrain_at(coord), Ok(Terrain::IMPASSABLE));
		}
		// all distinct
		let mut coords: Vec<_> = placed.iter().map(|&(coord, _)| coord).collect();
		coords.sort();
		coords.dedup();
		assert_eq!(coords.len(), 5);
		assert_eq!(grid.terrain_at((1, 1)), Ok(Terrain::MODERATE));
	}

	#[test]
	fn scatter_saturates() {
		let mut grid = Grid::new(2, 2).unwrap();
		let mut rng = WyRand::new_seed(1);

		let placed =
			scatter_obstacles(&mut grid, 10, &[(0, 0)], &[Terrain::HEAVY], &mut rng).unwrap();

		assert_eq!(placed.len(), 3);
		assert_eq!(grid.terrain_at((0, 0)), Ok(Terrain::OPEN));
		assert!(grid
			.iter()
			.filter(|&(coord, _)| coord != (0, 0))
			.all(|(_, terrain)| terrain == Terrain::HEAVY));
	}

	#[test]
	fn scatter_is_seeded() {
		let run = |seed| {
			let mut grid = Grid::square(10).unwrap();
			let mut rng = WyRand::new_seed(seed);
			scatter_obstacles(&mut grid, 10, &[], &OBSTACLE_KINDS, &mut rng).unwrap();
			grid
		};

		assert_eq!(run(3), run(3));
	}

	#[test]
	fn scatter_with_other_generator() {
		let mut grid = Grid::square(6).unwrap();
		let mut rng = Pcg64::new_seed(11);

		let placed =
			scatter_obstacles(&mut grid, 8, &[(0, 0), (5, 5)], &OBSTACLE_KINDS, &mut rng).unwrap();

		assert_eq!(placed.len(), 8);
		for (coord, terrain) in placed {
			assert!(OBSTACLE_KINDS.contains(&terrain));
			assert_eq!(grid.terrain_at(coord), Ok(terrain));
		}
		assert_eq!(grid.terrain_at((0, 0)), Ok(Terrain::OPEN));
		assert_eq!(grid.terrain_at((5, 5)), Ok(Terrain::OPEN));
	}

	#[test]
	fn scatter_without_kinds() {
		let mut grid = Grid::new(2, 2).unwrap();
		let mut rng = WyRand::new_seed(1);

		assert_eq!(
			scatter_obstacles(&mut grid, 3, &[], &[], &mut rng),
			Ok(Vec::new())
		);
		assert_eq!(grid, Grid::new(2, 2).unwrap());
	}
}
