mod a_star;
pub use a_star::a_star_search;

use crate::{Coord, Cost, CostTable, Grid, Path, Result};

use log::warn;
use std::cmp::Ordering;

/// An entry on the Frontier of a Search.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest `estimate`
/// first, and among equal estimates the entry that was pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement {
	pub coord: Coord,
	/// Cost from the start when this entry was pushed
	pub cost: Cost,
	/// `cost` plus the Heuristic
	pub estimate: Cost,
	/// insertion order, unique within one Search
	pub sequence: usize,
}
impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.estimate
			.cmp(&self.estimate)
			.then_with(|| rhs.sequence.cmp(&self.sequence))
	}
}

/// Finds Paths on any [`Grid`] using one fixed [`CostTable`].
///
/// The Pathfinder itself is immutable and keeps no state between searches, so a single
/// instance can serve any number of searches, also from multiple threads at once.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{CostTable, Grid, Pathfinder, Terrain, TileCost};
///
/// let mut grid = Grid::new(2, 4)?;
/// grid.set_terrain((0, 1), Terrain::HEAVY)?;
/// grid.set_terrain((0, 2), Terrain::HEAVY)?;
///
/// // default costs: walking around is cheaper
/// let path = Pathfinder::default().find_path(&grid, (0, 0), (0, 3))?;
/// assert_eq!(path, vec![(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (0, 3)]);
/// assert_eq!(path.cost(), 5);
///
/// // walking over heavy obstacles is cheap with this table
/// let pathfinder = Pathfinder::new(
///     CostTable::default().with_cost(Terrain::HEAVY, TileCost::Finite(1)),
/// );
/// let path = pathfinder.find_path(&grid, (0, 0), (0, 3))?;
/// assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
/// assert_eq!(path.cost(), 3);
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pathfinder {
	costs: CostTable,
}

impl Pathfinder {
	/// Creates a Pathfinder that prices Tiles with `costs`.
	///
	/// Logs a warning if `costs` contains finite Costs below `1`: the Manhattan Heuristic may
	/// overestimate on such a table and Paths are no longer guaranteed to be optimal.
	pub fn new(costs: CostTable) -> Pathfinder {
		if !costs.is_admissible() {
			warn!("cost table has steps cheaper than 1, paths may not be optimal");
		}
		Pathfinder { costs }
	}

	/// The Cost Table used by this Pathfinder
	pub fn costs(&self) -> &CostTable {
		&self.costs
	}

	/// Finds the cheapest Path from `start` to `goal`.
	///
	/// See [`a_star_search`] for the exact contract.
	pub fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Path<Coord>> {
		a_star_search(grid, &self.costs, start, goal)
	}

	/// Answers several `(start, goal)` queries on the same Grid, one after another.
	///
	/// The results are in the same order as `queries`.
	pub fn find_paths(
		&self,
		grid: &Grid,
		queries: &[(Coord, Coord)],
	) -> Vec<Result<Path<Coord>>> {
		queries
			.iter()
			.map(|&(start, goal)| self.find_path(grid, start, goal))
			.collect()
	}

	/// Same as [`find_paths`](Pathfinder::find_paths), but the queries are answered in parallel.
	///
	/// Every query runs its own independent Search against the shared, read-only Grid.
	#[cfg(feature = "parallel")]
	pub fn find_paths_parallel(
		&self,
		grid: &Grid,
		queries: &[(Coord, Coord)],
	) -> Vec<Result<Path<Coord>>> {
		use rayon::prelude::*;

		queries
			.par_iter()
			.map(|&(start, goal)| self.find_path(grid, start, goal))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Error, Terrain, TileCost};
	use std::collections::BinaryHeap;

	fn element(estimate: Cost, sequence: usize) -> HeuristicElement {
		HeuristicElement {
			coord: (0, sequence),
			cost: 0,
			estimate,
			sequence,
		}
	}

	#[test]
	fn frontier_order() {
		let mut heap = BinaryHeap::new();
		for (estimate, sequence) in [(5, 0), (3, 1), (5, 2), (3, 3), (4, 4)] {
			heap.push(element(estimate, sequence));
		}
		let order: Vec<_> = std::iter::from_fn(|| heap.pop())
			.map(|e| e.sequence)
			.collect();

		assert_eq!(order, vec![1, 3, 4, 0, 2]);
	}

	#[test]
	fn find_paths_keeps_order() {
		let mut grid = Grid::new(1, 5).unwrap();
		grid.set_terrain((0, 2), Terrain::IMPASSABLE).unwrap();
		let pathfinder = Pathfinder::default();

		let queries = [((0, 0), (0, 1)), ((0, 0), (0, 4)), ((0, 0), (1, 0))];
		let results = pathfinder.find_paths(&grid, &queries);

		assert_eq!(results.len(), 3);
		assert_eq!(results[0].as_ref().unwrap().cost(), 1);
		assert!(results[1].as_ref().unwrap().is_empty());
		assert!(matches!(results[2], Err(Error::OutOfBounds { .. })));
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn parallel_matches_sequential() {
		let mut grid = Grid::new(8, 8).unwrap();
		for r in 1..7 {
			grid.set_terrain((r, 4), Terrain::IMPASSABLE).unwrap();
			grid.set_terrain((r, 2), Terrain::MODERATE).unwrap();
		}
		let pathfinder = Pathfinder::new(
			CostTable::default().with_cost(Terrain::MODERATE, TileCost::Finite(5)),
		);
		let queries: Vec<_> = (0..8).map(|r| ((r, 0), (7 - r, 7))).collect();

		assert_eq!(
			pathfinder.find_paths_parallel(&grid, &queries),
			pathfinder.find_paths(&grid, &queries)
		);
	}
}
