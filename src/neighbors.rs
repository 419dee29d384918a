//! How a Path can move along the Grid.

use crate::{Coord, Cost};

/// Row/column offsets of the four cardinal Neighbors: up, down, left, right.
const CARDINALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}

	/// Provides all Neighbors of a Coordinate that lie on the Grid, in the order
	/// up, down, left, right.
	///
	/// Note that this does not check whether the Tile at a Neighbor can be walked across.
	pub fn get_all_neighbors(&self, (row, col): Coord) -> impl Iterator<Item = Coord> {
		let (rows, cols) = (self.rows, self.cols);

		CARDINALS
			.iter()
			.map(move |(dr, dc)| (row as isize + dr, col as isize + dc))
			.filter(move |&(r, c)| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols)
			.map(|(r, c)| (r as usize, c as usize))
	}

	/// The Manhattan distance between `point` and `goal`: `|r1 - r2| + |c1 - c2|`.
	///
	/// This never overestimates as long as every walkable Tile costs at least `1`.
	pub fn heuristic(&self, point: Coord, goal: Coord) -> Cost {
		point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
	}
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((2, 0)).collect::<Vec<_>>(),
		vec![(1, 0), (3, 0), (2, 1)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((2, 2)).collect::<Vec<_>>(),
		vec![(1, 2), (3, 2), (2, 1), (2, 3)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
		vec![(3, 4), (4, 3)],
	);
}

#[test]
fn test_manhattan_single_tile() {
	let neighborhood = ManhattanNeighborhood::new(1, 1);
	assert_eq!(neighborhood.get_all_neighbors((0, 0)).count(), 0);
}

#[test]
fn test_manhattan_heuristic() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
	assert_eq!(neighborhood.heuristic((0, 4), (2, 1)), 2 + 3);
	assert_eq!(neighborhood.heuristic((2, 2), (2, 2)), 0);
}
