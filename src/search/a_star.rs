use super::HeuristicElement;
use crate::{
	neighbors::ManhattanNeighborhood, terrain::TileCost, Coord, Cost, CostTable, Grid, Path,
	Result,
};

use hashbrown::HashMap;
use log::{debug, trace};
use std::collections::BinaryHeap;

/// Searches `grid` for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Moves go up, down, left or right. Entering a Tile costs whatever `costs` charges for its
/// [`Terrain`](crate::Terrain); Tiles with an infinite Cost are never entered. The start is
/// never entered and therefore never priced, so it may hold any Terrain. The Heuristic
/// is the Manhattan distance to `goal`, which keeps the result optimal as long as every finite
/// Cost in `costs` is at least `1`.
///
/// Frontier entries with the same estimate are expanded in the order they were discovered, so
/// the returned Path is always the same for the same input.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{a_star_search, CostTable, Grid, Terrain};
///
/// let mut grid = Grid::new(3, 3)?;
/// grid.set_terrain((1, 1), Terrain::IMPASSABLE)?;
///
/// let path = a_star_search(&grid, &CostTable::default(), (0, 0), (2, 2))?;
///
/// assert_eq!(path.cost(), 4);
/// assert_eq!(path.len(), 5);
/// assert!(!path.contains(&(1, 1)));
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
///
/// If the goal cannot be reached, the Path is empty:
/// ```
/// # use terrain_pathfinding::{a_star_search, CostTable, Grid, Terrain};
/// let mut grid = Grid::new(1, 5)?;
/// grid.set_terrain((0, 2), Terrain::IMPASSABLE)?;
///
/// let path = a_star_search(&grid, &CostTable::default(), (0, 0), (0, 4))?;
///
/// assert!(path.is_empty());
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
///
/// ## Returns
/// - `[start]` with a Cost of `0` if `start == goal`
/// - an empty Path if the goal is unreachable, including when `goal` sits on an infinite-Cost
///   Tile
/// - otherwise the Path from `start` to `goal`, both inclusive
///
/// ## Errors
/// - [`Error::OutOfBounds`](crate::Error::OutOfBounds) if `start` or `goal` is not on the Grid
/// - [`Error::UnknownTerrain`](crate::Error::UnknownTerrain) if the search tries to enter a
///   Tile whose class has no entry in `costs`. A walled-off goal with such a class is simply
///   unreachable.
pub fn a_star_search(
	grid: &Grid,
	costs: &CostTable,
	start: Coord,
	goal: Coord,
) -> Result<Path<Coord>> {
	grid.check_bounds(start)?;
	grid.check_bounds(goal)?;

	if start == goal {
		return Ok(Path::new(vec![start], 0));
	}
	// the start is never entered, so its Terrain is never priced
	if let Ok(TileCost::Infinite) = costs.cost_of(grid.terrain_at(goal)?) {
		debug!("{:?} is impassable and cannot be reached", goal);
		return Ok(Path::unreachable());
	}

	let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

	let mut g_score: HashMap<Coord, Cost> = HashMap::new();
	let mut came_from: HashMap<Coord, Coord> = HashMap::new();
	let mut frontier = BinaryHeap::new();
	let mut sequence = 0;

	g_score.insert(start, 0);
	frontier.push(HeuristicElement {
		coord: start,
		cost: 0,
		estimate: neighborhood.heuristic(start, goal),
		sequence,
	});

	let mut expanded = 0usize;
	while let Some(HeuristicElement {
		coord: current,
		cost: current_cost,
		..
	}) = frontier.pop()
	{
		if current == goal {
			break;
		}
		// a cheaper way to `current` was found after this entry was pushed
		if current_cost > g_score[&current] {
			continue;
		}
		expanded += 1;

		for neighbor in neighborhood.get_all_neighbors(current) {
			if neighbor == start {
				continue;
			}
			let step = costs.cost_of(grid.terrain_at(neighbor)?)?;
			let tentative = match TileCost::Finite(current_cost) + step {
				TileCost::Finite(cost) => cost,
				TileCost::Infinite => continue,
			};

			let improves = g_score
				.get(&neighbor)
				.map_or(true, |&known| tentative < known);
			if improves {
				g_score.insert(neighbor, tentative);
				came_from.insert(neighbor, current);
				sequence += 1;
				frontier.push(HeuristicElement {
					coord: neighbor,
					cost: tentative,
					estimate: tentative.saturating_add(neighborhood.heuristic(neighbor, goal)),
					sequence,
				});
			}
		}
	}
	trace!(
		"expanded {} Tiles, {} discovered, {} left on the frontier",
		expanded,
		g_score.len(),
		frontier.len()
	);

	let path = reconstruct(&came_from, &g_score, start, goal);
	if path.is_reachable() {
		debug!("found {}", path);
	} else {
		debug!("{:?} is unreachable from {:?}", goal, start);
	}
	Ok(path)
}

/// Walks `came_from` back from `goal` and returns the steps in start-to-goal order.
fn reconstruct(
	came_from: &HashMap<Coord, Coord>,
	g_score: &HashMap<Coord, Cost>,
	start: Coord,
	goal: Coord,
) -> Path<Coord> {
	let Some(&cost) = g_score.get(&goal) else {
		return Path::unreachable();
	};

	let mut steps = vec![goal];
	let mut current = goal;
	while let Some(&prev) = came_from.get(&current) {
		steps.push(prev);
		current = prev;
	}
	if current != start {
		return Path::unreachable();
	}
	steps.reverse();
	Path::new(steps, cost)
}
