//! Terrain classes and the Cost Table that prices them.

use crate::{Coord, Cost, Error, Grid, Result};

use hashbrown::HashMap;
use std::fmt;
use std::ops::Add;

/// The kind of a Tile on the [`Grid`], identified by a small integer.
///
/// The crate attaches no meaning to the number itself: what a class costs is decided by the
/// [`CostTable`]. The associated constants name the classes priced by [`CostTable::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Terrain(pub u8);

impl Terrain {
	/// Open ground (cost `1` by default)
	pub const OPEN: Terrain = Terrain(0);
	/// A wall that cannot be walked across (cost `∞` by default)
	pub const IMPASSABLE: Terrain = Terrain(1);
	/// A moderate obstacle (cost `2` by default)
	pub const MODERATE: Terrain = Terrain(2);
	/// A heavy obstacle (cost `3` by default)
	pub const HEAVY: Terrain = Terrain(3);
}

impl From<u8> for Terrain {
	fn from(class: u8) -> Terrain {
		Terrain(class)
	}
}

impl fmt::Display for Terrain {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The Cost of stepping onto a Tile.
///
/// Every finite Cost compares less than [`TileCost::Infinite`], and adding anything to
/// `Infinite` stays `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileCost {
	/// a walkable Tile with the given Cost
	Finite(Cost),
	/// a Tile that cannot be walked across
	Infinite,
}

impl TileCost {
	/// Returns `true` if the Tile can be walked across
	pub fn is_finite(self) -> bool {
		matches!(self, TileCost::Finite(_))
	}

	/// The Cost as a number, or `None` if it is infinite
	pub fn finite(self) -> Option<Cost> {
		match self {
			TileCost::Finite(cost) => Some(cost),
			TileCost::Infinite => None,
		}
	}
}

impl From<Cost> for TileCost {
	fn from(cost: Cost) -> TileCost {
		TileCost::Finite(cost)
	}
}

impl Add for TileCost {
	type Output = TileCost;
	fn add(self, rhs: TileCost) -> TileCost {
		match (self, rhs) {
			(TileCost::Finite(a), TileCost::Finite(b)) => {
				a.checked_add(b).map_or(TileCost::Infinite, TileCost::Finite)
			}
			_ => TileCost::Infinite,
		}
	}
}

impl fmt::Display for TileCost {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TileCost::Finite(cost) => write!(f, "{}", cost),
			TileCost::Infinite => write!(f, "∞"),
		}
	}
}

/// Maps every known [`Terrain`] class to the [`TileCost`] of stepping onto it.
///
/// The table is plain data, so alternative cost schemes can be swapped in freely.
///
/// Default values:
/// ```
/// # use terrain_pathfinding::{CostTable, Terrain, TileCost};
/// let table = CostTable::default();
///
/// assert_eq!(table.cost_of(Terrain::OPEN), Ok(TileCost::Finite(1)));
/// assert_eq!(table.cost_of(Terrain::IMPASSABLE), Ok(TileCost::Infinite));
/// assert_eq!(table.cost_of(Terrain::MODERATE), Ok(TileCost::Finite(2)));
/// assert_eq!(table.cost_of(Terrain::HEAVY), Ok(TileCost::Finite(3)));
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
	costs: HashMap<Terrain, TileCost>,
}

impl CostTable {
	/// Creates a Cost Table without any entries
	pub fn empty() -> CostTable {
		CostTable {
			costs: HashMap::new(),
		}
	}

	/// Adds or replaces the Cost of a class, returning the modified table.
	///
	/// ## Examples
	/// ```
	/// # use terrain_pathfinding::{CostTable, Terrain, TileCost};
	/// // make heavy obstacles walls as well
	/// let table = CostTable::default().with_cost(Terrain::HEAVY, TileCost::Infinite);
	///
	/// assert_eq!(table.cost_of(Terrain::HEAVY), Ok(TileCost::Infinite));
	/// ```
	pub fn with_cost(mut self, terrain: Terrain, cost: TileCost) -> CostTable {
		self.insert(terrain, cost);
		self
	}

	/// Adds or replaces the Cost of a class, returning the previous Cost if there was one
	pub fn insert(&mut self, terrain: Terrain, cost: TileCost) -> Option<TileCost> {
		self.costs.insert(terrain, cost)
	}

	/// Looks up the Cost of stepping onto a Tile of the given class.
	///
	/// ## Errors
	/// [`Error::UnknownTerrain`] if the class has no entry.
	pub fn cost_of(&self, terrain: Terrain) -> Result<TileCost> {
		self.costs
			.get(&terrain)
			.copied()
			.ok_or(Error::UnknownTerrain(terrain))
	}

	/// The number of classes in the table
	pub fn len(&self) -> usize {
		self.costs.len()
	}

	/// Returns `true` if the table has no entries
	pub fn is_empty(&self) -> bool {
		self.costs.is_empty()
	}

	/// Iterates over all entries in arbitrary order
	pub fn iter(&self) -> impl Iterator<Item = (Terrain, TileCost)> + '_ {
		self.costs.iter().map(|(&terrain, &cost)| (terrain, cost))
	}

	/// Returns `true` if the Manhattan Heuristic never overestimates on this table.
	///
	/// That holds exactly when every finite Cost is at least `1`. Searches still work with
	/// cheaper Tiles, but the resulting Paths are no longer guaranteed to be optimal.
	pub fn is_admissible(&self) -> bool {
		self.costs
			.values()
			.filter_map(|cost| cost.finite())
			.all(|cost| cost >= 1)
	}

	/// Sums up the Cost of walking along `steps` on `grid`.
	///
	/// Every Tile except the first is paid for when it is entered, which is the same
	/// accounting the Search uses. An empty or single-element sequence costs `0`.
	/// Consecutive elements are not checked for adjacency.
	///
	/// ## Errors
	/// [`Error::OutOfBounds`] or [`Error::UnknownTerrain`] for the first offending step.
	pub fn path_cost(&self, grid: &Grid, steps: &[Coord]) -> Result<TileCost> {
		if let Some(&first) = steps.first() {
			grid.terrain_at(first)?;
		}
		steps
			.iter()
			.skip(1)
			.try_fold(TileCost::Finite(0), |total, &step| {
				Ok(total + self.cost_of(grid.terrain_at(step)?)?)
			})
	}
}

impl Default for CostTable {
	fn default() -> CostTable {
		[
			(Terrain::OPEN, TileCost::Finite(1)),
			(Terrain::IMPASSABLE, TileCost::Infinite),
			(Terrain::MODERATE, TileCost::Finite(2)),
			(Terrain::HEAVY, TileCost::Finite(3)),
		]
		.into_iter()
		.collect()
	}
}

impl FromIterator<(Terrain, TileCost)> for CostTable {
	fn from_iter<I: IntoIterator<Item = (Terrain, TileCost)>>(iter: I) -> CostTable {
		CostTable {
			costs: iter.into_iter().collect(),
		}
	}
}
