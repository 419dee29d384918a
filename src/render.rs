//! Plain-text rendering of a [`Grid`], optionally with a Path drawn on top.
//!
//! ```no_code
//!    0 1 2
//!   ---------
//! 0| * * .
//! 1| E * A
//! 2| . * *
//! ```
//! `.` open ground, `E` impassable, `A` moderate, `B` heavy, `*` Path.
//! Any other class is written as its number.

use crate::{Coord, Grid, Terrain};

use hashbrown::HashSet;
use std::fmt;

/// A [`Display`](fmt::Display)able view of a Grid with a Path overlay.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{render::GridView, Grid, Pathfinder, Terrain};
///
/// let mut grid = Grid::new(2, 3)?;
/// grid.set_terrain((0, 1), Terrain::IMPASSABLE)?;
///
/// let path = Pathfinder::default().find_path(&grid, (0, 0), (0, 2))?;
///
/// assert_eq!(
///     GridView::new(&grid).with_path(&path).to_string(),
///     "   0 1 2\n  ---------\n0| * E *\n1| * * *\n",
/// );
/// # Ok::<(), terrain_pathfinding::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
	grid: &'a Grid,
	path: &'a [Coord],
}

impl<'a> GridView<'a> {
	/// A view of the plain Grid
	pub fn new(grid: &'a Grid) -> GridView<'a> {
		GridView { grid, path: &[] }
	}

	/// Marks every step of `path` on the view
	pub fn with_path(self, path: &'a [Coord]) -> GridView<'a> {
		GridView { path, ..self }
	}
}

fn write_tile(f: &mut fmt::Formatter, terrain: Terrain) -> fmt::Result {
	match terrain {
		Terrain::OPEN => write!(f, "."),
		Terrain::IMPASSABLE => write!(f, "E"),
		Terrain::MODERATE => write!(f, "A"),
		Terrain::HEAVY => write!(f, "B"),
		other => write!(f, "{}", other),
	}
}

impl fmt::Display for GridView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let cols = self.grid.cols();
		let on_path: HashSet<Coord> = self.path.iter().copied().collect();

		write!(f, "  ")?;
		for col in 0..cols {
			write!(f, " {}", col)?;
		}
		writeln!(f)?;
		writeln!(f, "  {}", "---".repeat(cols))?;

		let mut tiles = self.grid.iter().peekable();
		while let Some(&((row, _), _)) = tiles.peek() {
			write!(f, "{}|", row)?;
			for _ in 0..cols {
				let Some((coord, terrain)) = tiles.next() else {
					break;
				};
				write!(f, " ")?;
				if on_path.contains(&coord) {
					write!(f, "*")?;
				} else {
					write_tile(f, terrain)?;
				}
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(&GridView::new(self), f)
	}
}
