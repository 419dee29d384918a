use crate::Cost;

/// A Path on the Grid together with the total Cost of walking it.
///
/// The first element is the start and the last one is the goal. The start itself is not paid
/// for, so a Path that consists only of its start has a Cost of `0`.
///
/// An **empty** Path is the result of searching for a goal that cannot be reached. It is a
/// regular value and not an Error.
///
/// Dereferences to a slice of the steps, so all read-only slice methods are available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P> {
	path: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of steps and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use terrain_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.steps(), &['a', 'b', 'c']);
	/// assert_eq!(path.cost(), 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// the empty Path, returned when the goal is unreachable
	pub fn unreachable() -> Path<P> {
		Path {
			path: Vec::new(),
			cost: 0,
		}
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the steps of the Path, from start to goal
	pub fn steps(&self) -> &[P] {
		&self.path
	}

	/// Returns `false` if this is the result of an unsuccessful search
	pub fn is_reachable(&self) -> bool {
		!self.path.is_empty()
	}

	/// Consumes the Path, returning its steps
	pub fn into_vec(self) -> Vec<P> {
		self.path
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<P> IntoIterator for Path<P> {
	type Item = P;
	type IntoIter = std::vec::IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path == *rhs
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 2);

		assert_eq!(path[0], (0, 0));
		assert_eq!(path[2], (1, 1));
		assert_eq!(path.first(), Some(&(0, 0)));
		assert_eq!(path.last(), Some(&(1, 1)));
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 2);

		assert_eq!(
			&format!("{}", path),
			"Path[Cost = 2]: (0, 0) -> (0, 1) -> (1, 1)"
		);
	}

	#[test]
	fn path_display_empty() {
		let path = Path::<(usize, usize)>::unreachable();

		assert!(!path.is_reachable());
		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn path_into_vec() {
		let path = Path::new(vec![1, 2], 1);

		assert_eq!(path, vec![1, 2]);
		assert_eq!(path.into_vec(), vec![1, 2]);
	}
}
