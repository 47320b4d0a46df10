//! The boolean matrix of a binary relation.

use crate::error::RelationError;
use crate::render::render_rows;
use std::fmt::{Display, Formatter};

/// The largest universe accepted by [`RelationMatrix::new`].
pub const DEFAULT_MAX_UNIVERSE_SIZE: usize = 49;

/// A square boolean matrix representing a binary relation on a finite universe
/// `X = {0, ..., n - 1}`. Cell `(i, j)` is `true` when `i` is related to `j`.
///
/// Cells are stored in a single row-major buffer of exactly `n * n` values. The size of
/// the matrix is fixed at construction. Every cell starts as `false`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRelationMatrix"))]
pub struct RelationMatrix {
    size: usize,
    cells: Vec<bool>,
}

/// Unchecked serialized form of [`RelationMatrix`], validated by [`RelationMatrix::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRelationMatrix {
    size: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRelationMatrix> for RelationMatrix {
    type Error = RelationError;

    fn try_from(value: RawRelationMatrix) -> Result<Self, Self::Error> {
        RelationMatrix::from_cells(value.size, value.cells)
    }
}

impl RelationMatrix {
    /// Create an empty relation over `size` elements, using [`DEFAULT_MAX_UNIVERSE_SIZE`]
    /// as the upper bound.
    pub fn new(size: usize) -> Result<RelationMatrix, RelationError> {
        RelationMatrix::with_max_size(size, DEFAULT_MAX_UNIVERSE_SIZE)
    }

    /// Create an empty relation over `size` elements, failing with
    /// [`RelationError::InvalidSize`] unless `1 <= size <= max_size`.
    pub fn with_max_size(size: usize, max_size: usize) -> Result<RelationMatrix, RelationError> {
        if size == 0 || size > max_size {
            return Err(RelationError::InvalidSize {
                size,
                max: max_size,
            });
        }
        Ok(RelationMatrix {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Create a relation over `size` elements from its row-major `cells`.
    ///
    /// Fails unless `size >= 1` and there are exactly `size * size` cells. The universe
    /// bound of [`RelationMatrix::new`] is not applied.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<RelationMatrix, RelationError> {
        if size == 0 {
            return Err(RelationError::InvalidSize {
                size,
                max: usize::MAX,
            });
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(RelationError::CellCount {
                size,
                found: cells.len(),
            });
        }
        Ok(RelationMatrix { size, cells })
    }

    /// The number of elements of the underlying universe (`n`).
    pub fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is not a valid element index.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[self.index(i, j)]
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is not a valid element index.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        let index = self.index(i, j);
        self.cells[index] = value;
    }

    /// The cells of row `i`, i.e. the elements related to `i`.
    pub fn row(&self, i: usize) -> &[bool] {
        assert!(i < self.size, "Row {i} out of range for size {}", self.size);
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Overwrite row `i` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range or `values` does not have exactly [`Self::size`] items.
    pub fn set_row(&mut self, i: usize, values: &[bool]) {
        assert_eq!(values.len(), self.size, "Row length does not match matrix size");
        assert!(i < self.size, "Row {i} out of range for size {}", self.size);
        self.cells[i * self.size..(i + 1) * self.size].copy_from_slice(values);
    }

    /// Iterate over all rows, starting with row `0`.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over all related pairs `(i, j)` in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value)
            .map(|(index, _)| (index / self.size, index % self.size))
    }

    /// The number of related pairs.
    pub fn pair_count(&self) -> usize {
        self.cells.iter().filter(|it| **it).count()
    }

    /// True if `(i, k)` and `(k, j)` always imply `(i, j)`.
    pub fn is_transitive(&self) -> bool {
        for (i, k) in self.pairs() {
            for j in 0..self.size {
                if self.get(k, j) && !self.get(i, j) {
                    return false;
                }
            }
        }
        true
    }

    /// True if every pair of `self` is also a pair of `other`.
    ///
    /// Relations of different sizes are never subsets of each other.
    pub fn is_subset(&self, other: &RelationMatrix) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| !*a || *b)
    }

    /// Cell-wise disjunction of two relations of the same size.
    pub fn union(&self, other: &RelationMatrix) -> RelationMatrix {
        self.assert_same_size(other);
        RelationMatrix {
            size: self.size,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| *a || *b)
                .collect(),
        }
    }

    /// Boolean matrix product, i.e. the composition of relations: `(i, j)` is in the result
    /// iff there is some `k` with `(i, k)` in `self` and `(k, j)` in `other`.
    pub fn product(&self, other: &RelationMatrix) -> RelationMatrix {
        self.assert_same_size(other);
        let mut result = RelationMatrix {
            size: self.size,
            cells: vec![false; self.cells.len()],
        };
        for (i, k) in self.pairs() {
            for j in 0..self.size {
                if other.get(k, j) {
                    result.set(i, j, true);
                }
            }
        }
        result
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size && j < self.size,
            "Cell ({i}, {j}) out of range for size {}",
            self.size
        );
        i * self.size + j
    }

    fn assert_same_size(&self, other: &RelationMatrix) {
        assert_eq!(
            self.size, other.size,
            "Relations over universes of different size"
        );
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in render_rows(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
