//! Ordered systems of same-dimension hyperplanes and the row-reduction
//! engine: elementary row operations, triangular form, RREF, and solution
//! classification.

use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use smallvec::SmallVec;
use tracing::debug;

use crate::hyperplane::Hyperplane;
use crate::printer::SystemPrinter;
use crate::real::Real;
use crate::vector::Vector;

/// Decimal places a unique solution's components are rounded to by
/// [LinearSystem::solve]. Use [LinearSystem::solve_rounded] to override.
pub const SOLUTION_DECIMAL_PLACES: u32 = 3;

/// Errors from system construction and row operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SystemError {
    /// A hyperplane does not live in the system's dimension.
    DimensionMismatch { expected: usize, found: usize },
    /// A system was constructed with no hyperplanes.
    Empty,
    /// A row scaling by zero was requested, which does not preserve the
    /// solution set.
    ZeroScale,
}

impl Display for SystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "All planes in the system should live in the same dimension: {} vs {}",
                    expected, found
                )
            }
            SystemError::Empty => write!(f, "The system contains no hyperplanes"),
            SystemError::ZeroScale => {
                write!(f, "Scaling a row by zero is not a valid row operation")
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// The outcome of solving a system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    Unique(Vector),
    NoSolutions,
    InfiniteSolutions,
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(v) => write!(f, "{}", v),
            Solution::NoSolutions => write!(f, "No solutions"),
            Solution::InfiniteSolutions => write!(f, "Infinitely many solutions"),
        }
    }
}

/// An ordered collection of hyperplanes that all share one dimension.
///
/// The system owns its hyperplanes by value. The row-operation methods mutate
/// in place; [triangular_form](LinearSystem::triangular_form),
/// [rref](LinearSystem::rref) and [solve](LinearSystem::solve) work on a copy
/// and never mutate the receiver.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Create a system from a list of hyperplanes, all of the same dimension.
    pub fn new(planes: Vec<Hyperplane>) -> Result<LinearSystem, SystemError> {
        let dimension = match planes.first() {
            Some(p) => p.dimension(),
            None => return Err(SystemError::Empty),
        };

        for p in &planes {
            if p.dimension() != dimension {
                return Err(SystemError::DimensionMismatch {
                    expected: dimension,
                    found: p.dimension(),
                });
            }
        }

        Ok(LinearSystem { planes, dimension })
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// The number of variables.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn row(&self, index: usize) -> &Hyperplane {
        &self.planes[index]
    }

    pub fn rows(&self) -> &[Hyperplane] {
        &self.planes
    }

    /// Replace row `index`, checking the dimension.
    pub fn set_row(&mut self, index: usize, plane: Hyperplane) -> Result<(), SystemError> {
        if plane.dimension() != self.dimension {
            return Err(SystemError::DimensionMismatch {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[index] = plane;
        Ok(())
    }

    /// Exchange rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.planes.swap(i, j);
    }

    /// Scale row `row` by a nonzero coefficient.
    pub fn multiply_row(&mut self, coefficient: &Real, row: usize) -> Result<(), SystemError> {
        if coefficient.is_zero() {
            return Err(SystemError::ZeroScale);
        }
        self.planes[row].scale(coefficient);
        Ok(())
    }

    /// The out-of-place counterpart of [multiply_row](LinearSystem::multiply_row).
    fn scaled_row(&self, coefficient: &Real, row: usize) -> Hyperplane {
        let mut plane = self.planes[row].clone();
        plane.scale(coefficient);
        plane
    }

    /// Add `coefficient * row src` into row `dst`. A zero coefficient
    /// degenerates to a no-op on `dst`.
    pub fn add_multiple_of_row(&mut self, coefficient: &Real, src: usize, dst: usize) {
        if coefficient.is_zero() {
            return;
        }
        let scaled = self.scaled_row(coefficient, src);
        self.planes[dst].add_assign(&scaled);
    }

    /// Per row, the column of its first non-negligible coefficient, or `None`
    /// for an all-zero row.
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| p.first_nonzero_index().ok())
            .collect()
    }

    /// Reduce a copy of the system to triangular form: each row's leading
    /// coefficient is strictly right of the one above, with all-zero rows at
    /// the bottom.
    pub fn triangular_form(&self) -> LinearSystem {
        let mut s = self.clone();
        let n = s.planes.len();

        let mut p = 0;
        let mut v = 0;
        while p < n && v < s.dimension {
            if s.planes[p].normal()[v].is_negligible() {
                // the first row below p with a usable pivot, in index order
                match (p + 1..n).find(|&k| !s.planes[k].normal()[v].is_negligible()) {
                    Some(k) => {
                        debug!("swapping row {} into pivot position {}", k, p);
                        s.swap_rows(p, k);
                    }
                    None => {
                        debug!("no pivot in column {} at or below row {}", v, p);
                        v += 1;
                        continue;
                    }
                }
            }

            let pivot = s.planes[p].normal()[v].clone();
            for x in p + 1..n {
                let c = s.planes[x].normal()[v].clone();
                if !c.is_negligible() {
                    s.add_multiple_of_row(&-(c / &pivot), p, x);
                }
            }

            p += 1;
            v += 1;
        }

        s
    }

    /// Reduce a copy of the system to its reduced row-echelon form: every
    /// pivot is 1 and is the only nonzero entry in its column.
    pub fn rref(&self) -> LinearSystem {
        let mut s = self.triangular_form();
        let pivots = s.pivot_indices();

        for p in (0..s.planes.len()).rev() {
            let v = match pivots[p] {
                Some(v) => v,
                None => continue,
            };

            let pivot = s.planes[p].normal()[v].clone();
            s.planes[p].scale(&pivot.recip());

            for x in 0..p {
                let c = s.planes[x].normal()[v].clone();
                if !c.is_negligible() {
                    s.add_multiple_of_row(&-c, p, x);
                }
            }
        }

        s
    }

    /// Solve the system, classifying it as uniquely solvable, inconsistent,
    /// or under-determined. Solution components are rounded to
    /// [SOLUTION_DECIMAL_PLACES].
    pub fn solve(&self) -> Solution {
        self.solve_rounded(SOLUTION_DECIMAL_PLACES)
    }

    /// Like [solve](LinearSystem::solve) with a caller-chosen rounding of the
    /// solution components.
    pub fn solve_rounded(&self, decimal_places: u32) -> Solution {
        let r = self.rref();
        let pivots = r.pivot_indices();

        // a zero row with a nonzero constant is the contradiction 0 = k
        for (row, pivot) in pivots.iter().enumerate() {
            if pivot.is_none() && !r.planes[row].constant().is_negligible() {
                debug!("row {} reduces to an inconsistency", row);
                return Solution::NoSolutions;
            }
        }

        let rank = pivots.iter().flatten().count();
        if rank < r.dimension {
            debug!("rank {} below dimension {}", rank, r.dimension);
            return Solution::InfiniteSolutions;
        }

        let mut coords: SmallVec<[Real; 4]> = (0..r.dimension).map(|_| Real::zero()).collect();
        for (row, pivot) in pivots.iter().enumerate() {
            if let Some(col) = *pivot {
                coords[col] = r.planes[row].constant().round_to_places(decimal_places);
            }
        }

        Solution::Unique(Vector::from_components(coords))
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    /// Get the `index`th row of the system.
    #[inline]
    fn index(&self, index: usize) -> &Hyperplane {
        &self.planes[index]
    }
}

impl Display for LinearSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        SystemPrinter::new(self).fmt(f)
    }
}
