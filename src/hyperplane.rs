//! Hyperplanes: affine subsets of n-dimensional space defined by
//! `normal · x = constant`. In two dimensions this is a line, in three a
//! plane.

use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

use crate::printer::HyperplanePrinter;
use crate::real::Real;
use crate::vector::{Vector, VectorError};

/// Decimal places the basepoint coordinate is rounded to.
pub const BASEPOINT_DECIMAL_PLACES: u32 = 3;

/// Errors from hyperplane pivot lookups.
#[derive(Clone, Debug, PartialEq)]
pub enum HyperplaneError {
    /// Every coefficient of the normal is negligible, so the row pins down no
    /// pivot and no basepoint.
    NoNonzeroElements,
}

impl Display for HyperplaneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HyperplaneError::NoNonzeroElements => write!(f, "No nonzero elements found"),
        }
    }
}

impl std::error::Error for HyperplaneError {}

/// Where two lines in the plane meet.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    /// The lines cross in a single point.
    Point(Vector),
    /// The lines never meet.
    Parallel,
    /// The lines are the same affine set.
    Equal,
}

/// A hyperplane with a cached basepoint.
///
/// The normal, constant and basepoint are only ever updated together, through
/// the row-operation mutators, so the cached basepoint can never go stale.
#[derive(Clone, Debug)]
pub struct Hyperplane {
    normal: Vector,
    constant: Real,
    basepoint: Option<Vector>,
}

impl Hyperplane {
    /// Create a hyperplane from its normal vector and constant term.
    pub fn new(normal: Vector, constant: Real) -> Hyperplane {
        let basepoint = Hyperplane::compute_basepoint(&normal, &constant);
        Hyperplane {
            normal,
            constant,
            basepoint,
        }
    }

    /// Create a hyperplane through the origin: `normal · x = 0`.
    pub fn from_normal(normal: Vector) -> Hyperplane {
        Hyperplane::new(normal, Real::zero())
    }

    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    pub fn constant(&self) -> &Real {
        &self.constant
    }

    /// A representative point on the hyperplane, or `None` when the normal is
    /// entirely negligible.
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// The column of the first coefficient whose magnitude exceeds the
    /// tolerance.
    pub fn first_nonzero_index(&self) -> Result<usize, HyperplaneError> {
        self.normal
            .components()
            .iter()
            .position(|c| !c.is_negligible())
            .ok_or(HyperplaneError::NoNonzeroElements)
    }

    /// Solve `normal[i] * x_i = constant` at the first nonzero coefficient,
    /// zero elsewhere. A fully negligible normal has no basepoint.
    fn compute_basepoint(normal: &Vector, constant: &Real) -> Option<Vector> {
        let i = normal
            .components()
            .iter()
            .position(|c| !c.is_negligible())?;

        let mut data: SmallVec<[Real; 4]> =
            (0..normal.dimension()).map(|_| Real::zero()).collect();
        data[i] = (constant / &normal[i]).round_to_places(BASEPOINT_DECIMAL_PLACES);
        Some(Vector::from_components(data))
    }

    /// Scale the normal and constant by `k`, recomputing the basepoint.
    pub(crate) fn scale(&mut self, k: &Real) {
        self.normal.scale_assign(k);
        self.constant = &self.constant * k;
        self.basepoint = Hyperplane::compute_basepoint(&self.normal, &self.constant);
    }

    /// Add another hyperplane into this one, recomputing the basepoint.
    pub(crate) fn add_assign(&mut self, other: &Hyperplane) {
        self.normal.add_assign(&other.normal);
        self.constant = &self.constant + &other.constant;
        self.basepoint = Hyperplane::compute_basepoint(&self.normal, &self.constant);
    }

    /// True iff the normals are parallel but the hyperplanes are distinct
    /// affine sets.
    pub fn is_parallel(&self, other: &Hyperplane) -> Result<bool, VectorError> {
        Ok(self != other && self.normal.is_parallel(&other.normal)?)
    }

    /// Intersect two lines in the plane. Defined for dimension 2 only.
    ///
    /// A negligible normal determinant means the lines do not cross in a
    /// point; they are then either the same line or parallel. The point's
    /// coordinates are rounded to [BASEPOINT_DECIMAL_PLACES].
    pub fn intersection(&self, other: &Hyperplane) -> Result<Intersection, VectorError> {
        if self.dimension() != 2 {
            return Err(VectorError::DimensionMismatch {
                expected: 2,
                found: self.dimension(),
            });
        }
        if other.dimension() != 2 {
            return Err(VectorError::DimensionMismatch {
                expected: 2,
                found: other.dimension(),
            });
        }

        // a x + b y = k1
        // c x + d y = k2
        let (a, b, k1) = (&self.normal[0], &self.normal[1], &self.constant);
        let (c, d, k2) = (&other.normal[0], &other.normal[1], &other.constant);

        let det = &(a * d) - &(b * c);
        if det.is_negligible() {
            if self == other {
                return Ok(Intersection::Equal);
            }
            return Ok(Intersection::Parallel);
        }

        let x = (&(d * k1) - &(b * k2)) / &det;
        let y = (&(a * k2) - &(c * k1)) / &det;

        let mut data: SmallVec<[Real; 4]> = SmallVec::new();
        data.push(x.round_to_places(BASEPOINT_DECIMAL_PLACES));
        data.push(y.round_to_places(BASEPOINT_DECIMAL_PLACES));
        Ok(Intersection::Point(Vector::from_components(data)))
    }
}

impl PartialEq for Hyperplane {
    /// Geometric equality: the two hyperplanes are the same affine set.
    ///
    /// Zero-normal hyperplanes are equal to each other regardless of their
    /// constants. Otherwise the basepoint-difference vector must be
    /// orthogonal to both normals; closeness of the constant terms alone is
    /// never sufficient.
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        if self.normal.is_zero() || other.normal.is_zero() {
            return self.normal.is_zero() && other.normal.is_zero();
        }

        let (Some(a), Some(b)) = (&self.basepoint, &other.basepoint) else {
            return false;
        };
        let Ok(v) = b.sub(a) else {
            return false;
        };

        v.is_orthogonal(&self.normal).unwrap_or(false)
            && v.is_orthogonal(&other.normal).unwrap_or(false)
    }
}

impl Display for Hyperplane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        HyperplanePrinter::new(self).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn plane(normal: &[f64], constant: f64) -> Hyperplane {
        Hyperplane::new(Vector::from_f64s(normal).unwrap(), Real::from(constant))
    }

    #[test]
    fn first_nonzero_index() {
        assert_eq!(plane(&[0.0, 2.0, 0.0], 1.0).first_nonzero_index(), Ok(1));
        assert_eq!(plane(&[3.0, 2.0], 1.0).first_nonzero_index(), Ok(0));
        assert_eq!(
            plane(&[0.0, 0.0], 1.0).first_nonzero_index(),
            Err(HyperplaneError::NoNonzeroElements)
        );
        // negligible coefficients are skipped
        assert_eq!(plane(&[1e-12, 5.0], 1.0).first_nonzero_index(), Ok(1));
    }

    #[test]
    fn basepoint() {
        let p = plane(&[3.0, 2.0], 6.0);
        assert_eq!(
            p.basepoint(),
            Some(&Vector::from_f64s(&[2.0, 0.0]).unwrap())
        );

        assert_eq!(plane(&[0.0, 0.0], 1.0).basepoint(), None);

        let through_origin = Hyperplane::from_normal(Vector::from_f64s(&[1.0, 1.0]).unwrap());
        assert_eq!(through_origin.constant(), &Real::zero());
    }

    #[test]
    fn equal_to_scalar_multiples_of_itself() {
        let p = plane(&[1.5, -2.0, 4.0], 4.0);

        let double = Hyperplane::new(p.normal().scale(&Real::from(-2.0)), Real::from(-8.0));
        assert_eq!(p, double);

        let half = Hyperplane::new(p.normal().scale(&Real::from(0.5)), Real::from(2.0));
        assert_eq!(p, half);
    }

    #[test]
    fn parallel_but_distinct() {
        let p = plane(&[1.0, 1.0], 1.0);
        let q = plane(&[2.0, 2.0], 4.0);
        let r = plane(&[1.0, -1.0], 1.0);

        assert_ne!(p, q);
        assert!(p.is_parallel(&q).unwrap());

        // equal planes are not "parallel"
        let same = plane(&[2.0, 2.0], 2.0);
        assert_eq!(p, same);
        assert!(!p.is_parallel(&same).unwrap());

        // non-parallel normals
        assert!(!p.is_parallel(&r).unwrap());
    }

    #[test]
    fn zero_normal_equality() {
        let a = plane(&[0.0, 0.0], 1.0);
        let b = plane(&[0.0, 0.0], -7.0);
        let c = plane(&[1.0, 0.0], 1.0);

        // both degenerate: equal regardless of constants
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn line_intersections() {
        fn line(normal: &[&str], constant: &str) -> Hyperplane {
            Hyperplane::new(
                Vector::parse(normal).unwrap(),
                Real::parse(constant).unwrap(),
            )
        }

        // proportional on both sides: one and the same line
        let l1 = line(&["4.046", "2.836"], "1.21");
        let l2 = line(&["10.115", "7.09"], "3.025");
        assert_eq!(l1.intersection(&l2).unwrap(), Intersection::Equal);

        // crossing lines
        let l1 = line(&["7.204", "3.182"], "8.68");
        let l2 = line(&["8.172", "4.114"], "9.883");
        assert_eq!(
            l1.intersection(&l2).unwrap(),
            Intersection::Point(Vector::parse(&["1.173", "0.073"]).unwrap())
        );

        // proportional normals, incompatible constants
        let l1 = line(&["1.182", "5.562"], "6.744");
        let l2 = line(&["1.773", "8.343"], "9.525");
        assert_eq!(l1.intersection(&l2).unwrap(), Intersection::Parallel);

        // axis-aligned lines, zero leading coefficient
        let vertical = line(&["1", "0"], "1");
        let horizontal = line(&["0", "1"], "2");
        assert_eq!(
            vertical.intersection(&horizontal).unwrap(),
            Intersection::Point(Vector::parse(&["1", "2"]).unwrap())
        );

        // a degenerate line never crosses anything
        let degenerate = line(&["0", "0"], "1");
        assert_eq!(
            degenerate.intersection(&vertical).unwrap(),
            Intersection::Parallel
        );

        // only defined in the plane
        let p3 = plane(&[1.0, 2.0, 3.0], 4.0);
        assert_eq!(
            p3.intersection(&p3).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            vertical.intersection(&p3).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn distinct_constants_are_unequal() {
        let p = plane(&[1.0, 1.0], 1.0);
        let q = plane(&[1.0, 1.0], 2.0);
        assert_ne!(p, q);
    }
}
