//! Fixed-dimension vectors of multi-precision reals.

use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use smallvec::SmallVec;

use crate::printer::VectorPrinter;
use crate::real::Real;

/// Errors from vector construction and arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorError {
    /// A vector was constructed with no components.
    EmptyCoordinates,
    /// Operands of a component-wise operation disagree in dimension.
    DimensionMismatch { expected: usize, found: usize },
    /// A normalization or angle was requested on a zero vector.
    ZeroVector,
    /// A component ratio in a parallelism test had a zero denominator.
    DivisionByZero,
    /// A component literal could not be parsed.
    InvalidNumber(String),
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::EmptyCoordinates => write!(f, "The coordinates must be nonempty"),
            VectorError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Vectors do not have equal dimension: {} vs {}",
                    expected, found
                )
            }
            VectorError::ZeroVector => write!(f, "Cannot normalize the zero vector"),
            VectorError::DivisionByZero => {
                write!(f, "Division by zero in a component ratio")
            }
            VectorError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
        }
    }
}

impl std::error::Error for VectorError {}

/// An n-dimensional vector. Immutable through the public API; component-wise
/// binary operations require equal dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: SmallVec<[Real; 4]>,
}

impl Vector {
    /// Create a new vector from a list of scalars.
    pub fn new(components: Vec<Real>) -> Result<Vector, VectorError> {
        if components.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Vector {
            data: components.into_iter().collect(),
        })
    }

    /// Create a new vector from decimal literals, e.g. `&["5.862", "1.178"]`.
    pub fn parse<S: AsRef<str>>(components: &[S]) -> Result<Vector, VectorError> {
        if components.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        let mut data = SmallVec::with_capacity(components.len());
        for c in components {
            data.push(Real::parse(c.as_ref()).map_err(VectorError::InvalidNumber)?);
        }
        Ok(Vector { data })
    }

    /// Create a new vector from `f64` components.
    pub fn from_f64s(components: &[f64]) -> Result<Vector, VectorError> {
        if components.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Vector {
            data: components.iter().map(|&c| Real::from(c)).collect(),
        })
    }

    pub(crate) fn from_components(data: SmallVec<[Real; 4]>) -> Vector {
        debug_assert!(!data.is_empty());
        Vector { data }
    }

    /// Create a zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Vector, VectorError> {
        if dimension == 0 {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Vector {
            data: (0..dimension).map(|_| Real::zero()).collect(),
        })
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn components(&self) -> &[Real] {
        &self.data
    }

    fn check_dimension(&self, rhs: &Vector) -> Result<(), VectorError> {
        if self.data.len() != rhs.data.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.data.len(),
                found: rhs.data.len(),
            });
        }
        Ok(())
    }

    /// Add two vectors.
    pub fn add(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        self.check_dimension(rhs)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Subtract two vectors.
    pub fn sub(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        self.check_dimension(rhs)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    /// Multiply every component by the scalar `k`.
    pub fn scale(&self, k: &Real) -> Vector {
        Vector {
            data: self.data.iter().map(|c| c * k).collect(),
        }
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Vector) -> Result<Real, VectorError> {
        self.check_dimension(rhs)?;
        let mut res = Real::zero();
        for (a, b) in self.data.iter().zip(&rhs.data) {
            res = res + a * b;
        }
        Ok(res)
    }

    pub fn norm_squared(&self) -> Real {
        let mut res = Real::zero();
        for c in &self.data {
            res = res + c * c;
        }
        res
    }

    pub fn magnitude(&self) -> Real {
        self.norm_squared().sqrt()
    }

    /// The unit vector in the same direction.
    pub fn normalized(&self) -> Result<Vector, VectorError> {
        let m = self.magnitude();
        if m.is_zero() {
            return Err(VectorError::ZeroVector);
        }
        Ok(self.scale(&m.recip()))
    }

    /// True iff the squared norm is below the tolerance.
    pub fn is_zero(&self) -> bool {
        self.norm_squared().is_negligible()
    }

    /// True iff the two vectors point along the same line.
    ///
    /// The zero vector counts as parallel to everything. Past that
    /// short-circuit, the pairwise component ratios are compared exactly; a
    /// zero denominator is an error rather than a silent mismatch.
    pub fn is_parallel(&self, rhs: &Vector) -> Result<bool, VectorError> {
        self.check_dimension(rhs)?;

        if self.is_zero() || rhs.is_zero() {
            return Ok(true);
        }

        let ratio = self.data[0]
            .checked_div(&rhs.data[0])
            .ok_or(VectorError::DivisionByZero)?;
        for (a, b) in self.data.iter().zip(&rhs.data).skip(1) {
            let r = a.checked_div(b).ok_or(VectorError::DivisionByZero)?;
            if r != ratio {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True iff the scalar product is negligible. The zero vector counts as
    /// orthogonal to everything.
    pub fn is_orthogonal(&self, rhs: &Vector) -> Result<bool, VectorError> {
        self.check_dimension(rhs)?;

        if self.is_zero() || rhs.is_zero() {
            return Ok(true);
        }

        Ok(self.dot(rhs)?.is_negligible())
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        if self.data.len() != 3 {
            return Err(VectorError::DimensionMismatch {
                expected: 3,
                found: self.data.len(),
            });
        }
        self.check_dimension(rhs)?;

        let (a, b) = (&self.data, &rhs.data);
        Ok(Vector {
            data: [
                &(&a[1] * &b[2]) - &(&a[2] * &b[1]),
                &(&a[2] * &b[0]) - &(&a[0] * &b[2]),
                &(&a[0] * &b[1]) - &(&a[1] * &b[0]),
            ]
            .into_iter()
            .collect(),
        })
    }

    /// The angle between two vectors, in radians or degrees.
    pub fn angle(&self, rhs: &Vector, in_degrees: bool) -> Result<Real, VectorError> {
        let cos = self.normalized()?.dot(&rhs.normalized()?)?;

        // guard against rounding past the domain of acos
        let cos = if cos > Real::one() {
            Real::one()
        } else if cos < -Real::one() {
            -Real::one()
        } else {
            cos
        };

        let rad = cos.acos();
        if in_degrees {
            Ok(rad * (Real::from(180.0) / Real::pi()))
        } else {
            Ok(rad)
        }
    }

    /// Project the vector onto the `target` vector.
    pub fn project_onto(&self, target: &Vector) -> Result<Vector, VectorError> {
        let unit = target.normalized()?;
        Ok(unit.scale(&self.dot(&unit)?))
    }

    pub(crate) fn scale_assign(&mut self, k: &Real) {
        for c in &mut self.data {
            *c = &*c * k;
        }
    }

    pub(crate) fn add_assign(&mut self, rhs: &Vector) {
        debug_assert_eq!(self.data.len(), rhs.data.len());
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = &*a + b;
        }
    }
}

impl Index<usize> for Vector {
    type Output = Real;

    /// Get the `i`th component of the vector.
    #[inline]
    fn index(&self, index: usize) -> &Real {
        &self.data[index]
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        VectorPrinter::new(self).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(components: &[f64]) -> Vector {
        Vector::from_f64s(components).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(
            Vector::new(vec![]).unwrap_err(),
            VectorError::EmptyCoordinates
        );
        assert_eq!(
            Vector::parse::<&str>(&[]).unwrap_err(),
            VectorError::EmptyCoordinates
        );
        assert!(matches!(
            Vector::parse(&["1.0", "nope"]).unwrap_err(),
            VectorError::InvalidNumber(_)
        ));
        assert_eq!(Vector::parse(&["1", "2", "3"]).unwrap().dimension(), 3);
    }

    #[test]
    fn arithmetic() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);

        assert_eq!(a.add(&b).unwrap(), v(&[5.0, 7.0, 9.0]));
        assert_eq!(b.sub(&a).unwrap(), v(&[3.0, 3.0, 3.0]));
        assert_eq!(a.scale(&Real::from(2.0)), v(&[2.0, 4.0, 6.0]));
        assert_eq!(a.dot(&b).unwrap(), Real::from(32.0));

        let short = v(&[1.0, 2.0]);
        assert_eq!(
            a.add(&short).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        assert!(a.dot(&short).is_err());
    }

    #[test]
    fn magnitude_and_normalization() {
        let a = v(&[3.0, 4.0]);
        assert_eq!(a.magnitude(), Real::from(5.0));

        let unit = a.normalized().unwrap();
        assert!(unit.sub(&v(&[0.6, 0.8])).unwrap().is_zero());
        assert!((unit.magnitude() - Real::one()).is_negligible());

        assert_eq!(
            Vector::zero(2).unwrap().normalized().unwrap_err(),
            VectorError::ZeroVector
        );
    }

    #[test]
    fn zero_test_uses_tolerance() {
        assert!(Vector::zero(3).unwrap().is_zero());
        assert!(v(&[1e-8, -1e-8]).is_zero());
        assert!(!v(&[1e-3, 0.0]).is_zero());
    }

    #[test]
    fn parallelism() {
        let a = v(&[2.0, 4.0, -6.0]);

        // powers of two scale exactly, so the ratios match bit for bit
        assert!(a.is_parallel(&a.scale(&Real::from(-2.0))).unwrap());
        assert!(a.is_parallel(&a.scale(&Real::from(0.5))).unwrap());
        assert!(!a.is_parallel(&v(&[2.0, 4.0, 6.0])).unwrap());

        // the zero vector is parallel to everything
        assert!(a.is_parallel(&Vector::zero(3).unwrap()).unwrap());
        assert!(Vector::zero(3).unwrap().is_parallel(&a).unwrap());

        // zero denominator without the short-circuit is an error
        assert_eq!(
            a.is_parallel(&v(&[2.0, 0.0, -6.0])).unwrap_err(),
            VectorError::DivisionByZero
        );
    }

    #[test]
    fn orthogonality() {
        let a = v(&[1.0, 2.0]);
        assert!(a.is_orthogonal(&v(&[-2.0, 1.0])).unwrap());
        assert!(!a.is_orthogonal(&v(&[1.0, 1.0])).unwrap());
        assert!(a.is_orthogonal(&Vector::zero(2).unwrap()).unwrap());
    }

    #[test]
    fn cross_product() {
        let a = v(&[1.0, 0.0, 0.0]);
        let b = v(&[0.0, 1.0, 0.0]);
        assert_eq!(a.cross(&b).unwrap(), v(&[0.0, 0.0, 1.0]));
        assert_eq!(b.cross(&a).unwrap(), v(&[0.0, 0.0, -1.0]));

        assert_eq!(
            v(&[1.0, 2.0]).cross(&v(&[3.0, 4.0])).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn angles() {
        let a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 3.0]);
        let right = a.angle(&b, true).unwrap();
        assert!((right - Real::from(90.0)).is_negligible_within(1e-20));

        assert_eq!(
            a.angle(&Vector::zero(2).unwrap(), false).unwrap_err(),
            VectorError::ZeroVector
        );
    }

    #[test]
    fn projection() {
        let a = v(&[2.0, 3.0]);
        let onto = v(&[4.0, 0.0]);
        assert_eq!(a.project_onto(&onto).unwrap(), v(&[2.0, 0.0]));
    }
}
