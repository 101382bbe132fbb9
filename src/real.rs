//! Multi-precision real scalars.
//!
//! Every quantity in this crate is a [Real]: a fixed-precision wrapper around
//! an MPFR float. Using a working precision well beyond `f64` keeps the
//! residues produced by row reduction many orders of magnitude below the
//! tolerance used for zero tests, so classification does not depend on
//! platform rounding.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use rug::{ops::CompleteRound, Float as MultiPrecisionFloat};

/// Working precision in bits, roughly 30 decimal digits.
pub const PRECISION: u32 = 100;

/// Tolerance used by all epsilon-based zero, parallelism and orthogonality
/// tests. Exact comparison (`==`, `<`) is never tolerance-based.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// A real number at the crate's working precision.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Real(MultiPrecisionFloat);

impl Real {
    pub fn zero() -> Real {
        Real(MultiPrecisionFloat::new(PRECISION))
    }

    pub fn one() -> Real {
        Real(MultiPrecisionFloat::with_val(PRECISION, 1))
    }

    /// Parse a decimal literal, e.g. `"-10.366"`.
    pub fn parse(s: &str) -> Result<Real, String> {
        Ok(Real(
            MultiPrecisionFloat::parse(s)
                .map_err(|e| e.to_string())?
                .complete(PRECISION),
        ))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True iff the magnitude is below [DEFAULT_TOLERANCE].
    pub fn is_negligible(&self) -> bool {
        self.is_negligible_within(DEFAULT_TOLERANCE)
    }

    /// True iff the magnitude is below `tolerance`.
    pub fn is_negligible_within(&self, tolerance: f64) -> bool {
        self.0.clone().abs() < tolerance
    }

    pub fn abs(&self) -> Real {
        Real(self.0.clone().abs())
    }

    pub fn sqrt(&self) -> Real {
        Real(self.0.clone().sqrt())
    }

    /// The multiplicative inverse.
    pub fn recip(&self) -> Real {
        Real(self.0.clone().recip())
    }

    /// Division that reports an exactly-zero divisor instead of producing an
    /// infinity.
    pub fn checked_div(&self, rhs: &Real) -> Option<Real> {
        if rhs.0.is_zero() {
            None
        } else {
            Some(Real(self.0.clone() / &rhs.0))
        }
    }

    /// Round to `places` decimal places, ties away from zero.
    pub fn round_to_places(&self, places: u32) -> Real {
        let scale = MultiPrecisionFloat::with_val(PRECISION, 10f64.powi(places as i32));
        Real((self.0.clone() * &scale).round() / scale)
    }

    pub fn acos(&self) -> Real {
        Real(self.0.clone().acos())
    }

    pub fn pi() -> Real {
        Real(MultiPrecisionFloat::with_val(
            PRECISION,
            rug::float::Constant::Pi,
        ))
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(MultiPrecisionFloat::with_val(PRECISION, value))
    }
}

impl From<i64> for Real {
    fn from(value: i64) -> Self {
        Real(MultiPrecisionFloat::with_val(PRECISION, value))
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.to_f64(), f)
    }
}

impl Add for Real {
    type Output = Real;

    fn add(self, rhs: Real) -> Real {
        Real(self.0 + rhs.0)
    }
}

impl Add<&Real> for Real {
    type Output = Real;

    fn add(self, rhs: &Real) -> Real {
        Real(self.0 + &rhs.0)
    }
}

impl Add for &Real {
    type Output = Real;

    fn add(self, rhs: &Real) -> Real {
        Real(self.0.clone() + &rhs.0)
    }
}

impl Sub for Real {
    type Output = Real;

    fn sub(self, rhs: Real) -> Real {
        Real(self.0 - rhs.0)
    }
}

impl Sub<&Real> for Real {
    type Output = Real;

    fn sub(self, rhs: &Real) -> Real {
        Real(self.0 - &rhs.0)
    }
}

impl Sub for &Real {
    type Output = Real;

    fn sub(self, rhs: &Real) -> Real {
        Real(self.0.clone() - &rhs.0)
    }
}

impl Mul for Real {
    type Output = Real;

    fn mul(self, rhs: Real) -> Real {
        Real(self.0 * rhs.0)
    }
}

impl Mul<&Real> for Real {
    type Output = Real;

    fn mul(self, rhs: &Real) -> Real {
        Real(self.0 * &rhs.0)
    }
}

impl Mul for &Real {
    type Output = Real;

    fn mul(self, rhs: &Real) -> Real {
        Real(self.0.clone() * &rhs.0)
    }
}

impl Div for Real {
    type Output = Real;

    fn div(self, rhs: Real) -> Real {
        Real(self.0 / rhs.0)
    }
}

impl Div<&Real> for Real {
    type Output = Real;

    fn div(self, rhs: &Real) -> Real {
        Real(self.0 / &rhs.0)
    }
}

impl Div for &Real {
    type Output = Real;

    fn div(self, rhs: &Real) -> Real {
        Real(self.0.clone() / &rhs.0)
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-self.0)
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-self.0.clone())
    }
}
