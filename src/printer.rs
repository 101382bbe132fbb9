//! Human-readable formatting of vectors, hyperplanes and systems.
//!
//! A hyperplane prints as an equation in the variables `x_1 .. x_n`, with
//! coefficients rounded for display:
//!
//! ```text
//! -0.412x_1 + 3.806x_2 + 0.728x_3 = -3.46
//! ```
//!
//! Display rounding is cosmetic only; it never feeds back into the
//! arithmetic.

use std::fmt::{self, Display, Formatter, Write};

use crate::hyperplane::Hyperplane;
use crate::linear_system::LinearSystem;
use crate::real::Real;
use crate::vector::Vector;

/// Decimal places used when formatting coefficients and constants.
pub const DISPLAY_DECIMAL_PLACES: u32 = 3;

fn rounded(value: &Real, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value.to_f64() * scale).round() / scale
}

/// Write a display-rounded value, dropping a trailing `.0`.
fn write_number(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

pub struct VectorPrinter<'a> {
    vector: &'a Vector,
}

impl<'a> VectorPrinter<'a> {
    pub fn new(vector: &'a Vector) -> VectorPrinter<'a> {
        VectorPrinter { vector }
    }
}

impl Display for VectorPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        for (i, c) in self.vector.components().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_number(f, rounded(c, DISPLAY_DECIMAL_PLACES))?;
        }
        f.write_char(')')
    }
}

pub struct HyperplanePrinter<'a> {
    plane: &'a Hyperplane,
    decimal_places: u32,
}

impl<'a> HyperplanePrinter<'a> {
    pub fn new(plane: &'a Hyperplane) -> HyperplanePrinter<'a> {
        HyperplanePrinter {
            plane,
            decimal_places: DISPLAY_DECIMAL_PLACES,
        }
    }

    pub fn with_decimal_places(plane: &'a Hyperplane, decimal_places: u32) -> HyperplanePrinter<'a> {
        HyperplanePrinter {
            plane,
            decimal_places,
        }
    }

    fn write_coefficient(
        &self,
        f: &mut Formatter<'_>,
        coefficient: f64,
        is_initial_term: bool,
    ) -> fmt::Result {
        if coefficient < 0.0 {
            f.write_char('-')?;
        }
        if coefficient > 0.0 && !is_initial_term {
            f.write_char('+')?;
        }
        if !is_initial_term {
            f.write_char(' ')?;
        }
        if coefficient.abs() != 1.0 {
            write_number(f, coefficient.abs())?;
        }
        Ok(())
    }
}

impl Display for HyperplanePrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.plane.first_nonzero_index() {
            Ok(initial_index) => {
                let normal = self.plane.normal();
                let mut any_term = false;
                for i in 0..normal.dimension() {
                    let c = rounded(&normal[i], self.decimal_places);
                    if c == 0.0 {
                        continue;
                    }
                    if any_term {
                        f.write_char(' ')?;
                    }
                    any_term = true;
                    self.write_coefficient(f, c, i == initial_index)?;
                    write!(f, "x_{}", i + 1)?;
                }
                if !any_term {
                    f.write_char('0')?;
                }
            }
            Err(_) => f.write_char('0')?,
        }

        f.write_str(" = ")?;
        write_number(f, rounded(self.plane.constant(), self.decimal_places))
    }
}

pub struct SystemPrinter<'a> {
    system: &'a LinearSystem,
}

impl<'a> SystemPrinter<'a> {
    pub fn new(system: &'a LinearSystem) -> SystemPrinter<'a> {
        SystemPrinter { system }
    }
}

impl Display for SystemPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Linear System:")?;
        for (i, p) in self.system.rows().iter().enumerate() {
            write!(f, "\nEquation {}: {}", i + 1, p)?;
        }
        Ok(())
    }
}
