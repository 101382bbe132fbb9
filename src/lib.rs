//! Echelon is a small exact-leaning linear algebra library for solving
//! systems of linear equations represented as hyperplane intersections.
//!
//! Every scalar is a multi-precision [Real](crate::real::Real), so the
//! residues left behind by Gaussian elimination stay far below the tolerance
//! used to decide whether a coefficient is zero. A
//! [LinearSystem](crate::linear_system::LinearSystem) can be reduced to
//! triangular form or reduced row echelon form, and
//! [solve](crate::linear_system::LinearSystem::solve) classifies the solution
//! set as unique, empty or infinite.
//!
//! For example, to solve a system of four equations in three unknowns:
//!
//! ```
//! use echelon::hyperplane::Hyperplane;
//! use echelon::linear_system::{LinearSystem, Solution};
//! use echelon::real::Real;
//! use echelon::vector::Vector;
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::new(Vector::parse(&["1", "1", "1"]).unwrap(), Real::parse("1").unwrap()),
//!     Hyperplane::new(Vector::parse(&["0", "1", "0"]).unwrap(), Real::parse("2").unwrap()),
//!     Hyperplane::new(Vector::parse(&["1", "1", "-1"]).unwrap(), Real::parse("3").unwrap()),
//!     Hyperplane::new(Vector::parse(&["1", "0", "-2"]).unwrap(), Real::parse("2").unwrap()),
//! ])
//! .unwrap();
//!
//! match system.solve() {
//!     Solution::Unique(x) => assert_eq!(x.to_string(), "(0, 2, -1)"),
//!     other => panic!("unexpected classification: {}", other),
//! }
//! ```

pub mod hyperplane;
pub mod linear_system;
pub mod printer;
pub mod real;
pub mod vector;
