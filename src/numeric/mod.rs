//! Small numeric helpers used alongside the locator.
//!
//! - [`interp`]: piecewise-linear interpolation over non-decreasing sample points
//! - [`rotation`]: quaternion rotation of 3-vectors
//! - [`grid`]: cell edges from cell centres

pub mod grid;
pub mod interp;
pub mod rotation;

pub use grid::{cell_edges, shift_grids};
pub use interp::{interp, InterpError};
pub use rotation::rotate_by_quaternion;
