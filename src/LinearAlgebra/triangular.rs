//! # Triangular Matrix Builder
//!
//! ## Aim
//! Helpers to obtain lower or upper triangular matrices, either by zeroing the
//! excluded side of an existing square matrix in place or by synthesizing a fresh
//! random one. Triangular systems are the entry point to substitution solvers, so
//! these builders are mostly used to prepare inputs for
//! `forward_substitution::forward_solve`.
//!
//! ## Main Data Structures and Logic
//! - `TriangularMode` enum: which side of the diagonal is kept (`Lower` is the default)
//! - `triangularize_in_place()`: mutating form, validates shape before the first write
//! - `make_random_triangular()` / `make_random_triangular_with_rng()`: fresh matrix of
//!   uniform `[0, 1)` samples with the excluded side zeroed; the `with_rng` form takes
//!   a caller-owned generator so results can be reproduced from a seed
//! - `build_triangular()`: one-stop entry point taking exactly one of `ndim`/`mtrx`

use crate::LinearAlgebra::errors::LinAlgError;
use nalgebra::DMatrix;
use rand::Rng;
use std::str::FromStr;

/// Side of the diagonal that survives triangularization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangularMode {
    #[default]
    Lower,
    Upper,
}

impl TriangularMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangularMode::Lower => "lower",
            TriangularMode::Upper => "upper",
        }
    }
}

impl FromStr for TriangularMode {
    type Err = LinAlgError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" | "lower-triangular" => Ok(TriangularMode::Lower),
            "upper" | "upper-triangular" => Ok(TriangularMode::Upper),
            _ => Err(LinAlgError::ArgumentConflict(format!(
                "invalid mode '{}'; expected 'lower' or 'upper'",
                s
            ))),
        }
    }
}

/// Zeroes the excluded side of a square matrix, keeping the diagonal and the
/// retained triangle untouched. `Lower` clears everything above the diagonal
/// row by row, `Upper` clears everything below it column by column. The shape
/// check happens before the first write, so a `Shape` error leaves `mtrx`
/// exactly as it was.
pub fn triangularize_in_place(
    mtrx: &mut DMatrix<f64>,
    mode: TriangularMode,
) -> Result<(), LinAlgError> {
    let nrows = mtrx.nrows();
    if nrows != mtrx.ncols() {
        return Err(LinAlgError::Shape(format!(
            "non-square matrix: {} x {}",
            nrows,
            mtrx.ncols()
        )));
    }
    match mode {
        TriangularMode::Lower => {
            for i in 0..nrows {
                for j in (i + 1)..nrows {
                    mtrx[(i, j)] = 0.0;
                }
            }
        }
        TriangularMode::Upper => {
            for j in 0..nrows {
                for i in (j + 1)..nrows {
                    mtrx[(i, j)] = 0.0;
                }
            }
        }
    }
    Ok(())
}

/// Fresh `ndim x ndim` triangular matrix of uniform `[0, 1)` samples drawn from
/// `rand::thread_rng()`. Use [`make_random_triangular_with_rng`] when the result
/// must be reproducible.
pub fn make_random_triangular(
    ndim: usize,
    mode: TriangularMode,
) -> Result<DMatrix<f64>, LinAlgError> {
    make_random_triangular_with_rng(ndim, mode, &mut rand::thread_rng())
}

/// Same as [`make_random_triangular`] but samples from a caller-owned generator,
/// e.g. `StdRng::seed_from_u64(..)` in tests.
pub fn make_random_triangular_with_rng<R: Rng>(
    ndim: usize,
    mode: TriangularMode,
    rng: &mut R,
) -> Result<DMatrix<f64>, LinAlgError> {
    if ndim == 0 {
        return Err(LinAlgError::Shape(
            "zero matrix dimension requested".to_string(),
        ));
    }
    let mut mtrx = DMatrix::from_fn(ndim, ndim, |_, _| rng.gen_range(0.0..1.0));
    triangularize_in_place(&mut mtrx, mode)?;
    Ok(mtrx)
}

/// One-stop constructor in the spirit of the classroom helper: give exactly one
/// of `ndim` (synthesize a random triangular matrix) or `mtrx` (consume a square
/// matrix and return it triangularized).
///
/// # Arguments
/// * `mode` - which triangle to keep
/// * `ndim` - dimension of a freshly synthesized matrix
/// * `mtrx` - an existing square matrix to triangularize
///
/// # Returns
/// The triangular matrix, or `ArgumentConflict` when both or neither of
/// `ndim`/`mtrx` were supplied.
///
/// # Example
/// ```
/// use ChEnHelp::LinearAlgebra::triangular::{build_triangular, TriangularMode};
/// let mtrx = build_triangular(TriangularMode::Lower, Some(4), None).unwrap();
/// assert_eq!(mtrx[(0, 3)], 0.0);
/// ```
pub fn build_triangular(
    mode: TriangularMode,
    ndim: Option<usize>,
    mtrx: Option<DMatrix<f64>>,
) -> Result<DMatrix<f64>, LinAlgError> {
    match (ndim, mtrx) {
        (Some(_), Some(_)) => Err(LinAlgError::ArgumentConflict(
            "ndim and mtrx are mutually exclusive; give exactly one".to_string(),
        )),
        (None, None) => Err(LinAlgError::ArgumentConflict(
            "one of ndim or mtrx must be given".to_string(),
        )),
        (Some(n), None) => make_random_triangular(n, mode),
        (None, Some(mut m)) => {
            triangularize_in_place(&mut m, mode)?;
            Ok(m)
        }
    }
}
