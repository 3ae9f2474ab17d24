//! # Forward Substitution Solver
//!
//! ## Aim
//! Solves `L x = b` for a lower triangular coefficient matrix `L` by forward
//! substitution: unknowns are computed in ascending row order, each one from the
//! already-solved prefix. This is the classroom workhorse behind LU and Cholesky
//! back ends, implemented here over `nalgebra` dynamic matrices.
//!
//! ## Main Data Structures and Logic
//! - `SolveStrategy` enum: how the partial sum `sum_{j<i} L[i,j] * x[j]` is
//!   evaluated. `DotProduct` forms it as a row-prefix inner product, `DoubleLoop`
//!   as an explicit accumulation; the two differ only in floating point
//!   reassociation and agree to roundoff.
//! - `forward_solve()`: validates all preconditions eagerly (square shape,
//!   nonzero diagonal, triangularity up to `zero_tol`, right-hand-side length)
//!   and only then runs the substitution loop. Inputs are never mutated and the
//!   solution is a freshly allocated vector.
//!
//! ## Usage
//! ```rust
//! use ChEnHelp::LinearAlgebra::forward_substitution::{forward_solve, SolveStrategy};
//! use nalgebra::{DMatrix, DVector};
//! let l_mtrx = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 0.0, 1.0, 3.0, 0.0, 4.0, 2.0, 5.0]);
//! let b_vec = DVector::from_vec(vec![2.0, 5.0, 8.0]);
//! let x_vec = forward_solve(&l_mtrx, &b_vec, SolveStrategy::DotProduct, None).unwrap();
//! assert!((x_vec[2] - 4.0 / 15.0).abs() < 1e-12);
//! ```

use crate::LinearAlgebra::errors::LinAlgError;
use nalgebra::{DMatrix, DVector};
use std::str::FromStr;

/// Entries above the diagonal with absolute value at or below this tolerance
/// are treated as numerical residue rather than a triangularity violation.
/// Pass `Some(0.0)` to `forward_solve` for the strict legacy behavior.
pub const DEFAULT_ZERO_TOL: f64 = 1e-12;

/// How the partial sum over already-solved unknowns is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveStrategy {
    #[default]
    DotProduct,
    DoubleLoop,
}

impl SolveStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStrategy::DotProduct => "use-dot-product",
            SolveStrategy::DoubleLoop => "use-double-loop",
        }
    }
}

impl FromStr for SolveStrategy {
    type Err = LinAlgError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "use-dot-product" | "dot-product" => Ok(SolveStrategy::DotProduct),
            "use-double-loop" | "double-loop" => Ok(SolveStrategy::DoubleLoop),
            _ => Err(LinAlgError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Solves the lower triangular system `L x = b` by forward substitution.
///
/// All preconditions are checked before any arithmetic, in this order: the
/// matrix must be square, every diagonal entry must be nonzero, every entry
/// above the diagonal must be no larger in magnitude than `zero_tol`, and the
/// right-hand side must match the matrix dimension. The first violated check
/// wins, so a singular diagonal is reported even when the matrix is also
/// non-triangular.
///
/// # Arguments
/// * `l_mtrx` - lower triangular coefficient matrix
/// * `b_vec` - right-hand side vector
/// * `strategy` - partial-sum evaluation strategy; both give the same solution
///   up to roundoff
/// * `zero_tol` - tolerance for residue above the diagonal, `None` means
///   [`DEFAULT_ZERO_TOL`]
///
/// # Returns
/// The solution vector `x`, or the first `LinAlgError` precondition violation.
///
/// # Example
/// ```
/// use ChEnHelp::LinearAlgebra::forward_substitution::{forward_solve, SolveStrategy};
/// use nalgebra::{DMatrix, DVector};
/// let l_mtrx = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 0.0, 1.0, 3.0, 0.0, 4.0, 2.0, 5.0]);
/// let b_vec = DVector::from_vec(vec![2.0, 5.0, 8.0]);
/// let x_vec = forward_solve(&l_mtrx, &b_vec, SolveStrategy::DoubleLoop, None).unwrap();
/// assert!((x_vec[0] - 1.0).abs() < 1e-12);
/// assert!((x_vec[1] - 4.0 / 3.0).abs() < 1e-12);
/// ```
pub fn forward_solve(
    l_mtrx: &DMatrix<f64>,
    b_vec: &DVector<f64>,
    strategy: SolveStrategy,
    zero_tol: Option<f64>,
) -> Result<DVector<f64>, LinAlgError> {
    let zero_tol = zero_tol.unwrap_or(DEFAULT_ZERO_TOL);
    if zero_tol < 0.0 {
        return Err(LinAlgError::ArgumentConflict(format!(
            "zero_tol must be non-negative, got {}",
            zero_tol
        )));
    }
    let n = l_mtrx.nrows();
    if n != l_mtrx.ncols() {
        return Err(LinAlgError::Shape(format!(
            "non-square matrix: {} x {}",
            n,
            l_mtrx.ncols()
        )));
    }
    for i in 0..n {
        if !(l_mtrx[(i, i)].abs() > 0.0) {
            return Err(LinAlgError::Singular { row: i });
        }
    }
    for j in 1..n {
        for i in 0..j {
            if l_mtrx[(i, j)].abs() > zero_tol {
                return Err(LinAlgError::NonTriangular {
                    row: i,
                    col: j,
                    value: l_mtrx[(i, j)],
                });
            }
        }
    }
    if b_vec.len() != n {
        return Err(LinAlgError::Shape(format!(
            "incompatible l_mtrx and b_vec dimensions: {} vs {}",
            n,
            b_vec.len()
        )));
    }

    let mut x_vec: DVector<f64> = DVector::zeros(n);
    match strategy {
        SolveStrategy::DotProduct => {
            for i in 0..n {
                let sum_lx = (l_mtrx.row(i).columns(0, i) * x_vec.rows(0, i))[0];
                x_vec[i] = (b_vec[i] - sum_lx) / l_mtrx[(i, i)];
            }
        }
        SolveStrategy::DoubleLoop => {
            for i in 0..n {
                let mut sum_lx = 0.0;
                for j in 0..i {
                    sum_lx += l_mtrx[(i, j)] * x_vec[j];
                }
                x_vec[i] = (b_vec[i] - sum_lx) / l_mtrx[(i, i)];
            }
        }
    }
    Ok(x_vec)
}
