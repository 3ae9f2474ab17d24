/// shared argument-validation error type for the linear algebra helpers
pub mod errors;
/// Forward substitution for lower triangular systems `L x = b`, with a choice
/// of partial-sum evaluation strategy. Companion of the `triangular` builders:
/// a matrix produced there is a valid coefficient matrix here as long as its
/// diagonal stays away from zero.
///
///  # Examples
/// ```
/// use ChEnHelp::LinearAlgebra::forward_substitution::{forward_solve, SolveStrategy};
/// use ChEnHelp::LinearAlgebra::triangular::{TriangularMode, make_random_triangular_with_rng};
/// use nalgebra::DVector;
/// use rand::{Rng, SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut l_mtrx = make_random_triangular_with_rng(4, TriangularMode::Lower, &mut rng).unwrap();
/// for i in 0..4 {
///     l_mtrx[(i, i)] = rng.gen_range(0.1..1.0);
/// }
/// let b_vec = DVector::from_fn(4, |_, _| rng.gen_range(0.0..1.0));
/// let x_vec = forward_solve(&l_mtrx, &b_vec, SolveStrategy::default(), None).unwrap();
/// println!("x = {}", x_vec);
/// ```
pub mod forward_substitution;
/// building lower or upper triangular matrices, in place or from random samples
pub mod triangular;
