pub fn linalg_examples(task: usize) {
    //
    match task {
        0 => {
            // TRIANGULAR MATRIX CONSTRUCTION
            use crate::LinearAlgebra::triangular::{
                TriangularMode, build_triangular, make_random_triangular_with_rng,
                triangularize_in_place,
            };
            use nalgebra::DMatrix;
            use rand::{SeedableRng, rngs::StdRng};

            let mut rng = StdRng::seed_from_u64(2170);
            let l_mtrx =
                make_random_triangular_with_rng(5, TriangularMode::Lower, &mut rng).unwrap();
            println!("random lower triangular matrix:\n{}", l_mtrx);

            let mut mtrx = DMatrix::from_row_slice(
                3,
                3,
                &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            );
            triangularize_in_place(&mut mtrx, TriangularMode::Upper).unwrap();
            println!("upper triangularized in place:\n{}", mtrx);

            // the one-stop entry point rejects conflicting arguments
            let conflict = build_triangular(TriangularMode::Lower, Some(3), Some(mtrx));
            println!("both arguments given: {:?}", conflict.err());
        }
        1 => {
            // FORWARD SUBSTITUTION ON A KNOWN SYSTEM
            use crate::LinearAlgebra::forward_substitution::{SolveStrategy, forward_solve};
            use nalgebra::{DMatrix, DVector};

            let l_mtrx = DMatrix::from_row_slice(
                3,
                3,
                &[2.0, 0.0, 0.0, 1.0, 3.0, 0.0, 4.0, 2.0, 5.0],
            );
            let b_vec = DVector::from_vec(vec![2.0, 5.0, 8.0]);
            for strategy in [SolveStrategy::DotProduct, SolveStrategy::DoubleLoop] {
                let x_vec = forward_solve(&l_mtrx, &b_vec, strategy, None).unwrap();
                println!("{}: x = {}", strategy.as_str(), x_vec.transpose());
            }
        }
        2 => {
            // RESIDUAL CHECK ON A LARGER RANDOM SYSTEM
            use crate::LinearAlgebra::forward_substitution::{SolveStrategy, forward_solve};
            use crate::LinearAlgebra::triangular::{
                TriangularMode, make_random_triangular_with_rng,
            };
            use nalgebra::DVector;
            use rand::{Rng, SeedableRng, rngs::StdRng};

            let ndim = 50;
            let mut rng = StdRng::seed_from_u64(31);
            let mut l_mtrx =
                make_random_triangular_with_rng(ndim, TriangularMode::Lower, &mut rng).unwrap();
            for i in 0..ndim {
                l_mtrx[(i, i)] = rng.gen_range(0.1..1.0);
            }
            let b_vec = DVector::from_fn(ndim, |_, _| rng.gen_range(0.0..1.0));
            let x_vec = forward_solve(&l_mtrx, &b_vec, SolveStrategy::DotProduct, None).unwrap();
            let residual = (&l_mtrx * &x_vec - &b_vec).norm();
            println!("ndim = {}, residual |L x - b| = {:e}", ndim, residual);
            assert!(residual < 1e-9);
        }
        3 => {
            // PLOTTING THE SPARSITY PATTERN OF A TRIANGULAR MATRIX
            use crate::LinearAlgebra::triangular::{TriangularMode, make_random_triangular};
            use crate::Utils::plotting::{plot_matrix, save_plot};

            let l_mtrx = make_random_triangular(20, TriangularMode::Lower).unwrap();
            let plot = plot_matrix(&l_mtrx, "bw", Some("lower-triangular")).unwrap();
            save_plot(&plot, "lower_triangular.html");
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
