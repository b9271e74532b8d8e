use proptest::prelude::*;

use keyed_sparse::data::linear_algebra::error::ErrorKind;
use keyed_sparse::data::linear_algebra::matrix::{Matrix, MatrixMut, SparseMatrix};

use super::{build, expected, matrix_data};

proptest! {
    #[test]
    fn set_then_get(data in matrix_data(8, 30)) {
        let matrix = build(&data);
        let (rows, columns, _) = data;

        for i in 0..rows {
            for j in 0..columns {
                prop_assert_eq!(matrix.get(i, j), expected(&data, i, j));
            }
        }
        prop_assert!(matrix.elements().values().all(|&value| value != 0f64));
    }

    #[test]
    fn setting_zero_removes(data in matrix_data(8, 30), seed in any::<prop::sample::Index>()) {
        let mut matrix = build(&data);
        let (rows, columns, _) = data;
        let index = seed.index(rows * columns);
        let (i, j) = (index / columns, index % columns);

        matrix.set(i, j, 0f64);
        prop_assert_eq!(matrix.get(i, j), 0f64);
        prop_assert!(!matrix.elements().contains_key(&(i * columns + j)));
        prop_assert!(matrix.indices().all(|key| key != i * columns + j));
    }

    #[test]
    fn views_alias(
        data in matrix_data(8, 30),
        corner in (0..8usize, 0..8usize),
        value in 1.0..10.0f64,
    ) {
        let mut matrix = build(&data);
        let (rows, columns, _) = data;
        let (i0, j0) = (corner.0 % rows, corner.1 % columns);
        let (window_rows, window_columns) = (rows - i0, columns - j0);

        let view = matrix.view(i0, j0, window_rows, window_columns);
        for i in 0..window_rows {
            for j in 0..window_columns {
                prop_assert_eq!(view.get(i, j), matrix.get(i0 + i, j0 + j));
            }
        }

        let (i, j) = (window_rows - 1, window_columns - 1);
        matrix.view_mut(i0, j0, window_rows, window_columns).set(i, j, value);
        prop_assert_eq!(matrix.get(i0 + i, j0 + j), value);
    }

    #[test]
    fn copy_is_independent(data in matrix_data(8, 30)) {
        let matrix = build(&data);
        let mut copy = matrix.copy();
        prop_assert_eq!(&copy, &matrix);

        copy.clear();
        let (rows, columns, _) = data;
        for i in 0..rows {
            for j in 0..columns {
                prop_assert_eq!(matrix.get(i, j), expected(&data, i, j));
            }
        }
    }

    #[test]
    fn augment_blocks(left in matrix_data(6, 20), right in matrix_data(6, 20)) {
        let a = build(&left);
        let b = build(&right);

        match a.augment(&b) {
            Ok(c) => {
                prop_assert_eq!(a.nr_rows(), b.nr_rows());
                prop_assert_eq!(c.nr_columns(), a.nr_columns() + b.nr_columns());
                for i in 0..c.nr_rows() {
                    for j in 0..c.nr_columns() {
                        let value = if j < a.nr_columns() {
                            a.get(i, j)
                        } else {
                            b.get(i, j - a.nr_columns())
                        };
                        prop_assert_eq!(c.get(i, j), value);
                    }
                }
                prop_assert_eq!(c.size(), a.size() + b.size());
            },
            Err(error) => {
                prop_assert_ne!(a.nr_rows(), b.nr_rows());
                prop_assert_eq!(error.kind(), ErrorKind::DimensionMismatch);
            },
        }
    }

    #[test]
    fn stack_blocks(left in matrix_data(6, 20), right in matrix_data(6, 20)) {
        let a = build(&left);
        let b = build(&right);

        match a.stack(&b) {
            Ok(c) => {
                prop_assert_eq!(a.nr_columns(), b.nr_columns());
                prop_assert_eq!(c.nr_rows(), a.nr_rows() + b.nr_rows());
                for i in 0..c.nr_rows() {
                    for j in 0..c.nr_columns() {
                        let value = if i < a.nr_rows() {
                            a.get(i, j)
                        } else {
                            b.get(i - a.nr_rows(), j)
                        };
                        prop_assert_eq!(c.get(i, j), value);
                    }
                }
            },
            Err(error) => {
                prop_assert_ne!(a.nr_columns(), b.nr_columns());
                prop_assert_eq!(error.kind(), ErrorKind::DimensionMismatch);
            },
        }
    }

    #[test]
    fn triangles_partition(data in matrix_data(8, 40)) {
        let matrix = build(&data);
        let lower = matrix.lower_triangle();
        let upper = matrix.upper_triangle();

        for i in 0..matrix.nr_rows() {
            for j in 0..matrix.nr_columns() {
                let value = matrix.get(i, j);
                if i == j {
                    prop_assert_eq!(lower.get(i, j), value);
                    prop_assert_eq!(upper.get(i, j), value);
                } else if i > j {
                    prop_assert_eq!(lower.get(i, j), value);
                    prop_assert_eq!(upper.get(i, j), 0f64);
                } else {
                    prop_assert_eq!(lower.get(i, j), 0f64);
                    prop_assert_eq!(upper.get(i, j), value);
                }
            }
        }
    }

    #[test]
    fn dense_agrees(data in matrix_data(8, 30)) {
        let matrix = build(&data);
        let dense = matrix.to_dense();

        prop_assert_eq!(dense.nr_rows(), matrix.nr_rows());
        prop_assert_eq!(dense.nr_columns(), matrix.nr_columns());
        for i in 0..matrix.nr_rows() {
            for j in 0..matrix.nr_columns() {
                prop_assert_eq!(*dense.get_value(i, j), matrix.get(i, j));
            }
        }
        prop_assert_eq!(dense.to_string(), matrix.to_string());
    }
}

#[test]
fn generated_matrices_are_consistent() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(2009);
    let matrix = SparseMatrix::<f64>::normals(7, 9, 40, &mut rng);

    assert!(matrix.size() <= 40);
    assert_eq!(matrix.copy(), matrix);
    assert_eq!(
        matrix.lower_triangle().size() + matrix.upper_triangle().size(),
        matrix.size() + (0..7).filter(|&i| matrix.get(i, i) != 0f64).count(),
    );
}
