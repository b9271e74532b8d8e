use std::collections::HashMap;

use keyed_sparse::data::linear_algebra::error::LinearAlgebraError;
use keyed_sparse::data::linear_algebra::matrix::{DenseMatrix, Matrix, MatrixMut, SparseMatrix};

#[test]
fn diagonal_two_by_two() {
    let mut matrix = SparseMatrix::zeros(2, 2);
    matrix.set(0, 0, 1f64);
    matrix.set(1, 1, 2f64);

    assert_eq!(matrix.to_dense(), DenseMatrix::from_data(vec![vec![1f64, 0f64], vec![0f64, 2f64]]));
    assert_eq!(matrix.to_string(), "{1.000000, 0.000000\n0.000000, 2.000000}");
}

#[test]
fn indices_of_single_value() {
    let mut matrix = SparseMatrix::zeros(3, 3);
    assert_eq!(matrix.indices().next(), None);

    matrix.set(1, 1, 5f64);
    let indices = matrix.indices().collect::<Vec<_>>();
    assert_eq!(indices, vec![4]);
    assert_eq!(matrix.row_column_index(indices[0]), Some((1, 1)));
    assert_eq!(matrix.row_index(indices[0]), Some(1));
    assert_eq!(matrix.column_index(indices[0]), Some(1));
}

#[test]
fn wrapped_map_is_storage() {
    let elements = HashMap::from([(1, 3f64), (2, -1f64), (3, 4f64)]);
    let mut matrix = SparseMatrix::new(elements, 2, 2);

    assert_eq!(matrix.to_string(), "{0.000000, 3.000000\n-1.000000, 4.000000}");

    let mut column = matrix.column_vector_mut(1);
    column.set(1, 0, 0f64);
    column.set(0, 0, 9f64);

    assert_eq!(matrix.into_elements(), HashMap::from([(1, 9f64), (2, -1f64)]));
}

#[test]
fn assemble_block_matrix() {
    // [ I  A ]
    // [ 0  B ]
    let identity = SparseMatrix::<f64>::identity(2);
    let a = SparseMatrix::from_data(vec![vec![0f64, 2f64, 0f64], vec![3f64, 0f64, 0f64]]);
    let b = SparseMatrix::from_data(vec![vec![0f64, 0f64, 4f64, 5f64, 0f64]]);

    let top = identity.augment(&a).unwrap();
    let full = top.stack(&b).unwrap();

    assert_eq!(full.to_dense().data(), vec![
        vec![1f64, 0f64, 0f64, 2f64, 0f64],
        vec![0f64, 1f64, 3f64, 0f64, 0f64],
        vec![0f64, 0f64, 4f64, 5f64, 0f64],
    ]);

    // The block A can be read back from the assembled matrix
    assert_eq!(full.view(0, 2, 2, 3).copy(), a);

    let error = identity.stack(&a).unwrap_err();
    assert_eq!(error, LinearAlgebraError::DimensionMismatch {
        operation: "stack",
        left: (2, 2),
        right: (2, 3),
    });
}

#[test]
fn triangles_of_a_window() {
    let mut matrix = SparseMatrix::zeros(4, 4);
    for i in 0..4 {
        for j in 0..4 {
            matrix.set(i, j, (i * 4 + j + 1) as f64);
        }
    }

    let window = matrix.view(1, 1, 3, 3);
    assert_eq!(window.lower_triangle().to_dense().data(), vec![
        vec![6f64, 0f64, 0f64],
        vec![10f64, 11f64, 0f64],
        vec![14f64, 15f64, 16f64],
    ]);
    assert_eq!(window.upper_triangle().to_dense().data(), vec![
        vec![6f64, 7f64, 8f64],
        vec![0f64, 11f64, 12f64],
        vec![0f64, 0f64, 16f64],
    ]);

    // Clearing the strictly upper part of the window through views
    let mut window = matrix.view_mut(1, 1, 3, 3);
    for i in 0..3 {
        window.row_vector_mut(i).view_mut(0, i + 1, 1, 2 - i).clear();
    }
    assert_eq!(matrix.view(1, 1, 3, 3).copy(), matrix.view(1, 1, 3, 3).lower_triangle());
    assert_eq!(matrix.get(0, 3), 4f64);
    assert_eq!(matrix.size(), 16 - 3);
}
