use std::process::exit;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use keyed_sparse::data::linear_algebra::matrix::{Matrix, SparseMatrix};

/// Generate a random sparse matrix and show its structure.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Number of rows of the matrix
    rows: usize,
    /// Number of columns of the matrix
    columns: usize,
    /// Number of random positions to fill with standard normal values
    #[arg(short, long, default_value_t = 10)]
    non_zeros: usize,
    /// Seed for the random number generator, drawn from the system when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Show a window of the matrix: first row, first column, number of rows, number of columns
    #[arg(short, long, num_args = 4, value_names = ["I", "J", "ROWS", "COLUMNS"])]
    window: Option<Vec<usize>>,
    /// Show the lower and upper triangles
    #[arg(short, long)]
    triangles: bool,
    /// Show the dense equivalent
    #[arg(short, long)]
    dense: bool,
    /// Number of decimals to show
    #[arg(short, long, default_value_t = 3)]
    precision: usize,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Generating a {}x{} matrix with {} draws...", opts.rows, opts.columns, opts.non_zeros);
    let matrix = SparseMatrix::<f64>::normals(opts.rows, opts.columns, opts.non_zeros, &mut rng);
    println!("Matrix with {} non-zeros:\n{:.*}", matrix.size(), opts.precision, matrix);

    if let Some(window) = opts.window {
        let &[i, j, rows, columns] = window.as_slice() else {
            eprintln!("A window needs exactly four values.");
            exit(2);
        };
        if i + rows > matrix.nr_rows() || j + columns > matrix.nr_columns() {
            eprintln!("The window doesn't fit inside of the matrix.");
            exit(2);
        }
        let view = matrix.view(i, j, rows, columns);
        println!("Window at ({}, {}):\n{:.*}", i, j, opts.precision, view);
    }

    if opts.triangles {
        println!("Lower triangle:\n{:.*}", opts.precision, matrix.lower_triangle());
        println!("Upper triangle:\n{:.*}", opts.precision, matrix.upper_triangle());
    }

    if opts.dense {
        println!("Dense:\n{:.*}", opts.precision, matrix.to_dense());
    }
}
