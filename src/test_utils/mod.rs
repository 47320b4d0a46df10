use crate::matrix::RelationMatrix;
use crate::row_parser::{parse_row, universe_size};
use proptest::prelude::*;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Build a relation from textual rows, the same way a session would.
///
/// The size is given by the length of the first row. Missing rows are empty.
///
/// # Example
///
/// `mk_matrix(&["010", "001"])` creates a 3x3 relation `{(0, 1), (1, 2)}`.
pub fn mk_matrix(rows: &[&str]) -> RelationMatrix {
    let size = universe_size(rows[0]);
    let mut matrix = RelationMatrix::with_max_size(size, usize::MAX).unwrap();
    for (i, row) in rows.iter().enumerate() {
        matrix.set_row(i, &parse_row(row, size));
    }
    matrix
}

/// Build the relation of size `size` whose cells are the bits of `bits`
/// (row-major, the least significant bit is cell `(0, 0)`).
///
/// # Example
///
/// For `size = 2`, `mk_matrix_from_bits(2, 0b0110)` creates `{(0, 1), (1, 0)}`.
pub fn mk_matrix_from_bits(size: usize, bits: u64) -> RelationMatrix {
    assert!(size * size <= 64);
    let mut matrix = RelationMatrix::with_max_size(size, usize::MAX).unwrap();
    for i in 0..size {
        for j in 0..size {
            let bit = i * size + j;
            matrix.set(i, j, (bits >> bit) & 1 == 1);
        }
    }
    matrix
}

/// Enumerate every relation over `size` elements.
///
/// At the moment, this only supports up to 3 elements (512 relations).
pub fn all_matrices(size: usize) -> impl Iterator<Item = RelationMatrix> {
    assert!(size <= 3);
    let count = 1u64 << (size * size);
    (0..count).map(move |bits| mk_matrix_from_bits(size, bits))
}

/// A proptest strategy producing relations over `1..=max_size` elements with
/// arbitrary cells.
pub fn relation_strategy(max_size: usize) -> impl Strategy<Value = RelationMatrix> {
    (1..=max_size).prop_flat_map(|size| {
        proptest::collection::vec(any::<bool>(), size * size)
            .prop_map(move |cells| RelationMatrix::from_cells(size, cells).unwrap())
    })
}
