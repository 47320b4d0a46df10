//! Transitive closure of finite binary relations.
//!
//! A relation over `n` elements is stored as an `n x n` boolean [`matrix::RelationMatrix`],
//! entered row by row as lines of `0`/`1` characters ([`row_parser`]). Its closure is
//! computed by Warshall's algorithm ([`closure`]) and both relations are reported as digit
//! grids and as sets of labeled pairs ([`render`]). A [`session::Session`] ties these steps
//! together for line-based input and output.

use crate::matrix::RelationMatrix;

#[cfg(test)]
mod test_utils;

pub mod closure;
pub mod error;
pub mod matrix;
pub mod render;
pub mod row_parser;
pub mod session;

/// A utility method for printing useful metadata of relations.
fn log_matrix(matrix: &RelationMatrix) -> String {
    format!("elements={}; pairs={}", matrix.size(), matrix.pair_count())
}
