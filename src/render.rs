//! Textual rendering of relations, either as a grid of digits or as a set of labeled pairs.

use crate::matrix::RelationMatrix;

/// The largest universe that can be labeled with single lowercase letters.
pub const MAX_LABELED_SIZE: usize = 26;

/// The single-letter label of element `index` (`0 -> 'a'`, `1 -> 'b'`, ...), or `None` if
/// the index cannot be labeled.
pub fn label(index: usize) -> Option<char> {
    (index < MAX_LABELED_SIZE).then(|| letter(index))
}

fn letter(index: usize) -> char {
    char::from(b'a' + index as u8)
}

/// Render the relation as `name = { (a, b), (b, c) }`, listing pairs in row-major order.
///
/// Returns `None` for universes larger than [`MAX_LABELED_SIZE`], since their elements
/// have no labels. An empty relation is rendered as `name = {  }`.
pub fn render_pairs(name: &str, matrix: &RelationMatrix) -> Option<String> {
    if matrix.size() > MAX_LABELED_SIZE {
        return None;
    }

    let pairs: Vec<String> = matrix
        .pairs()
        .map(|(i, j)| format!("({}, {})", letter(i), letter(j)))
        .collect();

    Some(format!("{name} = {{ {} }}", pairs.join(", ")))
}

/// Render every row of the matrix as space-separated digits (`1 0 1 0`).
pub fn render_rows(matrix: &RelationMatrix) -> Vec<String> {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|value| if *value { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
