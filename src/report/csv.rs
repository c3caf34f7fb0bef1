//! CSV matrix rendering.

use super::PairMatrix;

/// Renders the matrix as CSV: a header row of developers, then one row per
/// developer. The diagonal is `-`.
pub fn render(matrix: &PairMatrix<'_>) -> String {
    let mut csv = String::new();

    let header: Vec<String> = std::iter::once(String::new())
        .chain(matrix.developers().iter().map(|dev| quote(dev)))
        .collect();
    csv.push_str(&header.join(","));
    csv.push('\n');

    for row in matrix.developers() {
        let cells: Vec<String> = std::iter::once(quote(row))
            .chain(matrix.developers().iter().map(|col| {
                matrix
                    .cell(row, col)
                    .map_or_else(|| "-".to_string(), |days| days.to_string())
            }))
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    csv
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
