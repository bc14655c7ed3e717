//! Reading `.edge` adjacency-matrix files.
//!
//! A file holds one square matrix: every non-blank line is a row of
//! whitespace-separated decimal numbers. Blank (whitespace-only) lines are
//! ignored everywhere, including by [`edge_size`], so size-based ordering and
//! the final assembly always agree on a matrix's dimension.

use std::fs;
use std::path::Path;

use ndarray::{aview1, Array2};
use tracing::debug;

use crate::core::errors::{CombineError, Result};

/// Non-blank lines paired with their 1-based line numbers.
fn matrix_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CombineError::io(format!("Failed to read edge file: {}", path.display()), e)
    })
}

/// Return the matrix dimension of an edge file by counting its non-blank
/// lines, without parsing any numbers.
pub fn edge_size(path: &Path) -> Result<usize> {
    let content = read_text(path)?;
    Ok(matrix_lines(&content).count())
}

/// Load a square whitespace-delimited edge file into a matrix.
pub fn load_matrix(path: &Path) -> Result<Array2<f64>> {
    let content = read_text(path)?;
    let matrix = parse_matrix(&content, path)?;
    debug!(
        "Loaded {} ({} x {})",
        path.display(),
        matrix.nrows(),
        matrix.ncols()
    );
    Ok(matrix)
}

/// Parse edge file text. `source` only labels errors.
pub fn parse_matrix(content: &str, source: &Path) -> Result<Array2<f64>> {
    let mut rows: Vec<(usize, Vec<f64>)> = Vec::new();

    for (line_number, line) in matrix_lines(content) {
        let values = line
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<f64>().map_err(|e| CombineError::Parse {
                    file: source.to_path_buf(),
                    line: line_number,
                    column: index + 1,
                    token: token.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push((line_number, values));
    }

    let dimension = rows.len();
    if dimension == 0 {
        return Err(CombineError::NonSquareMatrix {
            file: source.to_path_buf(),
            rows: 0,
            columns: 0,
            line: 0,
        });
    }

    if let Some((line_number, values)) = rows.iter().find(|(_, values)| values.len() != dimension)
    {
        return Err(CombineError::NonSquareMatrix {
            file: source.to_path_buf(),
            rows: dimension,
            columns: values.len(),
            line: *line_number,
        });
    }

    let mut matrix = Array2::zeros((dimension, dimension));
    for (mut target, (_, values)) in matrix.rows_mut().into_iter().zip(rows) {
        target.assign(&aview1(&values));
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::path::PathBuf;

    fn src() -> PathBuf {
        PathBuf::from("test.edge")
    }

    #[test]
    fn parses_square_matrix_and_skips_blank_lines() {
        let text = "\n1 2\n   \n3.5 -4e-1\n\n";
        let matrix = parse_matrix(text, &src()).unwrap();
        assert_eq!(matrix, array![[1.0, 2.0], [3.5, -0.4]]);
    }

    #[test]
    fn accepts_tabs_and_repeated_spaces() {
        let matrix = parse_matrix("1\t0   0\n0 1 0\n0\t\t0 1\n", &src()).unwrap();
        assert_eq!(matrix, Array2::<f64>::eye(3));
    }

    #[test]
    fn rejects_short_row() {
        let err = parse_matrix("1 2 3\n4 5\n6 7 8\n", &src()).unwrap_err();
        match err {
            CombineError::NonSquareMatrix {
                file,
                rows,
                columns,
                line,
            } => {
                assert_eq!(file, src());
                assert_eq!(rows, 3);
                assert_eq!(columns, 2);
                assert_eq!(line, 2);
            }
            other => panic!("Expected NonSquareMatrix, got {other:?}"),
        }
    }

    #[test]
    fn rejects_rectangular_matrix() {
        let err = parse_matrix("1 2 3\n4 5 6\n", &src()).unwrap_err();
        assert!(matches!(err, CombineError::NonSquareMatrix { rows: 2, columns: 3, .. }));
    }

    #[test]
    fn rejects_file_without_rows() {
        let err = parse_matrix("\n  \n", &src()).unwrap_err();
        assert!(matches!(err, CombineError::NonSquareMatrix { rows: 0, .. }));
    }

    #[test]
    fn reports_token_location() {
        let err = parse_matrix("1 0\n0 x1\n", &src()).unwrap_err();
        match err {
            CombineError::Parse {
                line, column, token, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(token, "x1");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn edge_size_counts_same_lines_as_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.edge");
        fs::write(&path, "\n1 0 0\n\n0 1 0\n \t\n0 0 1\n").unwrap();

        assert_eq!(edge_size(&path).unwrap(), 3);
        assert_eq!(load_matrix(&path).unwrap().nrows(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_matrix(Path::new("/definitely/not/here.edge")).unwrap_err();
        assert!(matches!(err, CombineError::Io { .. }));
    }
}
