//! Writing matrices in the `.edge` text format.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use tracing::info;

use crate::core::config::MAX_PRECISION;
use crate::core::errors::{CombineError, Result};

/// Render one value with exactly `precision` fractional digits.
///
/// Non-finite values use lowercase names so the output parses back.
fn format_value(out: &mut String, value: f64, precision: usize) {
    if value.is_nan() {
        out.push_str("nan");
    } else if value.is_infinite() {
        out.push_str(if value > 0.0 { "inf" } else { "-inf" });
    } else {
        out.push_str(&format!("{value:.precision$}"));
    }
}

/// Render a matrix as space-separated fixed-point rows, one per line.
///
/// Precisions above [`MAX_PRECISION`] are rejected.
pub fn render_matrix(matrix: &Array2<f64>, precision: usize) -> Result<String> {
    if precision > MAX_PRECISION {
        return Err(CombineError::config_field(
            format!("Precision must be at most {MAX_PRECISION}, got {precision}"),
            "precision",
        ));
    }

    let mut out = String::with_capacity(matrix.len().saturating_mul(precision.saturating_add(4)));
    for row in matrix.rows() {
        for (index, value) in row.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            format_value(&mut out, *value, precision);
        }
        out.push('\n');
    }
    Ok(out)
}

/// Write `matrix` to `path`, replacing any existing file.
pub fn write_matrix(matrix: &Array2<f64>, path: &Path, precision: usize) -> Result<()> {
    let content = render_matrix(matrix, precision)?;
    fs::write(path, content).map_err(|e| CombineError::output_write(path, e))?;
    info!(
        "Wrote {}x{} matrix to {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn renders_fixed_precision_rows() {
        let matrix = array![[1.0, 0.123456], [-2.5, 0.0]];
        assert_eq!(
            render_matrix(&matrix, 3).unwrap(),
            "1.000 0.123\n-2.500 0.000\n"
        );
    }

    #[test]
    fn zero_precision_rounds_to_integers() {
        let matrix = array![[1.6, 2.4]];
        assert_eq!(render_matrix(&matrix, 0).unwrap(), "2 2\n");
    }

    #[test]
    fn non_finite_values_are_readable() {
        let matrix = array![[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]];
        assert_eq!(render_matrix(&matrix, 2).unwrap(), "nan inf -inf\n");
    }

    #[test]
    fn oversized_precision_is_rejected() {
        let matrix = array![[1.0]];
        for precision in [MAX_PRECISION + 1, 70_000, usize::MAX] {
            let err = render_matrix(&matrix, precision).unwrap_err();
            assert!(matches!(err, CombineError::InvalidConfiguration { .. }));
        }
        assert!(render_matrix(&matrix, 20).unwrap().starts_with("1.00000000000000000000"));
    }

    #[test]
    fn oversized_precision_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("total.edge");

        assert!(write_matrix(&array![[1.0]], &path, 70_000).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("total.edge");
        fs::write(&path, "stale content that is much longer than the new one\n").unwrap();

        write_matrix(&array![[9.0]], &path, 1).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "9.0\n");
    }

    #[test]
    fn missing_parent_directory_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("total.edge");

        let err = write_matrix(&array![[1.0]], &path, 5).unwrap_err();
        assert!(matches!(err, CombineError::OutputWrite { .. }));
    }
}
