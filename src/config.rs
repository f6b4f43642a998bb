use std::{fs, path::Path};

use log::info;
use ndarray::Array2;

use crate::{
    error::{RegErr, Result},
    specs::RegularizerSpec,
};

/// Loads a `RegularizerSpec` from a JSON file.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<RegularizerSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let spec = serde_json::from_str(&content)?;
    info!("loaded regularizer spec from {}", path.display());
    Ok(spec)
}

/// Loads a matrix stored as a JSON array of rows.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Array2<f32>> {
    let content = fs::read_to_string(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_str(&content)?;
    matrix_from_rows(rows)
}

/// Builds a matrix out of its rows.
///
/// # Errors
/// `RegErr::InvalidConfiguration` if the rows don't all have the same length.
pub fn matrix_from_rows(rows: Vec<Vec<f32>>) -> Result<Array2<f32>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    if let Some(i) = rows.iter().position(|row| row.len() != ncols) {
        return Err(RegErr::InvalidConfiguration(format!(
            "row {i} has {} values, expected {ncols}",
            rows[i].len()
        )));
    }

    let data = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), data)
        .map_err(|e| RegErr::InvalidConfiguration(e.to_string()))
}

/// The inverse of `matrix_from_rows`.
pub fn matrix_to_rows(matrix: &Array2<f32>) -> Vec<Vec<f32>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
