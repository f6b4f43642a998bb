use ndarray::{ArrayView2, ArrayViewMut2, ShapeError, Zip};

use crate::error::{RegErr, Result};

/// A weight penalty that can produce its gradient contribution.
///
/// Implementors only describe what happens to a single weight, the matrix level
/// operations are provided on top of that and are therefore elementwise independent.
pub trait Regularizer: Send + Sync {
    /// The derivative of the penalty at a single weight.
    fn grad(&self, w: f32) -> f32;

    /// The penalty contributed by a single weight.
    fn penalty_at(&self, w: f32) -> f32;

    /// Overwrites `gradient` with the regularization gradient of `weight`.
    ///
    /// # Arguments
    /// * `weight` - The weights being regularized.
    /// * `gradient` - Where the gradient is written, must have the same shape as `weight`.
    ///
    /// # Errors
    /// `RegErr::DimensionMismatch` if the shapes differ, `gradient` is left untouched.
    fn evaluate(&self, weight: ArrayView2<f32>, gradient: ArrayViewMut2<f32>) -> Result<()> {
        check_dims(&weight, &gradient)?;
        Zip::from(gradient)
            .and(weight)
            .for_each(|g, &w| *g = self.grad(w));
        Ok(())
    }

    /// Same as `evaluate` but adds the contribution to what `gradient` already holds.
    fn accumulate(&self, weight: ArrayView2<f32>, gradient: ArrayViewMut2<f32>) -> Result<()> {
        check_dims(&weight, &gradient)?;
        Zip::from(gradient)
            .and(weight)
            .for_each(|g, &w| *g += self.grad(w));
        Ok(())
    }

    /// Same as `evaluate` but splits the work across the rayon thread pool.
    fn par_evaluate(&self, weight: ArrayView2<f32>, gradient: ArrayViewMut2<f32>) -> Result<()> {
        check_dims(&weight, &gradient)?;
        Zip::from(gradient)
            .and(weight)
            .par_for_each(|g, &w| *g = self.grad(w));
        Ok(())
    }

    /// Returns the penalty term of the training objective for `weight`.
    fn penalty(&self, weight: ArrayView2<f32>) -> f32 {
        weight.iter().map(|&w| self.penalty_at(w)).sum()
    }

    /// Evaluates over raw parameter slices laid out in row major order.
    ///
    /// # Arguments
    /// * `dim` - The (rows, cols) shape both slices represent.
    /// * `weight` - The raw weights.
    /// * `gradient` - The raw gradient slice to overwrite.
    ///
    /// # Errors
    /// `RegErr::SizeMismatch` if a slice doesn't hold `dim.0 * dim.1` values, or
    /// `RegErr::InvalidConfiguration` if that product doesn't fit a `usize`.
    fn evaluate_raw(&self, dim: (usize, usize), weight: &[f32], gradient: &mut [f32]) -> Result<()> {
        let expected = dim.0.checked_mul(dim.1).ok_or_else(|| {
            RegErr::InvalidConfiguration(format!("a {}x{} shape overflows usize", dim.0, dim.1))
        })?;
        check_len("weight", weight.len(), expected)?;
        check_len("gradient", gradient.len(), expected)?;

        let shape_err = |e: ShapeError| RegErr::InvalidConfiguration(e.to_string());
        let weight = ArrayView2::from_shape(dim, weight).map_err(shape_err)?;
        let gradient = ArrayViewMut2::from_shape(dim, gradient).map_err(shape_err)?;

        self.evaluate(weight, gradient)
    }
}

fn check_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(RegErr::SizeMismatch {
            what,
            got,
            expected,
        });
    }

    Ok(())
}

fn check_dims(weight: &ArrayView2<f32>, gradient: &ArrayViewMut2<f32>) -> Result<()> {
    if weight.dim() != gradient.dim() {
        return Err(RegErr::DimensionMismatch {
            weight: weight.dim(),
            gradient: gradient.dim(),
        });
    }

    Ok(())
}
