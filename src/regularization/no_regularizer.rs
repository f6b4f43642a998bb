use serde::{Deserialize, Serialize};

use super::Regularizer;
use crate::{archive::Archived, error::Result};

/// Leaves the weights unpenalized, every gradient contribution is zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoRegularizer;

impl NoRegularizer {
    /// Returns a new `NoRegularizer`.
    pub fn new() -> Self {
        Self
    }
}

impl Archived for NoRegularizer {
    type Record = Self;

    fn restore(record: Self) -> Result<Self> {
        Ok(record)
    }
}

impl Regularizer for NoRegularizer {
    fn grad(&self, _w: f32) -> f32 {
        0.
    }

    fn penalty_at(&self, _w: f32) -> f32 {
        0.
    }
}
