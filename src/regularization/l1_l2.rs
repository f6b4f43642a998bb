use serde::{Deserialize, Serialize};

use super::{L1Regularizer, L2Regularizer, Regularizer};
use crate::{
    archive::{Archived, Record},
    error::Result,
};

/// Elastic net, the sum of an L1 and an L2 penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct L1L2Regularizer {
    l1: L1Regularizer,
    l2: L2Regularizer,
}

impl L1L2Regularizer {
    /// Returns a new `L1L2Regularizer`.
    ///
    /// # Arguments
    /// * `l1` - The factor of the L1 term.
    /// * `l2` - The factor of the L2 term.
    pub fn new(l1: f32, l2: f32) -> Result<Self> {
        Ok(Self {
            l1: L1Regularizer::new(l1)?,
            l2: L2Regularizer::new(l2)?,
        })
    }
}

/// What gets archived for an `L1L2Regularizer`, one record per term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct L1L2Record {
    pub l1: Record,
    pub l2: Record,
}

impl Archived for L1L2Regularizer {
    type Record = L1L2Record;

    fn restore(record: L1L2Record) -> Result<Self> {
        Ok(Self {
            l1: L1Regularizer::try_from(record.l1)?,
            l2: L2Regularizer::try_from(record.l2)?,
        })
    }
}

impl Regularizer for L1L2Regularizer {
    fn grad(&self, w: f32) -> f32 {
        self.l1.grad(w) + self.l2.grad(w)
    }

    fn penalty_at(&self, w: f32) -> f32 {
        self.l1.penalty_at(w) + self.l2.penalty_at(w)
    }
}
