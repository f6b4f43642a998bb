use serde::{Deserialize, Serialize};

use crate::regularization::DEFAULT_FACTOR;

fn default_factor() -> f32 {
    DEFAULT_FACTOR
}

/// The specification for the `Regularizer` trait.
///
/// The power is kept signed so that a negative value reaches the builder and is
/// reported as an invalid configuration instead of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularizerSpec {
    None,
    L1 {
        #[serde(default = "default_factor")]
        factor: f32,
    },
    L2 {
        #[serde(default = "default_factor")]
        factor: f32,
    },
    Lp {
        power: i64,
        #[serde(default = "default_factor")]
        factor: f32,
    },
    L1L2 {
        l1: f32,
        l2: f32,
    },
}
