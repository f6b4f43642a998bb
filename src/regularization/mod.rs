mod l1_l2;
mod l_regularizer;
mod no_regularizer;
mod regularizer;

pub use l1_l2::{L1L2Record, L1L2Regularizer};
pub use l_regularizer::{
    L1Regularizer, L2Regularizer, LRegularizer, LpRegularizer, DEFAULT_FACTOR,
};
pub use no_regularizer::NoRegularizer;
pub use regularizer::Regularizer;
