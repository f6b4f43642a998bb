pub mod archive;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod regularization;
pub mod specs;

pub use builder::RegularizerBuilder;
pub use error::{RegErr, Result};
pub use regularization::{
    L1L2Regularizer, L1Regularizer, L2Regularizer, LRegularizer, LpRegularizer, NoRegularizer,
    Regularizer,
};
pub use specs::RegularizerSpec;
