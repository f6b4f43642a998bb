use log::debug;

use crate::{
    error::{RegErr, Result},
    regularization::{
        L1L2Regularizer, L1Regularizer, L2Regularizer, LpRegularizer, NoRegularizer, Regularizer,
    },
    specs::RegularizerSpec,
};

/// Builds `Regularizer`s given a specification.
#[derive(Default)]
pub struct RegularizerBuilder;

impl RegularizerBuilder {
    /// Creates a new `RegularizerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Regularizer` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the regularizer.
    ///
    /// # Errors
    /// `RegErr::InvalidConfiguration` if the power isn't positive or a factor isn't finite.
    pub fn build(&self, spec: &RegularizerSpec) -> Result<Box<dyn Regularizer>> {
        debug!("building regularizer from {spec:?}");

        let regularizer: Box<dyn Regularizer> = match *spec {
            RegularizerSpec::None => Box::new(NoRegularizer::new()),
            RegularizerSpec::L1 { factor } => Box::new(L1Regularizer::new(factor)?),
            RegularizerSpec::L2 { factor } => Box::new(L2Regularizer::new(factor)?),
            RegularizerSpec::Lp { power, factor } => self.resolve_lp(power, factor)?,
            RegularizerSpec::L1L2 { l1, l2 } => Box::new(L1L2Regularizer::new(l1, l2)?),
        };

        Ok(regularizer)
    }

    /// Picks the specialized type when the power is 1 or 2.
    fn resolve_lp(&self, power: i64, factor: f32) -> Result<Box<dyn Regularizer>> {
        let power = u32::try_from(power).map_err(|_| {
            RegErr::InvalidConfiguration(format!("power must be a positive i32, got {power}"))
        })?;

        let regularizer: Box<dyn Regularizer> = match power {
            1 => Box::new(L1Regularizer::new(factor)?),
            2 => Box::new(L2Regularizer::new(factor)?),
            p => Box::new(LpRegularizer::new(p, factor)?),
        };

        Ok(regularizer)
    }
}
