use serde::{Deserialize, Serialize};

use super::Regularizer;
use crate::{
    archive::{Archived, Record},
    error::{RegErr, Result},
};

/// The factor used when none is given.
pub const DEFAULT_FACTOR: f32 = 1.0;

/// The L_p regularizer for a power known at compile time.
///
/// `LRegularizer<1>` gives L1 regularization and `LRegularizer<2>` L2, see the
/// `L1Regularizer` and `L2Regularizer` aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Record", try_from = "Record")]
pub struct LRegularizer<const POWER: u32> {
    factor: f32,
}

/// L1 regularization, `factor * sign(w)`.
pub type L1Regularizer = LRegularizer<1>;

/// L2 regularization, `factor * 2 * w`.
pub type L2Regularizer = LRegularizer<2>;

impl<const POWER: u32> LRegularizer<POWER> {
    /// The power of the regularizer.
    pub const POWER: u32 = POWER;

    const VALID_POWER: () = assert!(
        POWER > 0 && POWER <= i32::MAX as u32,
        "the power of an LRegularizer must be a positive i32"
    );

    /// Returns a new `LRegularizer`.
    ///
    /// # Arguments
    /// * `factor` - How strongly the weights are penalized.
    ///
    /// # Errors
    /// `RegErr::InvalidConfiguration` if `factor` isn't finite.
    pub fn new(factor: f32) -> Result<Self> {
        let () = Self::VALID_POWER;
        validate_factor(factor)?;
        Ok(Self { factor })
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl<const POWER: u32> Default for LRegularizer<POWER> {
    fn default() -> Self {
        let () = Self::VALID_POWER;
        Self {
            factor: DEFAULT_FACTOR,
        }
    }
}

impl<const POWER: u32> Regularizer for LRegularizer<POWER> {
    fn grad(&self, w: f32) -> f32 {
        l_grad(POWER, self.factor, w)
    }

    fn penalty_at(&self, w: f32) -> f32 {
        l_penalty(POWER, self.factor, w)
    }
}

/// The L_p regularizer for a power chosen at runtime, e.g. from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Record", try_from = "Record")]
pub struct LpRegularizer {
    power: u32,
    factor: f32,
}

impl LpRegularizer {
    /// Returns a new `LpRegularizer`.
    ///
    /// # Arguments
    /// * `power` - The `p` of the L_p norm.
    /// * `factor` - How strongly the weights are penalized.
    ///
    /// # Errors
    /// `RegErr::InvalidConfiguration` if `power` is zero or doesn't fit an `i32`, or if
    /// `factor` isn't finite.
    pub fn new(power: u32, factor: f32) -> Result<Self> {
        if power == 0 || i32::try_from(power).is_err() {
            return Err(RegErr::InvalidConfiguration(format!(
                "power must be a positive i32, got {power}"
            )));
        }

        validate_factor(factor)?;
        Ok(Self { power, factor })
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl Regularizer for LpRegularizer {
    fn grad(&self, w: f32) -> f32 {
        l_grad(self.power, self.factor, w)
    }

    fn penalty_at(&self, w: f32) -> f32 {
        l_penalty(self.power, self.factor, w)
    }
}

impl<const POWER: u32> From<LRegularizer<POWER>> for Record {
    fn from(r: LRegularizer<POWER>) -> Self {
        Self {
            power: POWER,
            factor: r.factor,
        }
    }
}

impl<const POWER: u32> TryFrom<Record> for LRegularizer<POWER> {
    type Error = RegErr;

    fn try_from(record: Record) -> Result<Self> {
        if record.power != POWER {
            return Err(RegErr::InvalidConfiguration(format!(
                "archived power {} does not match L{} regularizer",
                record.power, POWER
            )));
        }

        Self::new(record.factor)
    }
}

impl<const POWER: u32> Archived for LRegularizer<POWER> {
    type Record = Record;

    fn restore(record: Record) -> Result<Self> {
        Self::try_from(record)
    }
}

impl From<LpRegularizer> for Record {
    fn from(r: LpRegularizer) -> Self {
        Self {
            power: r.power,
            factor: r.factor,
        }
    }
}

impl TryFrom<Record> for LpRegularizer {
    type Error = RegErr;

    fn try_from(record: Record) -> Result<Self> {
        Self::new(record.power, record.factor)
    }
}

impl Archived for LpRegularizer {
    type Record = Record;

    fn restore(record: Record) -> Result<Self> {
        Self::try_from(record)
    }
}

fn validate_factor(factor: f32) -> Result<()> {
    if !factor.is_finite() {
        return Err(RegErr::InvalidConfiguration(format!(
            "factor must be finite, got {factor}"
        )));
    }

    Ok(())
}

/// `f32::signum` maps zeros to ±1, here zeros map to 0 and NaN stays NaN.
fn sign(w: f32) -> f32 {
    if w > 0. {
        1.
    } else if w < 0. {
        -1.
    } else if w.is_nan() {
        w
    } else {
        0.
    }
}

/// d/dw of `factor * |w|^power`.
fn l_grad(power: u32, factor: f32, w: f32) -> f32 {
    match power {
        1 => factor * sign(w),
        2 => factor * 2. * w,
        p => factor * p as f32 * sign(w) * w.abs().powi(p as i32 - 1),
    }
}

fn l_penalty(power: u32, factor: f32, w: f32) -> f32 {
    match power {
        1 => factor * w.abs(),
        2 => factor * w * w,
        p => factor * w.abs().powi(p as i32),
    }
}
