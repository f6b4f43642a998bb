//! Persistence of regularizers.
//!
//! A regularizer only carries its power and factor, so an archive is the JSON
//! object `{"power": p, "factor": f}` for every L_p regularizer.

use std::io::{Read, Write};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Result;

/// What gets archived for any L_p regularizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub power: u32,
    pub factor: f32,
}

/// A regularizer that can be rebuilt from what `save` wrote.
///
/// The archive is first parsed into `Record` and only then validated, so a
/// bad power or factor reaches the caller as `RegErr::InvalidConfiguration`.
pub trait Archived: Sized {
    type Record: DeserializeOwned;

    fn restore(record: Self::Record) -> Result<Self>;
}

/// Writes `regularizer` to `writer`.
pub fn save<T, W>(regularizer: &T, writer: W) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    serde_json::to_writer(writer, regularizer)?;
    debug!("saved {}", std::any::type_name::<T>());
    Ok(())
}

/// Reads a regularizer back from `reader`.
///
/// # Errors
/// `RegErr::Archive` if the archive is malformed, `RegErr::InvalidConfiguration` if the
/// stored power or factor can't be used by `T`.
pub fn load<T, R>(reader: R) -> Result<T>
where
    T: Archived,
    R: Read,
{
    let record: T::Record = serde_json::from_reader(reader)?;
    let regularizer = T::restore(record)?;
    debug!("loaded {}", std::any::type_name::<T>());
    Ok(regularizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RegErr,
        regularization::{
            L1L2Regularizer, L1Regularizer, L2Regularizer, LRegularizer, LpRegularizer,
            NoRegularizer,
        },
    };

    #[test]
    fn stores_power_and_factor() {
        let mut buf = Vec::new();
        save(&L2Regularizer::new(0.25).unwrap(), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["power"], 2);
        assert_eq!(value["factor"], 0.25);
    }

    #[test]
    fn restores_the_same_regularizer() {
        let reg = LRegularizer::<3>::new(0.75).unwrap();
        let mut buf = Vec::new();
        save(&reg, &mut buf).unwrap();

        let loaded: LRegularizer<3> = load(buf.as_slice()).unwrap();
        assert_eq!(loaded, reg);
    }

    #[test]
    fn compile_time_and_runtime_archives_are_interchangeable() {
        let mut buf = Vec::new();
        save(&L1Regularizer::new(0.5).unwrap(), &mut buf).unwrap();

        let loaded: LpRegularizer = load(buf.as_slice()).unwrap();
        assert_eq!(loaded.power(), 1);
        assert_eq!(loaded.factor(), 0.5);
    }

    #[test]
    fn rejects_an_archive_of_another_power() {
        let mut buf = Vec::new();
        save(&L1Regularizer::default(), &mut buf).unwrap();

        let err = load::<L2Regularizer, _>(buf.as_slice()).unwrap_err();
        assert!(matches!(err, RegErr::InvalidConfiguration(_)));
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn rejects_a_zero_power_archive() {
        let err = load::<LpRegularizer, _>(r#"{"power": 0, "factor": 1.0}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, RegErr::InvalidConfiguration(_)));
        assert!(err.to_string().contains("power must be a positive"));
    }

    #[test]
    fn malformed_archive_is_an_archive_error() {
        let err = load::<L1Regularizer, _>(r#"{"power": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, RegErr::Archive(_)));
    }

    #[test]
    fn elastic_net_checks_both_powers() {
        let reg = L1L2Regularizer::new(0.5, 0.25).unwrap();
        let mut buf = Vec::new();
        save(&reg, &mut buf).unwrap();
        assert_eq!(load::<L1L2Regularizer, _>(buf.as_slice()).unwrap(), reg);

        let swapped = r#"{"l1": {"power": 2, "factor": 0.5}, "l2": {"power": 2, "factor": 0.25}}"#;
        let err = load::<L1L2Regularizer, _>(swapped.as_bytes()).unwrap_err();
        assert!(matches!(err, RegErr::InvalidConfiguration(_)));
    }

    #[test]
    fn no_regularizer_restores() {
        let mut buf = Vec::new();
        save(&NoRegularizer::new(), &mut buf).unwrap();
        assert_eq!(
            load::<NoRegularizer, _>(buf.as_slice()).unwrap(),
            NoRegularizer::new()
        );
    }
}
