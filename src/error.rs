use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, RegErr>;

/// The regularization crate's error type.
#[derive(Debug)]
pub enum RegErr {
    /// The weight and gradient matrices don't have the same shape.
    DimensionMismatch {
        weight: (usize, usize),
        gradient: (usize, usize),
    },
    /// A flat parameter slice doesn't hold as many values as its declared shape.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A regularizer was described with an unusable power or factor.
    InvalidConfiguration(String),
    /// A spec or archive couldn't be (de)serialized.
    Archive(serde_json::Error),
    Io(io::Error),
}

impl Display for RegErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegErr::DimensionMismatch { weight, gradient } => write!(
                f,
                "dimension mismatch: weight is {}x{} but gradient is {}x{}",
                weight.0, weight.1, gradient.0, gradient.1
            ),
            RegErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch for {what}, got {got} and expected {expected}"
            ),
            RegErr::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            RegErr::Archive(e) => write!(f, "archive error: {e}"),
            RegErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for RegErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Archive(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RegErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Archive(e)
    }
}

impl From<io::Error> for RegErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
