use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ParamError {
    UnknownParam(String),
    InvalidControllerTag(i64),
    NonFinite(f64),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownParam(name) => write!(f, "unknown parameter: {name}"),
            ParamError::InvalidControllerTag(tag) => {
                write!(f, "invalid controller tag: {tag} (expected -1, 0 or 1)")
            }
            ParamError::NonFinite(v) => write!(f, "non-finite value has no exact form: {v}"),
        }
    }
}

impl std::error::Error for ParamError {}

pub type Result<T> = std::result::Result<T, ParamError>;
