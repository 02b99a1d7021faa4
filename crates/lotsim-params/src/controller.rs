//! Typed view of the controller variant tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTROLLER_TYPE_ANALOGUE, CONTROLLER_TYPE_DISCRETE, CONTROLLER_TYPE_TAKAHASHI,
};
use crate::error::ParamError;

/// Controller algorithm variant. Serializes as its integer tag so that
/// configs interoperate with the raw `CONTROLLER_TYPE_*` constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ControllerType {
    Analogue,
    Discrete,
    Takahashi,
}

impl ControllerType {
    pub const ALL: [ControllerType; 3] = [
        ControllerType::Analogue,
        ControllerType::Discrete,
        ControllerType::Takahashi,
    ];

    /// The integer tag used in parameter tables and configs.
    pub fn tag(self) -> i64 {
        match self {
            ControllerType::Analogue => CONTROLLER_TYPE_ANALOGUE,
            ControllerType::Discrete => CONTROLLER_TYPE_DISCRETE,
            ControllerType::Takahashi => CONTROLLER_TYPE_TAKAHASHI,
        }
    }

    /// Lowercase variant name.
    pub fn name(self) -> &'static str {
        match self {
            ControllerType::Analogue => "analogue",
            ControllerType::Discrete => "discrete",
            ControllerType::Takahashi => "takahashi",
        }
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ControllerType> for i64 {
    fn from(ct: ControllerType) -> i64 {
        ct.tag()
    }
}

impl TryFrom<i64> for ControllerType {
    type Error = ParamError;

    fn try_from(tag: i64) -> Result<Self, ParamError> {
        match tag {
            CONTROLLER_TYPE_ANALOGUE => Ok(ControllerType::Analogue),
            CONTROLLER_TYPE_DISCRETE => Ok(ControllerType::Discrete),
            CONTROLLER_TYPE_TAKAHASHI => Ok(ControllerType::Takahashi),
            other => Err(ParamError::InvalidControllerTag(other)),
        }
    }
}

impl FromStr for ControllerType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, ParamError> {
        match s {
            "analogue" => Ok(ControllerType::Analogue),
            "discrete" => Ok(ControllerType::Discrete),
            "takahashi" => Ok(ControllerType::Takahashi),
            other => Err(ParamError::UnknownParam(other.to_string())),
        }
    }
}
