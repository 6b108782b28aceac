use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ArrivalError;

/// Travel mode used for route computation and line styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Driving,
    DrivingTraffic,
    Walking,
    Cycling,
}

impl Profile {
    /// Path segment used by the directions endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Driving => "driving",
            Profile::DrivingTraffic => "driving-traffic",
            Profile::Walking => "walking",
            Profile::Cycling => "cycling",
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, Profile::Driving | Profile::DrivingTraffic)
    }

    pub fn is_walking(&self) -> bool {
        matches!(self, Profile::Walking)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ArrivalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(Profile::Driving),
            "driving-traffic" => Ok(Profile::DrivingTraffic),
            "walking" => Ok(Profile::Walking),
            "cycling" => Ok(Profile::Cycling),
            other => Err(ArrivalError::Other(format!("unknown profile: {other}"))),
        }
    }
}
