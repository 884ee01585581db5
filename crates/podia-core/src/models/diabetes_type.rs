use crate::error::CoreError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    PreDiabetes,
    Other,
}

impl DiabetesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiabetesType::Type1 => "type_1",
            DiabetesType::Type2 => "type_2",
            DiabetesType::Gestational => "gestational",
            DiabetesType::PreDiabetes => "pre_diabetes",
            DiabetesType::Other => "other",
        }
    }
}

impl FromStr for DiabetesType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type_1" => Ok(DiabetesType::Type1),
            "type_2" => Ok(DiabetesType::Type2),
            "gestational" => Ok(DiabetesType::Gestational),
            "pre_diabetes" => Ok(DiabetesType::PreDiabetes),
            "other" => Ok(DiabetesType::Other),
            _ => Err(CoreError::InvalidDiabetesType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
