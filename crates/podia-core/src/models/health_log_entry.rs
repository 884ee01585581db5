use crate::error::{CoreError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_PAIN_LEVEL: u8 = 10;

/// Payload of a health-log entry, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HealthLogData {
    Symptom {
        pain_level: u8,
        swelling: bool,
        redness: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    BloodSugar {
        /// mg/dL
        level: f64,
    },
}

impl HealthLogData {
    #[track_caller]
    pub fn symptom(
        pain_level: u8,
        swelling: bool,
        redness: bool,
        notes: Option<String>,
    ) -> Result<Self> {
        if pain_level > MAX_PAIN_LEVEL {
            return Err(CoreError::InvalidPainLevel {
                value: pain_level,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(HealthLogData::Symptom {
            pain_level,
            swelling,
            redness,
            notes,
        })
    }

    pub fn blood_sugar(level: f64) -> Self {
        HealthLogData::BloodSugar { level }
    }
}

/// One health-log entry. Append-only, like analysis history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub data: HealthLogData,
}

impl HealthLogEntry {
    pub fn new(id: String, timestamp: DateTime<Utc>, data: HealthLogData) -> Self {
        Self {
            id,
            timestamp,
            data,
        }
    }
}
