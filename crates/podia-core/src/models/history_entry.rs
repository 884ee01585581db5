use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed analysis. Append-only: entries are never edited, only
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub prediction: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(id: String, prediction: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            prediction,
            timestamp,
        }
    }
}
