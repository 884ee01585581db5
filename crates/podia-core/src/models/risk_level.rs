use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse risk bucket derived from an analysis text by keyword matching.
///
/// The matching is intentionally naive: it exists so the history view can
/// badge entries, not to classify anything. "warrant a consultation" is the
/// conclusion phrase the analysis prompt mandates for flagged images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_prediction(prediction: &str) -> Self {
        let text = prediction.to_lowercase();

        if text.contains("high") || text.contains("severe") || text.contains("warrant a consultation")
        {
            RiskLevel::High
        } else if text.contains("moderate") {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        };
        write!(f, "{label}")
    }
}
