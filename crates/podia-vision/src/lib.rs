mod analysis_client;
mod error;

pub use analysis_client::{AnalysisClient, AnalysisResult, HIGH_RISK_PHRASE};
pub use error::{AnalysisError, Result};
