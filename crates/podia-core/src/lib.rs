pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::appointment::{Appointment, AppointmentStatus};
pub use models::diabetes_type::DiabetesType;
pub use models::health_log_entry::{HealthLogData, HealthLogEntry};
pub use models::history_entry::HistoryEntry;
pub use models::identity::Identity;
pub use models::profile::Profile;
pub use models::risk_level::RiskLevel;

#[cfg(test)]
pub(crate) mod tests;
