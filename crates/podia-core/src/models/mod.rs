pub mod appointment;
pub mod diabetes_type;
pub mod health_log_entry;
pub mod history_entry;
pub mod identity;
pub mod profile;
pub mod risk_level;
