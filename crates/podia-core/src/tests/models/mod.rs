mod appointment;
mod diabetes_type;
mod health_log_entry;
mod profile;
mod risk_level;
