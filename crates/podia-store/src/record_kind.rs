use std::fmt;

/// The four per-identity record kinds the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Profile,
    History,
    HealthLog,
    Appointment,
}

impl RecordKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            RecordKind::Profile => "profile",
            RecordKind::History => "history",
            RecordKind::HealthLog => "health-log",
            RecordKind::Appointment => "appointment",
        }
    }

    /// Profile and appointment are one document per identity; history and
    /// health log are ordered collections.
    pub fn is_singleton(&self) -> bool {
        matches!(self, RecordKind::Profile | RecordKind::Appointment)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
