use crate::Page;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use podia_core::{Appointment, AppointmentStatus, HealthLogEntry, HistoryEntry, Profile};

/// Top-level view state.
///
/// `Loading` only appears between a registered sign-in and the completion of
/// the post-login record fetch; anonymous sessions go straight to
/// `Ready(Analyze)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Unauthenticated,
    Loading,
    Ready(Page),
}

/// The signed-in identity's records, mirrored in memory.
///
/// Mutations update these optimistically from each write's result; nothing
/// re-fetches. History and health log are kept newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    pub profile: Profile,
    pub history: Vec<HistoryEntry>,
    pub health_log: Vec<HealthLogEntry>,
    pub appointment: Option<Appointment>,
}

impl Records {
    /// Most recent analysis, if any.
    pub fn latest_analysis(&self) -> Option<&HistoryEntry> {
        self.history.first()
    }

    /// How many analyses were run in the calendar month containing `now`.
    pub fn analyses_this_month(&self, now: DateTime<Utc>) -> usize {
        self.history
            .iter()
            .filter(|e| e.timestamp.year() == now.year() && e.timestamp.month() == now.month())
            .count()
    }

    /// Dashboard badge for the appointment reminder, if one is set.
    pub fn appointment_status(&self, now: NaiveDateTime) -> Option<AppointmentStatus> {
        self.appointment.map(|a| a.status(now))
    }
}
