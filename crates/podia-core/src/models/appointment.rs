use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Singleton-per-identity follow-up reminder. Overwritten on update,
/// explicitly deletable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Upcoming,
    FollowUpNeeded,
}

impl Appointment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// A reminder whose instant has passed needs a follow-up rather than a
    /// countdown.
    pub fn status(&self, now: NaiveDateTime) -> AppointmentStatus {
        if self.scheduled_at() > now {
            AppointmentStatus::Upcoming
        } else {
            AppointmentStatus::FollowUpNeeded
        }
    }
}
