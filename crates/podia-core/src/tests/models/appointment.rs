use crate::{Appointment, AppointmentStatus};

use chrono::{NaiveDate, NaiveTime};

fn appointment(year: i32, month: u32, day: u32) -> Appointment {
    Appointment::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
    )
}

#[test]
fn test_future_appointment_is_upcoming() {
    let appt = appointment(2030, 6, 1);
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    assert_eq!(appt.status(now), AppointmentStatus::Upcoming);
}

#[test]
fn test_past_appointment_needs_follow_up() {
    let appt = appointment(2025, 3, 10);
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    assert_eq!(appt.status(now), AppointmentStatus::FollowUpNeeded);
}

#[test]
fn test_same_day_uses_time_of_day() {
    let appt = appointment(2026, 1, 1);
    let before = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let after = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(15, 0, 0)
        .unwrap();

    assert_eq!(appt.status(before), AppointmentStatus::Upcoming);
    assert_eq!(appt.status(after), AppointmentStatus::FollowUpNeeded);
}
