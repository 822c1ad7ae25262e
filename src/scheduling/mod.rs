//! Visit slot allocation.
//!
//! The shelter offers the same nine hourly slots every day, shared across
//! all pets. Cancelled appointments free their slot.

use crate::models::{Appointment, AppointmentStatus};

/// Hourly visit slots offered each day.
pub const DAILY_SLOTS: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Free slots for a date, in template (ascending) order.
pub fn available_slots(appointments: &[Appointment], date: &str) -> Vec<String> {
    DAILY_SLOTS
        .iter()
        .filter(|slot| {
            !appointments.iter().any(|app| {
                app.date == date && app.time == **slot && app.status == AppointmentStatus::Scheduled
            })
        })
        .map(|slot| slot.to_string())
        .collect()
}

/// Whether some non-cancelled appointment already occupies the exact
/// (date, time) pair, regardless of pet or user.
pub fn slot_taken(appointments: &[Appointment], date: &str, time: &str) -> bool {
    appointments.iter().any(|app| {
        app.date == date && app.time == time && app.status != AppointmentStatus::Cancelled
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(date: &str, time: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: "a-1".to_string(),
            user_id: "u-1".to_string(),
            pet_id: "p-1".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            notes: String::new(),
            status,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            cancelled_at: None,
        }
    }

    #[test]
    fn test_empty_calendar_offers_all_slots() {
        let slots = available_slots(&[], "2024-01-01");
        assert_eq!(slots, DAILY_SLOTS);
    }

    #[test]
    fn test_scheduled_booking_blocks_its_slot() {
        let apps = [appointment("2024-01-01", "09:00", AppointmentStatus::Scheduled)];
        let slots = available_slots(&apps, "2024-01-01");

        assert_eq!(slots.len(), 8);
        assert!(!slots.contains(&"09:00".to_string()));
        // Remaining slots keep ascending order.
        assert_eq!(slots[0], "10:00");
        assert_eq!(slots[7], "17:00");
    }

    #[test]
    fn test_cancelled_booking_frees_its_slot() {
        let apps = [appointment("2024-01-01", "09:00", AppointmentStatus::Cancelled)];
        let slots = available_slots(&apps, "2024-01-01");
        assert_eq!(slots, DAILY_SLOTS);
    }

    #[test]
    fn test_other_dates_do_not_interfere() {
        let apps = [appointment("2024-01-02", "09:00", AppointmentStatus::Scheduled)];
        let slots = available_slots(&apps, "2024-01-01");
        assert_eq!(slots.len(), 9);
    }

    #[test]
    fn test_slot_taken_is_global_across_pets() {
        let mut other_pet = appointment("2024-01-01", "10:00", AppointmentStatus::Scheduled);
        other_pet.pet_id = "p-2".to_string();

        assert!(slot_taken(&[other_pet], "2024-01-01", "10:00"));
        assert!(!slot_taken(&[], "2024-01-01", "10:00"));
    }

    #[test]
    fn test_slot_taken_ignores_cancelled() {
        let apps = [appointment("2024-01-01", "10:00", AppointmentStatus::Cancelled)];
        assert!(!slot_taken(&apps, "2024-01-01", "10:00"));
    }
}
