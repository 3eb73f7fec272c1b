use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::id::{RoomName, StaffName};
use crate::domain::model::Consultation;

/// Rooms and staff that already have a consultation on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    pub occupied_rooms: HashSet<RoomName>,
    pub occupied_staff: HashSet<StaffName>,
}

impl Availability {
    /// Rebuilt from scratch for every candidate date.
    pub fn for_date(consultations: &[Consultation], date: NaiveDate) -> Self {
        let mut availability = Availability::default();

        for consultation in consultations.iter().filter(|c| c.is_on(date)) {
            availability.occupied_rooms.insert(consultation.room.clone());
            availability.occupied_staff.insert(consultation.staff.clone());
        }

        availability
    }

    pub fn is_room_free(&self, room: &RoomName) -> bool {
        !self.occupied_rooms.contains(room)
    }

    pub fn is_staff_free(&self, staff: &StaffName) -> bool {
        !self.occupied_staff.contains(staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::PatientName;
    use crate::domain::model::{Condition, Role, Topography};

    fn consultation(patient: &str, staff: &str, room: &str, date: NaiveDate) -> Consultation {
        Consultation {
            patient: PatientName::new(patient),
            condition: Condition::Cancer(Topography::Breast),
            staff: StaffName::new(staff),
            staff_role: Role::Oncologist,
            room: RoomName::new(room),
            equipment: None,
            equipment_capability: None,
            date,
        }
    }

    #[test]
    fn only_consultations_on_the_date_occupy_resources() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let next_day = day.succ_opt().unwrap();
        let consultations =
            vec![consultation("Patient_1", "John", "RoomFive", day), consultation("Patient_2", "Laura", "RoomThree", next_day)];

        let availability = Availability::for_date(&consultations, day);

        assert!(!availability.is_room_free(&RoomName::new("RoomFive")));
        assert!(!availability.is_staff_free(&StaffName::new("John")));
        assert!(availability.is_room_free(&RoomName::new("RoomThree")));
        assert!(availability.is_staff_free(&StaffName::new("Laura")));
    }

    #[test]
    fn empty_schedule_leaves_everything_free() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let availability = Availability::for_date(&[], day);

        assert!(availability.occupied_rooms.is_empty());
        assert!(availability.occupied_staff.is_empty());
    }
}
