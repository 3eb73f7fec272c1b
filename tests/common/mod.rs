#![allow(dead_code)]

use chrono::NaiveDate;

use hospital_simulator::domain::clock::FixedClock;
use hospital_simulator::domain::id::{PatientName, RoomName, StaffName};
use hospital_simulator::domain::model::{Capability, Condition, Consultation, Equipment, Role, Room, Staff};
use hospital_simulator::domain::registration::{Hospital, RegistrationSettings};
use hospital_simulator::store::InMemoryStore;

/// Registration day used by every scenario.
pub fn day_d() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(chrono::Days::new(days)).unwrap()
}

pub fn hospital(store: InMemoryStore) -> Hospital<InMemoryStore> {
    hospital_with(store, RegistrationSettings::default())
}

pub fn hospital_with(store: InMemoryStore, settings: RegistrationSettings) -> Hospital<InMemoryStore> {
    Hospital::with_clock(store, settings, Box::new(FixedClock::new(day_d()))).unwrap()
}

/// Three doctors, two plain rooms, two advanced rooms and one simple room.
pub fn clinic_store() -> InMemoryStore {
    let staff = vec![
        Staff::new("John", &["Oncologist"]),
        Staff::new("Anna", &["GeneralPractitioner"]),
        Staff::new("Laura", &["GeneralPractitioner", "Oncologist"]),
    ];
    let equipment = vec![
        Equipment::new("MachineA", Capability::Advanced),
        Equipment::new("MachineB", Capability::Advanced),
        Equipment::new("MachineC", Capability::Simple),
    ];
    let rooms = vec![
        Room::new("RoomOne"),
        Room::new("RoomTwo"),
        Room::with_equipment("RoomThree", "MachineA"),
        Room::with_equipment("RoomFour", "MachineB"),
        Room::with_equipment("RoomFive", "MachineC"),
    ];
    InMemoryStore::new(staff, equipment, rooms)
}

pub fn booked(patient: &str, staff: &str, role: Role, room: &str, date: NaiveDate) -> Consultation {
    Consultation {
        patient: PatientName::new(patient),
        condition: match role {
            Role::GeneralPractitioner => Condition::Flu,
            Role::Oncologist => Condition::Cancer(hospital_simulator::domain::model::Topography::Breast),
        },
        staff: StaffName::new(staff),
        staff_role: role,
        room: RoomName::new(room),
        equipment: None,
        equipment_capability: None,
        date,
    }
}
