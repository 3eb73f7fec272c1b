mod common;

use std::collections::HashSet;

use chrono::NaiveDate;

use common::{booked, clinic_store, day_d, hospital, hospital_with, plus_days};
use hospital_simulator::domain::id::{RoomName, StaffName};
use hospital_simulator::domain::model::{Capability, Condition, Consultation, Diagnosis, Equipment, Role, Room, Staff, Topography};
use hospital_simulator::domain::registration::RegistrationSettings;
use hospital_simulator::error::Error;
use hospital_simulator::store::{HospitalStore, InMemoryStore};

fn single_gp_store() -> InMemoryStore {
    InMemoryStore::new(vec![Staff::new("Greg", &["GeneralPractitioner"])], vec![], vec![Room::new("RoomOne"), Room::new("RoomTwo")])
}

fn single_oncologist_store() -> InMemoryStore {
    InMemoryStore::new(
        vec![Staff::new("Olga", &["Oncologist"])],
        vec![Equipment::new("MachineS", Capability::Simple), Equipment::new("MachineA", Capability::Advanced)],
        vec![Room::with_equipment("SimpleRoom", "MachineS"), Room::with_equipment("AdvancedRoom", "MachineA")],
    )
}

#[test]
fn scenario_a_flu_patient_gets_next_day_with_first_room_and_only_gp() {
    let mut hospital = hospital(single_gp_store());

    let consultations = hospital.register("Jane", Diagnosis::Flu, None).unwrap();

    assert_eq!(consultations.len(), 1);
    let consultation = &consultations[0];
    assert_eq!(consultation.date, plus_days(day_d(), 1));
    assert_eq!(consultation.room, RoomName::new("RoomOne"));
    assert_eq!(consultation.staff, StaffName::new("Greg"));
    assert_eq!(consultation.staff_role, Role::GeneralPractitioner);
    assert_eq!(consultation.equipment, None);
    assert_eq!(consultation.equipment_capability, None);
}

#[test]
fn scenario_b_busy_gp_moves_consultation_one_day_later() {
    let existing = booked("Earlier", "Greg", Role::GeneralPractitioner, "RoomOne", plus_days(day_d(), 1));
    let mut hospital = hospital(single_gp_store().with_consultations(vec![existing]));

    let consultations = hospital.register("Jane", Diagnosis::Flu, None).unwrap();

    assert_eq!(consultations.len(), 2);
    let consultation = consultations.last().unwrap();
    assert_eq!(consultation.date, plus_days(day_d(), 2));
    assert_eq!(consultation.room, RoomName::new("RoomOne"));
    assert_eq!(consultation.staff, StaffName::new("Greg"));
}

#[test]
fn scenario_c_breast_cancer_prefers_simple_equipment() {
    let mut hospital = hospital(single_oncologist_store());

    let consultations = hospital.register("Jane", Diagnosis::Cancer, Some(Topography::Breast)).unwrap();

    let consultation = &consultations[0];
    assert_eq!(consultation.date, plus_days(day_d(), 1));
    assert_eq!(consultation.room, RoomName::new("SimpleRoom"));
    assert_eq!(consultation.staff_role, Role::Oncologist);
    assert_eq!(consultation.equipment_capability, Some(Capability::Simple));
}

#[test]
fn scenario_d_head_and_neck_cancer_uses_advanced_equipment_only() {
    let mut hospital = hospital(single_oncologist_store());

    let consultations = hospital.register("Jane", Diagnosis::Cancer, Some(Topography::HeadAndNeck)).unwrap();

    let consultation = &consultations[0];
    assert_eq!(consultation.room, RoomName::new("AdvancedRoom"));
    assert_eq!(consultation.equipment_capability, Some(Capability::Advanced));

    // With the advanced room taken the next head-and-neck patient waits, even though the simple room is free.
    let consultations = hospital.register("Joe", Diagnosis::Cancer, Some(Topography::HeadAndNeck)).unwrap();
    let consultation = consultations.last().unwrap();
    assert_eq!(consultation.room, RoomName::new("AdvancedRoom"));
    assert_eq!(consultation.date, plus_days(day_d(), 2));
}

#[test]
fn scenario_e_missing_oncologists_fail_explicitly() {
    let store = InMemoryStore::new(
        vec![Staff::new("Greg", &["GeneralPractitioner"])],
        vec![Equipment::new("MachineS", Capability::Simple)],
        vec![Room::with_equipment("SimpleRoom", "MachineS")],
    );
    let mut hospital = hospital(store);

    let result = hospital.register("Jane", Diagnosis::Cancer, Some(Topography::Breast));

    assert!(matches!(result, Err(Error::NoEligibleStaff { role: Role::Oncologist })));
    assert!(hospital.registered_patients().unwrap().is_empty());
    assert!(hospital.scheduled_consultations().unwrap().is_empty());
}

#[test]
fn bounded_horizon_reports_exhaustion() {
    let settings = RegistrationSettings { max_search_days: 2, ..Default::default() };
    let mut hospital = hospital_with(single_gp_store(), settings);

    hospital.register("P1", Diagnosis::Flu, None).unwrap();
    hospital.register("P2", Diagnosis::Flu, None).unwrap();
    let result = hospital.register("P3", Diagnosis::Flu, None);

    assert!(matches!(result, Err(Error::SearchHorizonExhausted { role: Role::GeneralPractitioner, days: 2 })));
    assert_eq!(hospital.scheduled_consultations().unwrap().len(), 2);
}

#[test]
fn successful_registration_records_patient_with_registration_date() {
    let mut hospital = hospital(clinic_store());
    hospital.register("Jane", Diagnosis::Cancer, Some(Topography::HeadAndNeck)).unwrap();

    let patients = hospital.registered_patients().unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].name.as_str(), "Jane");
    assert_eq!(patients[0].condition, Condition::Cancer(Topography::HeadAndNeck));
    assert_eq!(patients[0].registration_date, day_d());
}

#[test]
fn read_only_queries_are_stable() {
    let mut hospital = hospital(clinic_store());
    hospital.register("Jane", Diagnosis::Flu, None).unwrap();

    let first = hospital.scheduled_consultations().unwrap();
    let second = hospital.scheduled_consultations().unwrap();
    assert_eq!(first, second);
    assert_eq!(hospital.registered_patients().unwrap(), hospital.registered_patients().unwrap());
    assert_eq!(hospital.store().fetch_consultations().unwrap().len(), 1);
}

// Independent statement of the eligibility rules for the clinic roster.
fn eligible_rooms(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::Flu => &["RoomOne", "RoomTwo"],
        Condition::Cancer(Topography::Breast) => &["RoomFive", "RoomThree", "RoomFour"],
        Condition::Cancer(Topography::HeadAndNeck) => &["RoomThree", "RoomFour"],
    }
}

fn eligible_staff(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::Flu => &["Anna", "Laura"],
        Condition::Cancer(_) => &["John", "Laura"],
    }
}

fn has_free_slot(consultations: &[Consultation], condition: Condition, date: NaiveDate) -> bool {
    let on_date: Vec<&Consultation> = consultations.iter().filter(|c| c.date == date).collect();
    let room_free = eligible_rooms(condition).iter().any(|room| on_date.iter().all(|c| c.room.as_str() != *room));
    let staff_free = eligible_staff(condition).iter().any(|staff| on_date.iter().all(|c| c.staff.as_str() != *staff));
    room_free && staff_free
}

#[test]
fn repeated_registrations_respect_every_scheduling_rule() {
    let mut hospital = hospital(clinic_store());
    let conditions = [
        (Diagnosis::Flu, None),
        (Diagnosis::Cancer, Some(Topography::Breast)),
        (Diagnosis::Cancer, Some(Topography::HeadAndNeck)),
        (Diagnosis::Cancer, Some(Topography::Breast)),
        (Diagnosis::Flu, None),
    ];

    for i in 0..40 {
        let (diagnosis, topography) = conditions[i % conditions.len()];
        let condition = Condition::new(diagnosis, topography).unwrap();
        let before = hospital.scheduled_consultations().unwrap();

        let after = hospital.register(&format!("Patient_{}", i), diagnosis, topography).unwrap();
        assert_eq!(after.len(), before.len() + 1);
        let new = after.last().unwrap();

        // Strictly after registration, and no earlier feasible date was skipped.
        assert!(new.date > day_d());
        let mut date = plus_days(day_d(), 1);
        while date < new.date {
            assert!(!has_free_slot(&before, condition, date), "Patient_{} skipped free date {}", i, date);
            date = date.succ_opt().unwrap();
        }

        // Role and room eligibility.
        assert!(eligible_staff(condition).contains(&new.staff.as_str()));
        assert!(eligible_rooms(condition).contains(&new.room.as_str()));
        match condition {
            Condition::Flu => {
                assert_eq!(new.staff_role, Role::GeneralPractitioner);
                assert_eq!(new.equipment_capability, None);
            }
            Condition::Cancer(Topography::Breast) => {
                assert_eq!(new.staff_role, Role::Oncologist);
                assert!(new.equipment_capability.is_some());
                let simple_free = before.iter().all(|c| c.date != new.date || c.room.as_str() != "RoomFive");
                if simple_free {
                    assert_eq!(new.room.as_str(), "RoomFive");
                }
            }
            Condition::Cancer(Topography::HeadAndNeck) => {
                assert_eq!(new.staff_role, Role::Oncologist);
                assert_eq!(new.equipment_capability, Some(Capability::Advanced));
            }
        }
    }

    // No room and no staff member is used twice on the same day.
    let consultations = hospital.scheduled_consultations().unwrap();
    let mut rooms = HashSet::new();
    let mut staff = HashSet::new();
    for c in &consultations {
        assert!(rooms.insert((c.date, c.room.clone())), "room {} double-booked on {}", c.room, c.date);
        assert!(staff.insert((c.date, c.staff.clone())), "staff {} double-booked on {}", c.staff, c.date);
    }
    assert_eq!(hospital.registered_patients().unwrap().len(), 40);
}
