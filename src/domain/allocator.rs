use chrono::{Days, NaiveDate};

use crate::domain::availability::Availability;
use crate::domain::classifier::RoomClassification;
use crate::domain::id::PatientName;
use crate::domain::model::{Condition, Consultation, Staff};
use crate::domain::policy::AllocationPolicy;
use crate::error::{Error, Result};

/// Default number of days searched after the registration date.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 365;

/// Calendar days after a registration date, up to a fixed horizon.
///
/// The first candidate is the day after registration; a consultation is never
/// booked on the registration day itself.
#[derive(Debug, Clone)]
pub struct CandidateDates {
    registration_date: NaiveDate,
    offset: u32,
    horizon: u32,
}

impl CandidateDates {
    pub fn new(registration_date: NaiveDate, horizon: u32) -> Self {
        CandidateDates { registration_date, offset: 0, horizon }
    }
}

impl Iterator for CandidateDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.offset >= self.horizon {
            return None;
        }
        self.offset += 1;
        self.registration_date.checked_add_days(Days::new(u64::from(self.offset)))
    }
}

/// A patient waiting for a consultation slot.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    pub patient: PatientName,
    pub condition: Condition,
    pub registration_date: NaiveDate,
}

/// Read-only view of the rosters for the duration of one allocation.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSnapshot<'a> {
    pub staff: &'a [Staff],
    pub rooms: &'a RoomClassification,
    pub consultations: &'a [Consultation],
}

#[derive(Debug, Clone)]
pub struct SlotAllocator {
    max_search_days: u32,
}

impl Default for SlotAllocator {
    fn default() -> Self {
        SlotAllocator { max_search_days: DEFAULT_MAX_SEARCH_DAYS }
    }
}

impl SlotAllocator {
    pub fn new(max_search_days: u32) -> Result<Self> {
        if max_search_days == 0 {
            return Err(Error::InvalidConfig("max_search_days must be at least 1".to_string()));
        }
        Ok(SlotAllocator { max_search_days })
    }

    /// Finds the earliest date on which an eligible room and a staff member
    /// holding the required role are both free, and builds the consultation.
    ///
    /// The snapshot is not modified; appending the result is up to the caller.
    ///
    /// # Errors
    /// - `Error::NoEligibleStaff` if nobody on the roster holds the required role.
    /// - `Error::NoEligibleRoom` if the condition has no eligible room at all.
    /// - `Error::SearchHorizonExhausted` if every date within the horizon is full.
    pub fn allocate(&self, request: &AllocationRequest, snapshot: ResourceSnapshot<'_>) -> Result<Consultation> {
        let policy = AllocationPolicy::for_condition(request.condition);

        let eligible_staff: Vec<&Staff> = snapshot.staff.iter().filter(|s| s.has_role(policy.required_role)).collect();
        if eligible_staff.is_empty() {
            log::warn!("Cannot schedule '{}': no staff member holds role '{}'.", request.patient, policy.required_role);
            return Err(Error::NoEligibleStaff { role: policy.required_role });
        }

        let eligible_rooms = policy.eligible_rooms(snapshot.rooms);
        if eligible_rooms.is_empty() {
            log::warn!("Cannot schedule '{}': no room is eligible for '{}'.", request.patient, request.condition);
            return Err(Error::NoEligibleRoom { condition: request.condition });
        }

        for date in CandidateDates::new(request.registration_date, self.max_search_days) {
            let availability = Availability::for_date(snapshot.consultations, date);

            let Some(room) = eligible_rooms.iter().copied().find(|room| availability.is_room_free(room)) else {
                log::debug!("{}: no eligible room free for '{}'.", date, request.condition);
                continue;
            };

            let Some(staff) = eligible_staff.iter().copied().find(|staff| availability.is_staff_free(&staff.name)) else {
                log::debug!("{}: no '{}' free.", date, policy.required_role);
                continue;
            };

            let equipment = snapshot.rooms.equipment_of(room);
            let consultation = Consultation {
                patient: request.patient.clone(),
                condition: request.condition,
                staff: staff.name.clone(),
                staff_role: policy.required_role,
                room: room.clone(),
                equipment: equipment.map(|e| e.name.clone()),
                equipment_capability: equipment.map(|e| e.capability),
                date,
            };

            log::info!(
                "Scheduled '{}' ({}) on {} with {} in {}.",
                consultation.patient,
                consultation.condition,
                consultation.date,
                consultation.staff,
                consultation.room
            );

            return Ok(consultation);
        }

        log::warn!(
            "Cannot schedule '{}': search horizon of {} days exhausted for role '{}'.",
            request.patient,
            self.max_search_days,
            policy.required_role
        );
        Err(Error::SearchHorizonExhausted { role: policy.required_role, days: self.max_search_days })
    }
}
