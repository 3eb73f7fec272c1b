use crate::domain::allocator::{AllocationRequest, ResourceSnapshot, SlotAllocator};
use crate::domain::classifier::RoomClassification;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::id::PatientName;
use crate::domain::model::{Condition, Consultation, Diagnosis, Patient, Topography};
use crate::error::{Error, RequestError, Result};
use crate::store::HospitalStore;

/// Registration options that are not part of the rosters.
#[derive(Debug, Clone)]
pub struct RegistrationSettings {
    pub max_search_days: u32,
    pub reject_duplicate_patients: bool,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        RegistrationSettings {
            max_search_days: crate::domain::allocator::DEFAULT_MAX_SEARCH_DAYS,
            reject_duplicate_patients: false,
        }
    }
}

/// Registers patients and books their first consultation.
#[derive(Debug)]
pub struct Hospital<S: HospitalStore> {
    store: S,
    clock: Box<dyn Clock>,
    allocator: SlotAllocator,
    reject_duplicate_patients: bool,
}

impl<S: HospitalStore> Hospital<S> {
    pub fn new(store: S, settings: RegistrationSettings) -> Result<Self> {
        Self::with_clock(store, settings, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, settings: RegistrationSettings, clock: Box<dyn Clock>) -> Result<Self> {
        Ok(Hospital {
            store,
            clock,
            allocator: SlotAllocator::new(settings.max_search_days)?,
            reject_duplicate_patients: settings.reject_duplicate_patients,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a patient today and schedules the earliest possible consultation.
    ///
    /// Nothing is written unless every fetch and the allocation succeed.
    ///
    /// # Returns
    /// The complete consultation collection, including the new entry.
    pub fn register(&mut self, name: &str, diagnosis: Diagnosis, topography: Option<Topography>) -> Result<Vec<Consultation>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RequestError::MissingName.into());
        }
        let condition = Condition::new(diagnosis, topography)?;
        let registration_date = self.clock.today();

        let staff = self.store.fetch_staff()?;
        let equipment = self.store.fetch_equipment()?;
        let rooms = self.store.fetch_rooms()?;
        let mut patients = self.store.fetch_patients()?;
        let mut consultations = self.store.fetch_consultations()?;

        if self.reject_duplicate_patients && patients.iter().any(|p| p.name.as_str() == name) {
            return Err(Error::DuplicatePatient(name.to_string()));
        }

        let patient = Patient { name: PatientName::new(name), condition, registration_date };
        log::info!("Registering '{}' ({}) on {}.", patient.name, condition, registration_date);

        let classification = RoomClassification::classify(&equipment, &rooms);
        let request = AllocationRequest { patient: patient.name.clone(), condition, registration_date };
        let snapshot = ResourceSnapshot { staff: &staff, rooms: &classification, consultations: &consultations };

        let consultation = self.allocator.allocate(&request, snapshot)?;

        patients.push(patient);
        consultations.push(consultation);

        self.store.save_patients(&patients)?;
        if let Err(e) = self.store.save_consultations(&consultations) {
            patients.pop();
            self.restore_patients(&patients);
            return Err(e);
        }

        Ok(consultations)
    }

    /// Puts back the patient collection after the consultation write failed.
    fn restore_patients(&mut self, patients: &[Patient]) {
        if let Err(e) = self.store.save_patients(patients) {
            log::error!("Could not restore patient collection after failed consultation write: {}", e);
        }
    }

    pub fn registered_patients(&self) -> Result<Vec<Patient>> {
        self.store.fetch_patients()
    }

    pub fn scheduled_consultations(&self) -> Result<Vec<Consultation>> {
        self.store.fetch_consultations()
    }
}
