use std::sync::{Arc, RwLock};

use crate::domain::model::{Consultation, Equipment, Patient, Room, Staff};
use crate::error::Result;
use crate::store::HospitalStore;

#[derive(Debug, Default, Clone)]
struct StoreInner {
    staff: Vec<Staff>,
    equipment: Vec<Equipment>,
    rooms: Vec<Room>,
    patients: Vec<Patient>,
    consultations: Vec<Consultation>,
}

/// Keeps every collection in memory.
///
/// Clones share the same collections, so a test can hand one clone to the
/// registration workflow and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryStore {
    pub fn new(staff: Vec<Staff>, equipment: Vec<Equipment>, rooms: Vec<Room>) -> Self {
        let inner = StoreInner { staff, equipment, rooms, ..Default::default() };
        Self { inner: Arc::new(RwLock::new(inner)) }
    }

    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        self.inner.write().expect("RwLock poisoned").patients = patients;
        self
    }

    pub fn with_consultations(self, consultations: Vec<Consultation>) -> Self {
        self.inner.write().expect("RwLock poisoned").consultations = consultations;
        self
    }
}

impl HospitalStore for InMemoryStore {
    fn fetch_staff(&self) -> Result<Vec<Staff>> {
        Ok(self.inner.read().expect("RwLock poisoned").staff.clone())
    }

    fn fetch_equipment(&self) -> Result<Vec<Equipment>> {
        Ok(self.inner.read().expect("RwLock poisoned").equipment.clone())
    }

    fn fetch_rooms(&self) -> Result<Vec<Room>> {
        Ok(self.inner.read().expect("RwLock poisoned").rooms.clone())
    }

    fn fetch_patients(&self) -> Result<Vec<Patient>> {
        Ok(self.inner.read().expect("RwLock poisoned").patients.clone())
    }

    fn fetch_consultations(&self) -> Result<Vec<Consultation>> {
        Ok(self.inner.read().expect("RwLock poisoned").consultations.clone())
    }

    fn save_patients(&mut self, patients: &[Patient]) -> Result<()> {
        self.inner.write().expect("RwLock poisoned").patients = patients.to_vec();
        Ok(())
    }

    fn save_consultations(&mut self, consultations: &[Consultation]) -> Result<()> {
        self.inner.write().expect("RwLock poisoned").consultations = consultations.to_vec();
        Ok(())
    }
}
