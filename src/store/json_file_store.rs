use std::path::{Path, PathBuf};

use crate::api::roster_dto::{EquipmentRosterDto, RoomRosterDto, StaffRosterDto};
use crate::api::schedule_dto::{ConsultationListDto, PatientListDto};
use crate::domain::model::{Consultation, Equipment, Patient, Room, Staff};
use crate::error::Result;
use crate::loader::parser::{parse_json_file, parse_json_file_or_default, write_json_file};
use crate::store::HospitalStore;

pub const STAFF_FILE: &str = "staff.json";
pub const EQUIPMENT_FILE: &str = "equipment.json";
pub const ROOMS_FILE: &str = "rooms.json";
pub const PATIENTS_FILE: &str = "patients.json";
pub const CONSULTATIONS_FILE: &str = "consultations.json";

/// Flat JSON files in one data directory.
///
/// The rosters (staff, equipment, rooms) must exist. Patients and
/// consultations start out empty when their file has not been written yet.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

impl HospitalStore for JsonFileStore {
    fn fetch_staff(&self) -> Result<Vec<Staff>> {
        parse_json_file::<StaffRosterDto>(self.path(STAFF_FILE))?.into_domain()
    }

    fn fetch_equipment(&self) -> Result<Vec<Equipment>> {
        Ok(parse_json_file::<EquipmentRosterDto>(self.path(EQUIPMENT_FILE))?.into_domain())
    }

    fn fetch_rooms(&self) -> Result<Vec<Room>> {
        Ok(parse_json_file::<RoomRosterDto>(self.path(ROOMS_FILE))?.into_domain())
    }

    fn fetch_patients(&self) -> Result<Vec<Patient>> {
        parse_json_file_or_default::<PatientListDto>(self.path(PATIENTS_FILE))?.into_domain()
    }

    fn fetch_consultations(&self) -> Result<Vec<Consultation>> {
        parse_json_file_or_default::<ConsultationListDto>(self.path(CONSULTATIONS_FILE))?.into_domain()
    }

    fn save_patients(&mut self, patients: &[Patient]) -> Result<()> {
        write_json_file(self.path(PATIENTS_FILE), &PatientListDto::from_domain(patients))?;
        log::debug!("Wrote {} patients to '{}'.", patients.len(), self.data_dir.display());
        Ok(())
    }

    fn save_consultations(&mut self, consultations: &[Consultation]) -> Result<()> {
        write_json_file(self.path(CONSULTATIONS_FILE), &ConsultationListDto::from_domain(consultations))?;
        log::debug!("Wrote {} consultations to '{}'.", consultations.len(), self.data_dir.display());
        Ok(())
    }
}
