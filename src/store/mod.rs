use crate::domain::model::{Consultation, Equipment, Patient, Room, Staff};
use crate::error::Result;

pub mod in_memory_store;
pub mod json_file_store;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;

/// Storage the registration workflow reads its snapshot from and writes its
/// results back to.
///
/// Every fetch returns the complete collection. Errors are handed to the
/// caller unchanged; an empty collection is not an error.
pub trait HospitalStore {
    fn fetch_staff(&self) -> Result<Vec<Staff>>;
    fn fetch_equipment(&self) -> Result<Vec<Equipment>>;
    fn fetch_rooms(&self) -> Result<Vec<Room>>;
    fn fetch_patients(&self) -> Result<Vec<Patient>>;
    fn fetch_consultations(&self) -> Result<Vec<Consultation>>;

    /// Replaces the stored patient collection.
    fn save_patients(&mut self, patients: &[Patient]) -> Result<()>;

    /// Replaces the stored consultation collection.
    fn save_consultations(&mut self, consultations: &[Consultation]) -> Result<()>;
}
