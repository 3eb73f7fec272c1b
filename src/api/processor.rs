use crate::api::command::{Command, USAGE};
use crate::api::schedule_dto::{ConsultationListDto, PatientListDto};
use crate::domain::registration::Hospital;
use crate::error::Result;
use crate::store::HospitalStore;

/// Text front end of a [`Hospital`]: one request string in, one response string out.
#[derive(Debug)]
pub struct CommandProcessor<S: HospitalStore> {
    hospital: Hospital<S>,
}

impl<S: HospitalStore> CommandProcessor<S> {
    pub fn new(hospital: Hospital<S>) -> Self {
        CommandProcessor { hospital }
    }

    pub fn hospital(&self) -> &Hospital<S> {
        &self.hospital
    }

    /// Executes `request` and renders its outcome.
    ///
    /// Successful requests answer with JSON, unknown requests with the usage
    /// text and failures with the error's message.
    pub fn process_request(&mut self, request: &str) -> String {
        let command = match Command::parse(request) {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Rejected request '{}': {}", request, e);
                return e.to_string();
            }
        };

        match self.execute(command) {
            Ok(response) => response,
            Err(e) => {
                log::error!("Request '{}' failed: {}", request, e);
                e.to_string()
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Register { name, diagnosis, topography } => {
                let consultations = self.hospital.register(&name, diagnosis, topography)?;
                Ok(serde_json::to_string(&ConsultationListDto::from_domain(&consultations))?)
            }
            Command::RegisteredPatients => {
                let patients = self.hospital.registered_patients()?;
                Ok(serde_json::to_string(&PatientListDto::from_domain(&patients))?)
            }
            Command::ScheduledConsultations => {
                let consultations = self.hospital.scheduled_consultations()?;
                Ok(serde_json::to_string(&ConsultationListDto::from_domain(&consultations))?)
            }
            Command::Help => Ok(USAGE.to_string()),
        }
    }
}
