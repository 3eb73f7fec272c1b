use serde::{Deserialize, Serialize};

use crate::domain::id::{EquipmentName, PatientName, RoomName, StaffName};
use crate::domain::model::{Capability, Condition, Consultation, Diagnosis, Patient, Topography, format_date, parse_date};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientListDto {
    pub patients: Vec<PatientDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub name: String,
    pub diagnosis: String,
    #[serde(default)]
    pub topography: Option<String>,
    /// `YYYYMMDD`
    pub registration_date: String,
}

#[derive(Debug, Deserialize, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationListDto {
    pub consultations: Vec<ConsultationDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDto {
    pub patient_name: String,
    pub diagnosis: String,
    #[serde(default)]
    pub topography: Option<String>,
    pub staff_name: String,
    pub staff_role: String,
    pub room_name: String,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub equipment_capability: Option<String>,
    /// `YYYYMMDD`
    pub consultation_date: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn map_condition(diagnosis: &str, topography: Option<String>) -> Result<Condition> {
    let diagnosis = diagnosis.parse::<Diagnosis>().map_err(|e| Error::ConversionError(e.to_string()))?;
    let topography = non_empty(topography)
        .map(|t| t.parse::<Topography>())
        .transpose()
        .map_err(|e| Error::ConversionError(e.to_string()))?;

    Condition::new(diagnosis, topography).map_err(|e| Error::ConversionError(e.to_string()))
}

impl TryFrom<PatientDto> for Patient {
    type Error = Error;

    fn try_from(dto: PatientDto) -> Result<Self> {
        Ok(Patient {
            condition: map_condition(&dto.diagnosis, dto.topography)?,
            registration_date: parse_date(&dto.registration_date)?,
            name: PatientName::new(dto.name),
        })
    }
}

impl From<&Patient> for PatientDto {
    fn from(patient: &Patient) -> Self {
        PatientDto {
            name: patient.name.to_string(),
            diagnosis: patient.condition.diagnosis().to_string(),
            topography: patient.condition.topography().map(|t| t.to_string()),
            registration_date: format_date(patient.registration_date),
        }
    }
}

impl TryFrom<ConsultationDto> for Consultation {
    type Error = Error;

    fn try_from(dto: ConsultationDto) -> Result<Self> {
        let equipment_capability = non_empty(dto.equipment_capability).map(|c| c.parse::<Capability>()).transpose()?;

        Ok(Consultation {
            condition: map_condition(&dto.diagnosis, dto.topography)?,
            staff_role: dto.staff_role.parse()?,
            date: parse_date(&dto.consultation_date)?,
            patient: PatientName::new(dto.patient_name),
            staff: StaffName::new(dto.staff_name),
            room: RoomName::new(dto.room_name),
            equipment: non_empty(dto.equipment_name).map(EquipmentName::new),
            equipment_capability,
        })
    }
}

impl From<&Consultation> for ConsultationDto {
    fn from(consultation: &Consultation) -> Self {
        ConsultationDto {
            patient_name: consultation.patient.to_string(),
            diagnosis: consultation.condition.diagnosis().to_string(),
            topography: consultation.condition.topography().map(|t| t.to_string()),
            staff_name: consultation.staff.to_string(),
            staff_role: consultation.staff_role.to_string(),
            room_name: consultation.room.to_string(),
            equipment_name: consultation.equipment.as_ref().map(|e| e.to_string()),
            equipment_capability: consultation.equipment_capability.map(|c| c.to_string()),
            consultation_date: format_date(consultation.date),
        }
    }
}

impl PatientListDto {
    pub fn from_domain(patients: &[Patient]) -> Self {
        PatientListDto { patients: patients.iter().map(PatientDto::from).collect() }
    }

    pub fn into_domain(self) -> Result<Vec<Patient>> {
        self.patients.into_iter().map(Patient::try_from).collect()
    }
}

impl ConsultationListDto {
    pub fn from_domain(consultations: &[Consultation]) -> Self {
        ConsultationListDto { consultations: consultations.iter().map(ConsultationDto::from).collect() }
    }

    pub fn into_domain(self) -> Result<Vec<Consultation>> {
        self.consultations.into_iter().map(Consultation::try_from).collect()
    }
}
