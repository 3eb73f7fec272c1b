use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::id::{EquipmentName, PatientName, RoomName, StaffName};
use crate::error::{Error, RequestError, Result};

/// Calendar encoding used for every stored and returned date.
pub const DATE_FORMAT: &str = "%Y%m%d";

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.len() != 8 {
        return Err(Error::ConversionError(format!("Date '{}' is not in YYYYMMDD format.", value)));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| Error::ConversionError(format!("Date '{}' is not in YYYYMMDD format: {}", value, e)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The role a consultation requires from its staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    GeneralPractitioner,
    Oncologist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GeneralPractitioner => "GeneralPractitioner",
            Role::Oncologist => "Oncologist",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "GeneralPractitioner" => Ok(Role::GeneralPractitioner),
            "Oncologist" => Ok(Role::Oncologist),
            _ => Err(Error::ConversionError(format!("Unknown staff role '{}'.", value))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    pub name: StaffName,
    pub roles: Vec<String>,
}

impl Staff {
    pub fn new(name: impl Into<String>, roles: &[&str]) -> Self {
        Staff { name: StaffName::new(name), roles: roles.iter().map(|r| r.to_string()).collect() }
    }

    /// Role membership is an exact match on the stored role string.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Simple,
    Advanced,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Simple => "Simple",
            Capability::Advanced => "Advanced",
        }
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_uppercase().as_str() {
            "SIMPLE" => Ok(Capability::Simple),
            "ADVANCED" => Ok(Capability::Advanced),
            _ => Err(Error::ConversionError(format!("Unknown equipment capability '{}'.", value))),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub name: EquipmentName,
    pub capability: Capability,
}

impl Equipment {
    pub fn new(name: impl Into<String>, capability: Capability) -> Self {
        Equipment { name: EquipmentName::new(name), capability }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    /// Reference into the equipment roster; `None` for a room without equipment.
    pub equipment: Option<EquipmentName>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Room { name: RoomName::new(name), equipment: None }
    }

    pub fn with_equipment(name: impl Into<String>, equipment: impl Into<String>) -> Self {
        Room { name: RoomName::new(name), equipment: Some(EquipmentName::new(equipment)) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnosis {
    Flu,
    Cancer,
}

impl Diagnosis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::Flu => "Flu",
            Diagnosis::Cancer => "Cancer",
        }
    }
}

impl FromStr for Diagnosis {
    type Err = RequestError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "FLU" => Ok(Diagnosis::Flu),
            "CANCER" => Ok(Diagnosis::Cancer),
            _ => Err(RequestError::InvalidDiagnosis(value.trim().to_string())),
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topography {
    Breast,
    HeadAndNeck,
}

impl Topography {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topography::Breast => "Breast",
            Topography::HeadAndNeck => "HeadAndNeck",
        }
    }
}

impl FromStr for Topography {
    type Err = RequestError;

    /// Accepts `Breast`, `HeadAndNeck` and the legacy `Head&Neck`, ignoring case.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "BREAST" => Ok(Topography::Breast),
            "HEADANDNECK" | "HEAD&NECK" => Ok(Topography::HeadAndNeck),
            _ => Err(RequestError::InvalidTopography(value.trim().to_string())),
        }
    }
}

impl fmt::Display for Topography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well-formed diagnosis/topography pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Flu,
    Cancer(Topography),
}

impl Condition {
    /// Topography is required for cancer and forbidden for flu.
    pub fn new(diagnosis: Diagnosis, topography: Option<Topography>) -> std::result::Result<Self, RequestError> {
        match (diagnosis, topography) {
            (Diagnosis::Flu, None) => Ok(Condition::Flu),
            (Diagnosis::Flu, Some(_)) => Err(RequestError::TopographyNotAllowed),
            (Diagnosis::Cancer, Some(topography)) => Ok(Condition::Cancer(topography)),
            (Diagnosis::Cancer, None) => Err(RequestError::TopographyRequired),
        }
    }

    pub fn diagnosis(&self) -> Diagnosis {
        match self {
            Condition::Flu => Diagnosis::Flu,
            Condition::Cancer(_) => Diagnosis::Cancer,
        }
    }

    pub fn topography(&self) -> Option<Topography> {
        match self {
            Condition::Flu => None,
            Condition::Cancer(topography) => Some(*topography),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Flu => write!(f, "Flu"),
            Condition::Cancer(topography) => write!(f, "Cancer/{}", topography),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: PatientName,
    pub condition: Condition,
    pub registration_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub patient: PatientName,
    pub condition: Condition,
    pub staff: StaffName,
    pub staff_role: Role,
    pub room: RoomName,
    pub equipment: Option<EquipmentName>,
    pub equipment_capability: Option<Capability>,
    pub date: NaiveDate,
}

impl Consultation {
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
