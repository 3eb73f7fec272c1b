use thiserror::Error;

use crate::domain::model::{Condition, Role};

/// Reasons a request string is rejected before any allocation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(
        "Register command is invalid.  Expected format = 'Register|PatientName|Condition|Topography' or 'Register|PatientName|Condition'"
    )]
    FieldCount,

    #[error("Register command is invalid.  Name is required.")]
    MissingName,

    #[error("Register command is invalid.  When Condition = 'Flu', Topography is not allowed.")]
    TopographyNotAllowed,

    #[error("Register command is invalid.  When Condition = 'Cancer', Topography is required.")]
    TopographyRequired,

    #[error("Register command is invalid.  Topography '{0}' is invalid.  It must be either 'HeadAndNeck' or 'Breast'.")]
    InvalidTopography(String),

    #[error("Register command is invalid.  Condition '{0}' is invalid.  It must be either 'Flu' or 'Cancer'.")]
    InvalidDiagnosis(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Data access failed: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse stored JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to convert stored record: {0}")]
    ConversionError(String),

    #[error(transparent)]
    Validation(#[from] RequestError),

    #[error("Patient '{0}' is already registered.")]
    DuplicatePatient(String),

    #[error("No staff member holds the role '{role}'.")]
    NoEligibleStaff { role: Role },

    #[error("No treatment room is eligible for condition '{condition}'.")]
    NoEligibleRoom { condition: Condition },

    #[error("No free '{role}' and eligible room found within {days} days of registration.")]
    SearchHorizonExhausted { role: Role, days: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
