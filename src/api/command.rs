use crate::domain::model::{Condition, Diagnosis, Topography};
use crate::error::RequestError;

pub const USAGE: &str = "Expected requests are:
1) Patient Registration.
Example:  hospital_simulator Register|PatientName|Condition|Topography
          hospital_simulator Register|PatientName|Flu
          hospital_simulator Register|PatientName|Cancer|Breast
          hospital_simulator Register|PatientName|Cancer|HeadAndNeck

2) Get the list of registered patients.
Example:  hospital_simulator RegisteredPatients

3) Get the list of scheduled consultations.
Example:  hospital_simulator ScheduledConsultations
";

/// A request accepted on the pipe-delimited command surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { name: String, diagnosis: Diagnosis, topography: Option<Topography> },
    RegisteredPatients,
    ScheduledConsultations,
    Help,
}

impl Command {
    /// Splits a request such as `Register|Jane|Cancer|Breast`.
    ///
    /// The keyword is matched case-insensitively; any unknown keyword is a
    /// request for help rather than an error.
    pub fn parse(request: &str) -> Result<Command, RequestError> {
        let fields: Vec<&str> = request.split('|').collect();

        match fields[0].trim().to_uppercase().as_str() {
            "REGISTER" => parse_register(&fields),
            "REGISTEREDPATIENTS" => Ok(Command::RegisteredPatients),
            "SCHEDULEDCONSULTATIONS" => Ok(Command::ScheduledConsultations),
            _ => Ok(Command::Help),
        }
    }
}

fn parse_register(fields: &[&str]) -> Result<Command, RequestError> {
    if !(3..=4).contains(&fields.len()) {
        return Err(RequestError::FieldCount);
    }

    let name = fields[1].trim();
    if name.is_empty() {
        return Err(RequestError::MissingName);
    }

    let diagnosis: Diagnosis = fields[2].parse()?;
    let topography = fields.get(3).map(|t| t.parse::<Topography>());

    // Report a forbidden or missing topography before complaining about its value.
    let topography = match (diagnosis, topography) {
        (Diagnosis::Flu, Some(_)) => return Err(RequestError::TopographyNotAllowed),
        (_, topography) => topography.transpose()?,
    };
    let condition = Condition::new(diagnosis, topography)?;

    Ok(Command::Register { name: name.to_string(), diagnosis: condition.diagnosis(), topography: condition.topography() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("registeredpatients"), Ok(Command::RegisteredPatients));
        assert_eq!(Command::parse("SCHEDULEDCONSULTATIONS"), Ok(Command::ScheduledConsultations));
        assert_eq!(Command::parse("Whatever"), Ok(Command::Help));
        assert_eq!(Command::parse(""), Ok(Command::Help));
    }

    #[test]
    fn flu_registration() {
        assert_eq!(
            Command::parse("Register|Jane Doe|flu"),
            Ok(Command::Register { name: "Jane Doe".to_string(), diagnosis: Diagnosis::Flu, topography: None })
        );
    }

    #[test]
    fn cancer_registration_accepts_both_head_and_neck_spellings() {
        let expected =
            Command::Register { name: "Jane".to_string(), diagnosis: Diagnosis::Cancer, topography: Some(Topography::HeadAndNeck) };
        assert_eq!(Command::parse("Register|Jane|Cancer|HeadAndNeck"), Ok(expected.clone()));
        assert_eq!(Command::parse("register| Jane |CANCER|head&neck"), Ok(expected));
    }

    #[test]
    fn malformed_registrations_are_described() {
        assert_eq!(Command::parse("Register|Jane"), Err(RequestError::FieldCount));
        assert_eq!(Command::parse("Register|Jane|Cancer|Breast|Extra"), Err(RequestError::FieldCount));
        assert_eq!(Command::parse("Register| |Flu"), Err(RequestError::MissingName));
        assert_eq!(Command::parse("Register|Jane|Flu|Breast"), Err(RequestError::TopographyNotAllowed));
        assert_eq!(Command::parse("Register|Jane|Flu|Lung"), Err(RequestError::TopographyNotAllowed));
        assert_eq!(Command::parse("Register|Jane|Cancer"), Err(RequestError::TopographyRequired));
        assert_eq!(Command::parse("Register|Jane|Cancer|Lung"), Err(RequestError::InvalidTopography("Lung".to_string())));
        assert_eq!(Command::parse("Register|Jane|Measles"), Err(RequestError::InvalidDiagnosis("Measles".to_string())));
    }
}
