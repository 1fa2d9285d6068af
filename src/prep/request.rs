//! Meeting request input and validation

use serde::Deserialize;
use thiserror::Error;

/// Raw, unvalidated meeting form as submitted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingForm {
    pub company_name: Option<String>,
    pub meeting_objective: Option<String>,
    pub attendees: Option<String>,
    pub meeting_duration: Option<String>,
    pub focus_areas: Option<String>,
}

/// A validated meeting preparation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    pub company_name: String,
    pub objective: String,
    pub attendees: String,
    pub duration_minutes: u32,
    /// Empty when the caller gave no focus areas
    pub focus_areas: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Missing required fields: {}. Please fill in all required information.",
        .0.join(", ")
    )]
    MissingFields(Vec<&'static str>),

    #[error("Meeting duration must be a positive whole number of minutes.")]
    InvalidDuration(String),

    #[error("Invalid form submission: {0}")]
    MalformedForm(String),
}

impl MeetingForm {
    /// Store a submitted field by name. Unknown names are ignored and the
    /// first value of a repeated field wins.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "company_name" => &mut self.company_name,
            "meeting_objective" => &mut self.meeting_objective,
            "attendees" => &mut self.attendees,
            "meeting_duration" => &mut self.meeting_duration,
            "focus_areas" => &mut self.focus_areas,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    /// Check required fields and turn the form into a [`MeetingRequest`].
    pub fn validate(&self) -> Result<MeetingRequest, ValidationError> {
        let company_name = present(&self.company_name);
        let objective = present(&self.meeting_objective);
        let attendees = present(&self.attendees);
        let duration = present(&self.meeting_duration);

        let mut missing = Vec::new();
        if company_name.is_none() {
            missing.push("company_name");
        }
        if objective.is_none() {
            missing.push("meeting_objective");
        }
        if attendees.is_none() {
            missing.push("attendees");
        }
        if duration.is_none() {
            missing.push("meeting_duration");
        }

        match (company_name, objective, attendees, duration) {
            (Some(company_name), Some(objective), Some(attendees), Some(duration)) => {
                Ok(MeetingRequest {
                    company_name: company_name.to_string(),
                    objective: objective.to_string(),
                    attendees: attendees.to_string(),
                    duration_minutes: parse_duration(duration)?,
                    focus_areas: present(&self.focus_areas).unwrap_or_default().to_string(),
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    match raw.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::InvalidDuration(raw.to_string())),
    }
}
