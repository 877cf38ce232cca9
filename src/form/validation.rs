use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Category,
    Participants,
    Description,
    Location,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Category => "Category",
            RequiredField::Participants => "Artist / Participants",
            RequiredField::Description => "Short Description",
            RequiredField::Location => "Location",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Category is required.")]
    CategoryRequired,
    #[error("Missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<RequiredField>),
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields.iter().map(RequiredField::label).collect::<Vec<_>>().join(", ")
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFormInput {
    pub category: String,
    pub participants: String,
    pub description: String,
    pub location: String,
    pub attendees: String,
}

/// Trimmed form values with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub category: String,
    pub participants: String,
    pub description: String,
    pub location: String,
    pub attendees: String,
}

pub fn selected_category(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn missing_fields(input: &EventFormInput) -> Vec<RequiredField> {
    let checks = [
        (RequiredField::Category, input.category.as_str()),
        (RequiredField::Participants, input.participants.as_str()),
        (RequiredField::Description, input.description.as_str()),
        (RequiredField::Location, input.location.as_str()),
    ];

    checks
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
}

pub fn validate(input: &EventFormInput) -> Result<ValidatedForm, ValidationError> {
    let missing = missing_fields(input);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(ValidatedForm {
        category: selected_category(&input.category),
        participants: input.participants.trim().to_string(),
        description: input.description.trim().to_string(),
        location: input.location.trim().to_string(),
        attendees: input.attendees.trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Category,
    Details,
}

/// Two-step navigation: category first, then the remaining fields.
#[derive(Debug, Clone)]
pub struct FormWizard {
    step: FormStep,
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl FormWizard {
    pub fn new() -> Self {
        Self { step: FormStep::Category }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn next(&mut self, category: &str) -> Result<FormStep, ValidationError> {
        if selected_category(category).is_empty() {
            return Err(ValidationError::CategoryRequired);
        }
        self.step = FormStep::Details;
        Ok(self.step)
    }

    pub fn back(&mut self) -> FormStep {
        self.step = FormStep::Category;
        self.step
    }
}
