//! Error types

use uuid::Uuid;

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation, as a dotted path.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
    /// Optional machine-readable error code.
    pub code: Option<String>,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Creates a new field validation error with an error code.
    pub fn with_code(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "{}: {} ({})", self.field, self.message, code)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// All field errors found while validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors reported for the given field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldValidationError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// `Ok` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Errors returned by artwork sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No artwork with the given id.
    #[error("Artwork not found: {0}")]
    NotFound(Uuid),

    /// The submitted artwork failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Artwork data could not be (de)serialized.
    #[error("Invalid artwork data: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound(id)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<ValidationErrors> for SourceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
