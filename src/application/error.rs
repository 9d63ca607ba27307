// src/application/error.rs
use crate::domain::errors::{DomainError, ValidationErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(ValidationErrors),
}

impl ApplicationError {
    pub fn validation(errors: impl Into<ValidationErrors>) -> Self {
        Self::Validation(errors.into())
    }

    /// Violation messages carried by the error, if it is a validation failure.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(errors) | Self::Domain(DomainError::Validation(errors)) => {
                Some(errors.messages())
            }
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_failures_stay_domain_errors() {
        let err = ApplicationError::from(DomainError::Persistence("connection reset".into()));
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Persistence(ref msg)) if msg == "connection reset"
        ));
        assert!(err.validation_messages().is_none());
    }

    #[test]
    fn both_validation_shapes_expose_messages() {
        let direct = ApplicationError::validation(vec!["first".to_string()]);
        let wrapped = ApplicationError::from(DomainError::invalid("second"));
        assert_eq!(direct.validation_messages(), Some(&["first".to_string()][..]));
        assert_eq!(wrapped.validation_messages(), Some(&["second".to_string()][..]));
    }
}
