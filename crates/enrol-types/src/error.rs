use thiserror::Error;

use crate::Field;

/// Why a candidate was turned away. The store is untouched whenever one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("A user with the login \"{login}\" already exists.")]
    DuplicateLogin { login: String },
    #[error("{} cannot be null.", .0.title())]
    MissingField(Field),
    #[error("Invalid password: {value}. Password must be at least {min_length} characters long.")]
    InvalidPassword { value: String, min_length: usize },
    #[error("Invalid age: {value}. Age must be at least {min_age} years.")]
    InvalidAge { value: i32, min_age: i32 },
}

impl RegistrationError {
    pub fn field(&self) -> Field {
        match self {
            RegistrationError::DuplicateLogin { .. } => Field::Login,
            RegistrationError::MissingField(field) => *field,
            RegistrationError::InvalidPassword { .. } => Field::Password,
            RegistrationError::InvalidAge { .. } => Field::Age,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationError::DuplicateLogin { .. } => "duplicate_login",
            RegistrationError::MissingField(_) => "missing_field",
            RegistrationError::InvalidPassword { .. } => "invalid_password",
            RegistrationError::InvalidAge { .. } => "invalid_age",
        }
    }
}
