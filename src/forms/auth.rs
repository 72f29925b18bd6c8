use bookclub_kernel::model::{Credentials, SignupProfile};
use bookclub_kernel::FieldErrors;

use super::{email, required};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = required(&mut errors, "username", &self.username, "Username is required");
        required(&mut errors, "password", &self.password, "Password is required");

        match username {
            Some(username) if errors.is_empty() => Ok(Credentials {
                username,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupProfile, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = required(&mut errors, "username", &self.username, "Username is required");
        let email = email(&mut errors, "email", &self.email);

        if required(&mut errors, "password", &self.password, "Password is required").is_some()
            && self.password.chars().count() < MIN_PASSWORD_LENGTH
        {
            errors.add("password", "Password must be at least 6 characters");
        }

        match (username, email) {
            (Some(username), Some(email)) if errors.is_empty() => Ok(SignupProfile {
                username,
                email,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Message for a single field, for per-field feedback while typing.
    pub fn validate_field(&self, field: &str) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| errors.get(field).map(str::to_string))
    }
}
