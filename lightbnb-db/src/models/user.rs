//! User records

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored credential; never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
}

/// User submitted for sign-up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Create a new user record, trimming name and email.
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::models::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", "secret").is_ok());
    /// assert!(NewUser::new("Ada", "   ", "secret").is_err());
    /// ```
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let user = Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Name, email, and password must all be non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        Ok(())
    }
}
