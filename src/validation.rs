//! Request shapes for create and partial update, with their field rules.
//!
//! Creation shapes require every field. Update shapes use [`Field`] so that a key
//! missing from the body can be told apart from a key sent as `null`.

use crate::error::AppError;
use serde::{Deserialize, Deserializer};

pub const NAME_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 100;
pub const HEADER_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 200;

/// Input that must be checked before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// One optional field of an update body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Rejects an explicit `null`; all update targets are NOT NULL columns.
    fn require_non_null(&self, name: &str) -> Result<(), AppError> {
        match self {
            Field::Null => Err(AppError::Validation(format!("{} may not be null", name))),
            _ => Ok(()),
        }
    }
}

// Only reached when the key is present; `#[serde(default)]` covers the missing case.
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Value(v),
            None => Field::Null,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub password: Field<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateAd {
    pub header: String,
    pub description: String,
    pub user_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateAd {
    #[serde(default)]
    pub header: Field<String>,
    #[serde(default)]
    pub description: Field<String>,
    #[serde(default)]
    pub user_id: Field<i32>,
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), AppError> {
        check_max_len("name", &self.name, NAME_MAX)?;
        check_password(&self.password)
    }
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<(), AppError> {
        self.name.require_non_null("name")?;
        self.password.require_non_null("password")?;
        if let Some(name) = self.name.as_value() {
            check_max_len("name", name, NAME_MAX)?;
        }
        if let Some(password) = self.password.as_value() {
            check_password(password)?;
        }
        Ok(())
    }
}

impl Validate for CreateAd {
    fn validate(&self) -> Result<(), AppError> {
        check_max_len("header", &self.header, HEADER_MAX)?;
        check_max_len("description", &self.description, DESCRIPTION_MAX)
    }
}

impl Validate for UpdateAd {
    fn validate(&self) -> Result<(), AppError> {
        self.header.require_non_null("header")?;
        self.description.require_non_null("description")?;
        self.user_id.require_non_null("user_id")?;
        if let Some(header) = self.header.as_value() {
            check_max_len("header", header, HEADER_MAX)?;
        }
        if let Some(description) = self.description.as_value() {
            check_max_len("description", description, DESCRIPTION_MAX)?;
        }
        Ok(())
    }
}

fn check_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(AppError::Validation("password too short".into()));
    }
    check_max_len("password", password, PASSWORD_MAX)
}

// Character count, matching VARCHAR(n) semantics.
fn check_max_len(col: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, max
        )));
    }
    Ok(())
}
