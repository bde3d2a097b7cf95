//! Authenticated principals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Representative, RepresentativeProfile, Student, StudentProfile};
use crate::errors::AppError;

/// Which collection a login is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Representative,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Representative => "representative",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Case-insensitive on the role token only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "representative" => Ok(Role::Representative),
            _ => Err(AppError::Validation(
                "Please enter 'student' or 'representative'".to_string(),
            )),
        }
    }
}

/// A stored record that passed authentication, digest included.
///
/// Convert with [`Principal::redacted`] before it leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Student(Student),
    Representative(Representative),
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::Student(_) => Role::Student,
            Principal::Representative(_) => Role::Representative,
        }
    }

    pub fn redacted(&self) -> PrincipalView {
        match self {
            Principal::Student(s) => PrincipalView::Student(s.into()),
            Principal::Representative(r) => PrincipalView::Representative(r.into()),
        }
    }
}

/// Principal as returned over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum PrincipalView {
    Student(StudentProfile),
    Representative(RepresentativeProfile),
}

/// Request body for logging in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}
