//! Student record and registration request.

use serde::{Deserialize, Serialize};

use crate::notify::Delivery;

/// A registered student as stored in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub student_number: String,
    pub section: String,
    /// Hex SHA-256 digest, never plaintext
    pub password: String,
    pub email: String,
}

/// Request body for registering a student.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Student view returned over the API, without the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub student_number: String,
    pub section: String,
    pub email: String,
}

impl From<&Student> for StudentProfile {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            student_number: student.student_number.clone(),
            section: student.section.clone(),
            email: student.email.clone(),
        }
    }
}

/// Result of a successful student registration, with the outcome of the email notice.
#[derive(Debug, Clone)]
pub struct StudentRegistration {
    pub student: Student,
    pub notification: Delivery,
}
