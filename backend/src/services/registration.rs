//! Student and representative sign-up.

use crate::auth::hash_password;
use crate::errors::AppError;
use crate::models::{Representative, Student, StudentRegistration};
use crate::notify::{Delivery, Mailer};
use crate::store::Store;

const MISSING_FIELDS: &str = "Please fill in all fields.";

/// Registration rules that are not fixed by the data format.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPolicy {
    /// Refuse a student number or username that is already registered.
    ///
    /// Off by default: the data file has never enforced uniqueness and login takes the
    /// first match.
    pub reject_duplicates: bool,
}

/// Appends new students and representatives to the store.
pub struct RegistrationService<'a> {
    store: &'a mut Store,
    mailer: &'a dyn Mailer,
    policy: RegistrationPolicy,
}

impl<'a> RegistrationService<'a> {
    pub fn new(store: &'a mut Store, mailer: &'a dyn Mailer, policy: RegistrationPolicy) -> Self {
        Self {
            store,
            mailer,
            policy,
        }
    }

    /// Register a department representative.
    pub fn register_representative(
        &mut self,
        department_name: &str,
        username: &str,
        plaintext: &str,
    ) -> Result<Representative, AppError> {
        require_filled(&[department_name, username, plaintext])?;

        if self.policy.reject_duplicates
            && self
                .store
                .document()
                .representatives
                .iter()
                .any(|r| r.username == username)
        {
            return Err(AppError::Conflict(format!(
                "Username {} is already registered",
                username
            )));
        }

        let representative = Representative {
            department_name: department_name.to_string(),
            username: username.to_string(),
            password: hash_password(plaintext),
        };

        let record = representative.clone();
        self.store
            .update(move |doc| doc.representatives.push(record))?;

        tracing::info!(
            username,
            department = department_name,
            "Representative registered"
        );
        Ok(representative)
    }

    /// Register a student, then send the confirmation email.
    ///
    /// The email is attempted exactly once after the record is saved; its failure is logged
    /// and returned in [`StudentRegistration::notification`].
    pub fn register_student(
        &mut self,
        name: &str,
        student_number: &str,
        section: &str,
        plaintext: &str,
        email: &str,
    ) -> Result<StudentRegistration, AppError> {
        require_filled(&[name, student_number, section, plaintext, email])?;

        if self.policy.reject_duplicates
            && self
                .store
                .document()
                .students
                .iter()
                .any(|s| s.student_number == student_number)
        {
            return Err(AppError::Conflict(format!(
                "Student number {} is already registered",
                student_number
            )));
        }

        let student = Student {
            name: name.to_string(),
            student_number: student_number.to_string(),
            section: section.to_string(),
            password: hash_password(plaintext),
            email: email.to_string(),
        };

        let record = student.clone();
        self.store.update(move |doc| doc.students.push(record))?;
        tracing::info!(student_number, section, "Student registered");

        let notification = Delivery::from(self.mailer.send_registration(name, email));
        if let Delivery::Failed { reason } = &notification {
            tracing::warn!(student_number, error = %reason, "Failed to send registration email");
        }

        Ok(StudentRegistration {
            student,
            notification,
        })
    }
}

fn require_filled(fields: &[&str]) -> Result<(), AppError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }
    Ok(())
}
