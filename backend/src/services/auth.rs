//! Credential lookup.

use crate::auth::verify_password;
use crate::errors::AppError;
use crate::models::{Principal, Representative, Role, Student};
use crate::store::Store;

/// Looks up students and representatives by identifier and password.
pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Authenticate against the collection named by `role`.
    ///
    /// Returns the first record whose identifier matches exactly and whose digest matches
    /// the hashed password. An unknown identifier and a wrong password produce the same
    /// error.
    pub fn authenticate(
        &self,
        role: &str,
        identifier: &str,
        plaintext: &str,
    ) -> Result<Principal, AppError> {
        require_filled(identifier, plaintext)?;
        match role.parse::<Role>()? {
            Role::Student => self.student(identifier, plaintext).map(Principal::Student),
            Role::Representative => self
                .representative(identifier, plaintext)
                .map(Principal::Representative),
        }
    }

    /// Look up a student by student number.
    pub fn student(&self, student_number: &str, plaintext: &str) -> Result<Student, AppError> {
        require_filled(student_number, plaintext)?;
        let found = self
            .store
            .document()
            .students
            .iter()
            .find(|s| s.student_number == student_number && verify_password(plaintext, &s.password))
            .cloned();
        log_outcome(Role::Student, student_number, found.is_some());
        found.ok_or_else(|| invalid_credentials(Role::Student))
    }

    /// Look up a representative by username.
    pub fn representative(
        &self,
        username: &str,
        plaintext: &str,
    ) -> Result<Representative, AppError> {
        require_filled(username, plaintext)?;
        let found = self
            .store
            .document()
            .representatives
            .iter()
            .find(|r| r.username == username && verify_password(plaintext, &r.password))
            .cloned();
        log_outcome(Role::Representative, username, found.is_some());
        found.ok_or_else(|| invalid_credentials(Role::Representative))
    }
}

fn require_filled(identifier: &str, plaintext: &str) -> Result<(), AppError> {
    if identifier.is_empty() || plaintext.is_empty() {
        return Err(AppError::Validation("Please fill in all fields.".to_string()));
    }
    Ok(())
}

fn log_outcome(role: Role, identifier: &str, matched: bool) {
    if matched {
        tracing::info!(role = %role, identifier, "Login succeeded");
    } else {
        tracing::info!(role = %role, identifier, "Login rejected");
    }
}

fn invalid_credentials(role: Role) -> AppError {
    let message = match role {
        Role::Student => "Invalid Student Number or Password",
        Role::Representative => "Invalid Representative Username or Password",
    };
    AppError::InvalidCredentials(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::models::{Representative, Student};
    use tempfile::TempDir;

    fn store_with_records(dir: &TempDir) -> Store {
        let mut store = Store::open(dir.path().join("data.json"));
        store
            .update(|doc| {
                doc.students.push(Student {
                    name: "Ana Cruz".into(),
                    student_number: "2021-0001".into(),
                    section: "BSCS-3A".into(),
                    password: hash_password("secret"),
                    email: "ana@example.com".into(),
                });
                doc.representatives.push(Representative {
                    department_name: "CS Dept".into(),
                    username: "csrep".into(),
                    password: hash_password("rep-pass"),
                });
            })
            .unwrap();
        store
    }

    #[test]
    fn test_student_login_returns_record() {
        let dir = TempDir::new().unwrap();
        let store = store_with_records(&dir);

        let principal = AuthService::new(&store)
            .authenticate("student", "2021-0001", "secret")
            .unwrap();

        match principal {
            Principal::Student(s) => {
                assert_eq!(s.name, "Ana Cruz");
                assert_eq!(s.password, hash_password("secret"));
            }
            other => panic!("unexpected principal {:?}", other),
        }
    }

    #[test]
    fn test_wrong_password_and_unknown_id_are_indistinguishable() {
        let dir = TempDir::new().unwrap();
        let store = store_with_records(&dir);
        let auth = AuthService::new(&store);

        let wrong_password = auth.authenticate("student", "2021-0001", "nope").unwrap_err();
        let unknown_id = auth.authenticate("student", "2099-9999", "secret").unwrap_err();

        assert_eq!(wrong_password, unknown_id);
        assert!(matches!(wrong_password, AppError::InvalidCredentials(_)));
    }

    #[test]
    fn test_role_token_case_insensitive_identifier_exact() {
        let dir = TempDir::new().unwrap();
        let store = store_with_records(&dir);
        let auth = AuthService::new(&store);

        let principal = auth
            .authenticate("Representative", "csrep", "rep-pass")
            .unwrap();
        assert_eq!(principal.role(), Role::Representative);

        assert!(matches!(
            auth.authenticate("representative", "CSREP", "rep-pass"),
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_roles_do_not_cross_collections() {
        let dir = TempDir::new().unwrap();
        let store = store_with_records(&dir);

        assert!(matches!(
            AuthService::new(&store).authenticate("student", "csrep", "rep-pass"),
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_unknown_role_and_blank_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_with_records(&dir);
        let auth = AuthService::new(&store);

        assert!(matches!(
            auth.authenticate("admin", "csrep", "rep-pass"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.authenticate("student", "", "secret"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.authenticate("student", "2021-0001", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_first_match_wins_for_duplicate_identifiers() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_records(&dir);
        store
            .update(|doc| {
                doc.students.push(Student {
                    name: "Second Ana".into(),
                    student_number: "2021-0001".into(),
                    section: "BSIT-1B".into(),
                    password: hash_password("secret"),
                    email: "other@example.com".into(),
                })
            })
            .unwrap();

        let principal = AuthService::new(&store)
            .authenticate("student", "2021-0001", "secret")
            .unwrap();
        assert!(matches!(principal, Principal::Student(s) if s.name == "Ana Cruz"));
    }
}
