//! Department representative record and registration request.

use serde::{Deserialize, Serialize};

/// A department representative as stored in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub department_name: String,
    pub username: String,
    /// Hex SHA-256 digest, never plaintext
    pub password: String,
}

/// Request body for registering a representative.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRepresentativeRequest {
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Representative view returned over the API, without the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeProfile {
    pub department_name: String,
    pub username: String,
}

impl From<&Representative> for RepresentativeProfile {
    fn from(rep: &Representative) -> Self {
        Self {
            department_name: rep.department_name.clone(),
            username: rep.username.clone(),
        }
    }
}
