use serde::{Deserialize, Serialize};
use std::fmt;

/// Role asserted by a token.
///
/// Tokens minted by the legacy issuer carry the campus role names, which are
/// still accepted on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(alias = "Dosen Wali")]
    LecturerAdvisor,
    #[serde(alias = "Mahasiswa")]
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::LecturerAdvisor => "LecturerAdvisor",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
