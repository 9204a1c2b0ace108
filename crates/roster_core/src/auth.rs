//! Teacher login check.
//!
//! One configured username/password pair guards the roster. This is a
//! placeholder trust boundary: plaintext comparison, no hashing, no lockout.
//! A real deployment needs a credential store with hashed secrets.

use log::info;
use serde::Deserialize;

pub const DEFAULT_TEACHER_USERNAME: &str = "teacher";
pub const DEFAULT_TEACHER_PASSWORD: &str = "chauhan123";

/// The single teacher credential pair.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeacherCredentials {
    pub username: String,
    pub password: String,
}

impl TeacherCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// True only when both username and password match exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = self.username == username && self.password == password;
        info!(
            "event=teacher_login module=auth status={}",
            if ok { "ok" } else { "denied" }
        );
        ok
    }
}

impl Default for TeacherCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_TEACHER_USERNAME, DEFAULT_TEACHER_PASSWORD)
    }
}

// Keeps the password out of debug output and logs.
impl std::fmt::Debug for TeacherCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeacherCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
