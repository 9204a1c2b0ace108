//! Core domain logic for the student roster.
//! This crate is the single source of truth for registration invariants.

pub mod auth;
pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod portal;
pub mod repo;
pub mod service;
pub mod validation;

pub use auth::TeacherCredentials;
pub use config::{AppConfig, ConfigError};
pub use export::{export_file_name, roster_csv, write_roster_csv, ExportError, ROSTER_COLUMNS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::registration::{
    CertificateStatus, RegistrationForm, RegistrationInput, Semester, StudentId,
    StudentRegistration, SEMESTER_PLACEHOLDER,
};
pub use portal::{Action, Portal, Step, View, ViewState};
pub use repo::registration_repo::{
    RegistrationRepository, RepoError, RepoResult, SqliteRegistrationRepository,
};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::registration_service::{RegistrationService, SubmitOutcome};
pub use validation::{
    is_valid_age, is_valid_email, is_valid_phone, validate_form, FieldViolation, FormErrors,
    FormField,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
