//! Registration use-case service.
//!
//! # Responsibility
//! - Validate raw forms and persist only the ones that pass.
//! - Expose roster listing and single-record lookup for front ends.
//!
//! # Invariants
//! - A rejected form never reaches the repository.
//! - `submit` either stores exactly one record or stores nothing.
//! - Service layer remains storage-agnostic.

use crate::model::registration::{
    RegistrationForm, RegistrationInput, StudentId, StudentRegistration,
};
use crate::repo::registration_repo::{RegistrationRepository, RepoError, RepoResult};
use crate::service::clock::Clock;
use crate::validation::{validate_form, FormErrors};
use log::{error, info};

/// Result of submitting a registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored record as read back from the repository.
    Registered(StudentRegistration),
    /// Form failed validation; nothing was written.
    Rejected(FormErrors),
}

/// Use-case service for student registrations.
pub struct RegistrationService<R: RegistrationRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: RegistrationRepository, C: Clock> RegistrationService<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Validates `form` and stores it when every field passes.
    ///
    /// Validation failures come back as `Ok(SubmitOutcome::Rejected(..))`;
    /// only storage failures are errors.
    pub fn submit(&self, form: &RegistrationForm) -> RepoResult<SubmitOutcome> {
        let input = match validate_form(form, self.clock.today()) {
            Ok(input) => input,
            Err(errors) => {
                info!(
                    "event=student_submit module=service status=rejected violations={}",
                    errors.len()
                );
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let id = self.register(&input)?;
        let stored = self.get_by_id(id)?;
        Ok(SubmitOutcome::Registered(stored))
    }

    /// Stores an already validated payload and returns its new id.
    pub fn register(&self, input: &RegistrationInput) -> RepoResult<StudentId> {
        match self.repo.create_registration(input, self.clock.now()) {
            Ok(id) => {
                info!("event=student_create module=service status=ok student_id={id}");
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=student_create module=service status=error error_code=insert_failed error={err}"
                );
                Err(err)
            }
        }
    }

    /// Every registration, newest first.
    pub fn list_all(&self) -> RepoResult<Vec<StudentRegistration>> {
        self.repo.list_registrations()
    }

    /// One registration; a miss is `RepoError::NotFound`.
    pub fn get_by_id(&self, id: StudentId) -> RepoResult<StudentRegistration> {
        self.repo
            .get_registration(id)?
            .ok_or(RepoError::NotFound(id))
    }

    pub fn roster_size(&self) -> RepoResult<u64> {
        self.repo.count_registrations()
    }
}
