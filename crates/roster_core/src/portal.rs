//! Role-based navigation as an explicit state machine.
//!
//! # Responsibility
//! - Model where a visitor is (home, registration form, confirmation, teacher
//!   login, roster) as a `ViewState` value owned by the caller.
//! - Turn one `Action` into the next state plus the data a front end renders.
//!
//! # Invariants
//! - No navigation or authentication state lives in this module; callers
//!   thread `ViewState` through every request.
//! - `Roster` is only reachable through a successful `Login`.
//! - Leaving the teacher area (`GoHome`/`Logout`) drops authentication.

use crate::auth::TeacherCredentials;
use crate::model::registration::{RegistrationForm, StudentId, StudentRegistration};
use crate::repo::registration_repo::{RegistrationRepository, RepoResult};
use crate::service::clock::Clock;
use crate::service::registration_service::{RegistrationService, SubmitOutcome};
use crate::validation::FormErrors;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

/// Where the visitor currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Home,
    StudentForm,
    /// A registration was just stored; shows its confirmation until the
    /// visitor goes home.
    Registered { student_id: StudentId },
    TeacherLogin,
    /// Authenticated teacher view.
    Roster,
}

/// Something the visitor did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoHome,
    OpenRegistration,
    OpenTeacherLogin,
    Submit(RegistrationForm),
    Login { username: String, password: String },
    Logout,
}

/// What to render for the resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    RegistrationForm { errors: Option<FormErrors> },
    Confirmation(StudentRegistration),
    TeacherLogin { error: Option<&'static str> },
    /// Every registration, newest first.
    Roster(Vec<StudentRegistration>),
}

/// Next state and its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: ViewState,
    pub view: View,
}

impl Step {
    fn new(state: ViewState, view: View) -> Self {
        Self { state, view }
    }
}

/// Request handler shared by front ends.
pub struct Portal<R: RegistrationRepository, C: Clock> {
    service: RegistrationService<R, C>,
    credentials: TeacherCredentials,
}

impl<R: RegistrationRepository, C: Clock> Portal<R, C> {
    pub fn new(service: RegistrationService<R, C>, credentials: TeacherCredentials) -> Self {
        Self {
            service,
            credentials,
        }
    }

    pub fn service(&self) -> &RegistrationService<R, C> {
        &self.service
    }

    /// Applies `action` to `state`.
    ///
    /// Actions that make no sense in the current state (a submit outside the
    /// form, a login outside the login page) leave the state unchanged.
    pub fn handle(&self, state: ViewState, action: Action) -> RepoResult<Step> {
        match (state, action) {
            (_, Action::GoHome) | (_, Action::Logout) => Ok(Step::new(ViewState::Home, View::Home)),
            (ViewState::Registered { .. }, Action::OpenRegistration) => self.render(state),
            (_, Action::OpenRegistration) => self.render(ViewState::StudentForm),
            (ViewState::Roster, Action::OpenTeacherLogin) => self.render(state),
            (_, Action::OpenTeacherLogin) => self.render(ViewState::TeacherLogin),
            (ViewState::StudentForm, Action::Submit(form)) => match self.service.submit(&form)? {
                SubmitOutcome::Registered(record) => Ok(Step::new(
                    ViewState::Registered {
                        student_id: record.id,
                    },
                    View::Confirmation(record),
                )),
                SubmitOutcome::Rejected(errors) => Ok(Step::new(
                    ViewState::StudentForm,
                    View::RegistrationForm {
                        errors: Some(errors),
                    },
                )),
            },
            (ViewState::TeacherLogin, Action::Login { username, password }) => {
                if self.credentials.authenticate(&username, &password) {
                    self.render(ViewState::Roster)
                } else {
                    Ok(Step::new(
                        ViewState::TeacherLogin,
                        View::TeacherLogin {
                            error: Some(INVALID_CREDENTIALS_MESSAGE),
                        },
                    ))
                }
            }
            (state, Action::Submit(_)) | (state, Action::Login { .. }) => self.render(state),
        }
    }

    /// Builds the plain view for `state` without changing it.
    pub fn render(&self, state: ViewState) -> RepoResult<Step> {
        let view = match state {
            ViewState::Home => View::Home,
            ViewState::StudentForm => View::RegistrationForm { errors: None },
            ViewState::Registered { student_id } => {
                View::Confirmation(self.service.get_by_id(student_id)?)
            }
            ViewState::TeacherLogin => View::TeacherLogin { error: None },
            ViewState::Roster => View::Roster(self.service.list_all()?),
        };
        Ok(Step::new(state, view))
    }
}
