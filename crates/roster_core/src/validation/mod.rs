//! Registration form validation.
//!
//! # Responsibility
//! - Provide side-effect-free field predicates (`field`).
//! - Check a whole `RegistrationForm` in one pass and report every violation.
//!
//! # Invariants
//! - Validation never stops at the first failure; violations come back in
//!   form order so a front end can list them all.
//! - A form that passes validation always yields a fully typed
//!   `RegistrationInput`; nothing downstream re-parses strings.

pub mod field;

use crate::model::registration::{RegistrationForm, RegistrationInput, Semester};
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use field::{
    age_on, is_blank, is_valid_age, is_valid_age_on, is_valid_email, is_valid_phone, parse_dob,
};

/// Form fields a violation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Course,
    Email,
    FatherName,
    UniversityRoll,
    Contact,
    ParentContact,
    College,
    CollegeCourse,
    Semester,
    Department,
    Dob,
    Address,
}

impl FormField {
    /// Message shown to the registrant when this field fails.
    pub fn message(self) -> &'static str {
        match self {
            FormField::Name => "Name is required",
            FormField::Course => "Course is required",
            FormField::Email => "Invalid email format",
            FormField::FatherName => "Father's name is required",
            FormField::UniversityRoll => "University roll number is required",
            FormField::Contact => "Contact number must be 10 digits",
            FormField::ParentContact => "Parent's contact must be 10 digits",
            FormField::College => "College name is required",
            FormField::CollegeCourse => "College course is required",
            FormField::Semester => "Please select semester",
            FormField::Department => "Department is required",
            FormField::Dob => "Invalid age (must be between 15-100 years)",
            FormField::Address => "Address is required",
        }
    }
}

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldViolation {
    fn of(field: FormField) -> Self {
        Self {
            field,
            message: field.message(),
        }
    }
}

/// Every violation found in one form, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    violations: Vec<FieldViolation>,
}

impl FormErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.violations.iter().map(|violation| violation.field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.fields().any(|candidate| candidate == field)
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|violation| violation.message)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self.messages().collect::<Vec<_>>().join("; ");
        write!(f, "invalid registration: {joined}")
    }
}

impl Error for FormErrors {}

/// Validates `form` with `today` as the reference date for the age rule.
///
/// Returns the typed input when every rule passes, otherwise all violations.
pub fn validate_form(
    form: &RegistrationForm,
    today: NaiveDate,
) -> Result<RegistrationInput, FormErrors> {
    let mut violations = Vec::new();
    let mut require = |field: FormField, ok: bool| {
        if !ok {
            violations.push(FieldViolation::of(field));
        }
    };

    require(FormField::Name, !is_blank(&form.name));
    require(FormField::Course, !is_blank(&form.course));
    require(FormField::Email, is_valid_email(&form.email));
    require(FormField::FatherName, !is_blank(&form.father_name));
    require(FormField::UniversityRoll, !is_blank(&form.university_roll));
    require(FormField::Contact, is_valid_phone(&form.contact));
    require(FormField::ParentContact, is_valid_phone(&form.parent_contact));
    require(FormField::College, !is_blank(&form.college));
    require(FormField::CollegeCourse, !is_blank(&form.college_course));
    let semester = Semester::from_label(&form.semester);
    require(FormField::Semester, semester.is_some());
    require(FormField::Department, !is_blank(&form.department));
    let dob = parse_dob(&form.dob).filter(|_| is_valid_age_on(&form.dob, today));
    require(FormField::Dob, dob.is_some());
    require(FormField::Address, !is_blank(&form.address));

    match (semester, dob) {
        (Some(semester), Some(dob)) if violations.is_empty() => Ok(RegistrationInput {
            name: form.name.clone(),
            course: form.course.clone(),
            email: form.email.clone(),
            father_name: form.father_name.clone(),
            university_roll: form.university_roll.clone(),
            contact: form.contact.clone(),
            parent_contact: form.parent_contact.clone(),
            college: form.college.clone(),
            college_course: form.college_course.clone(),
            semester,
            department: form.department.clone(),
            dob,
            address: form.address.clone(),
        }),
        _ => Err(FormErrors { violations }),
    }
}
