//! Student registration domain model.
//!
//! # Responsibility
//! - Define the stored `StudentRegistration` record.
//! - Define `RegistrationForm` (raw strings from a front end) and
//!   `RegistrationInput` (validated, typed payload accepted by the store).
//! - Provide closed enums for semester and certificate state.
//!
//! # Invariants
//! - `certificate` is never supplied by the registrant; new rows start as
//!   `CertificateStatus::NotIssued`.
//! - `registration_date` is assigned by the clock at creation, in UTC.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned row identifier. Starts at 1 and only grows.
pub type StudentId = i64;

/// Placeholder label shown by form front ends before a semester is chosen.
pub const SEMESTER_PLACEHOLDER: &str = "Select";

/// Academic semester, `1st` through `8th`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
    #[serde(rename = "6th")]
    Sixth,
    #[serde(rename = "7th")]
    Seventh,
    #[serde(rename = "8th")]
    Eighth,
}

impl Semester {
    pub const ALL: [Semester; 8] = [
        Semester::First,
        Semester::Second,
        Semester::Third,
        Semester::Fourth,
        Semester::Fifth,
        Semester::Sixth,
        Semester::Seventh,
        Semester::Eighth,
    ];

    /// Display and storage label, e.g. `"3rd"`.
    pub fn label(self) -> &'static str {
        match self {
            Semester::First => "1st",
            Semester::Second => "2nd",
            Semester::Third => "3rd",
            Semester::Fourth => "4th",
            Semester::Fifth => "5th",
            Semester::Sixth => "6th",
            Semester::Seventh => "7th",
            Semester::Eighth => "8th",
        }
    }

    /// Parses a storage label. The form placeholder is not a semester.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|semester| semester.label() == value)
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| format!("unknown semester `{value}`"))
    }
}

/// Certificate lifecycle for a registration.
///
/// Only the initial state exists today; nothing in the system issues
/// certificates yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateStatus {
    #[serde(rename = "Not Issued")]
    NotIssued,
}

impl CertificateStatus {
    pub fn label(self) -> &'static str {
        match self {
            CertificateStatus::NotIssued => "Not Issued",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Not Issued" => Some(CertificateStatus::NotIssued),
            _ => None,
        }
    }
}

impl Display for CertificateStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw registration payload as typed into a form.
///
/// Every field is free text; nothing here has been checked. `semester` may
/// hold [`SEMESTER_PLACEHOLDER`] and `dob` is expected as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    pub course: String,
    pub email: String,
    pub father_name: String,
    pub university_roll: String,
    pub contact: String,
    pub parent_contact: String,
    pub college: String,
    pub college_course: String,
    pub semester: String,
    pub department: String,
    pub dob: String,
    pub address: String,
}

/// Validated registration payload accepted by the store.
///
/// Produced by [`crate::validation::validate_form`]. Text fields keep the
/// exact submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub course: String,
    pub email: String,
    pub father_name: String,
    pub university_roll: String,
    pub contact: String,
    pub parent_contact: String,
    pub college: String,
    pub college_course: String,
    pub semester: Semester,
    pub department: String,
    pub dob: NaiveDate,
    pub address: String,
}

/// One stored row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub id: StudentId,
    pub name: String,
    pub certificate: CertificateStatus,
    pub course: String,
    pub email: String,
    pub father_name: String,
    pub university_roll: String,
    pub contact: String,
    pub parent_contact: String,
    pub college: String,
    pub college_course: String,
    pub semester: Semester,
    pub department: String,
    pub dob: NaiveDate,
    pub address: String,
    /// UTC creation timestamp.
    pub registration_date: NaiveDateTime,
}

impl StudentRegistration {
    /// Builds the record a fresh insert of `input` produces.
    pub fn from_input(id: StudentId, input: RegistrationInput, registered_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: input.name,
            certificate: CertificateStatus::NotIssued,
            course: input.course,
            email: input.email,
            father_name: input.father_name,
            university_roll: input.university_roll,
            contact: input.contact,
            parent_contact: input.parent_contact,
            college: input.college,
            college_course: input.college_course,
            semester: input.semester,
            department: input.department,
            dob: input.dob,
            address: input.address,
            registration_date: registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CertificateStatus, RegistrationInput, Semester, StudentRegistration, SEMESTER_PLACEHOLDER,
    };
    use chrono::NaiveDate;

    #[test]
    fn semester_labels_round_trip() {
        for semester in Semester::ALL {
            assert_eq!(Semester::from_label(semester.label()), Some(semester));
        }
        assert_eq!("4th".parse::<Semester>(), Ok(Semester::Fourth));
    }

    #[test]
    fn semester_rejects_placeholder_and_unknown_labels() {
        assert_eq!(Semester::from_label(SEMESTER_PLACEHOLDER), None);
        assert_eq!(Semester::from_label("9th"), None);
        assert_eq!(Semester::from_label(" 1st"), None);
    }

    #[test]
    fn certificate_label_is_not_issued() {
        assert_eq!(CertificateStatus::NotIssued.to_string(), "Not Issued");
        assert_eq!(
            CertificateStatus::from_label("Not Issued"),
            Some(CertificateStatus::NotIssued)
        );
        assert_eq!(CertificateStatus::from_label("Issued"), None);
    }

    #[test]
    fn serialization_uses_storage_labels() {
        let input = RegistrationInput {
            name: "Asha".to_string(),
            course: "AI".to_string(),
            email: "asha@example.com".to_string(),
            father_name: "Ravi".to_string(),
            university_roll: "R-1".to_string(),
            contact: "0123456789".to_string(),
            parent_contact: "9876543210".to_string(),
            college: "City College".to_string(),
            college_course: "BSc".to_string(),
            semester: Semester::Third,
            department: "CS".to_string(),
            dob: NaiveDate::from_ymd_opt(2004, 8, 21).unwrap(),
            address: "Pune".to_string(),
        };
        let registered_at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let record = StudentRegistration::from_input(7, input, registered_at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["certificate"], "Not Issued");
        assert_eq!(json["semester"], "3rd");
        assert_eq!(json["dob"], "2004-08-21");
        assert_eq!(json["contact"], "0123456789");

        let decoded: StudentRegistration = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
