//! Roster CSV export.
//!
//! # Responsibility
//! - Serialize registrations as CSV with a header row of column names.
//! - Name export files after the moment they were produced.
//!
//! # Invariants
//! - Output always starts with the header line, even for an empty roster.
//! - Each record produces exactly one line; embedded line breaks are quoted.

use crate::model::registration::StudentRegistration;
use chrono::NaiveDateTime;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ROSTER_COLUMNS: [&str; 16] = [
    "id",
    "name",
    "certificate",
    "course",
    "email",
    "father_name",
    "university_roll",
    "contact",
    "parent_contact",
    "college",
    "college_course",
    "semester",
    "department",
    "dob",
    "address",
    "registration_date",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write export `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Renders `records` as CSV, one `\n`-terminated line per record after the header.
pub fn roster_csv(records: &[StudentRegistration]) -> String {
    let mut out = ROSTER_COLUMNS.join(",");
    out.push('\n');

    for record in records {
        let fields = [
            record.id.to_string(),
            escape_field(&record.name),
            escape_field(record.certificate.label()),
            escape_field(&record.course),
            escape_field(&record.email),
            escape_field(&record.father_name),
            escape_field(&record.university_roll),
            escape_field(&record.contact),
            escape_field(&record.parent_contact),
            escape_field(&record.college),
            escape_field(&record.college_course),
            escape_field(record.semester.label()),
            escape_field(&record.department),
            record.dob.format("%Y-%m-%d").to_string(),
            escape_field(&record.address),
            record.registration_date.format(TIMESTAMP_FORMAT).to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// `students_YYYYMMDD_HHMMSS.csv` for the given instant.
pub fn export_file_name(at: NaiveDateTime) -> String {
    format!("students_{}.csv", at.format(FILE_STAMP_FORMAT))
}

/// Writes the roster CSV into `dir` and returns the created file path.
pub fn write_roster_csv(
    dir: &Path,
    records: &[StudentRegistration],
    at: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(at));
    match std::fs::write(&path, roster_csv(records)) {
        Ok(()) => {
            info!(
                "event=roster_export module=export status=ok rows={} path={}",
                records.len(),
                path.display()
            );
            Ok(path)
        }
        Err(source) => {
            error!(
                "event=roster_export module=export status=error path={} error={}",
                path.display(),
                source
            );
            Err(ExportError::Io { path, source })
        }
    }
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_field, export_file_name};
    use chrono::NaiveDate;

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(escape_field("B.Tech CSE"), "B.Tech CSE");
    }

    #[test]
    fn delimiters_and_quotes_are_quoted() {
        assert_eq!(escape_field("12 Lake Road, Pune"), "\"12 Lake Road, Pune\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn file_name_embeds_timestamp() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(export_file_name(at), "students_20261016_090507.csv");
    }
}
