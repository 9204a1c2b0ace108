//! Registration repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert-one, select-all and select-by-id over `students`.
//! - Keep SQL and column encoding inside the persistence boundary.
//!
//! # Invariants
//! - `id` values come from SQLite `AUTOINCREMENT` and are never reused.
//! - Listing is always `ORDER BY id DESC` (newest registration first).
//! - Read paths reject unknown enum labels instead of masking them.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::registration::{
    CertificateStatus, RegistrationInput, Semester, StudentId, StudentRegistration,
};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    certificate,
    course,
    email,
    father_name,
    university_roll,
    contact,
    parent_contact,
    college,
    college_course,
    semester,
    department,
    dob,
    address,
    registration_date
FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for registration persistence and lookups.
#[derive(Debug)]
pub enum RepoError {
    /// Store unreachable or statement failure.
    Db(DbError),
    NotFound(StudentId),
    InvalidData(String),
    /// Connection was not bootstrapped through `db::open_db*`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "student registration not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted registration data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Append-only repository interface for student registrations.
pub trait RegistrationRepository {
    fn create_registration(
        &self,
        input: &RegistrationInput,
        registered_at: NaiveDateTime,
    ) -> RepoResult<StudentId>;
    fn get_registration(&self, id: StudentId) -> RepoResult<Option<StudentRegistration>>;
    fn list_registrations(&self) -> RepoResult<Vec<StudentRegistration>>;
    fn count_registrations(&self) -> RepoResult<u64>;
}

/// SQLite-backed registration repository.
pub struct SqliteRegistrationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRegistrationRepository<'conn> {
    /// Wraps a connection after checking it carries the current schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is not the
    ///   latest migration.
    /// - `MissingRequiredTable` when `students` is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_students: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'students'
            );",
            [],
            |row| row.get(0),
        )?;
        if !has_students {
            return Err(RepoError::MissingRequiredTable("students"));
        }

        Ok(Self { conn })
    }
}

impl RegistrationRepository for SqliteRegistrationRepository<'_> {
    fn create_registration(
        &self,
        input: &RegistrationInput,
        registered_at: NaiveDateTime,
    ) -> RepoResult<StudentId> {
        self.conn.execute(
            "INSERT INTO students (
                name,
                certificate,
                course,
                email,
                father_name,
                university_roll,
                contact,
                parent_contact,
                college,
                college_course,
                semester,
                department,
                dob,
                address,
                registration_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15);",
            params![
                input.name.as_str(),
                CertificateStatus::NotIssued.label(),
                input.course.as_str(),
                input.email.as_str(),
                input.father_name.as_str(),
                input.university_roll.as_str(),
                input.contact.as_str(),
                input.parent_contact.as_str(),
                input.college.as_str(),
                input.college_course.as_str(),
                input.semester.label(),
                input.department.as_str(),
                input.dob,
                input.address.as_str(),
                registered_at,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_registration(&self, id: StudentId) -> RepoResult<Option<StudentRegistration>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn list_registrations(&self) -> RepoResult<Vec<StudentRegistration>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn count_registrations(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get::<_, i64>(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<StudentRegistration> {
    let certificate_text: String = row.get("certificate")?;
    let certificate = CertificateStatus::from_label(&certificate_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid certificate `{certificate_text}` in students.certificate"
        ))
    })?;

    let semester_text: String = row.get("semester")?;
    let semester = Semester::from_label(&semester_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid semester `{semester_text}` in students.semester"
        ))
    })?;

    Ok(StudentRegistration {
        id: row.get("id")?,
        name: row.get("name")?,
        certificate,
        course: row.get("course")?,
        email: row.get("email")?,
        father_name: row.get("father_name")?,
        university_roll: row.get("university_roll")?,
        contact: row.get("contact")?,
        parent_contact: row.get("parent_contact")?,
        college: row.get("college")?,
        college_course: row.get("college_course")?,
        semester,
        department: row.get("department")?,
        dob: row.get("dob")?,
        address: row.get("address")?,
        registration_date: row.get("registration_date")?,
    })
}
