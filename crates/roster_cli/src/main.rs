//! Command-line front end for the student roster.
//!
//! Each invocation is one request: it builds the `ViewState` the command
//! starts from, hands one `Action` to the core `Portal`, and prints the
//! resulting view.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Command, TeacherArgs};
use clap::Parser;
use roster_core::db::open_db;
use roster_core::{
    init_logging, write_roster_csv, Action, AppConfig, Portal, RegistrationService, RepoError,
    SqliteRegistrationRepository, StudentRegistration, SystemClock, View, ViewState,
};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if let Some(log_dir) = &config.logging.dir {
        init_logging(&config.logging.level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&config.database.path).with_context(|| {
        format!(
            "failed to open database `{}`",
            config.database.path.display()
        )
    })?;
    let repo = SqliteRegistrationRepository::try_new(&conn)?;
    let portal = Portal::new(
        RegistrationService::new(repo, SystemClock),
        config.teacher.clone(),
    );

    match cli.command {
        Command::Register(fields) => {
            let step = portal.handle(ViewState::StudentForm, Action::Submit(fields.into()))?;
            match step.view {
                View::Confirmation(record) => {
                    println!("Registration successful!");
                    print_record(&record);
                    Ok(ExitCode::SUCCESS)
                }
                View::RegistrationForm {
                    errors: Some(errors),
                } => {
                    for message in errors.messages() {
                        eprintln!("error: {message}");
                    }
                    Ok(ExitCode::from(2))
                }
                other => unreachable_view(other),
            }
        }
        Command::Show { id } => match portal.service().get_by_id(id) {
            Ok(record) => {
                print_record(&record);
                Ok(ExitCode::SUCCESS)
            }
            Err(RepoError::NotFound(id)) => {
                eprintln!("error: no registration with id {id}");
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        },
        Command::Roster(teacher) => {
            let Some(records) = teacher_roster(&portal, teacher)? else {
                return Ok(ExitCode::FAILURE);
            };
            if records.is_empty() {
                println!("No students registered yet!");
                return Ok(ExitCode::SUCCESS);
            }
            println!("Total Students: {}", records.len());
            for record in &records {
                println!(
                    "{:>4}  {:<24} {:<28} {:<6} {:<12} {}",
                    record.id,
                    record.name,
                    record.email,
                    record.semester.label(),
                    record.contact,
                    record.certificate
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { teacher, out } => {
            let Some(records) = teacher_roster(&portal, teacher)? else {
                return Ok(ExitCode::FAILURE);
            };
            let dir = out.unwrap_or_else(|| config.export.dir.clone());
            let path = write_roster_csv(&dir, &records, chrono::Local::now().naive_local())?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs in and returns the roster, or `None` after printing the login error.
fn teacher_roster(
    portal: &Portal<SqliteRegistrationRepository<'_>, SystemClock>,
    teacher: TeacherArgs,
) -> Result<Option<Vec<StudentRegistration>>> {
    let step = portal.handle(
        ViewState::TeacherLogin,
        Action::Login {
            username: teacher.username,
            password: teacher.password,
        },
    )?;
    match step.view {
        View::Roster(records) => Ok(Some(records)),
        View::TeacherLogin { error } => {
            eprintln!("error: {}", error.unwrap_or("login failed"));
            Ok(None)
        }
        other => unreachable_view(other),
    }
}

fn unreachable_view<T>(view: View) -> Result<T> {
    Err(anyhow::anyhow!("unexpected view for this command: {view:?}"))
}

fn print_record(record: &StudentRegistration) {
    let rows = [
        ("S.No", record.id.to_string()),
        ("Name", record.name.clone()),
        ("Certificate", record.certificate.to_string()),
        ("Course", record.course.clone()),
        ("Email", record.email.clone()),
        ("Father's Name", record.father_name.clone()),
        ("University Roll", record.university_roll.clone()),
        ("Contact", record.contact.clone()),
        ("Parent's Contact", record.parent_contact.clone()),
        ("College", record.college.clone()),
        ("College Course", record.college_course.clone()),
        ("Semester", record.semester.to_string()),
        ("Department", record.department.clone()),
        ("DOB", record.dob.to_string()),
        ("Address", record.address.clone()),
        ("Registered", record.registration_date.to_string()),
    ];
    for (label, value) in rows {
        println!("{label:>16}: {value}");
    }
}
