//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use roster_core::RegistrationForm;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Student registration and teacher roster")]
pub struct Cli {
    /// TOML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a student registration
    Register(RegisterArgs),
    /// Show one registration by id
    Show {
        /// Registration id (S.No)
        id: i64,
    },
    /// List every registration, newest first (teacher only)
    Roster(TeacherArgs),
    /// Write the roster to a timestamped CSV file (teacher only)
    Export {
        #[command(flatten)]
        teacher: TeacherArgs,
        /// Output directory (overrides `export.dir`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct TeacherArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub password: String,
}

/// Registration fields. Values are passed through unchecked; the core
/// validates them and reports every problem at once.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub course: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub father_name: String,
    /// University roll number
    #[arg(long = "roll", default_value = "")]
    pub university_roll: String,
    /// 10-digit mobile number
    #[arg(long, default_value = "")]
    pub contact: String,
    /// Parent's 10-digit mobile number
    #[arg(long, default_value = "")]
    pub parent_contact: String,
    #[arg(long, default_value = "")]
    pub college: String,
    #[arg(long, default_value = "")]
    pub college_course: String,
    /// One of 1st..8th
    #[arg(long, default_value = roster_core::SEMESTER_PLACEHOLDER)]
    pub semester: String,
    #[arg(long, default_value = "")]
    pub department: String,
    /// Date of birth as YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub dob: String,
    #[arg(long, default_value = "")]
    pub address: String,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name,
            course: args.course,
            email: args.email,
            father_name: args.father_name,
            university_roll: args.university_roll,
            contact: args.contact,
            parent_contact: args.parent_contact,
            college: args.college,
            college_course: args.college_course,
            semester: args.semester,
            department: args.department,
            dob: args.dob,
            address: args.address,
        }
    }
}
