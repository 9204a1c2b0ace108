use chrono::{NaiveDate, NaiveDateTime};
use roster_core::db::open_db_in_memory;
use roster_core::{
    roster_csv, write_roster_csv, FixedClock, RegistrationForm, RegistrationService,
    SqliteRegistrationRepository, SubmitOutcome, ROSTER_COLUMNS,
};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn form(name: &str, address: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        course: "Robotics".to_string(),
        email: "dev@example.com".to_string(),
        father_name: "Anil".to_string(),
        university_roll: "R-7".to_string(),
        contact: "0011223344".to_string(),
        parent_contact: "5566778899".to_string(),
        college: "Tech Campus".to_string(),
        college_course: "B.E. Mechanical".to_string(),
        semester: "2nd".to_string(),
        department: "Mechanical".to_string(),
        dob: "2006-01-09".to_string(),
        address: address.to_string(),
    }
}

#[test]
fn empty_roster_exports_header_only() {
    let csv = roster_csv(&[]);
    assert_eq!(csv.lines().count(), 1);
    assert_eq!(csv.trim_end(), ROSTER_COLUMNS.join(","));
}

#[test]
fn roster_exports_one_line_per_record_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRegistrationRepository::try_new(&conn).unwrap();
    let service = RegistrationService::new(repo, FixedClock::new(at(7, 45, 3)));
    for name in ["Dev", "Isha", "Kabir"] {
        let outcome = service.submit(&form(name, "Near the old fort")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Registered(_)));
    }

    let csv = roster_csv(&service.list_all().unwrap());
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "id,name,certificate,course,email,father_name,university_roll,contact,parent_contact,\
         college,college_course,semester,department,dob,address,registration_date"
    );
    assert_eq!(
        lines[1],
        "3,Kabir,Not Issued,Robotics,dev@example.com,Anil,R-7,0011223344,5566778899,\
         Tech Campus,B.E. Mechanical,2nd,Mechanical,2006-01-09,Near the old fort,\
         2026-10-16 07:45:03"
    );
    assert!(lines[3].starts_with("1,Dev,"));
}

#[test]
fn addresses_with_commas_stay_in_one_column() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRegistrationRepository::try_new(&conn).unwrap();
    let service = RegistrationService::new(repo, FixedClock::new(at(7, 45, 3)));
    service
        .submit(&form("Zoya", "Lane 4, Block \"C\", Delhi"))
        .unwrap();

    let csv = roster_csv(&service.list_all().unwrap());
    assert!(csv.contains(",\"Lane 4, Block \"\"C\"\", Delhi\","));
}

#[test]
fn export_writes_timestamped_file() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRegistrationRepository::try_new(&conn).unwrap();
    let service = RegistrationService::new(repo, FixedClock::new(at(7, 45, 3)));
    service.submit(&form("Om", "Ward 9")).unwrap();

    let records = service.list_all().unwrap();
    let path = write_roster_csv(dir.path(), &records, at(18, 2, 59)).unwrap();

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("students_20261016_180259.csv")
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, roster_csv(&records));
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = write_roster_csv(&missing, &[], at(0, 0, 0)).unwrap_err();
    assert!(err.to_string().contains("students_20261016_000000.csv"));
}
