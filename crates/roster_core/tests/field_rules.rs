use chrono::{Days, Local, Months, NaiveDate};
use roster_core::{is_valid_age, is_valid_email, is_valid_phone};

fn years_ago(today: NaiveDate, years: u32) -> NaiveDate {
    today.checked_sub_months(Months::new(years * 12)).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn phone_examples() {
    assert!(is_valid_phone("9876543210"));
    assert!(!is_valid_phone("98765"));
    assert!(!is_valid_phone("98765432a0"));
}

#[test]
fn email_examples() {
    assert!(is_valid_email("a.b+c@sub.domain.com"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b"));
}

#[test]
fn age_boundaries_against_system_clock() {
    let today = Local::now().date_naive();
    let fifteen = years_ago(today, 15);

    assert!(is_valid_age(&iso(fifteen)));
    assert!(!is_valid_age(&iso(
        fifteen.checked_add_days(Days::new(1)).unwrap()
    )));
    assert!(is_valid_age(&iso(years_ago(today, 100))));
    assert!(!is_valid_age(&iso(years_ago(today, 101))));
    assert!(!is_valid_age("not-a-date"));
}
