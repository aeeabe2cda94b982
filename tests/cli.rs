use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// 2017-06-23 Friday, 2017-01-02 Monday, 2017-06-26 Monday
const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St,Damen Ave,Subscriber,Male,1992.0
2,2017-01-02 08:27:49,2017-01-02 08:34:45,416,May St,Wood St,Customer,,
3,2017-06-26 15:19:03,2017-06-26 15:45:53,3725,Wood St,Damen Ave,Subscriber,Female,1980.0
";

const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
    fs::write(dir.path().join("washington.csv"), WASHINGTON).unwrap();
    dir
}

fn bikeshare(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bikeshare").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn test_report_unfiltered() {
    let dir = data_dir();
    bikeshare(&dir)
        .args(["report", "--city", "chicago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 trips"))
        .stdout(predicate::str::contains("Most common Month: June"))
        .stdout(predicate::str::contains("Most common Start Station: Wood St"))
        .stdout(predicate::str::contains("Most common Trip: Wood St to Damen Ave"))
        .stdout(predicate::str::contains("Total Travel Time in seconds: 4462.00"))
        .stdout(predicate::str::contains("Earliest Year Of Birth: 1980"));
}

#[test]
fn test_report_with_month_and_day() {
    let dir = data_dir();
    bikeshare(&dir)
        .args(["report", "--city", "chicago", "--month", "june", "--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(June, Monday): 1 of 3 trips"))
        .stdout(predicate::str::contains("Total Travel Time in h:m:s: 1:02:05"));
}

#[test]
fn test_report_rejects_month_not_in_data() {
    let dir = data_dir();
    bikeshare(&dir)
        .args(["report", "--city", "chicago", "--month", "march"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available months: June, January"));
}

#[test]
fn test_report_without_demographics() {
    let dir = data_dir();
    bikeshare(&dir)
        .args(["report", "--city", "washington"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry! No available data about gender"))
        .stdout(predicate::str::contains("Sorry! No available data about Year Of Birth"))
        .stdout(predicate::str::contains("Earliest Year Of Birth").not());
}

#[test]
fn test_report_missing_city_file() {
    let dir = data_dir();
    bikeshare(&dir)
        .args(["report", "--city", "new york"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("new_york_city.csv"));
}

#[test]
fn test_cities_lists_file_status() {
    let dir = data_dir();
    bikeshare(&dir)
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("chicago.csv (found)"))
        .stdout(predicate::str::contains("new_york_city.csv (missing)"));
}

#[test]
fn test_missing_data_dir() {
    Command::cargo_bin("bikeshare")
        .unwrap()
        .args(["--data-dir", "/definitely/not/here", "cities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn test_interactive_session() {
    let dir = data_dir();
    bikeshare(&dir)
        .write_stdin("atlantis\nchicago\nday\nsunday\nmonday\nyes\nabc\n1\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("please choose one from the provided cities"))
        .stdout(predicate::str::contains("Invalid! Please try again."))
        .stdout(predicate::str::contains("May St"))
        .stdout(predicate::str::contains("Calculating User Stats..."))
        .stdout(predicate::str::contains("Would you like to restart?"));
}

#[test]
fn test_interactive_restart_with_other_city() {
    let dir = data_dir();
    bikeshare(&dir)
        .arg("explore")
        .write_stdin("chicago\nnone\nno\nyes\nwashington\nnone\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most common Start Station: 14th & Belmont St NW"))
        .stdout(predicate::str::contains("Sorry! No available data about gender"));
}

#[test]
fn test_interactive_session_logs_nothing_at_default_level() {
    let dir = data_dir();
    bikeshare(&dir)
        .env_remove("RUST_LOG")
        .write_stdin("chicago\nmonth\njune\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculating User Stats..."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_interactive_ends_cleanly_on_closed_input() {
    let dir = data_dir();
    bikeshare(&dir)
        .write_stdin("chicago\n")
        .assert()
        .success();
}
