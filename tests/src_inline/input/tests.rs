use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{LoadError, load_table};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

const HEADER: &str =
    "team_name,teammate,team_score,driver_score,combo_score,team_image_url,driver_image_url";

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("gridfit_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_csv(contents: &str) -> PathBuf {
    let path = make_temp_dir().join("scores.csv");
    let mut f = BufWriter::new(File::create(&path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    path
}

#[test]
fn test_load_ok() {
    let path = write_csv(&format!(
        "{HEADER}\n\
         red bull,liam lawson,0.9,0.8,0.85,https://img/rb.jpg,https://img/ll.jpg\n\
         mercedes,george russell,0.7,0.75,0.725,https://img/me.jpg,https://img/gr.jpg\n"
    ));
    let table = load_table(&path).unwrap();
    assert_eq!(table.len(), 2);

    let first = &table.records()[0];
    assert_eq!(first.team_name, "red bull");
    assert_eq!(first.teammate, "liam lawson");
    assert_eq!(first.team_score, 0.9);
    assert_eq!(first.driver_score, 0.8);
    assert_eq!(first.combo_score, 0.85);
    assert_eq!(first.team_image_url, "https://img/rb.jpg");
    assert_eq!(first.driver_image_url, "https://img/ll.jpg");

    assert_eq!(table.records()[1].team_name, "mercedes");
}

#[test]
fn test_load_trims_whitespace() {
    let path = write_csv(&format!(
        "{HEADER}\n red bull , liam lawson , 0.9 ,0.8,0.85,u1,u2\n"
    ));
    let table = load_table(&path).unwrap();
    assert_eq!(table.records()[0].team_name, "red bull");
    assert_eq!(table.records()[0].teammate, "liam lawson");
    assert_eq!(table.records()[0].team_score, 0.9);
}

#[test]
fn test_load_tolerates_extra_column() {
    let path = write_csv(&format!(
        "{HEADER},season\nred bull,liam lawson,0.9,0.8,0.85,u1,u2,2027\n"
    ));
    assert_eq!(load_table(&path).unwrap().len(), 1);
}

#[test]
fn test_missing_column_fails() {
    let path = write_csv(
        "team_name,teammate,team_score,driver_score,team_image_url,driver_image_url\n\
         red bull,liam lawson,0.9,0.8,u1,u2\n",
    );
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("combo_score")));
}

#[test]
fn test_non_numeric_score_fails() {
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,fast,0.8,0.85,u1,u2\n"));
    match load_table(&path).unwrap_err() {
        LoadError::BadScore {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, "team_score");
            assert_eq!(value, "fast");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_nan_score_fails() {
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,0.9,NaN,0.85,u1,u2\n"));
    assert!(matches!(
        load_table(&path).unwrap_err(),
        LoadError::BadScore {
            column: "driver_score",
            ..
        }
    ));
}

#[test]
fn test_infinite_score_fails() {
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,0.9,0.8,inf,u1,u2\n"));
    assert!(matches!(
        load_table(&path).unwrap_err(),
        LoadError::BadScore {
            column: "combo_score",
            ..
        }
    ));
}

#[test]
fn test_empty_team_name_fails() {
    let path = write_csv(&format!("{HEADER}\n,liam lawson,0.9,0.8,0.85,u1,u2\n"));
    assert!(matches!(
        load_table(&path).unwrap_err(),
        LoadError::EmptyField {
            line: 2,
            column: "team_name",
        }
    ));
}

#[test]
fn test_empty_score_fails() {
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,0.9,,0.85,u1,u2\n"));
    assert!(matches!(
        load_table(&path).unwrap_err(),
        LoadError::EmptyField {
            line: 2,
            column: "driver_score",
        }
    ));
}

#[test]
fn test_duplicate_pair_fails() {
    let path = write_csv(&format!(
        "{HEADER}\n\
         red bull,liam lawson,0.9,0.8,0.85,u1,u2\n\
         red bull,liam lawson,0.7,0.7,0.7,u1,u2\n"
    ));
    match load_table(&path).unwrap_err() {
        LoadError::DuplicatePair {
            line,
            team,
            teammate,
        } => {
            assert_eq!(line, 3);
            assert_eq!(team, "red bull");
            assert_eq!(teammate, "liam lawson");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_header_only_is_empty_table() {
    let path = write_csv(&format!("{HEADER}\n"));
    assert!(matches!(load_table(&path).unwrap_err(), LoadError::EmptyTable));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = make_temp_dir().join("absent.csv");
    assert!(matches!(load_table(&path).unwrap_err(), LoadError::Io { .. }));
}

#[test]
fn test_ragged_row_is_csv_error() {
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,0.9\n"));
    assert!(matches!(load_table(&path).unwrap_err(), LoadError::Csv { .. }));
}

#[test]
fn test_out_of_range_score_still_loads() {
    // [0, 1] is convention only; out-of-range values warn but load.
    let path = write_csv(&format!("{HEADER}\nred bull,liam lawson,1.5,0.8,0.85,u1,u2\n"));
    let table = load_table(&path).unwrap();
    assert_eq!(table.records()[0].team_score, 1.5);
}
