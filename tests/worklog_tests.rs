use pompom::core::clock::InstantClock;
use pompom::core::countdown::Countdown;
use pompom::core::worklog::{NullWorkLog, SqliteWorkLog, WorkLog};
use pompom::db::pool::DbPool;
use pompom::db::queries::{find_pomodoro, load_pomodoros};
use std::path::Path;

fn open(path: &Path) -> DbPool {
    DbPool::new(path).expect("open db")
}

#[test]
fn start_creates_directory_store_and_record() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("dir").join("log.sqlite");
    let mut log = SqliteWorkLog::new(&path.to_string_lossy());

    let c = Countdown::new(1500, Some("write docs".into()), InstantClock);
    log.start(&c).unwrap();

    assert!(path.exists());
    let id = log.current_id().expect("id assigned");
    let rec = find_pomodoro(&open(&path).conn, id).unwrap().expect("row");
    assert_eq!(rec.message.as_deref(), Some("write docs"));
    assert!(!rec.finished_early);
}

#[test]
fn start_then_finish_early_flags_the_record() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("log.sqlite");
    let mut log = SqliteWorkLog::new(&path.to_string_lossy());

    let c = Countdown::new(10, None, InstantClock);
    log.start(&c).unwrap();
    log.finish_early().unwrap();

    let rec = find_pomodoro(&open(&path).conn, log.current_id().unwrap())
        .unwrap()
        .unwrap();
    assert!(rec.finished_early);
    assert_eq!(rec.message, None);
}

#[test]
fn finish_early_only_touches_the_latest_session() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("log.sqlite");
    let mut log = SqliteWorkLog::new(&path.to_string_lossy());

    log.start(&Countdown::new(10, Some("first".into()), InstantClock))
        .unwrap();
    log.start(&Countdown::new(10, Some("second".into()), InstantClock))
        .unwrap();
    log.finish_early().unwrap();
    // calling it again is harmless
    log.finish_early().unwrap();

    let records = load_pomodoros(&open(&path).conn, None, None).unwrap();
    assert_eq!(records.len(), 2);
    // newest first
    assert_eq!(records[0].message.as_deref(), Some("second"));
    assert!(records[0].finished_early);
    assert_eq!(records[1].message.as_deref(), Some("first"));
    assert!(!records[1].finished_early);
}

#[test]
fn finish_early_without_start_is_a_no_op() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("log.sqlite");
    let mut log = SqliteWorkLog::new(&path.to_string_lossy());

    log.finish_early().unwrap();

    assert!(log.current_id().is_none());
    assert!(!path.exists());
}

#[test]
fn ensure_initialized_is_idempotent_and_reopens_existing_store() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("log.sqlite");

    {
        let mut log = SqliteWorkLog::new(&path.to_string_lossy());
        log.ensure_initialized().unwrap();
        log.ensure_initialized().unwrap();
        log.start(&Countdown::new(5, None, InstantClock)).unwrap();
    }

    let mut again = SqliteWorkLog::new(&path.to_string_lossy());
    again.start(&Countdown::new(5, None, InstantClock)).unwrap();

    let records = load_pomodoros(&open(&path).conn, None, None).unwrap();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn unreachable_store_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let path = blocker.join("log.sqlite");

    let mut log = SqliteWorkLog::new(&path.to_string_lossy());
    assert!(log.ensure_initialized().is_err());
    assert!(log.start(&Countdown::new(5, None, InstantClock)).is_err());
}

#[test]
fn load_respects_limit() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("log.sqlite");
    let mut log = SqliteWorkLog::new(&path.to_string_lossy());
    for i in 0..5 {
        log.start(&Countdown::new(5, Some(format!("s{i}")), InstantClock))
            .unwrap();
    }

    let records = load_pomodoros(&open(&path).conn, Some(2), None).unwrap();
    let messages: Vec<_> = records.iter().filter_map(|r| r.message.clone()).collect();
    assert_eq!(messages, vec!["s4", "s3"]);
}

#[test]
fn null_work_log_never_fails_and_never_writes() {
    let tmp = tempfile::tempdir().unwrap();
    let mut log = NullWorkLog;

    log.ensure_initialized().unwrap();
    log.start(&Countdown::new(5, Some("x".into()), InstantClock))
        .unwrap();
    log.finish_early().unwrap();

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}
