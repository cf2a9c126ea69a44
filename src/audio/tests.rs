use std::path::Path;
use std::time::{Duration, Instant};

use super::probe::{DurationProbe, LoftyProbe};
use super::source::open_source;
use super::types::{AudioError, PositionClock};

#[test]
fn clock_counts_only_playing_time() {
    let t0 = Instant::now();
    let mut clock = PositionClock::default();
    assert_eq!(clock.elapsed(t0), Duration::ZERO);

    clock.restart(t0);
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(3)), Duration::from_secs(3));

    clock.pause(t0 + Duration::from_secs(5));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(60)), Duration::from_secs(5));

    clock.resume(t0 + Duration::from_secs(60));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(62)), Duration::from_secs(7));
}

#[test]
fn clock_restart_and_stop_reset_position() {
    let t0 = Instant::now();
    let mut clock = PositionClock::default();
    clock.restart(t0);
    clock.restart(t0 + Duration::from_secs(10));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(11)), Duration::from_secs(1));

    clock.stop();
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(20)), Duration::ZERO);

    // Nothing loaded: resuming must not start counting.
    clock.resume(t0 + Duration::from_secs(20));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(30)), Duration::ZERO);
}

#[test]
fn probe_of_missing_file_is_zero() {
    assert_eq!(LoftyProbe.probe_secs(Path::new("/definitely/not/here.mp3")), 0);
}

#[test]
fn probe_of_garbage_file_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.mp3");
    std::fs::write(&path, b"this is not audio").unwrap();
    assert_eq!(LoftyProbe.probe_secs(&path), 0);
}

#[test]
fn open_source_reports_missing_files() {
    let err = open_source(Path::new("/definitely/not/here.mp3")).err();
    assert!(matches!(err, Some(AudioError::Open { .. })));
}
