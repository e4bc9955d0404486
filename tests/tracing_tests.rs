//! Tests for the `tracing` events emitted at exhaustion and short-circuit points.

#![cfg(all(feature = "tracing", feature = "kmerge", feature = "fallible"))]

use iterset::prelude::*;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// A writer that appends formatted events to a shared buffer.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buffer = self.0.lock().map(|buffer| buffer.clone()).unwrap_or_default();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `body` with a trace-level subscriber and returns everything it logged.
fn capture(body: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    captured.contents()
}

#[rstest]
fn test_exhaustion_is_traced_once_per_input() {
    let logs = capture(|| {
        let _ = merge([1, 3], [2]).count();
    });
    assert_eq!(logs.matches("sorted input exhausted").count(), 2);
    assert!(logs.contains("pulled=2"));
}

#[rstest]
fn test_missing_key_is_traced() {
    let logs = capture(|| {
        assert!(!includes([1, 3], [1, 2]));
    });
    assert!(logs.contains("inclusion disproved: missing key"));
    assert!(logs.contains("matched=1"));
}

#[rstest]
fn test_superset_exhaustion_is_traced() {
    let logs = capture(|| {
        assert!(!includes([1], [1, 5]));
    });
    assert!(logs.contains("inclusion disproved: superset exhausted"));
}

#[rstest]
fn test_kmerge_priming_is_traced() {
    let logs = capture(|| {
        let _ = merge_all([vec![1], vec![], vec![2]]).next();
    });
    assert!(logs.contains("k-way merge primed"));
    assert!(logs.contains("sources=3"));
    assert!(logs.contains("live=2"));
}

#[rstest]
fn test_fault_is_traced() {
    let logs = capture(|| {
        let a: Vec<Result<i32, &str>> = vec![Err("bad block")];
        let _ = try_union(a, vec![Ok(1)]).count();
    });
    assert!(logs.contains("input fault ended sorted join"));
}

#[rstest]
fn test_nothing_is_logged_without_a_subscriber() {
    // No subscriber installed: the events go nowhere and the join still works.
    assert_eq!(union([1, 2], [2, 3]).collect::<Vec<_>>(), vec![1, 2, 3]);
}
