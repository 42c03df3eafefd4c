//! Concurrency 1: Threads and Join Barriers
//! Spawning threads, waiting on them with a wait group, and nesting them.
//!
//! Run with: cargo run --bin c01_threads

use std::thread;
use std::time::Duration;

use crossbeam::sync::WaitGroup;
use lessons::section;
use lessons::utils::{named_sleep, time_it, worker_id};
use tracing::debug;

const NAP: Duration = Duration::from_millis(500);

/// Start eleven sleepers and block until every one has finished.
fn waiting_with_a_waitgroup(name: &str) {
    let wg = WaitGroup::new();

    for i in 0..=10 {
        // Each thread owns its clone; dropping it marks that thread done.
        let wg = wg.clone();
        let sleeper = format!("{}-{}", name, i);

        thread::spawn(move || {
            named_sleep(&sleeper, NAP);
            drop(wg);
        });
    }

    // Blocks until every clone has been dropped.
    wg.wait();
    println!("done waiting");
}

/// Threads that start threads of their own, joined by a second wait group.
fn child_threads() {
    let wg = WaitGroup::new();

    for i in 0..=10 {
        let wg = wg.clone();
        thread::spawn(move || {
            let name = format!("child-{}", i);
            time_it(&name, || waiting_with_a_waitgroup(&name));
            drop(wg);
        });
    }

    wg.wait();
}

/// Scoped threads may borrow from the caller; the scope joins them all.
fn scoped_threads() -> u64 {
    let sleepers = ["scoped-a", "scoped-b", "scoped-c"];
    let mut finished = 0;

    thread::scope(|s| {
        let handles: Vec<_> = sleepers
            .iter()
            .map(|name| s.spawn(move || named_sleep(name, Duration::from_millis(50))))
            .collect();

        for handle in handles {
            if handle.join().is_ok() {
                finished += 1;
            }
        }
    });

    finished
}

/// Fire-and-forget threads. Nothing waits for them, so when main returns
/// first their output never appears.
fn spawning() {
    thread::spawn(|| named_sleep("spawning", NAP));

    thread::spawn(|| {
        println!("hello from another thread! ID: {}", worker_id());
    });

    debug!("detached threads started; main will not wait for them");
}

fn main() {
    lessons::telemetry::init();

    // Ordered so the detached threads come last.
    section("Waiting with a wait group");
    waiting_with_a_waitgroup("waiting-with-waitgroup");

    section("Child threads");
    child_threads();

    section("Scoped threads");
    println!("{} scoped threads finished", scoped_threads());

    section("Spawning without waiting");
    spawning();

    println!("\n=== Key Points ===");
    println!("1. thread::spawn returns immediately; the thread runs on its own");
    println!("2. A WaitGroup blocks until every clone is dropped");
    println!("3. thread::scope joins everything before it returns");
    println!("4. Detached threads are killed when main exits");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_waitgroup_waits_for_all_threads() {
        let finished = Arc::new(AtomicUsize::new(0));
        let wg = WaitGroup::new();

        for _ in 0..5 {
            let wg = wg.clone();
            let finished = Arc::clone(&finished);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(10));
                finished.fetch_add(1, Ordering::SeqCst);
                drop(wg);
            });
        }

        wg.wait();
        assert_eq!(finished.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_scoped_threads_all_finish() {
        assert_eq!(scoped_threads(), 3);
    }
}
