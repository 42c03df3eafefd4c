//! Footgun 1: Race Conditions
//! A read-modify-write split in two loses updates when threads interleave.
//!
//! Safe Rust will not compile a plain `total += i` shared between threads, so
//! the racy version reads and writes an atomic in two separate steps. Every
//! access is defined behaviour; the lost updates are a logic race.
//!
//! Run with: cargo run --bin f01_race_conditions

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread;

use lessons::section;
use tracing::debug;

const TRIALS: usize = 200;

/// 0 + 1 + ... + 10
const EXPECTED: i64 = 55;

/// What not to do: load, yield, store. Another thread can store in between,
/// and its update is overwritten.
fn racy_sum() -> i64 {
    let total = AtomicI64::new(0);

    thread::scope(|s| {
        for i in 0..=10 {
            let total = &total;
            s.spawn(move || {
                let seen = total.load(Ordering::SeqCst);
                thread::yield_now();
                total.store(seen + i, Ordering::SeqCst);
            });
        }
    });

    total.into_inner()
}

/// Only one thread at a time holds the lock, so each addition sees the last.
fn mutex_sum() -> i64 {
    let total = Mutex::new(0i64);

    thread::scope(|s| {
        for i in 0..=10 {
            let total = &total;
            s.spawn(move || {
                // A poisoned lock still holds a usable total.
                let mut guard = total.lock().unwrap_or_else(|e| e.into_inner());
                *guard += i;
            });
        }
    });

    total.into_inner().unwrap_or_else(|e| e.into_inner())
}

/// fetch_add does the read and the write as one indivisible step.
fn atomic_sum() -> i64 {
    let total = AtomicI64::new(0);

    thread::scope(|s| {
        for i in 0..=10 {
            let total = &total;
            s.spawn(move || {
                total.fetch_add(i, Ordering::SeqCst);
            });
        }
    });

    total.into_inner()
}

/// Distinct results seen across `trials` runs of `f`.
fn distinct_results(trials: usize, f: impl Fn() -> i64) -> BTreeSet<i64> {
    (0..trials).map(|_| f()).collect()
}

fn main() {
    lessons::telemetry::init();

    section("No synchronization");
    let racy = distinct_results(TRIALS, racy_sum);
    debug!(distinct = racy.len(), trials = TRIALS, "racy trials finished");
    println!("No mutexes: {:?} (took {} runs)", racy, TRIALS);
    if racy.len() == 1 && racy.contains(&EXPECTED) {
        println!("every run happened to come out right this time; run it again");
    }

    section("With a mutex");
    let locked: Vec<i64> = (0..=10).map(|_| mutex_sum()).collect();
    println!("With mutexes: {:?}", locked);

    section("With an atomic add");
    let atomic: Vec<i64> = (0..=10).map(|_| atomic_sum()).collect();
    println!("With fetch_add: {:?}", atomic);

    println!("\n=== Key Points ===");
    println!("1. A read followed by a separate write is not atomic");
    println!("2. The result can change from run to run");
    println!("3. Mutex serializes access; the guard unlocks on drop");
    println!("4. For a single counter, an atomic fetch_add is enough");
}
