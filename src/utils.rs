//! Helpers shared by the thread, channel and context examples.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::trace;

static NEXT_WORKER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static WORKER_ID: u64 = NEXT_WORKER_ID.fetch_add(1, Ordering::Relaxed);
}

/// A small number identifying the current OS thread.
///
/// Numbers are handed out the first time a thread asks, so they are stable
/// for the life of the thread and unique across the process.
pub fn worker_id() -> u64 {
    WORKER_ID.with(|id| *id)
}

/// Run `f`, then report how long it took and which thread ran it.
pub fn time_it<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let value = f();
    report(name, start.elapsed());
    value
}

/// Async counterpart of [`time_it`].
pub async fn time_it_async<F: Future>(name: &str, fut: F) -> F::Output {
    let start = Instant::now();
    let value = fut.await;
    report(name, start.elapsed());
    value
}

fn report(name: &str, elapsed: Duration) {
    trace!(name, ?elapsed, "timed section finished");
    println!(
        "{} finished running in thread {} in {:?}",
        name,
        worker_id(),
        elapsed
    );
}

/// Sleep for `d`, announcing `name` when done.
pub fn named_sleep(name: &str, d: Duration) {
    time_it(name, || thread::sleep(d));
}

pub async fn named_sleep_async(name: &str, d: Duration) {
    time_it_async(name, tokio::time::sleep(d)).await;
}

pub fn sum(nums: &[i64]) -> i64 {
    nums.iter().sum()
}

/// Uniform random number in `min..=max`.
pub fn random_number(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

pub fn random_numbers(min: i64, max: i64, n: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(min..=max)).collect()
}
