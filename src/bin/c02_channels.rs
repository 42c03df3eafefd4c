//! Concurrency 2: Channels
//! Threads communicate by sending values instead of sharing memory.
//!
//! Run with: cargo run --bin c02_channels

use std::thread;
use std::time::Duration;

use crossbeam::channel::{bounded, never, select, unbounded, Receiver};
use crossbeam::sync::WaitGroup;
use lessons::section;
use lessons::utils::{named_sleep, random_number, random_numbers, sum, worker_id};

/// A channel nobody sends on still works as a done signal: dropping the
/// sender disconnects it and wakes the receiver.
fn waiting_with_a_channel() {
    let (done_tx, done_rx) = bounded::<()>(0);

    thread::spawn(move || {
        named_sleep("waiting-with-a-channel", Duration::from_millis(500));
        drop(done_tx);
    });

    // Err means disconnected, which is exactly the signal we want.
    let _ = done_rx.recv();
}

fn send_value_over_channel() {
    let (sum_tx, sum_rx) = bounded(0);

    thread::spawn(move || {
        let _ = sum_tx.send(sum(&random_numbers(0, 100, 100)));
    });

    match sum_rx.recv() {
        Ok(total) => println!("Sum: {}", total),
        Err(_) => println!("sender went away without a sum"),
    }
}

/// Producer -> summer -> main. Numbers are never collected into a Vec.
fn iterating_over_channels() -> Option<i64> {
    let (num_tx, num_rx) = bounded(0);
    let (sum_tx, sum_rx) = bounded(1);

    thread::spawn(move || {
        for _ in 0..=100 {
            if num_tx.send(random_number(0, 100)).is_err() {
                return;
            }
        }
        // num_tx drops here, ending the summer's loop.
    });

    thread::spawn(move || {
        let total: i64 = num_rx.iter().sum();
        let _ = sum_tx.send(total);
    });

    sum_rx.recv().ok()
}

/// Five producers and five consumers share one channel. Each value goes to
/// exactly one consumer.
fn fan_out_fan_in() -> i64 {
    let (num_tx, num_rx) = unbounded::<i64>();
    let (total_tx, total_rx) = unbounded::<i64>();

    let producers = WaitGroup::new();
    for _ in 0..5 {
        let producers = producers.clone();
        let num_tx = num_tx.clone();
        thread::spawn(move || {
            for _ in 0..10 {
                let num = random_number(0, 100);
                println!("sent {} from producer thread {}", num, worker_id());
                if num_tx.send(num).is_err() {
                    break;
                }
            }
            drop(producers);
        });
    }

    let consumers = WaitGroup::new();
    for _ in 0..5 {
        let consumers = consumers.clone();
        let num_rx = num_rx.clone();
        let total_tx = total_tx.clone();
        thread::spawn(move || {
            let id = worker_id();
            let mut total = 0;
            for num in num_rx.iter() {
                println!("received {} in consumer thread {}", num, id);
                total += num;
            }
            println!("thread {} finished with sum: {}", id, total);
            let _ = total_tx.send(total);
            drop(consumers);
        });
    }
    drop(total_tx);

    producers.wait();
    // The last sender goes away, so the consumers' loops end.
    drop(num_tx);
    consumers.wait();

    total_rx.iter().sum()
}

fn summing_thread(id: usize) -> Receiver<i64> {
    let (tx, rx) = bounded(0);
    thread::spawn(move || {
        if tx.send(sum(&random_numbers(0, 100, 100))).is_ok() {
            println!("thread {} finished", id);
        }
    });
    rx
}

/// Read from three channels at once without blocking on any one of them.
fn non_blocking_channel_reads() -> i64 {
    let (cumulative_tx, cumulative_rx) = unbounded();

    let chan1 = summing_thread(1);
    let chan2 = summing_thread(2);
    let chan3 = summing_thread(3);

    thread::spawn(move || {
        let idle = never();
        let mut finished = [false; 3];

        loop {
            // A finished channel is replaced by never(), which is never ready,
            // so select! stops picking it.
            let r1 = if finished[0] { &idle } else { &chan1 };
            let r2 = if finished[1] { &idle } else { &chan2 };
            let r3 = if finished[2] { &idle } else { &chan3 };

            select! {
                recv(r1) -> value => {
                    if let Ok(value) = value {
                        println!("chan 1 value: {}", value);
                        let _ = cumulative_tx.send(value);
                    }
                    finished[0] = true;
                }
                recv(r2) -> value => {
                    if let Ok(value) = value {
                        println!("chan 2 value: {}", value);
                        let _ = cumulative_tx.send(value);
                    }
                    finished[1] = true;
                }
                recv(r3) -> value => {
                    if let Ok(value) = value {
                        println!("chan 3 value: {}", value);
                        let _ = cumulative_tx.send(value);
                    }
                    finished[2] = true;
                }
                default => {
                    if finished.iter().all(|done| *done) {
                        println!("cumulative thread finished");
                        return;
                    }
                    thread::yield_now();
                }
            }
        }
    });

    cumulative_rx.iter().sum()
}

/// A worker that polls for a shutdown signal between units of work.
fn shutting_down_a_thread() -> usize {
    let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

    let worker = thread::spawn(move || {
        let delay = Duration::from_millis(10);
        let mut naps = 0;
        loop {
            select! {
                recv(shutdown_rx) -> _ => {
                    println!("Received shutdown signal");
                    return naps;
                }
                default => {
                    thread::sleep(delay);
                    naps += 1;
                    println!("Slept for {:?}", delay);
                }
            }
        }
    });

    thread::sleep(Duration::from_millis(100));
    let _ = shutdown_tx.send(());
    let naps = worker.join().unwrap_or(0);
    println!("Thread is now shut down");
    naps
}

fn main() {
    lessons::telemetry::init();

    section("Waiting with a channel");
    waiting_with_a_channel();

    section("Sending a value over a channel");
    send_value_over_channel();

    section("Iterating over a channel");
    match iterating_over_channels() {
        Some(total) => println!("{}", total),
        None => println!("no total"),
    }

    section("Many producers, many consumers");
    println!("Grand total: {}", fan_out_fan_in());

    section("Non-blocking reads with select!");
    println!("Cumulative Value: {}", non_blocking_channel_reads());

    section("Shutting down a thread");
    shutting_down_a_thread();

    println!("\n=== Key Points ===");
    println!("1. Dropping every Sender closes the channel for receivers");
    println!("2. Iterating a Receiver ends when the channel closes");
    println!("3. Each value goes to exactly one receiver");
    println!("4. select! with default never blocks");
}
