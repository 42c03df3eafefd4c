//! Concurrency 3: Cancellation Contexts
//! Carry a cancellation signal and a deadline through a tree of tasks.
//!
//! Run with: cargo run --bin c03_contexts

use std::time::Duration;

use lessons::context::{self, Context, ContextError};
use lessons::section;
use lessons::utils::time_it_async;
use tokio::task::JoinHandle;

/// Runs until `ctx` is cancelled. The handle resolves once shutdown has
/// finished, which is a little after the cancellation itself.
fn start_long_running_process(ctx: Context, name: String) -> JoinHandle<Option<ContextError>> {
    tokio::spawn(async move {
        time_it_async(&name, async {
            println!("{} started", name);
            ctx.done().await;
        })
        .await;
        ctx.err()
    })
}

async fn simple_cancellation() -> Option<ContextError> {
    section("Cancelling by hand");
    let (ctx, cancel) = context::with_cancel(&Context::background());

    let process = start_long_running_process(ctx.clone(), "simple-cancellation-1".to_string());
    let delay = Duration::from_millis(100);

    println!("Sending cancellation after {:?}", delay);
    tokio::time::sleep(delay).await;
    cancel.cancel();

    ctx.done().await;
    let _ = process.await;

    println!("Context cancelled!");
    ctx.err()
}

async fn simple_timeout() -> Option<ContextError> {
    section("Timeouts");
    let (ctx, _cancel) = context::with_timeout(&Context::background(), Duration::from_millis(10));

    let process = start_long_running_process(ctx.clone(), "timeout-cancellation-1".to_string());
    ctx.done().await;
    let _ = process.await;

    match ctx.err() {
        Some(err) => println!("Context timeout reached! {}", err),
        None => println!("Context still running?"),
    }
    ctx.err()
}

/// A deadline is a timeout expressed as a point in time.
async fn simple_deadline() -> Option<ContextError> {
    section("Deadlines");
    let deadline = tokio::time::Instant::now() + Duration::from_millis(10);
    let (ctx, _cancel) = context::with_deadline(&Context::background(), deadline);

    let process = start_long_running_process(ctx.clone(), "deadline-cancellation-1".to_string());
    ctx.done().await;
    let _ = process.await;

    match ctx.err() {
        Some(err) => println!("Context deadline reached! {}", err),
        None => println!("Context still running?"),
    }
    ctx.err()
}

/// One context shared by ten tasks stops all of them at once.
async fn shared_contexts() -> Vec<Option<ContextError>> {
    section("One context, many tasks");
    let (ctx, _cancel) = context::with_timeout(&Context::background(), Duration::from_millis(100));

    let processes: Vec<_> = (1..=10)
        .map(|i| start_long_running_process(ctx.clone(), format!("shared-context-{}", i)))
        .collect();

    ctx.done().await;

    let mut reasons = Vec::with_capacity(processes.len());
    for process in processes {
        reasons.push(process.await.ok().flatten());
    }
    reasons
}

/// Each child gets its own, growing timeout. Children stop at whichever comes
/// first: their own deadline or the parent's.
async fn child_contexts(parent_timeout: Duration) -> Vec<Option<ContextError>> {
    println!("Parent context has timeout {:?}", parent_timeout);
    let (parent, _parent_cancel) = context::with_timeout(&Context::background(), parent_timeout);

    let children: Vec<_> = (1..=10u64)
        .map(|i| {
            let parent = parent.clone();
            tokio::spawn(async move {
                let child_timeout = Duration::from_millis(i * 5);
                let (child, _child_cancel) = context::with_timeout(&parent, child_timeout);
                let reason = start_long_running_process(child, format!("child-context-{}", i)).await;
                (child_timeout, reason.ok().flatten())
            })
        })
        .collect();

    parent.done().await;

    let mut reasons = Vec::with_capacity(children.len());
    for child in children {
        if let Ok((timeout, reason)) = child.await {
            tracing::debug!(?timeout, ?reason, "child context finished");
            reasons.push(reason);
        }
    }
    reasons
}

async fn run_child_contexts() {
    section("Child contexts");
    // The children time out on their own before the parent does.
    child_contexts(Duration::from_millis(100)).await;

    // The parent times out first and takes every child with it.
    child_contexts(Duration::from_millis(1)).await;
}

#[tokio::main]
async fn main() {
    lessons::telemetry::init();

    simple_cancellation().await;
    simple_timeout().await;
    simple_deadline().await;
    shared_contexts().await;
    run_child_contexts().await;

    println!("\n=== Key Points ===");
    println!("1. Pass the context down; tasks await ctx.done() to learn of cancellation");
    println!("2. Dropping the CancelFunc cancels, like a deferred cancel()");
    println!("3. ctx.err() tells a manual cancel from an expired deadline");
    println!("4. Children inherit the parent's cancellation, never the reverse");
}
