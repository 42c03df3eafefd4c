//! # Error Handling and Concurrency Lessons
//!
//! Small, self-contained example programs. Each one lives in `src/bin` and
//! demonstrates one idea; this library holds the few helpers they share.
//!
//! ## Examples
//!
//! ```bash
//! # Errors
//! cargo run --bin e01_basic_errors
//! cargo run --bin e02_checking_errors
//! cargo run --bin e03_wrapping
//! cargo run --bin e04_custom_error_type
//! cargo run --bin e05_advanced_error_handling
//! cargo run --bin e06_adding_info
//! cargo run --bin e08_interrogating_errors
//! cargo run --bin e09_order_of_error_chains
//!
//! # Threads, channels and cancellation
//! cargo run --bin c01_threads
//! cargo run --bin c02_channels
//! cargo run --bin c03_contexts
//!
//! # Footguns
//! cargo run --bin f01_race_conditions
//! cargo run --bin f02_captured_loop_variables
//!
//! # Traits
//! cargo run --bin i01_naive_temperature
//! cargo run --bin i02_typed_temperatures
//! cargo run --bin i03_temperature_trait
//! cargo run --bin i04_error_traits
//! ```
//!
//! Or run all of them with `./run_all.sh`.
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the custom error types
//! - `anyhow` - Error plumbing in the example binaries
//! - `crossbeam` - Channels with `select!` and wait groups
//! - `tokio` / `tokio-util` - Async runtime and cancellation tokens
//! - `tracing` - Diagnostics on stderr, controlled by `RUST_LOG`

pub mod config;
pub mod context;
pub mod errors;
pub mod jsonfile;
pub mod measure;
pub mod telemetry;
pub mod utils;

use colored::Colorize;

/// Print a section header the way every example does.
pub fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold());
}
