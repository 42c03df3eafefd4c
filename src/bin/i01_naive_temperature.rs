//! Traits 1: Naive Temperatures
//! A bare f64 carries no unit, so nothing stops it reaching the wrong printer.
//!
//! Run with: cargo run --bin i01_naive_temperature

use lessons::section;

fn format_temperature(temp: f64) -> String {
    format!("{:.6} °???", temp)
}

fn format_fahrenheit(temp: f64) -> String {
    format!("{:.6} °F", temp)
}

fn format_celsius(temp: f64) -> String {
    format!("{:.6} °C", temp)
}

fn format_kelvin(temp: f64) -> String {
    format!("{:.6} °K", temp)
}

fn main() {
    lessons::telemetry::init();

    section("One number, four meanings");
    let temp = 100.0;

    // Water boils at 100 °C, 212 °F and 373.15 °K, yet all four calls accept
    // the same value without complaint.
    println!("{}", format_temperature(temp));
    println!("{}", format_fahrenheit(temp));
    println!("{}", format_celsius(temp));
    println!("{}", format_kelvin(temp));

    println!("\n=== Key Points ===");
    println!("1. f64 says nothing about which scale it measures");
    println!("2. The compiler cannot catch a Fahrenheit value passed as Kelvin");
    println!("3. Conversions between scales make this worse");
}
