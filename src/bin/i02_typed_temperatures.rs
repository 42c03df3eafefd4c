//! Traits 2: Typed Temperatures
//! Newtypes make the compiler check units; `From` makes conversions explicit.
//!
//! Run with: cargo run --bin i02_typed_temperatures

use lessons::measure::{Celsius, Fahrenheit, Kelvin};
use lessons::section;

fn print_fahrenheit(f: Fahrenheit) {
    println!("{}", f);
}

fn print_celsius(c: Celsius) {
    println!("{}", c);
}

fn print_kelvin(k: Kelvin) {
    println!("{}", k);
}

/// The pitfall: taking the number out of one newtype and putting it in
/// another compiles, but converts nothing.
fn raw_cast(f: Fahrenheit) -> Celsius {
    Celsius(f.0)
}

fn main() {
    lessons::telemetry::init();

    let c = Celsius(100.0);
    let f = Fahrenheit(212.0);
    let k = Kelvin(373.15);

    section("Each type goes to its own printer");
    // print_fahrenheit(c) does not compile: expected `Fahrenheit`, found `Celsius`.
    print_celsius(c);
    print_fahrenheit(f);
    print_kelvin(k);

    section("Converting with From");
    print_celsius(Celsius::from(f));
    print_fahrenheit(c.into());
    // No direct formula; the conversion goes through Celsius.
    print_kelvin(Kelvin::from(f));

    section("Unwrapping the number is not a conversion");
    print_celsius(raw_cast(f));

    println!("\n=== Key Points ===");
    println!("1. A newtype costs nothing at runtime and catches unit mix-ups");
    println!("2. From/Into impls name every legal conversion");
    println!("3. Celsius(f.0) still compiles, so keep the inner value private where it matters");
    println!("4. N units need N*(N-1) conversions; a trait keeps callers out of that");
}
