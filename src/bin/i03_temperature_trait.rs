//! Traits 3: A Temperature Trait
//! Code written against a trait does not care which unit it was handed.
//!
//! Run with: cargo run --bin i03_temperature_trait

use lessons::measure::{Celsius, Fahrenheit, Kelvin, Kilometer, Mile, Smoot, Temperature, Unit};
use lessons::section;

fn sample_temperatures() -> Vec<Box<dyn Temperature>> {
    vec![
        Box::new(Kelvin(0.0)),
        Box::new(Celsius(0.0)),
        Box::new(Fahrenheit(0.0)),
        Box::new(Fahrenheit(212.0)),
        Box::new(Fahrenheit(80.0)),
        Box::new(Celsius(70.0)),
        Box::new(Kelvin(300.0)),
    ]
}

/// Formats by asking the temperature what it is, instead of trusting Display.
fn pretty_temperature(temp: &dyn Temperature) -> String {
    let (value, symbol) = match temp.unit() {
        "Kelvin" => (temp.kelvin().0, "K"),
        "Celsius" => (temp.celsius().0, "C"),
        "Fahrenheit" => (temp.fahrenheit().0, "F"),
        "Rankine" => (temp.rankine().0, "R"),
        _ => (temp.kelvin().0, "K"),
    };
    format!("{:.2} °{}", value, symbol)
}

fn temperature_line(temp: &dyn Temperature) -> String {
    format!(
        "Original: {} \tCelsius: {} \tFahrenheit: {} \tKelvin: {}",
        temp,
        temp.celsius(),
        temp.fahrenheit(),
        temp.kelvin()
    )
}

fn printing_temps(temps: &[Box<dyn Temperature>]) {
    println!("using pretty_temperature():");
    for temp in temps {
        println!("\tOriginal: {}", pretty_temperature(temp.as_ref()));
        println!("\tFahrenheit: {}", pretty_temperature(&temp.fahrenheit()));
        println!("\tCelsius: {}", pretty_temperature(&temp.celsius()));
        println!("\tKelvin: {}", pretty_temperature(&temp.kelvin()));
        println!();
    }

    // Temperature: Unit: Display, so every temperature formats itself.
    println!("using each temperature's Display impl:");
    for temp in temps {
        println!("\tOriginal: {}", temp);
        println!("\tFahrenheit: {}", temp.fahrenheit());
        println!("\tCelsius: {}", temp.celsius());
        println!("\tKelvin: {}", temp.kelvin());
        println!();
    }

    println!("using Display inside a formatted line:");
    for temp in temps {
        println!("\t{}", temperature_line(temp.as_ref()));
    }
}

/// `is_this_cold` lives on Fahrenheit only, so reaching it from a trait object
/// takes a downcast.
fn is_this_cold(temp: &dyn Temperature) -> bool {
    let f = match temp.as_any().downcast_ref::<Fahrenheit>() {
        Some(f) => {
            print!("Found a native Fahrenheit: ");
            *f
        }
        None => {
            print!("Converted a non-native Fahrenheit from {} {}: ", temp.unit(), temp);
            temp.fahrenheit()
        }
    };

    let cold = f.is_this_cold();
    println!("IsThisCold ({})? {}", f, cold);
    cold
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Counts {
    fahrenheit: usize,
    celsius: usize,
    kelvin: usize,
}

fn print_unit(unit: &dyn Unit) {
    println!("Got a {}: {}", unit.unit(), unit);
}

/// The closest thing to a type switch: try each concrete type in turn.
fn count_by_type(temps: &[Box<dyn Temperature>]) -> Counts {
    let mut counts = Counts::default();

    for temp in temps {
        let any = temp.as_any();
        if let Some(f) = any.downcast_ref::<Fahrenheit>() {
            print_unit(f);
            counts.fahrenheit += 1;
        } else if let Some(c) = any.downcast_ref::<Celsius>() {
            print_unit(c);
            counts.celsius += 1;
        } else if let Some(k) = any.downcast_ref::<Kelvin>() {
            print_unit(k);
            counts.kelvin += 1;
        } else {
            println!("Unknown temperature type!");
        }
    }

    println!(
        "Found {} Fahrenheits, {} Celsiuses, {} Kelvins",
        counts.fahrenheit, counts.celsius, counts.kelvin
    );
    counts
}

/// Distances and temperatures share nothing but `Unit`.
fn collect_units<'a>(
    distances: &'a [Box<dyn Unit>],
    temps: &'a [Box<dyn Temperature>],
) -> Vec<&'a dyn Unit> {
    let mut units: Vec<&dyn Unit> = Vec::with_capacity(distances.len() + temps.len());
    for distance in distances {
        units.push(distance.as_ref());
    }
    for temp in temps {
        units.push(temp.as_unit());
    }
    units
}

fn main() {
    lessons::telemetry::init();
    let temps = sample_temperatures();

    section("Printing temps");
    printing_temps(&temps);

    section("Downcasting");
    for temp in &temps {
        is_this_cold(temp.as_ref());
    }
    count_by_type(&temps);

    section("Units");
    let distances: Vec<Box<dyn Unit>> = vec![
        Box::new(Smoot(5.5)),
        Box::new(Mile(5.5)),
        Box::new(Kilometer(5.5)),
    ];
    for unit in collect_units(&distances, &temps) {
        print_unit(unit);
    }

    println!("\n=== Key Points ===");
    println!("1. Box<dyn Temperature> holds any scale in one Vec");
    println!("2. A supertrait (Temperature: Unit: Display) brings its methods along");
    println!("3. as_any().downcast_ref::<T>() recovers the concrete type");
    println!("4. A Vec<Box<dyn Temperature>> is not a Vec<Box<dyn Unit>>; convert each item");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_temperature_uses_own_unit() {
        assert_eq!(pretty_temperature(&Kelvin(0.0)), "0.00 °K");
        assert_eq!(pretty_temperature(&Fahrenheit(212.0)), "212.00 °F");
        assert_eq!(pretty_temperature(&Celsius(0.0).kelvin()), "273.15 °K");
    }

    #[test]
    fn test_is_this_cold_downcasts_or_converts() {
        assert!(is_this_cold(&Fahrenheit(0.0)));
        assert!(!is_this_cold(&Fahrenheit(80.0)));
        // 70 °C is 158 °F.
        assert!(!is_this_cold(&Celsius(70.0)));
        // 0 °K is far below 70 °F.
        assert!(is_this_cold(&Kelvin(0.0)));
    }

    #[test]
    fn test_count_by_type() {
        let counts = count_by_type(&sample_temperatures());
        assert_eq!(
            counts,
            Counts {
                fahrenheit: 3,
                celsius: 2,
                kelvin: 2,
            }
        );
    }

    #[test]
    fn test_collect_units_keeps_order() {
        let distances: Vec<Box<dyn Unit>> = vec![Box::new(Smoot(5.5)), Box::new(Mile(5.5))];
        let temps = sample_temperatures();
        let names: Vec<&str> = collect_units(&distances, &temps)
            .iter()
            .map(|u| u.unit())
            .collect();
        assert_eq!(names[..3], ["Smoot", "Mile", "Kelvin"]);
        assert_eq!(names.len(), 2 + temps.len());
    }

    #[test]
    fn test_temperature_line() {
        assert_eq!(
            temperature_line(&Celsius(100.0)),
            "Original: 100.00 °C \tCelsius: 100.00 °C \tFahrenheit: 212.00 °F \tKelvin: 373.15 °K"
        );
    }
}
