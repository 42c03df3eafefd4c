//! Typed units of measure.
//!
//! A bare `f64` says nothing about its unit. Wrapping it in a newtype lets the
//! compiler reject a Fahrenheit value where a Celsius one is expected, and the
//! [`Unit`] / [`Temperature`] traits let code work with any unit without
//! knowing which one it was handed.

use std::any::Any;
use std::fmt;

pub mod distance;
pub mod temperature;

pub use distance::{Kilometer, Mile, Smoot};
pub use temperature::{Celsius, Fahrenheit, Kelvin, Rankine, Temperature};

pub trait Unit: fmt::Display {
    /// Name of the unit, e.g. `"Kelvin"`.
    fn unit(&self) -> &'static str;

    /// Access to the concrete type, for downcasting a `&dyn Unit`.
    fn as_any(&self) -> &dyn Any;
}
