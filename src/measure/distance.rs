//! Distances. These are units but not temperatures, so they only implement
//! [`Unit`]. No conversions between them.

use std::any::Any;
use std::fmt;

use super::Unit;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mile(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kilometer(pub f64);

/// <https://en.wikipedia.org/wiki/Smoot>
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Smoot(pub f64);

macro_rules! distance_unit {
    ($ty:ident, $plural:literal) => {
        impl Unit for $ty {
            fn unit(&self) -> &'static str {
                stringify!($ty)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.2} {}", self.0, $plural)
            }
        }
    };
}

distance_unit!(Mile, "miles");
distance_unit!(Kilometer, "kilometers");
distance_unit!(Smoot, "smoots");
