use std::any::Any;
use std::fmt;

use super::Unit;

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Celsius(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fahrenheit(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Kelvin(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rankine(pub f64);

/// Any temperature can express itself in every scale.
pub trait Temperature: Unit {
    fn kelvin(&self) -> Kelvin;
    fn celsius(&self) -> Celsius;
    fn fahrenheit(&self) -> Fahrenheit;
    fn rankine(&self) -> Rankine;

    fn as_unit(&self) -> &dyn Unit;
}

impl Fahrenheit {
    /// Only Fahrenheit has an opinion about the weather.
    pub fn is_this_cold(&self) -> bool {
        self.0 <= 70.0
    }
}

// Direct formulas. Everything else goes through Celsius or Fahrenheit.

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + KELVIN_OFFSET)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - KELVIN_OFFSET)
    }
}

impl From<Fahrenheit> for Rankine {
    fn from(f: Fahrenheit) -> Self {
        Rankine(f.0 + RANKINE_OFFSET)
    }
}

impl From<Rankine> for Fahrenheit {
    fn from(r: Rankine) -> Self {
        Fahrenheit(r.0 - RANKINE_OFFSET)
    }
}

macro_rules! convert_via {
    ($from:ty => $via:ty => $to:ty) => {
        impl From<$from> for $to {
            fn from(value: $from) -> Self {
                <$to>::from(<$via>::from(value))
            }
        }
    };
}

convert_via!(Fahrenheit => Celsius => Kelvin);
convert_via!(Kelvin => Celsius => Fahrenheit);
convert_via!(Celsius => Fahrenheit => Rankine);
convert_via!(Rankine => Fahrenheit => Celsius);
convert_via!(Kelvin => Fahrenheit => Rankine);
convert_via!(Rankine => Celsius => Kelvin);

macro_rules! temperature_unit {
    ($ty:ident, $symbol:literal) => {
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
                write!(f, "{:.2} °{}", self.0, $symbol)
            }
        }

        impl Temperature for $ty {
            fn kelvin(&self) -> Kelvin {
                Kelvin::from(*self)
            }

            fn celsius(&self) -> Celsius {
                Celsius::from(*self)
            }

            fn fahrenheit(&self) -> Fahrenheit {
                Fahrenheit::from(*self)
            }

            fn rankine(&self) -> Rankine {
                Rankine::from(*self)
            }

            fn as_unit(&self) -> &dyn Unit {
                self
            }
        }
    };
}

temperature_unit!(Celsius, "C");
temperature_unit!(Fahrenheit, "F");
temperature_unit!(Kelvin, "K");
temperature_unit!(Rankine, "R");
