use serde::{Deserialize, Serialize};

/// Temperature scale. All conversions are total over f64 — physically
/// nonsensical inputs (negative Kelvin) pass through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Unit symbol used in formatted output ("0°C = 32.00°F").
    pub fn symbol(&self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Celsius => write!(f, "celsius"),
            Scale::Fahrenheit => write!(f, "fahrenheit"),
            Scale::Kelvin => write!(f, "kelvin"),
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    (fahrenheit + 459.67) * 5.0 / 9.0
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 9.0 / 5.0 - 459.67
}

/// Converts `value` between any two scales. Identity when the scales match.
pub fn convert(value: f64, from: Scale, to: Scale) -> f64 {
    match (from, to) {
        (Scale::Celsius, Scale::Fahrenheit) => celsius_to_fahrenheit(value),
        (Scale::Celsius, Scale::Kelvin) => celsius_to_kelvin(value),
        (Scale::Fahrenheit, Scale::Celsius) => fahrenheit_to_celsius(value),
        (Scale::Fahrenheit, Scale::Kelvin) => fahrenheit_to_kelvin(value),
        (Scale::Kelvin, Scale::Celsius) => kelvin_to_celsius(value),
        (Scale::Kelvin, Scale::Fahrenheit) => kelvin_to_fahrenheit(value),
        _ => value,
    }
}

/// One row of the scale-comparison chart data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

/// Chart data: triples sampled at 10-degree Celsius steps from -50 to 100
/// inclusive (16 rows).
pub fn comparison_table() -> Vec<ComparisonRow> {
    (-50..=100)
        .step_by(10)
        .map(|c| {
            let celsius = c as f64;
            ComparisonRow {
                celsius,
                fahrenheit: celsius_to_fahrenheit(celsius),
                kelvin: celsius_to_kelvin(celsius),
            }
        })
        .collect()
}
