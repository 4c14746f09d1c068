// Apartment pricing: coefficient tables and calculators
pub mod calculator;
pub mod coefficients;

pub use calculator::{calculate_apartment_price, calculate_parking_price, calculate_storage_price};
pub use coefficients::{options, CalculatorOptions};

/// Rounds the exact binary value of `value` to `places` decimal places, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
