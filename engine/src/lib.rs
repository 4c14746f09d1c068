// Engine library root: pricing tables, calculators, profitability projection and the HTTP API.

pub mod config;
pub mod error;
pub mod pricing;
pub mod profitability;
pub mod services;
