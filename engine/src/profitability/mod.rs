// Lot registry and investment profitability projection
pub mod lots;
pub mod projection;

pub use lots::{Lot, LotRegistry};
pub use projection::calculate_profitability;
