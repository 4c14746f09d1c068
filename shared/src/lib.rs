// Types and helpers shared by the pricing engine and the calculator UI.
pub mod models;
pub mod utils;
