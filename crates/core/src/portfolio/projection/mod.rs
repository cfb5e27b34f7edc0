//! Month-by-month forecast of total portfolio value at constant prices.

mod projection_calculator;
mod projection_model;


pub use projection_calculator::*;
pub use projection_model::*;
