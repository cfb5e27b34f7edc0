//! Portfolio allocation by asset kind.

mod allocation_calculator;
mod allocation_model;


pub use allocation_calculator::*;
pub use allocation_model::*;
