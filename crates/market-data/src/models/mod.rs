//! Market data models
//!
//! - `instrument` - What can be priced (`Instrument`, `InstrumentKind`)
//! - `quote` - A single price reading (`Quote`)

mod instrument;
mod quote;

pub use instrument::{Instrument, InstrumentKind, GOLD_SYMBOL, SILVER_SYMBOL};
pub use quote::Quote;
