pub mod allocation;
pub mod projection;
pub mod summary;
pub mod valuation;

pub use allocation::*;
pub use projection::*;
pub use summary::*;
pub use valuation::*;
