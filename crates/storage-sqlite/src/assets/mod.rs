//! SQLite storage implementation for assets.

mod model;
mod repository;


pub use model::AssetDB;
pub use repository::AssetRepository;
