//! Assets module - domain models, services, and traits.

mod assets_constants;
mod assets_model;
mod assets_service;
mod assets_traits;

#[cfg(test)]
mod assets_model_tests;
#[cfg(test)]
mod assets_service_tests;

// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{
    Asset, AssetDetails, AssetId, AssetKind, AssetUpdate, InterestType, NewAsset, Purity,
};
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
