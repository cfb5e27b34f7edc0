use super::assets_model::{Asset, AssetId, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: AssetId) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    /// Replaces the asset's fields, keeping its id and creation instant.
    async fn update_asset(&self, asset_id: AssetId, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: AssetId) -> Result<()>;
    /// Replaces the whole collection, e.g. when importing a backup.
    async fn replace_assets(&self, assets: Vec<Asset>) -> Result<Vec<Asset>>;
}

/// Trait defining the contract for Asset repository operations.
///
/// The collection is loaded and saved as a whole; order is preserved.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    fn load_all(&self) -> Result<Vec<Asset>>;
    async fn save_all(&self, assets: Vec<Asset>) -> Result<()>;
}
