use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::assets_model::{Asset, AssetId, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    /// Serializes load-modify-save cycles
    write_lock: Mutex<()>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self {
            asset_repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates an asset as of `now`.
    ///
    /// The id defaults to `now` in epoch milliseconds; if that id is taken it
    /// is moved past the largest existing id. An explicit id that is taken is
    /// rejected.
    pub async fn create_asset_at(&self, new_asset: NewAsset, now: DateTime<Utc>) -> Result<Asset> {
        new_asset.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut assets = self.asset_repository.load_all()?;

        let id = match new_asset.id {
            Some(id) if assets.iter().any(|a| a.id == id) => {
                return Err(DatabaseError::UniqueViolation(format!(
                    "Asset with id {} already exists",
                    id
                ))
                .into());
            }
            Some(id) => id,
            None => next_free_id(&assets, now.timestamp_millis()),
        };

        let asset = new_asset.into_asset(id, now);
        debug!("Creating {} asset {} ({})", asset.kind(), asset.id, asset.name);
        assets.push(asset.clone());
        self.asset_repository.save_all(assets).await?;
        Ok(asset)
    }
}

/// `candidate` when unused, otherwise one past the largest id in use.
fn next_free_id(assets: &[Asset], candidate: AssetId) -> AssetId {
    if assets.iter().any(|a| a.id == candidate) {
        assets
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(candidate, |max| max.saturating_add(1))
    } else {
        candidate
    }
}

fn not_found(asset_id: AssetId) -> Error {
    Error::NotFound(format!("Asset {}", asset_id))
}

// Implement the service trait
#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.load_all()
    }

    fn get_asset(&self, asset_id: AssetId) -> Result<Asset> {
        self.asset_repository
            .load_all()?
            .into_iter()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| not_found(asset_id))
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        self.create_asset_at(new_asset, Utc::now()).await
    }

    async fn update_asset(&self, asset_id: AssetId, update: AssetUpdate) -> Result<Asset> {
        update.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut assets = self.asset_repository.load_all()?;

        let slot = assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| not_found(asset_id))?;
        let updated = update.apply_to(slot);
        *slot = updated.clone();

        debug!("Updating asset {}", asset_id);
        self.asset_repository.save_all(assets).await?;
        Ok(updated)
    }

    async fn delete_asset(&self, asset_id: AssetId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut assets = self.asset_repository.load_all()?;

        let before = assets.len();
        assets.retain(|a| a.id != asset_id);
        if assets.len() == before {
            return Err(not_found(asset_id));
        }

        debug!("Deleting asset {}", asset_id);
        self.asset_repository.save_all(assets).await
    }

    async fn replace_assets(&self, assets: Vec<Asset>) -> Result<Vec<Asset>> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            if !seen.insert(asset.id) {
                return Err(DatabaseError::UniqueViolation(format!(
                    "Duplicate asset id {}",
                    asset.id
                ))
                .into());
            }
            if asset.name.trim().is_empty() {
                return Err(crate::errors::ValidationError::MissingField(format!(
                    "name (asset {})",
                    asset.id
                ))
                .into());
            }
        }

        let _guard = self.write_lock.lock().await;
        info!("Replacing asset collection with {} assets", assets.len());
        self.asset_repository.save_all(assets.clone()).await?;
        Ok(assets)
    }
}
