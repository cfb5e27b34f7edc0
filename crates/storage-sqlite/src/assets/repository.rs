use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use tharwa_core::assets::{Asset, AssetRepositoryTrait};
use tharwa_core::errors::DatabaseError;
use tharwa_core::Result;

use super::model::AssetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assets;

/// Stores the asset collection in the `assets` table, ordered by `position`.
pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AssetRepository { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    fn load_all(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets::table
            .order(assets::position.asc())
            .select(AssetDB::as_select())
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Asset::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn save_all(&self, assets_to_save: Vec<Asset>) -> Result<()> {
        let rows = assets_to_save
            .iter()
            .enumerate()
            .map(|(position, asset)| {
                i32::try_from(position)
                    .map(|p| AssetDB::from_asset(asset, p))
                    .map_err(|_| {
                        DatabaseError::Internal("too many assets to store".to_string()).into()
                    })
            })
            .collect::<Result<Vec<AssetDB>>>()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(assets::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                for row in &rows {
                    diesel::insert_into(assets::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                debug!("Saved {} assets", rows.len());
                Ok(())
            })
            .await
    }
}
