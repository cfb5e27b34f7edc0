//! Tests for the asset service against an in-memory repository.

#[cfg(test)]
mod tests {
    use crate::assets::{
        Asset, AssetDetails, AssetRepositoryTrait, AssetService, AssetServiceTrait, AssetUpdate,
        NewAsset, Purity,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockAssetRepository {
        assets: Mutex<Vec<Asset>>,
        saves: AtomicUsize,
    }

    impl MockAssetRepository {
        fn with(assets: Vec<Asset>) -> Self {
            Self {
                assets: Mutex::new(assets),
                saves: AtomicUsize::new(0),
            }
        }

        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetRepositoryTrait for MockAssetRepository {
        fn load_all(&self) -> Result<Vec<Asset>> {
            Ok(self.assets.lock().unwrap().clone())
        }

        async fn save_all(&self, assets: Vec<Asset>) -> Result<()> {
            *self.assets.lock().unwrap() = assets;
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn cash(id: i64, name: &str) -> Asset {
        Asset {
            id,
            name: name.to_string(),
            amount: dec!(1000),
            unit: "EGP".to_string(),
            created_at: now() - Duration::days(30),
            details: AssetDetails::Cash,
        }
    }

    fn new_gold(name: &str) -> NewAsset {
        NewAsset {
            id: None,
            name: name.to_string(),
            amount: dec!(10),
            unit: None,
            details: AssetDetails::Gold {
                purity: Purity::K21,
            },
        }
    }

    #[tokio::test]
    async fn test_create_uses_timestamp_id_and_default_unit() {
        let repo = Arc::new(MockAssetRepository::default());
        let service = AssetService::new(repo.clone());

        let asset = service
            .create_asset_at(new_gold("Necklace"), now())
            .await
            .unwrap();

        assert_eq!(asset.id, now().timestamp_millis());
        assert_eq!(asset.created_at, now());
        assert_eq!(asset.unit, "grams");
        assert_eq!(repo.saves(), 1);
        assert_eq!(service.get_assets().unwrap(), vec![asset]);
    }

    #[tokio::test]
    async fn test_create_bumps_colliding_timestamp_id() {
        let taken = now().timestamp_millis();
        let repo = Arc::new(MockAssetRepository::with(vec![
            cash(taken, "A"),
            cash(taken + 5, "B"),
        ]));
        let service = AssetService::new(repo);

        let asset = service
            .create_asset_at(new_gold("Bar"), now())
            .await
            .unwrap();

        assert_eq!(asset.id, taken + 6);
    }

    #[tokio::test]
    async fn test_create_rejects_taken_explicit_id() {
        let repo = Arc::new(MockAssetRepository::with(vec![cash(5, "A")]));
        let service = AssetService::new(repo.clone());

        let mut new_asset = new_gold("Bar");
        new_asset.id = Some(5);
        let err = service.create_asset_at(new_asset, now()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let repo = Arc::new(MockAssetRepository::default());
        let service = AssetService::new(repo.clone());

        let err = service
            .create_asset_at(new_gold("  "), now())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let original = cash(11, "Wallet");
        let repo = Arc::new(MockAssetRepository::with(vec![
            cash(10, "First"),
            original.clone(),
        ]));
        let service = AssetService::new(repo.clone());

        let update = AssetUpdate {
            name: "Savings".to_string(),
            amount: dec!(300),
            unit: None,
            details: AssetDetails::Usd,
        };
        let updated = service.update_asset(11, update).await.unwrap();

        assert_eq!(updated.id, 11);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.unit, "USD");

        // Order in the collection is untouched
        let ids: Vec<i64> = service.get_assets().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(service.get_asset(11).unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_asset_is_not_found() {
        let service = AssetService::new(Arc::new(MockAssetRepository::default()));
        let update = AssetUpdate {
            name: "X".to_string(),
            amount: dec!(1),
            unit: None,
            details: AssetDetails::Cash,
        };

        let err = service.update_asset(99, update).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = Arc::new(MockAssetRepository::with(vec![cash(1, "A"), cash(2, "B")]));
        let service = AssetService::new(repo.clone());

        service.delete_asset(1).await.unwrap();
        assert_eq!(service.get_assets().unwrap(), vec![cash(2, "B")]);

        let err = service.delete_asset(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.saves(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_asset() {
        let service = AssetService::new(Arc::new(MockAssetRepository::default()));
        assert!(service.get_asset(123).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_replace_all_rejects_duplicate_ids() {
        let repo = Arc::new(MockAssetRepository::with(vec![cash(1, "Keep")]));
        let service = AssetService::new(repo.clone());

        let err = service
            .replace_assets(vec![cash(2, "A"), cash(2, "B")])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        assert_eq!(service.get_assets().unwrap(), vec![cash(1, "Keep")]);
    }

    #[tokio::test]
    async fn test_replace_all() {
        let repo = Arc::new(MockAssetRepository::with(vec![cash(1, "Old")]));
        let service = AssetService::new(repo);

        let imported = vec![cash(3, "C"), cash(2, "B")];
        service.replace_assets(imported.clone()).await.unwrap();

        assert_eq!(service.get_assets().unwrap(), imported);
    }

    #[tokio::test]
    async fn test_concurrent_creates_do_not_lose_writes() {
        let repo = Arc::new(MockAssetRepository::default());
        let service = Arc::new(AssetService::new(repo.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_asset_at(new_gold(&format!("Bar {}", i)), now())
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let assets = service.get_assets().unwrap();
        assert_eq!(assets.len(), 8);
        let mut ids: Vec<i64> = assets.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
