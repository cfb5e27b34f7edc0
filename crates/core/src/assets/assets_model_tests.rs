//! Tests for asset domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{
        Asset, AssetDetails, AssetKind, AssetUpdate, InterestType, NewAsset, Purity,
    };
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn created() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_gold_without_purity_defaults_to_24k() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 1714557600000i64,
            "name": "Bullion",
            "type": "gold",
            "amount": 31.1035,
            "unit": "grams",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(asset.kind(), AssetKind::Gold);
        assert_eq!(asset.amount, dec!(31.1035));
        assert_eq!(asset.created_at, created());
        assert_eq!(
            asset.details,
            AssetDetails::Gold {
                purity: Purity::K24
            }
        );
    }

    #[test]
    fn test_gold_null_purity_defaults_to_24k() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 1, "name": "Ring", "type": "gold", "amount": 5,
            "unit": "grams", "createdAt": "2024-05-01T10:00:00Z", "purity": null
        }))
        .unwrap();
        assert_eq!(
            asset.details,
            AssetDetails::Gold {
                purity: Purity::K24
            }
        );
    }

    #[test]
    fn test_gold_purity_parsing() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 1, "name": "Ring", "type": "gold", "amount": 5,
            "unit": "grams", "createdAt": "2024-05-01T10:00:00Z", "purity": 21
        }))
        .unwrap();
        assert_eq!(
            asset.details,
            AssetDetails::Gold {
                purity: Purity::K21
            }
        );

        let bad = serde_json::from_value::<Asset>(json!({
            "id": 1, "name": "Ring", "type": "gold", "amount": 5,
            "unit": "grams", "createdAt": "2024-05-01T10:00:00Z", "purity": 20
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_purity_fraction() {
        assert_eq!(Purity::K24.fraction(), dec!(1));
        assert_eq!(Purity::K18.fraction(), dec!(0.75));
        assert_eq!(Purity::try_from(22u8).unwrap(), Purity::K22);
        assert!(Purity::try_from(14u8).is_err());
    }

    #[test]
    fn test_rent_dates_accept_plain_dates_and_blanks() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 2, "name": "Flat", "type": "rent", "amount": 0, "unit": "EGP",
            "createdAt": "2024-05-01T10:00:00Z",
            "monthlyRent": 5000, "startDate": "2024-01-01", "endDate": ""
        }))
        .unwrap();

        match asset.details {
            AssetDetails::Rent {
                monthly_rent,
                start_date,
                end_date,
            } => {
                assert_eq!(monthly_rent, Some(dec!(5000)));
                assert_eq!(
                    start_date,
                    Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
                );
                assert_eq!(end_date, None);
            }
            other => panic!("expected rent, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = serde_json::from_value::<Asset>(json!({
            "id": 2, "name": "Flat", "type": "rent", "amount": 0, "unit": "EGP",
            "createdAt": "2024-05-01T10:00:00Z",
            "monthlyRent": 5000, "startDate": "soon"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_interest_record() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 3, "name": "CD", "type": "interest", "amount": 1000, "unit": "EGP",
            "createdAt": "2024-05-01T10:00:00Z",
            "principal": 1000, "interestRate": 12, "interestType": "compound",
            "startDate": "2024-01-01"
        }))
        .unwrap();

        match asset.details {
            AssetDetails::Interest {
                principal,
                interest_rate,
                interest_type,
                end_date,
                ..
            } => {
                assert_eq!(principal, Some(dec!(1000)));
                assert_eq!(interest_rate, Some(dec!(12)));
                assert_eq!(interest_type, Some(InterestType::Compound));
                assert!(end_date.is_none());
            }
            other => panic!("expected interest, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_becomes_other() {
        let asset: Asset = serde_json::from_value(json!({
            "id": 4, "name": "Bitcoin", "type": "crypto", "amount": 750,
            "unit": "EGP", "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(asset.kind(), AssetKind::Other);
        assert_eq!(asset.details, AssetDetails::Other("crypto".to_string()));
        assert_eq!(asset.details.type_name(), "crypto");
        assert_eq!(asset.kind().label(), "Cash");
        assert_eq!(asset.kind().color(), "#10b981");

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["type"], "crypto");
        assert_eq!(value["amount"], json!(750.0));
    }

    #[test]
    fn test_known_type_with_bad_payload_is_rejected() {
        let result = serde_json::from_value::<Asset>(json!({
            "id": 5, "name": "Ring", "type": "gold", "amount": 10, "purity": 19,
            "unit": "grams", "createdAt": "2024-05-01T10:00:00Z"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let asset = Asset {
            id: 7,
            name: "Salary".to_string(),
            amount: dec!(0),
            unit: "EGP".to_string(),
            created_at: created(),
            details: AssetDetails::Salary {
                monthly_salary: Some(dec!(20000)),
                start_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
                end_date: None,
            },
        };

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["type"], "salary");
        assert_eq!(value["monthlySalary"], json!(20000.0));
        assert_eq!(value["startDate"], "2024-02-01");
        assert!(value.get("endDate").is_none());
        assert_eq!(value["createdAt"], "2024-05-01T10:00:00Z");

        let back: Asset = serde_json::from_value(value).unwrap();
        assert_eq!(back, asset);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(AssetKind::Gold.default_unit(), "grams");
        assert_eq!(AssetKind::Silver.default_unit(), "grams");
        assert_eq!(AssetKind::Usd.default_unit(), "USD");
        assert_eq!(AssetKind::Rent.default_unit(), "EGP");
        assert_eq!(AssetKind::Usd.label(), "US Dollar");
        assert_eq!(AssetKind::Interest.color(), "#d8b4fe");
        assert_eq!(AssetKind::Rent.icon(), "🏠");
        assert!(AssetKind::Salary.is_time_based());
        assert!(!AssetKind::Gold.is_time_based());
    }

    #[test]
    fn test_new_asset_defaults_unit_and_trims_name() {
        let new_asset: NewAsset = serde_json::from_value(json!({
            "name": "  Coins  ", "type": "silver", "amount": 100, "unit": " "
        }))
        .unwrap();
        assert!(new_asset.validate().is_ok());

        let asset = new_asset.into_asset(42, created());
        assert_eq!(asset.id, 42);
        assert_eq!(asset.name, "Coins");
        assert_eq!(asset.unit, "grams");
        assert_eq!(asset.details, AssetDetails::Silver);
    }

    #[test]
    fn test_new_asset_requires_name() {
        let new_asset: NewAsset = serde_json::from_value(json!({
            "name": "   ", "type": "cash", "amount": 100
        }))
        .unwrap();
        assert!(new_asset.validate().is_err());
    }

    #[test]
    fn test_update_keeps_identity() {
        let existing = Asset {
            id: 9,
            name: "Old".to_string(),
            amount: dec!(1),
            unit: "EGP".to_string(),
            created_at: created(),
            details: AssetDetails::Cash,
        };
        let update: AssetUpdate = serde_json::from_value(json!({
            "name": "Dollars", "type": "usd", "amount": 250
        }))
        .unwrap();

        let updated = update.apply_to(&existing);
        assert_eq!(updated.id, 9);
        assert_eq!(updated.created_at, created());
        assert_eq!(updated.kind(), AssetKind::Usd);
        assert_eq!(updated.unit, "USD");
        assert_eq!(updated.amount, dec!(250));
    }

    #[test]
    fn test_days_held() {
        let asset = Asset {
            id: 1,
            name: "Cash".to_string(),
            amount: dec!(1),
            unit: "EGP".to_string(),
            created_at: created(),
            details: AssetDetails::Cash,
        };
        let later = Utc.with_ymd_and_hms(2024, 5, 11, 9, 59, 59).unwrap();
        assert_eq!(asset.days_held(later), 9);
        assert_eq!(asset.days_held(created() - chrono::Duration::days(3)), 0);
    }
}
