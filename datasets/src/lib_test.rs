use super::*;

fn ercot(raw: &str) -> ErcotQueueSummary {
    decode(DatasetKind::ErcotQueue, raw.as_bytes()).expect("ercot decode")
}

fn permits(raw: &str) -> PermitsSummary {
    decode(DatasetKind::Permits, raw.as_bytes()).expect("permits decode")
}

fn enforcement(raw: &str) -> EnforcementSummary {
    decode(DatasetKind::Enforcement, raw.as_bytes()).expect("enforcement decode")
}

#[test]
fn dataset_paths_live_under_data() {
    for kind in DatasetKind::ALL {
        assert_eq!(kind.path(), format!("/data/{}", kind.file_name()));
        assert!(kind.file_name().starts_with(kind.name()));
    }
}

#[test]
fn ercot_decodes_full_document() {
    let summary = ercot(
        r#"{
            "updated_at": "2025-01-05T06:00:00",
            "total_projects": 1834,
            "total_capacity_gw": 412.7,
            "by_fuel_type": {
                "Solar": {"capacity_mw": 150000.0, "capacity_gw": 150.0, "count": 700},
                "Wind": {"capacity_mw": 42000.0, "count": 120}
            },
            "by_status": {"IA Signed": 400, "Planning": 900}
        }"#,
    );
    assert_eq!(summary.updated_at.as_deref(), Some("2025-01-05T06:00:00"));
    assert_eq!(summary.total_projects, 1834.0);
    assert_eq!(summary.total_capacity_gw, 412.7);
    let fuels = summary.by_fuel_type.expect("fuel mapping");
    assert_eq!(fuels.len(), 2);
    let solar = fuels.get("Solar").expect("solar");
    assert_eq!(solar.capacity_gw, Some(150.0));
    assert_eq!(solar.count, Some(700.0));
    let wind = fuels.get("Wind").expect("wind");
    assert_eq!(wind.capacity_gw, None);
    assert_eq!(wind.capacity_mw, Some(42000.0));
    assert_eq!(summary.by_status.expect("status").get("Planning"), Some(&900.0));
}

#[test]
fn mapping_entries_keep_document_order() {
    let summary = permits(r#"{"by_basin": {"Permian": 5, "Barnett": 1, "Anadarko": 3}}"#);
    let labels: Vec<&str> = summary.by_basin.as_ref().expect("basins").iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Permian", "Barnett", "Anadarko"]);
}

#[test]
fn non_numeric_counts_coerce_to_zero() {
    let summary = permits(r#"{"total_permits_30d": "lots", "by_county": {"MIDLAND": "12", "REEVES": null, "KARNES": 4}}"#);
    assert_eq!(summary.total_permits_30d, 0.0);
    let counties = summary.by_county.expect("counties");
    assert_eq!(counties.get("MIDLAND"), Some(&0.0));
    assert_eq!(counties.get("REEVES"), Some(&0.0));
    assert_eq!(counties.get("KARNES"), Some(&4.0));
}

#[test]
fn absent_null_or_malformed_mappings_decode_as_none() {
    let summary = permits(r#"{"by_basin": null, "by_county": ["MIDLAND"]}"#);
    assert_eq!(summary.by_basin, None);
    assert_eq!(summary.by_county, None);

    let empty = ercot("{}");
    assert_eq!(empty, ErcotQueueSummary::default());
}

#[test]
fn fuel_info_ignores_non_numeric_fields() {
    let summary = ercot(r#"{"by_fuel_type": {"Gas": {"capacity_gw": "n/a", "count": 9}, "Coal": 12}}"#);
    let fuels = summary.by_fuel_type.expect("fuel mapping");
    assert_eq!(fuels.get("Gas"), Some(&FuelInfo { capacity_gw: None, capacity_mw: None, count: Some(9.0) }));
    assert_eq!(fuels.get("Coal"), Some(&FuelInfo::default()));
}

#[test]
fn enforcement_items_keep_order_and_skip_non_objects() {
    let summary = enforcement(
        r#"{
            "total_recent": 57,
            "major_violations": 3,
            "items": [
                {"headline": "ABC Operating LLC: Unpermitted Disposal", "status": "Pending", "date": "2025-01-04", "major": true},
                "garbage",
                {"headline": "Eagle Ford Resources: Well Plugging", "docket_number": 20245511},
                {"status": "Resolved"}
            ]
        }"#,
    );
    assert_eq!(summary.total_recent, 57.0);
    assert_eq!(summary.major_violations, 3.0);
    let items = summary.items.expect("items");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].headline, "ABC Operating LLC: Unpermitted Disposal");
    assert!(items[0].major);
    assert_eq!(items[1].docket_number.as_deref(), Some("20245511"));
    assert!(!items[1].major);
    assert_eq!(items[2].headline, "");
    assert_eq!(items[2].status.as_deref(), Some("Resolved"));
}

#[test]
fn enforcement_items_non_array_is_none() {
    let summary = enforcement(r#"{"items": {"headline": "x"}}"#);
    assert_eq!(summary.items, None);
}

#[test]
fn decode_rejects_invalid_json_and_non_objects() {
    let err = decode::<PermitsSummary>(DatasetKind::Permits, b"<html>404</html>").unwrap_err();
    assert!(matches!(err, DatasetError::Decode { name: "rrc_permits.json", .. }));

    let err = decode::<PermitsSummary>(DatasetKind::Permits, b"[1, 2, 3]").unwrap_err();
    assert!(err.to_string().contains("expected a JSON object"));
}

#[test]
fn stamp_reads_updated_at_from_any_dataset() {
    let stamp: DatasetStamp = decode(DatasetKind::Enforcement, br#"{"updated_at": "2025-01-05", "items": []}"#).unwrap();
    assert_eq!(stamp.updated_at.as_deref(), Some("2025-01-05"));
    let stamp: DatasetStamp = decode(DatasetKind::Enforcement, b"{}").unwrap();
    assert_eq!(stamp.updated_at, None);
}

#[test]
fn breakdown_serializes_as_ordered_map() {
    let tally: Tally = vec![("b".to_owned(), 2.0), ("a".to_owned(), 1.0)].into_iter().collect();
    assert_eq!(serde_json::to_string(&tally).unwrap(), r#"{"b":2.0,"a":1.0}"#);
}
