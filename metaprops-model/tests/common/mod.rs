//! Shared fixtures for model tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use metaprops_model::*;
use metaprops_types::{EffectiveDated, Effectivity, PropertyBag, Timestamp};
use serde_json::json;
use std::collections::BTreeMap;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn at(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().into()
}

pub fn guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn window() -> Effectivity {
    let mut window = Effectivity::new(Some(at(2024, 1, 1)), Some(at(2026, 1, 1)));
    window.set_extended_properties(Some(bag()));
    window
}

pub fn bag() -> PropertyBag {
    [
        ("legacyCode", json!("LC-7")),
        ("reviewed", json!(true)),
        ("weights", json!([1, 2.5, {"nested": null}])),
    ]
    .into_iter()
    .collect()
}

pub fn governance_details() -> GovernanceDetails {
    GovernanceDetails {
        status: 3,
        confidence: 80,
        steward: Some("u123".into()),
        steward_type_name: Some("UserIdentity".into()),
        steward_property_name: Some("userId".into()),
        source: Some("quarterly-review".into()),
        notes: Some("confirmed by records team".into()),
    }
}

pub fn retention() -> RetentionClassificationProperties {
    RetentionClassificationProperties {
        governance: governance_details(),
        associated_guid: Some(guid()),
        archive_after: Some(at(2030, 6, 30)),
        delete_after: Some(at(2035, 6, 30)),
        effectivity: window(),
    }
}

pub fn owner() -> OwnerProperties {
    OwnerProperties {
        owner: Some("erin".into()),
        owner_type_name: Some("Person".into()),
        owner_property_name: Some("name".into()),
        effectivity: window(),
    }
}

/// One fully populated value of every registered classification kind.
pub fn all_kinds() -> Vec<ClassificationProperties> {
    vec![
        ActivityDescriptionProperties {
            activity_type: 2,
            description: Some("quarter close".into()),
            effectivity: window(),
        }
        .into(),
        AssetOriginProperties {
            organization_guid: Some(guid()),
            organization_property_name: Some("guid".into()),
            business_capability_guid: Some(guid()),
            business_capability_property_name: Some("guid".into()),
            other_origin_values: BTreeMap::from([("region".into(), "emea".into())]),
            effectivity: window(),
        }
        .into(),
        CanonicalVocabularyProperties {
            scope: Some("finance".into()),
            effectivity: window(),
        }
        .into(),
        DataFieldValuesProperties {
            default_value: Some("0".into()),
            sample_values: vec!["1".into(), "42".into()],
            data_pattern: vec!["^[0-9]+$".into()],
            name_pattern: vec![".*_count$".into()],
            effectivity: window(),
        }
        .into(),
        EditingGlossaryProperties {
            description: Some("draft edits".into()),
            effectivity: window(),
        }
        .into(),
        GlossaryTermContextDefinition {
            description: Some("used in billing".into()),
            scope: Some("billing".into()),
            effectivity: window(),
        }
        .into(),
        GovernanceClassificationBase {
            governance: governance_details(),
            effectivity: window(),
        }
        .into(),
        GovernanceClassificationProperties {
            governance: governance_details(),
            level_identifier: 4,
            effectivity: window(),
        }
        .into(),
        retention().into(),
        owner().into(),
        SecurityTagsProperties {
            security_labels: vec!["pii".into(), "restricted".into()],
            security_properties: [("clearance", json!(3))].into_iter().collect(),
            access_groups: BTreeMap::from([(
                "read".into(),
                vec!["analysts".into(), "auditors".into()],
            )]),
            effectivity: window(),
        }
        .into(),
        StagingGlossaryProperties {
            description: Some("pending publication".into()),
            effectivity: window(),
        }
        .into(),
        SubjectAreaMemberProperties {
            subject_area_name: Some("Customer".into()),
            effectivity: window(),
        }
        .into(),
        TaxonomyProperties {
            organizing_principle: Some("by product line".into()),
            effectivity: window(),
        }
        .into(),
    ]
}
