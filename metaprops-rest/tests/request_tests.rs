use chrono::{TimeZone, Utc};
use metaprops_model::{CodecConfig, ExternalReferenceProperties, PropertyCodec};
use metaprops_rest::*;
use metaprops_types::{EffectiveDated, FromTemplate, Timestamp};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

// ── Fixtures ─────────────────────────────────────────────────────

fn at(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().into()
}

fn reference() -> ExternalReferenceProperties {
    let mut props = ExternalReferenceProperties {
        qualified_name: Some("ExternalReference::iso-8601".into()),
        reference_id: Some("iso-8601".into()),
        reference_title: Some("Date and time format".into()),
        authors: vec!["ISO/TC 154".into()],
        url: Some("https://www.iso.org/iso-8601-date-and-time-format.html".into()),
        ..Default::default()
    };
    props.set_effective_from(Some(at(2024, 1, 1)));
    props
}

fn correlation() -> MetadataCorrelationProperties {
    MetadataCorrelationProperties {
        asset_manager_guid: Some(uuid::Uuid::new_v4().to_string()),
        asset_manager_name: Some("catalog-east".into()),
        external_identifier: Some("ref-001".into()),
        key_pattern: Some(KeyPattern::LocalKey),
        synchronization_direction: Some(SynchronizationDirection::FromThirdParty),
        ..Default::default()
    }
}

fn body() -> ExternalReferenceRequestBody {
    let mut body = ExternalReferenceRequestBody::new(reference());
    body.anchor_guid = Some("anchor-1".into());
    body.request.metadata_correlation_properties = Some(Arc::new(correlation()));
    body.request.effective_time = Some(at(2025, 3, 1));
    body
}

// ── Wire form ────────────────────────────────────────────────────

#[test]
fn envelope_fields_are_siblings() {
    let encoded = serde_json::to_value(body()).unwrap();
    let object = encoded.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "anchorGUID",
            "effectiveTime",
            "elementProperties",
            "metadataCorrelationProperties"
        ]
    );
    assert_eq!(encoded["elementProperties"]["class"], "ExternalReferenceProperties");
    assert_eq!(encoded["effectiveTime"], json!(at(2025, 3, 1).as_millis()));
    assert_eq!(
        encoded["metadataCorrelationProperties"]["synchronizationDirection"],
        "FROM_THIRD_PARTY"
    );
}

#[test]
fn absent_anchor_is_omitted_and_reads_back_absent() {
    let mut body = body();
    body.anchor_guid = None;

    let codec = PropertyCodec::default();
    let bytes = body.to_json(&codec).unwrap();
    let encoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(encoded.get("anchorGUID").is_none());

    let decoded = ExternalReferenceRequestBody::from_json(&codec, &bytes).unwrap();
    assert_eq!(decoded.anchor_guid, None);
    assert_eq!(decoded, body);
}

#[test]
fn empty_envelope_is_empty_object() {
    let body = ExternalReferenceRequestBody::default();
    assert_eq!(serde_json::to_string(&body).unwrap(), "{}");

    let decoded = ExternalReferenceRequestBody::from_json(&PropertyCodec::default(), b"{}").unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn full_roundtrip_through_codec_and_serde() {
    let codec = PropertyCodec::default();
    let body = body();
    let bytes = body.to_json(&codec).unwrap();

    assert_eq!(ExternalReferenceRequestBody::from_json(&codec, &bytes).unwrap(), body);
    assert_eq!(
        serde_json::from_slice::<ExternalReferenceRequestBody>(&bytes).unwrap(),
        body
    );
}

#[test]
fn untagged_payload_is_accepted() {
    let decoded = ExternalReferenceRequestBody::from_json(
        &PropertyCodec::default(),
        br#"{"elementProperties":{"referenceId":"r1"},"anchorGUID":"a1"}"#,
    )
    .unwrap();
    let props = decoded.element_properties.unwrap();
    assert_eq!(props.reference_id.as_deref(), Some("r1"));
}

#[test]
fn unknown_envelope_fields_are_ignored() {
    let decoded = ExternalReferenceRequestBody::from_json(
        &PropertyCodec::default(),
        br#"{"anchorGUID":"a1","forLineage":true,"forDuplicateProcessing":false}"#,
    )
    .unwrap();
    assert_eq!(decoded.anchor_guid.as_deref(), Some("a1"));
}

// ── Errors ───────────────────────────────────────────────────────

#[test]
fn foreign_payload_kind_is_a_property_error() {
    let err = ExternalReferenceRequestBody::from_json(
        &PropertyCodec::default(),
        br#"{"elementProperties":{"class":"OwnerProperties","owner":"erin"}}"#,
    )
    .unwrap_err();
    match err {
        RequestError::Property { field, source } => {
            assert_eq!(field, "elementProperties");
            assert!(matches!(
                source,
                metaprops_types::Error::DiscriminatorMismatch { .. }
            ));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn serde_path_rejects_foreign_payload_too() {
    let result = serde_json::from_str::<ExternalReferenceRequestBody>(
        r#"{"elementProperties":{"class":"TaxonomyProperties"}}"#,
    );
    assert!(result.is_err());
}

#[test]
fn oversized_body_is_rejected() {
    let codec = PropertyCodec::new(CodecConfig {
        max_payload_bytes: 8,
        ..Default::default()
    });
    let err = ExternalReferenceRequestBody::from_json(&codec, br#"{"anchorGUID":"a1"}"#).unwrap_err();
    assert!(matches!(
        err,
        RequestError::Payload(metaprops_types::Error::PayloadTooLarge { limit: 8, .. })
    ));
}

#[test]
fn non_object_body_is_a_json_error() {
    let err = ExternalReferenceRequestBody::from_json(&PropertyCodec::default(), b"[1, 2]").unwrap_err();
    assert!(matches!(err, RequestError::Json(_)));
}

#[test]
fn bad_effective_time_is_a_json_error() {
    let err = ExternalReferenceRequestBody::from_json(
        &PropertyCodec::default(),
        br#"{"effectiveTime":"tomorrow"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, RequestError::Json(_)));
}

// ── Sharing and copies ───────────────────────────────────────────

#[test]
fn clone_shares_nested_objects() {
    let original = body();
    let copy = original.clone();
    assert!(Arc::ptr_eq(
        original.element_properties.as_ref().unwrap(),
        copy.element_properties.as_ref().unwrap()
    ));
    assert!(Arc::ptr_eq(
        original.request.metadata_correlation_properties.as_ref().unwrap(),
        copy.request.metadata_correlation_properties.as_ref().unwrap()
    ));
    assert_eq!(copy, original);
}

#[test]
fn mutation_copies_on_write() {
    let original = body();
    let mut copy = ExternalReferenceRequestBody::from_template(Some(&original));
    copy.element_properties_mut().reference_title = Some("changed".into());
    copy.request.metadata_correlation_properties_mut().external_identifier = None;

    assert_eq!(
        original.element_properties.as_ref().unwrap().reference_title.as_deref(),
        Some("Date and time format")
    );
    assert_eq!(
        original
            .request
            .metadata_correlation_properties
            .as_ref()
            .unwrap()
            .external_identifier
            .as_deref(),
        Some("ref-001")
    );
    assert!(!Arc::ptr_eq(
        original.element_properties.as_ref().unwrap(),
        copy.element_properties.as_ref().unwrap()
    ));
    assert_ne!(copy, original);
}

#[test]
fn mutable_accessors_create_absent_objects() {
    let mut body = ExternalReferenceRequestBody::default();
    body.element_properties_mut().reference_id = Some("r9".into());
    body.request.metadata_correlation_properties_mut().asset_manager_name = Some("m".into());
    assert!(body.element_properties.is_some());
    assert!(body.request.metadata_correlation_properties.is_some());
}

#[test]
fn copy_from_absent_template_is_default() {
    assert_eq!(
        ExternalReferenceRequestBody::from_template(None),
        ExternalReferenceRequestBody::default()
    );
    assert_eq!(UpdateRequestBody::from_template(None), UpdateRequestBody::default());
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equality_covers_every_field() {
    let base = body();

    let mut other = base.clone();
    other.anchor_guid = Some("anchor-2".into());
    assert_ne!(other, base);

    let mut other = base.clone();
    other.request.effective_time = None;
    assert_ne!(other, base);

    let mut other = base.clone();
    let mut bag = metaprops_types::PropertyBag::new();
    bag.insert("note", "x");
    other.element_properties_mut().set_extended_properties(Some(bag));
    assert_ne!(other, base);
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_lists_envelope_fields_in_order() {
    let body = ExternalReferenceRequestBody {
        anchor_guid: Some("a1".into()),
        ..Default::default()
    };
    assert_eq!(
        body.to_string(),
        "ExternalReferenceRequestBody{elementProperties=null, anchorGUID='a1', \
         metadataCorrelationProperties=null, effectiveTime=null}"
    );
}

#[test]
fn display_nests_payload() {
    let text = body().to_string();
    assert!(text.starts_with("ExternalReferenceRequestBody{elementProperties=ExternalReferenceProperties{referenceId='iso-8601'"));
    assert!(text.contains("keyPattern=LOCAL_KEY"));
    assert!(text.ends_with("effectiveTime=2025-03-01 00:00:00 UTC}"));
}

// ── Update request ───────────────────────────────────────────────

#[test]
fn update_request_roundtrip() {
    let codec = PropertyCodec::default();
    let request = UpdateRequestBody {
        metadata_correlation_properties: Some(Arc::new(correlation())),
        effective_time: Some(at(2025, 1, 1)),
    };
    let bytes = request.to_json(&codec).unwrap();
    assert_eq!(UpdateRequestBody::from_json(&codec, &bytes).unwrap(), request);
}

#[test]
fn sub_millisecond_effective_time_roundtrips() {
    let codec = PropertyCodec::default();
    let fine = chrono::DateTime::from_timestamp(1_740_787_200, 987_654_321).unwrap();
    let mut body = body();
    body.request.effective_time = Some(fine.into());

    let bytes = body.to_json(&codec).unwrap();
    let decoded = ExternalReferenceRequestBody::from_json(&codec, &bytes).unwrap();
    assert_eq!(decoded.request.effective_time.map(|at| at.as_millis()), Some(1_740_787_200_987));
    assert_eq!(decoded, body);
}
