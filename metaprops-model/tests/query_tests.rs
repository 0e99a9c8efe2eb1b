use metaprops_model::{evaluation_order, order_for_evaluation, PropertyCodec, QueryTargetProperties};
use metaprops_types::FromTemplate;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::cmp::Ordering;

fn target(id: Option<&str>, query: &str) -> QueryTargetProperties {
    QueryTargetProperties {
        query_id: id.map(str::to_owned),
        query: Some(query.to_owned()),
        query_target_guid: Some("ds-1".to_owned()),
    }
}

// ── Wire form ────────────────────────────────────────────────────

#[test]
fn wire_form_has_no_discriminator() {
    let props = QueryTargetProperties::new("1", "select count(*) from orders", "ds-1");
    assert_eq!(
        serde_json::to_value(&props).unwrap(),
        json!({
            "queryId": "1",
            "query": "select count(*) from orders",
            "queryTargetGUID": "ds-1"
        })
    );
}

#[test]
fn decodes_through_untagged_codec() {
    let codec = PropertyCodec::default();
    let props: QueryTargetProperties = codec
        .decode_untagged(br#"{"queryId":"2","query":"q","ignored":true}"#)
        .unwrap();
    assert_eq!(props.query_id.as_deref(), Some("2"));
    assert_eq!(props.query_target_guid, None);
}

#[test]
fn empty_object_is_all_absent() {
    let props: QueryTargetProperties = serde_json::from_str("{}").unwrap();
    assert_eq!(props, QueryTargetProperties::default());
    assert_eq!(serde_json::to_string(&props).unwrap(), "{}");
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equality_covers_all_three_fields() {
    let a = QueryTargetProperties::new("1", "q", "ds-1");
    assert_eq!(a, QueryTargetProperties::new("1", "q", "ds-1"));
    assert_ne!(a, QueryTargetProperties::new("2", "q", "ds-1"));
    assert_ne!(a, QueryTargetProperties::new("1", "other", "ds-1"));
    assert_ne!(a, QueryTargetProperties::new("1", "q", "ds-2"));
}

#[test]
fn targets_differing_only_in_text_query_id_are_unequal() {
    let q1 = QueryTargetProperties::new("Q1", "select 1", "ds-1");
    let q2 = QueryTargetProperties::new("Q2", "select 1", "ds-1");
    assert_ne!(q1, q2);
    assert_eq!(evaluation_order(&q1, &q2), Ordering::Less);
}

#[test]
fn copy_from_template() {
    let template = QueryTargetProperties::new("1", "q", "ds-1");
    assert_eq!(QueryTargetProperties::from_template(Some(&template)), template);
    assert_eq!(
        QueryTargetProperties::from_template(None),
        QueryTargetProperties::default()
    );
}

// ── Evaluation order ─────────────────────────────────────────────

#[test]
fn numeric_ids_compare_as_numbers() {
    assert_eq!(
        evaluation_order(&target(Some("2"), "a"), &target(Some("10"), "b")),
        Ordering::Less
    );
}

#[test]
fn non_numeric_ids_compare_as_text() {
    assert_eq!(
        evaluation_order(&target(Some("b"), "a"), &target(Some("a"), "b")),
        Ordering::Greater
    );
    assert_eq!(
        evaluation_order(&target(Some("10"), "a"), &target(Some("9x"), "b")),
        Ordering::Less
    );
}

#[test]
fn missing_id_sorts_first() {
    assert_eq!(
        evaluation_order(&target(None, "a"), &target(Some("0"), "b")),
        Ordering::Less
    );
    assert_eq!(
        evaluation_order(&target(None, "a"), &target(None, "b")),
        Ordering::Equal
    );
}

#[test]
fn ordering_ignores_query_text_and_is_stable() {
    let mut targets = vec![
        target(Some("10"), "ten"),
        target(Some("2"), "two-a"),
        target(None, "unnumbered"),
        target(Some("2"), "two-b"),
        target(Some("1"), "one"),
    ];
    order_for_evaluation(&mut targets);
    let queries: Vec<_> = targets.iter().map(|t| t.query.as_deref().unwrap()).collect();
    assert_eq!(queries, vec!["unnumbered", "one", "two-a", "two-b", "ten"]);
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_quotes_only_the_query() {
    let props = QueryTargetProperties::new("1", "select 1", "ds-1");
    assert_eq!(
        props.to_string(),
        "QueryTargetProperties{queryId=1, query='select 1', queryTargetGUID=ds-1}"
    );
    assert_eq!(
        QueryTargetProperties::default().to_string(),
        "QueryTargetProperties{queryId=null, query=null, queryTargetGUID=null}"
    );
}
