use metaprops_types::FieldDump;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One query contributing part of a derived value.
///
/// `query_id` says where the result is plugged in: targets with lower ids
/// are evaluated first, and their results may be substituted into the query
/// text of targets with higher ids or into the parent formula. Nothing here
/// runs queries or checks that ids are unique; the owning collection is
/// responsible for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTargetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    /// Query text, possibly with placeholders for lower-id results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Data source the query runs against.
    #[serde(rename = "queryTargetGUID", default, skip_serializing_if = "Option::is_none")]
    pub query_target_guid: Option<String>,
}

impl QueryTargetProperties {
    pub fn new(
        query_id: impl Into<String>,
        query: impl Into<String>,
        query_target_guid: impl Into<String>,
    ) -> Self {
        Self {
            query_id: Some(query_id.into()),
            query: Some(query.into()),
            query_target_guid: Some(query_target_guid.into()),
        }
    }
}

impl fmt::Display for QueryTargetProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "QueryTargetProperties")
            .optional("queryId", self.query_id.as_ref())
            .text("query", self.query.as_deref())
            .optional("queryTargetGUID", self.query_target_guid.as_ref())
            .finish()
    }
}

/// Compares two targets by evaluation order.
///
/// Only `query_id` is considered. A missing id sorts first; two numeric ids
/// compare as numbers, anything else compares as text.
pub fn evaluation_order(a: &QueryTargetProperties, b: &QueryTargetProperties) -> Ordering {
    match (a.query_id.as_deref(), b.query_id.as_deref()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => a.cmp(b),
        },
    }
}

/// Sorts targets into evaluation order. Targets with equal ids keep their
/// relative order.
pub fn order_for_evaluation(targets: &mut [QueryTargetProperties]) {
    targets.sort_by(evaluation_order);
}
