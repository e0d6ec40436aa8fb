//! Flattening of raw GraphQL query results.
//!
//! The platform delivers generator input as the raw result of a GraphQL
//! query: relationship lists arrive as `{"edges": [{"node": ...}]}`
//! connections, single relations as `{"node": ...}`, and attributes as
//! `{"value": ...}` wrappers. [`clean_data`] collapses all of that into
//! plain scalar-or-nested-map shape so generators can read attributes
//! directly.
//!
//! The postcondition enforced by [`ensure_object`] is part of the
//! invocation contract: a cleaned root that is not a mapping aborts the
//! invocation.

use serde_json::{Map, Value};

use crate::error::{GeneratorError, GeneratorResult};

/// Metadata keys that may accompany a `value` attribute wrapper.
const ATTRIBUTE_METADATA_KEYS: &[&str] = &[
    "id",
    "__typename",
    "is_default",
    "is_protected",
    "is_visible",
    "source",
    "owner",
    "updated_at",
];

/// Flattens a raw GraphQL result into plain attribute maps.
///
/// - `{"edges": [{"node": N}, ...]}` becomes `[clean(N), ...]`
/// - `{"node": N}` becomes `clean(N)`
/// - `{"value": V}` (with only metadata siblings) becomes `clean(V)`
/// - objects and arrays are cleaned recursively, scalars pass through
///
/// Cleaning is idempotent: applying it to already-cleaned data returns the
/// same value.
pub fn clean_data(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(edges)) = map.get("edges") {
                return Value::Array(edges.iter().map(clean_edge).collect());
            }
            if let Some(node) = map.get("node") {
                return clean_data(node);
            }
            if is_attribute_wrapper(map) {
                return clean_data(&map["value"]);
            }
            Value::Object(
                map.iter()
                    .map(|(key, val)| (key.clone(), clean_data(val)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(clean_data).collect()),
        scalar => scalar.clone(),
    }
}

/// Unwraps a single connection edge.
fn clean_edge(edge: &Value) -> Value {
    match edge {
        Value::Object(map) if map.contains_key("node") => clean_data(&map["node"]),
        other => clean_data(other),
    }
}

/// Returns true if the object is an attribute wrapper: it carries a
/// `value` member and every other key is attribute metadata.
fn is_attribute_wrapper(map: &Map<String, Value>) -> bool {
    map.contains_key("value")
        && map
            .keys()
            .all(|key| key == "value" || ATTRIBUTE_METADATA_KEYS.contains(&key.as_str()))
}

/// Asserts that a cleaned payload is a mapping.
///
/// This is the only fatal condition in the generator contract; everything
/// else is a logged early return.
pub fn ensure_object(value: &Value) -> GeneratorResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| GeneratorError::payload("cleaned data is not an object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_clean_attribute_wrapper() {
        let raw = json!({"name": {"value": "web-tier"}, "vlan_id": {"value": 100}});
        let cleaned = clean_data(&raw);
        assert_eq!(cleaned, json!({"name": "web-tier", "vlan_id": 100}));
    }

    #[test]
    fn test_clean_edges_and_nodes() {
        let raw = json!({
            "ServiceNetworkSegment": {
                "edges": [
                    {
                        "node": {
                            "name": {"value": "web-tier"},
                            "deployment": {
                                "node": {
                                    "name": {"value": "dc1"},
                                    "devices": {
                                        "edges": [
                                            {"node": {"name": {"value": "leaf1"}, "role": {"value": "leaf"}}}
                                        ]
                                    }
                                }
                            }
                        }
                    }
                ]
            }
        });

        let cleaned = clean_data(&raw);
        assert_eq!(
            cleaned,
            json!({
                "ServiceNetworkSegment": [
                    {
                        "name": "web-tier",
                        "deployment": {
                            "name": "dc1",
                            "devices": [{"name": "leaf1", "role": "leaf"}]
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_clean_preserves_metadata_free_objects() {
        let raw = json!({"name": "already-clean", "vlan_id": 200});
        assert_eq!(clean_data(&raw), raw);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let raw = json!({
            "ServiceNetworkSegment": {
                "edges": [{"node": {"name": {"value": "a"}, "vlan_id": {"value": 1}}}]
            }
        });
        let once = clean_data(&raw);
        let twice = clean_data(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_wrapper_with_metadata_siblings() {
        let raw = json!({
            "name": {"value": "seg", "is_protected": false, "updated_at": "2025-01-01"}
        });
        assert_eq!(clean_data(&raw), json!({"name": "seg"}));
    }

    #[test]
    fn test_clean_does_not_collapse_domain_value_field() {
        // An object with a non-metadata sibling next to "value" is real data.
        let raw = json!({"value": 1, "weight": 2});
        assert_eq!(clean_data(&raw), json!({"value": 1, "weight": 2}));
    }

    #[test]
    fn test_clean_scalars_pass_through() {
        assert_eq!(clean_data(&json!(42)), json!(42));
        assert_eq!(clean_data(&json!("leaf")), json!("leaf"));
        assert_eq!(clean_data(&json!(null)), json!(null));
    }

    #[test]
    fn test_ensure_object_accepts_maps() {
        let value = json!({"ServiceNetworkSegment": []});
        assert!(ensure_object(&value).is_ok());
    }

    #[test]
    fn test_ensure_object_rejects_non_maps() {
        for value in [json!([]), json!("text"), json!(7), json!(null)] {
            let err = ensure_object(&value).unwrap_err();
            assert!(matches!(err, GeneratorError::Payload { .. }));
        }
    }
}
