//! Schema-driven planning.
//!
//! The planner fills in declared defaults and carries computed values the
//! proposal leaves unset, at the top level and inside nested blocks. List
//! and set block elements are matched with prior state by position. Changes
//! are then reported per top-level attribute or block, and the plan is
//! marked as a replacement when a `force_new` attribute changes.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::schema::{Block, BlockNestingMode, Schema};
use crate::types::{AttributeChange, PlanResult};

/// Plan the transition from `prior` to `proposed` for a resource with `schema`.
///
/// A `Null` proposal destroys the resource.
pub fn plan(schema: &Schema, prior: Option<&Value>, proposed: Value) -> PlanResult {
    let prior = prior.filter(|p| !p.is_null());

    if proposed.is_null() {
        let changes = match prior {
            Some(Value::Object(before)) => before
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| AttributeChange::removed(k.clone(), v.clone()))
                .collect(),
            _ => Vec::new(),
        };
        return PlanResult::with_changes(Value::Null, changes, false);
    }

    let before = prior.and_then(Value::as_object);
    let mut planned = match proposed {
        Value::Object(map) => map,
        other => return PlanResult::no_change(other),
    };

    fill_unset(&schema.block, &mut planned, before);

    let empty = Map::new();
    let before = before.unwrap_or(&empty);
    let keys: BTreeSet<&String> = before.keys().chain(planned.keys()).collect();
    let mut changes = Vec::new();
    let mut requires_replace = false;

    for key in keys {
        let old = before.get(key).filter(|v| !absent(v));
        let new = planned.get(key).filter(|v| !absent(v));
        let change = match (old, new) {
            (None, None) => continue,
            (Some(a), Some(b)) if same(a, b) => continue,
            (None, Some(b)) => AttributeChange::added(key.clone(), b.clone()),
            (Some(a), None) => AttributeChange::removed(key.clone(), a.clone()),
            (Some(a), Some(b)) => AttributeChange::modified(key.clone(), a.clone(), b.clone()),
        };

        let force_new = schema
            .block
            .attributes
            .get(key.as_str())
            .is_some_and(|attr| attr.force_new);
        if prior.is_some() && force_new {
            requires_replace = true;
        }
        changes.push(change);
    }

    PlanResult::with_changes(Value::Object(planned), changes, requires_replace)
}

/// Apply defaults and computed carry-over to `planned`, recursing into
/// nested blocks.
fn fill_unset(block: &Block, planned: &mut Map<String, Value>, before: Option<&Map<String, Value>>) {
    for (name, attr) in &block.attributes {
        if planned.get(name).is_some_and(|v| !v.is_null()) {
            continue;
        }
        if attr.flags.computed {
            if let Some(value) = before.and_then(|b| b.get(name)).filter(|v| !v.is_null()) {
                planned.insert(name.clone(), value.clone());
                continue;
            }
        }
        if let Some(default) = &attr.default {
            planned.insert(name.clone(), default.clone());
        }
    }

    for (name, nested) in &block.blocks {
        let prior = before.and_then(|b| b.get(name));
        match (nested.nesting_mode, planned.get_mut(name)) {
            (BlockNestingMode::Single, Some(Value::Object(item))) => {
                fill_unset(&nested.block, item, prior.and_then(Value::as_object));
            },
            (_, Some(Value::Array(items))) => {
                let prior_items = prior.and_then(Value::as_array);
                for (i, item) in items.iter_mut().enumerate() {
                    if let Value::Object(item) = item {
                        let prior_item = prior_items.and_then(|p| p.get(i));
                        fill_unset(&nested.block, item, prior_item.and_then(Value::as_object));
                    }
                }
            },
            _ => {},
        }
    }
}

/// Null and an empty list both mean "not set".
fn absent(value: &Value) -> bool {
    value.is_null() || value.as_array().is_some_and(Vec::is_empty)
}

/// Equality that ignores unset object members and compares numbers by value.
fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            keys.into_iter().all(|k| match (a.get(k), b.get(k)) {
                (Some(x), Some(y)) => same(x, y),
                (Some(v), None) | (None, Some(v)) => absent(v),
                (None, None) => true,
            })
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
        },
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::{Attribute, NestedBlock};

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("name", Attribute::required_string())
            .with_attribute("owner", Attribute::required_string().with_force_new())
            .with_attribute(
                "active",
                Attribute::optional_bool().with_default(json!(true)),
            )
    }

    #[test]
    fn test_create_reports_every_attribute() {
        let result = plan(&schema(), None, json!({"name": "a", "owner": "team-1"}));

        assert!(!result.requires_replace);
        assert_eq!(
            result.planned_state,
            json!({"name": "a", "owner": "team-1", "active": true})
        );
        let paths: Vec<_> = result.changes.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["active", "name", "owner"]);
    }

    #[test]
    fn test_computed_values_carried_from_prior() {
        let prior = json!({"id": "1", "name": "a", "owner": "team-1", "active": true});
        let result = plan(
            &schema(),
            Some(&prior),
            json!({"id": null, "name": "a", "owner": "team-1"}),
        );

        assert_eq!(result.planned_state, prior);
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_in_place_update() {
        let prior = json!({"id": "1", "name": "a", "owner": "team-1", "active": true});
        let result = plan(
            &schema(),
            Some(&prior),
            json!({"name": "b", "owner": "team-1", "active": false}),
        );

        assert!(!result.requires_replace);
        assert_eq!(
            result.changes,
            vec![
                AttributeChange::modified("active", json!(true), json!(false)),
                AttributeChange::modified("name", json!("a"), json!("b")),
            ]
        );
    }

    #[test]
    fn test_force_new_change_requires_replace() {
        let prior = json!({"id": "1", "name": "a", "owner": "team-1", "active": true});
        let result = plan(
            &schema(),
            Some(&prior),
            json!({"name": "a", "owner": "team-2", "active": true}),
        );

        assert!(result.requires_replace);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].path, "owner");
    }

    #[test]
    fn test_null_proposal_destroys() {
        let prior = json!({"id": "1", "name": "a", "owner": null});
        let result = plan(&schema(), Some(&prior), Value::Null);

        assert!(result.is_destroy());
        assert_eq!(result.changes.len(), 2);
        assert!(result.changes.iter().all(|c| c.after.is_none()));

        let nothing = plan(&schema(), None, Value::Null);
        assert!(nothing.is_destroy());
        assert!(nothing.changes.is_empty());
    }

    #[test]
    fn test_removed_optional_attribute() {
        let schema = Schema::v0().with_attribute("description", Attribute::optional_string());
        let prior = json!({"description": "old"});
        let result = plan(&schema, Some(&prior), json!({}));

        assert_eq!(
            result.changes,
            vec![AttributeChange::removed("description", json!("old"))]
        );
    }

    fn slots_schema() -> Schema {
        let slot = Block::new()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("name", Attribute::required_string())
            .with_attribute(
                "primary",
                Attribute::optional_bool().with_default(json!(false)),
            )
            .with_attribute("kind", Attribute::optional_string());
        let window = Block::new()
            .with_attribute("size", Attribute::required_string())
            .with_attribute("order", Attribute::computed_int64());

        Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_block("slots", NestedBlock::list(slot))
            .with_block("window", NestedBlock::single(window))
    }

    #[test]
    fn test_nested_computed_values_carried_by_position() {
        let prior = json!({
            "id": "1",
            "slots": [
                {"id": "s1", "name": "a", "primary": false, "kind": null},
                {"id": "s2", "name": "b", "primary": true, "kind": null},
            ],
            "window": {"size": "1h", "order": 3},
        });
        let result = plan(
            &slots_schema(),
            Some(&prior),
            json!({
                "slots": [{"name": "a"}, {"name": "b", "primary": true}],
                "window": {"size": "1h"},
            }),
        );

        assert!(result.changes.is_empty(), "{:?}", result.changes);
        assert_eq!(result.planned_state["slots"][0]["id"], "s1");
        assert_eq!(result.planned_state["slots"][1]["id"], "s2");
        assert_eq!(result.planned_state["window"]["order"], 3);
    }

    #[test]
    fn test_nested_defaults_filled_on_create() {
        let result = plan(&slots_schema(), None, json!({"slots": [{"name": "a"}]}));
        assert_eq!(
            result.planned_state["slots"],
            json!([{"name": "a", "primary": false}])
        );
    }

    #[test]
    fn test_nested_change_reported_on_block() {
        let prior = json!({
            "id": "1",
            "slots": [{"id": "s1", "name": "a", "primary": false}],
        });
        let result = plan(
            &slots_schema(),
            Some(&prior),
            json!({"slots": [{"name": "renamed"}, {"name": "extra"}]}),
        );

        let paths: Vec<_> = result.changes.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["slots"]);
        assert_eq!(result.planned_state["slots"][0]["id"], "s1");
        assert!(result.planned_state["slots"][1].get("id").is_none());
    }

    #[test]
    fn test_empty_block_list_matches_absent_block() {
        let prior = json!({"id": "1", "slots": []});
        let result = plan(&slots_schema(), Some(&prior), json!({}));
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_integer_and_float_forms_compare_equal() {
        let schema = Schema::v0().with_attribute("target", Attribute::required_float64());
        let prior = json!({"target": 99.0});
        let result = plan(&schema, Some(&prior), json!({"target": 99}));
        assert!(result.changes.is_empty());
    }
}
