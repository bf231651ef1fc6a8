//! Configuration validation against a [`Schema`].
//!
//! Produces one [`Diagnostic`] per problem, attributed to the dotted path it
//! was found at (`filters.0.entity_type`). Computed-only attributes are not
//! checked; the platform owns them.
//!
//! # Example
//!
//! ```
//! use observability_provider::schema::{Schema, Attribute};
//! use observability_provider::validation::validate;
//! use serde_json::json;
//!
//! let schema = Schema::v0()
//!     .with_attribute("name", Attribute::required_string())
//!     .with_attribute("entity_type", Attribute::required_string().with_one_of(["logs", "spans"]));
//!
//! let diagnostics = validate(&schema, &json!({"name": "prod", "entity_type": "logs"}));
//! assert!(diagnostics.is_empty());
//!
//! let diagnostics = validate(&schema, &json!({"name": "prod", "entity_type": "metrics"}));
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].attribute, Some("entity_type".to_string()));
//! ```

use serde_json::Value;

use crate::schema::{Attribute, AttributeType, Block, BlockNestingMode, Diagnostic, NestedBlock, Schema};

/// Every problem with `value` as configuration for `schema`. Empty means valid.
pub fn validate(schema: &Schema, value: &Value) -> Vec<Diagnostic> {
    let mut validator = Validator::default();
    validator.block(&schema.block, value, "");
    validator.diagnostics
}

/// [`validate`] as a `Result`.
pub fn validate_result(schema: &Schema, value: &Value) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = validate(schema, value);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

pub fn is_valid(schema: &Schema, value: &Value) -> bool {
    validate(schema, value).is_empty()
}

#[derive(Default)]
struct Validator {
    diagnostics: Vec<Diagnostic>,
}

impl Validator {
    fn block(&mut self, block: &Block, value: &Value, path: &str) {
        let obj = match value {
            Value::Object(obj) => obj,
            Value::Null => return,
            other => {
                let mut diag = Diagnostic::error("Expected object")
                    .with_detail(format!("Got {}", type_name(other)));
                if !path.is_empty() {
                    diag = diag.with_attribute(path);
                }
                self.diagnostics.push(diag);
                return;
            },
        };

        for (name, attr) in &block.attributes {
            self.attribute(attr, obj.get(name), &join(path, name));
        }
        for (name, nested) in &block.blocks {
            self.nested(nested, obj.get(name), &join(path, name));
        }
    }

    fn attribute(&mut self, attr: &Attribute, value: Option<&Value>, path: &str) {
        if attr.flags.is_computed_only() {
            return;
        }
        let value = match value {
            Some(v) if !v.is_null() => v,
            _ => {
                if attr.flags.required {
                    self.diagnostics.push(
                        Diagnostic::error(format!("Missing required attribute '{}'", path))
                            .with_detail("This attribute is required and must be provided")
                            .with_attribute(path),
                    );
                }
                return;
            },
        };

        let before = self.diagnostics.len();
        self.value(&attr.attr_type, value, path);
        // Allowed values are only meaningful once the shape is right.
        if self.diagnostics.len() == before {
            if let Some(allowed) = &attr.one_of {
                self.one_of(allowed, value, path);
            }
        }
    }

    fn value(&mut self, attr_type: &AttributeType, value: &Value, path: &str) {
        let ok = match attr_type {
            AttributeType::String => value.is_string(),
            AttributeType::Int64 => is_int64(value),
            AttributeType::Float64 => value.is_number(),
            AttributeType::Bool => value.is_boolean(),
            AttributeType::List(element) | AttributeType::Set(element) => {
                let Some(items) = value.as_array() else {
                    return self.type_error(path, attr_type, value);
                };
                for (i, item) in items.iter().enumerate() {
                    self.value(element, item, &format!("{}.{}", path, i));
                }
                if matches!(attr_type, AttributeType::Set(_)) && has_duplicates(items) {
                    self.diagnostics.push(
                        Diagnostic::error(format!("Duplicate set element in '{}'", path))
                            .with_detail("Set elements must be unique")
                            .with_attribute(path),
                    );
                }
                true
            },
            AttributeType::Map(element) => {
                let Some(entries) = value.as_object() else {
                    return self.type_error(path, attr_type, value);
                };
                for (key, item) in entries {
                    self.value(element, item, &format!("{}.{}", path, key));
                }
                true
            },
        };
        if !ok {
            self.type_error(path, attr_type, value);
        }
    }

    fn one_of(&mut self, allowed: &[String], value: &Value, path: &str) {
        let mut check = |s: &str, at: String| {
            if !allowed.iter().any(|a| a == s) {
                self.diagnostics.push(
                    Diagnostic::error(format!("Invalid value for attribute '{}'", at))
                        .with_detail(format!("Expected one of [{}], got {:?}", allowed.join(", "), s))
                        .with_attribute(at),
                );
            }
        };
        match value {
            Value::String(s) => check(s, path.to_string()),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if let Some(s) = item.as_str() {
                        check(s, format!("{}.{}", path, i));
                    }
                }
            },
            _ => {},
        }
    }

    fn nested(&mut self, nested: &NestedBlock, value: Option<&Value>, path: &str) {
        let value = value.filter(|v| !v.is_null());
        match (nested.nesting_mode, value) {
            (BlockNestingMode::Single, None) => {
                if nested.min_items > 0 {
                    self.diagnostics.push(
                        Diagnostic::error(format!("Missing required block '{}'", path))
                            .with_detail("At least one block is required")
                            .with_attribute(path),
                    );
                }
            },
            (BlockNestingMode::Single, Some(v)) => self.block(&nested.block, v, path),
            (_, None) => self.item_count(nested, 0, path),
            (_, Some(Value::Array(items))) => {
                self.item_count(nested, items.len(), path);
                for (i, item) in items.iter().enumerate() {
                    self.block(&nested.block, item, &format!("{}.{}", path, i));
                }
            },
            (_, Some(other)) => self.diagnostics.push(
                Diagnostic::error(format!("Expected list for block '{}'", path))
                    .with_detail(format!("Got {}", type_name(other)))
                    .with_attribute(path),
            ),
        }
    }

    fn item_count(&mut self, nested: &NestedBlock, len: usize, path: &str) {
        let len = len as u32;
        if len < nested.min_items {
            self.diagnostics.push(
                Diagnostic::error(format!(
                    "Block '{}' requires at least {} item(s), got {}",
                    path, nested.min_items, len
                ))
                .with_attribute(path),
            );
        }
        if nested.max_items > 0 && len > nested.max_items {
            self.diagnostics.push(
                Diagnostic::error(format!(
                    "Block '{}' allows at most {} item(s), got {}",
                    path, nested.max_items, len
                ))
                .with_attribute(path),
            );
        }
    }

    fn type_error(&mut self, path: &str, expected: &AttributeType, got: &Value) {
        let expected = match expected {
            AttributeType::String => "string",
            AttributeType::Int64 => "int64",
            AttributeType::Float64 => "float64",
            AttributeType::Bool => "bool",
            AttributeType::List(_) => "list",
            AttributeType::Set(_) => "set",
            AttributeType::Map(_) => "map",
        };
        self.diagnostics.push(
            Diagnostic::error(format!("Invalid type for attribute '{}'", path))
                .with_detail(format!("Expected {}, got {}", expected, type_name(got)))
                .with_attribute(path),
        );
    }
}

fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", base, name)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integers, including floats with no fractional part (`30.0`).
fn is_int64(value: &Value) -> bool {
    let Value::Number(n) = value else {
        return false;
    };
    n.is_i64()
        || n
            .as_f64()
            .is_some_and(|f| f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64)
}

fn has_duplicates(items: &[Value]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].contains(a))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::AttributeFlags;

    #[test]
    fn test_required_and_computed() {
        let schema = Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("display_name", Attribute::required_string());

        assert!(validate(&schema, &json!({"display_name": "prod", "id": 7})).is_empty());

        let diagnostics = validate(&schema, &json!({"display_name": null}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("display_name"));
        assert!(diagnostics[0].summary.starts_with("Missing required attribute"));

        let diagnostics = validate(&schema, &json!({"display_name": 123}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].detail.as_deref(), Some("Expected string, got number"));
    }

    #[test]
    fn test_numbers() {
        let schema = Schema::v0()
            .with_attribute("request_timeout_seconds", Attribute::optional_int64())
            .with_attribute("target_threshold_percentage", Attribute::required_float64());

        assert!(validate(
            &schema,
            &json!({"request_timeout_seconds": 30.0, "target_threshold_percentage": 99})
        )
        .is_empty());

        let diagnostics = validate(
            &schema,
            &json!({"request_timeout_seconds": 30.5, "target_threshold_percentage": "99"}),
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_one_of() {
        let schema = Schema::v0()
            .with_attribute(
                "slo_time_frame",
                Attribute::optional_string().with_one_of(["7d", "14d", "21d", "28d"]),
            )
            .with_attribute(
                "presets",
                Attribute::string_set(AttributeFlags::optional()).with_one_of(["logs", "spans"]),
            );

        assert!(validate(&schema, &json!({"slo_time_frame": "28d", "presets": ["logs"]})).is_empty());

        let diagnostics = validate(&schema, &json!({"slo_time_frame": "30d"}));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .detail
            .as_deref()
            .unwrap_or_default()
            .contains("7d, 14d, 21d, 28d"));

        let diagnostics = validate(&schema, &json!({"presets": ["logs", "metrics"]}));
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("presets.1"));

        // A type error is reported alone.
        let diagnostics = validate(&schema, &json!({"slo_time_frame": 28}));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].summary.contains("Invalid type"));
    }

    #[test]
    fn test_collections() {
        let schema = Schema::v0()
            .with_attribute("members", Attribute::string_set(AttributeFlags::optional()))
            .with_attribute("labels", Attribute::string_map(AttributeFlags::optional()))
            .with_attribute(
                "ports",
                Attribute::new(AttributeType::list(AttributeType::Int64), AttributeFlags::optional()),
            );

        assert!(validate(
            &schema,
            &json!({"members": ["u-1", "u-2"], "labels": {"env": "prod"}, "ports": [443, 443]})
        )
        .is_empty());

        let diagnostics = validate(&schema, &json!({"members": ["u-1", "u-1"]}));
        assert!(diagnostics[0].summary.contains("Duplicate"));

        let diagnostics = validate(&schema, &json!({"labels": {"env": "prod", "tier": 1}}));
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("labels.tier"));

        let diagnostics = validate(&schema, &json!({"ports": [443, "http"]}));
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("ports.1"));

        let diagnostics = validate(&schema, &json!({"members": "u-1"}));
        assert_eq!(diagnostics[0].detail.as_deref(), Some("Expected set, got string"));
    }

    #[test]
    fn test_nested_blocks() {
        let filter = Block::new()
            .with_attribute("entity_type", Attribute::required_string().with_one_of(["logs", "spans"]))
            .with_attribute("expression", Attribute::required_string());
        let sli = Block::new().with_block(
            "query",
            NestedBlock::single(Block::new().with_attribute("text", Attribute::required_string()))
                .with_min_items(1),
        );
        let schema = Schema::v0()
            .with_block("filters", NestedBlock::list(filter).with_min_items(1).with_max_items(2))
            .with_block("sli", NestedBlock::single(sli));

        let valid = json!({"filters": [{"entity_type": "logs", "expression": "true"}]});
        assert!(validate(&schema, &valid).is_empty());

        let diagnostics = validate(&schema, &json!({}));
        assert!(diagnostics[0].summary.contains("at least 1"));

        let three = json!({"filters": [
            {"entity_type": "logs", "expression": "a"},
            {"entity_type": "logs", "expression": "b"},
            {"entity_type": "metrics", "expression": "c"},
        ]});
        let diagnostics = validate(&schema, &three);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().any(|d| d.summary.contains("at most 2")));
        assert!(diagnostics
            .iter()
            .any(|d| d.attribute.as_deref() == Some("filters.2.entity_type")));

        let diagnostics = validate(&schema, &json!({"filters": {"entity_type": "logs"}}));
        assert!(diagnostics[0].summary.contains("Expected list"));

        let mut nested = valid.clone();
        nested["sli"] = json!({});
        let diagnostics = validate(&schema, &nested);
        assert!(diagnostics[0].summary.contains("Missing required block 'sli.query'"));

        nested["sli"] = json!({"query": {"text": 1}});
        let diagnostics = validate(&schema, &nested);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("sli.query.text"));
    }

    #[test]
    fn test_helpers_and_root_shape() {
        let schema = Schema::v0().with_attribute("name", Attribute::required_string());

        assert!(is_valid(&schema, &json!({"name": "sre"})));
        assert!(!is_valid(&schema, &json!({})));
        assert!(validate_result(&schema, &json!({"name": "sre"})).is_ok());
        assert_eq!(validate_result(&schema, &json!({})).unwrap_err().len(), 1);

        let diagnostics = validate(&schema, &json!("not an object"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].attribute.is_none());
    }
}
