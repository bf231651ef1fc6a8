//! Schemas for the provider configuration, resources and data sources.
//!
//! A [`Schema`] is a versioned root [`Block`] of [`Attribute`]s and
//! [`NestedBlock`]s. The same description drives config validation
//! ([`crate::validation`]), planning ([`crate::plan`]: defaults, computed
//! carry-over and `force_new`) and what the host engine sees through
//! [`ProviderSchema`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    /// Ordered elements of one type.
    List(Box<AttributeType>),
    /// Unique elements of one type; order is not significant.
    Set(Box<AttributeType>),
    /// String keys to values of one type.
    Map(Box<AttributeType>),
}

impl AttributeType {
    pub fn list(element_type: AttributeType) -> Self {
        Self::List(Box::new(element_type))
    }

    pub fn set(element_type: AttributeType) -> Self {
        Self::Set(Box::new(element_type))
    }

    pub fn map(element_type: AttributeType) -> Self {
        Self::Map(Box::new(element_type))
    }
}

/// Who supplies an attribute's value.
///
/// `computed` alone means the platform sets it; `optional` + `computed` means
/// the user may set it and the platform fills it in otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// Never shown in logs or plan output.
    pub sensitive: bool,
}

impl AttributeFlags {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Default::default()
        }
    }

    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    pub fn optional_computed() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Default::default()
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Set only by the platform, never by configuration.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// One attribute of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    #[serde(flatten)]
    pub flags: AttributeFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A change to this attribute replaces the resource.
    #[serde(default)]
    pub force_new: bool,
    /// Planned when the configuration leaves the attribute unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Accepted values of a string attribute, or of each string element of
    /// a list or set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type,
            flags,
            description: None,
            force_new: false,
            default: None,
            one_of: None,
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional())
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    pub fn optional_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::optional())
    }

    pub fn computed_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::computed())
    }

    pub fn required_float64() -> Self {
        Self::new(AttributeType::Float64, AttributeFlags::required())
    }

    pub fn required_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::required())
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::optional())
    }

    pub fn computed_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::computed())
    }

    pub fn string_set(flags: AttributeFlags) -> Self {
        Self::new(AttributeType::set(AttributeType::String), flags)
    }

    pub fn string_map(flags: AttributeFlags) -> Self {
        Self::new(AttributeType::map(AttributeType::String), flags)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.flags.sensitive = true;
        self
    }
}

/// How a nested block repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockNestingMode {
    /// At most one object.
    #[default]
    Single,
    /// An array of objects in configuration order.
    List,
    /// An array of unique objects, unordered.
    Set,
}

/// Attributes and nested blocks at one level of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Block {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Attribute>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub blocks: HashMap<String, NestedBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.blocks.insert(name.into(), block);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A block nested under a name, e.g. the `filters` of a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedBlock {
    #[serde(flatten)]
    pub block: Block,
    #[serde(default)]
    pub nesting_mode: BlockNestingMode,
    #[serde(default)]
    pub min_items: u32,
    /// 0 is unlimited.
    #[serde(default)]
    pub max_items: u32,
}

impl NestedBlock {
    fn with_mode(block: Block, nesting_mode: BlockNestingMode) -> Self {
        Self {
            block,
            nesting_mode,
            min_items: 0,
            max_items: 0,
        }
    }

    pub fn single(block: Block) -> Self {
        Self::with_mode(block, BlockNestingMode::Single).with_max_items(1)
    }

    pub fn list(block: Block) -> Self {
        Self::with_mode(block, BlockNestingMode::List)
    }

    pub fn set(block: Block) -> Self {
        Self::with_mode(block, BlockNestingMode::Set)
    }

    pub fn with_min_items(mut self, min: u32) -> Self {
        self.min_items = min;
        self
    }

    pub fn with_max_items(mut self, max: u32) -> Self {
        self.max_items = max;
        self
    }
}

/// Schema of one resource, data source or the provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Bumped when stored state needs upgrading.
    #[serde(default)]
    pub version: u64,
    #[serde(flatten)]
    pub block: Block,
}

impl Schema {
    pub fn new(version: u64) -> Self {
        Self {
            version,
            block: Block::new(),
        }
    }

    pub fn v0() -> Self {
        Self::new(0)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.block.attributes.insert(name.into(), attr);
        self
    }

    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.block.blocks.insert(name.into(), block);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.block.description = Some(description.into());
        self
    }
}

/// Everything the provider serves, keyed by type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    #[serde(default)]
    pub provider: Schema,
    #[serde(default)]
    pub resources: HashMap<String, Schema>,
    #[serde(default)]
    pub data_sources: HashMap<String, Schema>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    pub fn with_data_source(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.data_sources.insert(name.into(), schema);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A problem reported to the host engine, optionally tied to an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Dotted path such as `filters.0.entity_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    fn with_severity(severity: DiagnosticSeverity, summary: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    pub fn error(summary: impl Into<String>) -> Self {
        Self::with_severity(DiagnosticSeverity::Error, summary)
    }

    pub fn warning(summary: impl Into<String>) -> Self {
        Self::with_severity(DiagnosticSeverity::Warning, summary)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

/// Whether any diagnostic in the list is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_computed_only_flags() {
        assert!(AttributeFlags::computed().is_computed_only());
        assert!(AttributeFlags::computed().sensitive().is_computed_only());
        assert!(!AttributeFlags::optional_computed().is_computed_only());
        assert!(!AttributeFlags::required().is_computed_only());
    }

    #[test]
    fn test_attribute_serialization() {
        let attr = Attribute::optional_string()
            .with_one_of(["7d", "14d", "21d", "28d"])
            .with_default(json!("28d"))
            .with_force_new();
        let json = serde_json::to_value(&attr).unwrap();

        assert_eq!(json["type"], "string");
        assert_eq!(json["optional"], true);
        assert_eq!(json["force_new"], true);
        assert_eq!(json["default"], "28d");
        assert_eq!(json["one_of"], json!(["7d", "14d", "21d", "28d"]));

        let plain = serde_json::to_value(Attribute::computed_string()).unwrap();
        assert!(plain.get("one_of").is_none());
        assert!(plain.get("default").is_none());

        let labels = serde_json::to_value(Attribute::string_map(AttributeFlags::optional())).unwrap();
        assert_eq!(labels["type"], json!({"map": "string"}));
    }

    #[test]
    fn test_nested_block_limits() {
        let sli = NestedBlock::single(Block::new());
        assert_eq!(sli.nesting_mode, BlockNestingMode::Single);
        assert_eq!((sli.min_items, sli.max_items), (0, 1));

        let filters = NestedBlock::list(Block::new()).with_min_items(1);
        assert_eq!((filters.min_items, filters.max_items), (1, 0));

        assert_eq!(NestedBlock::set(Block::new()).nesting_mode, BlockNestingMode::Set);
    }

    #[test]
    fn test_provider_schema() {
        let schema = ProviderSchema::new()
            .with_provider_config(
                Schema::v0().with_attribute("api_key", Attribute::optional_string().sensitive()),
            )
            .with_resource(
                "observability_scope",
                Schema::v0()
                    .with_description("A data access scope")
                    .with_attribute("id", Attribute::computed_string())
                    .with_block(
                        "filters",
                        NestedBlock::list(
                            Block::new().with_attribute("expression", Attribute::required_string()),
                        )
                        .with_min_items(1),
                    ),
            )
            .with_data_source(
                "observability_slo",
                Schema::v0().with_attribute("id", Attribute::required_string()),
            );

        assert!(schema.provider.block.attributes["api_key"].flags.sensitive);
        let scope = &schema.resources["observability_scope"];
        assert_eq!(scope.version, 0);
        assert_eq!(scope.block.blocks["filters"].min_items, 1);
        assert!(schema.data_sources.contains_key("observability_slo"));
    }

    #[test]
    fn test_diagnostics() {
        let err = Diagnostic::error("Invalid request timeout")
            .with_detail("must be positive")
            .with_attribute("request_timeout_seconds");

        assert!(err.is_error());
        assert_eq!(err.attribute.as_deref(), Some("request_timeout_seconds"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["severity"], "error");

        assert!(!has_errors(&[Diagnostic::warning("deprecated")]));
        assert!(has_errors(&[Diagnostic::warning("deprecated"), err]));
    }
}
