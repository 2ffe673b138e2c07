// Name -> endpoint lookup over the static tool catalog

use crate::protocol::ToolSchema;
use crate::tools::catalog::{PropertyKind, ToolSpec, CATALOG};
use std::collections::HashMap;

/// Lookup table built once from a static catalog.
///
/// Keeps catalog order for `tools/list` and answers name -> endpoint for
/// `tools/call`.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    by_name: HashMap<&'static str, &'static ToolSpec>,
    schemas: Vec<ToolSchema>,
}

impl ToolRegistry {
    /// Registry over the full Ashby catalog.
    pub fn ashby() -> Self {
        Self::from_specs(CATALOG)
    }

    /// Build a registry. On a duplicate name the first entry wins.
    pub fn from_specs(catalog: &'static [ToolSpec]) -> Self {
        let mut by_name = HashMap::with_capacity(catalog.len());
        let mut schemas = Vec::with_capacity(catalog.len());

        for spec in catalog {
            if by_name.contains_key(spec.name) {
                tracing::warn!(tool = spec.name, "Duplicate tool name in catalog, ignoring");
                continue;
            }
            by_name.insert(spec.name, spec);
            schemas.push(spec.schema());
        }

        Self { by_name, schemas }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&'static ToolSpec> {
        self.by_name.get(name).copied()
    }

    /// Endpoint path for a tool name.
    pub fn endpoint(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|spec| spec.endpoint)
    }

    /// All tool schemas, in catalog order.
    pub fn list_schemas(&self) -> &[ToolSchema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(
    properties: serde_json::Map<String, serde_json::Value>,
    required: &[&str],
) -> serde_json::Value {
    let mut schema = serde_json::json!({
        "type": "object",
        "properties": properties,
    });
    if !required.is_empty() {
        schema["required"] = serde_json::json!(required);
    }
    schema
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_array(items: serde_json::Value, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

pub(crate) fn json_schema_for(kind: PropertyKind, description: &str) -> serde_json::Value {
    match kind {
        PropertyKind::String => json_schema_string(description),
        PropertyKind::Integer => json_schema_integer(description),
        PropertyKind::Boolean => json_schema_boolean(description),
        PropertyKind::StringArray => {
            json_schema_array(serde_json::json!({"type": "string"}), description)
        }
    }
}
