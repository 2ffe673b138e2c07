pub mod catalog;
mod registry;

pub use catalog::{Property, PropertyDefault, PropertyKind, ToolSpec, CATALOG};
pub use registry::{
    json_schema_array, json_schema_boolean, json_schema_integer, json_schema_object,
    json_schema_string, ToolRegistry,
};
