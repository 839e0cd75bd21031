//! Parameter handling shared by the tool groups.
//!
//! Arguments arrive as an untyped JSON object. They are checked once against
//! the JSON Schema generated for the tool's parameter struct, then
//! deserialized into that struct. The schema's `required` list drives the
//! "missing parameter" check; each property's `title` is the label used in
//! the error message.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ToolError, ToolResult};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Validate `arguments` against the schema of `T` and deserialize them.
///
/// A `null` argument counts as absent, so optional parameters fall back to
/// their declared default.
pub fn parse_params<T>(mut arguments: JsonObject) -> ToolResult<T>
where
    T: DeserializeOwned + JsonSchema + 'static,
{
    let schema = schema_for_type::<T>();
    check_required(&schema, &arguments)?;
    arguments.retain(|_, value| !value.is_null());
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Fail on the first required property that is absent, `null` or `""`.
pub fn check_required(schema: &JsonObject, arguments: &JsonObject) -> ToolResult<()> {
    let Some(required) = schema.get("required").and_then(Value::as_array) else {
        return Ok(());
    };

    for name in required.iter().filter_map(Value::as_str) {
        let missing = match arguments.get(name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if missing {
            return Err(ToolError::missing_parameter(parameter_label(schema, name)));
        }
    }

    Ok(())
}

fn parameter_label<'a>(schema: &'a JsonObject, name: &'a str) -> &'a str {
    schema
        .get("properties")
        .and_then(|properties| properties.get(name))
        .and_then(|property| property.get("title"))
        .and_then(Value::as_str)
        .unwrap_or(name)
}

/// Percent-encode a free-text URL component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Render the catalogue's alphabetic filter; `#` selects items starting with a digit.
pub fn alpha_param(alpha: &str) -> &str {
    if alpha == "#" { "%23" } else { alpha }
}

/// Default page for paginated catalogue listings.
pub fn default_page() -> u32 {
    1
}

/// Pages are 1-based; `0` means "first page".
pub fn effective_page(page: u32) -> u32 {
    page.max(1)
}
