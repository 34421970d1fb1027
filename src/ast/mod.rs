//! Contract with the upstream parser's JSON node tree.
//!
//! Each syntax element is a JSON object tagged with `$type`. Nested syntax
//! elements live under `children`; cross references are objects carrying the
//! referenced name under `$text`:
//!
//! ```json
//! {
//!   "$type": "Redefinition",
//!   "targetRef": { "$type": "Reference", "$text": "Base::mass" }
//! }
//! ```

use serde_json::Value;

/// Kind tag of a node.
pub const TYPE: &str = "$type";
/// Source text of a node or reference.
pub const TEXT: &str = "$text";
/// Nested syntax elements.
pub const CHILDREN: &str = "children";
/// Target of a relationship reference (e.g. the redefined feature).
pub const TARGET_REF: &str = "targetRef";
/// Declared name of an element.
pub const DECLARED_NAME: &str = "declaredName";
/// Declared short name of an element.
pub const DECLARED_SHORT_NAME: &str = "declaredShortName";

/// Read the `$type` tag of a node.
pub fn node_type(node: &Value) -> Option<&str> {
    node.get(TYPE)?.as_str()
}

/// Returns true if `node` is an object with a `key` field.
pub fn has(node: &Value, key: &str) -> bool {
    node.get(key).is_some()
}

/// The nested syntax elements of a node, in source order.
pub fn children(node: &Value) -> &[Value] {
    node.get(CHILDREN)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Cleaned text of the `$text` field of `node`, if any.
pub fn text_of(node: &Value) -> Option<String> {
    node.get(TEXT).and_then(as_cleaned_text)
}

/// Cleaned text of a string field of `node`, if any.
pub fn string_field(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(as_cleaned_text)
}

/// Normalize a textual value from the parser.
///
/// Surrounding whitespace is trimmed and an unrestricted name wrapped in
/// single quotes (`'my name'`) is unquoted. Non-string values and empty
/// results yield `None`.
pub fn as_cleaned_text(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    let text = text
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(text);
    (!text.is_empty()).then(|| text.to_string())
}
