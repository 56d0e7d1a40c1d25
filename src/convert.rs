//! AST → runtime value conversion

use std::collections::HashMap;

use crate::{
    ast::{Node, RootNode},
    parser,
    value::Value,
};

/// Convert a syntax tree node into a runtime [`Value`].
///
/// Object members are inserted in source order, so a repeated key keeps the
/// value parsed last. An illegal literal converts to `Null` and is logged.
pub fn to_runtime_value(node: &Node) -> Value {
    match node {
        Node::String(s) => Value::String(s.clone()),
        Node::Number(n) => Value::Number(*n),
        Node::Boolean(b) => Value::Boolean(*b),
        Node::Null => Value::Null,
        Node::Object(pairs) => {
            let mut obj = HashMap::with_capacity(pairs.len());
            for pair in pairs {
                obj.insert(pair.key.clone(), to_runtime_value(&pair.value));
            }
            Value::Object(obj)
        }
        Node::Array(elements) => Value::Array(elements.iter().map(to_runtime_value).collect()),
        Node::Illegal(message) => {
            tracing::warn!(%message, "converting illegal literal to null");
            Value::Null
        }
    }
}

impl RootNode {
    /// Converts the top-level value; an empty root becomes `Null`.
    pub fn to_runtime_value(&self) -> Value {
        self.value.as_ref().map(to_runtime_value).unwrap_or(Value::Null)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        to_runtime_value(node)
    }
}

/// Runs the whole lenient pipeline: tokenize, parse, convert.
///
/// # Examples
///
/// ```
/// use json_tree::{from_str, Value};
///
/// let value = from_str(r#"{"testCase": [123, "abc", true, null, {"nested": "yo"}]}"#);
/// assert_eq!(value["testCase"][4]["nested"], Value::String("yo".to_string()));
/// ```
pub fn from_str(input: &str) -> Value {
    parser::parse(input).to_runtime_value()
}
