use std::fmt;

/// A node of the JSON syntax tree.
///
/// The set of variants is closed: every consumer matches exhaustively, so a
/// new variant has to be handled everywhere it can appear.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value pairs in source order
    ///
    /// Keys may repeat; nothing is deduplicated at this level.
    ///
    /// # Examples
    /// ```text
    /// {"name": "Alice", "age": 30}
    /// ```
    Object(Vec<Property>),

    /// Ordered elements, not necessarily of one type
    ///
    /// # Examples
    /// ```text
    /// [1, "x", true, null]
    /// ```
    Array(Vec<Node>),

    /// Raw text between the quotes, no escape decoding
    String(String),

    /// Number parsed as a 64-bit float
    Number(f64),

    /// `true` or `false`
    Boolean(bool),

    /// `null`
    Null,

    /// A value the parser could not construct, with a diagnostic message
    ///
    /// # Examples
    /// ```text
    /// -          → Illegal("Error parsing number")
    /// {"a": }    → Object([("a", Illegal("Missing value"))])
    /// ```
    Illegal(String),
}

/// One `"key": value` pair of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Node,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Node) -> Self {
        Property {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.key, self.value)
    }
}

impl Node {
    /// Representative literal for this node.
    ///
    /// Collections report their first key or element, or `{}` / `[]` when
    /// empty.
    pub fn token_literal(&self) -> String {
        match self {
            Node::Object(pairs) => match pairs.first() {
                Some(pair) => pair.key.clone(),
                None => "{}".to_string(),
            },
            Node::Array(elements) => match elements.first() {
                Some(first) => first.token_literal(),
                None => "[]".to_string(),
            },
            Node::String(s) => s.clone(),
            Node::Number(n) => n.to_string(),
            Node::Boolean(b) => b.to_string(),
            Node::Null => "null".to_string(),
            Node::Illegal(_) => "Illegal".to_string(),
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Node::Illegal(_))
    }

    /// Collects the message of every illegal literal in this subtree, in
    /// document order.
    pub fn illegal_messages(&self) -> Vec<&str> {
        let mut messages = Vec::new();
        self.collect_illegal(&mut messages);
        messages
    }

    fn collect_illegal<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Object(pairs) => {
                for pair in pairs {
                    pair.value.collect_illegal(out);
                }
            }
            Node::Array(elements) => {
                for element in elements {
                    element.collect_illegal(out);
                }
            }
            Node::Illegal(message) => out.push(message),
            Node::String(_) | Node::Number(_) | Node::Boolean(_) | Node::Null => {}
        }
    }
}

/// Debug rendering. Strings are written back without escaping, so the
/// output is not guaranteed to be valid JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Object(pairs) => {
                f.write_str("{")?;
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", pair)?;
                }
                f.write_str("}")
            }
            Node::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Node::String(s) => write!(f, "\"{}\"", s),
            Node::Number(n) => write!(f, "{:.6}", n),
            Node::Boolean(b) => write!(f, "{}", b),
            Node::Null => f.write_str("null"),
            Node::Illegal(message) if message.is_empty() => f.write_str("Illegal"),
            Node::Illegal(message) => write!(f, "Illegal({})", message),
        }
    }
}

/// The top of a parsed document. `value` is `None` when the input held no
/// value at all (empty or whitespace-only).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootNode {
    pub value: Option<Node>,
}

impl RootNode {
    pub fn new(value: Option<Node>) -> Self {
        RootNode { value }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn token_literal(&self) -> String {
        self.value
            .as_ref()
            .map(Node::token_literal)
            .unwrap_or_default()
    }
}

impl fmt::Display for RootNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}
