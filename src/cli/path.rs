//! Field paths for `jtree get`
//!
//! A path is a dot-separated list of keys with optional `[n]` indices:
//!
//! ```text
//! testCase[4].nested
//! users.0.name
//! ```
//!
//! A bare numeric key also indexes into arrays.

use regex::Regex;

use super::CliError;
use crate::Value;

const PATH_PATTERN: &str = r"^(?:[^.\[\]]+|\[\d+\])(?:\.[^.\[\]]+|\[\d+\])*$";
const SEGMENT_PATTERN: &str = r"\[(\d+)\]|([^.\[\]]+)";

/// One step of a field path.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Object key, or array index when it is numeric
    Key(String),
    /// `[n]`
    Index(usize),
}

pub fn parse_path(path: &str) -> Result<Vec<Segment>, CliError> {
    let whole = Regex::new(PATH_PATTERN)?;
    if !whole.is_match(path) {
        return Err(CliError::InvalidPath(path.to_string()));
    }

    let segment = Regex::new(SEGMENT_PATTERN)?;
    let mut segments = Vec::new();
    for caps in segment.captures_iter(path) {
        if let Some(index) = caps.get(1) {
            let index = index
                .as_str()
                .parse::<usize>()
                .map_err(|_| CliError::InvalidPath(path.to_string()))?;
            segments.push(Segment::Index(index));
        } else if let Some(key) = caps.get(2) {
            segments.push(Segment::Key(key.as_str().to_string()));
        }
    }
    Ok(segments)
}

/// Walks `path` from `root`.
pub fn select<'a>(root: &'a Value, path: &str) -> Result<&'a Value, CliError> {
    let mut current = root;
    for segment in parse_path(path)? {
        let next = match (&segment, current) {
            (Segment::Index(i), _) => current.get_index(*i),
            (Segment::Key(key), Value::Array(_)) => {
                key.parse::<usize>().ok().and_then(|i| current.get_index(i))
            }
            (Segment::Key(key), _) => current.get(key),
        };
        current = next.ok_or_else(|| CliError::FieldNotFound(path.to_string()))?;
    }
    Ok(current)
}
