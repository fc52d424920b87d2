//! Path template parsing.
//!
//! # Responsibilities
//! - Split paths and templates on `/` without normalisation
//! - Classify each template segment as literal or `{parameter}`
//! - Reject malformed parameter names and reserved characters
//!
//! # Design Decisions
//! - Empty segments (leading, trailing or doubled slashes) are kept as literals
//! - Validation happens once, at registration time

use crate::error::RouterError;

/// Characters a literal segment may not contain.
const RESERVED: &[char] = &[':', '/', '?', '#', '[', ']', '{', '}'];

/// One parsed segment of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Must match the request segment byte for byte.
    Literal(&'a str),
    /// Matches any request segment; carries the parameter name.
    Parameter(&'a str),
}

/// Splits a path or template into its raw segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

/// Parses a single template segment.
pub fn parse_segment<'a>(segment: &'a str, path: &str) -> Result<Segment<'a>, RouterError> {
    if let Some(rest) = segment.strip_prefix('{') {
        let name = rest
            .strip_suffix('}')
            .ok_or_else(|| RouterError::UnterminatedParameter {
                segment: segment.to_string(),
                path: path.to_string(),
            })?;
        if !is_valid_parameter_name(name) {
            return Err(RouterError::InvalidParameterName {
                name: name.to_string(),
                path: path.to_string(),
            });
        }
        return Ok(Segment::Parameter(name));
    }

    if segment.contains(RESERVED) {
        return Err(RouterError::ReservedCharacter {
            segment: segment.to_string(),
            path: path.to_string(),
        });
    }
    Ok(Segment::Literal(segment))
}

/// Parses and validates a whole template.
pub fn parse_template(path: &str) -> Result<Vec<Segment<'_>>, RouterError> {
    path.split('/')
        .map(|segment| parse_segment(segment, path))
        .collect()
}

/// Route signature with parameter names erased.
///
/// Two templates with the same shape land on the same trie node, so
/// `users/{id}` and `users/{name}` share the shape `users/{}`.
pub fn shape(path: &str) -> Result<String, RouterError> {
    let segments = parse_template(path)?;
    let parts: Vec<&str> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(literal) => *literal,
            Segment::Parameter(_) => "{}",
        })
        .collect();
    Ok(parts.join("/"))
}

fn is_valid_parameter_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
