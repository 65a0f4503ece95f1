//! Route matching logic.
//!
//! # Responsibilities
//! - Split a normalized path into segments
//! - Match segments against a compiled pattern
//! - Extract and decode dynamic segment values
//!
//! # Design Decisions
//! - Literal segments are case-sensitive and must match exactly
//! - A dynamic segment accepts any non-empty segment
//! - Segment counts must be equal: no prefix matching, no optional segments
//! - A single trailing slash on the path is ignored

use percent_encoding::percent_decode_str;

use crate::routing::page::Params;
use crate::routing::pattern::{PathPattern, Segment};

/// Split an absolute path into its segments.
///
/// `/` yields no segments. Inner empty segments (`/a//b`) are kept as empty
/// strings so that they fail every pattern.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

/// Match path segments against a pattern, returning the bound parameters.
pub fn match_segments(pattern: &PathPattern, segments: &[&str]) -> Option<Params> {
    if pattern.segments().len() != segments.len() {
        return None;
    }

    let mut params = Params::new();
    for (expected, actual) in pattern.segments().iter().zip(segments) {
        match expected {
            Segment::Literal(lit) => {
                if lit != actual {
                    return None;
                }
            }
            Segment::Param(name) => {
                if actual.is_empty() {
                    return None;
                }
                params.insert(name.clone(), decode_segment(actual));
            }
        }
    }
    Some(params)
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(p: &str) -> PathPattern {
        PathPattern::parse(p).unwrap()
    }

    #[test]
    fn test_split_path() {
        assert!(split_path("/").is_empty());
        assert!(split_path("").is_empty());
        assert_eq!(split_path("/project/42"), vec!["project", "42"]);
        assert_eq!(split_path("/project/42/"), vec!["project", "42"]);
        assert_eq!(split_path("/a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_match_literal_exact() {
        let p = pattern("/projectmap");
        assert!(match_segments(&p, &split_path("/projectmap")).is_some());
        assert!(match_segments(&p, &split_path("/projectmap/1")).is_none());
        assert!(match_segments(&p, &split_path("/ProjectMap")).is_none()); // case-sensitive
        assert!(match_segments(&p, &split_path("/")).is_none());
    }

    #[test]
    fn test_match_dynamic() {
        let p = pattern("/project/:id");
        let params = match_segments(&p, &split_path("/project/42")).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));

        assert!(match_segments(&p, &split_path("/project")).is_none());
        assert!(match_segments(&p, &split_path("/project/42/extra")).is_none());
    }

    #[test]
    fn test_dynamic_rejects_empty_segment() {
        let p = pattern("/project/:id/book");
        assert!(match_segments(&p, &split_path("/project//book")).is_none());
    }

    #[test]
    fn test_dynamic_value_is_decoded() {
        let p = pattern("/projectbook/:id");
        let params = match_segments(&p, &split_path("/projectbook/caf%C3%A9%20one")).unwrap();
        assert_eq!(params["id"], "café one");
    }
}
