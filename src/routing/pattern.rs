//! Path pattern parsing.
//!
//! Patterns are `/`-separated segments. A segment starting with `:` is a
//! required dynamic segment bound to the name that follows; every other
//! segment is a literal matched byte for byte.
//!
//! ```text
//! /                    → []
//! /project/:id         → [Literal("project"), Param("id")]
//! /projectbook/:id     → [Literal("projectbook"), Param("id")]
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::routing::error::PatternError;
use crate::routing::page::Params;

/// One compiled segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern such as `/project/:id`.
    ///
    /// A trailing slash is accepted and ignored, so `/project/` and
    /// `/project` compile to the same segments.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        let mut seen = HashSet::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment(pattern.to_string()));
                }
                match raw.strip_prefix(':') {
                    Some("") => return Err(PatternError::EmptyParamName(pattern.to_string())),
                    Some(name) => {
                        if !seen.insert(name) {
                            return Err(PatternError::DuplicateParam {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(raw.to_string())),
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the dynamic segments, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Canonical form used to detect duplicate declarations.
    ///
    /// `/project/:id` and `/project/:pid` are the same pattern.
    pub fn canonical(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => format!("/{lit}"),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }

    /// Build a concrete path from parameter values.
    ///
    /// Returns the name of the first missing parameter on failure.
    pub fn reverse(&self, params: &Params) -> Result<String, String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() => path.push_str(&encode_segment(value)),
                    _ => return Err(name.clone()),
                },
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Characters escaped when a parameter value is written into a path.
const SEGMENT: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, SEGMENT).to_string()
}
