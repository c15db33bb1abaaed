//! The problem record and its component types
//!
//! Field defaults mirror what the FPS format leaves behind when a tag is
//! absent: placeholder strings for the statement sections, `None` for the
//! optional ones, empty sequences everywhere else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One problem definition, parsed from an `<item>` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Problem title, used verbatim as a directory name by exporters
    pub title: String,
    /// Statement body (may embed raw HTML and image references)
    pub description: String,
    /// Input format description
    pub input: String,
    /// Output format description
    pub output: String,
    /// Time limit, absent when the document carries no `<time_limit>`
    pub time_limit: Option<TimeLimit>,
    /// Memory limit, absent when the document carries no `<memory_limit>`
    pub memory_limit: Option<MemoryLimit>,
    /// Optional hint section
    pub hint: Option<String>,
    /// Optional source/origin attribution
    pub source: Option<String>,
    /// Sample pairs shown in the statement
    pub samples: Vec<TestPair>,
    /// Hidden grading data
    pub test_cases: Vec<TestPair>,
    /// Embedded images referenced from the statement text
    pub images: Vec<ImageRef>,
    /// Per-language code templates
    pub template: Vec<Snippet>,
    /// Code prepended to submissions, per language
    pub prepend: Vec<Snippet>,
    /// Code appended to submissions, per language
    pub append: Vec<Snippet>,
    /// Reference solutions, per language
    pub solution: Vec<Snippet>,
    /// Special judge (custom output checker); at most one
    pub spj: Option<Snippet>,
}

impl Problem {
    /// Create a record with the format's placeholder defaults
    pub fn new() -> Self {
        Self {
            title: "No Title".to_string(),
            description: "No Description".to_string(),
            input: "No Input Description".to_string(),
            output: "No Output Description".to_string(),
            time_limit: None,
            memory_limit: None,
            hint: None,
            source: None,
            samples: Vec::new(),
            test_cases: Vec::new(),
            images: Vec::new(),
            template: Vec::new(),
            prepend: Vec::new(),
            append: Vec::new(),
            solution: Vec::new(),
            spj: None,
        }
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}

/// A time limit with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeLimit {
    pub unit: TimeUnit,
    /// Strictly positive; integral under format version 1.1
    pub value: f64,
}

/// Time limit unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A memory limit with its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLimit {
    pub unit: MemoryUnit,
    /// Strictly positive
    pub value: u64,
}

/// Memory limit unit, normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryUnit {
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "KB")]
    Kilobytes,
}

impl MemoryUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Megabytes => "MB",
            Self::Kilobytes => "KB",
        }
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input/output pair, used for both samples and hidden test cases
///
/// Either side may be `None` when the element was present but empty; the
/// output is `None` transiently while the parser waits for the closing
/// half of the pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestPair {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// An embedded image: the reference used in the statement text plus the
/// base64 payload carried by the document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: Option<String>,
    pub blob: Option<String>,
}

/// A per-language code snippet (template, prepend, append, solution, spj)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Language tag; required non-empty by the format
    pub language: String,
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let p = Problem::new();
        assert_eq!(p.title, "No Title");
        assert_eq!(p.description, "No Description");
        assert_eq!(p.input, "No Input Description");
        assert_eq!(p.output, "No Output Description");
        assert!(p.time_limit.is_none());
        assert!(p.memory_limit.is_none());
        assert!(p.hint.is_none());
        assert!(p.samples.is_empty());
        assert!(p.test_cases.is_empty());
        assert!(p.spj.is_none());
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(TimeUnit::Seconds.to_string(), "s");
        assert_eq!(TimeUnit::Milliseconds.to_string(), "ms");
        assert_eq!(MemoryUnit::Megabytes.to_string(), "MB");
        assert_eq!(MemoryUnit::Kilobytes.to_string(), "KB");
    }

    #[test]
    fn test_unit_serialization() {
        let limit = TimeLimit {
            unit: TimeUnit::Milliseconds,
            value: 1000.0,
        };
        let json = serde_json::to_string(&limit).unwrap();
        assert_eq!(json, r#"{"unit":"ms","value":1000.0}"#);

        let mem: MemoryLimit = serde_json::from_str(r#"{"unit":"KB","value":65536}"#).unwrap();
        assert_eq!(mem.unit, MemoryUnit::Kilobytes);
        assert_eq!(mem.value, 65536);
    }
}
