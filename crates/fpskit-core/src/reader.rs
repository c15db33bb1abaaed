//! Document loading and version gating
//!
//! An FPS document is a single XML file whose root element carries a
//! `version` attribute and whose direct children are `<item>` problem
//! definitions. Only revisions 1.1 and 1.2 are supported; anything else
//! (including an absent attribute) aborts before any problem is parsed.

use std::fmt;
use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use fpskit_model::Problem;

use crate::error::{Error, Result};
use crate::parser::ProblemParser;

/// Supported FPS format revisions
///
/// The revision gates numeric parsing of time limits: 1.1 documents carry
/// integral values, later revisions fractional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// `"1.1"`, the oldest supported revision
    V1_1,
    /// `"1.2"`
    V1_2,
}

impl Version {
    /// Parse a version attribute value against the supported set
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "1.1" => Ok(Self::V1_1),
            "1.2" => Ok(Self::V1_2),
            other => Err(Error::UnsupportedVersion(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_1 => "1.1",
            Self::V1_2 => "1.2",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded FPS document: the raw XML plus its validated format version
#[derive(Debug, Clone)]
pub struct FpsDocument {
    data: Vec<u8>,
    version: Version,
}

impl FpsDocument {
    /// Load and validate a document from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }

    /// Take ownership of in-memory document bytes
    ///
    /// Scans to the root element and validates its version attribute; a
    /// root without one is treated as the literal version "No Version"
    /// and rejected.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let version = read_version(&data)?;
        Ok(Self { data, version })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Parse every problem item of this document, in document order
    pub fn problems(&self) -> Result<Vec<Problem>> {
        ProblemParser::new(self.version).parse(&self.data)
    }
}

fn read_version(xml: &[u8]) -> Result<Version> {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let version = e
                    .attributes()
                    .filter_map(|a| a.ok())
                    .find(|a| a.key.as_ref() == b"version")
                    .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
                    .unwrap_or_else(|| "No Version".to_string());
                return Version::parse(&version);
            }
            Event::Eof => return Err(Error::UnexpectedEof("document root".to_string())),
            _ => {}
        }
    }
}
