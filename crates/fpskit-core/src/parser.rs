//! Problem parsing (`<item>` elements)
//!
//! This module walks the children of each `<item>` element in document
//! order, folding them into a [`Problem`] record. Parse state is an
//! accumulator plus two pairing flags enforcing strict input/output
//! alternation for samples and test cases; the format has no nesting
//! marker between a case's input and output, so alternation is the only
//! structural guarantee and any violation is an immediate error.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use fpskit_model::{
    ImageRef, MemoryLimit, MemoryUnit, Problem, Snippet, TestPair, TimeLimit, TimeUnit,
};

use crate::error::{Error, Result};
use crate::reader::Version;

/// Parses the problem items of an FPS document
///
/// The format version is parse context: 1.1 documents carry integral
/// time-limit values, later revisions fractional ones.
#[derive(Debug, Clone, Copy)]
pub struct ProblemParser {
    version: Version,
}

impl ProblemParser {
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    /// Parse every `<item>` child of the root, in document order
    ///
    /// The first violation aborts the whole document; no partial records
    /// are returned.
    pub fn parse(&self, xml: &[u8]) -> Result<Vec<Problem>> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - statement whitespace is payload
        reader.config_mut().trim_text(false);

        let mut problems = Vec::new();
        let mut saw_root = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if !saw_root {
                        saw_root = true;
                    } else if e.local_name().as_ref() == b"item" {
                        problems.push(self.parse_item(&mut reader)?);
                    } else {
                        // other root children are not problem items
                        reader.read_to_end(e.name())?;
                    }
                }
                Event::Empty(e) => {
                    if !saw_root {
                        saw_root = true;
                    } else if e.local_name().as_ref() == b"item" {
                        // childless item: a record of nothing but defaults
                        problems.push(Problem::new());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(problems)
    }

    fn parse_item(&self, reader: &mut Reader<&[u8]>) -> Result<Problem> {
        let mut item = ItemState::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if e.local_name().as_ref() == b"img" {
                        item.problem.images.push(parse_image(reader)?);
                    } else {
                        let text = element_text(reader, &e)?;
                        item.apply(self.version, &e, text)?;
                    }
                }
                Event::Empty(e) => {
                    if e.local_name().as_ref() == b"img" {
                        item.problem.images.push(ImageRef::default());
                    } else {
                        item.apply(self.version, &e, None)?;
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(Error::UnexpectedEof("item".to_string())),
                _ => {}
            }
        }

        Ok(item.problem)
    }
}

/// Fold state for one item: the accumulating record plus the two pairing
/// flags. `true` means the next sample/test tag must be an input.
struct ItemState {
    problem: Problem,
    sample_expecting_input: bool,
    test_expecting_input: bool,
}

impl ItemState {
    fn new() -> Self {
        Self {
            problem: Problem::new(),
            sample_expecting_input: true,
            test_expecting_input: true,
        }
    }

    fn apply(&mut self, version: Version, e: &BytesStart, text: Option<String>) -> Result<()> {
        match e.local_name().as_ref() {
            b"title" => self.problem.title = text.unwrap_or_default(),
            b"description" => self.problem.description = text.unwrap_or_default(),
            b"input" => self.problem.input = text.unwrap_or_default(),
            b"output" => self.problem.output = text.unwrap_or_default(),
            b"hint" => self.problem.hint = text,
            b"source" => self.problem.source = text,
            b"time_limit" => {
                self.problem.time_limit = Some(parse_time_limit(version, e, text)?);
            }
            b"memory_limit" => {
                self.problem.memory_limit = Some(parse_memory_limit(e, text)?);
            }
            b"template" => self.problem.template.push(snippet("template", e, text)?),
            b"prepend" => self.problem.prepend.push(snippet("prepend", e, text)?),
            b"append" => self.problem.append.push(snippet("append", e, text)?),
            b"solution" => self.problem.solution.push(snippet("solution", e, text)?),
            // at most one spj is kept; a later one replaces it
            b"spj" => self.problem.spj = Some(snippet("spj", e, text)?),
            b"sample_input" => {
                if !self.sample_expecting_input {
                    return Err(Error::OutOfOrderTag("sample_input"));
                }
                self.problem.samples.push(TestPair {
                    input: text,
                    output: None,
                });
                self.sample_expecting_input = false;
            }
            b"sample_output" => {
                if self.sample_expecting_input {
                    return Err(Error::OutOfOrderTag("sample_output"));
                }
                if let Some(pair) = self.problem.samples.last_mut() {
                    pair.output = text;
                }
                self.sample_expecting_input = true;
            }
            b"test_input" => {
                if !self.test_expecting_input {
                    return Err(Error::OutOfOrderTag("test_input"));
                }
                self.problem.test_cases.push(TestPair {
                    input: text,
                    output: None,
                });
                self.test_expecting_input = false;
            }
            b"test_output" => {
                if self.test_expecting_input {
                    return Err(Error::OutOfOrderTag("test_output"));
                }
                if let Some(pair) = self.problem.test_cases.last_mut() {
                    pair.output = text;
                }
                self.test_expecting_input = true;
            }
            // unrecognized tags are ignored
            _ => {}
        }
        Ok(())
    }
}

fn parse_time_limit(version: Version, e: &BytesStart, text: Option<String>) -> Result<TimeLimit> {
    let unit = match get_attr(e, b"unit") {
        None => TimeUnit::Seconds,
        Some(u) => match u.as_str() {
            "s" => TimeUnit::Seconds,
            "ms" => TimeUnit::Milliseconds,
            _ => {
                return Err(Error::InvalidUnit {
                    tag: "time_limit",
                    unit: u,
                })
            }
        },
    };

    let raw = text.unwrap_or_default();
    let parsed = match version {
        Version::V1_1 => raw.trim().parse::<i64>().ok().map(|v| v as f64),
        Version::V1_2 => raw.trim().parse::<f64>().ok(),
    };
    let value = parsed.ok_or_else(|| Error::InvalidValue {
        tag: "time_limit",
        value: raw.clone(),
    })?;
    if value <= 0.0 {
        return Err(Error::InvalidValue {
            tag: "time_limit",
            value: raw,
        });
    }

    Ok(TimeLimit { unit, value })
}

fn parse_memory_limit(e: &BytesStart, text: Option<String>) -> Result<MemoryLimit> {
    let unit = match get_attr(e, b"unit") {
        None => MemoryUnit::Megabytes,
        Some(u) if u.eq_ignore_ascii_case("MB") => MemoryUnit::Megabytes,
        Some(u) if u.eq_ignore_ascii_case("KB") => MemoryUnit::Kilobytes,
        Some(u) => {
            return Err(Error::InvalidUnit {
                tag: "memory_limit",
                unit: u,
            })
        }
    };

    let raw = text.unwrap_or_default();
    let value = raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| Error::InvalidValue {
            tag: "memory_limit",
            value: raw.clone(),
        })?;

    Ok(MemoryLimit { unit, value })
}

fn snippet(tag: &'static str, e: &BytesStart, code: Option<String>) -> Result<Snippet> {
    match get_attr(e, b"language") {
        Some(language) if !language.is_empty() => Ok(Snippet { language, code }),
        _ => Err(Error::MissingLanguage(tag)),
    }
}

/// Parse the children of an `<img>` element: `<src>` sets the reference,
/// `<base64>` the payload. Missing children leave `None`.
fn parse_image(reader: &mut Reader<&[u8]>) -> Result<ImageRef> {
    let mut image = ImageRef::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"src" => image.src = element_text(reader, &e)?,
                b"base64" => image.blob = element_text(reader, &e)?,
                _ => {
                    reader.read_to_end(e.name())?;
                }
            },
            Event::End(_) => break,
            Event::Eof => return Err(Error::UnexpectedEof("img".to_string())),
            _ => {}
        }
    }
    Ok(image)
}

// Helper functions

/// Direct text of an element: concatenated text and CDATA nodes up to the
/// first child element. Children are skipped whole and trailing text after
/// them is not captured. A present-but-empty element yields `None`.
fn element_text(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Option<String>> {
    let mut text: Option<String> = None;
    let mut before_children = true;
    loop {
        match reader.read_event()? {
            Event::Text(t) if before_children => {
                text.get_or_insert_with(String::new)
                    .push_str(&t.unescape().unwrap_or_default());
            }
            Event::CData(c) if before_children => {
                text.get_or_insert_with(String::new)
                    .push_str(&String::from_utf8_lossy(&c));
            }
            Event::Start(child) => {
                before_children = false;
                reader.read_to_end(child.name())?;
            }
            Event::Empty(_) => before_children = false,
            Event::End(_) => break,
            Event::Eof => {
                return Err(Error::UnexpectedEof(
                    String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
                ))
            }
            _ => {}
        }
    }
    Ok(text)
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}
