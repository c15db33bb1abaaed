//! Test-case file export
//!
//! Each hidden test case becomes a `<name><index>.in` / `<name><index>.out`
//! pair under a data directory, where `<name>` is the ASCII alias embedded
//! in the problem title (CJK titles conventionally carry one in
//! parentheses) and indices are 1-based.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use fpskit_model::Problem;

use crate::error::Result;

/// Optional text transforms applied before writing case files
///
/// Judges disagree about trailing newlines and CRLF; callers supply
/// whatever normalization their target needs.
#[derive(Default, Clone, Copy)]
pub struct Preprocess<'a> {
    pub input: Option<&'a dyn Fn(&str) -> String>,
    pub output: Option<&'a dyn Fn(&str) -> String>,
}

/// Write every test case of `problem` into `base_dir`
pub fn save_test_cases(problem: &Problem, base_dir: &Path, pre: Preprocess<'_>) -> Result<()> {
    fs::create_dir_all(base_dir)?;

    let stem = ascii_name(&problem.title);
    for (index, case) in problem.test_cases.iter().enumerate() {
        let input = apply(pre.input, case.input.as_deref());
        fs::write(base_dir.join(format!("{}{}.in", stem, index + 1)), input)?;

        let output = apply(pre.output, case.output.as_deref());
        fs::write(base_dir.join(format!("{}{}.out", stem, index + 1)), output)?;
    }

    Ok(())
}

fn apply(transform: Option<&dyn Fn(&str) -> String>, text: Option<&str>) -> String {
    let text = text.unwrap_or_default();
    match transform {
        Some(f) => f(text),
        None => text.to_string(),
    }
}

/// Extract the ASCII alias from a problem title: the text inside the first
/// half- or full-width parenthesis pair, or "" when there is none
pub fn ascii_name(title: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[(（](.+?)[)）]").unwrap());
    re.captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpskit_model::TestPair;
    use tempfile::TempDir;

    #[test]
    fn test_ascii_name() {
        assert_eq!(ascii_name("传纸条(message)"), "message");
        assert_eq!(ascii_name("题目（alias）"), "alias");
        assert_eq!(ascii_name("A+B Problem"), "");
        assert_eq!(ascii_name(""), "");
    }

    #[test]
    fn test_case_files_are_written_in_order() {
        let dir = TempDir::new().unwrap();
        let mut problem = Problem::new();
        problem.title = "回文(palin)".to_string();
        problem.test_cases.push(TestPair {
            input: Some("abc\n".to_string()),
            output: Some("no\n".to_string()),
        });
        problem.test_cases.push(TestPair {
            input: Some("aba\n".to_string()),
            output: Some("yes\n".to_string()),
        });

        save_test_cases(&problem, dir.path(), Preprocess::default()).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("palin1.in")).unwrap(),
            "abc\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("palin2.out")).unwrap(),
            "yes\n"
        );
    }

    #[test]
    fn test_transforms_are_applied() {
        let dir = TempDir::new().unwrap();
        let mut problem = Problem::new();
        problem.test_cases.push(TestPair {
            input: Some("1 2".to_string()),
            output: Some("3".to_string()),
        });

        let ensure_newline = |s: &str| {
            if s.ends_with('\n') {
                s.to_string()
            } else {
                format!("{s}\n")
            }
        };
        let pre = Preprocess {
            input: Some(&ensure_newline),
            output: Some(&ensure_newline),
        };
        save_test_cases(&problem, dir.path(), pre).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("1.in")).unwrap(), "1 2\n");
        assert_eq!(fs::read_to_string(dir.path().join("1.out")).unwrap(), "3\n");
    }

    #[test]
    fn test_absent_text_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let mut problem = Problem::new();
        problem.test_cases.push(TestPair {
            input: None,
            output: None,
        });
        save_test_cases(&problem, dir.path(), Preprocess::default()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("1.in")).unwrap(), "");
    }
}
