//! Embedded image extraction
//!
//! FPS documents carry statement images as base64 payloads next to the
//! reference string used inside the statement HTML. Extraction writes each
//! payload to disk under a freshly generated name and rewrites the textual
//! references to point at it, so the statement page works from a plain
//! directory.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use tracing::warn;

use fpskit_model::Problem;

use crate::error::Result;

/// Length of generated image file stems
const NAME_LEN: usize = 12;

const NAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Decode every embedded image of `problem` into `base_dir` and return a
/// copy of the record whose `description`/`input`/`output` reference the
/// written files (prefixed with `base_url` when non-empty)
///
/// The input record is left untouched. Entries missing their reference or
/// payload cannot be written and are skipped.
pub fn save_images(problem: &Problem, base_dir: &Path, base_url: &str) -> Result<Problem> {
    fs::create_dir_all(base_dir)?;

    let mut rewritten = problem.clone();
    for image in &problem.images {
        let (Some(src), Some(blob)) = (&image.src, &image.blob) else {
            warn!("skipping image entry with missing src or payload");
            continue;
        };

        let file_name = format!("{}{}", random_name(NAME_LEN), extension_of(src));
        fs::write(base_dir.join(&file_name), decode_payload(blob)?)?;

        let target = if base_url.is_empty() {
            file_name
        } else {
            format!("{}/{}", base_url.trim_end_matches('/'), file_name)
        };
        rewritten.description = rewritten.description.replace(src.as_str(), &target);
        rewritten.input = rewritten.input.replace(src.as_str(), &target);
        rewritten.output = rewritten.output.replace(src.as_str(), &target);
    }

    Ok(rewritten)
}

/// The reference's extension including its dot, or "" when it has none
fn extension_of(src: &str) -> String {
    Path::new(src)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Exporters tolerate the line wrapping CDATA payloads usually carry
fn decode_payload(blob: &str) -> Result<Vec<u8>> {
    let compact: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact.as_bytes())?)
}

fn random_name(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| NAME_CHARS[rng.random_range(0..NAME_CHARS.len())] as char)
        .collect()
}
