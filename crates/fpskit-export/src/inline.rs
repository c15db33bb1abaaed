//! Standalone HTML image inlining
//!
//! Rewrites every `<img src>` reference of an HTML document as a
//! self-contained `data:` URL, so a statement page survives being moved
//! around without its asset directory. Shares no state with the parser.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;

use crate::error::{ExportError, Result};

/// Map an image file extension to its `data:image/...` MIME subtype
///
/// Anything outside the table is fatal: emitting a wrong subtype would
/// produce a page that renders nothing, silently.
pub fn mime_for_extension(ext: &str) -> Result<&'static str> {
    Ok(match ext.to_ascii_lowercase().as_str() {
        "apng" => "apng",
        "avif" => "avif",
        "gif" => "gif",
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "jpeg",
        "png" => "png",
        "svg" => "svg+xml",
        "webp" => "webp",
        "bmp" => "bmp",
        "ico" | "cur" => "x-icon",
        "tif" | "tiff" => "tiff",
        other => return Err(ExportError::UnsupportedImageType(other.to_string())),
    })
}

fn img_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<img\b[^>]*?\bsrc\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#).unwrap()
    })
}

/// Inline every image reference of `html`, resolving files relative to
/// `base_dir` (the document's directory); a leading `/` is stripped first
pub fn pack_images(html: &str, base_dir: &Path) -> Result<String> {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for caps in img_src_re().captures_iter(html) {
        let Some(reference) = caps.name("dq").or_else(|| caps.name("sq")) else {
            continue;
        };
        out.push_str(&html[last..reference.start()]);
        out.push_str(&data_url(reference.as_str(), base_dir)?);
        last = reference.end();
    }
    out.push_str(&html[last..]);

    Ok(out)
}

fn data_url(reference: &str, base_dir: &Path) -> Result<String> {
    let ext = reference.rsplit('.').next().unwrap_or_default();
    let mime = mime_for_extension(ext)?;

    let relative = reference.strip_prefix('/').unwrap_or(reference);
    let bytes = fs::read(base_dir.join(relative))?;

    Ok(format!("data:image/{mime};base64,{}", STANDARD.encode(bytes)))
}
