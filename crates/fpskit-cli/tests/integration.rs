//! Integration tests for the fpskit CLI
//!
//! These drive the command functions end to end over real directories:
//! FPS XML in, the per-problem file tree out, and the image inliner's
//! round trip.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tempfile::TempDir;

use fpskit_cli::app::{convert_command, convert_file, pack_command};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nstub";

fn sample_set() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<fps version="1.2">
  <item>
    <title><![CDATA[A+B Problem]]></title>
    <time_limit unit="ms"><![CDATA[1000]]></time_limit>
    <memory_limit unit="MB"><![CDATA[64]]></memory_limit>
    <description><![CDATA[<p>Add. <img src="fig/sum.png"/></p>]]></description>
    <sample_input><![CDATA[1 2]]></sample_input>
    <sample_output><![CDATA[3]]></sample_output>
    <test_input><![CDATA[10 20]]></test_input>
    <test_output><![CDATA[30]]></test_output>
    <test_input><![CDATA[7 8]]></test_input>
    <test_output><![CDATA[15]]></test_output>
    <spj language="C"><![CDATA[int spj() {{ return 0; }}]]></spj>
    <solution language="C++"><![CDATA[int main() {{ return 0; }}]]></solution>
    <img>
      <src><![CDATA[fig/sum.png]]></src>
      <base64><![CDATA[{blob}]]></base64>
    </img>
  </item>
</fps>
"#,
        blob = STANDARD.encode(PNG_BYTES)
    )
}

#[test]
fn test_convert_writes_problem_tree() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("set.xml"), sample_set()).unwrap();

    convert_command(input.path(), output.path()).unwrap();

    let problem_dir = output.path().join("A+B Problem");
    assert_eq!(
        fs::read_to_string(problem_dir.join("data/1.in")).unwrap(),
        "10 20"
    );
    assert_eq!(
        fs::read_to_string(problem_dir.join("data/2.out")).unwrap(),
        "15"
    );

    let statement = fs::read_to_string(problem_dir.join("A+B Problem.html")).unwrap();
    // the statement references the extracted image, not the FPS-internal path
    assert!(!statement.contains("fig/sum.png"));
    assert!(statement.contains("<h2>时间限制</h2><fieldset>1000ms</fieldset>"));

    let spj = fs::read_to_string(problem_dir.join("A+B Problem-spj.html")).unwrap();
    assert!(spj.contains("<h2>SPJ</h2>"));
    let solution = fs::read_to_string(problem_dir.join("A+B Problem-solution.html")).unwrap();
    assert!(solution.contains("<h2>题解</h2>"));

    // exactly one extracted image, with the original bytes and extension
    let image: Vec<_> = fs::read_dir(&problem_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "png"))
        .collect();
    assert_eq!(image.len(), 1);
    assert_eq!(fs::read(&image[0]).unwrap(), PNG_BYTES);
}

#[test]
fn test_convert_continues_after_bad_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("a-bad.xml"), "<fps version=\"9.9\"></fps>").unwrap();
    fs::write(input.path().join("b-good.xml"), sample_set()).unwrap();

    // the batch as a whole succeeds; the bad file is skipped
    convert_command(input.path(), output.path()).unwrap();
    assert!(output.path().join("A+B Problem").is_dir());
}

#[test]
fn test_convert_file_reports_parse_errors() {
    let input = TempDir::new().unwrap();
    let file = input.path().join("broken.xml");
    fs::write(
        &file,
        "<fps version=\"1.2\"><item><sample_output>3</sample_output></item></fps>",
    )
    .unwrap();

    let output = TempDir::new().unwrap();
    let err = convert_file(&file, output.path()).unwrap_err();
    assert!(err.to_string().contains("broken.xml"));
    // nothing was written for the failing document
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_pack_round_trips_image_bytes() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("page.html"), "<img src=\"foo.png\"/>").unwrap();
    fs::write(input.path().join("foo.png"), PNG_BYTES).unwrap();

    pack_command(input.path(), output.path()).unwrap();

    let packed = fs::read_to_string(output.path().join("packed-page.html")).unwrap();
    assert!(packed.contains("src=\"data:image/png;base64,"));
    let encoded = packed
        .split("base64,")
        .nth(1)
        .unwrap()
        .split('"')
        .next()
        .unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), PNG_BYTES);
}

#[test]
fn test_pack_skips_page_with_missing_asset() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("ok.html"), "<p>plain</p>").unwrap();
    fs::write(input.path().join("broken.html"), "<img src=\"gone.png\"/>").unwrap();

    pack_command(input.path(), output.path()).unwrap();

    assert!(output.path().join("packed-ok.html").exists());
    assert!(!output.path().join("packed-broken.html").exists());
}

#[test]
fn test_missing_input_is_an_invocation_error() {
    let output = TempDir::new().unwrap();
    assert!(convert_command(Path::new("no/such/dir"), output.path()).is_err());
}
