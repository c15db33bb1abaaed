//! HTML page assembly
//!
//! Builds the statement, special-judge and solution pages for one problem.
//! The markup mirrors what HUSTOJ-family tools emit: a flat fieldset
//! layout with Chinese section headings, statement text spliced in as-is
//! (FPS statements are already HTML fragments).

use std::fs;
use std::path::Path;

use fpskit_model::{Problem, Snippet};

use crate::error::Result;

/// Build the statement page for one problem
pub fn statement_page(problem: &Problem) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>");
    html.push_str(&format!("<h1>{}</h1><hr/>", problem.title));
    html.push_str(&format!(
        "<h2>题目描述</h2><fieldset>{}</fieldset>",
        problem.description
    ));
    html.push_str(&format!(
        "<h2>输入描述</h2><fieldset>{}</fieldset>",
        problem.input
    ));
    html.push_str(&format!(
        "<h2>输出描述</h2><fieldset>{}</fieldset>",
        problem.output
    ));

    let time = problem
        .time_limit
        .map(|t| format!("{}{}", t.value, t.unit))
        .unwrap_or_default();
    html.push_str(&format!("<h2>时间限制</h2><fieldset>{time}</fieldset>"));
    let memory = problem
        .memory_limit
        .map(|m| format!("{}{}", m.value, m.unit))
        .unwrap_or_default();
    html.push_str(&format!("<h2>空间限制</h2><fieldset>{memory}</fieldset>"));

    html.push_str("<h2>样例</h2><fieldset>");
    for (index, sample) in problem.samples.iter().enumerate() {
        html.push_str(&format!(
            "<fieldset><legend>样例{}</legend>\
             <h3>输入</h3><fieldset><pre>{}</pre></fieldset>\
             <h3>输出</h3><fieldset><pre>{}</pre></fieldset></fieldset>",
            index + 1,
            sample.input.as_deref().unwrap_or_default(),
            sample.output.as_deref().unwrap_or_default(),
        ));
    }
    html.push_str("</fieldset>");

    html.push_str(&format!(
        "<h2>提示</h2><fieldset>{}</fieldset>",
        problem.hint.as_deref().unwrap_or_default()
    ));
    html.push_str(&format!(
        "<h2>来源</h2><fieldset>{}</fieldset>",
        problem.source.as_deref().unwrap_or_default()
    ));

    snippet_section(&mut html, "程序样板", &problem.template);
    snippet_section(&mut html, "自动前缀", &problem.prepend);
    snippet_section(&mut html, "自动后缀", &problem.append);

    html
}

/// Build the special-judge page; the SPJ section only appears when the
/// problem has one
pub fn spj_page(problem: &Problem) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>");
    html.push_str(&format!("<h1>{}</h1><hr/>", problem.title));
    if let Some(spj) = &problem.spj {
        html.push_str("<h2>SPJ</h2><fieldset>");
        snippet_fieldset(&mut html, spj);
        html.push_str("</fieldset>");
    }
    html
}

/// Build the solution page; empty below the heading rule when the problem
/// carries no solutions
pub fn solution_page(problem: &Problem) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>");
    html.push_str(&format!("<h1>{}</h1><hr/>", problem.title));
    snippet_section(&mut html, "题解", &problem.solution);
    html
}

fn snippet_section(html: &mut String, heading: &str, snippets: &[Snippet]) {
    if snippets.is_empty() {
        return;
    }
    html.push_str(&format!("<h2>{heading}</h2><fieldset>"));
    for snippet in snippets {
        snippet_fieldset(html, snippet);
    }
    html.push_str("</fieldset>");
}

fn snippet_fieldset(html: &mut String, snippet: &Snippet) {
    html.push_str(&format!(
        "<fieldset><legend>{}</legend><pre>{}</pre></fieldset>",
        snippet.language,
        snippet.code.as_deref().unwrap_or_default(),
    ));
}

/// Write the statement page as `<title>.html` under `base_dir`
pub fn save_statement_page(problem: &Problem, base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir)?;
    let path = base_dir.join(format!("{}.html", problem.title));
    fs::write(path, statement_page(problem))?;
    Ok(())
}

/// Write the special-judge page as `<title>-spj.html` under `base_dir`
pub fn save_spj_page(problem: &Problem, base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir)?;
    let path = base_dir.join(format!("{}-spj.html", problem.title));
    fs::write(path, spj_page(problem))?;
    Ok(())
}

/// Write the solution page as `<title>-solution.html` under `base_dir`
pub fn save_solution_page(problem: &Problem, base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir)?;
    let path = base_dir.join(format!("{}-solution.html", problem.title));
    fs::write(path, solution_page(problem))?;
    Ok(())
}
