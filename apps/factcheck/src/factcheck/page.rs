//! Server-rendered page for the fact checker: one textarea, one button, one outcome box.

use pulldown_cmark::{html, Event, Options, Parser};

/// What to show below the form after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome<'a> {
    /// Blank claim.
    Warning(&'a str),
    /// Missing credential.
    Error(&'a str),
    /// Text returned by the invoker, success or remote error alike. Rendered as markdown.
    Result(&'a str),
}

const TITLE: &str = "AI Fact Checker";
const INTRO: &str =
    "Enter a claim or information below to verify its accuracy using Google Gemini.";
const QUESTION: &str = "What information would you like to fact-check?";
const PLACEHOLDER: &str = "e.g., The Great Wall of China is visible from the moon.";
const BUTTON: &str = "Verify Information";
const RESULT_HEADING: &str = "Fact Check Result:";
const FOOTER: &str = "Note: AI can make mistakes. \
    Always cross-reference important information with primary sources.";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
    textarea{width:100%;min-height:8rem}\
    .warning{background:#fff4d6;padding:.75rem}\
    .error{background:#fde2e2;padding:.75rem}\
    .result{overflow-wrap:anywhere}\
    footer{color:#666;border-top:1px solid #ddd;margin-top:2rem;padding-top:.5rem}";

/// Renders the full page. `claim` is echoed back into the textarea.
pub fn render_page(claim: &str, outcome: Option<PageOutcome<'_>>) -> String {
    let outcome_html = match outcome {
        None => String::new(),
        Some(PageOutcome::Warning(msg)) => {
            format!(r#"<div class="warning" role="alert">{}</div>"#, escape_html(msg))
        }
        Some(PageOutcome::Error(msg)) => {
            format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(msg))
        }
        Some(PageOutcome::Result(text)) => format!(
            r#"<h2>{RESULT_HEADING}</h2><div class="result">{}</div>"#,
            render_markdown(text)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>&#128269; {TITLE}</h1>
<p>{INTRO}</p>
<form method="post" action="/" onsubmit="this.querySelector('button').disabled=true">
<label for="claim">{QUESTION}</label>
<textarea id="claim" name="claim" placeholder="{PLACEHOLDER}">{claim}</textarea>
<button type="submit">{BUTTON}</button>
</form>
{outcome_html}
<footer>{FOOTER}</footer>
</body>
</html>
"#,
        claim = escape_html(claim),
    )
}

/// Markdown to HTML. Raw HTML in the model output is emitted as escaped text.
fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
