//! Assembly of the final meeting brief

use std::ops::Range;

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Section headings of the brief, in output order.
pub const SECTION_HEADINGS: [&str; 4] = [
    "Company Context",
    "Industry Analysis",
    "Meeting Strategy & Agenda",
    "Executive Brief",
];

/// The four generated sections of one preparation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSections {
    pub company_analysis: String,
    pub industry_analysis: String,
    pub strategy: String,
    pub brief: String,
}

/// Final document returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingBrief {
    pub markdown: String,
    pub html: String,
}

impl MeetingBrief {
    /// Concatenate the sections under their headings and render HTML.
    pub fn assemble(company_name: &str, sections: &GeneratedSections) -> Self {
        let markdown = render_markdown(company_name, sections);
        let html = render_html(&markdown);
        Self { markdown, html }
    }
}

/// Build the Markdown brief.
pub fn render_markdown(company_name: &str, sections: &GeneratedSections) -> String {
    let bodies = [
        &sections.company_analysis,
        &sections.industry_analysis,
        &sections.strategy,
        &sections.brief,
    ];

    // Single line so a multi-line name cannot open extra headings.
    let title = company_name.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut markdown = format!("# Meeting Preparation for {}\n", title);
    for (heading, body) in SECTION_HEADINGS.iter().zip(bodies) {
        markdown.push_str("\n## ");
        markdown.push_str(heading);
        markdown.push('\n');
        markdown.push_str(&demote_headings(body.trim()));
        markdown.push('\n');
    }
    markdown
}

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render Markdown to an HTML fragment.
///
/// Raw HTML is escaped, so generated text can only produce the elements
/// Markdown itself produces.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Push level 1-2 headings in generated text down to level 3.
///
/// Generated sections sit under `##` headings, so their own headings must
/// not compete with the brief's outline. Headings are found by parsing, which
/// covers ATX and setext forms as well as headings nested in quotes or lists.
/// Each one is rewritten in place as a single-line `###` heading.
fn demote_headings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    // Source range of the open heading and of its inline content.
    let mut open: Option<(Range<usize>, Option<Range<usize>>)> = None;

    for (event, range) in Parser::new_ext(text, markdown_options()).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1 | HeadingLevel::H2,
                ..
            }) => open = Some((range, None)),
            Event::End(TagEnd::Heading(HeadingLevel::H1 | HeadingLevel::H2)) => {
                let Some((heading, content)) = open.take() else {
                    continue;
                };
                out.push_str(&text[copied..heading.start]);
                out.push_str("###");
                if let Some(content) = content {
                    out.push(' ');
                    out.push_str(&single_line(&text[content]));
                }
                if text[heading.clone()].ends_with('\n') {
                    out.push('\n');
                }
                copied = heading.end;
            }
            _ => {
                if let Some((_, content)) = open.as_mut() {
                    *content = Some(match content.take() {
                        Some(seen) => seen.start..seen.end.max(range.end),
                        None => range,
                    });
                }
            }
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Join the lines of a setext heading, dropping quote markers on continuation lines.
fn single_line(content: &str) -> String {
    let mut lines = content.lines();
    let mut joined = lines.next().unwrap_or_default().trim().to_string();
    for line in lines {
        let line = line.trim_start_matches(|c: char| c == '>' || c.is_whitespace());
        let line = line.trim_end();
        if !line.is_empty() {
            joined.push(' ');
            joined.push_str(line);
        }
    }
    joined
}
