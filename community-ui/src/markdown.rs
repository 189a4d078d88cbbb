//! Markdown rendering for community descriptions
//!
//! Uses pulldown-cmark for CommonMark with GitHub-flavored extras. The output is
//! injected with `dangerous_inner_html`, so raw HTML in the source is rendered as
//! text and link targets are limited to web and mail schemes.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use url::Url;

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render markdown to HTML.
pub fn md_to_html(input: &str) -> String {
    let parser = Parser::new_ext(input, build_options()).map(neutralise);

    let mut html_output = String::with_capacity(input.len() * 2);
    html::push_html(&mut html_output, parser);
    html_output
}

fn build_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

fn neutralise(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// Relative targets pass. Absolute ones must use a safe scheme. `Url` strips
/// the tabs, newlines and leading blanks browsers ignore, so `java\tscript:`
/// is caught too.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    match Url::parse(&dest) {
        Ok(url) if !SAFE_SCHEMES.contains(&url.scheme()) => CowStr::Borrowed("#"),
        _ => dest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_formatting() {
        let html = md_to_html("Talk about **Rust** and `cargo`.");
        assert!(html.contains("<strong>Rust</strong>"));
        assert!(html.contains("<code>cargo</code>"));
    }

    #[test]
    fn renders_tables_and_strikethrough() {
        let html = md_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old rules~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old rules</del>"));
    }

    #[test]
    fn raw_html_blocks_are_escaped() {
        let html = md_to_html("Rules\n\n<script>alert('x')</script>\n\nBe nice.");
        assert!(!html.to_lowercase().contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Be nice."));
    }

    #[test]
    fn unquoted_event_handlers_never_become_tags() {
        let html = md_to_html("<img src=x onerror=alert(document.cookie)>");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn quoted_handlers_on_any_element_are_escaped() {
        let html = md_to_html("<div onmouseover=\"alert(1)\">hover</div>");
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;div"));
    }

    #[test]
    fn slash_separated_svg_handlers_are_escaped() {
        let html = md_to_html("look <svg/onload=alert(1)> here");
        assert!(!html.contains("<svg"));
        assert!(html.contains("&lt;svg/onload=alert(1)&gt;"));
    }

    #[test]
    fn javascript_links_are_neutralised() {
        let html = md_to_html("[x](javascript:alert(1)) and [y](jav&#x61;script:alert(2))");
        assert!(!html.contains("script:alert"));
        assert_eq!(html.matches("href=\"#\"").count(), 2);

        let image = md_to_html("![pic](javascript:alert(1))");
        assert!(image.contains("src=\"#\""));
    }

    #[test]
    fn web_and_relative_links_are_kept() {
        let html = md_to_html("[rules](https://lemmy.ml/rules) and [modlog](/modlog/17)");
        assert!(html.contains("href=\"https://lemmy.ml/rules\""));
        assert!(html.contains("href=\"/modlog/17\""));
    }
}
