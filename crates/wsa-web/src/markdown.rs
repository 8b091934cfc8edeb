//! Markdown rendering for generated text.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Link schemes kept as-is; any other scheme becomes an empty target.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render model output to HTML. Raw HTML in the input is escaped, not passed through,
/// and links with a scheme outside [`SAFE_SCHEMES`] lose their target.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Relative targets and anchors have no scheme and pass through.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let unsafe_scheme = url
        .split_once(':')
        .map(|(head, _)| head.trim())
        .filter(|head| !head.contains(['/', '?', '#']))
        .is_some_and(|scheme| !SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe)));

    if unsafe_scheme {
        CowStr::Borrowed("")
    } else {
        url
    }
}
