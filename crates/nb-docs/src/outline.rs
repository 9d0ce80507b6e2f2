//! Title and heading outline extraction from Markdown.

use std::collections::HashMap;

use nb_nav::Header;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Title and headings of one document.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Outline {
    /// Text of the first H1, if any.
    pub title: Option<String>,
    /// H2..H6 nested by level.
    pub headers: Vec<Header>,
}

/// Extract the outline of a Markdown document.
///
/// Slugs are unique within the document; repeats get `-1`, `-2`, ... suffixes.
pub(crate) fn extract_outline(markdown: &str) -> Outline {
    let mut title = None;
    let mut flat = Vec::new();
    let mut slugs = SlugCounter::default();
    let mut current: Option<(u8, Option<String>, String)> = None;

    for event in Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let id = id.map(|id| id.to_string());
                current = Some((heading_level_to_num(level), id, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some((level, id, text)) = current.take() else {
                    continue;
                };
                let text = text.trim().to_owned();
                // {#id} attributes are used as written
                let slug = match id {
                    Some(id) => slugs.unique(&id),
                    None => slugs.unique(&slugify(&text)),
                };
                if level == 1 {
                    title.get_or_insert(text);
                } else {
                    flat.push(Header {
                        level,
                        title: text,
                        slug,
                        children: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    }

    Outline {
        title,
        headers: nest(flat),
    }
}

/// Nest a flat heading list by level.
///
/// A heading becomes a child of the nearest preceding heading with a lower
/// level. Skipped levels (H2 followed by H4) still nest.
fn nest(flat: Vec<Header>) -> Vec<Header> {
    let mut roots = Vec::new();
    let mut stack: Vec<Header> = Vec::new();

    for header in flat {
        while let Some(top) = stack.pop() {
            if top.level < header.level {
                stack.push(top);
                break;
            }
            attach(&mut roots, &mut stack, top);
        }
        stack.push(header);
    }
    while let Some(top) = stack.pop() {
        attach(&mut roots, &mut stack, top);
    }

    roots
}

fn attach(roots: &mut Vec<Header>, stack: &mut [Header], header: Header) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(header),
        None => roots.push(header),
    }
}

/// Tracks slug usage to generate unique anchors.
#[derive(Default)]
struct SlugCounter {
    counts: HashMap<String, usize>,
}

impl SlugCounter {
    fn unique(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_owned()).or_insert(0);
        let slug = if *count == 0 {
            base.to_owned()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

/// Convert heading text to an anchor slug.
///
/// Keeps letters and digits of any script, lowercased, and joins words with
/// `-`; `_` counts as a word separator, so `thread_info` becomes `thread-info`.
pub(crate) fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
