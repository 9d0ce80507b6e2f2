//! URL routes for document references.
//!
//! A document at `kernel/trace/ftrace.md` is served at
//! `/kernel/trace/ftrace.html`. `README.md` and `index.md` are served at
//! their directory. Routes are prefixed with the site base path.

use nb_config::DocumentReference;

/// File names served as their directory's landing page.
const INDEX_FILES: [&str; 2] = ["readme.md", "index.md"];

/// Source extension replaced by `.html`.
const SOURCE_EXT: &str = ".md";

/// Compute the URL a document is served at.
///
/// External links (`scheme://...`) and `mailto:` are returned unchanged.
///
/// # Examples
///
/// ```
/// use nb_config::DocumentReference;
/// use nb_nav::route;
///
/// let doc = DocumentReference::new("/kernel/trace/ftrace.md");
/// assert_eq!(route("/", &doc), "/kernel/trace/ftrace.html");
/// assert_eq!(route("/notes/", &DocumentReference::new("kernel/README.md")), "/notes/kernel/");
/// ```
#[must_use]
pub fn route(base: &str, doc: &DocumentReference) -> String {
    let path = doc.as_str();
    if is_external(path) {
        return path.to_owned();
    }

    let relative = path.trim_start_matches('/');
    let (dir, file) = match relative.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, relative),
    };

    let target = if INDEX_FILES.contains(&file.to_ascii_lowercase().as_str()) {
        dir.map_or_else(String::new, |d| format!("{d}/"))
    } else if let Some(stem) = strip_suffix_ignore_case(relative, SOURCE_EXT) {
        format!("{stem}.html")
    } else {
        relative.to_owned()
    };

    format!("{}{target}", normalize_base(base))
}

/// Ensure the base starts and ends with `/`.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    let tail = value.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &value[..split])
}

fn is_external(path: &str) -> bool {
    path.contains("://") || path.starts_with("mailto:")
}
