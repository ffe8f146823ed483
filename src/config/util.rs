//! Configuration utility functions.

use std::path::{Path, PathBuf};

use url::Url;

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/         ← start
/// /home/user/site/media-imports.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Normalize a `base_url` option into a `file:` URL string.
///
/// Accepts a `file:` URL as-is, or a filesystem path which is made absolute
/// against `cwd`. Returns `None` for other URL schemes or unconvertible paths.
///
/// # Examples
/// ```ignore
/// to_file_url("file:///site/post.mdx", cwd)  -> Some("file:///site/post.mdx")
/// to_file_url("/site/post.mdx", cwd)         -> Some("file:///site/post.mdx")
/// to_file_url("posts/a.mdx", "/site")        -> Some("file:///site/posts/a.mdx")
/// to_file_url("https://example.com/", cwd)   -> None
/// ```
pub fn to_file_url(raw: &str, cwd: &Path) -> Option<String> {
    if looks_like_url(raw) {
        let url = Url::parse(raw).ok()?;
        return (url.scheme() == "file").then(|| url.to_string());
    }

    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    Url::from_file_path(&absolute).ok().map(|url| url.to_string())
}

/// Whether `value` starts with a URL scheme (`file:`, `https:`).
///
/// A single ASCII letter before `:` is a Windows drive, not a scheme.
pub fn looks_like_url(value: &str) -> bool {
    value.find(':').is_some_and(|pos| {
        pos > 1
            && value[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

// ============================================================================
// tests
// ============================================================================
