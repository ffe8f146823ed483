//! Lexical path helpers.
//!
//! All functions operate on `/`-separated strings and never touch the
//! file system, so results are identical on every platform.

use std::sync::LazyLock;

use regex::Regex;

/// One leading `./`, or a run of leading `../`.
static LEADING_ASCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\./|(?:\.\./)+)").expect("valid ascent pattern"));

/// Strip any number of leading and trailing slashes from a mount prefix.
///
/// # Examples
/// ```
/// use media_imports::resolve::normalize_mount_prefix;
/// assert_eq!(normalize_mount_prefix("/blog-images/"), "blog-images");
/// assert_eq!(normalize_mount_prefix("////tests////"), "tests");
/// assert_eq!(normalize_mount_prefix("/"), "");
/// ```
#[inline]
pub fn normalize_mount_prefix(prefix: &str) -> &str {
    prefix.trim_matches('/')
}

/// Lexically normalize a `/`-separated path.
///
/// - `.` segments and repeated separators are dropped
/// - `..` removes the preceding segment, or is kept when there is none
///   (dropped instead for absolute paths)
/// - a trailing separator is preserved
/// - an empty relative result renders as `.`
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let mut normalized = String::with_capacity(path.len());
    if absolute {
        normalized.push('/');
    }
    normalized.push_str(&segments.join("/"));
    if segments.is_empty() && !absolute {
        normalized.push('.');
    }
    if trailing && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Remove a single leading `./` or a run of leading `../` segments.
///
/// Ascent above the root is discarded rather than reported.
#[inline]
pub fn strip_ascent(path: &str) -> &str {
    LEADING_ASCENT.find(path).map_or(path, |m| &path[m.end()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mount_prefix() {
        assert_eq!(normalize_mount_prefix("blog-images"), "blog-images");
        assert_eq!(normalize_mount_prefix("/tests/"), "tests");
        assert_eq!(normalize_mount_prefix("////tests////"), "tests");
        assert_eq!(normalize_mount_prefix("/a/b/"), "a/b");
        assert_eq!(normalize_mount_prefix(""), "");
        assert_eq!(normalize_mount_prefix("///"), "");
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(normalize("tests/./image.png"), "tests/image.png");
        assert_eq!(normalize("./assets/./image.png"), "assets/image.png");
        assert_eq!(normalize("a//b///c.png"), "a/b/c.png");
    }

    #[test]
    fn test_normalize_ascent_within_depth() {
        assert_eq!(normalize("tests/assets/../image.png"), "tests/image.png");
        assert_eq!(normalize("a/b/../../c.png"), "c.png");
    }

    #[test]
    fn test_normalize_ascent_beyond_root() {
        assert_eq!(normalize("a/../../image.png"), "../image.png");
        assert_eq!(normalize("../../image.png"), "../../image.png");
        assert_eq!(normalize("/../image.png"), "/image.png");
    }

    #[test]
    fn test_normalize_empty_and_trailing() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("a/.."), ".");
        assert_eq!(normalize("./"), "./");
        assert_eq!(normalize("a/../"), "./");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("a/b/"), "a/b/");
    }

    #[test]
    fn test_strip_ascent() {
        assert_eq!(strip_ascent("./image.png"), "image.png");
        assert_eq!(strip_ascent("../image.png"), "image.png");
        assert_eq!(strip_ascent("../../../image.png"), "image.png");
        assert_eq!(strip_ascent("image.png"), "image.png");
        // Only one leading `./` is removed
        assert_eq!(strip_ascent("././image.png"), "./image.png");
        // Interior ascent is left alone
        assert_eq!(strip_ascent("a/../image.png"), "a/../image.png");
        assert_eq!(strip_ascent("..image.png"), "..image.png");
    }
}
