//! File URL to relative path conversion.
//!
//! The inverse of the host compiler's dynamic specifier resolution: given an
//! absolute `file:///` specifier and the document's own file URL, produce the
//! `./` or `../` path the author would have written.

use percent_encoding::percent_decode_str;
use unicode_normalization::UnicodeNormalization;
use url::Url;

use super::diagnostic::{Diagnostic, Diagnostics};

/// Scheme prefix of a local file URL.
pub const FILE_URL_PREFIX: &str = "file:///";

/// Convert an absolute file URL into a path relative to `base_url`.
///
/// When `base_url` names a file (its last segment has an extension) the
/// file's directory is used. The result always starts with `./` or `../`;
/// a target equal to the base directory yields `./`.
///
/// Without a usable base the specifier is returned unchanged and a
/// diagnostic is recorded.
pub fn relative_path(
    absolute_url: &str,
    base_url: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> String {
    let Some(base_url) = base_url else {
        diagnostics.push(Diagnostic::MissingBaseUrl {
            specifier: absolute_url.to_string(),
        });
        return absolute_url.to_string();
    };

    let Some(target) = file_url_segments(absolute_url) else {
        diagnostics.push(Diagnostic::InvalidFileUrl {
            url: absolute_url.to_string(),
            specifier: absolute_url.to_string(),
        });
        return absolute_url.to_string();
    };

    let Some(mut base) = file_url_segments(base_url) else {
        diagnostics.push(Diagnostic::InvalidFileUrl {
            url: base_url.to_string(),
            specifier: absolute_url.to_string(),
        });
        return absolute_url.to_string();
    };

    if base.last().is_some_and(|name| has_extension(name)) {
        base.pop();
    }

    let relative = lexical_relative(&base, &target);
    if relative.starts_with("..") {
        relative
    } else {
        format!("./{relative}")
    }
}

/// Decoded, NFC-normalized path segments of a `file:` URL.
fn file_url_segments(raw: &str) -> Option<Vec<String>> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != "file" {
        return None;
    }

    let segments: Vec<String> = url
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8_lossy()
                .nfc()
                .collect::<String>()
        })
        .collect();
    Some(segments)
}

/// Whether a file name carries an extension (`index.mdx`, not `.config`).
#[inline]
fn has_extension(name: &str) -> bool {
    name.rfind('.').is_some_and(|pos| pos > 0)
}

/// Relative path from directory `from` to `to`, both absolute segment lists.
///
/// Returns an empty string when both are the same location.
fn lexical_relative(from: &[String], to: &[String]) -> String {
    let common = from
        .iter()
        .zip(to)
        .take_while(|(a, b)| a == b)
        .count();

    let ascent = std::iter::repeat_n("..", from.len() - common);
    let descent = to[common..].iter().map(String::as_str);
    ascent.chain(descent).collect::<Vec<_>>().join("/")
}
