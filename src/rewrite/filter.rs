//! Qualification filter: which specifiers are media imports worth rewriting.
//!
//! A specifier qualifies when it is a string literal, is not a network URL,
//! is file-relative (`./`, `../`) or a local file URL (`file:///`), and names
//! a recognized media file. Root-absolute paths (`/image.png`) never qualify,
//! with or without a mount prefix.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::resolve::FILE_URL_PREFIX;

/// `scheme://` not followed by a third slash, so `file:///` is admitted.
static PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+://(?:[^/]|$)").expect("valid protocol pattern"));

/// Why a candidate was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The specifier is not a string literal.
    NotString,
    /// Network or other protocol-prefixed URL.
    Protocol,
    /// Neither `./`, `../` nor `file:///`.
    NotRelative,
    /// Extension is not a recognized media type.
    NotMedia,
}

impl Skip {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::NotString => "not a string literal",
            Self::Protocol => "protocol-prefixed URL",
            Self::NotRelative => "not a relative path or file URL",
            Self::NotMedia => "not a media file",
        }
    }
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Media category of a recognized asset extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Classify by the text after the last `.` (case-insensitive).
    pub fn from_path(path: &str) -> Option<Self> {
        let (_, ext) = path.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => Some(Self::Image),
            "mp4" | "webm" => Some(Self::Video),
            "mp3" | "wav" | "ogg" => Some(Self::Audio),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// Whether `path` names a recognized media file.
#[inline]
pub fn is_media_file(path: &str) -> bool {
    MediaKind::from_path(path).is_some()
}

/// Whether `specifier` starts with a protocol other than `file:///`.
#[inline]
pub fn is_protocol_url(specifier: &str) -> bool {
    PROTOCOL.is_match(specifier)
}

/// Apply every check in order, returning the specifier when it qualifies.
pub fn qualify(specifier: &Value) -> Result<&str, Skip> {
    let specifier = specifier.as_str().ok_or(Skip::NotString)?;

    if is_protocol_url(specifier) {
        return Err(Skip::Protocol);
    }

    if !(specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with(FILE_URL_PREFIX))
    {
        return Err(Skip::NotRelative);
    }

    if !is_media_file(specifier) {
        return Err(Skip::NotMedia);
    }

    Ok(specifier)
}
