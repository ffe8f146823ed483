//! Asset specifier resolution.
//!
//! Turns the raw specifier of a media import into the absolute URL path the
//! asset is served from:
//!
//! ```text
//! "./image.png"                  + mount "blog-images" → "/blog-images/image.png"
//! "../../image.png"              + no mount            → "/image.png"
//! "file:///site/posts/image.png" + base "file:///site/posts/index.mdx"
//!                                + mount "blog-images" → "/blog-images/image.png"
//! ```
//!
//! Resolution is pure: the same specifier and options always produce the
//! same URL. Ascent past the mount root is dropped, never an error.

mod diagnostic;
mod normalize;
mod relative;

use std::sync::Arc;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use normalize::{normalize, normalize_mount_prefix, strip_ascent};
pub use relative::{FILE_URL_PREFIX, relative_path};

/// Resolved asset URL path.
///
/// Invariants:
/// - Always starts with exactly one `/`
/// - Contains no `.` segments and no unresolved `..` segments
/// - The mount prefix, when configured, is the first segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedUrl(Arc<str>);

impl ResolvedUrl {
    /// Build from a root-relative remainder, adding the single leading `/`.
    fn from_remainder(remainder: &str) -> Self {
        let remainder = remainder.trim_start_matches('/');
        Self(Arc::from(format!("/{remainder}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResolvedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ResolvedUrl {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for ResolvedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for ResolvedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Resolve a media specifier to its served URL path.
///
/// `mount_prefix` is the URL segment assets are served under (slashes
/// trimmed). `base_url` is the file URL of the compiled document, needed
/// only for `file:///` specifiers; when it is missing the specifier's
/// scheme is stripped, the absolute path is used as-is and a diagnostic is
/// recorded.
///
/// Callers filter out protocol-prefixed specifiers (`https://...`) first.
pub fn resolve_path(
    specifier: &str,
    mount_prefix: Option<&str>,
    base_url: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> ResolvedUrl {
    let mount = normalize_mount_prefix(mount_prefix.unwrap_or_default());

    // e + U+0301 and U+00E9 must resolve identically
    let specifier: String = specifier.nfc().collect();

    let specifier = if specifier.starts_with(FILE_URL_PREFIX) {
        relative_path(&specifier, base_url, diagnostics)
    } else {
        specifier
    };

    // Unconverted file URLs keep only their absolute path
    let relative = specifier
        .strip_prefix(FILE_URL_PREFIX)
        .unwrap_or(&specifier);

    let joined = if mount.is_empty() {
        normalize(relative)
    } else {
        normalize(&format!("{mount}/{relative}"))
    };

    ResolvedUrl::from_remainder(strip_ascent(&joined))
}
