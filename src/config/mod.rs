//! Rewrite configuration from `media-imports.toml`.
//!
//! # Options
//!
//! | Key            | Purpose                                                  |
//! |----------------|----------------------------------------------------------|
//! | `mount_prefix` | URL segment assets are served under (alias `pathname`)   |
//! | `base_url`     | File URL or path of the compiled document                |
//!
//! ```toml
//! mount_prefix = "blog-images"
//! base_url = "file:///home/me/site/posts/index.mdx"
//! ```
//!
//! Both keys are optional. CLI flags take precedence over the file.

mod error;
mod util;

pub use error::ConfigError;
pub use util::{find_config_file, looks_like_url, to_file_url};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "media-imports.toml";

/// Read-only options for one rewrite invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Logical URL segment under which resolved assets are served.
    /// `None` mounts at the root.
    #[serde(alias = "pathname")]
    pub mount_prefix: Option<String>,

    /// File URL of the compiled document. Needed only to convert
    /// `file:///` specifiers into relative ones.
    pub base_url: Option<String>,
}

impl RewriteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Load from an explicit path, or search upward from `cwd` for
    /// [`CONFIG_FILE`]. Falls back to defaults when nothing is found.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => match find_config_file(Path::new(CONFIG_FILE), cwd) {
                Some(path) => {
                    crate::debug!("config"; "using {}", path.display());
                    Self::from_path(&path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Apply CLI overrides.
    pub fn apply_overrides(&mut self, mount_prefix: Option<&String>, base_url: Option<&String>) {
        Self::update_option(&mut self.mount_prefix, mount_prefix);
        Self::update_option(&mut self.base_url, base_url);
    }

    /// Update config option if CLI value is provided.
    fn update_option(config_option: &mut Option<String>, cli_option: Option<&String>) {
        if let Some(option) = cli_option {
            *config_option = Some(option.clone());
        }
    }

    /// Validate and normalize in place.
    ///
    /// - `mount_prefix` must be a URL segment, not a URL
    /// - `base_url` becomes a `file:` URL; relative paths resolve against `cwd`
    /// - empty strings count as unset
    pub fn finalize(&mut self, cwd: &Path) -> Result<(), ConfigError> {
        if self.mount_prefix.as_deref().is_some_and(str::is_empty) {
            self.mount_prefix = None;
        }
        if let Some(prefix) = &self.mount_prefix
            && looks_like_url(prefix)
        {
            return Err(ConfigError::Validation(format!(
                "mount_prefix `{prefix}` must be a path segment such as `blog-images`, not a URL"
            )));
        }

        self.base_url = match self.base_url.take() {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => Some(to_file_url(&raw, cwd).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "base_url `{raw}` must be a file URL or a local path"
                ))
            })?),
        };
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
