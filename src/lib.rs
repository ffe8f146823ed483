//! Rewrite media imports in compiled MDX into URL constants.
//!
//! An MDX compiler turns `![alt](./image.png)` and
//! `import img from "./image.png"` into ES module imports. Bundler-less hosts
//! cannot load an image as a module, so this crate swaps each such import in
//! the compiler's ESTree output for a `const` holding the asset's public URL:
//!
//! ```text
//! import imgUrl from "./image.png";   →   const imgUrl = "/blog-images/image.png";
//! ```
//!
//! # Example
//!
//! ```
//! use media_imports::{MediaImports, RewriteConfig};
//! use serde_json::json;
//!
//! let mut tree = json!({
//!     "type": "Program",
//!     "body": [{
//!         "type": "ImportDeclaration",
//!         "specifiers": [{
//!             "type": "ImportDefaultSpecifier",
//!             "local": { "type": "Identifier", "name": "imgUrl" }
//!         }],
//!         "source": { "type": "Literal", "value": "./image.png" }
//!     }]
//! });
//!
//! let config = RewriteConfig {
//!     mount_prefix: Some("blog-images".into()),
//!     base_url: None,
//! };
//! let report = MediaImports::new(config).rewrite(&mut tree);
//!
//! assert_eq!(report.rewrites[0].url, "/blog-images/image.png");
//! assert_eq!(tree["body"][0]["kind"], "const");
//! ```

pub mod ast;
pub mod config;
pub mod logger;
pub mod resolve;
pub mod rewrite;

pub use config::{ConfigError, RewriteConfig};
pub use resolve::{Diagnostic, Diagnostics, ResolvedUrl, relative_path, resolve_path};
pub use rewrite::{MediaImports, Rewrite, RewriteReport, Scan};
