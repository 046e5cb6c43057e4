//! tsgen - TypeScript project scaffolder
//!
//! tsgen creates a new project directory containing a starter source file,
//! a compiler config, a rendered `package.json`, a Dockerfile and ignore
//! files, all from a fixed bundled set.

pub mod assets;
pub mod config;
pub mod error;
pub mod fs;
pub mod materializer;
pub mod models;
pub mod prompt;
pub mod scaffold;
pub mod template;

// Re-exports for convenience
pub use assets::AssetSource;
pub use config::{ColorMode, Config};
pub use error::{ScaffoldError, ScaffoldResult};
pub use fs::{FileSystem, LocalFs};
pub use materializer::Materializer;
pub use models::{ProjectName, StaticAsset, TemplateAsset, TemplateView, DEFAULT_PROJECT_NAME};
pub use prompt::{resolve_project_name, AcceptDefaults, DialoguerPrompter, Prompter};
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder};
pub use template::{render, render_escaped, Escape};
