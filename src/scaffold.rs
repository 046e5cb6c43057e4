//! Project generation
//!
//! `Scaffolder` lays out a new TypeScript project under `<cwd>/<name>`:
//!
//! ```text
//! <name>/
//!   src/index.ts
//!   tsconfig.json
//!   package.json      (rendered with { projName })
//!   Dockerfile
//!   .gitignore
//!   .dockerignore
//! ```
//!
//! Steps run in that order and each one completes before the next starts.
//! The first failure aborts the run; files already written stay on disk.

use std::path::PathBuf;

use serde::Serialize;

use crate::assets::AssetSource;
use crate::error::ScaffoldResult;
use crate::fs::{FileSystem, LocalFs};
use crate::materializer::Materializer;
use crate::models::{ProjectName, StaticAsset, TemplateAsset, TemplateView};

/// Explicit inputs that would otherwise be ambient process state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Directory the project directory is created in
    pub cwd: PathBuf,
    /// Where bundled files are read from
    pub assets: AssetSource,
}

impl ScaffoldOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            assets: AssetSource::Embedded,
        }
    }

    pub fn with_assets(mut self, assets: AssetSource) -> Self {
        self.assets = assets;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub output_path: PathBuf,
    /// Generated files, in write order
    pub files: Vec<PathBuf>,
}

pub struct Scaffolder<F: FileSystem = LocalFs> {
    fs: F,
    options: ScaffoldOptions,
}

impl Scaffolder<LocalFs> {
    pub fn new(options: ScaffoldOptions) -> Self {
        Self::with_fs(LocalFs::new(), options)
    }
}

impl<F: FileSystem> Scaffolder<F> {
    pub fn with_fs(fs: F, options: ScaffoldOptions) -> Self {
        Self { fs, options }
    }

    /// Generate the project for `name`.
    pub fn generate(&self, name: &ProjectName) -> ScaffoldResult<ScaffoldReport> {
        let output_path = name.output_path(&self.options.cwd);
        let materializer = Materializer::new(&self.fs, &self.options.assets);
        let mut files = Vec::with_capacity(6);

        tracing::info!(
            project = %name,
            path = %output_path.display(),
            assets = %self.options.assets.describe(),
            "generating project"
        );

        materializer.ensure_directory(&output_path)?;

        // Starter source
        materializer.ensure_directory(&output_path.join("src"))?;
        let dest = output_path.join(StaticAsset::StarterSource.destination());
        materializer.copy_static(StaticAsset::StarterSource, &dest)?;
        tracing::debug!(file = %dest.display(), "copied starter source");
        files.push(dest);

        let dest = output_path.join(StaticAsset::TypeCheckerConfig.destination());
        materializer.copy_static(StaticAsset::TypeCheckerConfig, &dest)?;
        tracing::debug!(file = %dest.display(), "copied type-checker config");
        files.push(dest);

        let manifest = TemplateAsset::PackageManifest;
        let dest = output_path.join(manifest.destination());
        materializer.render_template(manifest, &TemplateView::for_project(name), &dest)?;
        tracing::debug!(file = %dest.display(), "rendered package manifest");
        files.push(dest);

        for asset in [
            StaticAsset::ContainerBuild,
            StaticAsset::GitIgnore,
            StaticAsset::DockerIgnore,
        ] {
            let dest = output_path.join(asset.destination());
            materializer.copy_static(asset, &dest)?;
            tracing::debug!(file = %dest.display(), "copied {}", asset.file_name());
            files.push(dest);
        }

        tracing::info!(files = files.len(), "project generated");

        Ok(ScaffoldReport {
            project_name: name.clone(),
            output_path,
            files,
        })
    }
}
