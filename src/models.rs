//! Core data models for tsgen
//!
//! Defines the values that flow through a scaffolding run:
//! - `ProjectName`: validated, non-empty project name
//! - `TemplateView`: variables available to template rendering
//! - `StaticAsset` / `TemplateAsset`: the bundled files and where they land

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::template::Escape;

/// Project name suggested when the operator is prompted
pub const DEFAULT_PROJECT_NAME: &str = "my-ts-project";

/// Template variable holding the project name
pub const PROJECT_NAME_VAR: &str = "projName";

/// A non-empty project name.
///
/// Whitespace-only input counts as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> ScaffoldResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScaffoldError::MissingProjectName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory the project is generated into, always under `cwd`.
    ///
    /// Root and prefix components are dropped, so `/abs/name` lands in
    /// `cwd/abs/name`.
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        let relative: PathBuf = Path::new(&self.0)
            .components()
            .filter(|c| {
                matches!(
                    c,
                    Component::Normal(_) | Component::ParentDir | Component::CurDir
                )
            })
            .collect();
        cwd.join(relative)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Variables available to a template, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateView {
    values: BTreeMap<String, String>,
}

impl TemplateView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View used for the package manifest: `{ projName }`.
    pub fn for_project(name: &ProjectName) -> Self {
        Self::new().with(PROJECT_NAME_VAR, name.as_str())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Files bundled with tsgen that are copied byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticAsset {
    /// Starter TypeScript source
    StarterSource,
    /// TypeScript compiler configuration
    TypeCheckerConfig,
    /// Container build file
    ContainerBuild,
    /// Git ignore rules
    GitIgnore,
    /// Docker build-context ignore rules
    DockerIgnore,
}

impl StaticAsset {
    pub const ALL: [StaticAsset; 5] = [
        StaticAsset::StarterSource,
        StaticAsset::TypeCheckerConfig,
        StaticAsset::ContainerBuild,
        StaticAsset::GitIgnore,
        StaticAsset::DockerIgnore,
    ];

    /// File name inside the bundled asset set
    pub fn file_name(&self) -> &'static str {
        match self {
            StaticAsset::StarterSource => "index.ts",
            StaticAsset::TypeCheckerConfig => "typescript.json",
            StaticAsset::ContainerBuild => "Dockerfile",
            StaticAsset::GitIgnore => "gitignore",
            StaticAsset::DockerIgnore => "dockerignore",
        }
    }

    /// Path inside the generated project
    pub fn destination(&self) -> &'static str {
        match self {
            StaticAsset::StarterSource => "src/index.ts",
            StaticAsset::TypeCheckerConfig => "tsconfig.json",
            StaticAsset::ContainerBuild => "Dockerfile",
            StaticAsset::GitIgnore => ".gitignore",
            StaticAsset::DockerIgnore => ".dockerignore",
        }
    }
}

/// Files bundled with tsgen that are rendered before being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateAsset {
    /// npm package manifest
    PackageManifest,
}

impl TemplateAsset {
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateAsset::PackageManifest => "package.template",
        }
    }

    pub fn destination(&self) -> &'static str {
        match self {
            TemplateAsset::PackageManifest => "package.json",
        }
    }

    /// Encoding applied to `{{name}}` values when rendering.
    pub fn escape(&self) -> Escape {
        match self {
            TemplateAsset::PackageManifest => Escape::Json,
        }
    }
}
