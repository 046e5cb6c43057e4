//! Bundled project files
//!
//! Assets are compiled into the binary from `files/`. An operator can point
//! tsgen at a directory holding the same file names to use a different set.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::fs::FileSystem;
use crate::models::{StaticAsset, TemplateAsset};

const INDEX_TS: &[u8] = include_bytes!("../files/index.ts");
const TYPESCRIPT_JSON: &[u8] = include_bytes!("../files/typescript.json");
const DOCKERFILE: &[u8] = include_bytes!("../files/Dockerfile");
const GITIGNORE: &[u8] = include_bytes!("../files/gitignore");
const DOCKERIGNORE: &[u8] = include_bytes!("../files/dockerignore");
const PACKAGE_TEMPLATE: &str = include_str!("../files/package.template");

/// Where bundled assets are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetSource {
    /// Files compiled into the binary
    #[default]
    Embedded,
    /// Files read from a directory at run time
    Directory(PathBuf),
}

impl AssetSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map(AssetSource::Directory).unwrap_or_default()
    }

    /// On-disk location of `file_name`, when assets come from a directory.
    pub fn path_of(&self, file_name: &str) -> Option<PathBuf> {
        match self {
            AssetSource::Embedded => None,
            AssetSource::Directory(dir) => Some(dir.join(file_name)),
        }
    }

    /// Bytes of a static asset
    pub fn load_static(
        &self,
        asset: StaticAsset,
        fs: &dyn FileSystem,
    ) -> ScaffoldResult<Cow<'static, [u8]>> {
        match self.path_of(asset.file_name()) {
            None => Ok(Cow::Borrowed(embedded_static(asset))),
            Some(path) => fs.read(&path).map(Cow::Owned),
        }
    }

    /// Text of a template asset
    pub fn load_template(
        &self,
        asset: TemplateAsset,
        fs: &dyn FileSystem,
    ) -> ScaffoldResult<Cow<'static, str>> {
        match self.path_of(asset.file_name()) {
            None => Ok(Cow::Borrowed(embedded_template(asset))),
            Some(path) => {
                let bytes = fs.read(&path)?;
                String::from_utf8(bytes)
                    .map(Cow::Owned)
                    .map_err(|_| ScaffoldError::TemplateEncoding {
                        name: asset.file_name().to_string(),
                    })
            }
        }
    }

    /// Human-readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            AssetSource::Embedded => "built-in".to_string(),
            AssetSource::Directory(dir) => dir.display().to_string(),
        }
    }
}

pub fn embedded_static(asset: StaticAsset) -> &'static [u8] {
    match asset {
        StaticAsset::StarterSource => INDEX_TS,
        StaticAsset::TypeCheckerConfig => TYPESCRIPT_JSON,
        StaticAsset::ContainerBuild => DOCKERFILE,
        StaticAsset::GitIgnore => GITIGNORE,
        StaticAsset::DockerIgnore => DOCKERIGNORE,
    }
}

pub fn embedded_template(asset: TemplateAsset) -> &'static str {
    match asset {
        TemplateAsset::PackageManifest => PACKAGE_TEMPLATE,
    }
}
