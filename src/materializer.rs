//! Copies bundled assets and rendered templates into the output tree.
//!
//! Every operation is unconditional: existing files are overwritten and
//! nothing is rolled back when a later step fails.

use std::path::Path;

use crate::assets::AssetSource;
use crate::error::ScaffoldResult;
use crate::fs::FileSystem;
use crate::models::{StaticAsset, TemplateAsset, TemplateView};
use crate::template;

pub struct Materializer<'a> {
    fs: &'a dyn FileSystem,
    assets: &'a AssetSource,
}

impl<'a> Materializer<'a> {
    pub fn new(fs: &'a dyn FileSystem, assets: &'a AssetSource) -> Self {
        Self { fs, assets }
    }

    /// Create `path` and any missing parents. Existing directories are fine.
    pub fn ensure_directory(&self, path: &Path) -> ScaffoldResult<()> {
        self.fs.create_dir_all(path)
    }

    /// Copy `src` to `dest` byte for byte.
    pub fn copy_file_verbatim(&self, src: &Path, dest: &Path) -> ScaffoldResult<()> {
        let bytes = self.fs.read(src)?;
        self.fs.write(dest, &bytes)
    }

    pub fn write_rendered_file(&self, dest: &Path, text: &str) -> ScaffoldResult<()> {
        self.fs.write(dest, text.as_bytes())
    }

    /// Copy a bundled static asset to `dest` unchanged.
    pub fn copy_static(&self, asset: StaticAsset, dest: &Path) -> ScaffoldResult<()> {
        match self.assets.path_of(asset.file_name()) {
            Some(src) => self.copy_file_verbatim(&src, dest),
            None => {
                let bytes = self.assets.load_static(asset, self.fs)?;
                self.fs.write(dest, &bytes)
            }
        }
    }

    /// Render a bundled template against `view` and write it to `dest`.
    pub fn render_template(
        &self,
        asset: TemplateAsset,
        view: &TemplateView,
        dest: &Path,
    ) -> ScaffoldResult<()> {
        let text = self.assets.load_template(asset, self.fs)?;
        let rendered = template::render_escaped(&text, view, asset.escape());
        self.write_rendered_file(dest, &rendered)
    }
}
