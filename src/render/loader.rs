use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    catalog::model::AssetLocator,
    foundation::error::{StudioError, StudioResult},
    render::decode::{PreparedImage, decode_image},
};

/// Loads the image behind a trait locator.
///
/// Called concurrently from the render worker pool, one call per requested layer.
pub trait ImageLoader: Send + Sync {
    fn load(&self, locator: &AssetLocator) -> StudioResult<PreparedImage>;
}

/// Reads trait images from a static file tree rooted at `root`.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for `locator`. Rejects absolute paths and parent traversal.
    pub fn path_for(&self, locator: &AssetLocator) -> StudioResult<PathBuf> {
        let rel = normalize_rel_path(locator.rel_path())?;
        Ok(self.root.join(Path::new(&rel)))
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, locator: &AssetLocator) -> StudioResult<PreparedImage> {
        let path = self.path_for(locator)?;
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read trait image '{}'", path.display()))
            .map_err(|e| StudioError::asset_load(locator.as_str(), e))?;
        decode_image(&bytes).map_err(|e| StudioError::asset_load(locator.as_str(), e))
    }
}

/// Normalize and validate a relative asset path.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> StudioResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(StudioError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(StudioError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(StudioError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(StudioError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/loader.rs"]
mod tests;
