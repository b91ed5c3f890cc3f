use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    catalog::model::CharacterType,
    foundation::{
        core::Canvas,
        error::{StudioError, StudioResult},
    },
};

/// Session settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Directory that contains the `nfts/` trait tree.
    pub assets_root: PathBuf,
    pub canvas: Canvas,
    pub initial_type: CharacterType,
    /// Seed for trait and caption draws. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("public"),
            canvas: Canvas::default(),
            initial_type: CharacterType::default(),
            seed: None,
        }
    }
}

impl StudioConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> StudioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| StudioError::validation(format!("parse studio config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StudioError::validation(format!("open studio config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> StudioResult<()> {
        self.canvas.validate()
    }

    /// Extra overlay font directory, `<assets_root>/fonts`.
    pub fn font_dirs(&self) -> Vec<PathBuf> {
        vec![self.assets_root.join("fonts")]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
