use std::{fmt, str::FromStr};

use crate::foundation::error::{StudioError, StudioResult};

/// Root directory of the trait artwork tree, relative to the assets root.
pub const CATEGORY_ROOT: &str = "nfts";
/// File extension shared by every trait image.
pub const IMAGE_EXT: &str = "png";

/// The closed set of character types, in the order the type switcher cycles through them.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum CharacterType {
    #[default]
    #[serde(rename = "Golden Predator")]
    GoldenPredator,
    #[serde(rename = "Golden Prey")]
    GoldenPrey,
    Predator,
    Prey,
}

impl CharacterType {
    pub const ALL: [CharacterType; 4] = [
        Self::GoldenPredator,
        Self::GoldenPrey,
        Self::Predator,
        Self::Prey,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GoldenPredator => "Golden Predator",
            Self::GoldenPrey => "Golden Prey",
            Self::Predator => "Predator",
            Self::Prey => "Prey",
        }
    }

    /// Lowercase, hyphenated form used in file names (`golden-predator`).
    pub fn slug(self) -> String {
        self.name().to_ascii_lowercase().replace(' ', "-")
    }

    pub fn index(self) -> usize {
        match self {
            Self::GoldenPredator => 0,
            Self::GoldenPrey => 1,
            Self::Predator => 2,
            Self::Prey => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Move `delta` steps through [`CharacterType::ALL`], wrapping at both ends.
    pub fn step(self, delta: i32) -> Self {
        let n = Self::ALL.len() as i64;
        let idx = (self.index() as i64 + i64::from(delta)).rem_euclid(n);
        Self::from_index(idx as usize)
    }

    /// Fixed draw order for this type. Every current type shares the same six layers.
    pub fn layers(self) -> &'static [Layer] {
        &Layer::ALL
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterType {
    type Err = StudioError;

    /// Accepts display names and slugs, case-insensitively (`Golden Prey`, `golden-prey`,
    /// `golden_prey`).
    fn from_str(s: &str) -> StudioResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == wanted)
            .ok_or_else(|| StudioError::validation(format!("unknown character type '{s}'")))
    }
}

/// A drawing slot. Declaration order is draw order: later layers occlude earlier ones.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Layer {
    Background,
    Aura,
    Face,
    Body,
    Head,
    Accessory,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Self::Background,
        Self::Aura,
        Self::Face,
        Self::Body,
        Self::Head,
        Self::Accessory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Aura => "Aura",
            Self::Face => "Face",
            Self::Body => "Body",
            Self::Head => "Head",
            Self::Accessory => "Accessory",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StudioError::validation(format!("unknown layer '{s}'")))
    }
}

/// Path of a trait image: `/nfts/<Type>/<Layer>/<Trait>.png`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AssetLocator(String);

impl AssetLocator {
    pub fn new(character: CharacterType, layer: Layer, trait_name: &str) -> Self {
        Self(format!(
            "/{CATEGORY_ROOT}/{}/{}/{trait_name}.{IMAGE_EXT}",
            character.name(),
            layer.name()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Locator relative to the assets root, without the leading `/`.
    pub fn rel_path(&self) -> &str {
        self.0.trim_start_matches('/')
    }

    /// File stem of the locator (`Gold Fox` for `.../Body/Gold Fox.png`).
    pub fn trait_name(&self) -> &str {
        let file = self.0.rsplit('/').next().unwrap_or(&self.0);
        file.strip_suffix(IMAGE_EXT)
            .and_then(|stem| stem.strip_suffix('.'))
            .unwrap_or(file)
    }

    /// Split a locator back into its parts. Returns `None` for anything not produced by
    /// [`AssetLocator::new`].
    pub fn decode(&self) -> Option<(CharacterType, Layer, &str)> {
        let rest = self.0.strip_prefix('/')?.strip_prefix(CATEGORY_ROOT)?;
        let rest = rest.strip_prefix('/')?;
        let mut parts = rest.splitn(3, '/');
        let character = CharacterType::from_name(parts.next()?)?;
        let layer = Layer::from_name(parts.next()?)?;
        let file = parts.next()?;
        if file.contains('/') {
            return None;
        }
        let name = file.strip_suffix(IMAGE_EXT)?.strip_suffix('.')?;
        if name.is_empty() {
            return None;
        }
        Some((character, layer, name))
    }
}

impl fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable trait for a layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TraitOption {
    pub name: &'static str,
    pub layer: Layer,
    pub locator: AssetLocator,
}

impl TraitOption {
    pub fn new(character: CharacterType, layer: Layer, name: &'static str) -> Self {
        Self {
            name,
            layer,
            locator: AssetLocator::new(character, layer, name),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
