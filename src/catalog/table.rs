use std::collections::BTreeMap;

use crate::catalog::model::{AssetLocator, CharacterType, Layer, TraitOption};

const AURAS: &[&str] = &["None", "Saiyan", "Super Saiyan"];
const FACES: &[&str] = &["Annoyed", "Dead", "Neutral", "Sleepy", "Smile"];

const GOLDEN_PREDATOR_ANIMALS: &[&str] = &[
    "Dolphin",
    "Gold Bear",
    "Gold Cat",
    "Gold Dog",
    "Gold Elephant",
    "Gold Fox",
    "Gold Wolf",
    "Orca",
];

const GOLDEN_PREY_ANIMALS: &[&str] = &[
    "Gold Bunny",
    "Gold Cow",
    "Gold Deer",
    "Gold Donkey",
    "Gold Hedgehog",
    "Gold Koala",
    "Gold Mouse",
    "Gold Owl",
    "Gold Panda",
    "Gold Pig",
    "Gold Sheep",
    "Gold Squirrel",
];

const PREDATOR_ANIMALS: &[&str] = &[
    "Bear", "Cat", "Dog", "Dolphin", "Eagle", "Elephant", "Fox", "Monkey", "Orca", "Snake",
    "Tiger", "Wolf",
];

const PREY_ANIMALS: &[&str] = &[
    "Bunny", "Chicken", "Cow", "Deer", "Donkey", "Duck", "Frog", "Goat", "Hedgehog", "Koala",
    "Lamb", "Mouse", "Owl", "Panda", "Penguin", "Pig", "Seal", "Sheep", "Squirrel", "Turkey",
    "Zebra",
];

const GOLDEN_ACCESSORIES: &[&str] = &["Gold Eyepatch", "Gold Halo", "Gold Katana", "None"];

const ACCESSORIES: &[&str] = &[
    "Cigarette",
    "Crown",
    "Eyepatch",
    "Halo",
    "Headphones",
    "Katana",
    "Monocle",
    "None",
    "Shield",
    "Sunglasses",
];

/// Trait names available for `(character, layer)`, in display order.
pub fn trait_names(character: CharacterType, layer: Layer) -> &'static [&'static str] {
    use CharacterType as T;

    match (character, layer) {
        (T::GoldenPredator | T::Predator, Layer::Background) => &["Forest"],
        (T::GoldenPrey | T::Prey, Layer::Background) => &["Farm"],
        (_, Layer::Aura) => AURAS,
        (_, Layer::Face) => FACES,
        (T::GoldenPredator, Layer::Body | Layer::Head) => GOLDEN_PREDATOR_ANIMALS,
        (T::GoldenPrey, Layer::Body | Layer::Head) => GOLDEN_PREY_ANIMALS,
        (T::Predator, Layer::Body | Layer::Head) => PREDATOR_ANIMALS,
        (T::Prey, Layer::Body | Layer::Head) => PREY_ANIMALS,
        (T::GoldenPredator | T::GoldenPrey, Layer::Accessory) => GOLDEN_ACCESSORIES,
        (T::Predator | T::Prey, Layer::Accessory) => ACCESSORIES,
    }
}

/// Options for one layer of one character type.
///
/// Empty when `layer` is not part of the type's layer order.
pub fn assets_for(character: CharacterType, layer: Layer) -> Vec<TraitOption> {
    if !character.layers().contains(&layer) {
        return Vec::new();
    }
    trait_names(character, layer)
        .iter()
        .map(|&name| TraitOption::new(character, layer, name))
        .collect()
}

/// The options currently offered per layer. Keys iterate in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitCatalog {
    character: Option<CharacterType>,
    layers: BTreeMap<Layer, Vec<TraitOption>>,
}

impl TraitCatalog {
    /// Full catalog for `character`: one entry per layer of its draw order.
    pub fn for_type(character: CharacterType) -> Self {
        let layers = character
            .layers()
            .iter()
            .map(|&layer| (layer, assets_for(character, layer)))
            .collect();
        Self {
            character: Some(character),
            layers,
        }
    }

    /// Character type this catalog was built for; `None` for the empty catalog.
    pub fn character(&self) -> Option<CharacterType> {
        self.character
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.keys().copied()
    }

    pub fn options(&self, layer: Layer) -> &[TraitOption] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Layer, &[TraitOption])> + '_ {
        self.layers.iter().map(|(l, opts)| (*l, opts.as_slice()))
    }

    pub fn contains(&self, layer: Layer, locator: &AssetLocator) -> bool {
        self.options(layer).iter().any(|o| &o.locator == locator)
    }

    pub fn find(&self, locator: &AssetLocator) -> Option<&TraitOption> {
        self.layers
            .values()
            .flat_map(|opts| opts.iter())
            .find(|o| &o.locator == locator)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/table.rs"]
mod tests;
