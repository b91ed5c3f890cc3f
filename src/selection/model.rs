use std::collections::BTreeMap;

use crate::catalog::model::{AssetLocator, Layer};

/// The chosen trait per layer. A missing layer is drawn as nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Selection {
    by_layer: BTreeMap<Layer, AssetLocator>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_layer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_layer.len()
    }

    pub fn get(&self, layer: Layer) -> Option<&AssetLocator> {
        self.by_layer.get(&layer)
    }

    /// Set `layer` to `locator`, replacing any previous choice for that layer only.
    pub fn set(&mut self, layer: Layer, locator: AssetLocator) {
        self.by_layer.insert(layer, locator);
    }

    pub fn with(mut self, layer: Layer, locator: AssetLocator) -> Self {
        self.set(layer, locator);
        self
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.by_layer.keys().copied()
    }

    /// Entries in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &AssetLocator)> + '_ {
        self.by_layer.iter().map(|(l, loc)| (*l, loc))
    }

    /// Display name of the trait chosen for `layer`. `None` when the layer is unset, which is
    /// distinct from a trait that is itself named `None`.
    pub fn display_name(&self, layer: Layer) -> Option<&str> {
        self.get(layer).map(AssetLocator::trait_name)
    }
}

impl FromIterator<(Layer, AssetLocator)> for Selection {
    fn from_iter<I: IntoIterator<Item = (Layer, AssetLocator)>>(iter: I) -> Self {
        Self {
            by_layer: iter.into_iter().collect(),
        }
    }
}
