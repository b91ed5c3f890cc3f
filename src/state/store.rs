use crate::{
    catalog::{
        model::{AssetLocator, CharacterType, Layer},
        table::TraitCatalog,
    },
    foundation::math::{RandomSource, Rng64},
    selection::{model::Selection, random::random_selection},
    state::{
        favorites::{Favorite, Favorites},
        overlay::{OverlayPatch, TextOverlay},
    },
};

/// Named transitions. Applying one is the only way to change a [`StudioState`].
#[derive(Clone, Debug)]
pub enum Action {
    SetLoading(bool),
    SetCatalog(TraitCatalog),
    SetSelection(Selection),
    /// Draw a fresh selection from the current catalog. No-op while generating or when the
    /// catalog is empty.
    RandomizeTraits,
    /// Step the character type by `delta` (wrapping), load its catalog and draw a selection.
    ChangeType(i32),
    /// Install a type switch computed elsewhere. Type, catalog and selection are replaced
    /// together.
    ChangeTypeComplete {
        character: CharacterType,
        catalog: TraitCatalog,
        selection: Selection,
    },
    /// Overwrite one layer of the selection and close the trait picker.
    SelectTrait {
        layer: Layer,
        locator: AssetLocator,
    },
    UpdateOverlay(OverlayPatch),
    SetGenerating(bool),
    SetRendering(bool),
    IncrementGeneration,
    AddFavorite(Favorite),
    SetStory(String),
    SetActiveLayer(Option<Layer>),
    SetPickerVisible(bool),
    SetStatsVisible(bool),
    /// Last step of session startup.
    CompleteInitialGeneration {
        selection: Selection,
        story: String,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "set_loading",
            Self::SetCatalog(_) => "set_catalog",
            Self::SetSelection(_) => "set_selection",
            Self::RandomizeTraits => "randomize_traits",
            Self::ChangeType(_) => "change_type",
            Self::ChangeTypeComplete { .. } => "change_type_complete",
            Self::SelectTrait { .. } => "select_trait",
            Self::UpdateOverlay(_) => "update_overlay",
            Self::SetGenerating(_) => "set_generating",
            Self::SetRendering(_) => "set_rendering",
            Self::IncrementGeneration => "increment_generation",
            Self::AddFavorite(_) => "add_favorite",
            Self::SetStory(_) => "set_story",
            Self::SetActiveLayer(_) => "set_active_layer",
            Self::SetPickerVisible(_) => "set_picker_visible",
            Self::SetStatsVisible(_) => "set_stats_visible",
            Self::CompleteInitialGeneration { .. } => "complete_initial_generation",
        }
    }
}

/// Session state. Fields are read through accessors and changed only by [`StudioState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioState {
    character: CharacterType,
    selection: Selection,
    catalog: TraitCatalog,
    overlay: TextOverlay,
    generation_count: u64,
    favorites: Favorites,
    is_loading: bool,
    is_generating: bool,
    is_rendering: bool,
    story: String,
    active_layer: Option<Layer>,
    picker_visible: bool,
    stats_visible: bool,
    revision: u64,
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new(CharacterType::default())
    }
}

impl StudioState {
    /// Fresh session state: empty selection and catalog, loading.
    pub fn new(character: CharacterType) -> Self {
        Self {
            character,
            selection: Selection::new(),
            catalog: TraitCatalog::default(),
            overlay: TextOverlay::default(),
            generation_count: 0,
            favorites: Favorites::default(),
            is_loading: true,
            is_generating: false,
            is_rendering: false,
            story: String::new(),
            active_layer: None,
            picker_visible: false,
            stats_visible: false,
            revision: 0,
        }
    }

    pub fn character(&self) -> CharacterType {
        self.character
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn overlay(&self) -> &TextOverlay {
        &self.overlay
    }

    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn is_rendering(&self) -> bool {
        self.is_rendering
    }

    pub fn story(&self) -> &str {
        &self.story
    }

    pub fn active_layer(&self) -> Option<Layer> {
        self.active_layer
    }

    pub fn picker_visible(&self) -> bool {
        self.picker_visible
    }

    pub fn stats_visible(&self) -> bool {
        self.stats_visible
    }

    /// Counter bumped by every applied transition, including no-ops. Renders are tagged with it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one transition. Total: every action yields a state, invalid requests leave the
    /// data unchanged.
    pub fn apply(mut self, action: Action, rng: &mut dyn RandomSource) -> Self {
        self.revision = self.revision.wrapping_add(1);
        match action {
            Action::SetLoading(v) => self.is_loading = v,
            Action::SetCatalog(catalog) => {
                if let Some(character) = catalog.character()
                    && character != self.character
                {
                    self.character = character;
                }
                if catalog != self.catalog {
                    self.selection = Selection::new();
                }
                self.catalog = catalog;
            }
            Action::SetSelection(selection) => {
                if self.selection_fits(&selection) {
                    self.selection = selection;
                } else {
                    tracing::warn!("rejected selection with layers outside the current catalog");
                }
            }
            Action::RandomizeTraits => {
                if self.is_generating || self.catalog.is_empty() {
                    tracing::debug!(
                        generating = self.is_generating,
                        "randomize skipped"
                    );
                    return self;
                }
                self.selection = random_selection(&self.catalog, rng);
                self.is_generating = true;
                self.generation_count += 1;
            }
            Action::ChangeType(delta) => {
                let character = self.character.step(delta);
                let catalog = TraitCatalog::for_type(character);
                self.selection = random_selection(&catalog, rng);
                self.character = character;
                self.catalog = catalog;
                self.is_generating = true;
                self.generation_count += 1;
            }
            Action::ChangeTypeComplete {
                character,
                catalog,
                selection,
            } => {
                if catalog.character().is_some_and(|c| c != character) {
                    tracing::warn!(%character, "rejected type switch with mismatched catalog");
                    return self;
                }
                self.character = character;
                self.catalog = catalog;
                self.selection = selection;
                if !self.selection_fits(&self.selection) {
                    tracing::warn!(%character, "type switch selection outside its catalog");
                    self.selection = Selection::new();
                }
            }
            Action::SelectTrait { layer, locator } => {
                if self.catalog.contains(layer, &locator) {
                    self.selection.set(layer, locator);
                } else {
                    tracing::warn!(%layer, %locator, "rejected trait not offered for layer");
                }
                self.picker_visible = false;
            }
            Action::UpdateOverlay(patch) => self.overlay.merge(patch),
            Action::SetGenerating(v) => self.is_generating = v,
            Action::SetRendering(v) => self.is_rendering = v,
            Action::IncrementGeneration => self.generation_count += 1,
            Action::AddFavorite(favorite) => self.favorites.push(favorite),
            Action::SetStory(story) => self.story = story,
            Action::SetActiveLayer(layer) => self.active_layer = layer,
            Action::SetPickerVisible(v) => self.picker_visible = v,
            Action::SetStatsVisible(v) => self.stats_visible = v,
            Action::CompleteInitialGeneration { selection, story } => {
                if self.selection_fits(&selection) {
                    self.selection = selection;
                }
                self.story = story;
                self.is_generating = false;
                self.is_loading = false;
                self.generation_count = 1;
            }
        }
        self
    }

    fn selection_fits(&self, selection: &Selection) -> bool {
        selection
            .iter()
            .all(|(layer, loc)| self.catalog.contains(layer, loc))
    }
}

/// Exclusive owner of the session state and the random source feeding its transitions.
pub struct Store {
    state: StudioState,
    rng: Box<dyn RandomSource + Send>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(character: CharacterType, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            state: StudioState::new(character),
            rng,
        }
    }

    pub fn with_seed(character: CharacterType, seed: u64) -> Self {
        Self::new(character, Box::new(Rng64::new(seed)))
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.name(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action, &mut *self.rng);
    }

    /// Draw a selection from the current catalog without changing state.
    pub fn draw_selection(&mut self) -> Selection {
        random_selection(&self.state.catalog, &mut *self.rng)
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/store.rs"]
mod tests;
