use std::sync::Arc;

use crate::{
    caption::templates::caption,
    catalog::{
        model::{AssetLocator, CharacterType, Layer},
        table::TraitCatalog,
    },
    export::{
        png::{Export, download_file_name, encode_png, share_file_name, unix_millis},
        share::{SharePackage, share_url},
    },
    foundation::{
        core::Frame,
        error::{StudioError, StudioResult},
        math::{RandomSource, Rng64},
    },
    render::{
        loader::{FsImageLoader, ImageLoader},
        renderer::{RenderOutcome, Renderer, SkipReason},
        text::TextRasterizer,
    },
    selection::model::Selection,
    session::config::StudioConfig,
    state::{
        favorites::Favorite,
        overlay::OverlayPatch,
        store::{Action, Store, StudioState},
    },
};

/// Numbers shown in the stats panel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    pub character: CharacterType,
    pub layer_count: usize,
    pub generation_count: u64,
    pub favorites: usize,
}

/// One editing session: the state store, the renderer and the flows that tie them together.
///
/// Flows sequence transitions around a render. Each render is tagged with the state revision it
/// was computed from.
pub struct Studio {
    config: StudioConfig,
    store: Store,
    renderer: Renderer,
    started: bool,
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("config", &self.config)
            .field("state", self.store.state())
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Session reading trait images from `config.assets_root`.
    pub fn from_config(config: StudioConfig) -> StudioResult<Self> {
        let loader = Arc::new(FsImageLoader::new(config.assets_root.clone()));
        Self::new(config, loader)
    }

    pub fn new(config: StudioConfig, loader: Arc<dyn ImageLoader>) -> StudioResult<Self> {
        let rng: Box<dyn RandomSource + Send> = match config.seed {
            Some(seed) => Box::new(Rng64::new(seed)),
            None => Box::new(Rng64::from_clock()),
        };
        Self::with_random_source(config, loader, rng)
    }

    pub fn with_random_source(
        config: StudioConfig,
        loader: Arc<dyn ImageLoader>,
        rng: Box<dyn RandomSource + Send>,
    ) -> StudioResult<Self> {
        config.validate()?;
        let text = TextRasterizer::new(config.font_dirs());
        let renderer = Renderer::new(loader, config.canvas, text);
        let store = Store::new(config.initial_type, rng);
        Ok(Self {
            config,
            store,
            renderer,
            started: false,
        })
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn state(&self) -> &StudioState {
        self.store.state()
    }

    pub fn frame(&self) -> Frame {
        self.renderer.frame()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Load the initial catalog, draw and render the first selection, caption it.
    ///
    /// The session leaves the loading state even when the first render fails; the error is
    /// returned afterwards. Calling it again is a no-op.
    #[tracing::instrument(skip(self), fields(character = %self.config.initial_type))]
    pub fn start(&mut self) -> StudioResult<()> {
        if self.started {
            tracing::debug!("session already started");
            return Ok(());
        }
        self.started = true;

        let character = self.config.initial_type;
        self.store.dispatch(Action::SetLoading(true));
        self.store
            .dispatch(Action::SetCatalog(TraitCatalog::for_type(character)));
        let selection = self.store.draw_selection();
        self.store.dispatch(Action::SetGenerating(true));

        let rendered = self.render(&selection);
        let story = caption(&selection, self.store.rng());
        self.store
            .dispatch(Action::CompleteInitialGeneration { selection, story });
        rendered.map(|outcome| tracing::debug!(?outcome, "initial render"))
    }

    /// Draw a new selection for the current type and render it.
    #[tracing::instrument(skip(self))]
    pub fn randomize(&mut self) -> StudioResult<RenderOutcome> {
        if let Some(skip) = self.busy() {
            return Ok(skip);
        }
        let before = self.state().generation_count();
        self.store.dispatch(Action::RandomizeTraits);
        if self.state().generation_count() == before {
            return Ok(RenderOutcome::Skipped(SkipReason::EmptySelection));
        }
        self.finish_generation()
    }

    /// Step the character type by `delta`, wrapping, with a fresh selection for the new type.
    #[tracing::instrument(skip(self))]
    pub fn change_type(&mut self, delta: i32) -> StudioResult<RenderOutcome> {
        if let Some(skip) = self.busy() {
            return Ok(skip);
        }
        self.store.dispatch(Action::ChangeType(delta));
        tracing::info!(character = %self.state().character(), "character type changed");
        self.finish_generation()
    }

    /// Replace one layer's trait and re-render. The trait must be offered by the current catalog.
    #[tracing::instrument(skip(self, locator), fields(%locator))]
    pub fn select_trait(
        &mut self,
        layer: Layer,
        locator: AssetLocator,
    ) -> StudioResult<RenderOutcome> {
        if !self.state().catalog().contains(layer, &locator) {
            return Err(StudioError::validation(format!(
                "'{locator}' is not a {layer} trait of {}",
                self.state().character()
            )));
        }
        self.store.dispatch(Action::SelectTrait { layer, locator });
        let selection = self.state().selection().clone();
        let rendered = self.render(&selection);
        let story = caption(&selection, self.store.rng());
        self.store.dispatch(Action::SetStory(story));
        rendered
    }

    /// Merge overlay settings and re-render the current selection.
    #[tracing::instrument(skip(self))]
    pub fn update_overlay(&mut self, patch: OverlayPatch) -> StudioResult<RenderOutcome> {
        self.store.dispatch(Action::UpdateOverlay(patch));
        let selection = self.state().selection().clone();
        self.render(&selection)
    }

    /// Snapshot the visible frame into the favorites list.
    pub fn add_favorite(&mut self) -> StudioResult<()> {
        let frame = self.presented_frame()?;
        let png = encode_png(&frame)?;
        let generation = self.state().generation_count();
        self.store.dispatch(Action::AddFavorite(Favorite {
            png: png.into(),
            generation,
        }));
        Ok(())
    }

    pub fn open_picker(&mut self, layer: Layer) {
        self.store.dispatch(Action::SetActiveLayer(Some(layer)));
        self.store.dispatch(Action::SetPickerVisible(true));
    }

    pub fn close_picker(&mut self) {
        self.store.dispatch(Action::SetPickerVisible(false));
        self.store.dispatch(Action::SetActiveLayer(None));
    }

    pub fn set_stats_visible(&mut self, visible: bool) {
        self.store.dispatch(Action::SetStatsVisible(visible));
    }

    pub fn stats(&self) -> SessionStats {
        let state = self.state();
        SessionStats {
            character: state.character(),
            layer_count: state.character().layers().len(),
            generation_count: state.generation_count(),
            favorites: state.favorites().len(),
        }
    }

    /// PNG of the visible frame named for download.
    pub fn export(&self) -> StudioResult<Export> {
        let frame = self.presented_frame()?;
        Ok(Export {
            file_name: download_file_name(self.state().character(), unix_millis()),
            png: encode_png(&frame)?,
        })
    }

    /// PNG of the visible frame plus the tweet intent for the current caption.
    pub fn share(&self) -> StudioResult<SharePackage> {
        let caption = self.state().story().to_string();
        let url = share_url(&caption)
            .ok_or_else(|| StudioError::export("no caption to share yet"))?;
        let frame = self.presented_frame()?;
        Ok(SharePackage {
            image: Export {
                file_name: share_file_name(unix_millis()),
                png: encode_png(&frame)?,
            },
            caption,
            url,
        })
    }

    fn busy(&self) -> Option<RenderOutcome> {
        let state = self.state();
        if state.is_generating() || state.is_rendering() || self.renderer.is_rendering() {
            tracing::debug!("generation in flight, request ignored");
            return Some(RenderOutcome::Skipped(SkipReason::InFlight));
        }
        None
    }

    /// Render and caption the freshly drawn selection. The generating flag is cleared on every
    /// path.
    fn finish_generation(&mut self) -> StudioResult<RenderOutcome> {
        let selection = self.state().selection().clone();
        let rendered = self.render(&selection);
        let story = caption(&selection, self.store.rng());
        self.store.dispatch(Action::SetStory(story));
        self.store.dispatch(Action::SetGenerating(false));
        rendered
    }

    fn render(&mut self, selection: &Selection) -> StudioResult<RenderOutcome> {
        let version = self.state().revision();
        let overlay = self.state().overlay().clone();
        self.store.dispatch(Action::SetRendering(true));
        let rendered = self.renderer.render(selection, &overlay, version);
        self.store.dispatch(Action::SetRendering(false));
        if let Err(err) = &rendered {
            tracing::warn!(%err, recoverable = err.is_recoverable(), "render failed");
        }
        rendered
    }

    fn presented_frame(&self) -> StudioResult<Frame> {
        let frame = self.renderer.frame();
        if frame.version == 0 {
            return Err(StudioError::export("nothing has been rendered yet"));
        }
        Ok(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/studio.rs"]
mod tests;
