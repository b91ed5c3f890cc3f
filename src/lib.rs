//! Die Guys is a layered trait compositor for collectible character art.
//!
//! A session picks one trait image per layer for a character type, composites the layers in a
//! fixed order onto a square canvas, burns an optional meme-style text overlay on top, and
//! describes the result with a generated caption. Frames can be exported as PNG or packaged for
//! sharing.
//!
//! # Pipeline overview
//!
//! 1. **Catalog**: `CharacterType + Layer -> [TraitOption]` (closed, static tables)
//! 2. **Select**: `TraitCatalog + RandomSource -> Selection` (one uniform draw per layer)
//! 3. **Render**: `Selection + TextOverlay -> Frame` (concurrent loads, off-screen compose, one swap)
//! 4. **Caption**: `Selection + RandomSource -> String`
//!
//! State only changes through [`Action`]s applied by the [`Store`]. [`Studio`] runs the flows that
//! sequence transitions, renders and captions.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8** internally; PNG output is straight alpha.
//! - **At most one render** at a time; stale renders never overwrite a newer frame.
#![forbid(unsafe_code)]

mod caption;
mod catalog;
mod export;
mod foundation;
mod render;
mod selection;
mod session;
mod state;

pub use caption::fields::{CaptionFields, Expression};
pub use caption::templates::{TEMPLATES, Template, caption};
pub use catalog::model::{
    AssetLocator, CATEGORY_ROOT, CharacterType, IMAGE_EXT, Layer, TraitOption,
};
pub use catalog::table::{TraitCatalog, assets_for, trait_names};
pub use export::png::{Export, download_file_name, encode_png, share_file_name, unix_millis};
pub use export::share::{SharePackage, encode_uri_component, share_url};
pub use foundation::core::{Canvas, Frame, MAX_CANVAS_DIM};
pub use foundation::error::{StudioError, StudioResult};
pub use foundation::math::{RandomSource, Rng64};
pub use render::composite::{PremulRgba8, over, over_in_place, scale_to_canvas};
pub use render::decode::{PreparedImage, decode_image};
pub use render::loader::{FsImageLoader, ImageLoader, normalize_rel_path};
pub use render::renderer::{RenderOutcome, Renderer, SkipReason};
pub use render::text::{OverlayLayout, TextRasterizer, layout_overlay, overlay_svg};
pub use selection::model::Selection;
pub use selection::random::random_selection;
pub use session::config::StudioConfig;
pub use session::studio::{SessionStats, Studio};
pub use state::favorites::{FAVORITES_CAPACITY, Favorite, Favorites};
pub use state::overlay::{FONT_PRESETS, FONT_SIZES, FontPreset, OverlayPatch, TextOverlay};
pub use state::store::{Action, Store, StudioState};
