use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Canvas, Frame},
        error::StudioResult,
    },
    render::{
        composite::{over_in_place, scale_to_canvas},
        decode::PreparedImage,
        loader::ImageLoader,
        text::TextRasterizer,
    },
    selection::model::Selection,
    state::overlay::TextOverlay,
};

/// Why a render request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Another render holds the in-flight flag.
    InFlight,
    EmptySelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The composed frame is now the visible one.
    Presented { version: u64 },
    Skipped(SkipReason),
    /// Composition finished but a newer version was already visible; nothing was written.
    Superseded { version: u64, presented: u64 },
}

impl RenderOutcome {
    pub fn is_presented(self) -> bool {
        matches!(self, Self::Presented { .. })
    }
}

/// Composites selections into a double-buffered frame.
///
/// At most one render runs at a time. Layer images are loaded concurrently, composed off-screen
/// in layer order, and swapped into the visible frame in one step.
pub struct Renderer {
    loader: Arc<dyn ImageLoader>,
    canvas: Canvas,
    text: TextRasterizer,
    in_flight: AtomicBool,
    front: Mutex<Frame>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("canvas", &self.canvas)
            .field("text", &self.text)
            .field("in_flight", &self.is_rendering())
            .finish_non_exhaustive()
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Renderer {
    pub fn new(loader: Arc<dyn ImageLoader>, canvas: Canvas, text: TextRasterizer) -> Self {
        Self {
            loader,
            canvas,
            text,
            in_flight: AtomicBool::new(false),
            front: Mutex::new(Frame::transparent(canvas)),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn is_rendering(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Copy of the visible frame.
    pub fn frame(&self) -> Frame {
        self.lock_front().clone()
    }

    /// Version of the visible frame. `0` before the first presented render.
    pub fn presented_version(&self) -> u64 {
        self.lock_front().version
    }

    fn lock_front(&self) -> MutexGuard<'_, Frame> {
        self.front.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Compose `selection` with `overlay` and present it as `version`.
    ///
    /// Empty selections and overlapping calls are skipped, not errors. A failed layer load
    /// aborts the render and leaves the visible frame untouched.
    #[tracing::instrument(skip(self, selection, overlay), fields(layers = selection.len()))]
    pub fn render(
        &self,
        selection: &Selection,
        overlay: &TextOverlay,
        version: u64,
    ) -> StudioResult<RenderOutcome> {
        if selection.is_empty() {
            tracing::debug!("empty selection, nothing to render");
            return Ok(RenderOutcome::Skipped(SkipReason::EmptySelection));
        }
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("render already in flight, request dropped");
            return Ok(RenderOutcome::Skipped(SkipReason::InFlight));
        };

        let requests: Vec<_> = selection.iter().collect();
        let images = requests
            .par_iter()
            .map(|(_, locator)| self.loader.load(locator))
            .collect::<StudioResult<Vec<PreparedImage>>>()
            .inspect_err(|err| tracing::warn!(%err, "layer load failed, keeping previous frame"))?;

        let mut back = vec![0u8; self.canvas.byte_len()];
        for img in &images {
            let scaled = scale_to_canvas(img, self.canvas)?;
            over_in_place(&mut back, &scaled)?;
        }
        if let Some(text) = self.text.rasterize(self.canvas, overlay)? {
            over_in_place(&mut back, &text)?;
        }

        let mut front = self.lock_front();
        if version < front.version {
            tracing::debug!(presented = front.version, "stale render discarded");
            return Ok(RenderOutcome::Superseded {
                version,
                presented: front.version,
            });
        }
        *front = Frame {
            width: self.canvas.width,
            height: self.canvas.height,
            data: back,
            version,
        };
        tracing::info!("frame presented");
        Ok(RenderOutcome::Presented { version })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
