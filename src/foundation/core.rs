use crate::foundation::error::{StudioError, StudioResult};

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_DIM: u32 = 16_384;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> StudioResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> StudioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StudioError::validation("canvas width and height must be > 0"));
        }
        if self.width > MAX_CANVAS_DIM || self.height > MAX_CANVAS_DIM {
            return Err(StudioError::validation(format!(
                "canvas too large: {}x{} (max {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// A composed frame in premultiplied RGBA8, tagged with the version it was rendered for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub data: Vec<u8>,
    pub version: u64,
}

impl Frame {
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.byte_len()],
            version: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
