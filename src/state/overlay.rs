/// A named font style for the text overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontPreset {
    pub name: &'static str,
    /// Font families in fallback order.
    pub families: &'static [&'static str],
    pub default_size: u32,
}

impl FontPreset {
    /// Family list in CSS/SVG `font-family` syntax, names quoted with single quotes.
    pub fn font_family_css(&self) -> String {
        self.families
            .iter()
            .map(|f| match *f {
                "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" => f.to_string(),
                named => format!("'{named}'"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Preset called `name`, falling back to the first preset for unknown names.
    pub fn resolve(name: &str) -> &'static FontPreset {
        FONT_PRESETS
            .iter()
            .find(|p| p.name == name)
            .unwrap_or(&FONT_PRESETS[0])
    }
}

pub const FONT_PRESETS: [FontPreset; 6] = [
    FontPreset {
        name: "Bold Impact",
        families: &["Impact", "Arial Black", "Helvetica Neue", "Arial", "sans-serif"],
        default_size: 32,
    },
    FontPreset {
        name: "Clean Modern",
        families: &[
            "Segoe UI",
            "Roboto",
            "Oxygen",
            "Ubuntu",
            "Cantarell",
            "sans-serif",
        ],
        default_size: 30,
    },
    FontPreset {
        name: "Retro Gaming",
        families: &["Courier New", "Monaco", "Menlo", "Consolas", "monospace"],
        default_size: 28,
    },
    FontPreset {
        name: "Elegant Serif",
        families: &["Georgia", "Times New Roman", "Palatino", "Book Antiqua", "serif"],
        default_size: 34,
    },
    FontPreset {
        name: "Street Style",
        families: &[
            "Arial Black",
            "Trebuchet MS",
            "Lucida Grande",
            "Lucida Sans Unicode",
            "sans-serif",
        ],
        default_size: 31,
    },
    FontPreset {
        name: "Futuristic",
        families: &[
            "Orbitron",
            "Exo 2",
            "Rajdhani",
            "Michroma",
            "Share Tech Mono",
            "monospace",
        ],
        default_size: 29,
    },
];

/// Font sizes offered by the overlay size picker.
pub const FONT_SIZES: [u32; 6] = [24, 32, 40, 48, 56, 64];

/// Text burned into the composite.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextOverlay {
    pub top: String,
    pub bottom: String,
    pub font_size: u32,
    /// Preset name; unknown names render with the first preset.
    pub preset: String,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            font_size: 32,
            preset: FONT_PRESETS[0].name.to_string(),
        }
    }
}

impl TextOverlay {
    pub fn has_text(&self) -> bool {
        !self.top.is_empty() || !self.bottom.is_empty()
    }

    pub fn font_preset(&self) -> &'static FontPreset {
        FontPreset::resolve(&self.preset)
    }

    /// Merge the fields set in `patch`, leaving the others untouched.
    pub fn merge(&mut self, patch: OverlayPatch) {
        if let Some(top) = patch.top {
            self.top = top;
        }
        if let Some(bottom) = patch.bottom {
            self.bottom = bottom;
        }
        if let Some(size) = patch.font_size {
            self.font_size = size.max(1);
        }
        if let Some(preset) = patch.preset {
            self.preset = preset;
        }
    }
}

/// Partial overlay update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayPatch {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub font_size: Option<u32>,
    pub preset: Option<String>,
}

impl OverlayPatch {
    pub fn top(text: impl Into<String>) -> Self {
        Self {
            top: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn bottom(text: impl Into<String>) -> Self {
        Self {
            bottom: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn font_size(size: u32) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    pub fn preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/overlay.rs"]
mod tests;
