use crate::{catalog::model::Layer, selection::model::Selection};

/// Facial expression, as far as captions care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expression {
    Dead,
    Smile,
    Annoyed,
    Sleepy,
    /// `neutral` and every face without a dedicated phrase.
    Other,
}

impl Expression {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dead" => Self::Dead,
            "smile" => Self::Smile,
            "annoyed" => Self::Annoyed,
            "sleepy" => Self::Sleepy,
            _ => Self::Other,
        }
    }

    pub(crate) fn pick<'a>(self, phrases: &[&'a str; 5]) -> &'a str {
        match self {
            Self::Dead => phrases[0],
            Self::Smile => phrases[1],
            Self::Annoyed => phrases[2],
            Self::Sleepy => phrases[3],
            Self::Other => phrases[4],
        }
    }
}

/// Lowercased trait names pulled from a selection, with placeholders for unset layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionFields {
    pub body: String,
    pub head: String,
    pub face: String,
    pub background: String,
    /// `None` when unset or when the chosen accessory is `none`.
    pub accessory: Option<String>,
    pub aura: Option<String>,
}

impl CaptionFields {
    pub fn from_selection(selection: &Selection) -> Self {
        let name = |layer: Layer| {
            selection
                .get(layer)
                .map(|loc| loc.trait_name().to_lowercase())
        };
        let optional = |layer: Layer| name(layer).filter(|n| n != "none");

        Self {
            body: name(Layer::Body).unwrap_or_else(|| "creature".into()),
            head: name(Layer::Head).unwrap_or_else(|| "being".into()),
            face: name(Layer::Face).unwrap_or_else(|| "neutral".into()),
            background: name(Layer::Background).unwrap_or_else(|| "unknown realm".into()),
            accessory: optional(Layer::Accessory),
            aura: optional(Layer::Aura),
        }
    }

    pub fn expression(&self) -> Expression {
        Expression::from_name(&self.face)
    }
}
