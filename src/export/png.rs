use std::{
    io::Cursor,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;

use crate::{
    catalog::model::CharacterType,
    foundation::{
        core::Frame,
        error::{StudioError, StudioResult},
    },
    render::decode::unpremultiply_rgba8_in_place,
};

/// A PNG ready to hand to the user, with its suggested file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Encode a premultiplied frame as straight-alpha PNG.
pub fn encode_png(frame: &Frame) -> StudioResult<Vec<u8>> {
    let mut rgba = frame.data.clone();
    unpremultiply_rgba8_in_place(&mut rgba);
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| StudioError::export("frame buffer does not match its size"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// `die-guys-<type slug>-<millis>.png`
pub fn download_file_name(character: CharacterType, millis: u128) -> String {
    format!("die-guys-{}-{millis}.png", character.slug())
}

/// `die-guys-nft-<millis>.png`
pub fn share_file_name(millis: u128) -> String {
    format!("die-guys-nft-{millis}.png")
}

pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
