use crate::{
    foundation::{
        core::Canvas,
        error::{StudioError, StudioResult},
        math::{add_sat_u8, mul_div255_u8},
    },
    render::decode::PreparedImage,
};

pub type PremulRgba8 = [u8; 4];

pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> StudioResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StudioError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Stretch `img` to cover the whole canvas. Returns premultiplied RGBA8 of `canvas` size.
pub fn scale_to_canvas(img: &PreparedImage, canvas: Canvas) -> StudioResult<Vec<u8>> {
    if img.width == canvas.width && img.height == canvas.height {
        return Ok(img.rgba8_premul.as_ref().clone());
    }
    let src = image::RgbaImage::from_raw(img.width, img.height, img.rgba8_premul.to_vec())
        .ok_or_else(|| StudioError::render("trait image buffer does not match its size"))?;
    // Filtering premultiplied pixels keeps transparent edges free of dark fringes.
    let scaled = image::imageops::resize(
        &src,
        canvas.width,
        canvas.height,
        image::imageops::FilterType::Triangle,
    );
    Ok(scaled.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
