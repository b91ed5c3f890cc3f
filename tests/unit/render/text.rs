use super::*;

fn overlay(top: &str, bottom: &str, size: u32) -> TextOverlay {
    TextOverlay {
        top: top.into(),
        bottom: bottom.into(),
        font_size: size,
        ..TextOverlay::default()
    }
}

fn canvas() -> Canvas {
    Canvas::new(500, 500).unwrap()
}

#[test]
fn empty_overlay_has_no_layout_and_no_raster() {
    assert_eq!(layout_overlay(canvas(), &TextOverlay::default()), None);
    let raster = TextRasterizer::default()
        .rasterize(canvas(), &TextOverlay::default())
        .unwrap();
    assert!(raster.is_none());
}

#[test]
fn top_baseline_grows_with_font_size() {
    let mut last = 0.0f32;
    for size in [8u32, 24, 32, 40, 48, 56, 64, 120] {
        let l = layout_overlay(canvas(), &overlay("GM", "", size)).unwrap();
        let top = l.top_baseline.unwrap();
        assert!(top > last, "size {size}: {top} <= {last}");
        last = top;
        assert_eq!(l.bottom_baseline, None);
    }
}

#[test]
fn baselines_follow_margins() {
    let l = layout_overlay(canvas(), &overlay("a", "b", 32)).unwrap();
    // top margin max(15, 19.2) + 25.6
    assert!((l.top_baseline.unwrap() - 44.8).abs() < 1e-3);
    // bottom margin max(15, 12.8) = 15
    assert!((l.bottom_baseline.unwrap() - 485.0).abs() < 1e-3);
    assert_eq!(l.center_x, 250.0);
    assert_eq!(l.stroke_width, 2.0);

    let l = layout_overlay(canvas(), &overlay("", "b", 64)).unwrap();
    assert_eq!(l.top_baseline, None);
    assert!((l.bottom_baseline.unwrap() - (500.0 - 25.6)).abs() < 1e-3);
    assert!((l.stroke_width - 3.2).abs() < 1e-6);
}

#[test]
fn svg_draws_only_non_empty_lines_escaped() {
    let o = overlay("Fish & <Chips>", "", 40);
    let l = layout_overlay(canvas(), &o).unwrap();
    let svg = overlay_svg(canvas(), &o, &l);
    assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
    assert_eq!(svg.matches("<text ").count(), 1);
    assert!(svg.contains(r#"paint-order="stroke""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains("&apos;Impact&apos;"));
}

#[test]
fn unknown_preset_uses_first_family_list() {
    let mut o = overlay("x", "y", 24);
    o.preset = "Nope".into();
    let l = layout_overlay(canvas(), &o).unwrap();
    let svg = overlay_svg(canvas(), &o, &l);
    assert!(svg.contains("Impact"));
    assert_eq!(svg.matches("<text ").count(), 2);
}

#[test]
fn rasterized_overlay_matches_canvas_size() {
    let c = Canvas::new(64, 48).unwrap();
    let raster = TextRasterizer::new(vec![])
        .rasterize(c, &overlay("TOP", "BOTTOM", 24))
        .unwrap()
        .unwrap();
    assert_eq!(raster.len(), c.byte_len());
}

#[test]
fn control_characters_become_spaces() {
    let o = overlay("hi\u{1}there\u{FFFF}", "tab\tok", 32);
    let l = layout_overlay(canvas(), &o).unwrap();
    let svg = overlay_svg(canvas(), &o, &l);
    assert!(svg.contains(">hi there <"));
    assert!(svg.contains("tab\tok"));
    assert!(!svg.contains('\u{1}'));
}

#[test]
fn control_characters_still_rasterize() {
    let c = Canvas::new(64, 64).unwrap();
    let raster = TextRasterizer::new(vec![])
        .rasterize(c, &overlay("hi\u{1}there", "", 24))
        .unwrap()
        .unwrap();
    assert_eq!(raster.len(), c.byte_len());
}
