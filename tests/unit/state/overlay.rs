use super::*;

#[test]
fn default_overlay_is_empty_bold_impact_32() {
    let o = TextOverlay::default();
    assert!(!o.has_text());
    assert_eq!(o.font_size, 32);
    assert_eq!(o.font_preset().name, "Bold Impact");
}

#[test]
fn unknown_preset_falls_back_to_first() {
    assert_eq!(FontPreset::resolve("Comic Sans").name, "Bold Impact");
    assert_eq!(FontPreset::resolve("Futuristic").default_size, 29);
}

#[test]
fn merge_only_touches_patched_fields() {
    let mut o = TextOverlay::default();
    o.merge(OverlayPatch::top("GM"));
    o.merge(OverlayPatch::font_size(48));
    assert_eq!(o.top, "GM");
    assert_eq!(o.bottom, "");
    assert_eq!(o.font_size, 48);
    assert_eq!(o.preset, "Bold Impact");

    o.merge(OverlayPatch {
        bottom: Some("WAGMI".into()),
        preset: Some("Retro Gaming".into()),
        ..OverlayPatch::default()
    });
    assert_eq!(o.top, "GM");
    assert_eq!(o.bottom, "WAGMI");
    assert_eq!(o.font_preset().name, "Retro Gaming");
    assert!(o.has_text());
}

#[test]
fn family_css_quotes_named_fonts_only() {
    let css = FONT_PRESETS[2].font_family_css();
    assert_eq!(
        css,
        "'Courier New', 'Monaco', 'Menlo', 'Consolas', monospace"
    );
}

#[test]
fn preset_sizes_and_offered_sizes() {
    let sizes: Vec<u32> = FONT_PRESETS.iter().map(|p| p.default_size).collect();
    assert_eq!(sizes, vec![32, 30, 28, 34, 31, 29]);
    assert_eq!(FONT_SIZES.first(), Some(&24));
    assert_eq!(FONT_SIZES.last(), Some(&64));
}
