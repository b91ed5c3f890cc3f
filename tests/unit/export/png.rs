use super::*;
use crate::foundation::core::Canvas;

#[test]
fn png_round_trips_straight_alpha() {
    let mut frame = Frame::transparent(Canvas::new(2, 1).unwrap());
    // premultiplied half-alpha red, then opaque green
    frame.data = vec![128, 0, 0, 128, 0, 255, 0, 255];
    let png = encode_png(&frame).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(back.get_pixel(1, 0).0, [0, 255, 0, 255]);
}

#[test]
fn mismatched_buffer_is_an_export_error() {
    let mut frame = Frame::transparent(Canvas::new(2, 2).unwrap());
    frame.data.truncate(4);
    let err = encode_png(&frame).unwrap_err();
    assert!(err.to_string().starts_with("export error:"));
}

#[test]
fn file_names_embed_type_and_timestamp() {
    assert_eq!(
        download_file_name(CharacterType::GoldenPredator, 1_700_000_000_123),
        "die-guys-golden-predator-1700000000123.png"
    );
    assert_eq!(
        download_file_name(CharacterType::Prey, 5),
        "die-guys-prey-5.png"
    );
    assert_eq!(share_file_name(42), "die-guys-nft-42.png");
    assert!(unix_millis() > 1_600_000_000_000);
}
