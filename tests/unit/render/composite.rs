use std::sync::Arc;

use super::*;

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn half_alpha_blends() {
    let out = over([0, 0, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert!(out[2].abs_diff(127) <= 1);
}

#[test]
fn over_in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    over_in_place(&mut dst, &[9, 9, 9, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![9, 9, 9, 255, 0, 0, 0, 0]);
}

#[test]
fn scale_fills_canvas() {
    let img = PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![200, 100, 50, 255]),
    };
    let canvas = Canvas::new(4, 3).unwrap();
    let out = scale_to_canvas(&img, canvas).unwrap();
    assert_eq!(out.len(), canvas.byte_len());
    for px in out.chunks_exact(4) {
        for (got, want) in px.iter().zip([200u8, 100, 50, 255]) {
            assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
        }
    }
}

#[test]
fn same_size_is_a_copy() {
    let img = PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![1, 2, 3, 4]),
    };
    let out = scale_to_canvas(&img, Canvas::new(1, 1).unwrap()).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4]);
}
