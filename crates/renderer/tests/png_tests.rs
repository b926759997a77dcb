//! Tests for PNG encoding.

use renderer::png::{create_png, create_png_with_level};
use test_utils::{create_test_rgba_pixels, decode_image, PNG_SIGNATURE};

#[test]
fn test_png_decodes_to_same_pixels() {
    let (w, h) = (37, 23);
    let pixels = create_test_rgba_pixels(w, h);
    let png = create_png(&pixels, w, h).unwrap();

    assert_eq!(&png[..8], &PNG_SIGNATURE);
    let decoded = decode_image(&png);
    assert_eq!((decoded.width, decoded.height), (w as u32, h as u32));
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn test_translucent_pixels_survive() {
    let pixels = vec![10, 20, 30, 40, 200, 100, 50, 0];
    let png = create_png(&pixels, 2, 1).unwrap();
    assert_eq!(decode_image(&png).pixels, pixels);
}

#[test]
fn test_compression_level_changes_size_not_pixels() {
    let (w, h) = (64, 64);
    let pixels = create_test_rgba_pixels(w, h);

    let fast = create_png_with_level(&pixels, w, h, 1).unwrap();
    let best = create_png_with_level(&pixels, w, h, 9).unwrap();

    assert!(best.len() <= fast.len());
    assert_eq!(decode_image(&fast).pixels, decode_image(&best).pixels);
}
