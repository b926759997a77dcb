//! Helpers for inspecting rendered RGBA images.

/// Decoded image: width, height and straight-alpha RGBA bytes.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        rgba_at(&self.pixels, self.width as usize, x as usize, y as usize)
    }
}

/// Decode PNG or JPEG bytes to RGBA.
pub fn decode_image(bytes: &[u8]) -> DecodedImage {
    let img = image::load_from_memory(bytes)
        .expect("Failed to decode image bytes")
        .to_rgba8();
    DecodedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    }
}

/// RGBA value of a single pixel in a row-major buffer.
pub fn rgba_at(pixels: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let i = (y * width + x) * 4;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

/// Number of pixels whose RGBA differs between two equally sized buffers.
pub fn count_differing_pixels(a: &[u8], b: &[u8]) -> usize {
    assert_eq!(a.len(), b.len(), "buffers differ in size");
    a.chunks_exact(4)
        .zip(b.chunks_exact(4))
        .filter(|(p, q)| p != q)
        .count()
}

/// Centroid of "ink": how far each pixel has moved away from a reference
/// background color, summed over RGB and used as the weight.
///
/// Returns `None` when the image is identical to the background.
pub fn ink_centroid(
    pixels: &[u8],
    width: usize,
    height: usize,
    background: [u8; 3],
) -> Option<(f64, f64)> {
    let mut total = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    for y in 0..height {
        for x in 0..width {
            let p = rgba_at(pixels, width, x, y);
            let weight: f64 = (0..3)
                .map(|c| (p[c] as f64 - background[c] as f64).abs())
                .sum();
            total += weight;
            sx += weight * (x as f64 + 0.5);
            sy += weight * (y as f64 + 0.5);
        }
    }
    if total == 0.0 {
        None
    } else {
        Some((sx / total, sy / total))
    }
}
