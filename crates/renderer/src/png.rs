//! PNG encoding for RGBA image data.
//!
//! Writes 8-bit RGBA (color type 6), unfiltered scanlines, one IDAT chunk.
//! The output depends only on the pixels and the compression level, so the
//! same render always produces the same bytes.

use footmap_common::{HeatmapError, HeatmapResult};
use std::io::Write;

/// PNG signature bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Deflate level used when the caller does not choose one.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Map an encoder quality in `[0, 1]` to a deflate level in `1..=9`.
///
/// PNG is lossless: the level changes size and speed, never pixels.
pub fn compression_level_for_quality(quality: f32) -> u32 {
    let q = if quality.is_finite() { quality.clamp(0.0, 1.0) } else { 1.0 };
    1 + (q * 8.0).round() as u32
}

/// Create a PNG image from RGBA pixel data with the default compression level.
///
/// # Arguments
/// - `pixels`: straight-alpha RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    create_png_with_level(pixels, width, height, DEFAULT_COMPRESSION_LEVEL)
}

/// Create a PNG image from RGBA pixel data at a given deflate level (0-9).
pub fn create_png_with_level(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: u32,
) -> HeatmapResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(HeatmapError::Encode(format!(
            "cannot encode empty image {}x{}",
            width, height
        )));
    }
    if pixels.len() != width * height * 4 {
        return Err(HeatmapError::Encode(format!(
            "pixel buffer has {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            width * height * 4,
            width,
            height
        )));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height, level)
        .map_err(|e| HeatmapError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers type and data, not length
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for IDAT chunk.
fn deflate_idat_rgba(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: u32,
) -> std::io::Result<Vec<u8>> {
    // Add filter byte (0 = no filter) to each scanline
    let row_bytes = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in pixels.chunks_exact(row_bytes) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::new(level.min(9)));
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
