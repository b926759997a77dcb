//! Output encodings for finished surfaces: PNG, JPEG and PNG data URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use footmap_common::{HeatmapError, HeatmapResult};
use image::codecs::jpeg::JpegEncoder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::png::{compression_level_for_quality, create_png_with_level};

/// Prefix of every data URL produced here.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Requested output representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "jpeg", alias = "jpg")]
    Jpeg,
    /// Inline `data:` URL, always PNG inside.
    #[serde(rename = "dataURL", alias = "data_url", alias = "dataurl")]
    DataUrl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::DataUrl => "dataURL",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "dataurl" | "data_url" | "data-url" => Ok(OutputFormat::DataUrl),
            other => Err(format!("unsupported output format '{}'", other)),
        }
    }
}

/// Result of encoding a heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeatmapOutput {
    /// Compressed image bytes in `format` (PNG or JPEG).
    Buffer { format: OutputFormat, bytes: Vec<u8> },
    /// `data:image/png;base64,...`
    DataUrl(String),
}

impl HeatmapOutput {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HeatmapOutput::Buffer { bytes, .. } => Some(bytes),
            HeatmapOutput::DataUrl(_) => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            HeatmapOutput::Buffer { bytes, .. } => Some(bytes),
            HeatmapOutput::DataUrl(_) => None,
        }
    }

    pub fn as_data_url(&self) -> Option<&str> {
        match self {
            HeatmapOutput::DataUrl(url) => Some(url),
            HeatmapOutput::Buffer { .. } => None,
        }
    }

    pub fn into_data_url(self) -> Option<String> {
        match self {
            HeatmapOutput::DataUrl(url) => Some(url),
            HeatmapOutput::Buffer { .. } => None,
        }
    }

    /// Encoded size: byte count, or string length for data URLs.
    pub fn len(&self) -> usize {
        match self {
            HeatmapOutput::Buffer { bytes, .. } => bytes.len(),
            HeatmapOutput::DataUrl(url) => url.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encode straight-alpha RGBA pixels in the requested format.
///
/// `quality` in `[0, 1]` sets JPEG quality. For PNG it only selects the
/// deflate level.
pub fn encode_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: OutputFormat,
    quality: f32,
) -> HeatmapResult<HeatmapOutput> {
    match format {
        OutputFormat::Png => {
            let bytes = encode_png(pixels, width, height, quality)?;
            Ok(HeatmapOutput::Buffer { format, bytes })
        }
        OutputFormat::Jpeg => {
            let bytes = encode_jpeg(pixels, width, height, quality)?;
            Ok(HeatmapOutput::Buffer { format, bytes })
        }
        OutputFormat::DataUrl => {
            let bytes = encode_png(pixels, width, height, quality)?;
            Ok(HeatmapOutput::DataUrl(png_data_url(&bytes)))
        }
    }
}

pub fn encode_png(pixels: &[u8], width: u32, height: u32, quality: f32) -> HeatmapResult<Vec<u8>> {
    create_png_with_level(
        pixels,
        width as usize,
        height as usize,
        compression_level_for_quality(quality),
    )
}

/// JPEG has no alpha channel, so pixels are flattened onto white first.
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: f32) -> HeatmapResult<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(HeatmapError::Encode(format!(
            "pixel buffer has {} bytes, expected {}",
            pixels.len(),
            expected
        )));
    }

    let rgb = flatten_onto_white(pixels);

    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality));
        encoder
            .encode(&rgb, width, height, image::ColorType::Rgb8)
            .map_err(|e| HeatmapError::Encode(format!("JPEG encoding failed: {}", e)))?;
    }

    Ok(bytes)
}

/// Map `[0, 1]` to the JPEG encoder's `1..=100` scale.
pub fn jpeg_quality(quality: f32) -> u8 {
    let q = if quality.is_finite() { quality.clamp(0.0, 1.0) } else { 1.0 };
    ((q * 100.0).round() as u8).max(1)
}

fn flatten_onto_white(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for p in pixels.chunks_exact(4) {
        let a = p[3] as u32;
        for &c in &p[..3] {
            let v = (c as u32 * a + 255 * (255 - a) + 127) / 255;
            rgb.push(v as u8);
        }
    }
    rgb
}

/// Wrap PNG bytes in a base64 data URL.
pub fn png_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut url);
    url
}

/// Decode the PNG bytes back out of a data URL produced by [`png_data_url`].
pub fn decode_png_data_url(url: &str) -> HeatmapResult<Vec<u8>> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| HeatmapError::Encode("not a PNG data URL".to_string()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| HeatmapError::Encode(format!("invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!("dataURL".parse::<OutputFormat>().unwrap(), OutputFormat::DataUrl);
        assert!("gif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_serde_names() {
        let f: OutputFormat = serde_json::from_str("\"dataURL\"").unwrap();
        assert_eq!(f, OutputFormat::DataUrl);
        assert_eq!(serde_json::to_string(&OutputFormat::Jpeg).unwrap(), "\"jpeg\"");
    }

    #[test]
    fn test_flatten_onto_white() {
        let rgb = flatten_onto_white(&[0, 0, 0, 0, 10, 20, 30, 255, 0, 0, 0, 128]);
        assert_eq!(&rgb[0..3], &[255, 255, 255]);
        assert_eq!(&rgb[3..6], &[10, 20, 30]);
        assert_eq!(rgb[6], 127);
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(0.92), 92);
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(2.0), 100);
    }

    #[test]
    fn test_data_url_roundtrip() {
        let url = png_data_url(&[1, 2, 3, 4, 5]);
        assert!(url.starts_with(PNG_DATA_URL_PREFIX));
        assert_eq!(decode_png_data_url(&url).unwrap(), vec![1, 2, 3, 4, 5]);
        assert!(decode_png_data_url("data:image/jpeg;base64,AAAA").is_err());
    }
}
