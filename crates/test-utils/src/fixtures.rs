//! Common test fixtures for heatmap tests.

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// JPEG start-of-image marker.
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Prefix every PNG data URL starts with.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Common output sizes.
pub mod dims {
    /// Default render size.
    pub const DEFAULT: (u32, u32) = (500, 800);

    /// Size used for persisted scan heatmaps.
    pub const SCAN: (u32, u32) = (600, 1000);

    /// Small canvas for fast pixel tests.
    pub const SMALL: (u32, u32) = (100, 160);

    /// `SMALL` at twice the resolution.
    pub const SMALL_2X: (u32, u32) = (200, 320);
}

/// Default five-stop gradient, low to high.
pub const DEFAULT_GRADIENT_RGB: [(u8, u8, u8); 5] = [
    (0, 0, 255),
    (0, 255, 255),
    (0, 255, 0),
    (255, 255, 0),
    (255, 0, 0),
];
