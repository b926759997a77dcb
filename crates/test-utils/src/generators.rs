//! Synthetic sample and pixel data.
//!
//! Samples are returned as `(x, y, intensity)` tuples; callers convert them
//! into their own sample type.

/// Creates an evenly spaced grid of samples with a fixed intensity.
///
/// Samples sit at cell centers, so a `cols x rows` grid never touches the
/// canvas edge.
///
/// # Example
///
/// ```
/// use test_utils::create_sample_grid;
///
/// let grid = create_sample_grid(2, 2, 0.5);
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid[0], (0.25, 0.25, 0.5));
/// ```
pub fn create_sample_grid(cols: usize, rows: usize, intensity: f32) -> Vec<(f32, f32, f32)> {
    let mut samples = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let x = (col as f32 + 0.5) / cols as f32;
            let y = (row as f32 + 0.5) / rows as f32;
            samples.push((x, y, intensity));
        }
    }
    samples
}

/// Creates pseudo-random samples from a seed (simple LCG, deterministic).
pub fn create_scattered_samples(count: usize, seed: u32) -> Vec<(f32, f32, f32)> {
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    let mut next = move || {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        ((state >> 8) & 0xFFFF) as f32 / 65535.0
    };
    (0..count).map(|_| (next(), next(), next())).collect()
}

/// Creates a solid RGBA image.
pub fn create_solid_rgba_pixels(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(width * height)
}

/// Creates RGBA pixel data with a smooth two-axis gradient.
pub fn create_test_rgba_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_grid_cell_centers() {
        let grid = create_sample_grid(4, 2, 1.0);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0], (0.125, 0.25, 1.0));
        assert_eq!(grid[7], (0.875, 0.75, 1.0));
    }

    #[test]
    fn test_scattered_samples_deterministic() {
        let a = create_scattered_samples(10, 7);
        let b = create_scattered_samples(10, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&(x, y, i)| {
            (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) && (0.0..=1.0).contains(&i)
        }));
    }
}
