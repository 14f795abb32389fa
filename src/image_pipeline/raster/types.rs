//! Raster data types

/// Dense single-channel 16-bit raster in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples, `width * height` of them
    pub data: Vec<u16>,
}

impl Raster {
    /// Allocates a zero-filled raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u16; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u16 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u16) {
        self.data[y * self.width + x] = value;
    }

    /// Serializes the samples as little-endian 16-bit words.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|&value| value.to_le_bytes()).collect()
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(|&v| v as f64).sum::<f64>() / self.data.len() as f64
    }
}
