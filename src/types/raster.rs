//! Decoded raster images and their palette-indexed form.

use crate::error::{IdxError, Result};

/// A decoded RGBA image with one packed `u32` per pixel, in raster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Image {
    /// Create an image, checking that the buffer covers `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(IdxError::ShapeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// An image with every pixel replaced by its palette index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBuffer {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedBuffer {
    /// Create an indexed buffer, checking that it covers `width * height`.
    pub fn new(width: u32, height: u32, indices: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if indices.len() != expected {
            return Err(IdxError::ShapeMismatch {
                expected,
                actual: indices.len(),
            });
        }
        Ok(Self {
            width,
            height,
            indices,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Indices in raster order.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }
}
