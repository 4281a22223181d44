//! Image abstraction consumed by the sampler.

use crate::color::Rgb8;

/// A read-only grid of RGB pixels.
///
/// Decoding is left to the caller: anything that can report its dimensions
/// and look up a pixel can be analyzed. Implementations must be `Sync`
/// because rows are sampled on several threads at once.
pub trait RgbSource: Sync {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel at `(x, y)`. Callers only ask for coordinates below
    /// `(width, height)`.
    fn rgb_at(&self, x: u32, y: u32) -> Rgb8;
}

/// An owned, row-major RGB image.
///
/// # Example
///
/// ```
/// use colour_volumes::{RgbImage, RgbSource, Rgb8};
///
/// let image = RgbImage::from_fn(3, 2, |x, y| Rgb8::new(x as u8, y as u8, 0));
///
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.rgb_at(2, 1), Rgb8::new(2, 1, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pixels: Vec<Rgb8>,
    width: u32,
    height: u32,
}

impl RgbImage {
    /// Wrap a pixel buffer.
    ///
    /// Returns `None` if `pixels.len()` does not equal `width * height`.
    pub fn new(pixels: Vec<Rgb8>, width: u32, height: u32) -> Option<Self> {
        if Some(pixels.len()) != pixel_count(width, height) {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// An image filled with one colour.
    ///
    /// Panics with a capacity overflow if `width * height` does not fit in
    /// `usize`.
    pub fn uniform(width: u32, height: u32, colour: Rgb8) -> Self {
        Self {
            pixels: vec![colour; pixel_count(width, height).unwrap_or(usize::MAX)],
            width,
            height,
        }
    }

    /// Build an image by evaluating `f` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb8,
    {
        let mut pixels = Vec::with_capacity(pixel_count(width, height).unwrap_or(usize::MAX));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Build an image from packed `RGB` bytes (three bytes per pixel).
    ///
    /// Returns `None` if the byte count does not match the dimensions.
    pub fn from_rgb_bytes(bytes: &[u8], width: u32, height: u32) -> Option<Self> {
        let expected = pixel_count(width, height)?.checked_mul(3)?;
        if bytes.len() != expected {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
            .collect();
        Self::new(pixels, width, height)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
}

/// `width * height`, or `None` if it overflows `usize`.
fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

impl RgbSource for RgbImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn rgb_at(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
