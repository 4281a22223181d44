//! Test fixtures: PNG files on disk and reference images.

use colour_volumes::{Rgb8, RgbImage, RgbSource};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference colours used across tests
pub mod palette {
    use colour_volumes::Rgb8;

    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const GRAY: Rgb8 = Rgb8::new(128, 128, 128);
}

/// Temporary directory that removes itself when dropped
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Encode `image` as an 8-bit RGB PNG and return its path
    pub fn write_png(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, encode_rgb_png(image)).expect("Failed to write PNG");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode an image as an 8-bit RGB PNG in memory
pub fn encode_rgb_png(image: &RgbImage) -> Vec<u8> {
    let data: Vec<u8> = image.pixels().iter().flat_map(|p| p.to_bytes()).collect();

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(&data)
            .expect("Failed to write PNG data");
        writer.finish().expect("Failed to finish PNG");
    }
    bytes
}

/// The 2x2 image: two red pixels on top, green and black below
pub fn quad_image() -> RgbImage {
    RgbImage::new(
        vec![palette::RED, palette::RED, palette::GREEN, palette::BLACK],
        2,
        2,
    )
    .expect("2x2 image")
}

/// Vertical stripes cycling through `colours`, one column each
pub fn striped_image(width: u32, height: u32, colours: &[Rgb8]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| colours[x as usize % colours.len()])
}
