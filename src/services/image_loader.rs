use crate::error::LoadError;
use colour_volumes::{Rgb8, RgbImage, RgbSource};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode a PNG file into an RGB image.
///
/// See [`decode_png`] for how colour types are normalized.
pub fn load_png(path: &Path) -> Result<RgbImage, LoadError> {
    let file = File::open(path)?;
    let image = decode_png(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded PNG"
    );
    Ok(image)
}

/// Decode PNG data from any reader into an RGB image.
///
/// Palette and low bit-depth images are expanded and 16-bit channels are
/// stripped to 8 bits. Grayscale becomes equal RGB channels; alpha is
/// dropped without compositing.
pub fn decode_png<R: Read>(input: R) -> Result<RgbImage, LoadError> {
    let mut decoder = png::Decoder::new(input);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(LoadError::UnsupportedLayout {
            color_type: info.color_type,
            bit_depth: info.bit_depth,
        });
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(LoadError::UnsupportedLayout {
                color_type: info.color_type,
                bit_depth: info.bit_depth,
            })
        }
    };

    let pixels: Vec<Rgb8> = bytes
        .chunks_exact(channels)
        .map(|px| match channels {
            1 | 2 => Rgb8::new(px[0], px[0], px[0]),
            _ => Rgb8::new(px[0], px[1], px[2]),
        })
        .collect();

    RgbImage::new(pixels, info.width, info.height).ok_or(LoadError::BufferMismatch {
        width: info.width,
        height: info.height,
    })
}
