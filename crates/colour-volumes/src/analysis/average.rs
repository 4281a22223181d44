//! Mean colour over the sampled grid.

use super::parallel::parallel_fold_reduce;
use crate::color::{HsbColour, Rgb8};
use crate::error::{ColourError, Result};
use crate::raster::{sample, RgbSource};

/// Per-worker running channel totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ChannelSums {
    r: u64,
    g: u64,
    b: u64,
    count: u64,
}

impl ChannelSums {
    fn add(mut self, rgb: &Rgb8) -> Self {
        self.r += rgb.r as u64;
        self.g += rgb.g as u64;
        self.b += rgb.b as u64;
        self.count += 1;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            count: self.count + other.count,
        }
    }

    /// Truncating per-channel mean. `None` when nothing was added.
    fn mean(&self) -> Option<Rgb8> {
        if self.count == 0 {
            return None;
        }
        // Mean of u8 values always fits in u8
        Some(Rgb8::new(
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
        ))
    }
}

/// Integer mean of raw samples, channel by channel.
///
/// Channel sums are accumulated in the 0..=255 representation and divided
/// with truncation, matching 8-bit channel semantics.
pub fn mean_rgb(samples: &[Rgb8]) -> Option<Rgb8> {
    parallel_fold_reduce(samples, ChannelSums::default, ChannelSums::add, ChannelSums::merge).mean()
}

/// Average colour of `image` sampled at `resolution`.
///
/// The mean is computed on raw RGB and converted to HSB once at the end.
///
/// # Errors
///
/// - [`ColourError::InvalidArgument`] if `resolution` is outside `0.0..=1.0`
/// - [`ColourError::DegenerateInput`] if the image yields no samples
///
/// # Example
///
/// ```
/// use colour_volumes::{average_colour, HsbColour, RgbImage, Rgb8};
///
/// let image = RgbImage::uniform(8, 8, Rgb8::new(10, 120, 200));
/// let average = average_colour(&image, 0.5).unwrap();
///
/// assert_eq!(average, HsbColour::from(Rgb8::new(10, 120, 200)));
/// ```
pub fn average_colour<S: RgbSource + ?Sized>(image: &S, resolution: f32) -> Result<HsbColour> {
    let samples = sample(image, resolution)?;
    average_of_samples(&samples, image.width(), image.height())
}

/// Mean of samples already taken from a `width` x `height` image.
pub(crate) fn average_of_samples(samples: &[Rgb8], width: u32, height: u32) -> Result<HsbColour> {
    let mean = mean_rgb(samples).ok_or(ColourError::DegenerateInput { width, height })?;

    tracing::debug!(samples = samples.len(), mean = %mean, "Computed average colour");

    Ok(HsbColour::from(mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbImage;

    #[test]
    fn test_mean_truncates() {
        let samples = [Rgb8::new(0, 0, 0), Rgb8::new(1, 3, 255)];
        assert_eq!(mean_rgb(&samples), Some(Rgb8::new(0, 1, 127)));
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(mean_rgb(&[]), None);
    }

    #[test]
    fn test_mean_large_input_does_not_overflow() {
        let samples = vec![Rgb8::new(255, 255, 255); 100_000];
        assert_eq!(mean_rgb(&samples), Some(Rgb8::new(255, 255, 255)));
    }

    #[test]
    fn test_uniform_image_average() {
        for colour in [
            Rgb8::new(255, 0, 0),
            Rgb8::new(12, 34, 56),
            Rgb8::new(128, 128, 128),
            Rgb8::new(0, 0, 0),
        ] {
            let image = RgbImage::uniform(17, 9, colour);
            for r in [0.0f32, 0.3, 1.0] {
                assert_eq!(
                    average_colour(&image, r).unwrap(),
                    HsbColour::from(colour),
                    "{colour} at {r}"
                );
            }
        }
    }

    #[test]
    fn test_average_mixes_in_rgb() {
        // Half red, half blue averages to (127, 0, 127) before conversion
        let image = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb8::new(255, 0, 0)
            } else {
                Rgb8::new(0, 0, 255)
            }
        });
        let average = average_colour(&image, 1.0).unwrap();
        assert_eq!(average, HsbColour::from(Rgb8::new(127, 0, 127)));
    }

    #[test]
    fn test_average_rejects_bad_resolution() {
        let image = RgbImage::uniform(4, 4, Rgb8::new(1, 2, 3));
        assert_eq!(
            average_colour(&image, 1.1),
            Err(ColourError::InvalidArgument { resolution: 1.1 })
        );
    }

    #[test]
    fn test_average_of_empty_image() {
        let image = RgbImage::uniform(0, 0, Rgb8::default());
        assert_eq!(
            average_colour(&image, 1.0),
            Err(ColourError::DegenerateInput {
                width: 0,
                height: 0
            })
        );
    }
}
