//! Average colour and colour volumes from one sampling pass.

use super::average::average_of_samples;
use super::volumes::{volumes_of_samples, ColourVolume};
use crate::color::HsbColour;
use crate::error::Result;
use crate::raster::{sample, RgbSource};

/// Both summaries of one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourSummary {
    pub average: HsbColour,
    pub volumes: Vec<ColourVolume>,
}

/// Sample `image` once and compute its average colour and colour volumes.
///
/// Gives the same results as calling [`average_colour`](super::average_colour)
/// and [`colour_volumes`](super::colour_volumes) with the same arguments, but
/// every sampled pixel is read once instead of twice.
///
/// # Errors
///
/// The union of both aggregators' errors.
pub fn colour_summary<S: RgbSource + ?Sized>(image: &S, resolution: f32) -> Result<ColourSummary> {
    let samples = sample(image, resolution)?;
    let (width, height) = (image.width(), image.height());

    Ok(ColourSummary {
        average: average_of_samples(&samples, width, height)?,
        volumes: volumes_of_samples(&samples, width, height)?,
    })
}
