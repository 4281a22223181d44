//! Regular-grid pixel sampling.

use rayon::prelude::*;

use super::image::RgbSource;
use crate::color::Rgb8;
use crate::error::{ColourError, Result};

/// Reject resolutions outside `0.0..=1.0`. NaN is rejected too.
pub fn validate_resolution(resolution: f32) -> Result<()> {
    if (0.0..=1.0).contains(&resolution) {
        Ok(())
    } else {
        Err(ColourError::InvalidArgument { resolution })
    }
}

/// Distance between consecutive samples along one axis.
///
/// `floor(len / floor(len * resolution))`, with the target sample count
/// clamped to at least 1 so tiny resolutions sample the origin only. A
/// zero-length axis has step 0 and produces no samples.
pub fn sample_step(axis_len: u32, resolution: f32) -> u32 {
    if axis_len == 0 {
        return 0;
    }
    let target = ((axis_len as f32 * resolution).floor() as u32).max(1);
    (axis_len / target).max(1)
}

/// Sample `image` on a regular grid.
///
/// Samples are taken at `(0, sx, 2*sx, ..) x (0, sy, 2*sy, ..)` where the
/// steps come from [`sample_step`], stopping before the image bounds. The
/// result is in row-major scan order (rows top to bottom, pixels left to
/// right). Rows are read in parallel; the order of the output does not
/// depend on scheduling.
///
/// # Errors
///
/// [`ColourError::InvalidArgument`] if `resolution` is outside `0.0..=1.0`.
/// No pixels are read in that case.
///
/// # Example
///
/// ```
/// use colour_volumes::{sample, RgbImage, Rgb8};
///
/// let image = RgbImage::uniform(10, 10, Rgb8::new(9, 9, 9));
///
/// assert_eq!(sample(&image, 1.0).unwrap().len(), 100);
/// assert_eq!(sample(&image, 0.5).unwrap().len(), 25);
/// assert_eq!(sample(&image, 0.0).unwrap().len(), 1);
/// assert!(sample(&image, 1.5).is_err());
/// ```
pub fn sample<S: RgbSource + ?Sized>(image: &S, resolution: f32) -> Result<Vec<Rgb8>> {
    validate_resolution(resolution)?;

    let (width, height) = (image.width(), image.height());
    let step_x = sample_step(width, resolution);
    let step_y = sample_step(height, resolution);

    if step_x == 0 || step_y == 0 {
        tracing::debug!(width, height, "Empty image, nothing to sample");
        return Ok(Vec::new());
    }

    let rows: Vec<u32> = (0..height).step_by(step_y as usize).collect();
    let samples: Vec<Rgb8> = rows
        .par_iter()
        .flat_map_iter(|&y| {
            (0..width)
                .step_by(step_x as usize)
                .map(move |x| image.rgb_at(x, y))
        })
        .collect();

    tracing::debug!(
        width,
        height,
        resolution,
        step_x,
        step_y,
        samples = samples.len(),
        "Sampled image"
    );

    Ok(samples)
}
