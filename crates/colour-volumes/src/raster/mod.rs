//! Image access and grid sampling
//!
//! [`RgbSource`] is the seam to whatever decodes images; [`sample`] turns a
//! source into the flat list of pixel samples the aggregators consume.

mod image;
mod sampler;

pub use image::{RgbImage, RgbSource};
pub use sampler::{sample, sample_step, validate_resolution};
