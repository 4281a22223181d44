//! colour-volumes: sampled colour summaries for raster images
//!
//! This library reduces an image to two summaries of its colour content:
//!
//! - a single **average colour**, and
//! - a set of **colour volumes**: the share of pixels that fall into each of
//!   nine reference buckets (black, white, gray, red, yellow, green, cyan,
//!   blue, magenta).
//!
//! Decoding is not part of the crate. Anything implementing [`RgbSource`]
//! can be analyzed; [`RgbImage`] is a ready-made in-memory buffer.
//!
//! # Quick Start
//!
//! ```
//! use colour_volumes::{average_colour, colour_volumes, Bucket, RgbImage, Rgb8};
//!
//! let image = RgbImage::from_fn(4, 4, |x, _| {
//!     if x < 2 { Rgb8::new(255, 0, 0) } else { Rgb8::new(255, 255, 255) }
//! });
//!
//! let average = average_colour(&image, 1.0).unwrap();
//! assert_eq!(average.to_rgb(), Rgb8::new(255, 127, 127));
//!
//! let volumes = colour_volumes(&image, 1.0).unwrap();
//! assert_eq!(volumes[0].bucket(), Bucket::White);
//! assert_eq!(volumes[1].bucket(), Bucket::Red);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbSource
//!     |
//!     v
//! sample(resolution)        regular grid, row-major, rows read in parallel
//!     |
//!     +---> mean_rgb ------> HsbColour            (average_colour)
//!     |
//!     +---> HsbColour -> classify -> count  ----> Vec<ColourVolume>  (colour_volumes)
//! ```
//!
//! ## Resolution
//!
//! `resolution` is a sampling density in `0.0..=1.0`, not a pixel size. Along
//! each axis of length `n` the sampler visits every
//! `n / max(1, floor(n * resolution))`-th pixel starting at 0. A resolution
//! of 1.0 reads every pixel; 0.0 reads only the origin. Anything outside the
//! range is rejected with [`ColourError::InvalidArgument`].
//!
//! ## Classification
//!
//! Achromatic buckets are checked first, using exact values: saturation 0
//! with brightness 1 is white, saturation 0 with any other non-zero
//! brightness is gray, brightness 0 is black. Everything else is filed by
//! hue into six 60 degree slices centred on the primary and secondary hues.
//! Red wraps through 0. See [`classify`].
//!
//! ## Parallelism
//!
//! Both reductions fold samples into per-worker accumulators (channel sums,
//! or a `[u64; 9]` bucket tally) with rayon and merge them once. Results do
//! not depend on the thread count.

pub mod analysis;
pub mod bucket;
pub mod color;
pub mod error;
pub mod raster;


pub use analysis::{average_colour, colour_summary, colour_volumes, ColourSummary, ColourVolume};
pub use bucket::{classify, Bucket};
pub use color::{HsbColour, Rgb8};
pub use error::{ColourError, Result};
pub use raster::{sample, RgbImage, RgbSource};
