//! Colour types and conversion utilities
//!
//! Two representations are used by the pipeline:
//!
//! - [`Rgb8`]: raw 8-bit channels as read from the image. Averaging happens here.
//! - [`HsbColour`]: normalized hue/saturation/brightness. Classification happens here.
//!
//! # Example
//!
//! ```
//! use colour_volumes::{HsbColour, Rgb8};
//!
//! let red = Rgb8::new(255, 0, 0);
//! let hsb = HsbColour::from(red);
//!
//! assert_eq!(hsb.hue, 0.0);
//! assert_eq!(hsb.saturation, 1.0);
//! assert_eq!(hsb.brightness, 1.0);
//! assert_eq!(hsb.to_rgb(), red);
//! ```

mod hsb;
mod rgb;

pub use hsb::HsbColour;
pub use rgb::Rgb8;
