//! Reference buckets and the classifier that fills them
//!
//! Nine buckets summarize colour content: three achromatic buckets decided by
//! saturation and brightness, and six hue buckets that split the colour
//! wheel into 60 degree slices.

mod classifier;
mod reference;

pub use classifier::classify;
pub use reference::{Bucket, HueRange};
