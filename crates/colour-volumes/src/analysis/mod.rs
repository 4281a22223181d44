//! Aggregation of sampled colours
//!
//! Two independent reductions over the same samples:
//!
//! - [`average_colour`]: one mean colour, averaged in RGB and reported as HSB
//! - [`colour_volumes`]: the share of samples in each reference bucket
//!
//! [`colour_summary`] computes both from one sampling pass.

mod average;
mod parallel;
mod summary;
mod volumes;

pub use average::{average_colour, mean_rgb};
pub use parallel::{parallel_fold_reduce, try_parallel_fold_reduce, PARALLEL_THRESHOLD};
pub use summary::{colour_summary, ColourSummary};
pub use volumes::{colour_volumes, count_buckets, volumes_from_counts, BucketCounts, ColourVolume};
