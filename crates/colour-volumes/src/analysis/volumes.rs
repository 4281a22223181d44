//! Per-bucket colour volumes.

use std::cmp::Ordering;

use super::parallel::try_parallel_fold_reduce;
use crate::bucket::{classify, Bucket};
use crate::color::{HsbColour, Rgb8};
use crate::error::{ColourError, Result};
use crate::raster::{sample, RgbSource};

/// Share of the sampled pixels that landed in one bucket.
///
/// Only the bucket's fixed representative colour is reported, not the mean
/// of the pixels that were filed under it.
///
/// # Ordering
///
/// Volumes sort largest fraction first. Equal fractions fall back to the
/// [`Bucket`] declaration order, so every result has one deterministic
/// iteration order. Equality follows the same rule: two volumes are equal
/// when both their fraction and bucket are equal.
#[derive(Debug, Clone, Copy)]
pub struct ColourVolume {
    bucket: Bucket,
    count: u64,
    fraction: f64,
}

impl ColourVolume {
    /// Create a volume for `count` of `total` samples.
    ///
    /// A `total` of zero gives a fraction of 0.0 rather than NaN.
    pub fn new(bucket: Bucket, count: u64, total: u64) -> Self {
        let fraction = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        Self {
            bucket,
            count,
            fraction,
        }
    }

    /// The bucket this volume describes.
    #[inline]
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// The bucket's representative colour.
    #[inline]
    pub fn colour(&self) -> Rgb8 {
        self.bucket.representative()
    }

    /// Number of samples in the bucket.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fraction of all samples in the bucket (0.0..=1.0).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl PartialEq for ColourVolume {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ColourVolume {}

impl PartialOrd for ColourVolume {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColourVolume {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fraction
            .total_cmp(&self.fraction)
            .then_with(|| self.bucket.cmp(&other.bucket))
    }
}

/// Fixed-size tally indexed by [`Bucket::index`].
pub type BucketCounts = [u64; Bucket::COUNT];

fn tally(mut counts: BucketCounts, rgb: &Rgb8) -> Result<BucketCounts> {
    let bucket = classify(&HsbColour::from(*rgb))?;
    counts[bucket.index()] += 1;
    Ok(counts)
}

fn merge(mut a: BucketCounts, b: BucketCounts) -> BucketCounts {
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
    a
}

/// Classify every sample and count hits per bucket.
///
/// Each worker fills its own counter array; arrays are summed once at the
/// end.
pub fn count_buckets(samples: &[Rgb8]) -> Result<BucketCounts> {
    try_parallel_fold_reduce(samples, || [0u64; Bucket::COUNT], tally, merge)
}

/// Turn bucket counts into sorted volumes, skipping empty buckets.
///
/// Returns an empty list when every count is zero.
pub fn volumes_from_counts(counts: &BucketCounts) -> Vec<ColourVolume> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut volumes: Vec<ColourVolume> = Bucket::ALL
        .iter()
        .filter(|bucket| counts[bucket.index()] > 0)
        .map(|&bucket| ColourVolume::new(bucket, counts[bucket.index()], total))
        .collect();
    volumes.sort();
    volumes
}

/// Break `image` down into colour volumes at `resolution`.
///
/// Every sample is converted to HSB, classified into one of the nine
/// buckets, and counted. One [`ColourVolume`] is returned per populated
/// bucket, sorted by descending fraction; the fractions sum to 1.0.
///
/// # Errors
///
/// - [`ColourError::InvalidArgument`] if `resolution` is outside `0.0..=1.0`
/// - [`ColourError::DegenerateInput`] if the image yields no samples
/// - [`ColourError::ClassificationGap`] if a sample matches no bucket
///
/// # Example
///
/// ```
/// use colour_volumes::{colour_volumes, Bucket, RgbImage, Rgb8};
///
/// let pixels = vec![
///     Rgb8::new(255, 0, 0),
///     Rgb8::new(255, 0, 0),
///     Rgb8::new(0, 255, 0),
///     Rgb8::new(0, 0, 0),
/// ];
/// let image = RgbImage::new(pixels, 2, 2).unwrap();
/// let volumes = colour_volumes(&image, 1.0).unwrap();
///
/// assert_eq!(volumes[0].bucket(), Bucket::Red);
/// assert_eq!(volumes[0].fraction(), 0.5);
/// assert_eq!(volumes.len(), 3);
/// ```
pub fn colour_volumes<S: RgbSource + ?Sized>(
    image: &S,
    resolution: f32,
) -> Result<Vec<ColourVolume>> {
    let samples = sample(image, resolution)?;
    volumes_of_samples(&samples, image.width(), image.height())
}

/// Volumes of samples already taken from a `width` x `height` image.
pub(crate) fn volumes_of_samples(
    samples: &[Rgb8],
    width: u32,
    height: u32,
) -> Result<Vec<ColourVolume>> {
    if samples.is_empty() {
        return Err(ColourError::DegenerateInput { width, height });
    }

    let counts = count_buckets(samples)?;
    let volumes = volumes_from_counts(&counts);

    tracing::debug!(
        samples = samples.len(),
        buckets = volumes.len(),
        "Computed colour volumes"
    );

    Ok(volumes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbImage;

    #[test]
    fn test_counts_by_bucket() {
        let samples = [
            Rgb8::new(255, 0, 0),
            Rgb8::new(200, 10, 10),
            Rgb8::new(0, 0, 0),
            Rgb8::new(255, 255, 255),
        ];
        let counts = count_buckets(&samples).unwrap();
        assert_eq!(counts[Bucket::Red.index()], 2);
        assert_eq!(counts[Bucket::Black.index()], 1);
        assert_eq!(counts[Bucket::White.index()], 1);
        assert_eq!(counts.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_volume_ordering() {
        let mut volumes = vec![
            ColourVolume::new(Bucket::Blue, 1, 4),
            ColourVolume::new(Bucket::Red, 2, 4),
            ColourVolume::new(Bucket::Black, 1, 4),
        ];
        volumes.sort();
        let order: Vec<Bucket> = volumes.iter().map(|v| v.bucket()).collect();
        // Largest first, then ties in bucket declaration order
        assert_eq!(order, vec![Bucket::Red, Bucket::Black, Bucket::Blue]);
    }

    #[test]
    fn test_volume_equality_uses_bucket_and_fraction() {
        assert_eq!(
            ColourVolume::new(Bucket::Cyan, 1, 2),
            ColourVolume::new(Bucket::Cyan, 2, 4)
        );
        assert_ne!(
            ColourVolume::new(Bucket::Cyan, 1, 2),
            ColourVolume::new(Bucket::Blue, 1, 2)
        );
    }

    #[test]
    fn test_zero_total_has_zero_fraction() {
        let volume = ColourVolume::new(Bucket::Red, 0, 0);
        assert_eq!(volume.fraction(), 0.0);
        assert!(!volume.fraction().is_nan());
    }

    #[test]
    fn test_volumes_skip_empty_buckets() {
        let mut counts = [0u64; Bucket::COUNT];
        counts[Bucket::Green.index()] = 3;
        counts[Bucket::Gray.index()] = 1;

        let volumes = volumes_from_counts(&counts);
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[0].bucket(), Bucket::Green);
        assert_eq!(volumes[0].fraction(), 0.75);
        assert_eq!(volumes[0].count(), 3);
        assert_eq!(volumes[1].colour(), Rgb8::new(128, 128, 128));
        assert!(volumes_from_counts(&[0; Bucket::COUNT]).is_empty());
    }

    #[test]
    fn test_empty_image_is_degenerate() {
        let image = RgbImage::uniform(3, 0, Rgb8::default());
        assert_eq!(
            colour_volumes(&image, 0.5),
            Err(ColourError::DegenerateInput {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn test_invalid_resolution() {
        let image = RgbImage::uniform(3, 3, Rgb8::default());
        assert!(matches!(
            colour_volumes(&image, -1.0),
            Err(ColourError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_large_image_takes_parallel_path() {
        // 128x128 = 16384 samples, above the sequential threshold
        let image = RgbImage::from_fn(128, 128, |x, _| {
            if x < 32 {
                Rgb8::new(0, 0, 255)
            } else {
                Rgb8::new(255, 255, 0)
            }
        });
        let volumes = colour_volumes(&image, 1.0).unwrap();
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[0].bucket(), Bucket::Yellow);
        assert_eq!(volumes[0].fraction(), 0.75);
        assert_eq!(volumes[1].bucket(), Bucket::Blue);
        assert_eq!(volumes[1].count(), 32 * 128);
    }
}
