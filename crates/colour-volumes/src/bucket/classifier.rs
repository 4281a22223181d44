//! HSB to bucket classification.

use super::reference::Bucket;
use crate::color::HsbColour;
use crate::error::{ColourError, Result};

/// Assign an HSB colour to exactly one bucket.
///
/// Rules are applied in a fixed priority order:
///
/// 1. saturation 0 and brightness 1 is [`Bucket::White`]
/// 2. hue 0, saturation 0 and any brightness above 0 is [`Bucket::Gray`]
/// 3. brightness 0 is [`Bucket::Black`]
/// 4. otherwise the first hue bucket, in [`Bucket::HUES`] order, whose range
///    contains the hue
///
/// The hue ranges tile the whole circle, so step 4 always succeeds for
/// values produced by the converter. Hand-built colours with a hue outside
/// `0.0..=1.0` (or NaN) fail with [`ColourError::ClassificationGap`]
/// instead of being silently filed somewhere.
///
/// # Example
/// ```
/// use colour_volumes::{classify, Bucket, HsbColour, Rgb8};
///
/// let hsb = HsbColour::from(Rgb8::new(20, 30, 200));
/// assert_eq!(classify(&hsb).unwrap(), Bucket::Blue);
/// ```
pub fn classify(hsb: &HsbColour) -> Result<Bucket> {
    if hsb.saturation == 0.0 && hsb.brightness == 1.0 {
        return Ok(Bucket::White);
    }
    if hsb.hue == 0.0 && hsb.saturation == 0.0 && hsb.brightness > 0.0 {
        return Ok(Bucket::Gray);
    }
    if hsb.brightness == 0.0 {
        return Ok(Bucket::Black);
    }

    Bucket::HUES
        .iter()
        .copied()
        .find(|bucket| bucket.matches_hue(hsb.hue))
        .ok_or(ColourError::ClassificationGap { hue: hsb.hue })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    fn classify_rgb(r: u8, g: u8, b: u8) -> Bucket {
        classify(&HsbColour::from(Rgb8::new(r, g, b))).unwrap()
    }

    #[test]
    fn test_reference_colours() {
        assert_eq!(classify_rgb(255, 255, 255), Bucket::White);
        assert_eq!(classify_rgb(0, 0, 0), Bucket::Black);
        assert_eq!(classify_rgb(128, 128, 128), Bucket::Gray);
        assert_eq!(classify_rgb(255, 0, 0), Bucket::Red);
        assert_eq!(classify_rgb(0, 255, 0), Bucket::Green);
        assert_eq!(classify_rgb(0, 0, 255), Bucket::Blue);
        assert_eq!(classify_rgb(255, 255, 0), Bucket::Yellow);
        assert_eq!(classify_rgb(0, 255, 255), Bucket::Cyan);
        assert_eq!(classify_rgb(255, 0, 255), Bucket::Magenta);
    }

    #[test]
    fn test_dark_saturated_colour_uses_hue() {
        // Very dark but not black: brightness > 0 so the hue decides
        assert_eq!(classify_rgb(3, 0, 0), Bucket::Red);
        assert_eq!(classify_rgb(0, 0, 1), Bucket::Blue);
    }

    #[test]
    fn test_near_greys_are_chromatic() {
        // Any channel difference makes saturation non-zero
        assert_eq!(classify_rgb(129, 128, 128), Bucket::Red);
        assert_eq!(classify_rgb(128, 128, 129), Bucket::Blue);
    }

    #[test]
    fn test_every_grey_level() {
        assert_eq!(classify_rgb(0, 0, 0), Bucket::Black);
        for v in 1..=254u8 {
            assert_eq!(classify_rgb(v, v, v), Bucket::Gray, "grey level {v}");
        }
        assert_eq!(classify_rgb(255, 255, 255), Bucket::White);
    }

    #[test]
    fn test_hue_boundaries() {
        // Orange (30 degrees) is the first yellow hue
        assert_eq!(classify(&HsbColour::new(1.0 / 12.0, 1.0, 1.0)).unwrap(), Bucket::Yellow);
        assert_eq!(classify(&HsbColour::new(0.08, 1.0, 1.0)).unwrap(), Bucket::Red);
        assert_eq!(classify(&HsbColour::new(0.95, 1.0, 1.0)).unwrap(), Bucket::Red);
        assert_eq!(classify(&HsbColour::new(0.9, 1.0, 1.0)).unwrap(), Bucket::Magenta);
    }

    #[test]
    fn test_out_of_range_hue_is_a_gap() {
        let err = classify(&HsbColour::new(1.5, 0.5, 0.5)).unwrap_err();
        assert_eq!(err, ColourError::ClassificationGap { hue: 1.5 });

        let err = classify(&HsbColour::new(f32::NAN, 0.5, 0.5)).unwrap_err();
        assert!(matches!(err, ColourError::ClassificationGap { .. }));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let hsb = HsbColour::from(Rgb8::new(17, 140, 90));
        let first = classify(&hsb).unwrap();
        for _ in 0..10 {
            assert_eq!(classify(&hsb).unwrap(), first);
        }
    }
}
