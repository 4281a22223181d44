//! Hue/saturation/brightness colour type
//!
//! HSB (also known as HSV) separates chromatic information (hue, saturation)
//! from intensity (brightness). All three components are normalized to
//! `0.0..=1.0`; hue is circular, so 0.0 and 1.0 denote the same angle.

use super::rgb::Rgb8;

/// A colour in HSB space.
///
/// Produced from an [`Rgb8`] sample with the standard six-sector transform.
/// The conversion is total: every 8-bit input maps to exactly one value, and
/// achromatic inputs (saturation 0) always get hue 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsbColour {
    /// Hue as a fraction of a full turn (0.0..1.0)
    pub hue: f32,
    /// Saturation (0.0..=1.0)
    pub saturation: f32,
    /// Brightness (0.0..=1.0)
    pub brightness: f32,
}

impl HsbColour {
    /// Create a new HSB colour from raw components.
    ///
    /// No range checks are performed; out-of-range values are rejected later
    /// by the classifier.
    #[inline]
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Hue expressed in degrees (0.0..360.0).
    #[inline]
    pub fn hue_degrees(&self) -> f32 {
        self.hue * 360.0
    }

    /// Reconstruct the 8-bit RGB colour this value was derived from.
    ///
    /// Channels are rounded to the nearest integer, so converting an
    /// [`Rgb8`] to HSB and back reproduces it within one step.
    ///
    /// # Example
    /// ```
    /// use colour_volumes::{HsbColour, Rgb8};
    ///
    /// let orange = Rgb8::new(255, 128, 0);
    /// assert_eq!(HsbColour::from(orange).to_rgb(), orange);
    /// ```
    pub fn to_rgb(&self) -> Rgb8 {
        let scale = |v: f32| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

        if self.saturation == 0.0 {
            let v = scale(self.brightness);
            return Rgb8::new(v, v, v);
        }

        let h = (self.hue - self.hue.floor()) * 6.0;
        let f = h - h.floor();
        let v = self.brightness;
        let p = v * (1.0 - self.saturation);
        let q = v * (1.0 - self.saturation * f);
        let t = v * (1.0 - self.saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb8::new(scale(r), scale(g), scale(b))
    }
}

impl From<Rgb8> for HsbColour {
    /// Convert an 8-bit sample to HSB.
    ///
    /// Brightness is `max / 255`, saturation is `(max - min) / max`, and hue
    /// is taken from the sector of whichever channel is largest.
    fn from(rgb: Rgb8) -> Self {
        let max = rgb.max_channel();
        let min = rgb.min_channel();

        let brightness = max as f32 / 255.0;
        let saturation = if max == 0 {
            0.0
        } else {
            (max - min) as f32 / max as f32
        };

        if saturation == 0.0 {
            return Self::new(0.0, saturation, brightness);
        }

        let range = (max - min) as f32;
        let rc = (max - rgb.r) as f32 / range;
        let gc = (max - rgb.g) as f32 / range;
        let bc = (max - rgb.b) as f32 / range;

        let sector = if rgb.r == max {
            bc - gc
        } else if rgb.g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        let mut hue = sector / 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        Self::new(hue, saturation, brightness)
    }
}
