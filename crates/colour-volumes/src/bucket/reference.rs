//! The nine reference buckets and their hue ranges.

use std::fmt;

use crate::color::Rgb8;

/// One of the nine fixed classification outcomes.
///
/// The declaration order (achromatic buckets first, then hues around the
/// wheel) is the tie-break order used when sorting colour volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Black,
    White,
    Gray,
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// Half-open range on the hue circle, as fractions of a full turn.
///
/// When `start > end` the range wraps through 0.0; that form is only used by
/// red, which straddles the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    start: f32,
    end: f32,
}

impl HueRange {
    const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Whether `hue` falls inside the range.
    ///
    /// Values outside `0.0..=1.0` and NaN never match.
    pub fn contains(&self, hue: f32) -> bool {
        if !(0.0..=1.0).contains(&hue) {
            return false;
        }
        if self.start <= self.end {
            hue >= self.start && hue < self.end
        } else {
            hue >= self.start || hue < self.end
        }
    }
}

const TWELFTH: f32 = 1.0 / 12.0;

impl Bucket {
    /// Total number of buckets.
    pub const COUNT: usize = 9;

    /// Every bucket in declaration order.
    pub const ALL: [Bucket; Bucket::COUNT] = [
        Bucket::Black,
        Bucket::White,
        Bucket::Gray,
        Bucket::Red,
        Bucket::Yellow,
        Bucket::Green,
        Bucket::Cyan,
        Bucket::Blue,
        Bucket::Magenta,
    ];

    /// The hue buckets in the order the classifier checks them.
    pub const HUES: [Bucket; 6] = [
        Bucket::Red,
        Bucket::Yellow,
        Bucket::Green,
        Bucket::Cyan,
        Bucket::Blue,
        Bucket::Magenta,
    ];

    /// Stable position of this bucket, usable as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The colour that identifies this bucket in results.
    pub const fn representative(self) -> Rgb8 {
        match self {
            Bucket::Black => Rgb8::new(0, 0, 0),
            Bucket::White => Rgb8::new(255, 255, 255),
            Bucket::Gray => Rgb8::new(128, 128, 128),
            Bucket::Red => Rgb8::new(255, 0, 0),
            Bucket::Yellow => Rgb8::new(255, 255, 0),
            Bucket::Green => Rgb8::new(0, 255, 0),
            Bucket::Cyan => Rgb8::new(0, 255, 255),
            Bucket::Blue => Rgb8::new(0, 0, 255),
            Bucket::Magenta => Rgb8::new(255, 0, 255),
        }
    }

    /// Hue range for chromatic buckets; `None` for black, white and gray.
    ///
    /// Each range spans 60 degrees centred on the bucket's canonical hue,
    /// so the six ranges tile the circle without overlap.
    pub fn hue_range(self) -> Option<HueRange> {
        match self {
            Bucket::Red => Some(HueRange::new(11.0 * TWELFTH, TWELFTH)),
            Bucket::Yellow => Some(HueRange::new(TWELFTH, 3.0 * TWELFTH)),
            Bucket::Green => Some(HueRange::new(3.0 * TWELFTH, 5.0 * TWELFTH)),
            Bucket::Cyan => Some(HueRange::new(5.0 * TWELFTH, 7.0 * TWELFTH)),
            Bucket::Blue => Some(HueRange::new(7.0 * TWELFTH, 9.0 * TWELFTH)),
            Bucket::Magenta => Some(HueRange::new(9.0 * TWELFTH, 11.0 * TWELFTH)),
            Bucket::Black | Bucket::White | Bucket::Gray => None,
        }
    }

    /// Whether `hue` lies in this bucket's range. Always false for
    /// achromatic buckets.
    #[inline]
    pub fn matches_hue(self, hue: f32) -> bool {
        self.hue_range().is_some_and(|range| range.contains(hue))
    }

    /// Upper-case display name.
    pub const fn name(self) -> &'static str {
        match self {
            Bucket::Black => "BLACK",
            Bucket::White => "WHITE",
            Bucket::Gray => "GRAY",
            Bucket::Red => "RED",
            Bucket::Yellow => "YELLOW",
            Bucket::Green => "GREEN",
            Bucket::Cyan => "CYAN",
            Bucket::Blue => "BLUE",
            Bucket::Magenta => "MAGENTA",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
