use super::config::OutputFormat;
use colour_volumes::{ColourVolume, HsbColour};
use serde::Serialize;
use std::fmt;

/// An HSB colour as reported to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColourReport {
    /// Reconstructed RGB as #RRGGBB
    pub hex: String,
    pub hue: f32,
    pub hue_degrees: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl From<HsbColour> for ColourReport {
    fn from(hsb: HsbColour) -> Self {
        Self {
            hex: hsb.to_rgb().to_string(),
            hue: hsb.hue,
            hue_degrees: hsb.hue_degrees(),
            saturation: hsb.saturation,
            brightness: hsb.brightness,
        }
    }
}

impl fmt::Display for ColourReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  hue {:.1}°  saturation {:.3}  brightness {:.3}",
            self.hex, self.hue_degrees, self.saturation, self.brightness
        )
    }
}

/// One bucket's share of the samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeReport {
    pub bucket: String,
    /// Representative bucket colour as #RRGGBB
    pub colour: String,
    pub count: u64,
    pub fraction: f64,
}

impl From<&ColourVolume> for VolumeReport {
    fn from(volume: &ColourVolume) -> Self {
        Self {
            bucket: volume.bucket().name().to_string(),
            colour: volume.colour().to_string(),
            count: volume.count(),
            fraction: volume.fraction(),
        }
    }
}

impl fmt::Display for VolumeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<7}  {:>6.2}%",
            self.colour,
            self.bucket,
            self.fraction * 100.0
        )
    }
}

/// Everything computed for one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub resolution: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<ColourReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<VolumeReport>>,
}

impl AnalysisReport {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render for stdout in the requested format, newline-terminated
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(format!("{}\n", self.to_json()?)),
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}x{}, resolution {})",
            self.image, self.width, self.height, self.resolution
        )?;
        if let Some(average) = &self.average {
            writeln!(f, "average  {average}")?;
        }
        if let Some(volumes) = &self.volumes {
            for volume in volumes {
                writeln!(f, "{volume}")?;
            }
        }
        Ok(())
    }
}
