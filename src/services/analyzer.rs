use crate::error::AnalyzeError;
use crate::models::{AnalysisReport, AppConfig, ColourReport, VolumeReport};
use crate::services::image_loader::load_png;
use colour_volumes::{average_colour, colour_summary, colour_volumes, ColourError, RgbSource};
use std::path::Path;

/// Which summaries to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Average,
    Volumes,
    Both,
}

/// Runs colour analysis on a dedicated rayon pool.
///
/// The pool is sized from [`AppConfig::threads`] and reused across calls,
/// so one analyzer can process many images.
pub struct Analyzer {
    resolution: f32,
    pool: rayon::ThreadPool,
}

impl Analyzer {
    /// Create an analyzer from configuration
    pub fn new(config: &AppConfig) -> Result<Self, AnalyzeError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("colours-worker-{i}"))
            .build()?;

        tracing::debug!(
            threads = pool.current_num_threads(),
            resolution = config.resolution,
            "Created analyzer"
        );

        Ok(Self {
            resolution: config.resolution,
            pool,
        })
    }

    /// Override the sampling resolution (validated when analysis runs)
    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Number of worker threads in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Average colour of an in-memory image
    pub fn average<S: RgbSource>(&self, image: &S) -> Result<ColourReport, ColourError> {
        let hsb = self.pool.install(|| average_colour(image, self.resolution))?;
        Ok(ColourReport::from(hsb))
    }

    /// Colour volumes of an in-memory image, largest first
    pub fn volumes<S: RgbSource>(&self, image: &S) -> Result<Vec<VolumeReport>, ColourError> {
        let volumes = self.pool.install(|| colour_volumes(image, self.resolution))?;
        Ok(volumes.iter().map(VolumeReport::from).collect())
    }

    /// Build a report for an in-memory image.
    ///
    /// [`AnalysisMode::Both`] samples the image once for both summaries.
    pub fn report<S: RgbSource>(
        &self,
        name: &str,
        image: &S,
        mode: AnalysisMode,
    ) -> Result<AnalysisReport, ColourError> {
        let (average, volumes) = match mode {
            AnalysisMode::Average => (Some(self.average(image)?), None),
            AnalysisMode::Volumes => (None, Some(self.volumes(image)?)),
            AnalysisMode::Both => {
                let summary = self
                    .pool
                    .install(|| colour_summary(image, self.resolution))?;
                let volumes: Vec<VolumeReport> =
                    summary.volumes.iter().map(VolumeReport::from).collect();
                (Some(ColourReport::from(summary.average)), Some(volumes))
            }
        };

        Ok(AnalysisReport {
            image: name.to_string(),
            width: image.width(),
            height: image.height(),
            resolution: self.resolution,
            average,
            volumes,
        })
    }

    /// Load a PNG file and build its report
    pub fn analyze_file(
        &self,
        path: &Path,
        mode: AnalysisMode,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let image = load_png(path)?;
        let report = self.report(&path.display().to_string(), &image, mode)?;

        tracing::info!(
            path = %path.display(),
            width = report.width,
            height = report.height,
            buckets = report.volumes.as_ref().map(Vec::len),
            "Analyzed image"
        );

        Ok(report)
    }
}
