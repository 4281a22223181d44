pub mod analyzer;
pub mod image_loader;

pub use analyzer::{AnalysisMode, Analyzer};
pub use image_loader::{decode_png, load_png};
