use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colours::models::{config_path, AppConfig, OutputFormat, Overrides, CONFIG_ENV_VAR};
use colours::services::{AnalysisMode, Analyzer};

#[derive(Parser)]
#[command(name = "colours")]
#[command(about = "Colours - average colour and colour volumes of PNG images")]
struct Cli {
    /// Configuration file (defaults to $COLOURS_CONFIG, then ./colours.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the average colour of an image
    Average(ImageArgs),
    /// Print the colour volumes of an image, largest first
    Volumes(ImageArgs),
    /// Print both the average colour and the colour volumes
    Analyze(ImageArgs),
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Args)]
struct ImageArgs {
    /// PNG image to analyze
    image: PathBuf,

    /// Sampling resolution (0.0..=1.0); overrides the config file
    #[arg(short, long)]
    resolution: Option<f32>,

    /// Output format; overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colours=warn,colour_volumes=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = config_path(cli.config, std::env::var(CONFIG_ENV_VAR).ok());
    let config = AppConfig::discover(config_path.as_deref(), Path::new("."))
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Average(args) => run_image_command(&config, args, AnalysisMode::Average),
        Commands::Volumes(args) => run_image_command(&config, args, AnalysisMode::Volumes),
        Commands::Analyze(args) => run_image_command(&config, args, AnalysisMode::Both),
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

/// Analyze one image and print the report
fn run_image_command(
    config: &AppConfig,
    args: ImageArgs,
    mode: AnalysisMode,
) -> anyhow::Result<()> {
    let config = config
        .clone()
        .with_overrides(Overrides {
            resolution: args.resolution,
            format: args.format,
        })
        .context("Invalid command line option")?;
    let analyzer = Analyzer::new(&config)?;

    let report = analyzer
        .analyze_file(&args.image, mode)
        .with_context(|| format!("Failed to analyze {}", args.image.display()))?;

    print!("{}", report.render(config.format)?);
    Ok(())
}
