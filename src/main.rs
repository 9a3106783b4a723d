use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use logo_cutout_rs::image_pipeline::{CutoutConfig, CutoutPipeline, StripPipeline};
use logo_cutout_rs::logger::{self, error, info};

/// Logo cleanup: checkerboard removal and strip cropping
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Make the checkerboard background transparent and crop to the logo
    Cutout {
        /// Source image
        #[arg(default_value = "public/khrunch-logo-v2.png", value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Destination PNG
        #[arg(default_value = "public/khrunch-logo-transparent.png", value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Keep the full canvas instead of cropping to visible content
        #[arg(long)]
        no_crop: bool,
    },

    /// Keep the middle third of a three-logo composite
    Strip {
        /// Source image
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Destination image, format taken from the extension
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,
    },
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Cutout { input, output, no_crop } => {
            let config = CutoutConfig::builder()
                .crop_to_content(!no_crop)
                .build();
            let pipeline = CutoutPipeline::new(config);

            info!("Processing {}...", input.display());
            let report = pipeline
                .convert_file(&input, &output)
                .with_context(|| format!("cutout of {} failed", input.display()))?;
            info!(
                "Wrote {}x{} image, {} background pixels cleared",
                report.width, report.height, report.cleared_pixels
            );
        }
        Commands::Strip { input, output } => {
            let bounds = StripPipeline::new()
                .convert_file(&input, &output)
                .with_context(|| format!("strip of {} failed", input.display()))?;
            info!("Kept columns {}..{}", bounds.left, bounds.right);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
