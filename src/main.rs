//! Tax Calculator - Entry Point

use clap::Parser;
use std::path::PathBuf;
use taxcalc::config::MAX_FPS;
use tracing::info;

/// Tax Calculator - add, subtract and apply 10% tax in the terminal
#[derive(Parser, Debug)]
#[command(name = "taxcalc")]
#[command(version)]
#[command(about = "Terminal calculator with a one-key 10% tax")]
pub struct Args {
    /// Start in fullscreen layout (toggle with F11)
    #[arg(long)]
    pub fullscreen: bool,

    /// Redraw rate in frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FPS)))]
    pub fps: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = taxcalc::config::load_config_with_precedence(args.config.clone())?;
        let merged = taxcalc::config::merge_config(config_file);
        let with_env = taxcalc::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let fullscreen_override = args.fullscreen.then_some(true);
        let no_color_override = args.no_color.then_some(true);

        taxcalc::config::apply_cli_overrides(
            with_env,
            args.fps,
            fullscreen_override,
            no_color_override,
        )
        .validate()?
    };

    taxcalc::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    taxcalc::view::run(&config)?;

    info!("Calculator closed");
    Ok(())
}
