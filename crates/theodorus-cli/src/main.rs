//! Theodorus - square-root spiral SVG generator.

mod args;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use commands::frames::FramesOptions;
use config::Config;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { spiral, output } => {
            let params = config.spiral_parameters(&spiral);
            let output = output.as_deref().unwrap_or(Path::new(commands::render::DEFAULT_OUTPUT));
            commands::render::run(&params, output)
        }
        Commands::Frames {
            spiral,
            output,
            format,
            level,
            wrap,
            duration,
        } => {
            let params = config.spiral_parameters(&spiral);
            let options = FramesOptions {
                format,
                level,
                wrap,
                rotation: config.rotation(duration),
            };
            commands::frames::run(
                &params,
                &options,
                output.as_deref(),
                &mut std::io::stdout().lock(),
            )
        }
        Commands::Extract {
            text,
            input,
            out_dir,
        } => {
            let raw =
                commands::extract::read_input(text, input.as_deref(), std::io::stdin().lock())?;
            commands::extract::run(&raw, &out_dir).map(|_| ())
        }
    }
}
