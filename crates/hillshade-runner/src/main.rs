//! `hillshade` command-line entry point.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use hillshade_runner::cli::{init_tracing, Args};
use hillshade_runner::{RenderError, TileRenderer};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    // Reject bad indices before any raster work, with clap's usage message
    let tile = match args.tile() {
        Ok(tile) => tile,
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    init_tracing(&args.log_level);

    let result = args
        .load_config()
        .and_then(TileRenderer::new)
        .and_then(|renderer| renderer.render(&args.request(tile)));

    match result {
        Ok(report) => {
            info!(
                output = %report.output.display(),
                empty = report.empty,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Render failed");
            if let RenderError::Usage(message) = &e {
                eprintln!("{}\n\n{}", message, Args::command().render_usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}
