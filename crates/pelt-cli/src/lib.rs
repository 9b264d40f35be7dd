//! CLI logic for the Pelt pipeline diagram renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use pelt::{DiagramBuilder, PeltError, view::DiagramView};

/// Run the Pelt CLI application
///
/// Renders the ELT + streaming pipeline diagram and writes the resulting SVG
/// to the output file.
///
/// # Errors
///
/// Returns `PeltError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PeltError> {
    info!(output_path = args.output; "Rendering pipeline diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let builder = DiagramBuilder::new(app_config);
    let svg = builder.render_svg(&DiagramView::default())?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
