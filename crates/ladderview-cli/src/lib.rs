//! CLI logic for the Ladderview diagram tool.
//!
//! This module contains the core CLI logic: load configuration, read the
//! PLCopen document, run it through the [`DiagramBuilder`] pipeline and
//! write the rendered output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use ladderview::{DiagramBuilder, LadderError, OutputFormat};

/// Run the Ladderview CLI application
///
/// This function processes the input file through the Ladderview pipeline
/// and writes the rendered diagram to the output file.
///
/// Without `--strict`, unreadable documents render as an empty diagram.
/// With it, they fail with the reader's diagnostics.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LadderError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors (strict mode only)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), LadderError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:% = args.format,
        strict = args.strict;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let output = if args.strict {
        let elements = builder.try_parse(&source)?;
        let diagram = builder.layout(&builder.reconstruct(&elements));
        match args.format {
            OutputFormat::Svg => builder.render_svg(&diagram)?,
            OutputFormat::Json => builder.render_json(&diagram)?,
        }
    } else {
        builder.render(&source, args.format)?
    };

    // Write output file
    fs::write(&args.output, output)?;

    info!(output_file = args.output, format:% = args.format; "Diagram exported successfully");

    Ok(())
}
