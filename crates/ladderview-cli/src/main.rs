//! Ladderview CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use ladderview::LadderError;
use ladderview_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?, strict = args.strict; "Starting Ladderview");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = ladderview_cli::run(&args) {
        report(&err, &args);
        process::exit(1);
    }

    info!(output_file = args.output; "Completed successfully");
}

/// Logs every diagnostic of `err` as a rendered miette report.
fn report(err: &LadderError, args: &Args) {
    let handler = GraphicalReportHandler::new();
    let reportables = to_reportables(err);

    if matches!(err, LadderError::Parse { .. }) {
        error!(
            input_path = args.input,
            diagnostics_count = reportables.len();
            "Strict mode: the input could not be read as a ladder program"
        );
    }

    for reportable in &reportables {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, reportable).is_err() {
            rendered = reportable.to_string();
        }

        error!("{rendered}");
    }
}
