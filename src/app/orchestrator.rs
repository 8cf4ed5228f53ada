//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging.
//! 2. Loads the route network from `--routes` or `--file`.
//! 3. Initializes the route query engine with the configured search limits.
//! 4. Answers the selected queries (the standard report by default).
//! 5. Prints the answers and, with `--output`, writes them to a file.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::route::RouteQueryEngine;

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` on the first failure: unreadable or malformed routes,
/// an invalid query, or a failed report write. No partial report is written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without verbose file logging.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = answer_all(&cli, quiet_mode);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    finish_logging(quiet_mode);

    let report = result?;
    print!("{}", report);

    if !quiet_mode {
        println!("\nSee '{}' for verbose output.", cli.log_file.display());
    }
    Ok(())
}

/// Loads the graph, answers every selected query and renders the report.
fn answer_all(cli: &Cli, quiet_mode: bool) -> Result<String, AppError> {
    let graph = processing::load_graph(cli, quiet_mode)?;

    let mut engine = RouteQueryEngine::with_limits(cli.search_limits());
    engine.initialize(&graph);

    let queries = processing::queries_for(cli.command.as_ref())?;
    verbose_println!(quiet_mode, "\n[STEP 2] Answering {} query(ies)...", queries.len());

    let mut answers = Vec::with_capacity(queries.len());
    for (i, query) in queries.iter().enumerate() {
        verbose_println!(quiet_mode, "{}. {}.", i + 1, query);
        let answer = processing::answer_query(&engine, query, quiet_mode)?;
        verbose_println!(quiet_mode, "   => {}", answer);
        answers.push(answer);
    }

    let report = processing::render_answers(&answers);

    if let Some(output_path) = &cli.output {
        file_handler::write_content_to_file(output_path, &report).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to write answers to {}: {}",
                output_path.display(),
                e
            );
            AppError::Io(e)
        })?;
        verbose_println!(
            quiet_mode,
            "\n[INFO] Answers written to {}",
            output_path.display()
        );
    }

    Ok(report)
}

fn finish_logging(quiet_mode: bool) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the log: {}", e);
    }
}
