//! Logging utilities for floodtiles.
//!
//! This module provides structured logging functionality so each run leaves
//! searchable records of which catalogs and tiles it touched.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .ok();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let run_id = generate_run_id();

    debug!(
        operation = operation,
        run_id = %run_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        run_id = %run_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log summary information about a loaded catalog directory
pub fn log_catalog_load_stats(catalog_dir: &str, catalog_count: usize, point_count: usize) {
    info!(
        operation = "catalog_load",
        catalog_dir = catalog_dir,
        catalog_count = catalog_count,
        point_count = point_count,
        "Catalogs loaded successfully"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::FloodTilesError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Generate a unique id for one run of an operation
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}
