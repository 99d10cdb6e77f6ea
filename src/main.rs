//! Prompt module generator entry point.
//!
//! Loads configuration, initializes logging, regenerates the `PROMPTS`
//! module, and reports skipped templates on stdout.

use anyhow::Result;
use std::error::Error as _;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use prompt_codegen::{Config, Generator};

fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    config.generator.validate()?;
    info!(
        "Generating prompts from {}",
        config.generator.templates_dir.display()
    );

    let report = Generator::new(config.generator).generate()?;

    for skipped in &report.skipped {
        let reason = skipped
            .error
            .source()
            .map_or_else(|| skipped.error.to_string(), |source| source.to_string());
        println!("Error reading {}: {}", skipped.path.display(), reason);
    }
    println!("Successfully updated {}", report.target_file.display());

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so stdout carries only the run summary.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
