//! bulkgen CLI entry point

use anyhow::{Context, Result};
use bulkgen::backend::local::LocalBackend;
use bulkgen::config::{cli::Cli, cli_convert, toml, validator, Config};
use bulkgen::generator::Generator;
use bulkgen::output::{json, text};
use bulkgen::util::units::format_bytes;
use bulkgen::util::verification::{verify_summary, VerificationIssue};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    // Build configuration from CLI (and config file, if given)
    let config = cli_convert::build_config_from_cli(&cli)?;

    bulkgen::logging::init_logging(config.runtime.log_level.as_deref())?;

    // Validate configuration
    validator::validate_config(&config).context("Configuration validation failed")?;
    info!("{}", config);

    if config.runtime.dry_run {
        text::print_plan(&config.generation);
        println!();
        println!("{}", toml::to_toml_string(&config)?);
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run_generation(&config)
}

/// Run the generator with the local backend and report results
fn run_generation(config: &Config) -> Result<()> {
    let reporter = text::TextReporter::stdout(config.output.quiet);
    let mut generator = Generator::new(config.generation.clone(), LocalBackend::new(), reporter)?;
    if let Some(seed) = config.runtime.seed {
        generator = generator.with_seed(seed);
    }

    let summary = generator.run().context("Generation run failed")?;

    if let Some(ref path) = config.output.json_output {
        let document = json::build_json_summary(
            &summary,
            &config.generation,
            config.runtime.seed,
            chrono::Utc::now(),
        );
        json::write_json_output(path, &document)?;
        info!(path = %path.display(), "JSON summary written");
    }

    if config.output.verify {
        let report = verify_summary(&summary);
        for issue in &report.issues {
            match issue {
                VerificationIssue::Missing { path, kind } => {
                    warn!(path = %path.display(), ?kind, "generated file missing");
                }
                VerificationIssue::SizeMismatch { path, expected, actual } => {
                    warn!(path = %path.display(), expected, actual, "generated file has wrong size");
                }
            }
        }

        if !report.is_success() {
            anyhow::bail!(
                "Verification failed: {} of {} files do not match their declared size",
                report.issues.len(),
                report.checked
            );
        }
        println!(
            "Verified: {} files, {} on disk",
            report.checked,
            format_bytes(report.on_disk_bytes)
        );
    }

    Ok(())
}
