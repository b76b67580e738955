//! diskseek CLI entry point

use anyhow::{Context, Result};
use diskseek::config::{cli::Cli, validator, Config};
use diskseek::engine::SimulationRequest;
use diskseek::output::{chart, csv, json, text};
use diskseek::SimulationReport;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    cli.validate()?;

    let config = diskseek::config::toml::build_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;

    let (engine, request) = config
        .build_request()
        .context("Failed to prepare simulation input")?;
    log::info!(
        "simulating {} policies over {} requests (disk {}, head {}, {})",
        request.policies.len(),
        request.queue.len(),
        engine.disk_size(),
        request.head,
        request.direction
    );

    if cli.direction.is_some() && !request.uses_direction() {
        log::warn!(
            "--direction {} has no effect: only SCAN and C-SCAN sweep",
            request.direction
        );
    }

    let start = Instant::now();
    let report = engine.simulate_all(&request)?;
    log::debug!("simulation finished in {:?}", start.elapsed());

    write_outputs(&config, &report, &request, engine.disk_size())
}

/// Default to `info` (or `debug` with --debug); RUST_LOG overrides both
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn write_outputs(
    config: &Config,
    report: &SimulationReport,
    request: &SimulationRequest,
    disk_size: u32,
) -> Result<()> {
    let output = &config.output;

    if !output.quiet {
        text::print_results(report, request, disk_size);
    }

    if output.shows_chart() {
        println!();
        print!(
            "{}",
            chart::render_chart(output.chart, report, disk_size, output.chart_height)
        );
    }

    if let Some(ref path) = output.json_output {
        let doc = json::build_json_report(report, request, disk_size);
        json::write_json_output(path, &doc, true)?;
        log::info!("JSON report written to {}", path.display());
    }

    if let Some(ref path) = output.csv_output {
        csv::write_csv_output(path, report)?;
        log::info!("CSV steps written to {}", path.display());
    }

    Ok(())
}
