use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use responsive_gauge::{Gauge, GaugeOptions};
use responsive_gauge_render::SvgRenderer;
use serde::Serialize;
use serde_json::Value;

/// Output written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// SVG document
    Svg,
    /// Layout and pointer frame as JSON
    Json,
}

/// responsive-gauge - Lay out a dial gauge and draw it as SVG
#[derive(Parser, Debug)]
#[command(name = "responsive-gauge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with a partial gauge configuration
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Value to point at (defaults to data.value)
    #[arg(long = "value", value_name = "V", allow_negative_numbers = true)]
    value: Option<f64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "svg")]
    format: OutputFormat,

    /// Reject angle and data ranges outside the supported geometry
    #[arg(long = "check")]
    check: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    layout: &'a responsive_gauge::GaugeLayout,
    pointer: Option<&'a responsive_gauge::PointerFrame>,
    unknown_properties: &'a [responsive_gauge::config::UnknownProperty],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    exit_code(run(&cli))
}

/// Failures go through the logger only
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let overrides = match &cli.config_file {
        Some(path) => {
            info!("Loading gauge configuration from {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => Value::Null,
    };

    let mut gauge = Gauge::new(SvgRenderer::new(), GaugeOptions::from_json(overrides))?;

    if cli.check {
        gauge.resolved().check_preconditions()?;
    }
    if let Some(value) = cli.value {
        gauge.update(value, None)?;
    }

    match cli.format {
        OutputFormat::Svg => {
            let svg = gauge.container().document()?;
            println!("{}", svg);
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                layout: gauge.layout(),
                pointer: gauge.last_frame(),
                unknown_properties: &gauge.resolved().unknown_properties,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static ERRORS: AtomicUsize = AtomicUsize::new(0);

    struct CountingLogger;

    impl log::Log for CountingLogger {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Error
        }

        fn log(&self, record: &log::Record<'_>) {
            if record.level() == log::Level::Error {
                ERRORS.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CountingLogger = CountingLogger;

    #[test]
    fn test_failure_is_reported_once() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Error);

        let code = exit_code(Ok(()));
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(ERRORS.load(Ordering::SeqCst), 0);

        let code = exit_code(Err(anyhow::anyhow!("Failed to read gauge.json")));
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(ERRORS.load(Ordering::SeqCst), 1);
    }
}
