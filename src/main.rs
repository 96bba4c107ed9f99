use clap::Parser;
use counted_flow::app::{input, output, output::OutputFormat};
use counted_flow::core::ReportSink;
use counted_flow::utils::error::{ErrorSeverity, Result};
use counted_flow::utils::{logger, validation::Validate};
use counted_flow::{CliConfig, FileSink, FlowConfig, FlowRunner, FunctionRegistry, StdoutSink};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting counted-flow CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Flow failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let flow_config = FlowConfig::from_file(&config.config)?;
    flow_config.validate()?;

    let values = match &config.input {
        Some(path) => input::load_values(path)?,
        None => input::inline_values(&config.values),
    };

    let format: OutputFormat = config
        .format
        .as_deref()
        .or(flow_config.output_format())
        .map(str::parse::<OutputFormat>)
        .transpose()?
        .unwrap_or_default();
    let output_path = config
        .output
        .clone()
        .or_else(|| flow_config.output_path().map(str::to_string));

    let runner = FlowRunner::new(flow_config, FunctionRegistry::with_builtins());
    let report = runner.run(values)?;
    let rendered = output::render(&report, format)?;

    match output_path {
        Some(path) => {
            let sink = FileSink::new(&path);
            sink.write_report(&rendered)?;
            tracing::info!("📁 Report ({}) saved to: {}", format, path);
        }
        None => StdoutSink.write_report(&rendered)?,
    }

    tracing::info!("✅ {} values, {} branch", report.count, report.branch);
    Ok(())
}
