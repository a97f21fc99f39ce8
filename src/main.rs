use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, BufReader};
use word_count_bolt::core::executor::RunSummary;
use word_count_bolt::core::ConfigProvider;
use word_count_bolt::utils::{logger, validation::Validate};
use word_count_bolt::{BoltExecutor, CliConfig, CountBolt, LineSource, TomlConfig, WriterCollector};

const DEFAULT_COMPONENT_NAME: &str = "count";

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    name: &str,
    top: Option<usize>,
) -> word_count_bolt::Result<RunSummary> {
    config.validate()?;

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match config.input_path() {
        Some(path) => {
            tracing::info!("📁 Reading words from: {}", path);
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        }
        None => {
            tracing::info!("📁 Reading words from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    let writer: Box<dyn Write> = match config.output_path() {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(std::io::BufWriter::new(std::io::stdout().lock())),
    };

    let mut source = LineSource::new(reader, config.delimiter(), config.lowercase())?;
    let mut collector = WriterCollector::new(writer, config.output_format());

    let mut bolt = CountBolt::new(name);
    if let Some(top) = top {
        bolt = bolt.with_final_report(top);
    }

    let mut executor = BoltExecutor::new(bolt).with_conf(config.topology_conf());
    let summary = executor.run(&mut source, &mut collector).await?;
    tracing::debug!("Read {} lines", source.lines_read());

    Ok(summary)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    let verbose = cli.verbose || toml.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.log_json || toml.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting word-count-bolt");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &toml {
        Some(config) => run(config, config.runner_name(), config.top().or(cli.top)).await,
        None => run(&cli, DEFAULT_COMPONENT_NAME, cli.top).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Counted {} words ({} records emitted) in {:?}",
                summary.processed,
                summary.emitted,
                summary.elapsed
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Word count failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
