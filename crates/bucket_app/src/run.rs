use std::sync::Arc;

use anyhow::{Context, Result};
use bucket_core::{default_modifiers, generate_candidates, TargetTemplate};
use bucket_engine::{
    default_limits, ConcurrencyGovernor, Console, FileSink, ReqwestProber, ScanSummary, Scanner,
};
use engine_logging::{engine_debug, engine_info};
use tokio_util::sync::CancellationToken;

use crate::cli::Cli;
use crate::summary::print_summary;
use crate::wordlist::read_lines;

/// Runs one enumeration. Every error returned here is fatal for the process.
///
/// Inputs are read and the descriptor ceiling queried before the output file
/// is created, so a failed startup leaves nothing behind.
pub fn run(cli: &Cli) -> Result<ScanSummary> {
    let template = TargetTemplate::new(cli.template.as_str()).context("invalid --template")?;

    let modifiers = match &cli.modifiers {
        Some(path) => read_lines(path)
            .with_context(|| format!("failed to read modifiers file {}", path.display()))?,
        None => default_modifiers(),
    };
    let words = read_lines(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;

    let config = Arc::new(cli.scan_config());
    let limits = default_limits();
    let budget = ConcurrencyGovernor::new(limits.clone(), config.fd_reserve)
        .resolve(config.requested_concurrency)
        .context("failed to resolve concurrency budget")?;

    let output = cli.output_path();
    let sink = FileSink::create(&output)?;
    let prober = Arc::new(ReqwestProber::new(config.probe.clone())?);

    let candidates = generate_candidates(&words, &modifiers, &template);
    engine_info!(
        "Loaded {} words and {} modifiers into {} candidates; writing to {}",
        words.len(),
        modifiers.len(),
        candidates.len(),
        output.display()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let console = Arc::new(Console::stdout());
    let scanner = Scanner::new(config, prober, limits, console.clone());
    let summary = runtime.block_on(async {
        let cancel = CancellationToken::new();
        let interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                engine_debug!("Ctrl-C received, cancelling dispatch");
                console.notice("Interrupted; finishing in-flight probes");
                interrupt.cancel();
            }
        });
        scanner.run(candidates, budget, sink, cancel).await
    })?;

    print_summary(&summary, &output);
    Ok(summary)
}
