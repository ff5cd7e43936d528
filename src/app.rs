use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log_analyzer_domain::config::AnalysisConfig;
use log_analyzer_infra::{FileLineSource, FileReportSink, output::write_summary};
use log_analyzer_usecase::{AnalysisOutcome, AnalyzeLog, PersistReport};

use crate::{cli::Args, config::build_config};

/// Entry point used by the binary: build the config and write to stdout.
pub fn run(args: &Args) -> Result<()> {
    let config = build_config(args).context("invalid arguments")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_config(&args.logfile, &config, &mut out).map(|_| ())
}

/// Analyse `logfile`, print the console summary to `out`, then persist the report.
///
/// The summary is fully written before the report file is touched, so a
/// failing destination still leaves the summary on screen.
pub fn run_with_config(logfile: &Path, config: &AnalysisConfig, out: &mut impl Write) -> Result<AnalysisOutcome> {
    let source = FileLineSource::new(logfile);
    let outcome = AnalyzeLog::new(&source)
        .run(config)
        .with_context(|| format!("failed to analyse {}", logfile.display()))?;

    let report = outcome.report();
    write_summary(&report, config, out).context("failed to print summary")?;
    out.flush()?;

    if config.report.enabled {
        let sink = FileReportSink::new(&config.report.path, config.report.format);
        PersistReport::new(&sink).run(&outcome).context("failed to save report")?;
        writeln!(out, "\nResults saved to {}", config.report.path.display())?;
    } else {
        log::info!("report persistence disabled");
    }
    Ok(outcome)
}
