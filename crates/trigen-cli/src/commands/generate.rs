//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::Report;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use trigen_domain::{Range, TestPlan};

/// Execute the generate command.
pub fn execute_generate(args: GenerateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let strategy = args.strategy.into();
    let width = Range::new(args.width_min, args.width_max);
    let height = Range::new(args.height_min, args.height_max);

    let started = Local::now();
    let plan = TestPlan::generate(width, height, strategy);
    let finished = Local::now();
    let report = Report::render(&args.tester, &plan, started, finished);

    debug!(strategy = %plan.strategy, total = report.total, "generated test plan");

    println!("{}", formatter.format_plan(&args.tester, &plan, &report)?);
    println!("{}", formatter.summary(report.total));

    if let Some(path) = resolve_out(args.out, args.save, config) {
        fs::write(&path, &report.text)?;
        println!("{}", formatter.saved(&path.display().to_string()));
    }

    Ok(())
}

/// Where to write the log, if anywhere: an explicit --out path wins, --save
/// falls back to the configured default file name.
fn resolve_out(out: Option<PathBuf>, save: bool, config: &Config) -> Option<PathBuf> {
    out.or_else(|| save.then(|| PathBuf::from(&config.settings.log_file)))
}
