//! Trigen CLI - boundary-value and worst-case test-table generation for a
//! width/height input domain.

use clap::Parser;
use trigen_cli::commands;
use trigen_cli::form;
use trigen_cli::{Cli, Command, Config, Formatter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config; an explicit --config path must exist
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Form) => {
            form::run_form(&config, &formatter)?;
        }
        Some(Command::Generate(args)) => {
            commands::execute_generate(args, &config, &formatter)?;
        }
    }

    Ok(())
}
