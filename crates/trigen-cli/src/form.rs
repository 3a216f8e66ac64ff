//! Interactive form session.
//!
//! A prompt loop over the form fields (tester name, width range, height
//! range, strategy) with generate and save actions.

use crate::config::{Config, Settings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use trigen_domain::Strategy;

/// Run the interactive form.
pub fn run_form(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Trigen form - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    // Initialize readline editor with the configured history limit
    let mut editor = DefaultEditor::with_config(editor_config(&config.settings)?).map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = Session::default();

    loop {
        match editor.readline("trigen> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_form_command(line) {
                    Ok(FormCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(FormCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_form_command(cmd, &mut session, config, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Form command type.
#[derive(Debug, PartialEq, Eq)]
enum FormCommand {
    Exit,
    Help,
    Show,
    Tester(String),
    Width(i64, i64),
    Height(i64, i64),
    Strategy(Strategy),
    Generate,
    Save(Option<PathBuf>),
}

/// Parse a form command line.
fn parse_form_command(line: &str) -> Result<FormCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(FormCommand::Exit),
        "help" | "?" => Ok(FormCommand::Help),
        "show" => Ok(FormCommand::Show),
        "tester" => Ok(FormCommand::Tester(parts[1..].join(" "))),
        "width" => parse_range_command("width", &parts[1..]).map(|(min, max)| FormCommand::Width(min, max)),
        "height" => parse_range_command("height", &parts[1..]).map(|(min, max)| FormCommand::Height(min, max)),
        "strategy" => parse_strategy_command(&parts[1..]),
        "generate" | "gen" => Ok(FormCommand::Generate),
        "save" | "download" => Ok(FormCommand::Save(parts.get(1).copied().map(PathBuf::from))),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a form command against the session.
fn execute_form_command(
    cmd: FormCommand,
    session: &mut Session,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        FormCommand::Show => {
            println!("{}", session.describe());
        }
        FormCommand::Tester(name) => {
            session.tester = name;
        }
        FormCommand::Width(min, max) => {
            session.width = trigen_domain::Range::new(min, max);
        }
        FormCommand::Height(min, max) => {
            session.height = trigen_domain::Range::new(min, max);
        }
        FormCommand::Strategy(strategy) => {
            session.strategy = strategy;
        }
        FormCommand::Generate => {
            let (plan, report) = session.generate();
            println!("{}", formatter.format_plan(&session.tester, &plan, &report)?);
            println!("{}", formatter.summary(report.total));
        }
        FormCommand::Save(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.settings.log_file));
            // Nothing generated yet: silent no-op, not an error.
            if session.save_last(&path)? {
                println!("{}", formatter.saved(&path.display().to_string()));
            }
        }
        FormCommand::Exit | FormCommand::Help => unreachable!(),
    }

    Ok(())
}

fn parse_range_command(name: &str, args: &[&str]) -> Result<(i64, i64)> {
    if args.len() != 2 {
        return Err(CliError::InvalidInput(format!(
            "Usage: {} <min> <max>",
            name
        )));
    }

    let min = args[0]
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Not an integer: {}", args[0])))?;
    let max = args[1]
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Not an integer: {}", args[1])))?;

    Ok((min, max))
}

fn parse_strategy_command(args: &[&str]) -> Result<FormCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: strategy <bva|robustness|worst-case|worst-case-robustness>".to_string(),
        ));
    }

    let name = args.join(" ");
    let strategy = Strategy::parse(&name)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown strategy: {}", name)))?;
    Ok(FormCommand::Strategy(strategy))
}

fn editor_config(settings: &Settings) -> Result<rustyline::Config> {
    rustyline::Config::builder()
        .max_history_size(settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))
        .map(|builder| builder.build())
}

fn get_history_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let trigen_dir = home.join(".trigen");
    std::fs::create_dir_all(&trigen_dir)?;
    Ok(trigen_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  tester [name]              - Set the tester name (blank clears it)");
    println!("  width <min> <max>          - Set the width range");
    println!("  height <min> <max>         - Set the height range");
    println!("  strategy <name>            - Select a strategy:");
    println!("    bva | robustness | worst-case | worst-case-robustness");
    println!("  show                       - Show current form values");
    println!("  generate, gen              - Generate the execute log");
    println!("  save [path], download      - Export the last log (default: ExecuteLog.txt)");
    println!("  help, ?                    - Show this help");
    println!("  exit, quit, q              - Exit the form");
    println!();
}
