use tipwrap::config::{load_config, CliArgs, Command, Config};
use tipwrap::{logging, text, wrap};

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;
    logging::init_logging(config.log_level);

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(ExitCode::SUCCESS);
    }

    log::debug!("running {:?}", args.command);
    run(&args.command, &config)
}

fn run(command: &Command, config: &Config) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Wrap { input } => {
            let mut source = read_input(input.as_deref())?;
            if config.decode_entities {
                source = text::html_decode_bounded(&source, config.max_decode_passes)?;
            }
            let wrapped = wrap::word_wrap_with(&source, &config.wrap_options());
            stdout.write_all(wrapped.as_bytes())?;
        }
        Command::Decode { input } => {
            let source = read_input(input.as_deref())?;
            let decoded = text::html_decode_bounded(&source, config.max_decode_passes)?;
            stdout.write_all(decoded.as_bytes())?;
        }
        Command::Number { value, decimals } => {
            writeln!(stdout, "{}", text::format_number(*value, *decimals, &config.locale))?;
        }
        Command::Case { style, text: input } => {
            writeln!(stdout, "{}", style.apply(input))?;
        }
        Command::Email { text: candidate } => {
            let valid = text::looks_like_email(candidate);
            writeln!(stdout, "{valid}")?;
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
