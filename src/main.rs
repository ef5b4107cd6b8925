//! ssnit — SSNIT pension calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use ssnit::config;
use ssnit::constants;
use ssnit::env;
use ssnit::logging;
use ssnit::models;
use ssnit::months;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, MonthsArgs, PensionArgs};
use config::Config;
use env::Env;
use models::YearMonth;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, &env);

    match cli.command {
        None => run_pension(PensionArgs::default(), &env),
        Some(Command::Pension(args)) => run_pension(args, &env),
        Some(Command::Months(args)) => run_months(args),
        Some(Command::Config) => run_config(&env),
        Some(Command::Version) => run_version(),
    }
}

/// Load layered configuration rooted at the working directory.
fn load_config(env: &Env) -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    Config::load(cwd.as_deref(), env).context("failed to load configuration")
}

/// Calculate and print the pension.
fn run_pension(args: PensionArgs, env: &Env) -> Result<()> {
    let config = load_config(env)?;
    let format = args.format.unwrap_or(config.output.format);

    let inputs = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut stdout = io::stdout();
        cli::resolve_inputs(&args, YearMonth::current(), &mut reader, &mut stdout)
            .context("failed to read pension inputs")?
    };

    tracing::info!(
        average_salary = inputs.average_salary,
        months_contributed = inputs.months_contributed,
        %format,
        "calculating pension"
    );

    let outcome = config
        .scheme
        .calculate(inputs.average_salary, inputs.months_contributed);

    let mut stdout = io::stdout().lock();
    stdout.write_all(format.render(&outcome).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print the number of months in a contribution period.
fn run_months(args: MonthsArgs) -> Result<()> {
    let to = args.to.unwrap_or_else(YearMonth::current);
    let count = months::months_between(args.from, to);
    tracing::debug!(from = %args.from, %to, count, "counted months");
    println!("{}", cli::format_months(count));
    Ok(())
}

/// Print the effective configuration.
fn run_config(env: &Env) -> Result<()> {
    let config = load_config(env)?;
    let rendered = config.to_toml().context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    if let Some(path) = Config::global_config_path() {
        println!("{}     {}", "config:".dimmed(), path.display());
    }
    Ok(())
}
