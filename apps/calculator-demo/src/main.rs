//! Console demo for the calculator service.
//!
//! # Usage
//!
//! ```bash
//! # Greeting, sum of the configured numbers, welcome line
//! calculator-demo
//!
//! # One operation
//! calculator-demo calc divide 10 4
//!
//! # Layered config (YAML, then CALCULATOR__* env vars)
//! calculator-demo --config calculator.yaml greet
//! ```

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use calculator::{Calculator, Operation, greet};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Calculator demo
#[derive(Parser)]
#[command(name = "calculator-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the banner, the sum of the configured numbers and the greeting (default)
    Demo,
    /// Apply one operation to two operands
    Calc {
        /// add, subtract, multiply, divide (or + - * /)
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print the greeting
    Greet {
        /// Name to greet (defaults to the configured greeting name)
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging.level)?;
    tracing::info!(level = %config.logging.level, "calculator-demo starting");

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let calc = Calculator::new();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(calc, &config),
        Commands::Calc { op, a, b } => run_calc(calc, op, a, b)?,
        Commands::Greet { name } => {
            let name = name.as_deref().unwrap_or(&config.demo.greeting_name);
            println!("{}", greet(name));
        }
    }

    Ok(())
}

fn run_demo(calc: Calculator, config: &AppConfig) {
    println!("Hello from Rust!");

    let numbers = &config.demo.numbers;
    let total = calc.sum(numbers);
    let listed = numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("The sum of [{listed}] is: {total}");

    println!("{}", greet(&config.demo.greeting_name));
}

fn run_calc(calc: Calculator, op: Operation, a: f64, b: f64) -> Result<()> {
    tracing::debug!(%op, a, b, "applying operation");
    let result = op.apply(&calc, a, b)?;
    let symbol = op.symbol();
    println!("{a} {symbol} {b} = {result}");
    Ok(())
}
