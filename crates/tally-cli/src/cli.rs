use std::io::Write;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tally_calculator::Calculator;
use tally_types::Operation;
use tracing::debug;

use crate::config::LogFormat;
use crate::demo::run_demo;
use crate::output::{CalculationOutput, format_line};

/// Four-function calculator
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Four-function arithmetic calculator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format (overrides TALLY_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the fixed demonstration sequence (default)
    Demo,
    /// Perform a single operation
    #[command(allow_negative_numbers = true)]
    Calc(CalcArgs),
}

/// Arguments for the calc command
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// add, subtract, multiply, divide (or + - * /)
    pub operation: Operation,

    /// First operand
    pub x: f64,

    /// Second operand
    pub y: f64,

    /// Print the result as a JSON object
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Runs the selected command, writing results to `out`.
    pub fn execute(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match &self.command {
            None | Some(Commands::Demo) => demo(out),
            Some(Commands::Calc(args)) => calc(args, out),
        }
    }
}

fn demo(out: &mut impl Write) -> anyhow::Result<()> {
    let mut calculator = Calculator::new();
    let lines = run_demo(&mut calculator).context("demonstration failed")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    debug!(result = calculator.result(), "Demonstration finished");
    Ok(())
}

fn calc(args: &CalcArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut calculator = Calculator::new();
    let value = calculator
        .calculate(args.operation, args.x, args.y)
        .with_context(|| {
            format!("failed to compute {} {} {}", args.x, args.operation.symbol(), args.y)
        })?;

    if args.json {
        let payload =
            CalculationOutput { operation: args.operation, x: args.x, y: args.y, value };
        serde_json::to_writer(&mut *out, &payload)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", format_line(args.operation, value))?;
    }
    Ok(())
}
