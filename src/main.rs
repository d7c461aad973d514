use anyhow::Context;
use clap::Parser as _;
use log::LevelFilter;
use mower::{OutputFormat, ParserConfig, render, simulate};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

/// Simulate lawn mowers from an instruction file and print where each one ends up.
#[derive(Debug, clap::Parser)]
#[command(name = "mower", version)]
struct CliArg {
    /// Instruction file, or `-` for standard input
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reject missing moves lines and starting positions outside the lawn
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FormatArg {
    /// One `x y C` line per mower
    Text,
    /// A JSON array of mower states
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl CliArg {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        if self.path.as_os_str() == "-" {
            return Ok(Box::new(io::stdin().lock()));
        }
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn main() {
    let cli_arg = CliArg::parse();
    env_logger::Builder::new()
        .filter_level(cli_arg.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli_arg) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli_arg: &CliArg) -> anyhow::Result<()> {
    let reader = cli_arg.open()?;
    let config = ParserConfig {
        strict: cli_arg.strict,
    };
    let finals = simulate(reader, config)
        .with_context(|| format!("invalid instructions in {}", cli_arg.path.display()))?;
    let format = OutputFormat::from(cli_arg.format);
    let output = render(&finals, format)?;
    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
