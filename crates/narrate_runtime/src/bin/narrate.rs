//! Narrate CLI entry point.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use narrate_engine::{EngineConfig, NarrationEngine, StepDetail};
use narrate_runtime::{OutputFormat, Repl, RuntimeError, run_batch, write_result};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    words: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    format: OutputFormat,
    precision: Option<usize>,
    summary: bool,
    max_len: Option<usize>,
}

impl CliConfig {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default().with_max_transcript_len(self.max_len);
        if let Some(precision) = self.precision {
            config = config.with_precision(precision);
        }
        if self.summary {
            config = config.with_step_detail(StepDetail::Summary);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value_of(args: &[String], i: usize, flag: &str) -> Result<usize, RuntimeError> {
    let raw = args
        .get(i)
        .ok_or_else(|| RuntimeError::Usage(format!("{flag} requires a value")))?;
    raw.parse()
        .map_err(|_| RuntimeError::Usage(format!("invalid {flag} value: {raw}")))
}

fn parse_args(args: &[String]) -> Result<CliConfig, RuntimeError> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-s" | "--summary" => config.summary = true,
            "--format" => {
                i += 1;
                let raw = args
                    .get(i)
                    .ok_or_else(|| RuntimeError::Usage("--format requires a value".into()))?;
                config.format = raw.parse()?;
            }
            "--precision" => {
                i += 1;
                config.precision = Some(value_of(args, i, "--precision")?);
            }
            "--max-len" => {
                i += 1;
                config.max_len = Some(value_of(args, i, "--max-len")?);
            }
            "--" => {
                config.words.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(RuntimeError::Usage(format!("unknown option: {arg}")));
            }
            word => config.words.push(word.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, RuntimeError> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("narrate {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let engine = NarrationEngine::with_config(config.engine_config());
    let stdout = io::stdout();

    // One transcript from the command line.
    if !config.words.is_empty() {
        let result = engine.compute(&config.words.join(" "));
        let color = config.format == OutputFormat::Text && stdout.is_terminal();
        write_result(&mut stdout.lock(), &result, config.format, color)?;
        return Ok(if result.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if config.batch_mode || !io::stdin().is_terminal() {
        let summary = run_batch(&engine, io::stdin().lock(), &mut stdout.lock(), config.format)?;
        return Ok(if summary.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    Repl::new()?
        .with_config(config.engine_config())
        .with_format(config.format)
        .run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mnarrate\x1b[0m - Spoken arithmetic calculator

\x1b[1mUSAGE:\x1b[0m
    narrate [OPTIONS] [WORDS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS...]    A transcript to compute, e.g. five plus three

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Read one transcript per line from stdin
    -s, --summary          Show only the expression and the result
    --format FORMAT        Output format: text, json, or msgpack
    --precision N          Render at most N fractional digits (default 10)
    --max-len N            Reject transcripts longer than N characters

\x1b[1mEXAMPLES:\x1b[0m
    narrate                                   Start interactive REPL
    narrate twenty five times four plus ten percent
    narrate --format json what is two cubed
    narrate -b < transcripts.txt              Compute each line

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show commands
    :steps               Toggle summary/standard step traces
    :format text|json    Choose the output format
    :precision N         Render at most N fractional digits
    :quit                Exit (or Ctrl+D)

Set RUST_LOG=debug to log each calculation to stderr."
    );
}
