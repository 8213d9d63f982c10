use std::{fs, process::ExitCode};

use calc::calculate;
use clap::Parser;
use tracing::{Level, debug, error};

/// calc evaluates one arithmetic expression made of numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print a trace of scanning and parsing to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Tells calc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, e.g. "(2 + 3) * 4".
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();
    debug!("debug mode");

    let expression = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.trim_end().to_string(),
            Err(e) => {
                error!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match calculate(&expression) {
        Ok(calculation) => {
            println!("{calculation}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
