use clap::Parser;
use std::path::PathBuf;

use raw2sqlite::converter::ConversionError;

mod config;
mod convert;

/// raw2sqlite - Flatten a raw acquisition file into a SQLite database
#[derive(Parser)]
#[command(name = "raw2sqlite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input acquisition snapshot (JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output database path (defaults to INPUT with a .sqlite extension)
    #[arg(short, long = "out", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Run the conversion and return the process exit code.
pub fn dispatch(cli: Cli) -> i32 {
    let Cli {
        input,
        output,
        config,
        ..
    } = cli;

    match convert::run(input, output, config) {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ConversionError>() {
            Some(ConversionError::Precondition(readiness)) => {
                print_error_code(readiness.exit_code(), &readiness.to_string());
                readiness.exit_code()
            }
            Some(other) => {
                eprintln!("Error: {:#}", e);
                other.exit_code()
            }
            None => {
                eprintln!("Error: {:#}", e);
                1
            }
        },
    }
}

/// Precondition failures go to stdout as `ErrorCode {code} {message}`.
fn print_error_code(code: i32, message: &str) {
    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        println!("{}", style(format_error_code(code, message)).red().bold());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", format_error_code(code, message));
    }
}

fn format_error_code(code: i32, message: &str) -> String {
    format!("ErrorCode {} {}", code, message)
}
