//! # raw2sqlite
//!
//! Command-line front end: converts one acquisition snapshot (the object
//! graph of a raw file saved as JSON) into a normalized SQLite database.
//! Vendor `.raw` files are not read directly; anything that is not a valid
//! snapshot exits with `-1`.
//!
//! ## Usage
//!
//! ```bash
//! # Writes run01.sqlite next to the input
//! raw2sqlite run01.json
//!
//! # Explicit output, info-level logging, settings from a TOML file
//! raw2sqlite -v --config raw2sqlite.toml -o db/run01.sqlite run01.json
//! ```
//!
//! ## Exit codes
//!
//! Precondition failures (negative codes) print `ErrorCode {code} {message}`
//! on stdout; other failures print the error chain on stderr.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Database written |
//! | -1 | Unable to initialize RawFileReader |
//! | -2 | Error during accessing .raw file |
//! | -3 | Error opening .raw file |
//! | -4 | .raw file is still being acquired |
//! | 1 | Extraction or database write failed |

use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());

    let code = cli::dispatch(cli);
    std::process::exit(code);
}
