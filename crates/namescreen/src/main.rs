//! namescreen - screen a name against a blacklist file
//!
//! ## Usage
//!
//! ```bash
//! namescreen --blacklist blacklist.txt --noise noise.txt "Bin Laden, Osama"
//! ```
//!
//! Matching entries are printed to stdout, one per line, exactly as they
//! appear in the blacklist. Logs go to stderr.
//!
//! ## Exit status
//!
//! - `0`: the search ran, with or without matches
//! - `1`: invalid configuration, including unparsable arguments
//! - `2`: no search possible (blacklist unavailable)
//!
//! ## Configuration
//!
//! Environment variables:
//! - `NAMESCREEN_THRESHOLD`: Fuzzy match threshold 0-100 (default: 70)
//! - `RUST_LOG`: Logging filter (overrides `--log-level`)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use namescreen::Screener;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "namescreen")]
#[command(about = "Screen a name against a blacklist, tolerating typos, reordering and accents")]
#[command(version)]
struct Args {
    /// Name to screen
    name: String,

    /// Blacklist file, one name per line
    #[arg(short, long)]
    blacklist: PathBuf,

    /// Noise words file, one word per line
    #[arg(short, long)]
    noise: Option<PathBuf>,

    /// Fuzzy scores must exceed this percentage to match
    #[arg(
        short,
        long,
        env = "NAMESCREEN_THRESHOLD",
        default_value_t = 70,
        allow_negative_numbers = true
    )]
    threshold: i64,

    /// Print every entry's verdict as JSON instead of the matches
    #[arg(long)]
    explain: bool,

    /// Print the matches as a JSON array
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

const EXIT_CONFIG: u8 = 1;
const EXIT_NO_RESULT: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match usage_exit_code(&e) {
            Some(code) => {
                let _ = e.print();
                return ExitCode::from(code);
            }
            None => e.exit(),
        },
    };
    namescreen::tracing::init_with_filter(&args.log_level);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("namescreen: {}", e);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let screener = Screener::with_threshold(args.threshold)?;
    debug!(
        threshold = args.threshold,
        blacklist = %args.blacklist.display(),
        "screener configured"
    );

    let name = Some(args.name.as_str());
    let blacklist = Some(args.blacklist.as_path());
    let noise = args.noise.as_deref();

    if args.explain {
        let Some(verdicts) = screener.explain_files(name, blacklist, noise) else {
            return Ok(no_result(args));
        };
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(matches) = screener.search_files(name, blacklist, noise) else {
        return Ok(no_result(args));
    };

    if args.json {
        println!("{}", serde_json::to_string(&matches)?);
    } else {
        for entry in &matches {
            println!("{}", entry);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Exit status for a command-line error, `None` for help and version output.
///
/// Usage errors are configuration errors, keeping exit 2 for NO_RESULT.
fn usage_exit_code(e: &clap::Error) -> Option<u8> {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(EXIT_CONFIG),
    }
}

fn no_result(args: &Args) -> ExitCode {
    eprintln!(
        "namescreen: blacklist {} unavailable, no search performed",
        args.blacklist.display()
    );
    ExitCode::from(EXIT_NO_RESULT)
}
