//! ECI to ECEF Conversion Tool
//!
//! Converts a position vector in kilometers from the Earth-Centered Inertial
//! frame to the Earth-Centered Earth-Fixed frame at a UTC time, printing the
//! three ECEF components one per line.
//!
//! Usage:
//!   cargo run --bin eci2ecef -- [OPTIONS] year month day hour minute second eci_x_km eci_y_km eci_z_km
//!
//! Options go before the first value; every argument from the first value on
//! is taken as a value, so `-.5` or `-inf` reach the number parser.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use eci2ecef::cli::{self, OutputFormat, USAGE};
use eci2ecef::{EciToEcefConverter, EcefError, GmstWrap};
use log::LevelFilter;

/// ECI to ECEF Conversion Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts an ECI position vector (km) to ECEF at a UTC time",
    long_about = None
)]
struct Args {
    /// How the GMST angle is wrapped before the rotation
    #[arg(long, value_enum, default_value_t = GmstWrap::Normalized)]
    wrap: GmstWrap,

    /// Treat the vector as ECEF and print the ECI position instead
    #[arg(long, action = ArgAction::SetTrue)]
    inverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// year month day hour minute second eci_x_km eci_y_km eci_z_km
    #[arg(
        value_name = "VALUE",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    values: Vec<String>,
}

/// Install a stderr logger at the level selected by `-v`
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}

/// Parse, convert and print
fn run(args: &Args) -> eci2ecef::Result<()> {
    let invocation = cli::parse_invocation(&args.values)?;
    let converter = EciToEcefConverter::new().with_wrap(args.wrap);

    let conversion = if args.inverse {
        converter.convert_inverse(&invocation.timestamp, invocation.vector)
    } else {
        converter.convert(&invocation.timestamp, invocation.vector)
    };

    let stdout = std::io::stdout();
    cli::write_conversion(&mut stdout.lock(), &conversion, args.format)
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(EcefError::Usage { found }) => {
            log::debug!("wrong argument count: {}", found);
            println!("{}", USAGE);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
