//! Command-line entry point

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::report;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_PROGRAM: &str = "trend_predict";

/// Fit a linear trend to a time-series CSV export and print the value
/// predicted 10 seconds past the latest sample
#[derive(Parser, Debug)]
#[command(name = "trend_predict", version, long_about = None)]
pub struct Cli {
    /// CSV export with `_time` and `_value` columns
    #[arg(allow_hyphen_values = true)]
    pub csv_file: PathBuf,
}

/// Run the tool and return the process exit code
///
/// `args` includes the program name as its first item. The prediction goes to
/// `stdout`; any failure goes to `stderr` as one line and yields exit code 1.
pub fn run<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match write!(stdout, "{}", e) {
                Ok(()) => 0,
                Err(_) => 1,
            };
        }
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            return fail(stderr, &ForecastError::Usage(program));
        }
    };

    let outcome = crate::forecast_file(&cli.csv_file, &ForecastConfig::default())
        .and_then(|forecast| {
            report::write_forecast(stdout, &forecast).map_err(|e| {
                ForecastError::Processing(format!("failed to write prediction: {}", e))
            })
        });

    match outcome {
        Ok(()) => 0,
        Err(error) => fail(stderr, &error),
    }
}

fn fail<E: Write>(stderr: &mut E, error: &ForecastError) -> i32 {
    // Nothing else can be reported if stderr itself is gone
    let _ = report::write_error(stderr, error);
    error.exit_code()
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
