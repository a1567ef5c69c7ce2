// SPDX-License-Identifier: MPL-2.0
use manga_mood::app::{self, Flags};
use manga_mood::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "manga_mood=info";

const HELP: &str = "\
MangaMood - find your next manga by mood

USAGE:
  manga_mood [OPTIONS]

OPTIONS:
  --catalog <PATH>       Load the catalog from a TOML file
  --config-dir <DIR>     Directory holding settings.toml
  --theme <MODE>         light, dark or system (not saved)
  --log-level <FILTER>   Log filter, e.g. debug or manga_mood=trace
  -h, --help             Print this help
";

struct Args {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        catalog: args.opt_value_from_os_str("--catalog", |s| Ok::<_, String>(PathBuf::from(s)))?,
        config_dir: args.opt_value_from_os_str("--config-dir", |s| Ok::<_, String>(PathBuf::from(s)))?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    };
    let log_level = args.opt_value_from_str("--log-level")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(Args { flags, log_level }))
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_logging(args.log_level.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting MangaMood");

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
