use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use changelog_check::changelog::HttpPageSource;
use changelog_check::check::ChangelogCheck;
use changelog_check::config::{
    CheckConfig, DEFAULT_LOG_FILTER, DEFAULT_MANIFEST, DEFAULT_MAX_LINES, LOG_ENV_VAR, log_filter,
};
use changelog_check::report::write_version;
use clap::Parser;
use clap::error::ErrorKind;
use reqwest::Url;
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Exit status for malformed invocations
const USAGE_EXIT_CODE: u8 = 2;

/// Exit status after printing help
const HELP_EXIT_CODE: u8 = 1;

#[derive(Parser)]
#[command(name = "changelog-check")]
#[command(
    version,
    about = "Check that the manifest's snapshot version has a changelog entry",
    long_about = "Check that the page at URL carries a changelog entry \"h5. Version X.Y.Z\" \
                  for the project version found in the manifest as \
                  <version>X.Y.Z-SNAPSHOT</version>."
)]
struct Cli {
    /// Page to search for "h5. Version X.Y.Z"
    url: Url,

    /// Manifest holding the snapshot version
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Number of leading manifest lines searched for the version
    #[arg(long, default_value_t = DEFAULT_MAX_LINES, value_parser = parse_max_lines)]
    max_lines: usize,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Fail when the manifest has no snapshot version instead of searching for "Version none"
    #[arg(long)]
    require_version: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> CheckConfig {
        CheckConfig::new(self.url)
            .with_manifest(self.manifest)
            .with_max_lines(self.max_lines)
            .with_timeout(self.timeout.map(Duration::from_secs))
            .with_require_version(self.require_version)
    }
}

fn parse_max_lines(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::from(HELP_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("ERROR - {} - wrong usage.", PROGRAM);
            let _ = e.print();
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let directive = log_filter(std::env::var(LOG_ENV_VAR).ok(), verbose);
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether the changelog entry was found
fn run(cli: Cli) -> anyhow::Result<bool> {
    let json = cli.json;
    let config = cli.into_config();

    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let source = HttpPageSource::new(config.timeout)?;
            let check = ChangelogCheck::new(source, config);

            let version = check.manifest_version()?;
            if !json {
                write_version(&mut io::stdout().lock(), check.manifest(), &version)?;
            }

            anyhow::Ok(check.check_version(version).await?)
        })?;

    if json {
        report.write_json(&mut io::stdout().lock())?;
    } else {
        report.write_text(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    }

    Ok(report.is_success())
}
