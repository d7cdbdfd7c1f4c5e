use bookmarks_csv::{ConvertError, ConverterConfig, FetchErrorPolicy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookmarks-csv")]
#[command(about = "Convert a browser bookmark export (HTML) into a Title,URL CSV file")]
#[command(version)]
pub struct Args {
    /// Path to the input HTML file
    pub input_html: PathBuf,

    /// Path to the output CSV file
    pub output_csv: PathBuf,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do when a page title cannot be fetched
    #[arg(long, value_enum)]
    pub on_fetch_error: Option<FetchErrorArg>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetchErrorArg {
    /// Stop the conversion on the first network error
    Abort,
    /// Keep the URL as the title and carry on
    UseUrl,
}

/// Convert from CLI argument policy to internal policy
pub fn convert_fetch_error_policy(arg: FetchErrorArg) -> FetchErrorPolicy {
    match arg {
        FetchErrorArg::Abort => FetchErrorPolicy::Abort,
        FetchErrorArg::UseUrl => FetchErrorPolicy::UseUrl,
    }
}

/// Build the run configuration: defaults < config file < environment < flags
pub fn load_config<L>(args: &Args, env_lookup: L) -> Result<ConverterConfig, ConvertError>
where
    L: Fn(&str) -> Option<String>,
{
    let mut config = match &args.config {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::default(),
    }
    .with_env_from(env_lookup)?;

    if let Some(policy) = args.on_fetch_error {
        config.on_fetch_error = convert_fetch_error_policy(policy);
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }

    Ok(config)
}
