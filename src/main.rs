use bookmarks_csv::{ConvertError, Converter};
use clap::Parser;
use std::process::ExitCode;

mod args;
use args::{Args, load_config};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Conversion failed: {}", e);
            eprintln!("error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), ConvertError> {
    let config = load_config(&args, |key| std::env::var(key).ok())?;

    let start_time = std::time::Instant::now();
    let summary = Converter::new(&args.input_html, &args.output_csv)
        .with_config(config)
        .run()
        .await?;

    ::log::info!(
        "Conversion complete - wrote {} rows ({} titles fetched, {} fallbacks) in {:.2} seconds",
        summary.rows,
        summary.resolved,
        summary.fallbacks,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Render an error with all of its sources
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
