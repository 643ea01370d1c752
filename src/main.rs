mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;
use stock_quote::{
    components::fetcher::HttpFetcher, config::settings::Settings, run, AppError, QuoteRequest,
    USAGE,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Err(e) = SimpleLogger::new()
        .with_colors(true)
        .with_level(level)
        .env()
        .init()
    {
        eprintln!("logger init failed: {}", e);
    }

    // no credentials and no network unless both arguments are present
    let Some(request) = args.request() else {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    };

    match execute(&args, &request).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.stage() {
                Some(stage) => debug!("aborted at {} stage: {:?}", stage, e),
                None => debug!("aborted before the pipeline: {:?}", e),
            }
            eprintln!("{}", e);

            ExitCode::FAILURE
        }
    }
}

async fn execute(args: &cli::Args, request: &QuoteRequest) -> Result<(), AppError> {
    let settings = Settings::load(args.env_file.as_deref())?;
    let fetcher = HttpFetcher::new(settings.timeout).map_err(AppError::Client)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&fetcher, &settings, request, &mut out).await?;
    out.flush()?;

    Ok(())
}
