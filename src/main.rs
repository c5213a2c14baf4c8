use clap::Parser;
use std::process::ExitCode;
use web_reader::{AcceptAnyKey, KeyValidator, PatternValidator, WebReader};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.reader_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let validator: Box<dyn KeyValidator> = if args.skip_key_check {
        Box::new(AcceptAnyKey)
    } else {
        Box::new(PatternValidator::default())
    };

    // Configuration problems stop here, before any request is sent
    let reader = match WebReader::with_validator(&config, validator.as_ref()) {
        Ok(reader) => reader,
        Err(e) => {
            ::log::error!("Failed to initialize web reader: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.test_connection {
        println!("Testing connection to {}...", config.model);
        println!("Test result: {}\n", reader.test_connection().await);
    }

    if let Some(url) = &args.url {
        println!("Summarizing website: {url}");
        println!("{}", "=".repeat(50));
        println!("{}", reader.summarize(url).await);
    }

    ExitCode::SUCCESS
}
