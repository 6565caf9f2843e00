// src/main.rs
mod analysis;
mod cli;
mod drafting;
mod extractors;
mod utils;
mod web;

use std::io::Read;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands, DraftArgs};
use utils::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let cli = Cli::parse();
    tracing::debug!("Starting with args: {:?}", cli);

    // 3. Dispatch
    match cli.command {
        Commands::Serve(args) => web::serve(args.bind).await?,
        Commands::Draft(args) => draft(args),
        Commands::Analyze(args) => analyze(args)?,
    }

    Ok(())
}

fn draft(args: DraftArgs) {
    let description = args.description.join(" ");
    println!("{}", drafting::generate(&args.doc_type, &description));
}

fn analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read input file {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!("Analyzing {} bytes of text", text.len());

    if args.json {
        let result = analysis::Analysis::of(&text);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", analysis::analyze(&text));
    }
    Ok(())
}
