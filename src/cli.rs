// src/cli.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command Line Interface for the LegalEase drafting and analysis tools
#[derive(Parser, Debug)]
#[command(name = "legalease", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the drafting and analysis page over HTTP
    Serve(ServeArgs),
    /// Draft a document from a free-text description
    Draft(DraftArgs),
    /// Scan legal text for parties, obligations, dates, payments and definitions
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LEGALEASE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,
}

#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// Document type: nda, contract or will (anything else drafts a will)
    #[arg(short, long, default_value = "will")]
    pub doc_type: String,

    /// Description of what the document should cover
    #[arg(trailing_var_arg = true)]
    pub description: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// File to analyze (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the findings as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}
