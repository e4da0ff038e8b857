use std::path::PathBuf;

use clap::Parser;

/// Publish local benchmark timings to the shared results spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "benchmark-publisher", version)]
pub struct Cli {
    /// Service account identity the spreadsheet is shared with
    pub client_email: String,

    /// Path to the service account's PEM private key
    pub private_key_path: PathBuf,
}
