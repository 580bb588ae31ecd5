use clap::Parser;

#[derive(Parser)]
#[command(
    name = "formscan",
    about = "Batch web-form recon: report each page's form methods and input names"
)]
pub struct Cli {
    /// File with URLs to scan, one per line
    #[arg(short, long)]
    pub file: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// User-Agent header sent with each request
    #[arg(long)]
    pub user_agent: Option<String>,
}
