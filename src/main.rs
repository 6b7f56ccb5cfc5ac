// ghorg command line entry point.
// Prints an organization's public repository names, one per line.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ghorg::{FetcherConfig, GithubOrgClient, HttpFetcher};

#[derive(Debug, Parser)]
#[command(name = "ghorg", version, about = "List a GitHub organization's public repositories")]
struct Cli {
    /// Organization login, e.g. `google`
    org: String,

    /// Only list repositories whose license key matches exactly (e.g. `apache-2.0`)
    #[arg(short, long)]
    license: Option<String>,

    /// API root to query instead of https://api.github.com
    #[arg(long, env = "GHORG_BASE_URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("ghorg: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ghorg::Result<()> {
    let mut config = FetcherConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let fetcher = HttpFetcher::new(&config)?;
    let client = GithubOrgClient::with_base_url(&cli.org, &config.base_url, fetcher);
    info!(org = %cli.org, license = ?cli.license, "listing public repos");

    for name in client.public_repos(cli.license.as_deref()).await? {
        println!("{}", name);
    }
    Ok(())
}
