mod main_lib;

use clap::Parser;
use main_lib::{build_config, init_tracing, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!("Catalog base URL: {}", config.base_url);

    let output = run(&cli, config).await?;
    println!("{}", output);
    Ok(())
}
