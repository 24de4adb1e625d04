use anyhow::Result;
use clap::Parser;
use curve_explorer::ExplorerConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ExplorerConfig::parse();
    print!("{}", config.run()?);
    Ok(())
}
