use anyhow::Context;
use clap::Parser;
use storefront::args::Cli;
use storefront::config::Config;
use storefront::logging::{default_log_path, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let config = cli.apply(config);
    config.validate()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(err) = init_tracing(&config.logging.filter, &log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), err);
    }
    tracing::info!(endpoint = %config.catalog.endpoint, "Starting storefront");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let result = storefront::ui::run(config, runtime.handle());
    runtime.shutdown_background();
    result?;
    Ok(())
}
