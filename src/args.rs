//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse a product catalog in the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/storefront/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write logs here instead of the default state directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip downloading product images
    #[arg(long)]
    pub no_thumbnails: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Layer command-line overrides on top of the file configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
        if self.no_thumbnails {
            config.display.thumbnails = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["storefront"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn endpoint_and_thumbnail_overrides() {
        let cli = Cli::parse_from([
            "storefront",
            "--endpoint",
            "http://127.0.0.1:9/products",
            "--no-thumbnails",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.catalog.endpoint, "http://127.0.0.1:9/products");
        assert!(!config.display.thumbnails);
    }

    #[test]
    fn explicit_config_path_wins() {
        let cli = Cli::parse_from(["storefront", "--config", "/tmp/shop.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/shop.toml"));
    }
}
