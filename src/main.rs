use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use triveni_sitemap::catalog::Catalog;
use triveni_sitemap::config::SitemapConfig;
use triveni_sitemap::{generator, web};

#[derive(Parser)]
#[command(
    name = "triveni-sitemap",
    version,
    about = "Sitemap and robots.txt tooling for the Triveni Cabs travel booking website"
)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write sitemap.xml and sync robots.txt (the default)
    Generate {
        /// Directory to write the output files to
        #[arg(long)]
        output_dir: Option<String>,

        /// Base domain for absolute URLs, no trailing slash
        #[arg(long)]
        base_url: Option<String>,

        /// JSON catalog file replacing the bundled site tables
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Serve the sitemap over HTTP for in-app display and download
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(config: &SitemapConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SitemapConfig::load_from_path(cli.config)?;
    init_tracing(&config, cli.verbose);

    let command = cli.command.unwrap_or(Command::Generate {
        output_dir: None,
        base_url: None,
        catalog: None,
    });

    match command {
        Command::Generate {
            output_dir,
            base_url,
            catalog,
        } => {
            if let Some(dir) = output_dir {
                config.site.output_dir = dir;
            }
            if let Some(url) = base_url {
                config.site.base_url = url;
            }
            config.validate()?;

            let catalog = match catalog {
                Some(path) => Catalog::load_from_file(&path)?,
                None => Catalog::bundled(),
            };

            let report = generator::run(&config, &catalog)?;
            println!(
                "Wrote {} urls to {}",
                report.url_count,
                report.sitemap_path.display()
            );
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            web::run(config).await;
        }
    }

    Ok(())
}
