use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use gl_latest_version::config::{ConfigOverrides, ResolverConfig};
use gl_latest_version::logging::{self, LogFormat};
use gl_latest_version::version::registries::GcsListingSource;
use gl_latest_version::version::registry::ListingSource;
use gl_latest_version::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "gl-latest-version")]
#[command(version, about = "Resolve the latest GenLayer node release from its GCS bucket")]
struct Cli {
    /// JSON config file (baseUrl, bucket, prefix, timeoutSecs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Bucket to list
    #[arg(long)]
    bucket: Option<String>,

    /// Object prefix to list under
    #[arg(long)]
    prefix: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print every version found, highest first, one per line
    #[arg(long)]
    all: bool,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            bucket: self.bucket.clone(),
            prefix: self.prefix.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(
        cli.log_level.as_deref(),
        cli.log_format,
        cli.log_file.as_deref(),
    )?;

    let config = match &cli.config {
        Some(path) => ResolverConfig::from_file(path)?,
        None => ResolverConfig::default(),
    }
    .with_overrides(cli.overrides());

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config, cli.all))
}

async fn run(config: ResolverConfig, all: bool) -> anyhow::Result<()> {
    let source = GcsListingSource::new(&config)?;
    debug!("Resolving versions from {}", source.url());

    let resolver = VersionResolver::new(Arc::new(source));

    if all {
        for version in resolver.resolve_all().await? {
            println!("{}", version);
        }
    } else {
        println!("{}", resolver.resolve().await?);
    }

    Ok(())
}
