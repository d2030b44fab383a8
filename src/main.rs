use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use genicons::GenericIconService;
use genicons::domain::OutputFormat;
use genicons::infrastructure::{AppConfig, CliArgs, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()
        .unwrap_or_else(|_| StorageManager::with_dir(std::env::temp_dir().join(genicons::NAME)));
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = genicons::VERSION, "Starting {}", genicons::NAME);

    let service = GenericIconService::from_config(&config)?;

    let media = args.media_descriptor();
    let preference = args.renderer_preference();

    let mut icon = service
        .generic_icon(media.as_ref(), Some(&preference))
        .ok_or_else(|| eyre!("no generic icon available"))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, icon.as_bytes())
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                bytes = icon.len(),
                mime = OutputFormat::from_preference(Some(&preference)).mime_type(),
                "Icon written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            std::io::copy(&mut icon, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
