use std::{io, sync::OnceLock};

use application::{Args, Config, Service};
use service::{domain::Characteristics, infra::Memory};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        characteristics,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { log, sample } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(Memory::new());
    application::populate(&service, sample).await.map_err(|e| {
        log::error!("failed to populate address book: {e}");
    })?;

    if let Some(characteristics) = characteristics {
        let characteristics = characteristics
            .parse::<Characteristics>()
            .map_err(|e| log::error!("invalid `--characteristics`: {e}"))?;

        log::info!("looking for buyers desiring `{characteristics}`");
        let buyers = application::buyers_desiring(&service, characteristics)
            .await
            .map_err(|e| log::error!("{e}"))?;

        log::info!("{} buyer(s) found", buyers.len());
        for b in buyers {
            println!("{b}");
        }
    } else {
        let (properties, buyers) = application::list_all(&service)
            .await
            .map_err(|e| log::error!("{e}"))?;

        log::info!(
            "{} property(ies) and {} buyer(s) listed",
            properties.len(),
            buyers.len(),
        );
        for p in properties {
            println!("{p}");
        }
        for b in buyers {
            println!("{b}");
        }
    }

    Ok(())
}
