use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Logs to stderr so stdout only carries the progress lines.
pub fn setup_logger(verbose: bool) -> eyre::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
