use crate::app::{App, CliView};
use crate::calendar::validate::YearWindow;
use crate::calendar::GoogleCalendarClient;
use crate::config::Config;
use crate::error::Error;
use crate::repl;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Wire up the client and run the command loop until the user exits
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let window = {
        let config_read = config.read().await;
        YearWindow::from_offsets(config_read.year_window_past, config_read.year_window_future)
    };

    let client = GoogleCalendarClient::new(config).await;
    let mut app = App::new(client);
    let mut view = CliView;

    repl::run(&mut app, &mut view, window).await?;
    Ok(())
}
