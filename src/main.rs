use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    calview::startup::init_logging()?;

    info!("Starting calview");

    // Load configuration
    let config = calview::startup::load_config().await?;

    // Run the command loop
    calview::startup::run(config).await
}
