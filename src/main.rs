use eventup::server::{config::Config, error::AppError, scheduler, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting event schedulers");
    let mut scheduler = scheduler::start_scheduler(db, &config).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    scheduler.shutdown().await?;

    Ok(())
}
