use roleboard::{config::Config, error::AppError, startup};

/// Connects to the configured store and brings its schema up to date.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    db.close().await?;

    tracing::info!("Store ready");

    Ok(())
}
