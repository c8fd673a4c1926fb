mod bootstrap;

use anyhow::Result;
use crm_core::settings::Settings;
use crm_web::app::{serve, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Customer dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data file: {}, static dir: {}",
        settings.data_file.display(),
        settings.static_dir.display()
    );
    bootstrap::warn_if_missing(&settings.data_file);

    let addr = settings.socket_addr()?;
    let config = AppConfig {
        data_file: settings.data_file.clone(),
        static_dir: settings.static_dir.clone(),
    };

    serve(config, addr).await
}
