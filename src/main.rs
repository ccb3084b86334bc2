#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use vidgrab::{AppConfig, Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!(
        "download endpoint: {}, saving to {}",
        config.endpoint.base_url,
        config.paths.download_dir.display()
    );

    vidgrab::tui::run(config).await.map_err(Error::Io)
}
