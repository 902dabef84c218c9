#![windows_subsystem = "windows"]

use anyhow::Context;
use rollcall::domain::config::AppConfig;
use rollcall::kernel::config::load_config;
use rollcall_desktop::ui::app;
use rollcall_desktop::DesktopApp;
use rollcall_logger::Logger;

fn main() -> anyhow::Result<()> {
    let config: AppConfig = load_config(None::<&str>).context("loading configuration")?;

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).console(true);
    if let Some(filter) = &config.log.filter {
        logger = logger.env_filter(filter.clone());
    }
    if let Some(dir) = &config.log.dir {
        logger = logger.file(dir);
    }
    let _logger = logger.init().context("initializing the logger")?;

    tracing::info!(features = ?rollcall::features::ENABLED, "starting the Rollcall client");

    let client = rollcall::init(&config);
    DesktopApp::new().with_window(&config.window).launch(app, client);

    Ok(())
}
