use clockface::config;
use clockface::gui::app::{AppInit, AppModel};
use clockface::sys::runtime;
use dialkit::time::{LocalClock, TimeSampler};
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    let services = runtime::start_background_services(tx.clone())?;
    let ticker = services.start_ticker(tx)?;

    let app = RelmApp::new("org.troia.clockface");

    app.run::<AppModel>(AppInit {
        config,
        now: LocalClock.sample(),
        ticker,
        rx,
    });

    drop(services);
    Ok(())
}
