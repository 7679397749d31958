//! `showcase` - replay page events against a page manifest
//!
//! Usage: `showcase <manifest.json> [event ...]`
//!
//! Loads the page configuration and the manifest, feeds the events through
//! the page controller in order and prints the rendered state after the
//! initial load and after every event.

use anyhow::{Context, Result, bail};
use showcase::{
    config::ConfigManager,
    error::get_user_friendly_error,
    page::{PageController, PageEvent, PageManifest},
    render::{Renderer, TextRenderer},
    utils,
};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{info, warn};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(manifest_path) = args.next().map(PathBuf::from) else {
        bail!("usage: showcase <manifest.json> [event ...]");
    };

    // Logging is best effort: a read-only config dir must not block a replay
    if let Err(e) = utils::init_logging() {
        eprintln!("Logging disabled: {}", get_user_friendly_error(&e));
    }

    let events = args
        .map(|arg| arg.parse::<PageEvent>())
        .collect::<showcase::Result<Vec<_>>>()
        .map_err(|e| anyhow::anyhow!(get_user_friendly_error(&e)))?;

    let config = ConfigManager::load().context("Failed to load page configuration")?;
    let manifest = PageManifest::load(&manifest_path).map_err(|e| {
        warn!("Manifest rejected: {}", e);
        anyhow::anyhow!(get_user_friendly_error(&e))
    })?;

    let (state_tx, state_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    let mut controller = PageController::new(config, manifest.clone(), state_tx);

    if let Some(map) = controller.map() {
        println!(
            "map: {}",
            serde_json::to_string(map).context("Failed to encode map descriptor")?
        );
    }

    controller.send_initial_state();
    info!("Replaying {} events", events.len());
    for event in events {
        event_tx
            .send(event)
            .context("Event channel closed unexpectedly")?;
    }
    drop(event_tx);
    controller.run(&event_rx);
    drop(controller);

    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(&manifest, stdout.lock());
    for state in state_rx {
        renderer
            .render(&state)
            .context("Failed to write rendered state")?;
    }

    Ok(())
}
