// SPDX-License-Identifier: MIT OR Apache-2.0
//! flowport demo host.
//!
//! Paints two node cards ("Sensor" and "Alarm") whose fields come from JSON
//! contracts, renders a handle per field through the anchor registry, and
//! draws one edge between resolved anchor pins once both ends are connected.
//! Click a marker to toggle its demo connection flag.

mod app;

use app::DemoApp;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("flowport_demo=debug".parse().unwrap())
        .add_directive("flowport_handle=debug".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flowport demo v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([860.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "flowport demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    ) {
        tracing::error!("Demo crashed: {e}");
        std::process::exit(1);
    }
}
