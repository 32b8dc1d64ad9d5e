mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use quote_form::{load_settings, QuoteForm};
use ui::QuoteApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides `server_url` from quote.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    // A single slot: the form never has more than one request in flight.
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        settings.server_url.clone(),
        settings.predict_path.clone(),
    );

    let form = QuoteForm::from_settings(&settings);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Insurance Quote")
            .with_inner_size([880.0, 560.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Insurance Quote",
        options,
        Box::new(move |_cc| Ok(Box::new(QuoteApp::new(form, cmd_tx, ui_rx)))),
    )
}
