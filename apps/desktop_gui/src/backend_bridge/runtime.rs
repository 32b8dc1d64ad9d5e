//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{HttpPredictionClient, PredictionError, PredictionService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    server_url: String,
    predict_path: String,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                drain_unavailable(&cmd_rx, &ui_tx, "backend runtime failed to start");
                return;
            }
        };

        let client = match HttpPredictionClient::new(&server_url, &predict_path) {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("invalid prediction endpoint configuration: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(err.to_string()));
                drain_unavailable(&cmd_rx, &ui_tx, &err.to_string());
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Prediction endpoint: {}",
            client.endpoint()
        )));

        runtime.block_on(serve_commands(&client, &cmd_rx, &ui_tx));
    });
}

/// Processes commands one at a time until the UI side hangs up.
pub async fn serve_commands(
    client: &dyn PredictionService,
    cmd_rx: &Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Predict { request } => {
                let result = client.predict(&request).await;
                if ui_tx.send(UiEvent::PredictionFinished(result)).is_err() {
                    break;
                }
            }
        }
    }
}

// Keeps the form from staying locked when no client could be built.
fn drain_unavailable(cmd_rx: &Receiver<BackendCommand>, ui_tx: &Sender<UiEvent>, reason: &str) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Predict { .. } => {
                let event =
                    UiEvent::PredictionFinished(Err(PredictionError::Unavailable(reason.into())));
                if ui_tx.send(event).is_err() {
                    break;
                }
            }
        }
    }
}
