//! Command orchestration from UI actions to the backend command queue.

use std::time::Instant;

use client_core::PredictionError;
use crossbeam_channel::{Sender, TrySendError};
use quote_form::QuoteForm;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_prediction_failure, UiEvent};

/// Locks the form and queues its request. A dead or full queue unlocks the form again as a failure.
pub fn submit_quote(
    cmd_tx: &Sender<BackendCommand>,
    form: &mut QuoteForm,
    status: &mut String,
    now: Instant,
) {
    let request = match form.begin_submit(now) {
        Ok(request) => request,
        Err(rejected) => {
            tracing::debug!("submit rejected: {rejected}");
            return;
        }
    };

    let reason = match cmd_tx.try_send(BackendCommand::Predict { request }) {
        Ok(()) => {
            tracing::debug!(command = "predict", "queued ui->backend command");
            *status = "Requesting quote...".to_string();
            return;
        }
        Err(TrySendError::Full(_)) => "UI command queue is full; please retry",
        Err(TrySendError::Disconnected(_)) => {
            "Backend command processor disconnected (possible startup/runtime failure)"
        }
    };

    *status = reason.to_string();
    form.finish_submit(Err(PredictionError::Unavailable(reason.to_string())), now);
}

/// Applies one backend event to the form and the status line.
pub fn apply_ui_event(event: UiEvent, form: &mut QuoteForm, status: &mut String, now: Instant) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::BackendUnavailable(message) => {
            tracing::error!("{message}");
            *status = message;
        }
        UiEvent::PredictionFinished(result) => {
            *status = match &result {
                Ok(_) => "Quote received".to_string(),
                Err(err) => classify_prediction_failure(err),
            };
            form.finish_submit(result, now);
        }
    }
}
