//! Backend-to-UI events and failure wording for the status line.

use client_core::PredictionError;
use shared::protocol::QuotePrediction;

pub enum UiEvent {
    Info(String),
    BackendUnavailable(String),
    PredictionFinished(Result<QuotePrediction, PredictionError>),
}

/// Diagnostic detail for the status line. The form itself reports every failure the same way.
pub fn classify_prediction_failure(err: &PredictionError) -> String {
    match err {
        PredictionError::Transport(_) => {
            "Prediction service unreachable; check URL/network and retry.".to_string()
        }
        PredictionError::Status { status } => {
            format!("Prediction service responded with HTTP {status}.")
        }
        PredictionError::Decode(_) => {
            "Prediction service sent a response that could not be read.".to_string()
        }
        PredictionError::InvalidEndpoint { endpoint, .. } => {
            format!("Prediction endpoint '{endpoint}' is not a valid URL.")
        }
        PredictionError::Unavailable(reason) => format!("Backend worker unavailable: {reason}"),
    }
}
