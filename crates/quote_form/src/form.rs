//! The quote form view-model. All UI state lives here and moves through
//! `Idle -> Pending -> Idle` once per submission.

use std::time::{Duration, Instant};

use client_core::{PredictionError, PredictionService};
use shared::{
    domain::FormField,
    protocol::{QuotePrediction, QuoteRequest},
};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    collect::{collect, FormInput},
    config::Settings,
    notify::ToastStack,
    render::{RenderedQuote, ResultPanel, RiskBand},
    validation::{validate_required, RangeWarning, RangeWarnings, ValidationErrors},
};

pub const SUBMIT_LABEL: &str = "Get quote";
pub const PENDING_LABEL: &str = "Predicting...";
pub const FAILURE_TOAST: &str = "Prediction failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a quote request is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Quoted {
        prediction: QuotePrediction,
        band: RiskBand,
    },
    Failed,
    /// A result arrived while nothing was in flight.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct QuoteForm {
    input: FormInput,
    warnings: RangeWarnings,
    phase: FormPhase,
    in_flight: Option<QuoteRequest>,
    result: ResultPanel,
    toasts: ToastStack,
    count_up: Duration,
    completed_cycles: u64,
}

impl QuoteForm {
    pub fn new(count_up: Duration, toast_ttl: Duration) -> Self {
        Self {
            input: FormInput::default(),
            warnings: RangeWarnings::default(),
            phase: FormPhase::Idle,
            in_flight: None,
            result: ResultPanel::Hidden,
            toasts: ToastStack::new(toast_ttl),
            count_up,
            completed_cycles: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.count_up(), settings.toast_ttl())
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Stores a field value and re-runs its range check.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value);
        self.warnings.check(field, self.input.get(field));
    }

    pub fn warning(&self, field: FormField) -> Option<&RangeWarning> {
        self.warnings.get(field)
    }

    pub fn warnings(&self) -> &RangeWarnings {
        &self.warnings
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Pending
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => SUBMIT_LABEL,
            FormPhase::Pending => PENDING_LABEL,
        }
    }

    pub fn result(&self) -> &ResultPanel {
        &self.result
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastStack {
        &mut self.toasts
    }

    /// Number of submissions that went out and came back, successfully or not.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Validates the form and, if it is complete, locks it and hands back the request to send.
    pub fn begin_submit(&mut self, now: Instant) -> Result<QuoteRequest, SubmitRejected> {
        if self.is_pending() {
            debug!("submit ignored while a request is in flight");
            return Err(SubmitRejected::Busy);
        }

        let request = match validate_required(&collect(&self.input)) {
            Ok(request) => request,
            Err(errors) => {
                debug!(fields = ?errors.fields(), "quote form failed validation");
                self.toasts.error(errors.to_string(), now);
                return Err(errors.into());
            }
        };

        self.result = ResultPanel::Hidden;
        self.phase = FormPhase::Pending;
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Renders the response of the in-flight request and unlocks the form.
    pub fn finish_submit(
        &mut self,
        outcome: Result<QuotePrediction, PredictionError>,
        now: Instant,
    ) -> SubmitOutcome {
        let Some(request) = self.in_flight.take() else {
            debug!("ignoring prediction result with no request in flight");
            return SubmitOutcome::Ignored;
        };

        let outcome = match outcome {
            Ok(prediction) => {
                let quote = RenderedQuote::new(prediction, &request, now, self.count_up);
                let band = quote.band;
                info!(
                    predicted_charge = prediction.predicted_charge,
                    band = %band,
                    "quote rendered"
                );
                self.toasts.success(format!("Quote ready: {}", quote.amount), now);
                self.result = ResultPanel::Quote(quote);
                SubmitOutcome::Quoted { prediction, band }
            }
            Err(err) => {
                error!(error = %err, "prediction request failed");
                self.toasts.error(FAILURE_TOAST, now);
                self.result = ResultPanel::failed();
                SubmitOutcome::Failed
            }
        };

        self.phase = FormPhase::Idle;
        self.completed_cycles += 1;
        outcome
    }
}

/// Drives one full submission cycle against `service`.
pub async fn submit_with<S>(form: &mut QuoteForm, service: &S, now: Instant) -> SubmitOutcome
where
    S: PredictionService + ?Sized,
{
    let request = match form.begin_submit(now) {
        Ok(request) => request,
        Err(rejected) => return SubmitOutcome::Rejected(rejected),
    };

    let outcome = service.predict(&request).await;
    form.finish_submit(outcome, Instant::now().max(now))
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
