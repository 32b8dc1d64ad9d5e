use super::*;
use crate::notify::ToastKind;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

struct StubService {
    charge: Option<f64>,
    calls: AtomicUsize,
}

impl StubService {
    fn quoting(charge: f64) -> Self {
        Self {
            charge: Some(charge),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            charge: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionService for StubService {
    async fn predict(&self, _request: &QuoteRequest) -> Result<QuotePrediction, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.charge {
            Some(predicted_charge) => Ok(QuotePrediction { predicted_charge }),
            None => Err(PredictionError::Status { status: 503 }),
        }
    }
}

fn new_form() -> QuoteForm {
    QuoteForm::new(Duration::from_millis(1200), Duration::from_secs(3))
}

fn filled_form() -> QuoteForm {
    let mut form = new_form();
    form.set_field(FormField::Age, "30");
    form.set_field(FormField::Sex, "female");
    form.set_field(FormField::Bmi, "27.5");
    form.set_field(FormField::Children, "1");
    form.set_field(FormField::Smoker, "no");
    form.set_field(FormField::Region, "northwest");
    form
}

#[tokio::test]
async fn successful_quote_renders_medium_band_and_currency() {
    let mut form = filled_form();
    let service = StubService::quoting(12345.67);
    let now = Instant::now();

    let outcome = submit_with(&mut form, &service, now).await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Quoted {
            band: RiskBand::Medium,
            ..
        }
    ));
    assert_eq!(service.calls(), 1);
    match form.result() {
        ResultPanel::Quote(quote) => {
            assert_eq!(quote.amount, "$12,345.67");
            assert_eq!(quote.counter.target(), 12345.67);
            assert_eq!(quote.insights.len(), 4);
        }
        other => panic!("unexpected result panel: {other:?}"),
    }
    assert_eq!(form.result().band(), Some(RiskBand::Medium));
    assert!(form.submit_enabled());

    let toasts = form.toasts().active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Quote ready: $12,345.67");
}

#[tokio::test]
async fn missing_fields_never_reach_the_service() {
    let mut form = new_form();
    form.set_field(FormField::Age, "30");
    form.set_field(FormField::Region, "southeast");
    let service = StubService::quoting(1000.0);

    let outcome = submit_with(&mut form, &service, Instant::now()).await;

    assert_eq!(service.calls(), 0);
    match outcome {
        SubmitOutcome::Rejected(SubmitRejected::Invalid(errors)) => assert_eq!(
            errors.fields(),
            [
                FormField::Sex,
                FormField::Bmi,
                FormField::Children,
                FormField::Smoker
            ]
        ),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let toasts = form.toasts().active();
    assert_eq!(toasts.len(), 1, "all errors are joined into one toast");
    assert_eq!(toasts[0].kind, ToastKind::Error);
    for label in ["Sex", "BMI", "Children", "Smoker"] {
        assert!(toasts[0].message.contains(label), "{label} missing from toast");
    }
    assert!(form.submit_enabled());
    assert_eq!(form.completed_cycles(), 0);
    assert!(!form.result().is_visible());
}

#[tokio::test]
async fn failure_shows_error_panel_one_toast_and_unlocks() {
    let mut form = filled_form();
    let service = StubService::failing();

    let outcome = submit_with(&mut form, &service, Instant::now()).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.result().band(), None);
    assert!(matches!(form.result(), ResultPanel::Failed { .. }));
    let toasts = form.toasts().active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, FAILURE_TOAST);
    assert!(form.submit_enabled());
    assert_eq!(form.completed_cycles(), 1);
}

#[test]
fn submit_is_locked_for_the_whole_request() {
    let mut form = filled_form();
    let now = Instant::now();
    assert_eq!(form.submit_label(), SUBMIT_LABEL);

    let request = form.begin_submit(now).expect("valid form");
    assert_eq!(request.age, 30);
    assert!(!form.submit_enabled());
    assert_eq!(form.phase(), FormPhase::Pending);
    assert_eq!(form.submit_label(), PENDING_LABEL);

    assert_eq!(form.begin_submit(now), Err(SubmitRejected::Busy));
    assert!(!form.submit_enabled());

    form.finish_submit(
        Ok(QuotePrediction {
            predicted_charge: 5000.0,
        }),
        now,
    );
    assert!(form.submit_enabled());
    assert_eq!(form.completed_cycles(), 1);

    let stray = form.finish_submit(Err(PredictionError::Status { status: 500 }), now);
    assert_eq!(stray, SubmitOutcome::Ignored);
    assert_eq!(form.completed_cycles(), 1);
    assert_eq!(form.result().band(), Some(RiskBand::Low));
}

#[test]
fn new_submission_hides_previous_result() {
    let mut form = filled_form();
    let now = Instant::now();

    form.begin_submit(now).expect("valid form");
    form.finish_submit(
        Ok(QuotePrediction {
            predicted_charge: 25000.0,
        }),
        now,
    );
    assert_eq!(form.result().band(), Some(RiskBand::High));

    form.begin_submit(now).expect("valid form");
    assert!(!form.result().is_visible());
}

#[test]
fn range_warnings_track_field_edits_without_blocking() {
    let mut form = filled_form();

    form.set_field(FormField::Age, "17");
    assert!(form.warning(FormField::Age).is_some());
    form.set_field(FormField::Bmi, "53.14");
    assert!(form.warning(FormField::Bmi).is_some());
    assert_eq!(form.warnings().len(), 2);

    assert!(form.begin_submit(Instant::now()).is_ok());

    form.set_field(FormField::Age, "18");
    assert!(form.warning(FormField::Age).is_none());
    assert_eq!(form.warnings().len(), 1);
}
