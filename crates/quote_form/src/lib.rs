//! View-model of the insurance quote form: input collection, validation, result rendering
//! and toast notifications, driven through an explicit idle/pending state object.

pub mod animation;
pub mod collect;
pub mod config;
pub mod form;
pub mod notify;
pub mod render;
pub mod validation;

pub use animation::CountUp;
pub use collect::{collect, DraftValue, FormInput, QuoteDraft};
pub use config::{load_settings, Settings};
pub use form::{submit_with, FormPhase, QuoteForm, SubmitOutcome, SubmitRejected};
pub use notify::{Toast, ToastKind, ToastStack};
pub use render::{format_usd, Chip, Insight, RenderedQuote, ResultPanel, RiskBand};
pub use validation::{
    validate_range, validate_required, FieldError, RangeWarning, RangeWarnings, ValidationErrors,
};
