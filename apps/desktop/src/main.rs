use std::{fmt::Write as _, process::ExitCode, time::Instant};

use anyhow::Result;
use clap::Parser;
use client_core::HttpPredictionClient;
use quote_form::{
    load_settings, render::DISCLAIMER, submit_with, QuoteForm, ResultPanel, SubmitOutcome,
    ToastKind,
};
use shared::domain::FormField;

/// Request one insurance charge estimate from the prediction service.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    age: Option<String>,
    /// male or female
    #[arg(long)]
    sex: Option<String>,
    #[arg(long)]
    bmi: Option<String>,
    #[arg(long)]
    children: Option<String>,
    /// yes or no
    #[arg(long)]
    smoker: Option<String>,
    /// northeast, northwest, southeast or southwest
    #[arg(long)]
    region: Option<String>,
}

impl Args {
    fn field(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Age => &self.age,
            FormField::Sex => &self.sex,
            FormField::Bmi => &self.bmi,
            FormField::Children => &self.children,
            FormField::Smoker => &self.smoker,
            FormField::Region => &self.region,
        };
        value.as_deref()
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = &args.server_url {
        settings.server_url = server_url.clone();
    }
    let client = HttpPredictionClient::new(&settings.server_url, &settings.predict_path)?;

    let mut form = QuoteForm::from_settings(&settings);
    for field in FormField::ALL {
        if let Some(value) = args.field(field) {
            form.set_field(field, value);
        }
    }

    let outcome = submit_with(&mut form, &client, Instant::now()).await;
    print!("{}", render_report(&form));

    Ok(match outcome {
        SubmitOutcome::Quoted { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn render_report(form: &QuoteForm) -> String {
    let mut out = String::new();

    for warning in form.warnings().iter() {
        let _ = writeln!(out, "warning: {warning}");
    }

    match form.result() {
        ResultPanel::Hidden => {}
        ResultPanel::Quote(quote) => {
            let _ = writeln!(out, "{}", quote.headline());
            let _ = writeln!(out, "{}", quote.explanation());
            let chips: Vec<_> = quote.chips.iter().map(|c| c.text.as_str()).collect();
            let _ = writeln!(out, "[{}]", chips.join("] ["));
            for insight in &quote.insights {
                let _ = writeln!(out, "  {}: {}", insight.title, insight.detail);
            }
            let _ = writeln!(out, "{DISCLAIMER}");
        }
        ResultPanel::Failed { message, hint } => {
            let _ = writeln!(out, "{message}");
            let _ = writeln!(out, "{hint}");
        }
    }

    for toast in form.toasts().active() {
        let tag = match toast.kind {
            ToastKind::Success => "ok",
            ToastKind::Error => "error",
        };
        let _ = writeln!(out, "[{tag}] {}", toast.message);
    }

    out
}
