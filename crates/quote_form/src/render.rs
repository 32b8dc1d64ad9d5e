//! Maps a prediction and its inputs to what the result panel shows. The bands, chips and
//! insights are presentation labels only and say nothing about the model's coefficients.

use std::{
    fmt,
    time::{Duration, Instant},
};

use shared::protocol::{QuotePrediction, QuoteRequest};

use crate::animation::CountUp;

pub const DISCLAIMER: &str =
    "These bands are for demonstration only and are not medical or financial advice.";
pub const FAILURE_MESSAGE: &str = "Something went wrong while predicting.";
pub const FAILURE_HINT: &str = "An error occurred. Try again or check your internet connection.";

const LOW_BAND_CEILING: f64 = 8_000.0;
const MEDIUM_BAND_CEILING: f64 = 20_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn from_charge(charge: f64) -> Self {
        if charge < LOW_BAND_CEILING {
            RiskBand::Low
        } else if charge < MEDIUM_BAND_CEILING {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk",
            RiskBand::Medium => "Moderate risk",
            RiskBand::High => "Higher risk",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            RiskBand::Low => {
                "Your predicted charges are on the lower side compared to typical policy holders."
            }
            RiskBand::Medium => {
                "Your predicted charges sit in a moderate band. Lifestyle improvements may reduce future costs."
            }
            RiskBand::High => {
                "Your predicted charges are relatively high. Risk factors like smoking, high BMI or age strongly influence this."
            }
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// en-US dollars with two decimals and thousands separators, e.g. `$12,345.67`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (idx, ch) in dollars.chars().enumerate() {
        if idx > 0 && (dollars.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub text: String,
    /// Set on the chip that carries the band colour.
    pub band: Option<RiskBand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub fn age_bracket(age: u32) -> &'static str {
    match age {
        0..=24 => "Young adult",
        25..=39 => "Adult",
        40..=54 => "Middle-aged",
        _ => "Senior",
    }
}

pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Healthy weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

pub fn family_size(children: u32) -> &'static str {
    match children {
        0 => "No dependents",
        1..=2 => "Small family",
        _ => "Large family",
    }
}

pub fn insights(request: &QuoteRequest) -> Vec<Insight> {
    let smoking = if request.smoker.is_smoker() {
        "Smoker: strong upward effect"
    } else {
        "Non-smoker: no smoking surcharge"
    };

    vec![
        Insight {
            title: "Age bracket",
            detail: age_bracket(request.age),
        },
        Insight {
            title: "BMI category",
            detail: bmi_category(request.bmi),
        },
        Insight {
            title: "Smoking",
            detail: smoking,
        },
        Insight {
            title: "Family size",
            detail: family_size(request.children),
        },
    ]
}

pub fn chips(band: RiskBand, request: &QuoteRequest) -> Vec<Chip> {
    let smoker = if request.smoker.is_smoker() {
        "Smoker"
    } else {
        "Non-smoker"
    };

    vec![
        Chip {
            text: band.label().to_string(),
            band: Some(band),
        },
        Chip {
            text: smoker.to_string(),
            band: None,
        },
        Chip {
            text: format!("BMI: {}", request.bmi),
            band: None,
        },
        Chip {
            text: format!("Age: {}", request.age),
            band: None,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuote {
    pub predicted_charge: f64,
    pub amount: String,
    pub band: RiskBand,
    pub chips: Vec<Chip>,
    pub insights: Vec<Insight>,
    pub counter: CountUp,
}

impl RenderedQuote {
    pub fn new(
        prediction: QuotePrediction,
        request: &QuoteRequest,
        now: Instant,
        count_up: Duration,
    ) -> Self {
        let charge = prediction.predicted_charge;
        let band = RiskBand::from_charge(charge);
        Self {
            predicted_charge: charge,
            amount: format_usd(charge),
            band,
            chips: chips(band, request),
            insights: insights(request),
            counter: CountUp::new(charge, now, count_up),
        }
    }

    pub fn headline(&self) -> String {
        format!("Predicted yearly charges: {}", self.amount)
    }

    pub fn headline_at(&self, now: Instant) -> String {
        format!("Predicted yearly charges: {}", self.counter.display_at(now))
    }

    pub fn explanation(&self) -> &'static str {
        self.band.explanation()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPanel {
    #[default]
    Hidden,
    Quote(RenderedQuote),
    Failed {
        message: &'static str,
        hint: &'static str,
    },
}

impl ResultPanel {
    pub fn failed() -> Self {
        ResultPanel::Failed {
            message: FAILURE_MESSAGE,
            hint: FAILURE_HINT,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultPanel::Hidden)
    }

    pub fn band(&self) -> Option<RiskBand> {
        match self {
            ResultPanel::Quote(quote) => Some(quote.band),
            ResultPanel::Hidden | ResultPanel::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
