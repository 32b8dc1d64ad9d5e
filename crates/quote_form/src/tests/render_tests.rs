use super::*;
use shared::domain::{Region, Sex, Smoker};

fn request(age: u32, bmi: f64, children: u32, smoker: Smoker) -> QuoteRequest {
    QuoteRequest {
        age,
        sex: Sex::Female,
        bmi,
        children,
        smoker,
        region: Region::Southeast,
    }
}

#[test]
fn risk_bands_use_half_open_intervals() {
    assert_eq!(RiskBand::from_charge(0.0), RiskBand::Low);
    assert_eq!(RiskBand::from_charge(7999.99), RiskBand::Low);
    assert_eq!(RiskBand::from_charge(8000.0), RiskBand::Medium);
    assert_eq!(RiskBand::from_charge(19999.99), RiskBand::Medium);
    assert_eq!(RiskBand::from_charge(20000.0), RiskBand::High);
    assert_eq!(RiskBand::from_charge(63770.43), RiskBand::High);
}

#[test]
fn formats_dollars_with_grouping_and_cents() {
    assert_eq!(format_usd(12345.67), "$12,345.67");
    assert_eq!(format_usd(0.0), "$0.00");
    assert_eq!(format_usd(999.999), "$1,000.00");
    assert_eq!(format_usd(1234567.8), "$1,234,567.80");
    assert_eq!(format_usd(100.0), "$100.00");
    assert_eq!(format_usd(-42.5), "-$42.50");
}

#[test]
fn insight_labels_follow_input_brackets() {
    let labels: Vec<_> = insights(&request(23, 17.0, 0, Smoker::No))
        .into_iter()
        .map(|i| i.detail)
        .collect();
    assert_eq!(
        labels,
        [
            "Young adult",
            "Underweight",
            "Non-smoker: no smoking surcharge",
            "No dependents"
        ]
    );

    let labels: Vec<_> = insights(&request(58, 31.0, 4, Smoker::Yes))
        .into_iter()
        .map(|i| i.detail)
        .collect();
    assert_eq!(
        labels,
        [
            "Senior",
            "Obese",
            "Smoker: strong upward effect",
            "Large family"
        ]
    );
}

#[test]
fn bracket_boundaries() {
    assert_eq!(age_bracket(24), "Young adult");
    assert_eq!(age_bracket(25), "Adult");
    assert_eq!(age_bracket(40), "Middle-aged");
    assert_eq!(age_bracket(55), "Senior");
    assert_eq!(bmi_category(18.5), "Healthy weight");
    assert_eq!(bmi_category(25.0), "Overweight");
    assert_eq!(bmi_category(30.0), "Obese");
    assert_eq!(family_size(2), "Small family");
    assert_eq!(family_size(3), "Large family");
}

#[test]
fn rendered_quote_carries_band_amount_and_chips() {
    let now = Instant::now();
    let quote = RenderedQuote::new(
        QuotePrediction {
            predicted_charge: 12345.67,
        },
        &request(30, 27.5, 1, Smoker::No),
        now,
        Duration::from_millis(1200),
    );

    assert_eq!(quote.band, RiskBand::Medium);
    assert_eq!(quote.amount, "$12,345.67");
    assert_eq!(quote.headline(), "Predicted yearly charges: $12,345.67");
    assert_eq!(quote.headline_at(now), "Predicted yearly charges: $0.00");
    assert_eq!(
        quote.headline_at(now + Duration::from_secs(5)),
        quote.headline()
    );

    let texts: Vec<_> = quote.chips.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["Moderate risk", "Non-smoker", "BMI: 27.5", "Age: 30"]);
    assert_eq!(quote.chips[0].band, Some(RiskBand::Medium));
    assert!(quote.chips[1..].iter().all(|c| c.band.is_none()));
}

#[test]
fn failed_panel_is_visible_without_band() {
    let panel = ResultPanel::failed();
    assert!(panel.is_visible());
    assert_eq!(panel.band(), None);
    assert!(!ResultPanel::Hidden.is_visible());
}
