use serde::{Deserialize, Serialize};

use crate::state::{FieldValue, FormState};

/// The wire payload the scoring service expects: exactly ten named
/// properties, always present, always a finite number or a bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub average_monthly_balance: f64,
    pub number_of_transactions: i64,
    pub number_of_gst_paid_transactions: i64,
    pub debt_to_capital: f64,
    pub operating_profit_margins: f64,
    pub use_of_overdraft: bool,
    pub net_working_capital_days: i64,
    pub year_on_year_sales_growth: f64,
    pub emi_missed_count: i64,
    pub utility_bill_default: bool,
}

/// Build the outbound request from raw form state. Pure and infallible:
/// coercion always succeeds by falling back to `0` / `false`.
pub fn build_payload(form: &FormState) -> ScoringRequest {
    let snap = form.snapshot();
    ScoringRequest {
        average_monthly_balance: coerce_float(snap.get("Average Monthly Balance")),
        number_of_transactions: coerce_integer(snap.get("Number of Transactions")),
        number_of_gst_paid_transactions: coerce_integer(snap.get("Number of GST-paid Transactions")),
        debt_to_capital: coerce_float(snap.get("Debt to Capital")),
        operating_profit_margins: coerce_float(snap.get("Operating Profit Margins")),
        use_of_overdraft: coerce_boolean(snap.get("Use of Overdraft")),
        net_working_capital_days: coerce_integer(snap.get("Net Working Capital Days")),
        year_on_year_sales_growth: coerce_float(snap.get("Year on Year Sales Growth")),
        emi_missed_count: coerce_integer(snap.get("EMI Missed Count")),
        utility_bill_default: coerce_boolean(snap.get("Utility Bill Default on Payment Date")),
    }
}

/// Decimal coercion: standard float parsing of the trimmed text, `0.0` on
/// anything malformed, absent, or non-finite.
pub fn coerce_float(value: Option<&FieldValue>) -> f64 {
    match value {
        Some(FieldValue::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Whole-number coercion: standard integer parsing of the trimmed text,
/// `0` on anything malformed or absent.
pub fn coerce_integer(value: Option<&FieldValue>) -> i64 {
    match value {
        Some(FieldValue::Text(raw)) => raw.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Checkbox coercion. The literal text `"true"` / `"false"` is also
/// accepted, a legacy input format from non-checkbox controls.
pub fn coerce_boolean(value: Option<&FieldValue>) -> bool {
    match value {
        Some(FieldValue::Flag(checked)) => *checked,
        Some(FieldValue::Text(raw)) => raw.trim() == "true",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormState;

    #[test]
    fn well_formed_numeric_strings_parse_exactly() {
        let text = FieldValue::from("39655.51");
        assert_eq!(coerce_float(Some(&text)), 39655.51);
        let negative = FieldValue::from("-0.18");
        assert_eq!(coerce_float(Some(&negative)), -0.18);
        let count = FieldValue::from("194");
        assert_eq!(coerce_integer(Some(&count)), 194);
    }

    #[test]
    fn malformed_or_blank_numeric_input_becomes_zero() {
        for raw in ["", "  ", "abc", "12,5", "1.2.3"] {
            let value = FieldValue::from(raw);
            assert_eq!(coerce_float(Some(&value)), 0.0, "float from {raw:?}");
            assert_eq!(coerce_integer(Some(&value)), 0, "integer from {raw:?}");
        }
        assert_eq!(coerce_float(None), 0.0);
        assert_eq!(coerce_integer(None), 0);
    }

    #[test]
    fn non_finite_spellings_never_leak_into_the_payload() {
        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let value = FieldValue::from(raw);
            assert_eq!(coerce_float(Some(&value)), 0.0, "from {raw:?}");
        }
    }

    #[test]
    fn boolean_coercion_accepts_flags_and_legacy_text() {
        assert!(coerce_boolean(Some(&FieldValue::Flag(true))));
        assert!(!coerce_boolean(Some(&FieldValue::Flag(false))));
        assert!(coerce_boolean(Some(&FieldValue::from("true"))));
        assert!(!coerce_boolean(Some(&FieldValue::from("false"))));
        assert!(!coerce_boolean(Some(&FieldValue::from("yes"))));
        assert!(!coerce_boolean(None));
    }

    #[test]
    fn two_filled_fields_and_eight_blanks_build_the_documented_payload() {
        let form = FormState::new();
        form.set_field("Average Monthly Balance", "50000");
        form.set_field("Number of Transactions", "150");

        let payload = build_payload(&form);
        assert_eq!(
            payload,
            ScoringRequest {
                average_monthly_balance: 50000.0,
                number_of_transactions: 150,
                number_of_gst_paid_transactions: 0,
                debt_to_capital: 0.0,
                operating_profit_margins: 0.0,
                use_of_overdraft: false,
                net_working_capital_days: 0,
                year_on_year_sales_growth: 0.0,
                emi_missed_count: 0,
                utility_bill_default: false,
            }
        );
    }

    #[test]
    fn payload_always_serializes_exactly_ten_keys() {
        let payload = build_payload(&FormState::new());
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 10);
        for (key, value) in object {
            assert!(
                value.is_number() || value.is_boolean(),
                "{key} serialized as {value}"
            );
        }
    }

    #[test]
    fn implausible_values_pass_through_unvalidated() {
        let form = FormState::new();
        form.set_field("Net Working Capital Days", "-400");
        form.set_field("Operating Profit Margins", "9000.5");
        let payload = build_payload(&form);
        assert_eq!(payload.net_working_capital_days, -400);
        assert_eq!(payload.operating_profit_margins, 9000.5);
    }
}
