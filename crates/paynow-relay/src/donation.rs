//! Inbound donation submissions and their validation.
//!
//! Fields are kept as raw JSON values so that a wrong type (e.g. a numeric
//! `email`) surfaces as the field's own validation message rather than a
//! deserialization failure.

use serde_json::Value;

use crate::constants::{MAX_EXACT_AMOUNT, MINOR_UNITS_PER_PLN};
use crate::error::ValidationError;

/// Donation form as submitted by the caller. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct DonationRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    /// `amountPLN` on the wire.
    pub amount_pln: Option<Value>,
}

/// A donation that passed validation, with the amount in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDonation {
    pub name: String,
    pub email: String,
    pub amount: u64,
}

impl DonationRequest {
    pub fn new(name: &str, email: &str, amount_pln: f64) -> Self {
        Self {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
            // NaN and infinities have no JSON number form; map them to null,
            // which validation rejects the same way.
            amount_pln: Some(Value::from(amount_pln)),
        }
    }

    /// Build a request from a JSON object body. Any other JSON value (array,
    /// string, number, ...) is not a form and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        Some(Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
            amount_pln: fields.remove("amountPLN"),
        })
    }

    /// Run the checks in order: email, name, amount. The first failure wins.
    pub fn validate(&self) -> Result<ValidDonation, ValidationError> {
        let email = non_blank(self.email.as_ref()).ok_or(ValidationError::Email)?;
        let name = non_blank(self.name.as_ref()).ok_or(ValidationError::Name)?;
        let amount = to_minor_units(coerce_number(self.amount_pln.as_ref()))
            .ok_or(ValidationError::Amount)?;

        Ok(ValidDonation {
            name,
            email,
            amount,
        })
    }
}

// The trimmed value is what the gateway receives, so stray whitespace from the
// form never reaches the payment page.
fn non_blank(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Loose numeric coercion of a JSON value.
///
/// Numbers pass through, strings are trimmed and parsed (an empty string is
/// zero), booleans are 1/0. Anything else is NaN.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    }
}

/// Convert PLN to groszy, rounding half up. Returns `None` unless the result
/// is a positive integer that a double represents exactly.
pub fn to_minor_units(amount_pln: f64) -> Option<u64> {
    let scaled = (amount_pln * MINOR_UNITS_PER_PLN + 0.5).floor();
    if !scaled.is_finite() || scaled <= 0.0 || scaled > MAX_EXACT_AMOUNT {
        return None;
    }
    Some(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> DonationRequest {
        DonationRequest::from_json(value).unwrap()
    }

    #[test]
    fn only_json_objects_are_forms() {
        assert!(DonationRequest::from_json(json!(["Jan", "jan@example.com", 50])).is_none());
        assert!(DonationRequest::from_json(json!("Jan")).is_none());
        assert!(DonationRequest::from_json(json!(50)).is_none());
        assert!(DonationRequest::from_json(json!(null)).is_none());
    }

    #[test]
    fn object_fields_are_picked_by_name() {
        let req = parse(json!({ "amountPLN": 5, "email": "jan@example.com", "name": "Jan", "extra": 1 }));
        assert_eq!(req.validate().map(|d| d.amount), Ok(500));
    }

    #[test]
    fn valid_request_converts_to_minor_units() {
        let donation = DonationRequest::new("Jan Kowalski", "jan@example.com", 10.00)
            .validate()
            .unwrap();
        assert_eq!(donation.amount, 1000);
        assert_eq!(donation.name, "Jan Kowalski");
        assert_eq!(donation.email, "jan@example.com");
    }

    #[test]
    fn amounts_with_inexact_binary_form_round_correctly() {
        assert_eq!(to_minor_units(0.1), Some(10));
        assert_eq!(to_minor_units(19.99), Some(1999));
        assert_eq!(to_minor_units(1.005), Some(100));
        assert_eq!(to_minor_units(0.005), Some(1));
    }

    #[test]
    fn non_positive_and_non_finite_amounts_are_rejected() {
        assert_eq!(to_minor_units(0.0), None);
        assert_eq!(to_minor_units(-5.0), None);
        assert_eq!(to_minor_units(0.004), None);
        assert_eq!(to_minor_units(f64::NAN), None);
        assert_eq!(to_minor_units(f64::INFINITY), None);
        assert_eq!(to_minor_units(1e300), None);
    }

    #[test]
    fn blank_email_is_reported_first() {
        let req = parse(json!({ "name": "", "email": "   ", "amountPLN": -1 }));
        assert_eq!(req.validate(), Err(ValidationError::Email));
    }

    #[test]
    fn missing_or_non_string_email_is_rejected() {
        let req = parse(json!({ "name": "Jan", "amountPLN": 5 }));
        assert_eq!(req.validate(), Err(ValidationError::Email));

        let req = parse(json!({ "name": "Jan", "email": 42, "amountPLN": 5 }));
        assert_eq!(req.validate(), Err(ValidationError::Email));
    }

    #[test]
    fn blank_name_is_rejected_after_email() {
        let req = parse(json!({ "name": "\t", "email": "jan@example.com", "amountPLN": 5 }));
        assert_eq!(req.validate(), Err(ValidationError::Name));

        let req = parse(json!({ "name": null, "email": "jan@example.com", "amountPLN": 5 }));
        assert_eq!(req.validate(), Err(ValidationError::Name));
    }

    #[test]
    fn amount_coercion_follows_number_semantics() {
        let ok = |v: serde_json::Value| {
            parse(json!({ "name": "Jan", "email": "jan@example.com", "amountPLN": v }))
                .validate()
                .map(|d| d.amount)
        };
        assert_eq!(ok(json!("25.50")), Ok(2550));
        assert_eq!(ok(json!(" 7 ")), Ok(700));
        assert_eq!(ok(json!(true)), Ok(100));
        assert_eq!(ok(json!("")), Err(ValidationError::Amount));
        assert_eq!(ok(json!("abc")), Err(ValidationError::Amount));
        assert_eq!(ok(json!(null)), Err(ValidationError::Amount));
        assert_eq!(ok(json!([5])), Err(ValidationError::Amount));
        assert_eq!(ok(json!({ "value": 5 })), Err(ValidationError::Amount));
        assert_eq!(ok(json!(0)), Err(ValidationError::Amount));
    }

    #[test]
    fn missing_amount_is_rejected() {
        let req = parse(json!({ "name": "Jan", "email": "jan@example.com" }));
        assert_eq!(req.validate(), Err(ValidationError::Amount));
    }

    #[test]
    fn nan_amount_from_constructor_is_rejected() {
        let req = DonationRequest::new("Jan", "jan@example.com", f64::NAN);
        assert_eq!(req.validate(), Err(ValidationError::Amount));
    }

    #[test]
    fn fields_are_trimmed() {
        let donation = DonationRequest::new("  Jan  ", " jan@example.com\n", 1.0)
            .validate()
            .unwrap();
        assert_eq!(donation.name, "Jan");
        assert_eq!(donation.email, "jan@example.com");
    }
}
