use std::sync::OnceLock;

use regex::Regex;

use paydesk_types::api::{AmountInput, CreatePaymentRequest, ValidationErrors};

/// A submission that passed every field check. Only this type reaches the
/// store, so no partially-valid record can ever be persisted.
#[derive(Debug)]
pub struct ValidPayment {
    pub email: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub message: String,
}

/// Check every field and collect all failures, not just the first, so the
/// caller can fix the whole form in one round trip.
pub fn validate(req: &CreatePaymentRequest) -> Result<ValidPayment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let email = non_empty(req.email.as_deref());
    match email {
        None => errors.add("email", "The email field is required."),
        Some(email) if !is_valid_email(email) => {
            errors.add("email", "The email must be a valid email address.");
        }
        Some(_) => {}
    }

    let amount = match &req.amount {
        None => {
            errors.add("amount", "The amount field is required.");
            None
        }
        Some(AmountInput::Text(raw)) if raw.trim().is_empty() => {
            errors.add("amount", "The amount field is required.");
            None
        }
        Some(input) => match parse_amount(input) {
            None => {
                errors.add("amount", "The amount must be an integer.");
                None
            }
            Some(n) if n < 1 => {
                errors.add("amount", "The amount must be at least 1.");
                None
            }
            Some(n) => Some(n),
        },
    };

    let currency = non_empty(req.currency.as_deref());
    if currency.is_none() {
        errors.add("currency", "The currency field is required.");
    }

    match (email, amount, currency) {
        (Some(email), Some(amount), Some(currency)) if errors.is_empty() => Ok(ValidPayment {
            email: email.to_string(),
            amount,
            currency: currency.to_string(),
            name: req.name.clone().unwrap_or_default(),
            description: req.description.clone().unwrap_or_default(),
            message: req.message.clone().unwrap_or_default(),
        }),
        _ => Err(errors),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_amount(input: &AmountInput) -> Option<i64> {
    match input {
        AmountInput::Integer(n) => Some(*n),
        AmountInput::Text(raw) => raw.trim().parse().ok(),
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    });
    regex.is_match(email)
}
