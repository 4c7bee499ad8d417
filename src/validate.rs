//! Input-boundary validation for new-lead drafts.
//!
//! Strictness lives here; the lifecycle engine's merge step never rejects,
//! it coerces. A draft that passes `validate_draft` produces a record with
//! every applicant-attribute invariant satisfied.

use crate::errors::AppError;
use crate::lifecycle::coerce_flag;
use crate::models::LeadDraft;
use regex::Regex;
use serde_json::Value;

/// Identity-document pattern: 5 letters + 4 digits + 1 letter.
pub fn is_valid_pan(pan: &str) -> bool {
    let pan_regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
    pan_regex.is_match(pan)
}

/// Postal code: exactly 6 digits.
pub fn is_valid_pincode(pincode: &str) -> bool {
    let pincode_regex = Regex::new(r"^[0-9]{6}$").unwrap();
    pincode_regex.is_match(pincode)
}

/// Mobile number: exactly 10 digits.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let mobile_regex = Regex::new(r"^[0-9]{10}$").unwrap();
    mobile_regex.is_match(mobile)
}

/// Basic email shape: local@domain.tld with sane characters.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap();
    email.len() >= 5 && email_regex.is_match(email)
}

fn required<'a>(value: Option<&'a String>, field: &str) -> Result<&'a str, AppError> {
    match value.map(String::as_str).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn check_amount(value: Option<&Value>, field: &str) -> Result<(), AppError> {
    let number = match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| AppError::Validation(format!("{} must be numeric", field)))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Validation(format!("{} must be numeric", field)))?,
        _ => return Err(AppError::Validation(format!("{} is required", field))),
    };
    if !number.is_finite() || number < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be non-negative",
            field
        )));
    }
    Ok(())
}

/// Validates a new-lead draft against the applicant-attribute rules.
///
/// The update path deliberately skips this: edits go through lenient
/// coercion instead, matching observed behavior.
pub fn validate_draft(draft: &LeadDraft) -> Result<(), AppError> {
    if draft.loan_type.is_none() {
        return Err(AppError::Validation("loanType is required".to_string()));
    }
    if draft.profile.is_none() {
        return Err(AppError::Validation("profile is required".to_string()));
    }
    required(draft.first_name.as_ref(), "firstName")?;
    required(draft.last_name.as_ref(), "lastName")?;

    let mobile = required(draft.mobile_number.as_ref(), "mobileNumber")?;
    if !is_valid_mobile(mobile) {
        return Err(AppError::Validation(
            "mobileNumber must be 10 digits".to_string(),
        ));
    }
    let email = required(draft.email_id.as_ref(), "emailId")?;
    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "emailId is not a valid email address".to_string(),
        ));
    }
    if draft.date_of_birth.is_none() {
        return Err(AppError::Validation("dateOfBirth is required".to_string()));
    }
    let pan = required(draft.pan_card.as_ref(), "panCard")?;
    if !is_valid_pan(pan) {
        return Err(AppError::Validation(
            "panCard must match the ABCDE1234F pattern".to_string(),
        ));
    }
    let pincode = required(draft.pincode.as_ref(), "pincode")?;
    if !is_valid_pincode(pincode) {
        return Err(AppError::Validation(
            "pincode must be 6 digits".to_string(),
        ));
    }

    check_amount(draft.monthly_income.as_ref(), "monthlyIncome")?;
    check_amount(draft.loan_amount.as_ref(), "loanAmount")?;

    if !coerce_flag(draft.consent.as_ref()) {
        return Err(AppError::Validation("consent is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pan_pattern() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(is_valid_pan("VWXYZ7890N"));
        assert!(!is_valid_pan("abcde1234f")); // lowercase
        assert!(!is_valid_pan("ABCD1234FG")); // wrong shape
        assert!(!is_valid_pan("ABCDE12345"));
        assert!(!is_valid_pan("ABCDE1234FX")); // too long
        assert!(!is_valid_pan(""));
    }

    #[test]
    fn pincode_pattern() {
        assert!(is_valid_pincode("110001"));
        assert!(!is_valid_pincode("11001"));
        assert!(!is_valid_pincode("1100011"));
        assert!(!is_valid_pincode("11000a"));
    }

    #[test]
    fn mobile_pattern() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("98765-4321"));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("john.doe@email.com"));
        assert!(is_valid_email("a+b@example.co.uk"));
        assert!(!is_valid_email("johnemail.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("a@b"));
    }

    fn complete_draft() -> LeadDraft {
        LeadDraft {
            loan_type: Some(crate::models::LoanType::Personal),
            profile: Some(crate::models::ApplicantProfile::Salaried),
            monthly_income: Some(json!("50000")),
            loan_amount: Some(json!(100000)),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            mobile_number: Some("9876543210".to_string()),
            email_id: Some("john.doe@email.com".to_string()),
            gender: Some(crate::models::Gender::Male),
            date_of_birth: Some(chrono::NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()),
            pan_card: Some("ABCDE1234F".to_string()),
            pincode: Some("110001".to_string()),
            consent: Some(json!(true)),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate_draft(&complete_draft()).is_ok());
    }

    #[test]
    fn consent_must_be_truthy() {
        let mut draft = complete_draft();
        draft.consent = Some(json!(false));
        assert!(validate_draft(&draft).is_err());
        draft.consent = None;
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn non_numeric_income_rejected() {
        let mut draft = complete_draft();
        draft.monthly_income = Some(json!("fifty thousand"));
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn negative_amount_rejected() {
        let mut draft = complete_draft();
        draft.loan_amount = Some(json!(-1));
        assert!(validate_draft(&draft).is_err());
    }
}
