//! Demo fixture data: two partner accounts and five leads in assorted
//! states, enough to light up every dashboard and report path on a fresh
//! instance.

use crate::directory::PartnerDirectory;
use crate::errors::AppError;
use crate::models::{
    ApplicantProfile, Gender, LeadDocument, LeadRecord, LeadStatus, LoanType,
};
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

pub const DEMO_ADMIN: &str = "admin001";
pub const DEMO_PARTNER_ONE: &str = "partner001";
pub const DEMO_PARTNER_TWO: &str = "partner002";

/// Registers the two demo partners with stable ids.
pub fn demo_partners(directory: &mut PartnerDirectory) -> Result<(), AppError> {
    directory.add_partner_with_id(DEMO_PARTNER_ONE, "Partner One", "partner1", "partnerpass1")?;
    directory.add_partner_with_id(DEMO_PARTNER_TWO, "Partner Two", "partner2", "partnerpass2")?;
    Ok(())
}

// Shared skeleton so each fixture only spells out what differs.
fn base_lead(days_ago: i64) -> LeadRecord {
    LeadRecord {
        id: Uuid::new_v4(),
        created_at: Utc::now() - Duration::days(days_ago),
        created_by: DEMO_ADMIN.to_string(),
        source: "Admin".to_string(),
        loan_type: LoanType::Personal,
        profile: ApplicantProfile::Salaried,
        monthly_income: 0.0,
        loan_amount: 0.0,
        first_name: String::new(),
        last_name: String::new(),
        mobile_number: String::new(),
        email_id: String::new(),
        gender: Gender::Other,
        date_of_birth: None,
        pan_card: String::new(),
        pincode: String::new(),
        consent: true,
        status: LeadStatus::New,
        documents: Vec::new(),
    }
}

/// The five demo leads, newest first (matching store ordering).
pub fn demo_leads() -> Vec<LeadRecord> {
    vec![
        LeadRecord {
            loan_type: LoanType::Home,
            monthly_income: 90000.0,
            loan_amount: 3_000_000.0,
            first_name: "David".to_string(),
            last_name: "Wilson".to_string(),
            mobile_number: "9876543214".to_string(),
            email_id: "david.wilson@email.com".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1988, 12, 1),
            pan_card: "VWXYZ7890N".to_string(),
            pincode: "700001".to_string(),
            status: LeadStatus::DocsPending,
            ..base_lead(0)
        },
        LeadRecord {
            created_by: DEMO_PARTNER_TWO.to_string(),
            source: "Partner Two".to_string(),
            loan_type: LoanType::Car,
            monthly_income: 75000.0,
            loan_amount: 500_000.0,
            first_name: "Peter".to_string(),
            last_name: "Jones".to_string(),
            mobile_number: "9876543212".to_string(),
            email_id: "peter.jones@email.com".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1995, 2, 25),
            pan_card: "LMNOP9012L".to_string(),
            pincode: "400001".to_string(),
            status: LeadStatus::Approved,
            documents: vec![LeadDocument {
                name: "OfferLetter.pdf".to_string(),
                locator: "#OfferLetter.pdf".to_string(),
            }],
            ..base_lead(1)
        },
        LeadRecord {
            created_by: DEMO_PARTNER_ONE.to_string(),
            source: "Partner One".to_string(),
            profile: ApplicantProfile::SelfEmployed,
            monthly_income: 60000.0,
            loan_amount: 150_000.0,
            first_name: "Mary".to_string(),
            last_name: "Brown".to_string(),
            mobile_number: "9876543213".to_string(),
            email_id: "mary.brown@email.com".to_string(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1992, 8, 10),
            pan_card: "QRSTU3456M".to_string(),
            pincode: "600001".to_string(),
            status: LeadStatus::Rejected,
            ..base_lead(2)
        },
        LeadRecord {
            loan_type: LoanType::Home,
            profile: ApplicantProfile::SelfEmployed,
            monthly_income: 120_000.0,
            loan_amount: 5_000_000.0,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            mobile_number: "9876543211".to_string(),
            email_id: "jane.smith@email.com".to_string(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1985, 11, 20),
            pan_card: "FGHIJ5678K".to_string(),
            pincode: "560001".to_string(),
            status: LeadStatus::Processing,
            ..base_lead(3)
        },
        LeadRecord {
            created_by: DEMO_PARTNER_ONE.to_string(),
            source: "Partner One".to_string(),
            monthly_income: 50000.0,
            loan_amount: 100_000.0,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            mobile_number: "9876543210".to_string(),
            email_id: "john.doe@email.com".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15),
            pan_card: "ABCDE1234F".to_string(),
            pincode: "110001".to_string(),
            ..base_lead(5)
        },
    ]
}
