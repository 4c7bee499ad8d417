/// Unit tests for the dashboard and monthly-report aggregation
use chrono::{TimeZone, Utc};
use lead_crm_api::aggregate::{report, summarize};
use lead_crm_api::models::{
    ApplicantProfile, Gender, LeadRecord, LeadStatus, LoanType,
};
use uuid::Uuid;

fn lead_in_month(year: i32, month: u32, status: LeadStatus, loan_type: LoanType) -> LeadRecord {
    LeadRecord {
        id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
        created_by: "partner001".to_string(),
        source: "Partner One".to_string(),
        loan_type,
        profile: ApplicantProfile::Salaried,
        monthly_income: 50000.0,
        loan_amount: 100000.0,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        mobile_number: "9876543210".to_string(),
        email_id: "john.doe@email.com".to_string(),
        gender: Gender::Male,
        date_of_birth: None,
        pan_card: "ABCDE1234F".to_string(),
        pincode: "110001".to_string(),
        consent: true,
        status,
        documents: Vec::new(),
    }
}

#[cfg(test)]
mod dashboard_tests {
    use super::*;

    #[test]
    fn counts_by_status_without_zero_filling() {
        let leads = vec![
            lead_in_month(2024, 1, LeadStatus::New, LoanType::Personal),
            lead_in_month(2024, 1, LeadStatus::New, LoanType::Home),
            lead_in_month(2024, 1, LeadStatus::Approved, LoanType::Car),
        ];
        let snapshot = summarize(leads.iter());

        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.by_status.get(&LeadStatus::New), Some(&2));
        assert_eq!(snapshot.by_status.get(&LeadStatus::Approved), Some(&1));
        assert!(!snapshot.by_status.contains_key(&LeadStatus::Rejected));
        assert_eq!(snapshot.by_status.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_snapshot() {
        let snapshot = summarize(std::iter::empty());
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.by_status.is_empty());
    }

    #[test]
    fn total_equals_sum_of_status_counts() {
        let leads: Vec<LeadRecord> = (0..7)
            .map(|i| {
                let status = match i % 3 {
                    0 => LeadStatus::New,
                    1 => LeadStatus::Processing,
                    _ => LeadStatus::DocsPending,
                };
                lead_in_month(2024, 6, status, LoanType::Personal)
            })
            .collect();
        let snapshot = summarize(leads.iter());
        assert_eq!(snapshot.total, leads.len());
        assert_eq!(snapshot.by_status.values().sum::<usize>(), snapshot.total);
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn filters_to_the_requested_month() {
        let leads = vec![
            lead_in_month(2024, 3, LeadStatus::New, LoanType::Personal),
            lead_in_month(2024, 3, LeadStatus::Processing, LoanType::Personal),
            lead_in_month(2024, 3, LeadStatus::Approved, LoanType::Home),
            lead_in_month(2024, 2, LeadStatus::New, LoanType::Car),
            lead_in_month(2023, 3, LeadStatus::New, LoanType::Business),
        ];
        let snapshot = report(leads.iter(), 2024, 3);

        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.by_loan_type.get(&LoanType::Personal), Some(&2));
        assert_eq!(snapshot.by_loan_type.get(&LoanType::Home), Some(&1));
        assert!(!snapshot.by_loan_type.contains_key(&LoanType::Car));
        assert!(!snapshot.by_loan_type.contains_key(&LoanType::Business));
        assert_eq!(snapshot.by_status.values().sum::<usize>(), 3);
    }

    #[test]
    fn month_with_no_leads_is_empty() {
        let leads = vec![lead_in_month(2024, 3, LeadStatus::New, LoanType::Personal)];
        let snapshot = report(leads.iter(), 2024, 4);
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.by_status.is_empty());
        assert!(snapshot.by_loan_type.is_empty());
    }

    #[test]
    fn same_input_produces_identical_output() {
        let leads = vec![
            lead_in_month(2024, 3, LeadStatus::New, LoanType::Personal),
            lead_in_month(2024, 3, LeadStatus::Rejected, LoanType::Home),
        ];
        assert_eq!(report(leads.iter(), 2024, 3), report(leads.iter(), 2024, 3));
    }

    #[test]
    fn year_must_match_not_just_month() {
        let leads = vec![
            lead_in_month(2024, 3, LeadStatus::New, LoanType::Personal),
            lead_in_month(2025, 3, LeadStatus::New, LoanType::Personal),
        ];
        assert_eq!(report(leads.iter(), 2024, 3).total, 1);
    }
}
