/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use chrono::{Datelike, TimeZone, Utc};
use lead_crm_api::aggregate::{report, summarize};
use lead_crm_api::lifecycle::{apply_update, coerce_amount, coerce_flag, create_lead};
use lead_crm_api::models::{
    ApplicantProfile, Gender, Identity, LeadDraft, LeadPatch, LeadRecord, LeadStatus, LoanType,
    Role,
};
use lead_crm_api::policy::visible_leads;
use lead_crm_api::store::LeadStore;
use proptest::prelude::*;
use serde_json::json;
use uuid::Uuid;

const OWNERS: [&str; 3] = ["partner001", "partner002", "admin001"];

fn statuses() -> Vec<LeadStatus> {
    vec![
        LeadStatus::New,
        LeadStatus::Processing,
        LeadStatus::DocsPending,
        LeadStatus::Approved,
        LeadStatus::Rejected,
    ]
}

fn loan_types() -> Vec<LoanType> {
    vec![
        LoanType::Personal,
        LoanType::Home,
        LoanType::Car,
        LoanType::Business,
    ]
}

fn mk_lead(owner: &str, status: LeadStatus, loan_type: LoanType, month: u32) -> LeadRecord {
    LeadRecord {
        id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(2024, month, 10, 8, 0, 0).unwrap(),
        created_by: owner.to_string(),
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

fn partner(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        display_name: "Some Partner".to_string(),
        role: Role::Partner,
    }
}

fn admin() -> Identity {
    Identity {
        id: "admin001".to_string(),
        display_name: "Admin User".to_string(),
        role: Role::Admin,
    }
}

fn lead_strategy() -> impl Strategy<Value = LeadRecord> {
    (
        prop::sample::select(OWNERS.to_vec()),
        prop::sample::select(statuses()),
        prop::sample::select(loan_types()),
        1u32..=12u32,
    )
        .prop_map(|(owner, status, loan_type, month)| mk_lead(owner, status, loan_type, month))
}

// Property: visibility partitions the store exactly by creator
proptest! {
    #[test]
    fn partner_visibility_is_exactly_ownership(
        leads in prop::collection::vec(lead_strategy(), 0..24)
    ) {
        for owner in OWNERS {
            let identity = partner(owner);
            let visible = visible_leads(&identity, &leads);
            prop_assert!(visible.iter().all(|l| l.created_by == owner));
            let expected = leads.iter().filter(|l| l.created_by == owner).count();
            prop_assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn admin_visibility_is_the_full_store_in_order(
        leads in prop::collection::vec(lead_strategy(), 0..24)
    ) {
        let visible = visible_leads(&admin(), &leads);
        prop_assert_eq!(visible.len(), leads.len());
        for (seen, expected) in visible.iter().zip(leads.iter()) {
            prop_assert_eq!(seen.id, expected.id);
        }
    }
}

// Property: dashboard counts always reconcile
proptest! {
    #[test]
    fn summarize_counts_reconcile(
        leads in prop::collection::vec(lead_strategy(), 0..32)
    ) {
        let snapshot = summarize(leads.iter());
        prop_assert_eq!(snapshot.total, leads.len());
        prop_assert_eq!(snapshot.by_status.values().sum::<usize>(), snapshot.total);
        // No zero-filled keys
        prop_assert!(snapshot.by_status.values().all(|&count| count >= 1));
    }

    #[test]
    fn report_counts_reconcile(
        leads in prop::collection::vec(lead_strategy(), 0..32),
        month in 1u32..=12u32
    ) {
        let snapshot = report(leads.iter(), 2024, month);
        let expected = leads
            .iter()
            .filter(|l| l.created_at.month() == month)
            .count();
        prop_assert_eq!(snapshot.total, expected);
        prop_assert_eq!(snapshot.by_status.values().sum::<usize>(), snapshot.total);
        prop_assert_eq!(snapshot.by_loan_type.values().sum::<usize>(), snapshot.total);
        // Deterministic: same input, same output
        prop_assert_eq!(snapshot, report(leads.iter(), 2024, month));
    }
}

// Property: coercion never panics and never breaks the non-negative invariant
proptest! {
    #[test]
    fn amount_coercion_never_panics_on_strings(input in "\\PC*") {
        let value = json!(input);
        let amount = coerce_amount(Some(&value));
        prop_assert!(amount >= 0.0 && amount.is_finite());
    }

    #[test]
    fn amount_coercion_clamps_all_numbers(input in proptest::num::f64::ANY) {
        prop_assume!(!input.is_nan());
        let value = serde_json::Number::from_f64(input).map(serde_json::Value::Number);
        let amount = coerce_amount(value.as_ref());
        prop_assert!(amount >= 0.0 && amount.is_finite());
        if input.is_finite() && input > 0.0 {
            prop_assert_eq!(amount, input);
        }
    }

    #[test]
    fn numeric_strings_round_trip_through_coercion(amount in 0u32..10_000_000u32) {
        let value = json!(amount.to_string());
        prop_assert_eq!(coerce_amount(Some(&value)), f64::from(amount));
    }

    #[test]
    fn flag_coercion_matches_js_truthiness_for_strings(input in "\\PC*") {
        let value = json!(input.clone());
        prop_assert_eq!(coerce_flag(Some(&value)), !input.is_empty());
    }
}

// Property: re-applying an update is idempotent
proptest! {
    #[test]
    fn apply_update_is_idempotent(
        income in "[0-9]{1,7}",
        first_name in "[A-Za-z]{1,12}",
        status in prop::sample::select(statuses())
    ) {
        let mut store = LeadStore::new();
        let owner = partner("partner001");
        let created = create_lead(
            &mut store,
            &owner,
            LeadDraft {
                loan_type: Some(LoanType::Personal),
                profile: Some(ApplicantProfile::Salaried),
                consent: Some(json!(true)),
                ..LeadDraft::default()
            },
        );

        let patch = LeadPatch {
            first_name: Some(first_name),
            monthly_income: Some(json!(income)),
            loan_amount: Some(json!("250000")),
            consent: Some(json!(true)),
            status: Some(status),
            ..LeadPatch::default()
        };

        let once = apply_update(&mut store, &owner, created.id, patch.clone()).unwrap();
        let twice = apply_update(&mut store, &owner, created.id, patch).unwrap();
        prop_assert_eq!(once, twice);
    }
}
