//! Dashboard and report aggregation.
//!
//! Both computations are pure and deterministic: same input set, same
//! output, recomputed on demand with no incremental state. Grouping maps
//! contain only keys that actually occur (no zero-filling).

use crate::errors::AppError;
use crate::models::{LeadRecord, LeadStatus, LoanType};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Role-scoped dashboard counts. `total` always equals the sum of the
/// `by_status` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total: usize,
    pub by_status: BTreeMap<LeadStatus, usize>,
}

/// Month-filtered report over the full lead store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub total: usize,
    pub by_status: BTreeMap<LeadStatus, usize>,
    pub by_loan_type: BTreeMap<LoanType, usize>,
}

/// Summarizes a visible-lead subset into dashboard counts.
pub fn summarize<'a, I>(visible: I) -> DashboardSnapshot
where
    I: IntoIterator<Item = &'a LeadRecord>,
{
    let mut total = 0;
    let mut by_status = BTreeMap::new();
    for lead in visible {
        *by_status.entry(lead.status).or_insert(0) += 1;
        total += 1;
    }
    DashboardSnapshot { total, by_status }
}

/// Builds the monthly report for the given calendar year and month (UTC),
/// grouping the matching leads by status and by loan type.
///
/// Intentionally takes the full store rather than a visible subset: the
/// monthly report aggregates across all leads regardless of the requesting
/// actor's role, while the dashboard stays role-scoped.
pub fn report<'a, I>(all_leads: I, year: i32, month: u32) -> ReportSnapshot
where
    I: IntoIterator<Item = &'a LeadRecord>,
{
    let mut total = 0;
    let mut by_status = BTreeMap::new();
    let mut by_loan_type = BTreeMap::new();
    for lead in all_leads {
        if lead.created_at.year() != year || lead.created_at.month() != month {
            continue;
        }
        *by_status.entry(lead.status).or_insert(0) += 1;
        *by_loan_type.entry(lead.loan_type).or_insert(0) += 1;
        total += 1;
    }
    ReportSnapshot {
        total,
        by_status,
        by_loan_type,
    }
}

/// Parses a "YYYY-MM" report month.
pub fn parse_year_month(input: &str) -> Result<(i32, u32), AppError> {
    let malformed = || AppError::Validation(format!("invalid month '{}', expected YYYY-MM", input));
    let (year_part, month_part) = input.split_once('-').ok_or_else(malformed)?;
    let year: i32 = year_part.parse().map_err(|_| malformed())?;
    let month: u32 = month_part.parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&month) {
        return Err(malformed());
    }
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_month() {
        assert_eq!(parse_year_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_year_month("1999-12").unwrap(), (1999, 12));
    }

    #[test]
    fn rejects_malformed_month() {
        assert!(parse_year_month("2024").is_err());
        assert!(parse_year_month("2024-13").is_err());
        assert!(parse_year_month("2024-00").is_err());
        assert!(parse_year_month("march 2024").is_err());
        assert!(parse_year_month("").is_err());
    }
}
