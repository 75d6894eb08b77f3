use serde::{Deserialize, Serialize};

use crate::breakup::{compute_breakup, SalaryBreakup};
use crate::currency::format_inr;
use crate::errors::{OfferError, Result};

/// Flat annual figures in the shape the offer-letter persistence schema
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferLetterFields {
    pub basic_salary: f64,
    pub hra: f64,
    pub conveyance_allowance: f64,
    pub medical_allowance: f64,
    pub flexi_pay: f64,
    pub special_allowance: f64,
    pub other_benefits: f64,
    pub employer_pf: f64,
    pub employee_pf: f64,
    pub professional_tax: f64,
    pub insurance: f64,
    pub income_tax: f64,
    pub other_deductions: f64,
    pub gross_salary: f64,
    pub net_salary: f64,
}

/// Projects a breakup into the flat offer-letter field set.
///
/// `special_allowance` and `other_benefits` stay zero: the schema retains
/// them from an earlier calculation scheme. `other_deductions` repeats the
/// insurance annual for the same reason.
pub fn to_offer_letter_fields(breakup: &SalaryBreakup) -> OfferLetterFields {
    OfferLetterFields {
        basic_salary: breakup.basic.annual,
        hra: breakup.hra.annual,
        conveyance_allowance: breakup.conveyance.annual,
        medical_allowance: breakup.medical.annual,
        flexi_pay: breakup.flexi.annual,
        special_allowance: 0.0,
        other_benefits: 0.0,
        employer_pf: breakup.employer_pf.annual,
        employee_pf: breakup.deductions.employee_pf.annual,
        professional_tax: breakup.deductions.professional_tax.annual,
        insurance: breakup.deductions.insurance.annual,
        income_tax: breakup.deductions.tds.annual,
        other_deductions: breakup.deductions.insurance.annual,
        gross_salary: breakup.fixed_a.annual,
        net_salary: breakup.net_take_home_monthly * 12.0,
    }
}

/// Validates workflow inputs, then computes the breakup.
///
/// This is the entry point the offer-letter creation workflow calls with
/// figures collected from a form or import record.
pub fn breakup_for_offer(ctc_annual: f64, tds_annual: f64) -> Result<SalaryBreakup> {
    if !ctc_annual.is_finite() || ctc_annual <= 0.0 {
        return Err(OfferError::InvalidCtc(ctc_annual));
    }
    if !tds_annual.is_finite() || tds_annual < 0.0 {
        return Err(OfferError::InvalidTds(tds_annual));
    }
    let breakup = compute_breakup(ctc_annual, tds_annual);
    tracing::debug!(
        ctc_annual,
        tds_annual,
        net_monthly = breakup.net_take_home_monthly,
        "computed salary breakup"
    );
    Ok(breakup)
}

/// Labelled annual figures, formatted for the salary annexure table of an
/// offer letter. Rendering the surrounding document is the caller's concern.
pub fn annexure_rows(fields: &OfferLetterFields) -> Vec<(&'static str, String)> {
    vec![
        ("Basic Salary", format_inr(fields.basic_salary, 0)),
        ("House Rent Allowance", format_inr(fields.hra, 0)),
        ("Conveyance Allowance", format_inr(fields.conveyance_allowance, 0)),
        ("Medical Allowance", format_inr(fields.medical_allowance, 0)),
        ("Flexi Pay", format_inr(fields.flexi_pay, 0)),
        ("Gross Salary", format_inr(fields.gross_salary, 0)),
        ("Employer PF", format_inr(fields.employer_pf, 0)),
        ("Employee PF", format_inr(fields.employee_pf, 0)),
        ("Professional Tax", format_inr(fields.professional_tax, 0)),
        ("Insurance", format_inr(fields.insurance, 0)),
        ("Income Tax (TDS)", format_inr(fields.income_tax, 0)),
        ("Net Salary", format_inr(fields.net_salary, 0)),
    ]
}
