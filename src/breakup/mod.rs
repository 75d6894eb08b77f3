use serde::{Deserialize, Serialize};

/// Fixed monthly conveyance allowance head.
pub const CONVEYANCE_MONTHLY: f64 = 1600.0;
/// Fixed monthly medical allowance head.
pub const MEDICAL_MONTHLY: f64 = 1250.0;
/// Statutory Provident Fund contribution rate on basic pay.
pub const PF_RATE: f64 = 0.12;
/// Statutory ceiling on the monthly basic considered for PF.
pub const PF_BASIC_CEILING_MONTHLY: f64 = 15000.0;
/// Monthly PF contribution cap, 12% of the basic ceiling.
pub const PF_CAP_MONTHLY: f64 = 1800.0;
/// Fixed monthly professional tax deduction.
pub const PROFESSIONAL_TAX_MONTHLY: f64 = 200.0;
/// Fixed monthly insurance premium deduction.
pub const INSURANCE_MONTHLY: f64 = 500.0;

const MONTHS: f64 = 12.0;

/// A single pay head expressed both monthly and annually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayComponent {
    pub monthly: f64,
    pub annual: f64,
}

impl PayComponent {
    fn from_annual(annual: f64) -> Self {
        Self {
            monthly: annual / MONTHS,
            annual,
        }
    }

    fn from_monthly(monthly: f64) -> Self {
        Self {
            monthly,
            annual: monthly * MONTHS,
        }
    }
}

/// Deduction heads withheld from gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub employee_pf: PayComponent,
    pub professional_tax: PayComponent,
    pub insurance: PayComponent,
    pub tds: PayComponent,
    pub total: PayComponent,
}

/// Full decomposition of an annual CTC into pay heads and deductions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakup {
    pub basic: PayComponent,
    pub hra: PayComponent,
    pub conveyance: PayComponent,
    pub medical: PayComponent,
    pub flexi: PayComponent,
    /// Component A: CTC minus the employer PF contribution.
    pub fixed_a: PayComponent,
    pub gross: PayComponent,
    pub employer_pf: PayComponent,
    pub deductions: Deductions,
    pub net_take_home_monthly: f64,
}

/// Decomposes an annual CTC into the fixed Indian-payroll heads and the
/// resulting net monthly take-home.
///
/// Pure and total for finite inputs. Performs no range validation: callers
/// must reject non-positive CTC and negative TDS before invoking (see
/// [`crate::offer::breakup_for_offer`]).
///
/// Flexi pay is the residual of Component A after the fixed heads and can go
/// negative for low CTC figures; it is deliberately not clamped.
pub fn compute_breakup(ctc_annual: f64, tds_annual: f64) -> SalaryBreakup {
    let basic_annual = (0.60 * ctc_annual).round();
    let basic = PayComponent::from_annual(basic_annual);
    let hra = PayComponent::from_annual((0.40 * basic_annual).round());
    let conveyance = PayComponent::from_monthly(CONVEYANCE_MONTHLY);
    let medical = PayComponent::from_monthly(MEDICAL_MONTHLY);

    let pf_base = basic.monthly.min(PF_BASIC_CEILING_MONTHLY);
    let employer_pf = PayComponent::from_monthly((PF_RATE * pf_base).min(PF_CAP_MONTHLY));

    let fixed_a = PayComponent::from_annual(ctc_annual - employer_pf.annual);
    let flexi = PayComponent::from_annual(
        fixed_a.annual - (basic.annual + hra.annual + conveyance.annual + medical.annual),
    );
    // Flexi balances the heads against Component A, so gross is Component A
    // by construction.
    let gross = fixed_a;

    let employee_pf = employer_pf;
    let professional_tax = PayComponent::from_monthly(PROFESSIONAL_TAX_MONTHLY);
    let insurance = PayComponent::from_monthly(INSURANCE_MONTHLY);
    let tds = PayComponent::from_annual(tds_annual);
    let total = PayComponent {
        monthly: employee_pf.monthly + professional_tax.monthly + insurance.monthly + tds.monthly,
        annual: employee_pf.annual + professional_tax.annual + insurance.annual + tds.annual,
    };

    SalaryBreakup {
        net_take_home_monthly: gross.monthly - total.monthly,
        basic,
        hra,
        conveyance,
        medical,
        flexi,
        fixed_a,
        gross,
        employer_pf,
        deductions: Deductions {
            employee_pf,
            professional_tax,
            insurance,
            tds,
            total,
        },
    }
}
