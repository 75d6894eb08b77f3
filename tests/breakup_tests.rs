use compensation_core::breakup::{compute_breakup, PF_CAP_MONTHLY, PF_RATE};

#[test]
fn worked_scenario_650k_matches_hand_computation() {
    let b = compute_breakup(650_000.0, 0.0);

    assert_eq!(b.basic.annual, 390_000.0);
    assert_eq!(b.basic.monthly, 32_500.0);
    assert_eq!(b.hra.annual, 156_000.0);
    assert_eq!(b.hra.monthly, 13_000.0);
    assert_eq!(b.conveyance.annual, 19_200.0);
    assert_eq!(b.medical.annual, 15_000.0);

    assert_eq!(b.employer_pf.monthly, 1_800.0);
    assert_eq!(b.employer_pf.annual, 21_600.0);

    assert_eq!(b.fixed_a.annual, 628_400.0);
    assert_eq!(b.flexi.annual, 48_200.0);
    assert_eq!(b.gross.annual, 628_400.0);
    assert_eq!(b.gross.monthly, 628_400.0 / 12.0);

    assert_eq!(b.deductions.total.monthly, 2_500.0);
    assert_eq!(b.deductions.total.annual, 30_000.0);
    assert_eq!(b.net_take_home_monthly, 628_400.0 / 12.0 - 2_500.0);
}

#[test]
fn pf_is_uncapped_below_the_basic_ceiling() {
    // Basic of 12,000/month sits under the 15,000 ceiling.
    let b = compute_breakup(240_000.0, 0.0);

    assert_eq!(b.basic.monthly, 12_000.0);
    assert_eq!(b.employer_pf.monthly, 1_440.0);
    assert_eq!(b.employer_pf.annual, 17_280.0);
    assert_eq!(b.fixed_a.annual, 222_720.0);
    assert_eq!(b.deductions.total.monthly, 2_140.0);
    assert_eq!(b.net_take_home_monthly, 16_420.0);
}

#[test]
fn pf_hits_the_cap_exactly_at_the_ceiling() {
    // Basic of 15,000/month: 12% of the ceiling is the 1,800 cap.
    let b = compute_breakup(300_000.0, 0.0);

    assert_eq!(b.basic.monthly, 15_000.0);
    assert_eq!(b.employer_pf.monthly, PF_CAP_MONTHLY);
    assert_eq!(b.fixed_a.annual, 278_400.0);
}

#[test]
fn pf_stays_capped_for_high_ctc() {
    let b = compute_breakup(2_000_000.0, 0.0);

    assert_eq!(b.basic.annual, 1_200_000.0);
    assert_eq!(b.basic.monthly, 100_000.0);
    assert_eq!(b.employer_pf.monthly, PF_CAP_MONTHLY);
    assert_eq!(b.hra.annual, 480_000.0);
    assert_eq!(b.fixed_a.annual, 1_978_400.0);
    assert_eq!(b.flexi.annual, 264_200.0);
    assert_eq!(b.net_take_home_monthly, 1_978_400.0 / 12.0 - 2_500.0);
}

#[test]
fn flexi_goes_negative_for_low_ctc() {
    // Current behavior: the residual is not clamped when the fixed heads
    // exceed Component A.
    let b = compute_breakup(150_000.0, 0.0);
    assert_eq!(b.flexi.annual, -21_000.0);

    let b = compute_breakup(300_000.0, 0.0);
    assert_eq!(b.flexi.annual, -7_800.0);
}

#[test]
fn gross_equals_component_a_and_heads_balance() {
    for ctc in [150_000.0, 240_000.0, 300_000.0, 650_000.0, 2_000_000.0] {
        let b = compute_breakup(ctc, 0.0);
        assert_eq!(b.gross.annual, b.fixed_a.annual, "ctc {}", ctc);
        let heads = b.basic.annual
            + b.hra.annual
            + b.conveyance.annual
            + b.medical.annual
            + b.flexi.annual;
        assert!(
            (heads - b.fixed_a.annual).abs() <= 1.0,
            "heads {} vs component A {} for ctc {}",
            heads,
            b.fixed_a.annual,
            ctc
        );
        assert!(b.employer_pf.monthly <= PF_CAP_MONTHLY);
        let uncapped = PF_RATE * b.basic.monthly.min(15_000.0);
        if uncapped <= PF_CAP_MONTHLY {
            assert_eq!(b.employer_pf.monthly, uncapped);
        }
    }
}

#[test]
fn employee_pf_mirrors_employer_pf() {
    let b = compute_breakup(650_000.0, 0.0);
    assert_eq!(b.deductions.employee_pf, b.employer_pf);
}

#[test]
fn tds_flows_through_to_deductions_and_net() {
    let b = compute_breakup(650_000.0, 36_000.0);

    assert_eq!(b.deductions.tds.monthly, 3_000.0);
    assert_eq!(b.deductions.tds.annual, 36_000.0);
    assert_eq!(
        b.net_take_home_monthly,
        b.gross.monthly
            - (b.deductions.employee_pf.monthly + 200.0 + 500.0 + 36_000.0 / 12.0)
    );
}

#[test]
fn compute_breakup_is_idempotent() {
    let first = compute_breakup(650_000.0, 36_000.0);
    let second = compute_breakup(650_000.0, 36_000.0);
    assert_eq!(first, second);
}
