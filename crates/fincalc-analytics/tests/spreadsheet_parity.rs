//! Parity tests against spreadsheet financial function results.
//!
//! Expected values are the spreadsheet outputs, rounded to six decimals.

use approx::assert_abs_diff_eq;
use fincalc_analytics::prelude::*;

const PRECISION: f64 = 1e-6;

// =============================================================================
// TVM
// =============================================================================

#[test]
fn test_effect_and_nominal() {
    assert_abs_diff_eq!(effective_rate(0.0525, 4).unwrap(), 0.053543, epsilon = PRECISION);
    assert_abs_diff_eq!(nominal_rate(0.053543, 4).unwrap(), 0.0525, epsilon = PRECISION);
}

#[test]
fn test_pv_fv_pmt_nper_rate() {
    let end = PaymentTiming::End;

    assert_abs_diff_eq!(
        present_value(0.08, 20.0, 500.0, 0.0, end).unwrap(),
        -4909.073704,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        future_value(0.03, 5.0, 200.0, 0.0, end).unwrap(),
        -1061.827162,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        payment(0.29, 7.0, 477.0, 0.0, end).unwrap(),
        -166.305561,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        periods(0.03, -200.0, 828.0, 0.0, end).unwrap(),
        4.486566,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        rate(5.0, -180.797585, 828.0, 0.0, end, None).unwrap(),
        0.03,
        epsilon = PRECISION
    );
}

#[test]
fn test_tvm_parameters_from_json() {
    let params: TvmParameters = serde_json::from_str(
        r#"{ "rate": 0.008333333333333333, "nper": 36, "pv": 8000, "timing": "Begin" }"#,
    )
    .unwrap();

    assert_abs_diff_eq!(params.payment().unwrap(), -256.004130, epsilon = PRECISION);
}

// =============================================================================
// CASH FLOWS
// =============================================================================

#[test]
fn test_npv_irr_mirr() {
    assert_abs_diff_eq!(
        net_present_value(0.1, &[-10000.0, 3000.0, 4200.0, 6800.0]).unwrap(),
        1188.443412,
        epsilon = PRECISION
    );

    let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0, 26000.0];
    assert_abs_diff_eq!(
        internal_rate_of_return(&flows, None).unwrap(),
        0.086630,
        epsilon = PRECISION
    );

    let flows = [-120000.0, 39000.0, 30000.0, 21000.0, 37000.0, 46000.0];
    assert_abs_diff_eq!(
        modified_internal_rate_of_return(&flows, 0.10, 0.14).unwrap(),
        0.134759,
        epsilon = PRECISION
    );
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let one_signed = [100.0, 200.0, 300.0];

    assert_eq!(
        internal_rate_of_return(&one_signed, None).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_eq!(net_present_value(0.1, &[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        periods(0.05, 0.0, 0.0, 100.0, PaymentTiming::End).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_eq!(PaymentTiming::try_from(2).unwrap_err().kind(), ErrorKind::InvalidArgument);

    let config = SolverConfig::default().with_max_iterations(2);
    let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
    let err = internal_rate_of_return_with_config(&flows, 0.9, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConvergenceError);
}

// =============================================================================
// AMORTIZATION
// =============================================================================

#[test]
fn test_ipmt_ppmt() {
    let rate = 0.1 / 12.0;
    let end = PaymentTiming::End;
    let begin = PaymentTiming::Begin;

    assert_abs_diff_eq!(
        interest_payment(rate, 3, 36.0, 8000.0, 0.0, end).unwrap(),
        -63.462189,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        principal_payment(rate, 3, 36.0, 8000.0, 0.0, end).unwrap(),
        -194.675308,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        interest_payment(rate, 3, 36.0, 8000.0, 0.0, begin).unwrap(),
        -62.937708,
        epsilon = PRECISION
    );
    assert_abs_diff_eq!(
        principal_payment(rate, 3, 36.0, 8000.0, 0.0, begin).unwrap(),
        -193.066421,
        epsilon = PRECISION
    );
}

#[test]
fn test_schedule_agrees_with_ipmt() {
    let rate = 0.1 / 12.0;
    let schedule = AmortizationSchedule::new(rate, 36.0, 8000.0, 0.0, PaymentTiming::End).unwrap();

    for entry in schedule.iter().step_by(5) {
        let ipmt =
            interest_payment(rate, entry.period, 36.0, 8000.0, 0.0, PaymentTiming::End).unwrap();
        assert_eq!(entry.interest, ipmt);
    }
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_solves_do_not_interfere() {
    let inputs: Vec<(f64, f64, f64)> = vec![
        (20.0, -36.157534, 355.0),
        (5.0, -180.797585, 828.0),
        (2.0, -295.208163, 344.0),
    ];
    let expected = [0.08, 0.03, 0.45];

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..12)
            .map(|i| {
                let (nper, pmt, pv) = inputs[i % inputs.len()];
                let flows = vec![-70000.0, 12000.0, 15000.0, 18000.0, 21000.0 + i as f64];
                s.spawn(move || {
                    let r = rate(nper, pmt, pv, 0.0, PaymentTiming::End, None).unwrap();
                    let irr = internal_rate_of_return(&flows, None).unwrap();
                    (i, r, irr, flows)
                })
            })
            .collect();

        for handle in handles {
            let (i, r, irr, flows) = handle.join().unwrap();
            assert_abs_diff_eq!(r, expected[i % expected.len()], epsilon = PRECISION);
            assert!(net_present_value(irr, &flows).unwrap().abs() < PRECISION);
        }
    });
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<TvmParameters>();
    assert_send_sync::<AmortizationSchedule>();
    assert_send_sync::<AmortizationIter>();
    assert_send_sync::<AnalyticsConfig>();
    assert_send_sync::<FinanceError>();
}
