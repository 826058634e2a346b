use std::f64::consts::PI;

use approx::assert_relative_eq;
use strato_filter::{FilterError, LowPassConfig, SosFilter, lp_filter, smooth};

fn sinusoid(n: usize, period_days: f64) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * i as f64 / period_days).sin())
        .collect()
}

#[test]
fn lowpass_passes_constant_after_transient() {
    let u = vec![10.0; 8000];
    let out = lp_filter(&u, 4).unwrap();
    for &v in &out[6000..] {
        assert_relative_eq!(v, 10.0, epsilon = 1e-6);
    }
}

#[test]
fn lowpass_removes_short_periods() {
    let u = sinusoid(6000, 10.0);
    let out = lp_filter(&u, 4).unwrap();
    let peak = out[3500..].iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    assert!(peak < 1e-6, "10-day oscillation leaked with amplitude {peak}");
}

#[test]
fn lowpass_keeps_qbo_periods() {
    // ~28-month oscillation, far below the cutoff frequency.
    let u = sinusoid(8000, 840.0);
    let out = lp_filter(&u, 4).unwrap();
    let peak = out[4000..].iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    assert!((peak - 1.0).abs() < 0.02, "QBO amplitude changed to {peak}");
}

#[test]
fn filter_is_stateless_between_calls() {
    let filter = LowPassConfig::default().design().unwrap();
    let u = sinusoid(500, 200.0);
    assert_eq!(filter.apply(&u), filter.apply(&u));
}

#[test]
fn lowpass_output_length_matches() {
    let u = sinusoid(37, 5.0);
    assert_eq!(lp_filter(&u, 4).unwrap().len(), 37);
}

#[test]
fn higher_order_has_steeper_rolloff() {
    let u = sinusoid(6000, 60.0);
    let low = SosFilter::butterworth_lowpass(2, 1.0 / 120.0).unwrap().apply(&u);
    let high = SosFilter::butterworth_lowpass(9, 1.0 / 120.0).unwrap().apply(&u);
    let tail_peak = |x: &[f64]| x[4000..].iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    assert!(tail_peak(&high) < tail_peak(&low));
}

#[test]
fn smooth_flattens_monthly_noise() {
    // A 30-day oscillation averages out exactly over a 150-day window.
    let u = sinusoid(900, 30.0);
    let out = smooth(&u, 5).unwrap();
    for &v in &out[100..800] {
        assert_relative_eq!(v, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn smooth_rejects_zero_months() {
    assert_eq!(smooth(&[1.0, 2.0], 0).unwrap_err(), FilterError::ZeroWindow);
}
