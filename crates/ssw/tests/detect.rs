use strato_calendar::{Date360, SeasonAnchor, year360_sequence};
use strato_ssw::{DailySeries, SkipReason, SswConfig, SswError, detect_ssws};

/// A season row from `(first_day, last_day_inclusive, value)` spans.
fn season(spans: &[(usize, usize, f64)]) -> Vec<f64> {
    let mut row = vec![0.0; 360];
    for &(a, b, v) in spans {
        row[a..=b].fill(v);
    }
    row
}

/// Quiet winter: westerlies from day 30 to day 249.
fn quiet() -> Vec<f64> {
    season(&[(0, 29, -5.0), (30, 249, 20.0), (250, 359, -8.0)])
}

/// Winter with one major warming on day 130.
fn disturbed() -> Vec<f64> {
    season(&[
        (0, 29, -5.0),
        (30, 129, 20.0),
        (130, 144, -3.0),
        (145, 249, 15.0),
        (250, 359, -10.0),
    ])
}

/// Easterlies all year.
fn collapsed() -> Vec<f64> {
    season(&[(0, 359, -4.0)])
}

/// Series beginning on the day after the anchor, one season per slice.
fn seasons(rows: &[Vec<f64>]) -> DailySeries {
    let start = Date360::new(2000, 7, 2).unwrap();
    DailySeries::starting_at(start, rows.concat()).unwrap()
}

#[test]
fn finds_ssw_and_reports_skipped_seasons() {
    let series = seasons(&[quiet(), disturbed(), collapsed(), quiet(), quiet()]);
    let result = detect_ssws(&series, &SswConfig::default()).unwrap();

    assert_eq!(result.n_seasons(), 5);
    assert_eq!(result.n_processed(), 2);
    assert_eq!(result.ssw().len(), 1);
    let event = result.ssw()[0];
    assert_eq!((event.season, event.season_year, event.day), (1, 2001, 130));
    assert_eq!(event.date(), Date360::new(2001, 11, 12).unwrap());
    assert_eq!(
        event.serial,
        SeasonAnchor::default().serial_of(2001, 131)
    );

    assert_eq!(result.skipped().len(), 1);
    assert_eq!(result.skipped()[0].season, 2);
    assert_eq!(result.skipped()[0].reason, SkipReason::NoVortexFormation);
    assert!((result.ssw_frequency() - 0.5).abs() < 1e-12);
}

#[test]
fn boundary_rows_are_never_analysed() {
    // The disturbed winters sit in the first and last rows only.
    let series = seasons(&[disturbed(), quiet(), disturbed()]);
    let result = detect_ssws(&series, &SswConfig::default()).unwrap();
    assert!(result.ssw().is_empty());
    assert_eq!(result.n_processed(), 1);
}

#[test]
fn events_are_ordered_by_season() {
    let series = seasons(&[quiet(), disturbed(), quiet(), disturbed(), disturbed(), quiet()]);
    let result = detect_ssws(&series, &SswConfig::default()).unwrap();
    let found: Vec<usize> = result.ssw().iter().map(|e| e.season).collect();
    assert_eq!(found, vec![1, 3, 4]);
}

#[test]
fn parallel_matches_sequential() {
    let rows: Vec<Vec<f64>> = (0..30)
        .map(|i| match i % 3 {
            0 => quiet(),
            1 => disturbed(),
            _ => collapsed(),
        })
        .collect();
    let series = seasons(&rows);
    let sequential = detect_ssws(&series, &SswConfig::default()).unwrap();
    let parallel = detect_ssws(&series, &SswConfig::default().with_parallel(true)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn detection_is_idempotent() {
    let series = seasons(&[quiet(), disturbed(), quiet(), disturbed()]);
    let config = SswConfig::default();
    let first = detect_ssws(&series, &config).unwrap();
    let second = detect_ssws(&series, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn strong_vortex_event_dates() {
    let strong = season(&[
        (0, 29, -5.0),
        (30, 99, 30.0),
        (100, 149, 60.0),
        (150, 249, 30.0),
        (250, 359, -5.0),
    ]);
    let series = seasons(&[quiet(), strong, quiet()]);
    let result = detect_ssws(&series, &SswConfig::default()).unwrap();
    assert!(result.ssw().is_empty());
    assert_eq!(result.spv().len(), 1);
    assert_eq!(result.spv()[0].day, 100);
    assert_eq!(result.spv()[0].season_year, 2001);
}

#[test]
fn one_calendar_year_is_insufficient() {
    let series = DailySeries::new(year360_sequence(1, 2000), vec![10.0; 360]).unwrap();
    let result = detect_ssws(&series, &SswConfig::default()).unwrap();
    assert!(result.is_insufficient());
    assert_eq!(result.n_seasons(), 2);
    assert_eq!(result.n_processed(), 0);
    assert!(result.ssw().is_empty());
    assert!(result.spv().is_empty());
    assert!(result.skipped().is_empty());
    assert!(result.ssw_frequency().is_nan());
}

#[test]
fn invalid_config_is_rejected() {
    let series = seasons(&[quiet(), quiet(), quiet()]);
    let config = SswConfig::default().with_min_separation(0);
    assert!(matches!(
        detect_ssws(&series, &config),
        Err(SswError::InvalidConfig(_))
    ));
}
