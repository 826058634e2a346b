use strato_calendar::{Date360, SeasonAnchor, year360_sequence};
use strato_ssw::{DailySeries, split_by_doy};

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

#[test]
fn whole_calendar_years_gain_one_row() {
    for n_years in 1..6 {
        let dates = year360_sequence(n_years, 1990);
        let series = DailySeries::new(dates, ramp(360 * n_years)).unwrap();
        let m = split_by_doy(&series, SeasonAnchor::default());
        assert_eq!(m.n_rows(), n_years + 1, "{n_years} years");
        assert_eq!(m.filled(), 360 * n_years);
        assert_eq!(m.years().first(), Some(&1989));
        assert_eq!(m.years().last(), Some(&(1990 + n_years as i32 - 1)));
    }
}

#[test]
fn values_keep_their_order_across_rows() {
    let dates = year360_sequence(3, 2000);
    let series = DailySeries::new(dates, ramp(1080)).unwrap();
    let m = split_by_doy(&series, SeasonAnchor::default());
    let flat: Vec<f64> = m.rows().flatten().copied().filter(|v| !v.is_nan()).collect();
    assert_eq!(flat, ramp(1080));
}

#[test]
fn january_start_pads_first_half_of_row_zero() {
    let series = DailySeries::new(year360_sequence(2, 2000), ramp(720)).unwrap();
    let m = split_by_doy(&series, SeasonAnchor::default());
    // Jan 1 is day 180 of season 1999.
    assert!(m.row(0)[..179].iter().all(|v| v.is_nan()));
    assert_eq!(m.row(0)[179], 0.0);
    assert_eq!(m.date(0, 179), Date360::new(2000, 1, 1).unwrap());
    // Dec 30 2001 is day 179 of season 2001; the rest of the row is padding.
    assert_eq!(m.row(2)[178], 719.0);
    assert!(m.row(2)[179..].iter().all(|v| v.is_nan()));
}

#[test]
fn every_cell_maps_back_to_its_date() {
    let start = Date360::new(1995, 10, 17).unwrap();
    let series = DailySeries::starting_at(start, ramp(1234)).unwrap();
    let m = split_by_doy(&series, SeasonAnchor::default());
    for r in 0..m.n_rows() {
        for (i, &v) in m.row(r).iter().enumerate() {
            if !v.is_nan() {
                assert_eq!(m.date(r, i), series.dates()[v as usize]);
            }
        }
    }
}

#[test]
fn custom_anchor() {
    let anchor = SeasonAnchor::new(1, 1).unwrap();
    let series = DailySeries::new(year360_sequence(2, 2000), ramp(720)).unwrap();
    let m = split_by_doy(&series, anchor);
    // Jan 1 2000 closes season 1999; Jan 2 opens season 2000.
    assert_eq!(m.years(), vec![1999, 2000, 2001]);
    assert_eq!(m.row(0)[359], 0.0);
    assert_eq!(m.row(1)[0], 1.0);
}
