use strato_calendar::{CalendarError, Date360, SeasonAnchor, serial_to_dates, years_of};

#[test]
fn serial_roundtrip_all_valid_dates() {
    for year in [-2, 0, 1, 1999, 2000, 2001] {
        for month in 1..=12u8 {
            for day in 1..=30u8 {
                let date = Date360::new(year, month, day).unwrap();
                let back = Date360::from_serial(date.serial());
                assert_eq!(back, date, "roundtrip failed for {date}");
            }
        }
    }
}

#[test]
fn serial_is_strictly_increasing_by_one() {
    let mut date = Date360::new(1999, 1, 1).unwrap();
    for _ in 0..1000 {
        let next = date.next();
        assert_eq!(next.serial(), date.serial() + 1, "gap after {date}");
        date = next;
    }
}

#[test]
fn batch_decoding_preserves_order() {
    let serials: Vec<f64> = (0..400)
        .map(|i| (Date360::new(2000, 1, 1).unwrap().serial() + i) as f64)
        .collect();
    let dates = serial_to_dates(&serials);
    assert_eq!(dates.len(), 400);
    assert_eq!(dates[0], Date360::new(2000, 1, 1).unwrap());
    assert_eq!(dates[399], Date360::new(2001, 2, 10).unwrap());
    let years = years_of(&dates);
    assert_eq!(years.iter().filter(|&&y| y == 2000).count(), 360);
    assert_eq!(years.iter().filter(|&&y| y == 2001).count(), 40);
}

#[test]
fn malformed_dates_rejected() {
    assert_eq!(
        Date360::new(2000, 12, 31).unwrap_err(),
        CalendarError::InvalidDay { day: 31 }
    );
    assert_eq!(
        Date360::new(2000, 0, 15).unwrap_err(),
        CalendarError::InvalidMonth { month: 0 }
    );
}

#[test]
fn season_days_cover_one_year_exactly() {
    let anchor = SeasonAnchor::default();
    let mut date = Date360::new(2000, 7, 2).unwrap();
    for expected in 1..=360u16 {
        assert_eq!(anchor.locate(date), (2000, expected), "date {date}");
        date = date.next();
    }
    assert_eq!(anchor.locate(date), (2001, 1));
}
