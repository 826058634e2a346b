//! Integration tests for reading zonal wind from NetCDF fixtures.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use strato_calendar::Date360;
use strato_io::{IoError, ReaderConfig, read_zonal_wind};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Helper: programmatic NetCDF fixture builder
// ---------------------------------------------------------------------------

/// A minimal MiMA-like history file.
struct FixtureBuilder {
    nt: usize,
    np: usize,
    ny: usize,
    nx: usize,
    /// Flat wind data in `[t, pfull, lat, lon]` order.
    ucomp: Vec<f64>,
    units: String,
    calendar: Option<String>,
    fill_value: Option<f64>,
    include_wind: bool,
}

impl FixtureBuilder {
    /// Wind is `t + 10 p + 100 y + x`, so its zonal mean is
    /// `t + 10 p + 100 y + (nx - 1) / 2`.
    fn new(nt: usize, np: usize, ny: usize, nx: usize) -> Self {
        let mut ucomp = Vec::with_capacity(nt * np * ny * nx);
        for t in 0..nt {
            for p in 0..np {
                for y in 0..ny {
                    for x in 0..nx {
                        ucomp.push((t + 10 * p + 100 * y + x) as f64);
                    }
                }
            }
        }
        Self {
            nt,
            np,
            ny,
            nx,
            ucomp,
            units: "days since 0001-01-01 00:00:00".into(),
            calendar: Some("360_day".into()),
            fill_value: None,
            include_wind: true,
        }
    }

    fn with_units(mut self, units: &str) -> Self {
        self.units = units.into();
        self
    }

    fn with_calendar(mut self, calendar: Option<&str>) -> Self {
        self.calendar = calendar.map(Into::into);
        self
    }

    /// Replace one wind value with a fill value.
    fn with_fill_at(mut self, flat_index: usize, fv: f64) -> Self {
        self.ucomp[flat_index] = fv;
        self.fill_value = Some(fv);
        self
    }

    fn without_wind(mut self) -> Self {
        self.include_wind = false;
        self
    }

    /// Write the fixture to a NetCDF file and return the path.
    fn write(&self, dir: &Path) -> PathBuf {
        let path = dir.join("atmos_daily.nc");
        let mut file = netcdf::create(&path).expect("failed to create NetCDF file");

        file.add_dimension("time", self.nt).expect("add dim time");
        file.add_dimension("pfull", self.np).expect("add dim pfull");
        file.add_dimension("lat", self.ny).expect("add dim lat");
        file.add_dimension("lon", self.nx).expect("add dim lon");

        {
            let pfull: Vec<f64> = (0..self.np).map(|p| 10.0 * (p + 1) as f64).collect();
            let mut var = file
                .add_variable::<f64>("pfull", &["pfull"])
                .expect("add var pfull");
            var.put_values(&pfull, ..).expect("put pfull values");
        }
        {
            let lat: Vec<f64> = (0..self.ny).map(|y| -60.0 + 60.0 * y as f64).collect();
            let mut var = file
                .add_variable::<f64>("lat", &["lat"])
                .expect("add var lat");
            var.put_values(&lat, ..).expect("put lat values");
        }
        {
            let lon: Vec<f64> = (0..self.nx).map(|x| 90.0 * x as f64).collect();
            let mut var = file
                .add_variable::<f64>("lon", &["lon"])
                .expect("add var lon");
            var.put_values(&lon, ..).expect("put lon values");
        }
        {
            // Daily means stamped at midday.
            let time: Vec<f64> = (0..self.nt).map(|t| t as f64 + 0.5).collect();
            let mut var = file
                .add_variable::<f64>("time", &["time"])
                .expect("add var time");
            var.put_values(&time, ..).expect("put time values");
            var.put_attribute("units", self.units.as_str())
                .expect("add time units");
            if let Some(cal) = &self.calendar {
                var.put_attribute("calendar", cal.as_str())
                    .expect("add time calendar");
            }
        }
        if self.include_wind {
            let mut var = file
                .add_variable::<f64>("ucomp", &["time", "pfull", "lat", "lon"])
                .expect("add var ucomp");
            if let Some(fv) = self.fill_value {
                var.put_attribute("_FillValue", fv)
                    .expect("add ucomp _FillValue");
            }
            var.put_values(&self.ucomp, ..).expect("put ucomp values");
        }

        path
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn zonal_mean_over_longitude() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(5, 2, 3, 4).write(dir.path());

    let zw = read_zonal_wind(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(zw.field().dim(), (5, 2, 3));
    assert_eq!(zw.pfull(), &[10.0, 20.0]);
    assert_eq!(zw.lat(), &[-60.0, 0.0, 60.0]);

    let series = zw.series(1, 2).unwrap();
    for (t, v) in series.iter().enumerate() {
        assert_relative_eq!(*v, t as f64 + 10.0 + 200.0 + 1.5, epsilon = 1e-12);
    }
}

#[test]
fn dates_on_360_day_calendar() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(40, 1, 1, 2).write(dir.path());

    let zw = read_zonal_wind(&path, &ReaderConfig::default()).unwrap();
    let dates = zw.dates();
    assert_eq!(dates.len(), 40);
    assert_eq!(dates[0], Date360::new(1, 1, 1).unwrap());
    assert_eq!(dates[29], Date360::new(1, 1, 30).unwrap());
    assert_eq!(dates[30], Date360::new(1, 2, 1).unwrap());
    assert!(dates.windows(2).all(|w| w[1].serial() - w[0].serial() == 1));
}

#[test]
fn base_date_may_be_february_30() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(2, 1, 1, 1)
        .with_units("days since 2000-02-30")
        .write(dir.path());

    let zw = read_zonal_wind(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(zw.dates()[0], Date360::new(2000, 2, 30).unwrap());
    assert_eq!(zw.dates()[1], Date360::new(2000, 3, 1).unwrap());
}

#[test]
fn fill_values_become_nan() {
    let dir = tempdir().unwrap();
    // Cell (t=0, p=0, y=0, x=1).
    let path = FixtureBuilder::new(3, 1, 2, 2)
        .with_fill_at(1, 1.0e20)
        .write(dir.path());

    let zw = read_zonal_wind(&path, &ReaderConfig::default()).unwrap();
    let south = zw.series(0, 0).unwrap();
    assert!(south[0].is_nan());
    assert_relative_eq!(south[1], 1.5, epsilon = 1e-12);
    assert_relative_eq!(zw.series(0, 1).unwrap()[0], 100.5, epsilon = 1e-12);
}

#[test]
fn gregorian_calendar_rejected() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 1, 1, 1)
        .with_calendar(Some("noleap"))
        .write(dir.path());

    let err = read_zonal_wind(&path, &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(&err, IoError::UnsupportedCalendar { calendar } if calendar == "noleap"),
        "expected UnsupportedCalendar, got {err:?}",
    );
}

#[test]
fn missing_calendar_means_standard() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 1, 1, 1)
        .with_calendar(None)
        .write(dir.path());

    let err = read_zonal_wind(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedCalendar { .. }));
}

#[test]
fn non_day_units_rejected() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 1, 1, 1)
        .with_units("hours since 0001-01-01 00:00:00")
        .write(dir.path());

    let err = read_zonal_wind(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::InvalidTime { .. }));
}

#[test]
fn missing_wind_variable() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 1, 1, 1).without_wind().write(dir.path());

    let err = read_zonal_wind(&path, &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(&err, IoError::MissingVariable { name, .. } if name == "ucomp"),
        "expected MissingVariable, got {err:?}",
    );
}

#[test]
fn custom_wind_variable_name() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 1, 1, 1).write(dir.path());

    let config = ReaderConfig::default().with_wind_var("u");
    let err = read_zonal_wind(&path, &config).unwrap_err();
    assert!(matches!(err, IoError::MissingVariable { .. }));
}

#[test]
fn file_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.nc");

    let err = read_zonal_wind(&path, &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn invalid_config_rejects_early() {
    let path = Path::new("/tmp/strato_test_nonexistent_file.nc");
    let config = ReaderConfig::default().with_time_var("");

    let err = read_zonal_wind(path, &config).unwrap_err();
    assert!(matches!(err, IoError::InvalidConfig(_)));
}
