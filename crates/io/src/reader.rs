//! High-level reader for zonal-mean zonal wind.

use std::path::Path;

use ndarray::{Array3, Array4, ArrayView3, Axis};
use strato_calendar::Date360;
use tracing::{debug, info};

use crate::error::IoError;
use crate::netcdf_read;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading zonal wind from a model history file.
///
/// The [`Default`] implementation matches MiMA daily output: wind in
/// `ucomp`, pressure levels in `pfull`, and CF-style coordinate names.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// NetCDF variable name for the zonal wind (`time x level x lat x lon`).
    wind_var: String,
    /// Aliases to try when looking up the pressure-level coordinate.
    level_aliases: Vec<String>,
    /// Aliases to try when looking up latitude coordinates.
    lat_aliases: Vec<String>,
    /// Aliases to try when looking up longitude coordinates.
    lon_aliases: Vec<String>,
    /// NetCDF variable name for the time axis.
    time_var: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wind_var: "ucomp".into(),
            level_aliases: vec!["pfull".into(), "level".into(), "plev".into()],
            lat_aliases: vec!["lat".into(), "latitude".into()],
            lon_aliases: vec!["lon".into(), "longitude".into()],
            time_var: "time".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the zonal wind variable name.
    pub fn with_wind_var(mut self, name: impl Into<String>) -> Self {
        self.wind_var = name.into();
        self
    }

    /// Set the time variable name.
    pub fn with_time_var(mut self, name: impl Into<String>) -> Self {
        self.time_var = name.into();
        self
    }

    /// Replace the pressure-level coordinate aliases.
    pub fn with_level_aliases<S: Into<String>>(
        mut self,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.level_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the latitude coordinate aliases.
    pub fn with_lat_aliases<S: Into<String>>(
        mut self,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.lat_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the longitude coordinate aliases.
    pub fn with_lon_aliases<S: Into<String>>(
        mut self,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.lon_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the zonal wind variable name.
    pub fn wind_var(&self) -> &str {
        &self.wind_var
    }

    /// Returns the time variable name.
    pub fn time_var(&self) -> &str {
        &self.time_var
    }

    /// Validate that every name is usable.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if a variable name is blank or an
    /// alias list is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.wind_var.trim().is_empty() || self.time_var.trim().is_empty() {
            return Err(IoError::InvalidConfig(
                "wind and time variable names must not be empty".into(),
            ));
        }
        for (axis, aliases) in [
            ("level", &self.level_aliases),
            ("lat", &self.lat_aliases),
            ("lon", &self.lon_aliases),
        ] {
            if aliases.iter().all(|a| a.trim().is_empty()) {
                return Err(IoError::InvalidConfig(format!(
                    "at least one {axis} alias is required"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ZonalWind
// ---------------------------------------------------------------------------

/// Zonal-mean zonal wind on a 360-day calendar.
///
/// The field is laid out `[time][level][lat]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonalWind {
    field: Array3<f64>,
    pfull: Vec<f64>,
    lat: Vec<f64>,
    dates: Vec<Date360>,
}

impl ZonalWind {
    /// Builds a zonal-mean field from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DimensionMismatch`] if an axis length disagrees
    /// with the field shape.
    pub fn new(
        field: Array3<f64>,
        pfull: Vec<f64>,
        lat: Vec<f64>,
        dates: Vec<Date360>,
    ) -> Result<Self, IoError> {
        let (nt, np, ny) = field.dim();
        for (name, expected, got) in [
            ("time", nt, dates.len()),
            ("level", np, pfull.len()),
            ("lat", ny, lat.len()),
        ] {
            if expected != got {
                return Err(IoError::DimensionMismatch {
                    name: name.into(),
                    expected,
                    got,
                });
            }
        }
        Ok(Self {
            field,
            pfull,
            lat,
            dates,
        })
    }

    /// The `[time][level][lat]` field.
    pub fn field(&self) -> ArrayView3<'_, f64> {
        self.field.view()
    }

    /// Pressure levels (hPa), as stored in the file.
    pub fn pfull(&self) -> &[f64] {
        &self.pfull
    }

    /// Latitudes in degrees north.
    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    /// One date per time step.
    pub fn dates(&self) -> &[Date360] {
        &self.dates
    }

    /// Number of time steps.
    pub fn n_time(&self) -> usize {
        self.dates.len()
    }

    /// Index of the latitude closest to `degrees`; ties go to the lower
    /// index.
    pub fn nearest_lat(&self, degrees: f64) -> Option<usize> {
        if !degrees.is_finite() {
            return None;
        }
        self.lat
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, &l)| {
                let d = (l - degrees).abs();
                match best {
                    Some((_, bd)) if bd <= d => best,
                    _ => Some((i, d)),
                }
            })
            .map(|(i, _)| i)
    }

    /// Time series at one level and latitude.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::IndexOutOfRange`] if either index is outside the
    /// field.
    pub fn series(&self, level: usize, lat: usize) -> Result<Vec<f64>, IoError> {
        let (_, np, ny) = self.field.dim();
        if level >= np {
            return Err(IoError::IndexOutOfRange {
                axis: "level",
                index: level,
                len: np,
            });
        }
        if lat >= ny {
            return Err(IoError::IndexOutOfRange {
                axis: "lat",
                index: lat,
                len: ny,
            });
        }
        Ok(self
            .field
            .index_axis(Axis(1), level)
            .index_axis(Axis(1), lat)
            .to_vec())
    }
}

// ---------------------------------------------------------------------------
// read_zonal_wind
// ---------------------------------------------------------------------------

/// Read zonal wind from a NetCDF file and average it over longitude.
///
/// The wind variable must be 4-D (`time x level x lat x lon`), the time axis
/// must use day offsets on a 360-day calendar, and every coordinate must
/// match the corresponding wind dimension. Fill values become NaN and
/// propagate into the zonal mean.
///
/// # Errors
///
/// Returns [`IoError`] on missing files or variables, shape mismatches, or
/// time axes that are not on the 360-day calendar.
pub fn read_zonal_wind(path: &Path, config: &ReaderConfig) -> Result<ZonalWind, IoError> {
    config.validate()?;

    let file = netcdf_read::open_file(path)?;

    // -- Coordinates --------------------------------------------------------

    let level_refs: Vec<&str> = config.level_aliases.iter().map(String::as_str).collect();
    let lat_refs: Vec<&str> = config.lat_aliases.iter().map(String::as_str).collect();
    let lon_refs: Vec<&str> = config.lon_aliases.iter().map(String::as_str).collect();

    let pfull = netcdf_read::read_1d_f64(&file, &level_refs, path)?;
    let lat = netcdf_read::read_1d_f64(&file, &lat_refs, path)?;
    let lon = netcdf_read::read_1d_f64(&file, &lon_refs, path)?;

    // -- Time ---------------------------------------------------------------

    let dates = netcdf_read::read_time_axis(&file, &config.time_var, path)?;

    // -- 4-D wind -----------------------------------------------------------

    let (data, [nt, np, ny, nx]) = netcdf_read::read_4d_f64(&file, &config.wind_var, path)?;
    debug!(nt, np, ny, nx, var = %config.wind_var, "read wind variable");

    for (name, expected, got) in [
        ("time", nt, dates.len()),
        ("level", np, pfull.len()),
        ("lat", ny, lat.len()),
        ("lon", nx, lon.len()),
    ] {
        if expected != got {
            return Err(IoError::DimensionMismatch {
                name: name.into(),
                expected,
                got,
            });
        }
    }
    if nx == 0 {
        return Err(IoError::DimensionMismatch {
            name: "lon".into(),
            expected: 1,
            got: 0,
        });
    }

    let expected = nt * np * ny * nx;
    if data.len() != expected {
        return Err(IoError::DimensionMismatch {
            name: config.wind_var.clone(),
            expected,
            got: data.len(),
        });
    }
    let full = Array4::from_shape_vec((nt, np, ny, nx), data).map_err(|e| IoError::Netcdf {
        reason: format!("failed to shape '{}': {e}", config.wind_var),
    })?;
    let field = full
        .mean_axis(Axis(3))
        .ok_or_else(|| IoError::DimensionMismatch {
            name: "lon".into(),
            expected: 1,
            got: 0,
        })?;

    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        info!(
            path = %path.display(),
            n_time = nt,
            n_levels = np,
            n_lat = ny,
            first = %first,
            last = %last,
            "loaded zonal-mean wind"
        );
    }

    ZonalWind::new(field, pfull, lat, dates)
}
