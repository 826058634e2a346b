//! Low-level NetCDF extraction helpers.

use std::path::Path;

use chrono::{NaiveTime, Timelike};
use netcdf::AttributeValue;
use strato_calendar::Date360;

use crate::error::IoError;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calendar names that denote twelve 30-day months.
const CALENDARS_360: [&str; 3] = ["360_day", "360", "thirty_day_months"];

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D `f64` variable, trying each alias in order.
///
/// Returns the data from the first alias that matches. If none match,
/// returns [`IoError::MissingVariable`] with the first alias as the name.
pub(crate) fn read_1d_f64(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }

    let name = aliases.first().copied().unwrap_or("unknown");
    Err(IoError::MissingVariable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

/// Read a 4-D `f64` variable and return the flattened data together with
/// its shape. Values equal to `_FillValue` or `missing_value` become NaN.
pub(crate) fn read_4d_f64(
    file: &netcdf::File,
    var_name: &str,
    path: &Path,
) -> Result<(Vec<f64>, [usize; 4]), IoError> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| IoError::MissingVariable {
            name: var_name.to_string(),
            path: path.to_path_buf(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 4 {
        return Err(IoError::DimensionMismatch {
            name: format!("{var_name} dimensions"),
            expected: 4,
            got: dims.len(),
        });
    }
    let shape = [dims[0].len(), dims[1].len(), dims[2].len(), dims[3].len()];

    let mut data = var.get_values::<f64, _>(..)?;
    let sentinels: Vec<f64> = ["_FillValue", "missing_value"]
        .iter()
        .filter_map(|name| numeric_attribute(&var, name))
        .collect();
    if !sentinels.is_empty() {
        for v in &mut data {
            if sentinels.contains(v) {
                *v = f64::NAN;
            }
        }
    }
    Ok((data, shape))
}

/// A numeric attribute as `f64`, if present.
fn numeric_attribute(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    match var.attribute_value(name)?.ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        _ => None,
    }
}

/// Read the time axis and convert it to 360-day calendar dates.
///
/// The variable must carry `units` of the form `"days since YYYY-MM-DD"`
/// (optionally followed by a clock time) and a 360-day `calendar`
/// attribute. A missing `calendar` means the CF default, `standard`.
pub(crate) fn read_time_axis(
    file: &netcdf::File,
    time_var: &str,
    path: &Path,
) -> Result<Vec<Date360>, IoError> {
    let var = file
        .variable(time_var)
        .ok_or_else(|| IoError::MissingVariable {
            name: time_var.to_string(),
            path: path.to_path_buf(),
        })?;

    let units: String = var
        .attribute_value("units")
        .ok_or_else(|| IoError::InvalidTime {
            reason: format!("time variable '{time_var}' has no 'units' attribute"),
        })?
        .map_err(|e| IoError::InvalidTime {
            reason: format!("failed to read 'units' attribute: {e}"),
        })?
        .try_into()
        .map_err(|e: netcdf::Error| IoError::InvalidTime {
            reason: format!("'units' attribute is not a string: {e}"),
        })?;

    let calendar = var
        .attribute_value("calendar")
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| "standard".to_string());
    if !is_360_day(&calendar) {
        return Err(IoError::UnsupportedCalendar { calendar });
    }

    let (base, clock) = parse_time_units(&units)?;
    let offsets = var.get_values::<f64, _>(..)?;
    offsets_to_dates(base, clock, &offsets)
}

/// Whether a CF calendar name denotes the 360-day calendar.
pub(crate) fn is_360_day(calendar: &str) -> bool {
    let name = calendar.trim().to_ascii_lowercase();
    CALENDARS_360.contains(&name.as_str())
}

/// Parses `"days since YYYY-MM-DD[ HH:MM:SS]"` into the base date and the
/// clock time as a fraction of a day.
pub(crate) fn parse_time_units(units: &str) -> Result<(Date360, f64), IoError> {
    let invalid = || IoError::InvalidTime {
        reason: format!("unexpected time units format: '{units}'"),
    };

    let parts: Vec<&str> = units.trim().splitn(3, ' ').collect();
    if parts.len() < 3 || !parts[1].eq_ignore_ascii_case("since") {
        return Err(invalid());
    }
    if !parts[0].eq_ignore_ascii_case("days") {
        return Err(IoError::InvalidTime {
            reason: format!("only day offsets are supported, got '{}'", parts[0]),
        });
    }

    let mut stamp = parts[2].split(|c: char| c == ' ' || c == 'T').filter(|s| !s.is_empty());
    let date_str = stamp.next().ok_or_else(invalid)?;
    let fields: Vec<&str> = date_str.splitn(3, '-').collect();
    if fields.len() != 3 {
        return Err(invalid());
    }
    let year: i32 = fields[0].parse().map_err(|_| invalid())?;
    let month: u8 = fields[1].parse().map_err(|_| invalid())?;
    let day: u8 = fields[2].parse().map_err(|_| invalid())?;
    let base = Date360::new(year, month, day)?;

    let clock = match stamp.next() {
        Some(t) => {
            let time = NaiveTime::parse_from_str(t, "%H:%M:%S%.f")
                .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
                .map_err(|e| IoError::InvalidTime {
                    reason: format!("failed to parse clock time '{t}': {e}"),
                })?;
            f64::from(time.num_seconds_from_midnight()) / SECONDS_PER_DAY
        }
        None => 0.0,
    };
    Ok((base, clock))
}

/// Converts day offsets from `base` (plus `clock` days) into dates.
///
/// Each timestamp is floored to the day it falls in.
pub(crate) fn offsets_to_dates(
    base: Date360,
    clock: f64,
    offsets: &[f64],
) -> Result<Vec<Date360>, IoError> {
    offsets
        .iter()
        .map(|&offset| {
            if !offset.is_finite() {
                return Err(IoError::InvalidTime {
                    reason: format!("non-finite time offset {offset}"),
                });
            }
            let days = (offset + clock).floor() as i64;
            Ok(Date360::from_serial(base.serial() + days))
        })
        .collect()
}
