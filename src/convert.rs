//! Pure conversion functions: TOML config structs -> crate API config types.

use std::ops::Range;

use anyhow::{Context, Result, bail};

use crate::config::*;

use strato_calendar::SeasonAnchor;
use strato_filter::LowPassConfig;
use strato_io::{ReaderConfig, mima_level_index};
use strato_qbo::TransitionConfig;
use strato_ssw::SswConfig;

/// Resolves a level given as a pressure label (`"10hPa"`) or a raw
/// model-level index (`"13"`).
pub fn parse_level(s: &str) -> Result<usize> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    match mima_level_index(s) {
        Some(index) => Ok(index),
        None => bail!("unknown pressure level: {s:?}"),
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_wind_var(&io.wind_var)
        .with_time_var(&io.time_var);
    cfg.validate().context("invalid [io] configuration")?;
    Ok(cfg)
}

/// Builds an [`SswConfig`] from the TOML SSW configuration.
pub fn build_ssw_config(ssw: &SswToml) -> Result<SswConfig> {
    let anchor = SeasonAnchor::new(ssw.anchor_month, ssw.anchor_day)
        .context("invalid [ssw] season anchor")?;
    let cfg = SswConfig::new()
        .with_ssw_threshold(ssw.ssw_threshold)
        .with_spv_threshold(ssw.spv_threshold)
        .with_min_separation(ssw.min_separation)
        .with_init_westerlies(ssw.init_westerlies)
        .with_final_easterlies(ssw.final_easterlies)
        .with_anchor(anchor)
        .with_parallel(ssw.parallel);
    cfg.validate().context("invalid [ssw] configuration")?;
    Ok(cfg)
}

/// Builds a [`TransitionConfig`] from the TOML QBO configuration.
pub fn build_transition_config(qbo: &QboToml) -> Result<TransitionConfig> {
    if qbo.smooth_months == 0 {
        bail!("[qbo] smooth_months must be >= 1");
    }
    Ok(TransitionConfig::new().with_smooth_months(qbo.smooth_months))
}

/// Builds a [`LowPassConfig`] from the TOML QBO configuration.
pub fn build_lowpass_config(qbo: &QboToml) -> Result<LowPassConfig> {
    let cfg = LowPassConfig::default()
        .with_order(qbo.lowpass_order)
        .with_n_months(qbo.lowpass_months);
    cfg.design().context("invalid [qbo] low-pass filter")?;
    Ok(cfg)
}

/// Builds the model-level averaging range for the jet diagnostic.
pub fn build_level_range(
    jet: &JetToml,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<Range<usize>> {
    let range = start.unwrap_or(jet.levels[0])..end.unwrap_or(jet.levels[1]);
    if range.is_empty() {
        bail!("empty jet level range {}..{}", range.start, range.end);
    }
    Ok(range)
}
