use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level strato configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StratoConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// SSW and SPV detection settings.
    #[serde(default)]
    pub ssw: SswToml,

    /// QBO metric settings.
    #[serde(default)]
    pub qbo: QboToml,

    /// Jet latitude settings.
    #[serde(default)]
    pub jet: JetToml,
}

/// Loads the configuration at `path`, or defaults if the file is absent.
pub fn load(path: &Path) -> Result<StratoConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(StratoConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_wind_var")]
    pub wind_var: String,
    #[serde(default = "default_time_var")]
    pub time_var: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            wind_var: default_wind_var(),
            time_var: default_time_var(),
        }
    }
}

fn default_wind_var() -> String {
    "ucomp".to_string()
}
fn default_time_var() -> String {
    "time".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SswToml {
    #[serde(default = "default_ssw_level")]
    pub level: String,
    #[serde(default = "default_ssw_lat")]
    pub lat: f64,
    #[serde(default)]
    pub ssw_threshold: f64,
    #[serde(default = "default_spv_threshold")]
    pub spv_threshold: f64,
    #[serde(default = "default_min_separation")]
    pub min_separation: usize,
    #[serde(default = "default_spell_days")]
    pub init_westerlies: usize,
    #[serde(default = "default_spell_days")]
    pub final_easterlies: usize,
    #[serde(default = "default_anchor_month")]
    pub anchor_month: u8,
    #[serde(default = "default_anchor_day")]
    pub anchor_day: u8,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for SswToml {
    fn default() -> Self {
        Self {
            level: default_ssw_level(),
            lat: default_ssw_lat(),
            ssw_threshold: 0.0,
            spv_threshold: default_spv_threshold(),
            min_separation: default_min_separation(),
            init_westerlies: default_spell_days(),
            final_easterlies: default_spell_days(),
            anchor_month: default_anchor_month(),
            anchor_day: default_anchor_day(),
            parallel: false,
        }
    }
}

fn default_ssw_level() -> String {
    "10hPa".to_string()
}
fn default_ssw_lat() -> f64 {
    60.0
}
fn default_spv_threshold() -> f64 {
    48.0
}
fn default_min_separation() -> usize {
    20
}
fn default_spell_days() -> usize {
    10
}
fn default_anchor_month() -> u8 {
    7
}
fn default_anchor_day() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QboToml {
    #[serde(default)]
    pub lat: f64,
    #[serde(default = "default_tt_level")]
    pub tt_level: String,
    #[serde(default = "default_dd_levels")]
    pub dd_levels: Vec<String>,
    #[serde(default = "default_fft_level")]
    pub fft_level: String,
    #[serde(default = "default_smooth_months")]
    pub smooth_months: usize,
    #[serde(default = "default_lowpass_months")]
    pub lowpass_months: usize,
    #[serde(default = "default_lowpass_order")]
    pub lowpass_order: usize,
    #[serde(default)]
    pub deseasonalize: bool,
}

impl Default for QboToml {
    fn default() -> Self {
        Self {
            lat: 0.0,
            tt_level: default_tt_level(),
            dd_levels: default_dd_levels(),
            fft_level: default_fft_level(),
            smooth_months: default_smooth_months(),
            lowpass_months: default_lowpass_months(),
            lowpass_order: default_lowpass_order(),
            deseasonalize: false,
        }
    }
}

fn default_tt_level() -> String {
    "10hPa".to_string()
}
fn default_dd_levels() -> Vec<String> {
    vec!["20hPa".to_string(), "77hPa".to_string()]
}
fn default_fft_level() -> String {
    "27hPa".to_string()
}
fn default_smooth_months() -> usize {
    5
}
fn default_lowpass_months() -> usize {
    4
}
fn default_lowpass_order() -> usize {
    9
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JetToml {
    #[serde(default = "default_jet_levels")]
    pub levels: [usize; 2],
    #[serde(default = "default_true")]
    pub per_season: bool,
}

impl Default for JetToml {
    fn default() -> Self {
        Self {
            levels: default_jet_levels(),
            per_season: true,
        }
    }
}

fn default_jet_levels() -> [usize; 2] {
    [36, 39]
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: StratoConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.io.wind_var, "ucomp");
        assert_eq!(cfg.ssw.level, "10hPa");
        assert_eq!(cfg.ssw.lat, 60.0);
        assert_eq!(cfg.ssw.spv_threshold, 48.0);
        assert_eq!(cfg.ssw.anchor_month, 7);
        assert_eq!(cfg.qbo.dd_levels, vec!["20hPa", "77hPa"]);
        assert_eq!(cfg.qbo.lowpass_order, 9);
        assert_eq!(cfg.jet.levels, [36, 39]);
        assert!(cfg.jet.per_season);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: StratoConfig = toml::from_str(
            r#"
            [io]
            input = "atmos_daily.nc"

            [ssw]
            spv_threshold = 40.0
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.input, Some(PathBuf::from("atmos_daily.nc")));
        assert_eq!(cfg.ssw.spv_threshold, 40.0);
        assert!(cfg.ssw.parallel);
        assert_eq!(cfg.ssw.min_separation, 20);
        assert_eq!(cfg.qbo.tt_level, "10hPa");
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<StratoConfig>("[ssw]\nthreshold = 1.0").is_err());
        assert!(toml::from_str::<StratoConfig>("[plots]\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("strato.toml")).unwrap();
        assert_eq!(cfg.ssw.min_separation, 20);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strato.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[qbo]\nlat = 2.5\nsmooth_months = 3").unwrap();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.qbo.lat, 2.5);
        assert_eq!(cfg.qbo.smooth_months, 3);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strato.toml");
        std::fs::write(&path, "[ssw\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
